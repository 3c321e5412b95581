use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub fn cmd() -> Command {
    Command::cargo_bin("ocivet").expect("binary under test")
}

pub fn write_spec(dir: &Path, body: &Value) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(body).expect("serialize spec"),
    )
    .expect("write spec");
    path
}

pub fn valid_spec() -> Value {
    json!({
        "version": "1.0.0",
        "platform": {"os": "linux", "arch": "amd64"},
        "process": {"env": ["PATH=/usr/bin"], "user": {"uid": 1000, "gid": 1000}},
        "root": {"path": "rootfs"},
        "mounts": [{"type": "proc", "source": "proc", "destination": "/proc"}],
        "linux": {"namespaces": [{"type": "pid"}, {"type": "mount"}]}
    })
}

/// Minimal conforming layout: a `config.json` holding `{}` plus an empty
/// `rootfs/` directory.
pub fn make_layout(base: &Path) -> PathBuf {
    let layout = base.join("layout");
    fs::create_dir_all(layout.join("rootfs")).expect("create rootfs");
    fs::write(layout.join("config.json"), "{}").expect("write layout config");
    layout
}
