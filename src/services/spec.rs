use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::domain::models::Spec;
use crate::services::validation::Validation;

/// Permissive semantic-version shape: up to two optional numeric groups
/// followed by either a literal wildcard or a numeric patch segment.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.)?(\d+\.)?(\*|\d+)$").unwrap());

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("error reading spec file: {0}")]
    Read(#[source] std::io::Error),
    #[error("spec file is not valid json: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Load one spec document. Malformed bytes surface as a distinct decode
/// error rather than a zero-valued document.
pub fn load(path: &Path) -> Result<Spec, LoadError> {
    let raw = fs::read_to_string(path).map_err(LoadError::Read)?;
    serde_json::from_str(&raw).map_err(LoadError::Decode)
}

/// Portable rule group: version shape, platform identifiers, process
/// descriptor (when present), root path, and mount descriptors. All
/// checks run; failures accumulate in evaluation order.
pub fn check_common(doc: &Spec) -> Validation {
    let mut v = Validation::default();

    v.required(&doc.version, "version");
    v.matches(&doc.version, &VERSION_RE, "version");
    v.required(&doc.platform.os, "platform.os");
    v.required(&doc.platform.arch, "platform.arch");

    if let Some(process) = &doc.process {
        for (i, env) in process.env.iter().enumerate() {
            v.required(env, &format!("process.env[{i}]"));
        }
        v.required_nonzero(process.user.uid, "process.user.uid");
        v.required_nonzero(process.user.gid, "process.user.gid");
    }

    v.required(&doc.root.path, "root.path");

    for (i, mount) in doc.mounts.iter().enumerate() {
        v.required(&mount.kind, &format!("mounts[{i}].type"));
        v.required(&mount.source, &format!("mounts[{i}].source"));
        v.required(&mount.destination, &format!("mounts[{i}].destination"));
    }

    v
}

/// Linux rule group: every namespace descriptor must carry a type.
pub fn check_linux(doc: &Spec) -> Validation {
    let mut v = Validation::default();

    if let Some(linux) = &doc.linux {
        for (i, ns) in linux.namespaces.iter().enumerate() {
            v.required(&ns.kind, &format!("linux.namespaces[{i}].type"));
        }
    }

    v
}
