use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Path of the config document inside a layout, relative to its root.
pub const CONFIG_FILE: &str = "config.json";
/// Path of the root filesystem directory inside a layout.
pub const ROOTFS_DIR: &str = "rootfs";

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("error accessing layout: {0}")]
    Access(#[source] std::io::Error),
    #[error("given path {0:?} is not a directory")]
    NotADirectory(String),
    #[error("error walking layout: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("no config json file found in layout")]
    NoConfig,
    #[error("no rootfs found in layout")]
    NoRootfs,
    #[error("rootfs is not a directory")]
    RootfsNotDirectory,
    #[error("error reading the layout: {0}")]
    Read(#[source] std::io::Error),
    #[error("unrecognized file path in layout: {0:?}")]
    UnrecognizedPath(String),
}

/// Walk an image layout once, classifying every entry by its
/// root-relative path, then apply the structural acceptance rules.
/// Classification is exact-match on the relative path, so deeper entries
/// that happen to be named `config.json` or `rootfs` are ordinary files.
pub fn validate_layout(root: &Path) -> Result<(), LayoutError> {
    let meta = fs::metadata(root).map_err(LayoutError::Access)?;
    if !meta.is_dir() {
        return Err(LayoutError::NotADirectory(root.display().to_string()));
    }

    let mut config: Option<File> = None;
    let mut rootfs_ok = false;
    let mut files: Vec<String> = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_string_lossy()
            .into_owned();
        match rel.as_str() {
            "" => {}
            CONFIG_FILE => {
                config = Some(File::open(entry.path()).map_err(LayoutError::Access)?);
            }
            ROOTFS_DIR => {
                if !entry.file_type().is_dir() {
                    return Err(LayoutError::RootfsNotDirectory);
                }
                rootfs_ok = true;
            }
            _ => files.push(rel),
        }
    }

    check_layout(config, rootfs_ok, &files)
}

/// Post-walk acceptance. The config stream is drained to confirm it is
/// readable and dropped exactly once on every return path.
fn check_layout(config: Option<File>, rootfs_ok: bool, files: &[String]) -> Result<(), LayoutError> {
    let mut stream = config.ok_or(LayoutError::NoConfig)?;
    if !rootfs_ok {
        return Err(LayoutError::NoRootfs);
    }

    io::copy(&mut stream, &mut io::sink()).map_err(LayoutError::Read)?;

    for f in files {
        if !f.starts_with(ROOTFS_DIR) {
            return Err(LayoutError::UnrecognizedPath(f.clone()));
        }
    }
    Ok(())
}
