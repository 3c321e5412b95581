use serde::{Deserialize, Serialize};

/// Decoded configuration document. Fields the rule groups do not consume
/// are ignored by the decoder; missing fields decode to empty values so
/// the presence checks can name them.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Spec {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub platform: Platform,
    pub process: Option<Process>,
    #[serde(default)]
    pub root: Root,
    #[serde(default)]
    pub mounts: Vec<Mount>,
    pub linux: Option<Linux>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Platform {
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub arch: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Process {
    #[serde(default)]
    pub env: Vec<String>,
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct User {
    #[serde(default)]
    pub uid: u32,
    #[serde(default)]
    pub gid: u32,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Root {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Mount {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Linux {
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Namespace {
    #[serde(default, rename = "type")]
    pub kind: String,
}
