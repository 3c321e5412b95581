use anyhow::Context;
use std::path::Path;

use crate::services::spec;

/// Decode a spec document and pretty-print it. Decode failures surface
/// the same distinct error as the validate flow.
pub fn handle_show(path: &Path) -> anyhow::Result<bool> {
    let doc = spec::load(path).with_context(|| format!("showing {}", path.display()))?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(true)
}
