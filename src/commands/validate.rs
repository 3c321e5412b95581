use anyhow::Context;
use clap::CommandFactory;
use std::path::Path;

use crate::cli::{Cli, PlatformProfile};
use crate::services::layout;
use crate::services::spec;
use crate::services::validation::Validation;

/// Dispatch a `validate` invocation. The json flag wins when both are
/// given; with neither flag the subcommand help is printed and the run
/// counts as a success.
pub fn handle_validate(
    json: Option<&Path>,
    layout: Option<&Path>,
    platform: PlatformProfile,
) -> anyhow::Result<bool> {
    if let Some(path) = json {
        return validate_spec_file(path, platform);
    }
    if let Some(path) = layout {
        return Ok(validate_layout_dir(path));
    }

    let mut cmd = Cli::command();
    if let Some(sub) = cmd.find_subcommand_mut("validate") {
        sub.print_help()?;
    }
    Ok(true)
}

/// Load one spec document and run both rule groups over it. Field errors
/// are collected per group and printed in collection order; both groups
/// run regardless of the first group's verdict.
fn validate_spec_file(path: &Path, platform: PlatformProfile) -> anyhow::Result<bool> {
    let doc = spec::load(path).with_context(|| format!("validating {}", path.display()))?;

    let common = spec::check_common(&doc);
    for err in common.errors() {
        println!("{}\t{}", err.field, err.message);
    }

    let platform_specific = match platform {
        PlatformProfile::Linux => spec::check_linux(&doc),
        PlatformProfile::Generic => Validation::default(),
    };
    if platform_specific.has_errors() {
        println!("linux specific config errors");
        for err in platform_specific.errors() {
            println!("{}\t{}", err.field, err.message);
        }
    }

    if common.has_errors() || platform_specific.has_errors() {
        println!("NOTE: one or more errors found in {}", path.display());
        return Ok(false);
    }
    println!("{}: valid spec document", path.display());
    Ok(true)
}

fn validate_layout_dir(path: &Path) -> bool {
    match layout::validate_layout(path) {
        Ok(()) => {
            println!("{}: valid image layout", path.display());
            true
        }
        Err(err) => {
            println!("{}: invalid image layout: {}", path.display(), err);
            false
        }
    }
}
