use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ocivet", version, about = "Container image spec validation CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a spec document or an on-disk image layout
    Validate {
        #[arg(long, value_name = "FILE", help = "json config file to validate")]
        json: Option<PathBuf>,
        #[arg(long, value_name = "DIR", help = "image layout directory to validate")]
        layout: Option<PathBuf>,
        #[arg(
            long,
            value_enum,
            default_value_t = PlatformProfile::Linux,
            help = "platform profile selecting the platform-specific rule group"
        )]
        platform: PlatformProfile,
    },
    /// Decode a spec document and pretty-print it
    Show { path: PathBuf },
    /// Run the container under test (reserved)
    Test,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformProfile {
    /// Common rules plus the linux-specific rule group
    Linux,
    /// Common rules only
    Generic,
}
