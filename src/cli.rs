//! Command-line arguments

use crate::validation::FormVariant;
use clap::Parser;

/// Terminal registration form with declarative validation
#[derive(Debug, Parser)]
#[command(name = "signup-tui", version, about, long_about = None)]
pub struct Cli {
    /// Form to show: basic, credentials or full (overrides the config file)
    #[arg(value_name = "VARIANT")]
    pub variant: Option<FormVariant>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}
