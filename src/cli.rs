use clap::{Parser, Subcommand};

use crate::domain::constants::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "conclave", version, about = "Merge gates for a shared repository state document")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Configuration override file (absent keys inherit defaults)"
    )]
    pub config: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Gate {
        #[arg(long, help = "Compare against this revision instead of the environment-derived base")]
        base: Option<String>,
    },
    Sync {
        #[arg(long, default_value_t = false, help = "Verify the artifact instead of writing it")]
        check: bool,
    },
}
