// src/cli/commands.rs
use clap::Subcommand;

use crate::models::DEFAULT_REQUESTED_LENGTH;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Approximate password length (8-50)
        #[arg(long, short, default_value_t = DEFAULT_REQUESTED_LENGTH)]
        length: usize,

        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,

        /// Output JSON instead of plain text (for scripting)
        #[arg(long)]
        json: bool,
    },

    /// Show the word catalog distribution
    Catalog,
}
