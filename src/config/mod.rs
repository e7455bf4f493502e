pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lesson-exercises")]
#[command(about = "Introductory console exercises: hello world, input and number conversion")]
pub struct CliConfig {
    /// Optional TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the exercises in the catalog
    List,

    /// Show one catalog entry
    Show {
        id: String,

        /// Also print the text of every file listed for the exercise
        #[arg(long)]
        source: bool,
    },

    /// Run one exercise on this terminal
    Run { id: String },
}
