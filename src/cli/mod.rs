use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "reqmine",
    about = "Mines and formalizes requirements from annotated TLA+ specifications",
    version,
    author,
    long_about = None
)]
pub struct ReqmineCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract and classify requirements from a specification
    Analyze {
        /// Specification source (.tla or .txt)
        #[arg(required_unless_present = "demo")]
        source: Option<PathBuf>,

        /// Use the bundled TrafficLight module
        #[arg(long)]
        demo: bool,

        /// Only show this kind (functional, non-functional)
        #[arg(short, long)]
        kind: Option<String>,

        /// Only show this priority (high, medium, low)
        #[arg(short, long)]
        priority: Option<String>,

        /// Case-insensitive text search
        #[arg(short, long, default_value = "")]
        query: String,

        /// Attach temporal rewrites to non-functional requirements
        #[arg(long)]
        formalize: bool,

        /// Write the requirements as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the requirements as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Review and edit the requirements interactively
        #[arg(short, long)]
        interactive: bool,
    },

    /// Extract requirements and assign proof status
    Prove {
        /// Specification source (.tla or .txt)
        #[arg(required_unless_present = "demo")]
        source: Option<PathBuf>,

        /// Use the bundled TrafficLight module
        #[arg(long)]
        demo: bool,

        /// Prover endpoint
        #[arg(long)]
        prover_url: Option<String>,

        /// Prover timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Skip the remote prover and use the local heuristic
        #[arg(long)]
        local: bool,

        /// Write the requirements as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Rewrite a non-functional sentence into a TLA+ monitor
    Rewrite {
        /// The requirement sentence
        sentence: String,

        /// Milliseconds per step
        #[arg(long)]
        step_ms: Option<u64>,
    },

    /// Run the prover HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,

        /// Evaluation budget per request in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}
