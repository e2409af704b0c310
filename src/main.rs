use anyhow::Result;
use clap::Parser;
use log::{ debug, info };

use reqmine::ReqmineConfig;

mod cli;
use cli::commands::{ analyze, prove, rewrite, serve };
use cli::{ Commands, ReqmineCli };

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = ReqmineCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = ReqmineConfig::load(cli.config.as_deref())?;

    let result = match &cli.command {
        Commands::Analyze {
            source,
            demo,
            kind,
            priority,
            query,
            formalize,
            json,
            csv,
            interactive,
        } => {
            analyze::execute(&config, analyze::AnalyzeArgs {
                source: source.as_deref(),
                demo: *demo,
                kind: kind.as_deref(),
                priority: priority.as_deref(),
                query,
                formalize: *formalize,
                json: json.as_ref(),
                csv: csv.as_ref(),
                interactive: *interactive,
            }).await
        }

        Commands::Prove { source, demo, prover_url, timeout_ms, local, json } => {
            prove::execute(&config, prove::ProveArgs {
                source: source.as_deref(),
                demo: *demo,
                prover_url: prover_url.as_deref(),
                timeout_ms: *timeout_ms,
                local: *local,
                json: json.as_ref(),
            }).await
        }

        Commands::Rewrite { sentence, step_ms } => rewrite::execute(&config, sentence, *step_ms),

        Commands::Serve { host, port, timeout_ms } => {
            serve::execute(&config, host.as_deref(), *port, *timeout_ms).await
        }
    };

    if let Err(e) = &result {
        cli::ui::print_error(&e.to_string());
    }
    result
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
