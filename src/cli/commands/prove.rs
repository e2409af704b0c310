use anyhow::Result;
use std::path::{ Path, PathBuf };
use tokio_util::sync::CancellationToken;

use reqmine::implementations::export::write_json;
use reqmine::{ HttpProver, ProveOutcome, ReqmineConfig, Workbench };

use crate::cli::commands::load_source;
use crate::cli::ui;

pub struct ProveArgs<'a> {
    pub source: Option<&'a Path>,
    pub demo: bool,
    pub prover_url: Option<&'a str>,
    pub timeout_ms: Option<u64>,
    pub local: bool,
    pub json: Option<&'a PathBuf>,
}

/// Proof status command
pub async fn execute(config: &ReqmineConfig, args: ProveArgs<'_>) -> Result<()> {
    ui::print_header("Proving Requirements");

    let source = load_source(args.source, args.demo)?;
    let mut bench = Workbench::new(source, reqmine::linguistic_tool(config.analysis.linguistics))
        .with_step_ms(config.analysis.step_ms);
    bench.analyze();
    bench.select_all(true);

    if args.local {
        let changed = bench.prove_local();
        ui::print_info(&format!("Local heuristic updated {} requirement(s)", changed));
    } else {
        let settings = config.resolve_prover(args.prover_url, args.timeout_ms)?;
        let prover = HttpProver::new(&settings)?;
        ui::print_info(&format!("Using prover at {}", prover.url()));

        let cancel = CancellationToken::new();
        let ctrl_c = cancel.clone();
        let watcher = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                ctrl_c.cancel();
            }
        });

        let spinner = ui::spinner_with_message("Waiting for prover...");
        let outcome = bench.prove_remote(&prover, settings.timeout, &cancel).await;
        watcher.abort();

        match outcome {
            ProveOutcome::Remote { evidence } => {
                spinner.finish_with_message("Prover finished");
                ui::print_success(&evidence);
            }
            ProveOutcome::Fallback { advisory, cause } => {
                spinner.finish_with_message("Prover unavailable");
                ui::print_warning(&advisory);
                ui::print_info(&format!("Cause: {}", cause));
            }
        }
    }

    ui::print_stats(&bench.stats());
    println!();
    for (i, r) in bench.requirements().iter().enumerate() {
        ui::print_requirement(i, r);
    }

    if let Some(path) = args.json {
        write_json(path, bench.requirements())?;
        ui::print_success(&format!("Requirements saved to {}", path.display()));
    }
    Ok(())
}
