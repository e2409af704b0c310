use anyhow::Result;
use log::info;
use std::path::{ Path, PathBuf };

use reqmine::implementations::export::{ write_csv, write_json };
use reqmine::{ Kind, ReqmineConfig, RequirementFilter, Workbench };

use crate::cli::commands::{ load_source, parse_kind, parse_priority, review };
use crate::cli::ui;

pub struct AnalyzeArgs<'a> {
    pub source: Option<&'a Path>,
    pub demo: bool,
    pub kind: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub query: &'a str,
    pub formalize: bool,
    pub json: Option<&'a PathBuf>,
    pub csv: Option<&'a PathBuf>,
    pub interactive: bool,
}

/// Requirement extraction command
pub async fn execute(config: &ReqmineConfig, args: AnalyzeArgs<'_>) -> Result<()> {
    ui::print_header("Analyzing Specification");

    let filter = RequirementFilter {
        kind: parse_kind(args.kind)?,
        priority: parse_priority(args.priority)?,
        query: args.query.to_string(),
    };

    let source = load_source(args.source, args.demo)?;
    let mut bench = Workbench::new(source, reqmine::linguistic_tool(config.analysis.linguistics))
        .with_step_ms(config.analysis.step_ms);

    let count = bench.analyze();
    if count == 0 {
        ui::print_warning("No requirement candidates found. Add (* ... *) annotations or THEOREM lines.");
        return Ok(());
    }
    ui::print_success(&format!("Extracted {} requirement(s)", count));

    if args.formalize {
        let ids: Vec<String> = bench
            .requirements()
            .iter()
            .filter(|r| r.kind == Kind::NonFunctional)
            .map(|r| r.id.clone())
            .collect();
        for id in &ids {
            bench.formalize(id);
        }
        info!("Formalized {} non-functional requirement(s)", ids.len());
    }

    if args.interactive {
        review::run(&mut bench)?;
    }

    ui::print_stats(&bench.stats());
    println!();
    for (i, r) in bench.filter(&filter).into_iter().enumerate() {
        ui::print_requirement(i, r);
    }

    if let Some(path) = args.json {
        write_json(path, bench.requirements())?;
        ui::print_success(&format!("Requirements saved to {}", path.display()));
    }
    if let Some(path) = args.csv {
        write_csv(path, bench.requirements())?;
        ui::print_success(&format!("Requirements saved to {}", path.display()));
    }

    Ok(())
}
