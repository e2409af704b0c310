use anyhow::Result;

use reqmine::implementations::classifier::classify_kind;
use reqmine::{ rewrite_with_step, Kind, ReqmineConfig };

use crate::cli::ui;

/// Temporal rewrite command
pub fn execute(config: &ReqmineConfig, sentence: &str, step_ms: Option<u64>) -> Result<()> {
    ui::print_header("Temporal Rewrite");

    let tool = reqmine::linguistic_tool(config.analysis.linguistics);
    if classify_kind(sentence, tool.as_ref()).kind == Kind::Functional {
        ui::print_warning("This reads like a functional requirement; rewriting anyway.");
    }

    let formal = rewrite_with_step(sentence, step_ms.unwrap_or(config.analysis.step_ms));
    ui::print_formalization(&formal);
    Ok(())
}
