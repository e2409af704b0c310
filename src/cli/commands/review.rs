use anyhow::Result;

use reqmine::{ Kind, Workbench };

use crate::cli::ui;

const ACTIONS: [&str; 8] = [
    "Add requirement",
    "Edit requirement text",
    "Remove requirement",
    "Refresh suggestions",
    "Rewrite NFR to temporal logic",
    "Prove one (local heuristic)",
    "Clear all",
    "Done",
];

fn pick_requirement(bench: &Workbench) -> Result<Option<String>> {
    if bench.requirements().is_empty() {
        ui::print_warning("No requirements to choose from.");
        return Ok(None);
    }
    let items: Vec<String> = bench
        .requirements()
        .iter()
        .map(|r| format!("[{}] {}", r.kind, r.text))
        .collect();
    let idx = ui::select("Select requirement", &items)?;
    Ok(bench.requirements().get(idx).map(|r| r.id.clone()))
}

/// Interactive review loop over the working set
pub fn run(bench: &mut Workbench) -> Result<()> {
    let actions: Vec<String> = ACTIONS.iter().map(|s| s.to_string()).collect();
    loop {
        match ui::select("What next?", &actions)? {
            0 => {
                let id = bench.add_manual();
                let text = ui::input_text("Requirement text", "The system shall ...")?;
                bench.update_text(&id, text);
                bench.refresh_suggestions(&id);
            }
            1 => {
                if let Some(id) = pick_requirement(bench)? {
                    let current = bench.get(&id).map(|r| r.text.clone()).unwrap_or_default();
                    let text = ui::input_text("New text", &current)?;
                    bench.update_text(&id, text);
                }
            }
            2 => {
                if let Some(id) = pick_requirement(bench)? {
                    bench.remove(&id);
                }
            }
            3 => {
                if let Some(id) = pick_requirement(bench)? {
                    bench.refresh_suggestions(&id);
                    if let Some(r) = bench.get(&id) {
                        ui::print_requirement(0, r);
                    }
                }
            }
            4 => {
                if let Some(id) = pick_requirement(bench)? {
                    if bench.get(&id).map(|r| r.kind) != Some(Kind::NonFunctional) {
                        ui::print_warning("Temporal rewrites apply to non-functional requirements.");
                        continue;
                    }
                    if let Some(formal) = bench.formalize(&id) {
                        ui::print_formalization(formal);
                    }
                }
            }
            5 => {
                if let Some(id) = pick_requirement(bench)? {
                    if let Some(status) = bench.prove_one_local(&id) {
                        ui::print_info(&format!("Status: {}", status));
                    }
                }
            }
            6 => {
                if ui::confirm_action("Remove all requirements?")? {
                    bench.clear();
                }
            }
            _ => break,
        }
    }
    Ok(())
}
