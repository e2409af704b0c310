use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, Select };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use reqmine::{ Formalization, Kind, Priority, ProofStatus, Requirement, RequirementStats };

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn term_width() -> usize {
    (Term::stdout().size().1 as usize).max(40)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

fn priority_badge(priority: Priority) -> ColoredString {
    let label = format!("[{}]", priority);
    match priority {
        Priority::High => label.red().bold(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.green(),
    }
}

fn kind_badge(kind: Kind) -> ColoredString {
    match kind {
        Kind::Functional => kind.to_string().blue(),
        Kind::NonFunctional => kind.to_string().magenta(),
    }
}

fn status_badge(status: ProofStatus) -> ColoredString {
    match status {
        ProofStatus::Proved => "✓ Proved".green().bold(),
        ProofStatus::Failed => "✗ Failed".red().bold(),
        ProofStatus::Unclear => "? Unclear".yellow(),
        ProofStatus::Unproven => "· Unproven".dimmed(),
    }
}

/// Print one requirement card
pub fn print_requirement(index: usize, r: &Requirement) {
    let width = term_width().saturating_sub(6);
    println!(
        "{:>3}. {} {} {}",
        index + 1,
        priority_badge(r.priority),
        kind_badge(r.kind),
        status_badge(r.status)
    );
    for line in wrap(&r.text, width) {
        println!("     {}", line.bold());
    }
    println!("     {} {}", "Why:".dimmed(), r.rationale.dimmed());
    if let Some(evidence) = &r.evidence {
        println!("     {} {}", "Evidence:".dimmed(), evidence);
    }
    for s in &r.suggestions {
        for (i, line) in wrap(s, width.saturating_sub(2)).iter().enumerate() {
            let bullet = if i == 0 { "-" } else { " " };
            println!("     {} {}", bullet.cyan(), line);
        }
    }
    if let Some(formal) = &r.formalization {
        print_formalization(formal);
    }
    println!();
}

pub fn print_formalization(formal: &Formalization) {
    println!("     {}", formal.title.cyan().bold());
    for line in formal.tla.lines() {
        println!("       {}", line);
    }
    for assumption in &formal.assumptions {
        println!("     {} {}", "Assumes:".dimmed(), assumption);
    }
}

pub fn print_stats(stats: &RequirementStats) {
    println!(
        "{} {}  {} {}  {} {}  {} {}/{}/{}  {} {}  {} {}",
        "Total".bold(),
        stats.total,
        "Functional".blue(),
        stats.functional,
        "Non-functional".magenta(),
        stats.non_functional,
        "H/M/L".bold(),
        stats.high,
        stats.medium,
        stats.low,
        "Proved".green(),
        stats.proved,
        "Failed".red(),
        stats.failed
    );
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Pick one entry from a list
pub fn select(prompt: &str, items: &[String]) -> std::io::Result<usize> {
    Select::with_theme(&get_theme())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

pub fn input_text(prompt: &str, initial: &str) -> std::io::Result<String> {
    Input::with_theme(&get_theme())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
