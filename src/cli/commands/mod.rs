use anyhow::{ anyhow, Result };
use std::path::Path;

use reqmine::demo::DEMO_SPEC;
use reqmine::implementations::export::read_source;
use reqmine::{ Kind, Priority };

pub mod analyze;
pub mod prove;
pub mod review;
pub mod rewrite;
pub mod serve;

/// Load the specification text from a file, or the bundled demo
pub fn load_source(path: Option<&Path>, demo: bool) -> Result<String> {
    match (path, demo) {
        (_, true) => Ok(DEMO_SPEC.to_string()),
        (Some(p), false) => Ok(read_source(p)?),
        (None, false) => Err(anyhow!("No specification source given (pass a file or --demo)")),
    }
}

pub fn parse_kind(kind: Option<&str>) -> Result<Option<Kind>> {
    match kind.map(|k| k.to_lowercase()) {
        None => Ok(None),
        Some(k) => match k.as_str() {
            "all" => Ok(None),
            "functional" | "f" => Ok(Some(Kind::Functional)),
            "non-functional" | "nonfunctional" | "nfr" | "nf" => Ok(Some(Kind::NonFunctional)),
            _ => Err(anyhow!("Unsupported kind: {}", k)),
        },
    }
}

pub fn parse_priority(priority: Option<&str>) -> Result<Option<Priority>> {
    match priority.map(|p| p.to_lowercase()) {
        None => Ok(None),
        Some(p) => match p.as_str() {
            "all" => Ok(None),
            "high" => Ok(Some(Priority::High)),
            "medium" => Ok(Some(Priority::Medium)),
            "low" => Ok(Some(Priority::Low)),
            _ => Err(anyhow!("Unsupported priority: {}", p)),
        },
    }
}
