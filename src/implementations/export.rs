use std::fs;
use std::path::Path;

use crate::errors::{ ReqmineError, ReqmineResult };
use crate::models::requirement::Requirement;

/// Byte-order mark so spreadsheet tools pick UTF-8
const BOM: &str = "\u{FEFF}";

const CSV_HEADERS: [&str; 7] = ["id", "kind", "priority", "status", "text", "rationale", "evidence"];

/// Extensions accepted for specification sources
pub const SOURCE_EXTENSIONS: [&str; 2] = ["tla", "txt"];

/// Read a `.tla` or `.txt` specification source
pub fn read_source(path: &Path) -> ReqmineResult<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !SOURCE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ReqmineError::InvalidInput("Please upload a .tla or .txt file".to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

pub fn to_json(requirements: &[Requirement]) -> ReqmineResult<String> {
    Ok(serde_json::to_string_pretty(requirements)?)
}

fn csv_field(value: &str) -> String {
    let flat = value.replace("\r\n", " ").replace('\n', " ");
    if flat.contains(|c| matches!(c, '"' | ',' | '\n')) {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

pub fn to_csv(requirements: &[Requirement]) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    for r in requirements {
        let row = [
            r.id.clone(),
            r.kind.to_string(),
            r.priority.to_string(),
            r.status.to_string(),
            r.text.clone(),
            r.rationale.clone(),
            r.evidence.clone().unwrap_or_default(),
        ];
        lines.push(row.iter().map(|f| csv_field(f)).collect::<Vec<_>>().join(","));
    }
    format!("{}{}", BOM, lines.join("\n"))
}

pub fn write_json(path: &Path, requirements: &[Requirement]) -> ReqmineResult<()> {
    fs::write(path, to_json(requirements)?)?;
    Ok(())
}

pub fn write_csv(path: &Path, requirements: &[Requirement]) -> ReqmineResult<()> {
    fs::write(path, to_csv(requirements))?;
    Ok(())
}
