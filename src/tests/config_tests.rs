use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

use crate::config::linguistic_tool;
use crate::errors::ReqmineError;
use crate::implementations::config::{ ConfigError, LinguisticsMode, ReqmineConfig };
use crate::tests::setup;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    setup();

    let config = ReqmineConfig::load(None).unwrap();
    assert_eq!(config.prover.url, None);
    assert_eq!(config.prover.timeout_ms, 12_000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8787);
    assert_eq!(config.server.timeout_ms, 10_000);
    assert_eq!(config.analysis.step_ms, 50);
    assert_eq!(config.analysis.linguistics, LinguisticsMode::Lexicon);
}

#[test]
fn test_partial_yaml_file() {
    setup();

    let file = write_config(
        "prover:\n  url: http://prover.test/api/prove\n  timeout_ms: 5000\nanalysis:\n  step_ms: 25\n  linguistics: none\n"
    );
    let config = ReqmineConfig::from_file(file.path()).unwrap();

    assert_eq!(config.prover.url.as_deref(), Some("http://prover.test/api/prove"));
    assert_eq!(config.prover.timeout_ms, 5000);
    assert_eq!(config.analysis.step_ms, 25);
    assert_eq!(config.analysis.linguistics, LinguisticsMode::None);
    // sections left out keep their defaults
    assert_eq!(config.server.port, 8787);

    let tool = linguistic_tool(config.analysis.linguistics);
    assert!(tool.segment("One. Two.").unwrap().is_empty());
}

#[test]
fn test_flags_take_precedence() {
    let file = write_config("prover:\n  url: http://prover.test/api/prove\n  timeout_ms: 5000\n");
    let config = ReqmineConfig::from_file(file.path()).unwrap();

    let settings = config.resolve_prover(Some("http://flag.test/api/prove"), Some(250)).unwrap();
    assert_eq!(settings.url, "http://flag.test/api/prove");
    assert_eq!(settings.timeout, Duration::from_millis(250));

    let server = config.resolve_server(Some("0.0.0.0"), Some(9000), Some(75)).unwrap();
    assert_eq!(server.host, "0.0.0.0");
    assert_eq!(server.port, 9000);
    assert_eq!(server.timeout_ms, 75);
}

#[test]
fn test_invalid_files() {
    setup();

    let file = write_config("prover: [not, a, map]\n");
    assert!(matches!(ReqmineConfig::from_file(file.path()), Err(ConfigError::ParseError(_))));

    let missing = ReqmineConfig::load(Some(std::path::Path::new("/nonexistent/reqmine.yaml")));
    assert!(matches!(missing, Err(ConfigError::FileReadError(_))));

    // converts into the crate error for `?` in callers
    let err: ReqmineError = missing.unwrap_err().into();
    assert!(err.to_string().starts_with("Configuration error"));
}
