use log::info;

use crate::errors::{ ReqmineError, ReqmineResult };
use crate::traits::LinguisticTool;

pub mod classifier_tests;
pub mod config_tests;
pub mod extractor_tests;
pub mod server_tests;
pub mod temporal_tests;

// Setup function to initialize logging
pub fn setup() {
    // Initialize logger if not already initialized
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }
}

/// A linguistic tool that is installed but fails on every call
pub struct BrokenLinguistics;

impl LinguisticTool for BrokenLinguistics {
    fn segment(&self, _text: &str) -> ReqmineResult<Vec<String>> {
        Err(ReqmineError::LinguisticUnavailable("model not loaded".to_string()))
    }

    fn verbs(&self, _text: &str) -> ReqmineResult<Vec<String>> {
        Err(ReqmineError::LinguisticUnavailable("model not loaded".to_string()))
    }

    fn nouns(&self, _text: &str) -> ReqmineResult<Vec<String>> {
        Err(ReqmineError::LinguisticUnavailable("model not loaded".to_string()))
    }
}
