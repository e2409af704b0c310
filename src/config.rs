pub use crate::implementations::config::{
    AnalysisConfig,
    LinguisticsMode,
    ProverConfig,
    ProverSettings,
    ReqmineConfig,
    ServerConfig,
};

use crate::implementations::linguistics::{ LexiconLinguistics, NullLinguistics };
use crate::traits::LinguisticTool;

/// Build the linguistic capability selected by configuration
pub fn linguistic_tool(mode: LinguisticsMode) -> Box<dyn LinguisticTool> {
    match mode {
        LinguisticsMode::Lexicon => Box::new(LexiconLinguistics),
        LinguisticsMode::None => Box::new(NullLinguistics),
    }
}
