pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod demo;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ linguistic_tool, LinguisticsMode, ProverSettings, ReqmineConfig };
pub use errors::{ RecoverableError, ReqmineError, ReqmineResult };
pub use implementations::classifier::{ classify_kind, detect_cluster, score_priority, Classification };
pub use implementations::extractor::extract_candidates;
pub use implementations::linguistics::{ LexiconLinguistics, NullLinguistics };
pub use implementations::proof_heuristic::{ decide_status, mock_prove };
pub use implementations::prover::{ prove_with_fallback, HttpProver, LocalProver };
pub use implementations::segmenter::split_sentences;
pub use implementations::suggestions::suggest_improvements;
pub use implementations::temporal::{ rewrite_nfr_to_temporal, rewrite_with_step, STEP_MS };
pub use implementations::workbench::{ RequirementFilter, RequirementStats, Workbench };
pub use models::{
    common::{ Kind, NfrCluster, Priority, ProofStatus },
    proof::{ InvariantVerdict, ProveOutcome, ProveRequest, ProveResponse },
    requirement::{ Formalization, Requirement },
};
pub use traits::{ LinguisticTool, ProofBackend };
