pub mod linguistic_tool;
pub mod proof_backend;

// Re-export traits
pub use linguistic_tool::LinguisticTool;
pub use proof_backend::ProofBackend;
