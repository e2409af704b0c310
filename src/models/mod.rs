pub mod common;
pub mod requirement;
pub mod proof;

// Re-export common model types
pub use common::{ Kind, NfrCluster, Priority, ProofStatus };
pub use requirement::{ Formalization, Requirement };
pub use proof::{ InvariantVerdict, ProveOutcome, ProveRequest, ProveResponse };
