pub mod config;
pub mod linguistics;
pub mod segmenter;
pub mod classifier;
pub mod suggestions;
pub mod extractor;
pub mod temporal;
pub mod proof_heuristic;
pub mod prover;
pub mod server;
pub mod export;
pub mod workbench;
