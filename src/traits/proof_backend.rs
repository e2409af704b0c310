use async_trait::async_trait;

use crate::errors::ReqmineResult;
use crate::models::proof::{ ProveRequest, ProveResponse };

/// A service that assigns a coarse proof status to each named invariant
#[async_trait]
pub trait ProofBackend: Send + Sync {
    /// Evaluate every invariant in the request against its specification text
    async fn prove(&self, request: &ProveRequest) -> ReqmineResult<ProveResponse>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
