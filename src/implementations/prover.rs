use async_trait::async_trait;
use log::{ debug, info, warn };
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::errors::{ RecoverableError, ReqmineError, ReqmineResult };
use crate::implementations::config::ProverSettings;
use crate::implementations::proof_heuristic::{ decide_status, mock_prove, theorem_invariants };
use crate::models::common::ProofStatus;
use crate::models::proof::{ InvariantVerdict, ProveOutcome, ProveRequest, ProveResponse };
use crate::models::requirement::Requirement;
use crate::traits::ProofBackend;

/// Advisory surfaced whenever the remote evaluation could not be used
pub const FALLBACK_ADVISORY: &str = "Prover backend unreachable. Used mock prover.";

/// Module name reported when the request does not carry one
pub const DEFAULT_MODULE_NAME: &str = "Module";

/// Evaluate a request with the authoritative heuristic, in-process
pub fn evaluate_request(request: &ProveRequest) -> ProveResponse {
    let module = request.module_name.as_deref().unwrap_or(DEFAULT_MODULE_NAME);
    let per_invariant = request.invariants
        .iter()
        .map(|name| InvariantVerdict {
            name: name.clone(),
            status: decide_status(name, &request.tla).to_string(),
        })
        .collect();

    ProveResponse {
        per_invariant,
        evidence: format!(
            "Backend examined {} with {} invariant(s).",
            module,
            request.invariants.len()
        ),
    }
}

/// Backend that runs the heuristic locally instead of over the network
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProver;

#[async_trait]
impl ProofBackend for LocalProver {
    async fn prove(&self, request: &ProveRequest) -> ReqmineResult<ProveResponse> {
        Ok(evaluate_request(request))
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Client for a remote `/api/prove` endpoint
#[derive(Clone)]
pub struct HttpProver {
    url: String,
    http_client: reqwest::Client,
}

impl HttpProver {
    pub fn new(settings: &ProverSettings) -> ReqmineResult<Self> {
        let http_client = reqwest::Client
            ::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ReqmineError::ProverTransport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: settings.url.clone(),
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProofBackend for HttpProver {
    async fn prove(&self, request: &ProveRequest) -> ReqmineResult<ProveResponse> {
        debug!("POST {} with {} invariant(s)", self.url, request.invariants.len());

        let response = self.http_client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(request)
            .send().await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Prover request timed out");
                }
                if e.is_connect() {
                    warn!("Connection error - is the prover running at {}?", self.url);
                }
                ReqmineError::ProverTransport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text().await
                .unwrap_or_else(|_| "Failed to get error message".to_string());
            warn!("Prover error: HTTP {} - {}", status, message);
            return Err(ReqmineError::ProverStatus { status, message });
        }

        let text = response.text().await.map_err(|e| ReqmineError::ProverResponse(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ReqmineError::ProverResponse(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Run one request bounded by `timeout`, abandoning it if `cancel` fires first
pub async fn prove_with_deadline(
    backend: &dyn ProofBackend,
    request: &ProveRequest,
    timeout: Duration,
    cancel: &CancellationToken,
) -> ReqmineResult<ProveResponse> {
    tokio::select! {
        _ = cancel.cancelled() => Err(ReqmineError::ProverCancelled),
        result = tokio::time::timeout(timeout, backend.prove(request)) => match result {
            Ok(inner) => inner,
            Err(_) => Err(ReqmineError::ProverTimeout(timeout.as_millis() as u64)),
        },
    }
}

/// Copy remote verdicts onto the records whose text names an invariant.
/// The first returned name contained in a record's text decides it.
pub fn merge_verdicts(requirements: &mut [Requirement], response: &ProveResponse) -> usize {
    let mut changed = 0;
    for requirement in requirements.iter_mut() {
        let hit = response.per_invariant
            .iter()
            .find(|v| requirement.text.contains(v.name.as_str()));
        if let Some(verdict) = hit {
            requirement.status = ProofStatus::from_wire(&verdict.status);
            requirement.evidence = Some(response.evidence.clone());
            changed += 1;
        }
    }
    changed
}

/// Ask the backend about every theorem-concluded invariant in `tla`, falling
/// back to the local heuristic on any failure.
pub async fn prove_with_fallback(
    backend: &dyn ProofBackend,
    requirements: &mut [Requirement],
    tla: &str,
    module_name: Option<&str>,
    timeout: Duration,
    cancel: &CancellationToken,
) -> ProveOutcome {
    let request = ProveRequest {
        tla: tla.to_string(),
        module_name: module_name.map(str::to_string),
        invariants: theorem_invariants(tla),
    };

    info!(
        "Requesting proof status for {} invariant(s) from {} backend",
        request.invariants.len(),
        backend.name()
    );

    match prove_with_deadline(backend, &request, timeout, cancel).await {
        Ok(response) => {
            let merged = merge_verdicts(requirements, &response);
            info!("Merged {} verdict(s) into requirements", merged);
            ProveOutcome::Remote { evidence: response.evidence }
        }
        Err(e) => {
            warn!("{}; {}", e, e.recovery_strategy().unwrap_or_default());
            let changed = mock_prove(requirements, tla);
            debug!("Local heuristic updated {} requirement(s)", changed);
            ProveOutcome::Fallback {
                advisory: FALLBACK_ADVISORY.to_string(),
                cause: e.to_string(),
            }
        }
    }
}
