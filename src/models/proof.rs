use serde::{ Deserialize, Serialize };

/// Body of a remote evaluation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveRequest {
    pub tla: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    pub invariants: Vec<String>,
}

/// Status reported for one invariant. `status` stays a string on the wire;
/// see `ProofStatus::from_wire`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantVerdict {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveResponse {
    #[serde(default)]
    pub per_invariant: Vec<InvariantVerdict>,
    #[serde(default)]
    pub evidence: String,
}

/// How a proof run concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProveOutcome {
    /// The remote backend answered and its verdicts were merged
    Remote { evidence: String },
    /// The remote call failed; the local heuristic ran instead
    Fallback { advisory: String, cause: String },
}

impl ProveOutcome {
    pub fn advisory(&self) -> Option<&str> {
        match self {
            ProveOutcome::Remote { .. } => None,
            ProveOutcome::Fallback { advisory, .. } => Some(advisory),
        }
    }
}
