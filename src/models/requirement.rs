use serde::{ Deserialize, Serialize };
use uuid::Uuid;

use crate::models::common::{ Kind, Priority, ProofStatus };

/// Temporal-logic monitor and theorem synthesized for a non-functional requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formalization {
    pub title: String,
    pub tla: String,
    pub assumptions: Vec<String>,
}

/// A candidate requirement extracted from (or added alongside) a specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Generated at creation and never changed afterwards
    pub id: String,
    pub text: String,
    pub kind: Kind,
    pub priority: Priority,
    /// Explains the kind decision; not refreshed when `text` is edited
    pub rationale: String,
    /// At most four entries
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub status: ProofStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formalization: Option<Formalization>,
    #[serde(default)]
    pub selected: bool,
}

impl Requirement {
    pub fn new(
        text: String,
        kind: Kind,
        priority: Priority,
        rationale: String,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            kind,
            priority,
            rationale,
            suggestions,
            status: ProofStatus::Unproven,
            evidence: None,
            formalization: None,
            selected: false,
        }
    }

    /// Placeholder record inserted by hand
    pub fn manual() -> Self {
        Self::new(
            "The system shall ...".to_string(),
            Kind::Functional,
            Priority::Medium,
            "User-added".to_string(),
            vec!["Clarify actor, condition, and effect.".to_string()],
        )
    }
}
