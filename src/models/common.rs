use serde::{ Deserialize, Serialize };
use std::fmt;

/// Functional vs non-functional classification axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Functional,
    #[serde(rename = "Non-functional")]
    NonFunctional,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Functional => write!(f, "Functional"),
            Kind::NonFunctional => write!(f, "Non-functional"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Proof status of a requirement; any value may be overwritten by a later run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProofStatus {
    #[default]
    Unproven,
    Proved,
    Failed,
    Unclear,
}

impl ProofStatus {
    /// Parse a status string as reported by a prover; anything unknown is Unclear
    pub fn from_wire(s: &str) -> Self {
        match s {
            "Proved" => ProofStatus::Proved,
            "Failed" => ProofStatus::Failed,
            "Unproven" => ProofStatus::Unproven,
            _ => ProofStatus::Unclear,
        }
    }
}

impl fmt::Display for ProofStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofStatus::Unproven => write!(f, "Unproven"),
            ProofStatus::Proved => write!(f, "Proved"),
            ProofStatus::Failed => write!(f, "Failed"),
            ProofStatus::Unclear => write!(f, "Unclear"),
        }
    }
}

/// Non-functional quality clusters, in match order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NfrCluster {
    Performance,
    Reliability,
    Safety,
    Security,
    Usability,
    Maintainability,
}

impl NfrCluster {
    /// Enumeration order is the match order
    pub const ALL: [NfrCluster; 6] = [
        NfrCluster::Performance,
        NfrCluster::Reliability,
        NfrCluster::Safety,
        NfrCluster::Security,
        NfrCluster::Usability,
        NfrCluster::Maintainability,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            NfrCluster::Performance => &[
                "latency", "throughput", "deadline", "response", "ms", "rate", "load", "time",
            ],
            NfrCluster::Reliability => &[
                "fault", "recover", "availability", "retry", "crash", "robust", "mtbf", "uptime",
            ],
            NfrCluster::Safety => &["hazard", "violation", "deadlock", "collision", "unsafe"],
            NfrCluster::Security => &[
                "auth", "encrypt", "integrity", "confidential", "tamper", "attack", "threat",
            ],
            NfrCluster::Usability => &["accessible", "learn", "intuitive", "ux", "human", "operator"],
            NfrCluster::Maintainability => &[
                "log", "trace", "monitor", "debug", "observability", "maintain",
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NfrCluster::Performance => "Performance",
            NfrCluster::Reliability => "Reliability",
            NfrCluster::Safety => "Safety",
            NfrCluster::Security => "Security",
            NfrCluster::Usability => "Usability",
            NfrCluster::Maintainability => "Maintainability",
        }
    }
}

impl fmt::Display for NfrCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
