//! Request and response contracts for the confidence gate

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfidenceError;

/// Task complexity bucket. Complexity never influences the confidence score;
/// it feeds the downstream token-budget lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl FromStr for Complexity {
    type Err = ConfidenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "simple" => Ok(Complexity::Simple),
            "medium" => Ok(Complexity::Medium),
            "complex" => Ok(Complexity::Complex),
            other => Err(ConfidenceError::InvalidRequest {
                reason: format!(
                    "Unknown complexity '{}' (expected simple, medium, or complex)",
                    other
                ),
            }),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

/// Evidence signals recognized by the scorer, in checklist order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    DuplicateCheckComplete,
    ArchitectureCheckComplete,
    OfficialDocsVerified,
    OssReferenceComplete,
    RootCauseIdentified,
    HasOfficialDocs,
    HasSimilarExamples,
}

impl Signal {
    /// All recognized signals in the fixed checklist order
    pub const ALL: [Signal; 7] = [
        Signal::DuplicateCheckComplete,
        Signal::ArchitectureCheckComplete,
        Signal::OfficialDocsVerified,
        Signal::OssReferenceComplete,
        Signal::RootCauseIdentified,
        Signal::HasOfficialDocs,
        Signal::HasSimilarExamples,
    ];

    /// Wire name of the signal
    pub fn name(&self) -> &'static str {
        match self {
            Signal::DuplicateCheckComplete => "duplicate_check_complete",
            Signal::ArchitectureCheckComplete => "architecture_check_complete",
            Signal::OfficialDocsVerified => "official_docs_verified",
            Signal::OssReferenceComplete => "oss_reference_complete",
            Signal::RootCauseIdentified => "root_cause_identified",
            Signal::HasOfficialDocs => "has_official_docs",
            Signal::HasSimilarExamples => "has_similar_examples",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structured request for the confidence gate.
///
/// Every boolean signal defaults to false: absence of evidence, not negative
/// evidence. Unknown fields arriving over the wire are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRequest {
    /// Free-text description of the task under assessment. Carried for
    /// traceability only; it never influences the score.
    pub task_description: String,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub duplicate_check_complete: bool,
    #[serde(default)]
    pub architecture_check_complete: bool,
    #[serde(default)]
    pub official_docs_verified: bool,
    #[serde(default)]
    pub oss_reference_complete: bool,
    #[serde(default)]
    pub root_cause_identified: bool,
    #[serde(default)]
    pub has_official_docs: bool,
    #[serde(default)]
    pub has_similar_examples: bool,
    /// Caller-supplied annotations, carried through untouched
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ConfidenceRequest {
    /// Create a new request with all signals unset
    pub fn new(task_description: impl Into<String>) -> Self {
        Self {
            task_description: task_description.into(),
            complexity: Complexity::default(),
            duplicate_check_complete: false,
            architecture_check_complete: false,
            official_docs_verified: false,
            oss_reference_complete: false,
            root_cause_identified: false,
            has_official_docs: false,
            has_similar_examples: false,
            metadata: BTreeMap::new(),
        }
    }

    /// Set the task complexity
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Set a single evidence signal
    pub fn with_signal(mut self, signal: Signal, satisfied: bool) -> Self {
        match signal {
            Signal::DuplicateCheckComplete => self.duplicate_check_complete = satisfied,
            Signal::ArchitectureCheckComplete => self.architecture_check_complete = satisfied,
            Signal::OfficialDocsVerified => self.official_docs_verified = satisfied,
            Signal::OssReferenceComplete => self.oss_reference_complete = satisfied,
            Signal::RootCauseIdentified => self.root_cause_identified = satisfied,
            Signal::HasOfficialDocs => self.has_official_docs = satisfied,
            Signal::HasSimilarExamples => self.has_similar_examples = satisfied,
        }
        self
    }

    /// Add a metadata annotation
    pub fn with_metadata(mut self, key: String, value: String) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Whether the given signal is satisfied in this request
    pub fn is_satisfied(&self, signal: Signal) -> bool {
        match signal {
            Signal::DuplicateCheckComplete => self.duplicate_check_complete,
            Signal::ArchitectureCheckComplete => self.architecture_check_complete,
            Signal::OfficialDocsVerified => self.official_docs_verified,
            Signal::OssReferenceComplete => self.oss_reference_complete,
            Signal::RootCauseIdentified => self.root_cause_identified,
            Signal::HasOfficialDocs => self.has_official_docs,
            Signal::HasSimilarExamples => self.has_similar_examples,
        }
    }
}

/// Recommended action derived from the score tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceAction {
    Proceed,
    PresentAlternatives,
    AskQuestions,
}

impl fmt::Display for ConfidenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceAction::Proceed => write!(f, "proceed"),
            ConfidenceAction::PresentAlternatives => write!(f, "present_alternatives"),
            ConfidenceAction::AskQuestions => write!(f, "ask_questions"),
        }
    }
}

/// One checklist line in a confidence response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub name: String,
    pub satisfied: bool,
    pub weight: f64,
}

/// Result returned by the confidence gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceResponse {
    /// Weighted score in [0.0, 1.0], rounded to two decimals
    pub score: f64,
    pub action: ConfidenceAction,
    /// Every recognized signal with its satisfied state and weight, in the
    /// fixed table order regardless of the input
    pub checklist: Vec<ChecklistEntry>,
}
