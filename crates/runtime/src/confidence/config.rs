//! Configuration for the confidence scorer

use serde::{Deserialize, Serialize};

use super::error::ConfidenceError;
use super::request::{ConfidenceAction, Signal};

/// Weight assigned to a single evidence signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeight {
    pub signal: Signal,
    pub weight: f64,
}

/// Complete scorer configuration.
///
/// The weight table and tier thresholds are injected into the scorer at
/// construction time so alternate tables can be substituted without touching
/// the scoring logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Ordered signal weight table. The checklist in every response follows
    /// this order, and the weights must sum to 1.0 across all signals.
    pub weights: Vec<SignalWeight>,
    /// Minimum score for a `Proceed` recommendation (inclusive)
    pub proceed_threshold: f64,
    /// Minimum score for a `PresentAlternatives` recommendation (inclusive)
    pub alternatives_threshold: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            weights: vec![
                SignalWeight {
                    signal: Signal::DuplicateCheckComplete,
                    weight: 0.20,
                },
                SignalWeight {
                    signal: Signal::ArchitectureCheckComplete,
                    weight: 0.20,
                },
                SignalWeight {
                    signal: Signal::OfficialDocsVerified,
                    weight: 0.20,
                },
                SignalWeight {
                    signal: Signal::OssReferenceComplete,
                    weight: 0.15,
                },
                SignalWeight {
                    signal: Signal::RootCauseIdentified,
                    weight: 0.15,
                },
                SignalWeight {
                    signal: Signal::HasOfficialDocs,
                    weight: 0.05,
                },
                SignalWeight {
                    signal: Signal::HasSimilarExamples,
                    weight: 0.05,
                },
            ],
            proceed_threshold: 0.90,
            alternatives_threshold: 0.70,
        }
    }
}

impl ConfidenceConfig {
    /// Validate the scorer configuration
    pub fn validate(&self) -> Result<(), ConfidenceError> {
        for recognized in Signal::ALL {
            let count = self
                .weights
                .iter()
                .filter(|entry| entry.signal == recognized)
                .count();
            if count == 0 {
                return Err(ConfidenceError::InvalidConfig {
                    key: "weights".to_string(),
                    reason: format!("Missing weight for signal '{}'", recognized),
                });
            }
            if count > 1 {
                return Err(ConfidenceError::InvalidConfig {
                    key: "weights".to_string(),
                    reason: format!("Duplicate weight for signal '{}'", recognized),
                });
            }
        }

        for entry in &self.weights {
            if entry.weight < 0.0 {
                return Err(ConfidenceError::InvalidConfig {
                    key: "weights".to_string(),
                    reason: format!(
                        "Weight for signal '{}' must be non-negative, got {}",
                        entry.signal, entry.weight
                    ),
                });
            }
        }

        let total: f64 = self.weights.iter().map(|entry| entry.weight).sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(ConfidenceError::InvalidConfig {
                key: "weights".to_string(),
                reason: format!("Signal weights must sum to 1.0, got {}", total),
            });
        }

        for (key, value) in [
            ("proceed_threshold", self.proceed_threshold),
            ("alternatives_threshold", self.alternatives_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfidenceError::InvalidConfig {
                    key: key.to_string(),
                    reason: format!("Threshold must be between 0.0 and 1.0, got {}", value),
                });
            }
        }

        if self.alternatives_threshold > self.proceed_threshold {
            return Err(ConfidenceError::InvalidConfig {
                key: "alternatives_threshold".to_string(),
                reason: "alternatives_threshold must not exceed proceed_threshold".to_string(),
            });
        }

        Ok(())
    }

    /// Map a score to its recommended action. Boundary values belong to the
    /// upper tier: a score equal to a threshold takes that tier's action.
    pub fn classify(&self, score: f64) -> ConfidenceAction {
        if score >= self.proceed_threshold {
            ConfidenceAction::Proceed
        } else if score >= self.alternatives_threshold {
            ConfidenceAction::PresentAlternatives
        } else {
            ConfidenceAction::AskQuestions
        }
    }

    /// Look up the weight for a signal
    pub fn weight(&self, signal: Signal) -> Option<f64> {
        self.weights
            .iter()
            .find(|entry| entry.signal == signal)
            .map(|entry| entry.weight)
    }
}
