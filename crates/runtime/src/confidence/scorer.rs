//! Weighted checklist scoring

use super::config::ConfidenceConfig;
use super::error::ConfidenceError;
use super::request::{ChecklistEntry, ConfidenceRequest, ConfidenceResponse};

/// Confidence scorer with an injected weight table.
///
/// Assessment is a synchronous pure computation over the request and the
/// fixed configuration: no I/O, no shared mutable state, safe to call from
/// any number of threads without synchronization.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    config: ConfidenceConfig,
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self {
            config: ConfidenceConfig::default(),
        }
    }
}

impl ConfidenceScorer {
    /// Create a scorer with a validated configuration
    pub fn new(config: ConfidenceConfig) -> Result<Self, ConfidenceError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active scorer configuration
    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// Assess implementation readiness for a task.
    ///
    /// Sums the weights of the satisfied signals, clamps to [0.0, 1.0], and
    /// rounds to two decimals before classifying, so the 0.70/0.90 tier
    /// boundaries are exact. The returned checklist always lists every
    /// recognized signal in the configured table order.
    pub fn assess(
        &self,
        request: &ConfidenceRequest,
    ) -> Result<ConfidenceResponse, ConfidenceError> {
        if request.task_description.trim().is_empty() {
            return Err(ConfidenceError::InvalidRequest {
                reason: "task_description must not be empty".to_string(),
            });
        }

        let mut score = 0.0;
        let mut checklist = Vec::with_capacity(self.config.weights.len());

        for entry in &self.config.weights {
            let satisfied = request.is_satisfied(entry.signal);
            if satisfied {
                score += entry.weight;
            }
            checklist.push(ChecklistEntry {
                name: entry.signal.name().to_string(),
                satisfied,
                weight: entry.weight,
            });
        }

        let score = round2(score.clamp(0.0, 1.0));
        let action = self.config.classify(score);

        tracing::debug!(
            task = %request.task_description,
            complexity = %request.complexity,
            score,
            action = %action,
            "confidence assessment complete"
        );

        Ok(ConfidenceResponse {
            score,
            action,
            checklist,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
