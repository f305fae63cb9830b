//! Host-agnostic research planning.
//!
//! Produces a deterministic wave/query plan for a research question plus
//! placeholder findings and a source-count confidence estimate. Actual web or
//! documentation lookups are the host's concern; this module only plans them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Research depth level controlling the wave/query plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchDepth {
    Quick,
    #[default]
    Standard,
    Deep,
    Exhaustive,
}

impl ResearchDepth {
    /// Parse a depth string, falling back to `Standard` for unknown values
    pub fn parse(value: &str) -> Self {
        match value {
            "quick" => ResearchDepth::Quick,
            "standard" => ResearchDepth::Standard,
            "deep" => ResearchDepth::Deep,
            "exhaustive" => ResearchDepth::Exhaustive,
            _ => ResearchDepth::Standard,
        }
    }

    /// (waves, queries per wave) for this depth
    pub fn plan_shape(self) -> (usize, usize) {
        match self {
            ResearchDepth::Quick => (1, 2),
            ResearchDepth::Standard => (2, 4),
            ResearchDepth::Deep => (3, 6),
            ResearchDepth::Exhaustive => (4, 8),
        }
    }
}

impl fmt::Display for ResearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearchDepth::Quick => write!(f, "quick"),
            ResearchDepth::Standard => write!(f, "standard"),
            ResearchDepth::Deep => write!(f, "deep"),
            ResearchDepth::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// Research planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
    #[serde(default)]
    pub depth: ResearchDepth,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub seed_sources: Vec<String>,
}

impl ResearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            depth: ResearchDepth::default(),
            constraints: Vec::new(),
            seed_sources: Vec::new(),
        }
    }

    pub fn with_depth(mut self, depth: ResearchDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn with_seed_source(mut self, source: impl Into<String>) -> Self {
        self.seed_sources.push(source.into());
        self
    }
}

/// One wave of planned queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchWave {
    pub wave: usize,
    pub queries: Vec<String>,
}

/// A consulted or pending source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchSource {
    #[serde(rename = "type")]
    pub kind: String,
    pub reference: String,
}

/// Research plan returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub summary: String,
    pub plan: Vec<ResearchWave>,
    pub findings: Vec<String>,
    pub sources: Vec<ResearchSource>,
    pub confidence: f64,
}

/// Build a research plan for the request. Pure and deterministic.
pub fn plan_research(request: &ResearchRequest) -> ResearchResponse {
    let (waves, queries_per_wave) = request.depth.plan_shape();

    let plan: Vec<ResearchWave> = (1..=waves)
        .map(|wave| ResearchWave {
            wave,
            queries: generate_queries(&request.query, queries_per_wave, wave, &request.constraints),
        })
        .collect();

    let (findings, sources) = synthesize_findings(request);
    let confidence = estimate_confidence(sources.len());
    let summary = format!(
        "Deep research for '{}' completed with {} sources.",
        request.query,
        sources.len()
    );

    tracing::debug!(
        query = %request.query,
        depth = %request.depth,
        waves,
        sources = sources.len(),
        "research plan generated"
    );

    ResearchResponse {
        summary,
        plan,
        findings,
        sources,
        confidence,
    }
}

fn generate_queries(
    base: &str,
    count: usize,
    wave: usize,
    constraints: &[String],
) -> Vec<String> {
    (0..count)
        .map(|index| {
            let constraint = if constraints.is_empty() {
                String::new()
            } else {
                format!(" + {}", constraints[index % constraints.len()])
            };
            format!("{} insight #{}-{}{}", base, wave, index + 1, constraint)
        })
        .collect()
}

fn synthesize_findings(request: &ResearchRequest) -> (Vec<String>, Vec<ResearchSource>) {
    if request.seed_sources.is_empty() {
        let findings = vec![
            "1. Pending official documentation confirmation".to_string(),
            "2. Pending community implementation survey".to_string(),
        ];
        let sources = vec![
            ResearchSource {
                kind: "todo".to_string(),
                reference: "Context7 query".to_string(),
            },
            ResearchSource {
                kind: "todo".to_string(),
                reference: "Tavily search".to_string(),
            },
        ];
        return (findings, sources);
    }

    let findings = request
        .seed_sources
        .iter()
        .enumerate()
        .map(|(index, source)| format!("{}. Derived insight from {}", index + 1, source))
        .collect();
    let sources = request
        .seed_sources
        .iter()
        .map(|source| ResearchSource {
            kind: "seed".to_string(),
            reference: source.clone(),
        })
        .collect();
    (findings, sources)
}

fn estimate_confidence(source_count: usize) -> f64 {
    if source_count >= 5 {
        0.95
    } else if source_count >= 2 {
        0.85
    } else {
        0.70
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_parse_falls_back_to_standard() {
        assert_eq!(ResearchDepth::parse("deep"), ResearchDepth::Deep);
        assert_eq!(ResearchDepth::parse("bottomless"), ResearchDepth::Standard);
    }

    #[test]
    fn plan_shape_matches_depth() {
        assert_eq!(ResearchDepth::Quick.plan_shape(), (1, 2));
        assert_eq!(ResearchDepth::Standard.plan_shape(), (2, 4));
        assert_eq!(ResearchDepth::Deep.plan_shape(), (3, 6));
        assert_eq!(ResearchDepth::Exhaustive.plan_shape(), (4, 8));
    }

    #[test]
    fn constraints_rotate_through_queries() {
        let queries = generate_queries(
            "zero-copy parsing",
            3,
            1,
            &["rust".to_string(), "simd".to_string()],
        );
        assert_eq!(queries[0], "zero-copy parsing insight #1-1 + rust");
        assert_eq!(queries[1], "zero-copy parsing insight #1-2 + simd");
        assert_eq!(queries[2], "zero-copy parsing insight #1-3 + rust");
    }
}
