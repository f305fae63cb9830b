//! Airis Agent Runtime
//!
//! Library core of the Airis Agent toolkit: pre-implementation confidence
//! gating, token budget allocation, repository indexing, and research
//! planning. Hosts (CLI, MCP server) translate their own surfaces into these
//! request shapes and relay the responses unchanged.

pub mod budget;
pub mod confidence;
pub mod repo_index;
pub mod research;

// Re-export commonly used types
pub use budget::token_budget;
pub use confidence::{
    ChecklistEntry, Complexity, ConfidenceAction, ConfidenceConfig, ConfidenceError,
    ConfidenceRequest, ConfidenceResponse, ConfidenceScorer, Signal, SignalWeight,
};
pub use repo_index::{
    generate_repo_index, IndexMode, IndexStats, RepoIndexError, RepoIndexRequest,
    RepoIndexResponse,
};
pub use research::{
    plan_research, ResearchDepth, ResearchRequest, ResearchResponse, ResearchSource, ResearchWave,
};
