//! MCP Server implementation for Airis Agent.
//!
//! Exposes the runtime APIs as MCP tools over stdio transport using the rmcp
//! SDK. MCP clients (Claude Code, Cursor, etc.) can run confidence checks,
//! generate repository indexes, and plan research runs.

use std::future::Future;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::Deserialize;

use airis_runtime::{
    generate_repo_index, plan_research, Complexity, ConfidenceRequest, ConfidenceScorer,
    IndexMode, RepoIndexRequest, ResearchDepth, ResearchRequest, Signal,
};

// ---------------------------------------------------------------------------
// Parameter structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ConfidenceCheckParams {
    /// Description of the task to assess
    pub task: String,
    /// Task complexity: simple, medium, or complex (defaults to medium)
    pub complexity: Option<String>,
    /// Whether duplicate work has been checked
    #[serde(default)]
    pub duplicate_check_complete: bool,
    /// Whether architecture compliance has been verified
    #[serde(default)]
    pub architecture_check_complete: bool,
    /// Whether official documentation has been reviewed
    #[serde(default)]
    pub official_docs_verified: bool,
    /// Whether OSS references have been consulted
    #[serde(default)]
    pub oss_reference_complete: bool,
    /// Whether root cause has been identified (for bugs)
    #[serde(default)]
    pub root_cause_identified: bool,
    /// Whether official documentation exists for the task
    #[serde(default)]
    pub has_official_docs: bool,
    /// Whether similar implementations exist as reference
    #[serde(default)]
    pub has_similar_examples: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RepoIndexParams {
    /// Absolute path to the repository
    pub repo_path: String,
    /// Indexing depth: quick, full, update (defaults to full)
    pub mode: Option<String>,
    /// Include documentation files (defaults to true)
    pub include_docs: Option<bool>,
    /// Include test files (defaults to true)
    pub include_tests: Option<bool>,
    /// Maximum entries per category (defaults to 10)
    pub max_entries: Option<usize>,
    /// Optional directory to write PROJECT_INDEX.{md,json}
    pub output_dir: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeepResearchParams {
    /// Research query to investigate
    pub query: String,
    /// Research depth: quick, standard, deep, exhaustive (defaults to standard)
    pub depth: Option<String>,
    /// Additional constraints or focus areas
    #[serde(default)]
    pub constraints: Vec<String>,
    /// Initial sources to start from
    #[serde(default)]
    pub seed_sources: Vec<String>,
}

// ---------------------------------------------------------------------------
// Server struct
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AirisMcpServer {
    scorer: Arc<ConfidenceScorer>,
    tool_router: ToolRouter<Self>,
}

// ---------------------------------------------------------------------------
// Tool definitions
// ---------------------------------------------------------------------------

#[tool_router]
impl AirisMcpServer {
    pub fn new() -> Self {
        Self {
            scorer: Arc::new(ConfidenceScorer::default()),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Pre-implementation confidence assessment. Returns score (0.0-1.0), action (proceed/present_alternatives/ask_questions), and the full evidence checklist. Prevents wrong-direction work: 25-250x token savings."
    )]
    async fn confidence_check(
        &self,
        Parameters(params): Parameters<ConfidenceCheckParams>,
    ) -> Result<CallToolResult, McpError> {
        let complexity = match params.complexity.as_deref() {
            Some(raw) => match Complexity::from_str(raw) {
                Ok(value) => value,
                Err(e) => {
                    return Ok(CallToolResult::error(vec![Content::text(e.to_string())]));
                }
            },
            None => Complexity::default(),
        };

        let request = ConfidenceRequest::new(params.task)
            .with_complexity(complexity)
            .with_signal(
                Signal::DuplicateCheckComplete,
                params.duplicate_check_complete,
            )
            .with_signal(
                Signal::ArchitectureCheckComplete,
                params.architecture_check_complete,
            )
            .with_signal(Signal::OfficialDocsVerified, params.official_docs_verified)
            .with_signal(Signal::OssReferenceComplete, params.oss_reference_complete)
            .with_signal(Signal::RootCauseIdentified, params.root_cause_identified)
            .with_signal(Signal::HasOfficialDocs, params.has_official_docs)
            .with_signal(Signal::HasSimilarExamples, params.has_similar_examples);

        match self.scorer.assess(&request) {
            Ok(response) => {
                let json = serde_json::to_string_pretty(&response)
                    .unwrap_or_else(|_| "{}".to_string());
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Confidence assessment failed: {}",
                e
            ))])),
        }
    }

    #[tool(
        description = "Generates PROJECT_INDEX.{md,json} with codebase structure: top-level layout, entry points, documentation, configuration, and tests. Optional on-disk output."
    )]
    async fn repo_index(
        &self,
        Parameters(params): Parameters<RepoIndexParams>,
    ) -> Result<CallToolResult, McpError> {
        let mode = match params.mode.as_deref() {
            Some(raw) => match IndexMode::from_str(raw) {
                Ok(value) => value,
                Err(e) => {
                    return Ok(CallToolResult::error(vec![Content::text(e.to_string())]));
                }
            },
            None => IndexMode::default(),
        };

        let mut request = RepoIndexRequest::new(PathBuf::from(params.repo_path)).with_mode(mode);
        if let Some(include_docs) = params.include_docs {
            request.include_docs = include_docs;
        }
        if let Some(include_tests) = params.include_tests {
            request.include_tests = include_tests;
        }
        if let Some(max_entries) = params.max_entries {
            request.max_entries = max_entries;
        }
        if let Some(output_dir) = params.output_dir {
            request.output_dir = Some(PathBuf::from(output_dir));
        }

        match generate_repo_index(&request) {
            Ok(response) => {
                let result = serde_json::json!({
                    "markdown": response.markdown,
                    "stats": response.stats,
                    "output_paths": response
                        .output_paths
                        .iter()
                        .map(|path| path.display().to_string())
                        .collect::<Vec<_>>(),
                });
                let json = serde_json::to_string_pretty(&result)
                    .unwrap_or_else(|_| result.to_string());
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Repository indexing failed: {}",
                e
            ))])),
        }
    }

    #[tool(
        description = "Creates a wave/queries plan for multi-step research. Returns the plan, findings, sources, and a confidence estimate."
    )]
    async fn deep_research(
        &self,
        Parameters(params): Parameters<DeepResearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut request = ResearchRequest::new(params.query);
        if let Some(depth) = params.depth.as_deref() {
            request.depth = ResearchDepth::parse(depth);
        }
        request.constraints = params.constraints;
        request.seed_sources = params.seed_sources;

        let response = plan_research(&request);
        let json = serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string());
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ---------------------------------------------------------------------------
// ServerHandler — #[tool_handler] auto-generates list_tools + call_tool
// ---------------------------------------------------------------------------

#[tool_handler]
impl ServerHandler for AirisMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Airis Agent toolkit — pre-implementation confidence gating, \
                 repository indexing, and research planning"
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = if std::path::Path::new("PROJECT_INDEX.md").exists() {
            vec![Resource {
                raw: RawResource {
                    uri: "file:///PROJECT_INDEX.md".to_string(),
                    name: "PROJECT_INDEX.md".to_string(),
                    title: None,
                    description: Some("Generated repository structure index".to_string()),
                    mime_type: Some("text/markdown".to_string()),
                    size: None,
                    icons: None,
                    meta: None,
                },
                annotations: None,
            }]
        } else {
            vec![]
        };
        std::future::ready(Ok(ListResourcesResult {
            resources,
            ..Default::default()
        }))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        if request.uri == "file:///PROJECT_INDEX.md" {
            match tokio::fs::read_to_string("PROJECT_INDEX.md").await {
                Ok(content) => Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(content, "file:///PROJECT_INDEX.md")],
                }),
                Err(_) => Err(McpError::new(
                    ErrorCode::INVALID_PARAMS,
                    "PROJECT_INDEX.md not found",
                    None::<serde_json::Value>,
                )),
            }
        } else {
            Err(McpError::new(
                ErrorCode::INVALID_PARAMS,
                format!("Unknown resource: {}", request.uri),
                None::<serde_json::Value>,
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Start the MCP server over stdio transport.
pub async fn start_mcp_server() -> Result<(), Box<dyn std::error::Error>> {
    // Direct tracing to stderr — stdout is the MCP transport channel
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let service = AirisMcpServer::new().serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
