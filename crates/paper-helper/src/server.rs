//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analyzer to AI assistants over stdio. The server is a
//! presentation layer: each tool converts its parameters, calls the core
//! library, and returns the result as pretty-printed JSON text.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use paper_helper_core::analysis::structure::analyze_structure;
use paper_helper_core::formats::{self, Capabilities, DocumentFormat};
use paper_helper_core::text::Document;
use paper_helper_core::{Analyzer, AnalyzerSettings, Variant, build_outline, extract_citations};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Document text shared by the single-document tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DocumentParams {
    /// The document text.
    pub text: String,
    /// Treat the text as markdown and convert it to plain text first.
    #[serde(default)]
    pub markdown: bool,
}

/// Parameters for the `analyze_document` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeDocumentParams {
    /// The document text.
    pub text: String,
    /// Treat the text as markdown and convert it to plain text first.
    #[serde(default)]
    pub markdown: bool,
    /// Analyzer variant: "baseline" or "extended". Defaults to the server's.
    pub variant: Option<Variant>,
}

/// MCP server exposing the analyzer to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    settings: AnalyzerSettings,
    max_input: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(AnalyzerSettings::default(), None)
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with analyzer settings and an optional input limit in bytes.
    pub fn new(settings: AnalyzerSettings, max_input: Option<usize>) -> Self {
        Self {
            settings,
            max_input,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, description, and supported input formats")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "variant": self.settings.variant,
            "formats": Capabilities::detect(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run the full analysis.
    #[tool(
        description = "Analyze an academic paper draft. Returns basic statistics, structure, academic quality, writing style, communication-studies profile (extended variant), and revision recommendations. An empty document returns only an error field."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_document(
        &self,
        Parameters(params): Parameters<AnalyzeDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_document", variant = ?params.variant, "executing MCP tool");

        let text = self.prepare(&params.text, params.markdown)?;
        let mut settings = self.settings.clone();
        if let Some(variant) = params.variant {
            settings.variant = variant;
        }
        let outcome = Analyzer::new(settings).analyze_outcome(&text);

        tracing::info!(tool = "analyze_document", "MCP tool completed");
        json_result(&outcome)
    }

    /// Check section presence.
    #[tool(
        description = "Check which canonical sections (abstract, keywords, introduction, conclusion, references) a paper contains and score completeness out of 100."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_structure(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_structure", "executing MCP tool");

        let text = self.prepare(&params.text, params.markdown)?;
        let profile = analyze_structure(&Document::new(&text));

        tracing::info!(
            tool = "check_structure",
            score = profile.structure_score,
            "MCP tool completed"
        );
        json_result(&profile)
    }

    /// List candidate citations.
    #[tool(
        description = "List bracketed and parenthesized spans that look like citations, in ASCII and full-width forms."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_citations(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "extract_citations", "executing MCP tool");

        let text = self.prepare(&params.text, params.markdown)?;
        let citations = extract_citations(&text);

        tracing::info!(
            tool = "extract_citations",
            count = citations.len(),
            "MCP tool completed"
        );
        json_result(&citations)
    }

    /// Detect title and sections.
    #[tool(description = "Detect a paper's title, chapter sections, and a short summary.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn build_outline(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "build_outline", "executing MCP tool");

        let text = self.prepare(&params.text, params.markdown)?;
        let outline = build_outline(&text);

        tracing::info!(
            tool = "build_outline",
            sections = outline.sections.len(),
            "MCP tool completed"
        );
        json_result(&outline)
    }
}

impl ProjectServer {
    /// Enforce the input limit and convert markdown when asked.
    fn prepare(&self, text: &str, markdown: bool) -> Result<String, McpError> {
        if let Some(max) = self.max_input
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }
        let format = if markdown {
            DocumentFormat::Markdown
        } else {
            DocumentFormat::Text
        };
        formats::prepare_text(format, text).map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_document for a full report on a paper draft, or the narrower tools for structure, citations, and outline.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
