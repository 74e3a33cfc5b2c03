//! CupCount MCP Server Implementation
//!
//! Exposes the calculator screen and the converter as MCP tools.

use std::sync::{Arc, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::measure::{ConversionRequest, Phase, DEFAULT_CONTAINER_ID};
use crate::models::FormState;
use crate::tools::calculator::{self, FormView};
use crate::tools::links;
use crate::tools::status::StatusTracker;

/// CupCount MCP Service
#[derive(Clone)]
pub struct CupcountService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    /// The one calculator screen this server drives
    form: Arc<std::sync::Mutex<FormState>>,
    tool_router: ToolRouter<CupcountService>,
}

impl Default for CupcountService {
    fn default() -> Self {
        Self::new()
    }
}

impl CupcountService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            form: Arc::new(std::sync::Mutex::new(FormState::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn lock_form(&self) -> Result<MutexGuard<'_, FormState>, McpError> {
        self.form
            .lock()
            .map_err(|_| McpError::internal_error("Form state lock poisoned", None))
    }

    fn form_view(form: &FormState) -> Result<CallToolResult, McpError> {
        json_result(&FormView::from(form))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetPhaseParams {
    /// "solid" (amount in grams) or "liquid" (amount in milliliters)
    pub phase: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectIngredientParams {
    /// Ingredient id or label, e.g. "sugar"
    pub ingredient: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectContainerParams {
    /// Container id ("option1".."option3"), alias ("shot-glass") or label
    pub container: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetAmountParams {
    /// Amount as typed, grams when solid, milliliters when liquid
    pub amount: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    pub amount: String,
    /// "solid" or "liquid" (default liquid)
    #[serde(default)]
    pub phase: Option<String>,
    /// Required when solid
    pub ingredient: Option<String>,
    #[serde(default = "default_container")]
    pub container: String,
}

fn default_container() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn parse_phase(s: &str) -> Result<Phase, McpError> {
    Phase::from_str(s).ok_or_else(|| {
        McpError::invalid_params(format!("Unknown phase '{}', expected solid or liquid", s), None)
    })
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CupcountService {
    // --- Status ---

    #[tool(description = "Get the current status of the CupCount service including build info and process information")]
    async fn cupcount_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for using the calculator. Call this first when unsure how the tools fit together.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Catalogs ---

    #[tool(description = "List known ingredients with their densities in grams per milliliter")]
    fn list_ingredients(&self) -> Result<CallToolResult, McpError> {
        json_result(&calculator::list_ingredients())
    }

    #[tool(description = "List container sizes (bottle cap, shot glass, plastic cup) with their volumes in milliliters")]
    fn list_containers(&self) -> Result<CallToolResult, McpError> {
        json_result(&calculator::list_containers())
    }

    // --- Screen form ---

    #[tool(description = "Show the calculator screen: phase, ingredient, container, amount and last result")]
    fn get_form(&self) -> Result<CallToolResult, McpError> {
        let form = self.lock_form()?;
        Self::form_view(&form)
    }

    #[tool(description = "Toggle between solid (grams) and liquid (milliliters)")]
    fn toggle_phase(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        form.toggle_phase();
        Self::form_view(&form)
    }

    #[tool(description = "Set the phase to solid (grams) or liquid (milliliters)")]
    fn set_phase(&self, Parameters(p): Parameters<SetPhaseParams>) -> Result<CallToolResult, McpError> {
        let phase = parse_phase(&p.phase)?;
        let mut form = self.lock_form()?;
        form.set_phase(phase);
        Self::form_view(&form)
    }

    #[tool(description = "Select the ingredient. Only allowed while the phase is solid; call set_phase first.")]
    fn select_ingredient(&self, Parameters(p): Parameters<SelectIngredientParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        form.select_ingredient(&p.ingredient)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Self::form_view(&form)
    }

    #[tool(description = "Clear the selected ingredient")]
    fn clear_ingredient(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        form.clear_ingredient();
        Self::form_view(&form)
    }

    #[tool(description = "Select the container the result is counted in")]
    fn select_container(&self, Parameters(p): Parameters<SelectContainerParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        form.select_container(&p.container)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Self::form_view(&form)
    }

    #[tool(description = "Enter the amount, in grams when solid or milliliters when liquid")]
    fn set_amount(&self, Parameters(p): Parameters<SetAmountParams>) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        form.set_amount(p.amount);
        Self::form_view(&form)
    }

    #[tool(description = "Calculate how many containers the entered amount fills. Validation failures are returned as the result text.")]
    fn calculate(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        let response = calculator::calculate_form(&mut form);
        json_result(&response)
    }

    #[tool(description = "Reset the calculator screen to its defaults")]
    fn reset_form(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.lock_form()?;
        form.reset();
        Self::form_view(&form)
    }

    // --- One-shot ---

    #[tool(description = "Convert an amount without touching the calculator screen")]
    fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let phase = match p.phase.as_deref() {
            Some(s) => parse_phase(s)?,
            None => Phase::default(),
        };
        let request = ConversionRequest {
            amount: p.amount,
            phase,
            ingredient_id: p.ingredient,
            container_id: p.container,
        };
        let response = calculator::convert(request);
        tracing::debug!("convert -> {}", response.result);
        json_result(&response)
    }

    // --- Links ---

    #[tool(description = "Get the author's GitHub and LinkedIn profile links")]
    fn get_links(&self) -> Result<CallToolResult, McpError> {
        json_result(&links::get_links())
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CupcountService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cupcount".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("CupCount".into()),
                icons: None,
                website_url: Some(links::GITHUB_URL.into()),
            },
            instructions: Some(
                "CupCount - converts grams or milliliters of a baking ingredient into a count of \
                 bottle caps, shot glasses or plastic cups. Call usage_instructions first. \
                 Screen: get_form, toggle_phase/set_phase, select_ingredient/clear_ingredient, \
                 select_container, set_amount, calculate, reset_form. \
                 One-shot: convert. Catalogs: list_ingredients, list_containers. \
                 Other: get_links, cupcount_status."
                    .into(),
            ),
        }
    }
}
