//! Axum route handlers for the tool API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tools::{definitions, ToolDefinition, ToolName};

/// GET /api/v1/tools
///
/// Tool catalogue for the chat runtime to register.
pub async fn handle_list_tools() -> Json<Vec<ToolDefinition>> {
    Json(definitions())
}

/// POST /api/v1/tools/:name
///
/// Runs a tool. Tools take no parameters, so any request body is ignored.
pub async fn handle_invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let tool: ToolName = name.parse()?;
    debug!("Invoking tool {tool}");
    let output = tool.invoke(&state.profile)?;
    Ok(Json(output))
}
