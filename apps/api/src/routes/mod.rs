pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;
use crate::tools::handlers as tool_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Persona API: prompt text for the chat orchestrator
        .route(
            "/api/v1/persona/system-prompt",
            get(handlers::handle_system_prompt),
        )
        .route("/api/v1/persona/presets", get(handlers::handle_presets))
        .route("/api/v1/persona/job-info", get(handlers::handle_job_info))
        // Portfolio views
        .route("/api/v1/portfolio/profile", get(handlers::handle_profile))
        .route("/api/v1/portfolio/skills", get(handlers::handle_skills))
        .route("/api/v1/portfolio/projects", get(handlers::handle_projects))
        .route("/api/v1/portfolio/contact", get(handlers::handle_contact))
        .route("/api/v1/portfolio/resume", get(handlers::handle_resume))
        .route("/api/v1/portfolio/issues", get(handlers::handle_issues))
        // Tool API
        .route("/api/v1/tools", get(tool_handlers::handle_list_tools))
        .route("/api/v1/tools/:name", post(tool_handlers::handle_invoke_tool))
        .with_state(state)
}
