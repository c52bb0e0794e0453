use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::portfolio::PresetQuestions;
use crate::profile::parser::{ContactInfo, ProfileInfo, ResumeDetails, SkillGroup};
use crate::profile::presets::PresetReplies;
use crate::profile::validation::{validate_profile, ProfileIssue};
use crate::profile::ConfigParser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SystemPromptResponse {
    pub system_prompt: String,
}

#[derive(Serialize)]
pub struct JobInfoResponse {
    pub job_info: String,
}

#[derive(Serialize)]
pub struct PresetsResponse {
    pub replies: PresetReplies,
    /// Suggested questions as authored in the profile, if any.
    pub questions: Option<PresetQuestions>,
}

/// GET /api/v1/persona/system-prompt
pub async fn handle_system_prompt(State(state): State<AppState>) -> Json<SystemPromptResponse> {
    let system_prompt = ConfigParser::new(&state.profile).generate_system_prompt();
    Json(SystemPromptResponse { system_prompt })
}

/// GET /api/v1/persona/presets
pub async fn handle_presets(State(state): State<AppState>) -> Json<PresetsResponse> {
    let parser = ConfigParser::new(&state.profile);
    Json(PresetsResponse {
        replies: parser.generate_preset_replies(),
        questions: state.profile.preset_questions.clone(),
    })
}

/// GET /api/v1/persona/job-info
pub async fn handle_job_info(State(state): State<AppState>) -> Json<JobInfoResponse> {
    let job_info = ConfigParser::new(&state.profile).generate_job_info();
    Json(JobInfoResponse { job_info })
}

/// GET /api/v1/portfolio/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<ProfileInfo> {
    Json(ConfigParser::new(&state.profile).generate_profile_info())
}

/// GET /api/v1/portfolio/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<Vec<SkillGroup>> {
    Json(ConfigParser::new(&state.profile).generate_skills_data())
}

/// GET /api/v1/portfolio/projects
/// Cards borrow from the shared profile, so they are serialized here.
pub async fn handle_projects(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let cards = ConfigParser::new(&state.profile).generate_project_data();
    Ok(Json(serde_json::to_value(cards)?))
}

/// GET /api/v1/portfolio/contact
pub async fn handle_contact(State(state): State<AppState>) -> Json<ContactInfo> {
    Json(ConfigParser::new(&state.profile).generate_contact_info())
}

/// GET /api/v1/portfolio/resume
pub async fn handle_resume(State(state): State<AppState>) -> Json<ResumeDetails> {
    Json(ConfigParser::new(&state.profile).generate_resume_details())
}

/// GET /api/v1/portfolio/issues
pub async fn handle_issues(State(state): State<AppState>) -> Json<Vec<ProfileIssue>> {
    Json(validate_profile(&state.profile))
}
