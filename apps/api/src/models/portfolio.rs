use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::models::skills::Skills;

/// Root profile document. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub personal: PersonalInfo,
    /// A section matching neither authored shape is dropped with a warning.
    #[serde(default, deserialize_with = "deserialize_education")]
    pub education: Option<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social: Social,
    pub job: Job,
    #[serde(default)]
    pub personality: Personality,
    #[serde(default)]
    pub resume: Resume,
    #[serde(default)]
    pub chatbot: Option<Chatbot>,
    #[serde(default)]
    pub preset_questions: Option<PresetQuestions>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub age: u32,
    pub location: String,
    pub title: String,
    pub email: String,
    pub handle: String,
    pub bio: String,
    pub avatar: String,
    pub fallback_avatar: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub graduation_date: Option<String>,
    /// Grade point average. Authors write it either as a string or a number.
    #[serde(default, deserialize_with = "deserialize_grade")]
    pub cgpa: Option<String>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

/// Education comes in two authored shapes. Both normalize to the same
/// (current, history, achievements) triple in `profile::education`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Education {
    /// Entries ordered most recent first. `null` entries are skipped.
    List(#[serde(deserialize_with = "deserialize_entries")] Vec<EducationEntry>),
    Structured(StructuredEducation),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredEducation {
    #[serde(default)]
    pub current: Option<EducationEntry>,
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub previous: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// Engagement kind as authored, e.g. "Internship" or "Freelance".
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

/// Empty string means the link was not provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Social {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub seeking: bool,
    #[serde(default)]
    pub contract_types: Vec<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub preferred_location: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub work_style: String,
    #[serde(default)]
    pub goals: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub fun_facts: Vec<String>,
    #[serde(default)]
    pub working_style: String,
    #[serde(default)]
    pub motivation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub file_size: String,
    #[serde(default)]
    pub download_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Chatbot {
    pub name: String,
    pub personality: String,
    pub tone: String,
    pub language: String,
    pub response_style: String,
    pub use_emojis: bool,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresetQuestions {
    pub me: Vec<String>,
    pub professional: Vec<String>,
    pub projects: Vec<String>,
    pub contact: Vec<String>,
    pub fun: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    pub config_version: String,
    pub last_updated: String,
    pub generated_by: String,
    pub description: String,
}

fn deserialize_education<'de, D>(deserializer: D) -> Result<Option<Education>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match Education::deserialize(value) {
        Ok(education) => Ok(Some(education)),
        Err(err) => {
            warn!("Ignoring malformed education section: {err}");
            Ok(None)
        }
    }
}

fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<EducationEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<EducationEntry>>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().flatten().collect())
}

/// `null` reads as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_grade<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Grade {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Grade>::deserialize(deserializer)? {
        Some(Grade::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(Grade::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
