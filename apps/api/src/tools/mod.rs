//! Tool handlers exposed to the external chat runtime.
//!
//! Every tool is parameterless and read-only: it takes the loaded profile,
//! returns a fixed JSON shape, and cannot fail for a well-formed profile.

pub mod handlers;
pub mod job;
pub mod skills;
pub mod views;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::portfolio::PortfolioConfig;
use crate::profile::ConfigParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolName {
    GetPresentation,
    GetProjects,
    GetSkills,
    GetContact,
    GetResume,
    GetJob,
}

impl ToolName {
    /// Order in which tools are declared to the model.
    pub const ALL: [ToolName; 6] = [
        ToolName::GetPresentation,
        ToolName::GetProjects,
        ToolName::GetSkills,
        ToolName::GetContact,
        ToolName::GetResume,
        ToolName::GetJob,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::GetPresentation => "getPresentation",
            ToolName::GetProjects => "getProjects",
            ToolName::GetSkills => "getSkills",
            ToolName::GetContact => "getContact",
            ToolName::GetResume => "getResume",
            ToolName::GetJob => "getJob",
        }
    }

    /// Question intent the system prompt routes to this tool.
    pub fn intent(self) -> &'static str {
        match self {
            ToolName::GetPresentation => "\"tell me about yourself\"",
            ToolName::GetProjects => "project-related questions",
            ToolName::GetSkills => "technical skills questions",
            ToolName::GetContact => "contact/networking questions",
            ToolName::GetResume => "resume/background questions",
            ToolName::GetJob => "job/career questions",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolName::GetPresentation => {
                "Introduces me: who I am, where I am based and what I do."
            }
            ToolName::GetProjects => {
                "Shows my projects with their tech stack, status, links and images."
            }
            ToolName::GetSkills => {
                "This tool provides a comprehensive overview of technical skills, expertise, \
                 and professional qualifications."
            }
            ToolName::GetContact => "Gives my email, handle and professional social profiles.",
            ToolName::GetResume => "Provides my resume with its download link and details.",
            ToolName::GetJob => {
                "Provides detailed information about job preferences, technical experience, \
                 and current availability for recruiters and hiring teams."
            }
        }
    }

    /// Registration record for the tool-calling runtime. Every tool takes an
    /// empty object.
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.as_str(),
            description: self.description(),
            parameters: json!({ "type": "object", "properties": {} }),
        }
    }

    /// Runs the tool against the given profile.
    pub fn invoke(self, config: &PortfolioConfig) -> serde_json::Result<Value> {
        let parser = ConfigParser::new(config);
        match self {
            ToolName::GetPresentation => serde_json::to_value(views::get_presentation(&parser)),
            ToolName::GetProjects => serde_json::to_value(views::get_projects(&parser)),
            ToolName::GetSkills => serde_json::to_value(skills::get_skills(config)),
            ToolName::GetContact => serde_json::to_value(views::get_contact(&parser)),
            ToolName::GetResume => serde_json::to_value(views::get_resume(&parser)),
            ToolName::GetJob => serde_json::to_value(job::get_job(config)),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTool(pub String);

impl FromStr for ToolName {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

pub fn definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.into_iter().map(ToolName::definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::testing::sample_config;

    #[test]
    fn test_names_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>(), Ok(tool));
            assert_eq!(tool.to_string(), tool.as_str());
        }
        assert_eq!(
            "getWeather".parse::<ToolName>(),
            Err(UnknownTool("getWeather".to_string()))
        );
    }

    #[test]
    fn test_serde_name_matches_registered_name() {
        for tool in ToolName::ALL {
            assert_eq!(serde_json::to_value(tool).unwrap(), tool.as_str());
        }
    }

    #[test]
    fn test_definitions_take_empty_object() {
        let defs = definitions();
        assert_eq!(defs.len(), 6);
        for def in &defs {
            assert_eq!(def.parameters["type"], "object");
            assert_eq!(def.parameters["properties"], json!({}));
            assert!(!def.description.is_empty());
        }
    }

    #[test]
    fn test_every_tool_returns_an_object() {
        let config = sample_config();
        for tool in ToolName::ALL {
            let output = tool.invoke(&config).unwrap();
            assert!(output.is_object(), "{tool} returned {output}");
        }
    }

    #[test]
    fn test_invoke_is_deterministic() {
        let config = sample_config();
        for tool in ToolName::ALL {
            assert_eq!(tool.invoke(&config).unwrap(), tool.invoke(&config).unwrap());
        }
    }
}
