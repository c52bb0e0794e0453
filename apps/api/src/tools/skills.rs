//! `getSkills` — technical skills, education and experience in one payload.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::portfolio::{EducationEntry, Experience, PortfolioConfig};
use crate::models::skills::SkillCategory;
use crate::profile::education;

const SKILLS_MESSAGE: &str = "I'd be happy to walk you through my technical skills and \
    expertise. I've built a diverse skill set across multiple domains through both my \
    academic coursework and hands-on project experience. I'm particularly passionate about \
    machine learning and full-stack development, where I've been able to apply these \
    technologies to solve real-world problems. Each area of my expertise has been \
    strengthened through practical application - from building end-to-end web applications \
    to developing ML models for complex data analysis. I believe my combination of \
    theoretical knowledge and practical experience, along with my enthusiasm for continuous \
    learning, would allow me to contribute effectively to your team. What specific technical \
    areas would you like me to elaborate on?";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsOverview {
    /// Keyed by `SkillCategory::tool_key`; empty categories are left out.
    pub technical_skills: BTreeMap<&'static str, Vec<String>>,
    pub education: Vec<EducationRecord>,
    pub achievements: Vec<String>,
    pub experience: Vec<ExperienceRecord>,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub graduation_date: String,
    pub achievements: Vec<String>,
}

impl From<&EducationEntry> for EducationRecord {
    fn from(entry: &EducationEntry) -> Self {
        Self {
            degree: entry.degree.clone(),
            institution: entry.institution.clone(),
            duration: entry.duration.clone(),
            graduation_date: entry.graduation_date.clone().unwrap_or_default(),
            achievements: entry.achievements.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceRecord {
    pub position: String,
    pub company: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub technologies: Vec<String>,
    pub description: String,
}

impl From<&Experience> for ExperienceRecord {
    fn from(exp: &Experience) -> Self {
        Self {
            position: exp.position.clone(),
            company: exp.company.clone(),
            duration: exp.duration.clone(),
            kind: exp.kind.clone(),
            technologies: exp.technologies.clone(),
            description: exp.description.clone(),
        }
    }
}

pub fn get_skills(config: &PortfolioConfig) -> SkillsOverview {
    let technical_skills = SkillCategory::TECHNICAL
        .into_iter()
        .filter_map(|category| {
            let skills = config.skills.get(category);
            (!skills.is_empty()).then(|| (category.tool_key(), skills.to_vec()))
        })
        .collect();

    let education_ref = config.education.as_ref();

    SkillsOverview {
        technical_skills,
        education: education::entries(education_ref)
            .into_iter()
            .map(EducationRecord::from)
            .collect(),
        achievements: education::all_achievements(education_ref),
        experience: config.experience.iter().map(ExperienceRecord::from).collect(),
        message: SKILLS_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Education, StructuredEducation};
    use crate::profile::testing::sample_config;

    #[test]
    fn test_technical_skills_skip_empty_categories() {
        let config = sample_config();
        let overview = get_skills(&config);
        let keys: Vec<_> = overview.technical_skills.keys().copied().collect();
        assert_eq!(keys, vec!["backendDevelopment", "programming"]);
        assert!(!overview.technical_skills.contains_key("softSkills"));
    }

    #[test]
    fn test_education_records_default_optional_fields() {
        let config = sample_config();
        let overview = get_skills(&config);
        let bsc = overview
            .education
            .iter()
            .find(|e| e.degree == "BSc Computer Science")
            .unwrap();
        assert_eq!(bsc.graduation_date, "");
        assert!(bsc.achievements.is_empty());
    }

    #[test]
    fn test_achievements_flatten_across_entries() {
        let config = sample_config();
        let overview = get_skills(&config);
        assert_eq!(overview.achievements, vec!["Top 5% of cohort", "Robotics club lead"]);
    }

    #[test]
    fn test_structured_education_contributes_top_level_achievements() {
        let mut config = sample_config();
        config.education = Some(Education::Structured(StructuredEducation {
            current: Some(EducationEntry {
                degree: "MSc".to_string(),
                institution: "ETH".to_string(),
                achievements: Some(vec!["TA".to_string()]),
                ..Default::default()
            }),
            previous: vec![],
            achievements: vec!["Scholarship".to_string()],
        }));
        let overview = get_skills(&config);
        assert_eq!(overview.education.len(), 1);
        assert_eq!(overview.achievements, vec!["TA", "Scholarship"]);
    }

    #[test]
    fn test_serialized_shape() {
        let config = sample_config();
        let json = serde_json::to_value(get_skills(&config)).unwrap();
        assert_eq!(json["technicalSkills"]["programming"][0], "Rust");
        assert_eq!(json["experience"][0]["type"], "Internship");
        assert!(json["education"][0].get("graduationDate").is_some());
        assert!(json["message"].as_str().unwrap().starts_with("I'd be happy"));
    }
}
