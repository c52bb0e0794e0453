//! `getJob` — everything a recruiter asks about availability and fit.

use serde::Serialize;

use crate::models::portfolio::{Education, PortfolioConfig};
use crate::models::skills::SkillCategory;

const FREELANCE_KIND: &str = "Freelance";
const FREELANCE_FALLBACK: &str = "Active freelancer";
const NOT_AVAILABLE: &str = "Not currently available";
const PORTFOLIO_NOTE: &str = "This AI-powered portfolio showcases my projects and skills";

const SOFT_SKILLS: [&str; 6] = [
    "Team Leadership",
    "Project Management",
    "Problem Solving",
    "Communication",
    "Adaptability",
    "Innovation",
];

const PROFESSIONAL_MESSAGE: &str = "I'm actively looking for full-time opportunities (CDI or \
    CDD) where I can apply my technical skills, contribute to real products, and continue \
    learning. I enjoy solving problems, working in collaborative teams, and building robust \
    backend systems and AI features. I'd love to know more about the technical challenges \
    your team is facing and how I might contribute.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOverview {
    pub availability: String,
    pub preferences: Preferences,
    pub experience: ExperienceSummary,
    pub skills: SkillSummary,
    pub achievements: Vec<String>,
    pub looking_for: LookingFor,
    pub contact: Contact,
    pub personality: PersonalitySummary,
    pub professional_message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub contract_types: Vec<String>,
    pub roles: Vec<String>,
    pub work_mode: String,
    pub location: String,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub freelance_work: String,
    pub recent_roles: Vec<String>,
    pub project_highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSummary {
    pub technical: Vec<String>,
    pub soft: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookingFor {
    pub goals: String,
    pub work_style: String,
    pub motivation: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalitySummary {
    pub traits: Vec<String>,
    pub fun_facts: Vec<String>,
    pub working_style: String,
}

pub fn get_job(config: &PortfolioConfig) -> JobOverview {
    let job = &config.job;
    let personality = &config.personality;

    JobOverview {
        availability: availability(&job.start_date),
        preferences: Preferences {
            contract_types: job.contract_types.clone(),
            roles: job.roles.clone(),
            work_mode: job.preferred_location.clone(),
            location: config.personal.location.clone(),
            focus_areas: job.focus_areas.clone(),
        },
        experience: ExperienceSummary {
            freelance_work: config
                .experience
                .iter()
                .find(|exp| exp.kind == FREELANCE_KIND)
                .map(|exp| exp.description.as_str())
                .filter(|d| !d.is_empty())
                .unwrap_or(FREELANCE_FALLBACK)
                .to_string(),
            recent_roles: config
                .experience
                .iter()
                .map(|exp| format!("{} at {} ({})", exp.position, exp.company, exp.duration))
                .collect(),
            project_highlights: config
                .projects
                .iter()
                .filter(|p| p.featured)
                .map(|p| format!("{}: {}", p.title, p.description))
                .collect(),
        },
        skills: SkillSummary {
            technical: recruiter_technical_skills(config),
            soft: SOFT_SKILLS.to_vec(),
        },
        achievements: education_achievements(config.education.as_ref()),
        looking_for: LookingFor {
            goals: job.goals.clone(),
            work_style: job.work_style.clone(),
            motivation: personality.motivation.clone(),
            interests: personality.interests.clone(),
        },
        contact: Contact {
            email: config.personal.email.clone(),
            linkedin: config.social.linkedin.clone(),
            github: config.social.github.clone(),
            portfolio: PORTFOLIO_NOTE,
        },
        personality: PersonalitySummary {
            traits: personality.traits.clone(),
            fun_facts: personality.fun_facts.clone(),
            working_style: personality.working_style.clone(),
        },
        professional_message: PROFESSIONAL_MESSAGE,
    }
}

pub fn availability(start_date: &str) -> String {
    if start_date.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("Available to start from {start_date}")
    }
}

/// Programming plus the legacy technical categories, resolved through the
/// alias table. First occurrence wins.
fn recruiter_technical_skills(config: &PortfolioConfig) -> Vec<String> {
    let mut technical: Vec<String> = Vec::new();
    for category in SkillCategory::RECRUITER_TECHNICAL {
        for skill in config.skills.resolve(category) {
            if !technical.iter().any(|s| s == skill) {
                technical.push(skill.to_string());
            }
        }
    }
    technical
}

/// List shape: the most recent entry's achievements. Structured shape: the
/// top-level list.
fn education_achievements(education: Option<&Education>) -> Vec<String> {
    match education {
        None => Vec::new(),
        Some(Education::List(entries)) => entries
            .first()
            .and_then(|e| e.achievements.clone())
            .unwrap_or_default(),
        Some(Education::Structured(structured)) => structured.achievements.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{EducationEntry, Experience, StructuredEducation};
    use crate::models::skills::Skills;
    use crate::profile::testing::sample_config;

    #[test]
    fn test_availability_with_start_date() {
        assert_eq!(
            availability("September 2025"),
            "Available to start from September 2025"
        );
    }

    #[test]
    fn test_availability_without_start_date() {
        let mut config = sample_config();
        config.job.start_date = String::new();
        assert_eq!(get_job(&config).availability, "Not currently available");
    }

    #[test]
    fn test_freelance_description_preferred() {
        let mut config = sample_config();
        config.experience.push(Experience {
            company: "Self".to_string(),
            position: "Consultant".to_string(),
            kind: "Freelance".to_string(),
            duration: "2023".to_string(),
            description: "Shipped dashboards for SMEs".to_string(),
            technologies: vec![],
        });
        let overview = get_job(&config);
        assert_eq!(overview.experience.freelance_work, "Shipped dashboards for SMEs");
        assert_eq!(
            overview.experience.recent_roles.last().unwrap(),
            "Consultant at Self (2023)"
        );
    }

    #[test]
    fn test_freelance_fallback() {
        let config = sample_config();
        assert_eq!(get_job(&config).experience.freelance_work, "Active freelancer");
    }

    #[test]
    fn test_project_highlights_only_featured() {
        let config = sample_config();
        let highlights = get_job(&config).experience.project_highlights;
        assert_eq!(highlights, vec!["Crate Indexer: Search engine for Rust crates"]);
    }

    #[test]
    fn test_technical_skills_resolve_legacy_keys_without_duplicates() {
        let config = sample_config();
        // web_development and databases both fall back to backend_development.
        assert_eq!(
            get_job(&config).skills.technical,
            vec!["Rust", "Python", "Axum", "PostgreSQL"]
        );
    }

    #[test]
    fn test_technical_skills_prefer_legacy_values() {
        let mut config = sample_config();
        config.skills = [
            (SkillCategory::Programming, vec!["Go".to_string()]),
            (SkillCategory::Databases, vec!["Redis".to_string()]),
            (SkillCategory::BackendDevelopment, vec!["Gin".to_string()]),
        ]
        .into_iter()
        .collect::<Skills>();
        assert_eq!(get_job(&config).skills.technical, vec!["Go", "Gin", "Redis"]);
    }

    #[test]
    fn test_soft_skills_are_fixed() {
        let mut config = sample_config();
        config.skills = Skills::default();
        let soft = get_job(&config).skills.soft;
        assert_eq!(soft.len(), 6);
        assert_eq!(soft[0], "Team Leadership");
    }

    #[test]
    fn test_achievements_from_list_shape_use_first_entry() {
        let config = sample_config();
        assert_eq!(
            get_job(&config).achievements,
            vec!["Top 5% of cohort", "Robotics club lead"]
        );
    }

    #[test]
    fn test_achievements_from_structured_shape() {
        let mut config = sample_config();
        config.education = Some(Education::Structured(StructuredEducation {
            current: Some(EducationEntry {
                achievements: Some(vec!["ignored".to_string()]),
                ..Default::default()
            }),
            previous: vec![],
            achievements: vec!["Scholarship".to_string()],
        }));
        assert_eq!(get_job(&config).achievements, vec!["Scholarship"]);
    }

    #[test]
    fn test_achievements_absent_education() {
        let mut config = sample_config();
        config.education = None;
        assert!(get_job(&config).achievements.is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let config = sample_config();
        let json = serde_json::to_value(get_job(&config)).unwrap();
        assert_eq!(json["preferences"]["workMode"], "Remote or Paris");
        assert!(json["lookingFor"].get("workStyle").is_some());
        assert!(json["personality"].get("funFacts").is_some());
        assert_eq!(json["contact"]["github"], "https://github.com/jane");
        assert!(json["professionalMessage"].is_string());
    }
}
