//! `ConfigParser` — pure projections from a `PortfolioConfig` to the prompt
//! text and the structured views served to the chat layer.
//!
//! Nothing here caches: every call re-derives its output from the borrowed
//! config, so identical input always produces byte-identical output.

use serde::Serialize;

use crate::models::portfolio::{PortfolioConfig, Project};
use crate::models::skills::SkillCategory;
use crate::profile::education::build_education_lines;
use crate::profile::presets::{preset_replies, PresetReplies};
use crate::profile::prompts::{
    fill, BACKGROUND_HEADER, COMMUNICATION_STYLE_TEMPLATE, INTERVIEW_GUIDELINES_TEMPLATE,
    NOT_SEEKING_MESSAGE, PERSONA_FRAMING_TEMPLATE, TOOL_POLICY_HEADER,
};
use crate::tools::ToolName;

const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub handle: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub name: String,
    pub age: String,
    pub location: String,
    pub description: String,
    pub src: String,
    pub fallback_src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: Vec<String>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard<'a> {
    pub category: &'a str,
    pub title: &'a str,
    pub src: &'a str,
    pub content: &'a Project,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDetails {
    pub title: String,
    pub description: String,
    pub file_type: String,
    pub last_updated: String,
    pub file_size: String,
    pub download_url: String,
}

pub struct ConfigParser<'a> {
    config: &'a PortfolioConfig,
}

impl<'a> ConfigParser<'a> {
    pub fn new(config: &'a PortfolioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a PortfolioConfig {
        self.config
    }

    /// Builds the persona system prompt handed verbatim to the chat model.
    pub fn generate_system_prompt(&self) -> String {
        let personal = &self.config.personal;

        let sections = [
            fill(
                PERSONA_FRAMING_TEMPLATE,
                &[("name", &personal.name), ("title", &personal.title)],
            ),
            fill(COMMUNICATION_STYLE_TEMPLATE, &[("name", &personal.name)]),
            self.tool_policy_section(),
            BACKGROUND_HEADER.to_string(),
            self.personal_section(),
            self.technical_section(),
            self.experience_section(),
            self.featured_projects_section(),
            self.personality_section(),
            self.career_goals_section(),
            fill(INTERVIEW_GUIDELINES_TEMPLATE, &[("name", &personal.name)]),
        ];

        let mut prompt = sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        prompt.push('\n');
        prompt
    }

    /// Contact card. Socials with an empty URL are left out.
    pub fn generate_contact_info(&self) -> ContactInfo {
        let personal = &self.config.personal;
        let social = &self.config.social;

        let socials = [("LinkedIn", &social.linkedin), ("GitHub", &social.github)]
            .into_iter()
            .filter(|(_, url)| !url.is_empty())
            .map(|(name, url)| SocialLink {
                name: name.to_string(),
                url: url.clone(),
            })
            .collect();

        ContactInfo {
            name: personal.name.clone(),
            email: personal.email.clone(),
            handle: personal.handle.clone(),
            socials,
        }
    }

    pub fn generate_profile_info(&self) -> ProfileInfo {
        let personal = &self.config.personal;
        ProfileInfo {
            name: personal.name.clone(),
            age: format!("{} years old", personal.age),
            location: personal.location.clone(),
            description: personal.bio.clone(),
            src: personal.avatar.clone(),
            fallback_src: personal.fallback_avatar.clone(),
        }
    }

    /// Skill groups in display order; empty categories are dropped.
    pub fn generate_skills_data(&self) -> Vec<SkillGroup> {
        SkillCategory::DISPLAY
            .into_iter()
            .filter_map(|category| {
                let skills = self.config.skills.get(category);
                (!skills.is_empty()).then(|| SkillGroup {
                    category: category.label(),
                    skills: skills.to_vec(),
                    color: category.color(),
                })
            })
            .collect()
    }

    pub fn generate_project_data(&self) -> Vec<ProjectCard<'a>> {
        self.config
            .projects
            .iter()
            .map(|project| ProjectCard {
                category: &project.category,
                title: &project.title,
                src: project
                    .images
                    .first()
                    .map(|img| img.src.as_str())
                    .filter(|src| !src.is_empty())
                    .unwrap_or(PLACEHOLDER_IMAGE),
                content: project,
            })
            .collect()
    }

    pub fn generate_resume_details(&self) -> ResumeDetails {
        let resume = &self.config.resume;
        ResumeDetails {
            title: resume.title.clone(),
            description: resume.description.clone(),
            file_type: resume.file_type.clone(),
            last_updated: resume.last_updated.clone(),
            file_size: resume.file_size.clone(),
            download_url: resume.download_url.clone(),
        }
    }

    /// Recruiter-facing summary of what the subject is looking for.
    /// Collapses to a fixed sentence when the subject is not seeking.
    pub fn generate_job_info(&self) -> String {
        let job = &self.config.job;
        if !job.seeking {
            return NOT_SEEKING_MESSAGE.to_string();
        }

        let personal = &self.config.personal;
        let social = &self.config.social;

        format!(
            "Here's what I'm looking for 👇\n\
             \n\
             - 📅 **Start date**: {start}\n\
             - 📝 **Contract types**: {contracts}\n\
             - 🌍 **Preferred location**: {location}\n\
             - 👨‍💻 **Focus areas**: {focus}\n\
             - 💼 **Work style**: {work_style}\n\
             - 🎯 **Goals**: {goals}\n\
             \n\
             📬 **Contact me** via:\n\
             - Email: {email}\n\
             - LinkedIn: {linkedin}\n\
             - GitHub: {github}\n\
             \n\
             {availability} ✌️",
            start = job.start_date,
            contracts = job.contract_types.join(", "),
            location = job.preferred_location,
            focus = job.focus_areas.join(", "),
            work_style = job.work_style,
            goals = job.goals,
            email = personal.email,
            linkedin = social.linkedin,
            github = social.github,
            availability = job.availability,
        )
    }

    pub fn generate_preset_replies(&self) -> PresetReplies {
        preset_replies(&self.config.personal.bio)
    }

    fn tool_policy_section(&self) -> String {
        let mut lines = vec![TOOL_POLICY_HEADER.to_string(), String::new()];
        lines.extend(
            ToolName::ALL
                .iter()
                .map(|tool| format!("- For {} → use {} tool", tool.intent(), tool.as_str())),
        );
        lines.join("\n")
    }

    fn personal_section(&self) -> String {
        let personal = &self.config.personal;
        let education = build_education_lines(self.config.education.as_ref());

        let lines = [
            "### Personal Information".to_string(),
            format!("- Age: {}", personal.age),
            format!("- Current Status: {}", personal.title),
            format!("- Location: {}", personal.location),
            education.education_line,
            education.academic_perf_line,
            education.achievements_line,
        ];
        join_non_empty(lines)
    }

    fn technical_section(&self) -> String {
        let mut lines = vec!["### Technical Expertise".to_string()];
        lines.extend(SkillCategory::TECHNICAL.into_iter().filter_map(|category| {
            let skills = self.config.skills.get(category);
            (!skills.is_empty()).then(|| format!("- {}: {}", category.label(), skills.join(", ")))
        }));
        lines.join("\n")
    }

    fn experience_section(&self) -> String {
        let mut lines = vec!["### Professional Experience".to_string()];
        lines.extend(self.config.experience.iter().map(|exp| {
            format!(
                "- {} at {} ({}): {}",
                exp.position, exp.company, exp.duration, exp.description
            )
        }));
        lines.join("\n")
    }

    fn featured_projects_section(&self) -> String {
        let mut lines = vec!["### Key Projects & Achievements".to_string()];
        lines.extend(
            self.config
                .projects
                .iter()
                .filter(|p| p.featured)
                .map(|p| format!("- {}: {}", p.title, p.description)),
        );
        lines.join("\n")
    }

    fn personality_section(&self) -> String {
        let personality = &self.config.personality;
        [
            "### Personality & Work Style".to_string(),
            format!("- Core Motivation: {}", personality.motivation),
            format!("- Working Style: {}", personality.working_style),
            format!("- Key Traits: {}", personality.traits.join(", ")),
            format!(
                "- Professional Interests: {}",
                personality.interests.join(", ")
            ),
        ]
        .join("\n")
    }

    /// Empty when the subject is not seeking, so no partial job fields leak.
    fn career_goals_section(&self) -> String {
        let job = &self.config.job;
        if !job.seeking {
            return String::new();
        }
        [
            "### Career Goals & Availability".to_string(),
            format!(
                "- Seeking: {} starting {}",
                job.contract_types.join(", "),
                job.start_date
            ),
            format!("- Preferred Location: {}", job.preferred_location),
            format!("- Focus Areas: {}", job.focus_areas.join(", ")),
            format!("- Career Goals: {}", job.goals),
            format!("- Work Style: {}", job.work_style),
        ]
        .join("\n")
    }
}

fn join_non_empty<I: IntoIterator<Item = String>>(lines: I) -> String {
    lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
