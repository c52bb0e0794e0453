//! Tools that wrap a single `ConfigParser` view with a short spoken lead-in.

use serde::Serialize;

use crate::profile::{ConfigParser, ContactInfo, ProfileInfo, ProjectCard, ResumeDetails};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub profile: ProfileInfo,
    pub title: String,
    pub presentation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsOverview<'a> {
    pub projects: Vec<ProjectCard<'a>>,
    pub featured: Vec<&'a str>,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactOverview {
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeOverview {
    pub resume: ResumeDetails,
    pub message: &'static str,
}

pub fn get_presentation(parser: &ConfigParser<'_>) -> Presentation {
    let personal = &parser.config().personal;
    Presentation {
        profile: parser.generate_profile_info(),
        title: personal.title.clone(),
        presentation: personal.bio.clone(),
    }
}

pub fn get_projects<'a>(parser: &ConfigParser<'a>) -> ProjectsOverview<'a> {
    let config = parser.config();
    ProjectsOverview {
        projects: parser.generate_project_data(),
        featured: config
            .projects
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.title.as_str())
            .collect(),
        message: "Here are some of my key projects. Ask me about any of them for more detail.",
    }
}

pub fn get_contact(parser: &ConfigParser<'_>) -> ContactOverview {
    ContactOverview {
        contact: parser.generate_contact_info(),
        message: "Here's how you can reach me. Email is the fastest way to get an answer.",
    }
}

pub fn get_resume(parser: &ConfigParser<'_>) -> ResumeOverview {
    ResumeOverview {
        resume: parser.generate_resume_details(),
        message: "Here's my resume with all the details. Feel free to download it.",
    }
}
