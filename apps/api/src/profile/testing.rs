//! Shared profile fixture for unit tests.

use crate::models::portfolio::{
    Education, EducationEntry, Experience, Job, PersonalInfo, Personality, PortfolioConfig,
    Project, ProjectImage, ProjectLink, Resume, Social,
};
use crate::models::skills::SkillCategory;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_config() -> PortfolioConfig {
    PortfolioConfig {
        personal: PersonalInfo {
            name: "Jane Doe".to_string(),
            age: 23,
            location: "Paris".to_string(),
            title: "Software Engineering Student".to_string(),
            email: "jane@example.com".to_string(),
            handle: "@janedoe".to_string(),
            bio: "I'm Jane, a student who loves building backend systems.".to_string(),
            avatar: "/avatar.png".to_string(),
            fallback_avatar: "/avatar-fallback.png".to_string(),
        },
        education: Some(Education::List(vec![
            EducationEntry {
                degree: "MSc Software Engineering".to_string(),
                institution: "Sorbonne".to_string(),
                duration: "2023-2025".to_string(),
                graduation_date: Some("June 2025".to_string()),
                cgpa: Some("3.8".to_string()),
                achievements: Some(strings(&["Top 5% of cohort", "Robotics club lead"])),
                ..Default::default()
            },
            EducationEntry {
                degree: "BSc Computer Science".to_string(),
                institution: "Université Lyon".to_string(),
                duration: "2020-2023".to_string(),
                ..Default::default()
            },
        ])),
        experience: vec![Experience {
            company: "Acme".to_string(),
            position: "Backend Intern".to_string(),
            kind: "Internship".to_string(),
            duration: "Jun 2024 - Aug 2024".to_string(),
            description: "Built billing services".to_string(),
            technologies: strings(&["Rust", "PostgreSQL"]),
        }],
        skills: [
            (SkillCategory::Programming, strings(&["Rust", "Python"])),
            (SkillCategory::BackendDevelopment, strings(&["Axum", "PostgreSQL"])),
            (SkillCategory::FrontendDevelopment, Vec::new()),
            (SkillCategory::SoftSkills, strings(&["Mentoring"])),
        ]
        .into_iter()
        .collect(),
        projects: vec![
            Project {
                title: "Crate Indexer".to_string(),
                category: "Backend".to_string(),
                description: "Search engine for Rust crates".to_string(),
                tech_stack: strings(&["Rust", "Tantivy"]),
                date: "2024".to_string(),
                status: "Completed".to_string(),
                featured: true,
                links: vec![ProjectLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/jane/crate-indexer".to_string(),
                }],
                images: vec![ProjectImage {
                    src: "/indexer.png".to_string(),
                    alt: "Indexer".to_string(),
                }],
                ..Default::default()
            },
            Project {
                title: "Old Blog".to_string(),
                category: "Web".to_string(),
                description: "Static blog".to_string(),
                date: "2021".to_string(),
                status: "Archived".to_string(),
                featured: false,
                ..Default::default()
            },
        ],
        social: Social {
            linkedin: "https://linkedin.com/in/jane".to_string(),
            github: "https://github.com/jane".to_string(),
        },
        job: Job {
            seeking: true,
            contract_types: strings(&["Internship", "Full-time"]),
            start_date: "September 2025".to_string(),
            preferred_location: "Remote or Paris".to_string(),
            roles: strings(&["Backend Engineer"]),
            focus_areas: strings(&["Distributed systems", "APIs"]),
            availability: "Open to chat any time".to_string(),
            work_style: "Hybrid".to_string(),
            goals: "Grow into a systems engineer".to_string(),
        },
        personality: Personality {
            traits: strings(&["Curious", "Reliable"]),
            interests: strings(&["Compilers", "Climbing"]),
            fun_facts: strings(&["Solved a Rubik's cube in 40s"]),
            working_style: "Async-first, well documented".to_string(),
            motivation: "Building tools people rely on".to_string(),
        },
        resume: Resume {
            title: "Jane Doe - Resume".to_string(),
            description: "Backend-focused resume".to_string(),
            file_type: "PDF".to_string(),
            last_updated: "2025-01".to_string(),
            file_size: "120 KB".to_string(),
            download_url: "/resume.pdf".to_string(),
        },
        chatbot: None,
        preset_questions: None,
        meta: None,
    }
}
