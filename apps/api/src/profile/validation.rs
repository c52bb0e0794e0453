use serde::Serialize;

use crate::models::portfolio::PortfolioConfig;
use crate::models::skills::SkillCategory;

/// A problem in an authored profile. Surfaced as a warning; the transformer
/// degrades around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileIssue {
    pub field: String,
    pub message: String,
}

impl ProfileIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_profile(config: &PortfolioConfig) -> Vec<ProfileIssue> {
    let mut issues = Vec::new();
    let personal = &config.personal;

    if personal.name.trim().is_empty() {
        issues.push(ProfileIssue::new("personal.name", "name is empty"));
    }
    if personal.email.trim().is_empty() {
        issues.push(ProfileIssue::new("personal.email", "email is empty"));
    } else if !personal.email.contains('@') {
        issues.push(ProfileIssue::new(
            "personal.email",
            format!("'{}' does not look like an email address", personal.email),
        ));
    }

    for (field, url) in [
        ("social.linkedin", &config.social.linkedin),
        ("social.github", &config.social.github),
    ] {
        if !url.is_empty() && !is_http_url(url) {
            issues.push(ProfileIssue::new(
                field,
                format!("'{url}' is not an http(s) URL"),
            ));
        }
    }

    for key in config.skills.unknown_keys() {
        issues.push(ProfileIssue::new(
            format!("skills.{key}"),
            "unknown skill category, it will not be rendered",
        ));
    }

    for category in SkillCategory::ALL.into_iter().filter(|c| c.is_legacy()) {
        if !config.skills.get(category).is_empty() {
            let replacements: Vec<_> = category.aliases().iter().map(|a| a.key()).collect();
            issues.push(ProfileIssue::new(
                format!("skills.{}", category.key()),
                format!(
                    "legacy skill category, consider moving it to {}",
                    replacements.join(" / ")
                ),
            ));
        }
    }

    if config.job.seeking && config.job.contract_types.is_empty() {
        issues.push(ProfileIssue::new(
            "job.contractTypes",
            "seeking is true but no contract types are listed",
        ));
    }

    for (i, project) in config.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            issues.push(ProfileIssue::new(
                format!("projects[{i}].title"),
                "project has no title",
            ));
        }
    }

    issues
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::testing::sample_config;

    #[test]
    fn test_sample_profile_is_clean() {
        assert!(validate_profile(&sample_config()).is_empty());
    }

    #[test]
    fn test_empty_social_is_not_an_issue() {
        let mut config = sample_config();
        config.social.github = String::new();
        assert!(validate_profile(&config).is_empty());
    }

    #[test]
    fn test_bad_social_url_flagged() {
        let mut config = sample_config();
        config.social.linkedin = "linkedin.com/in/jane".to_string();
        let issues = validate_profile(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "social.linkedin");
    }

    #[test]
    fn test_missing_identity_flagged() {
        let mut config = sample_config();
        config.personal.name = "  ".to_string();
        config.personal.email = "jane-at-example".to_string();
        let fields: Vec<_> = validate_profile(&config)
            .into_iter()
            .map(|i| i.field)
            .collect();
        assert_eq!(fields, vec!["personal.name", "personal.email"]);
    }

    #[test]
    fn test_unknown_skill_key_flagged() {
        let mut config = sample_config();
        config.skills = serde_json::from_value(serde_json::json!({
            "programming": ["Rust"],
            "knitting": ["Purl"]
        }))
        .unwrap();
        let issues = validate_profile(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "skills.knitting");
    }

    #[test]
    fn test_legacy_skill_key_flagged() {
        let mut config = sample_config();
        config
            .skills
            .insert(SkillCategory::DevopsCloud, vec!["Ansible".to_string()]);
        let issues = validate_profile(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "skills.devops_cloud");
        assert!(issues[0].message.contains("cloud_devops"));
    }

    #[test]
    fn test_seeking_without_contract_types_flagged() {
        let mut config = sample_config();
        config.job.contract_types.clear();
        assert_eq!(validate_profile(&config)[0].field, "job.contractTypes");
    }
}
