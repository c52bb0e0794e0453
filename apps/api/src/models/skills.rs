//! Skill taxonomy — one canonical category enumeration covering both the
//! current keys and the legacy keys older profile files still carry.
//!
//! Legacy categories resolve through `SkillCategory::aliases` when the profile
//! has nothing stored under the legacy key itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillCategory {
    Programming,
    BackendDevelopment,
    FrontendDevelopment,
    DataScience,
    MlComputerVision,
    GenaiAi,
    CloudDevops,
    IotEmbedded,
    SoftSkills,
    // Legacy taxonomy
    MlAi,
    WebDevelopment,
    Databases,
    DevopsCloud,
    IotHardware,
}

impl SkillCategory {
    /// Technical categories of the current taxonomy, in rendering order.
    pub const TECHNICAL: [SkillCategory; 8] = [
        SkillCategory::Programming,
        SkillCategory::BackendDevelopment,
        SkillCategory::FrontendDevelopment,
        SkillCategory::DataScience,
        SkillCategory::MlComputerVision,
        SkillCategory::GenaiAi,
        SkillCategory::CloudDevops,
        SkillCategory::IotEmbedded,
    ];

    /// Categories shown in the skills view: the technical ones plus soft skills.
    pub const DISPLAY: [SkillCategory; 9] = [
        SkillCategory::Programming,
        SkillCategory::BackendDevelopment,
        SkillCategory::FrontendDevelopment,
        SkillCategory::DataScience,
        SkillCategory::MlComputerVision,
        SkillCategory::GenaiAi,
        SkillCategory::CloudDevops,
        SkillCategory::IotEmbedded,
        SkillCategory::SoftSkills,
    ];

    /// Categories flattened into the recruiter-facing technical list.
    pub const RECRUITER_TECHNICAL: [SkillCategory; 6] = [
        SkillCategory::Programming,
        SkillCategory::MlAi,
        SkillCategory::WebDevelopment,
        SkillCategory::Databases,
        SkillCategory::DevopsCloud,
        SkillCategory::IotHardware,
    ];

    pub const ALL: [SkillCategory; 14] = [
        SkillCategory::Programming,
        SkillCategory::BackendDevelopment,
        SkillCategory::FrontendDevelopment,
        SkillCategory::DataScience,
        SkillCategory::MlComputerVision,
        SkillCategory::GenaiAi,
        SkillCategory::CloudDevops,
        SkillCategory::IotEmbedded,
        SkillCategory::SoftSkills,
        SkillCategory::MlAi,
        SkillCategory::WebDevelopment,
        SkillCategory::Databases,
        SkillCategory::DevopsCloud,
        SkillCategory::IotHardware,
    ];

    /// Key under which the category is stored in the profile file.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::BackendDevelopment => "backend_development",
            SkillCategory::FrontendDevelopment => "frontend_development",
            SkillCategory::DataScience => "data_science",
            SkillCategory::MlComputerVision => "ml_computer_vision",
            SkillCategory::GenaiAi => "genai_ai",
            SkillCategory::CloudDevops => "cloud_devops",
            SkillCategory::IotEmbedded => "iot_embedded",
            SkillCategory::SoftSkills => "soft_skills",
            SkillCategory::MlAi => "ml_ai",
            SkillCategory::WebDevelopment => "web_development",
            SkillCategory::Databases => "databases",
            SkillCategory::DevopsCloud => "devops_cloud",
            SkillCategory::IotHardware => "iot_hardware",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Human-readable heading used in the prompt and the skills view.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming Languages",
            SkillCategory::BackendDevelopment => "Backend Development",
            SkillCategory::FrontendDevelopment => "Frontend Development",
            SkillCategory::DataScience => "Data Science",
            SkillCategory::MlComputerVision => "ML & Computer Vision",
            SkillCategory::GenaiAi => "Generative AI & LLMs",
            SkillCategory::CloudDevops => "Cloud & DevOps",
            SkillCategory::IotEmbedded => "IoT & Embedded Systems",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::MlAi => "Machine Learning & AI",
            SkillCategory::WebDevelopment => "Web Development",
            SkillCategory::Databases => "Databases",
            SkillCategory::DevopsCloud => "DevOps & Cloud",
            SkillCategory::IotHardware => "IoT & Hardware",
        }
    }

    /// Field name used in the `getSkills` tool output.
    pub fn tool_key(self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::BackendDevelopment => "backendDevelopment",
            SkillCategory::FrontendDevelopment => "frontendDevelopment",
            SkillCategory::DataScience => "dataScience",
            SkillCategory::MlComputerVision => "MLComputerVision",
            SkillCategory::GenaiAi => "generativeAI",
            SkillCategory::CloudDevops => "cloudDevOps",
            SkillCategory::IotEmbedded => "IoTEmbeddedSystems",
            SkillCategory::SoftSkills => "softSkills",
            SkillCategory::MlAi => "mlAi",
            SkillCategory::WebDevelopment => "webDevelopment",
            SkillCategory::Databases => "databases",
            SkillCategory::DevopsCloud => "devopsCloud",
            SkillCategory::IotHardware => "iotHardware",
        }
    }

    /// Badge classes for the skills view.
    pub fn color(self) -> &'static str {
        match self {
            SkillCategory::Programming => "bg-blue-50 text-blue-600 border border-blue-200",
            SkillCategory::BackendDevelopment => "bg-teal-50 text-teal-600 border border-teal-200",
            SkillCategory::FrontendDevelopment => "bg-cyan-50 text-cyan-600 border border-cyan-200",
            SkillCategory::DataScience => {
                "bg-yellow-50 text-yellow-600 border border-yellow-200"
            }
            SkillCategory::MlComputerVision => "bg-pink-50 text-pink-600 border border-pink-200",
            SkillCategory::GenaiAi => "bg-red-50 text-red-600 border border-red-200",
            SkillCategory::CloudDevops => {
                "bg-emerald-50 text-emerald-600 border border-emerald-200"
            }
            SkillCategory::IotEmbedded => {
                "bg-indigo-50 text-indigo-600 border border-indigo-200"
            }
            SkillCategory::SoftSkills => "bg-amber-50 text-amber-600 border border-amber-200",
            SkillCategory::MlAi
            | SkillCategory::WebDevelopment
            | SkillCategory::Databases
            | SkillCategory::DevopsCloud
            | SkillCategory::IotHardware => "bg-gray-50 text-gray-600 border border-gray-200",
        }
    }

    /// Migration table: current categories that stand in for a legacy one.
    /// Current categories alias nothing.
    pub fn aliases(self) -> &'static [SkillCategory] {
        match self {
            SkillCategory::MlAi => &[SkillCategory::MlComputerVision, SkillCategory::GenaiAi],
            SkillCategory::WebDevelopment => &[
                SkillCategory::BackendDevelopment,
                SkillCategory::FrontendDevelopment,
            ],
            SkillCategory::Databases => &[SkillCategory::BackendDevelopment],
            SkillCategory::DevopsCloud => &[SkillCategory::CloudDevops],
            SkillCategory::IotHardware => &[SkillCategory::IotEmbedded],
            _ => &[],
        }
    }

    pub fn is_legacy(self) -> bool {
        !self.aliases().is_empty()
    }
}

/// Category key → skills, exactly as authored in the profile file.
/// A `null` list or list element reads as absent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Skills(BTreeMap<String, Vec<String>>);

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Option<Vec<Option<String>>>>>::deserialize(deserializer)?;
        Ok(Skills(
            raw.unwrap_or_default()
                .into_iter()
                .map(|(key, list)| (key, list.into_iter().flatten().flatten().collect()))
                .collect(),
        ))
    }
}

impl Skills {
    /// Skills stored directly under `category`. Absent categories read as empty.
    pub fn get(&self, category: SkillCategory) -> &[String] {
        self.0
            .get(category.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Like `get`, but a legacy category with no stored skills falls back to
    /// its current-taxonomy aliases.
    pub fn resolve(&self, category: SkillCategory) -> Vec<&str> {
        let direct = self.get(category);
        if !direct.is_empty() {
            return direct.iter().map(String::as_str).collect();
        }
        category
            .aliases()
            .iter()
            .flat_map(|alias| self.get(*alias))
            .map(String::as_str)
            .collect()
    }

    pub fn insert(&mut self, category: SkillCategory, skills: Vec<String>) {
        self.0.insert(category.key().to_string(), skills);
    }

    /// Keys in the file that match no known category.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.0
            .keys()
            .filter(|k| SkillCategory::from_key(k).is_none())
            .map(String::as_str)
            .collect()
    }
}

impl FromIterator<(SkillCategory, Vec<String>)> for Skills {
    fn from_iter<I: IntoIterator<Item = (SkillCategory, Vec<String>)>>(iter: I) -> Self {
        let mut skills = Skills::default();
        for (category, list) in iter {
            skills.insert(category, list);
        }
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keys_round_trip_through_from_key() {
        for category in SkillCategory::ALL {
            assert_eq!(SkillCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(SkillCategory::from_key("cooking"), None);
    }

    #[test]
    fn test_absent_category_reads_empty() {
        let skills = Skills::default();
        assert!(skills.get(SkillCategory::Programming).is_empty());
    }

    #[test]
    fn test_legacy_category_prefers_own_key() {
        let skills: Skills = [
            (SkillCategory::DevopsCloud, strings(&["Ansible"])),
            (SkillCategory::CloudDevops, strings(&["Docker"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(skills.resolve(SkillCategory::DevopsCloud), vec!["Ansible"]);
    }

    #[test]
    fn test_legacy_category_falls_back_to_aliases() {
        let skills: Skills = [
            (SkillCategory::BackendDevelopment, strings(&["Axum"])),
            (SkillCategory::FrontendDevelopment, strings(&["React"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            skills.resolve(SkillCategory::WebDevelopment),
            vec!["Axum", "React"]
        );
    }

    #[test]
    fn test_current_category_has_no_fallback() {
        let skills: Skills = [(SkillCategory::MlAi, strings(&["PyTorch"]))]
            .into_iter()
            .collect();
        assert!(skills.resolve(SkillCategory::MlComputerVision).is_empty());
        assert!(!SkillCategory::MlComputerVision.is_legacy());
        assert!(SkillCategory::MlAi.is_legacy());
    }

    #[test]
    fn test_deserializes_from_flat_map_and_reports_unknown_keys() {
        let skills: Skills = serde_json::from_str(
            r#"{"programming": ["Rust", "Python"], "underwater_basketry": ["Reeds"]}"#,
        )
        .unwrap();
        assert_eq!(skills.get(SkillCategory::Programming), ["Rust", "Python"]);
        assert_eq!(skills.unknown_keys(), vec!["underwater_basketry"]);
    }

    #[test]
    fn test_null_lists_and_entries_read_as_absent() {
        let skills: Skills = serde_json::from_str(
            r#"{"programming": ["Rust", null, "Go"], "frontend_development": null}"#,
        )
        .unwrap();
        assert_eq!(skills.get(SkillCategory::Programming), ["Rust", "Go"]);
        assert!(skills.get(SkillCategory::FrontendDevelopment).is_empty());
    }
}
