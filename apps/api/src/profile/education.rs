//! Education normalization. Both authored shapes collapse into one
//! `NormalizedEducation`, and the prompt lines are derived from that alone.

use crate::models::portfolio::{Education, EducationEntry};

const HISTORY_SEPARATOR: &str = " · ";
const DEGREE_SEPARATOR: &str = " – ";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedEducation<'a> {
    pub current: Option<&'a EducationEntry>,
    pub history: String,
    pub achievements: Vec<&'a str>,
}

/// Three independent prompt lines. Each is empty when its data is absent,
/// except `education_line`, which always carries its label.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationLines {
    pub education_line: String,
    pub academic_perf_line: String,
    pub achievements_line: String,
}

pub fn normalize_education(education: Option<&Education>) -> NormalizedEducation<'_> {
    match education {
        None => NormalizedEducation::default(),
        Some(Education::List(entries)) => NormalizedEducation {
            current: entries.first(),
            history: render_history(entries.iter()),
            achievements: Vec::new(),
        },
        Some(Education::Structured(structured)) => {
            let ordered: Vec<&EducationEntry> = structured
                .current
                .iter()
                .chain(structured.previous.iter())
                .collect();
            NormalizedEducation {
                current: ordered.first().copied(),
                history: render_history(ordered.iter().copied()),
                achievements: structured.achievements.iter().map(String::as_str).collect(),
            }
        }
    }
}

pub fn build_education_lines(education: Option<&Education>) -> EducationLines {
    let normalized = normalize_education(education);

    let history = if normalized.history.is_empty() {
        "(not provided)"
    } else {
        normalized.history.as_str()
    };
    let mut education_line = format!("- Education: {history}");

    if let Some(current) = normalized.current {
        // A history with a single rendered entry already names the current institution.
        if !current.institution.is_empty() && rendered_entry_count(education) > 1 {
            education_line.push_str(&format!(" | Current: {}", current.institution));
        }
        if let Some(date) = current.graduation_date.as_deref().filter(|d| !d.is_empty()) {
            education_line.push_str(&format!(" (graduating {date})"));
        }
    }

    let academic_perf_line = normalized
        .current
        .and_then(|c| c.cgpa.as_deref())
        .map(|cgpa| format!("- Academic Performance: CGPA {cgpa}"))
        .unwrap_or_default();

    let achievements_line = if normalized.achievements.is_empty() {
        String::new()
    } else {
        format!("- Achievements: {}", normalized.achievements.join(", "))
    };

    EducationLines {
        education_line,
        academic_perf_line,
        achievements_line,
    }
}

/// Every achievement attached to any education record, in document order.
/// The structured shape contributes its top-level list after the entries.
pub fn all_achievements(education: Option<&Education>) -> Vec<String> {
    match education {
        None => Vec::new(),
        Some(Education::List(entries)) => entries
            .iter()
            .flat_map(|e| e.achievements.iter().flatten().cloned())
            .collect(),
        Some(Education::Structured(structured)) => structured
            .current
            .iter()
            .chain(structured.previous.iter())
            .flat_map(|e| e.achievements.iter().flatten().cloned())
            .chain(structured.achievements.iter().cloned())
            .collect(),
    }
}

/// All education records in most-recent-first order, regardless of shape.
pub fn entries(education: Option<&Education>) -> Vec<&EducationEntry> {
    match education {
        None => Vec::new(),
        Some(Education::List(entries)) => entries.iter().collect(),
        Some(Education::Structured(structured)) => structured
            .current
            .iter()
            .chain(structured.previous.iter())
            .collect(),
    }
}

fn rendered_entry_count(education: Option<&Education>) -> usize {
    entries(education)
        .into_iter()
        .filter(|entry| !render_entry(entry).is_empty())
        .count()
}

fn render_history<'a>(entries: impl Iterator<Item = &'a EducationEntry>) -> String {
    entries
        .map(render_entry)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(HISTORY_SEPARATOR)
}

fn render_entry(entry: &EducationEntry) -> String {
    let left = [entry.degree.as_str(), entry.institution.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(DEGREE_SEPARATOR);

    if entry.duration.is_empty() {
        left
    } else {
        format!("{left} ({})", entry.duration)
    }
}
