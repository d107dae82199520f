//! Declarative project filtering.
//!
//! ```rust
//! use tprofile::{ProjectFilter, data, filter_projects};
//!
//! let projects = data::projects();
//! let ai_only = filter_projects(&projects, ProjectFilter::Ai);
//! assert!(ai_only.len() < projects.len());
//! ```

use crate::types::Project;

/// Portfolio filter tabs. `All` passes everything; the rest match
/// projects whose tags contain any of the filter's keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Ai,
    FullStack,
    Quality,
}

struct FilterRule {
    filter: ProjectFilter,
    keywords: &'static [&'static str],
}

const FILTER_RULES: &[FilterRule] = &[
    FilterRule {
        filter: ProjectFilter::Ai,
        keywords: &["ai"],
    },
    FilterRule {
        filter: ProjectFilter::FullStack,
        keywords: &["full-stack"],
    },
    FilterRule {
        filter: ProjectFilter::Quality,
        keywords: &["quality", "testing", "assurance"],
    },
];

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [Self::All, Self::Ai, Self::FullStack, Self::Quality];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Ai => "AI",
            Self::FullStack => "Full-Stack",
            Self::Quality => "Quality",
        }
    }

    /// Parses a filter tab label, case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(value.trim()))
    }

    pub fn matches(&self, project: &Project) -> bool {
        let Some(rule) = FILTER_RULES.iter().find(|rule| rule.filter == *self) else {
            // No rule means no restriction.
            return true;
        };

        project.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            rule.keywords.iter().any(|keyword| tag.contains(keyword))
        })
    }
}

pub fn filter_projects<'a>(projects: &'a [Project], filter: ProjectFilter) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}
