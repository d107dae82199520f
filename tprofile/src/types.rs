//! Portfolio content types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            image_url: String::new(),
            github_url: None,
            website_url: None,
        }
    }

    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    pub fn with_website_url(mut self, url: impl Into<String>) -> Self {
        self.website_url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Quality and AI Assurance Automation")]
    QualityAssurance,
}

/// A named skill with a self-assessed proficiency level from 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            level,
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Certification {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        issuer: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            issuer: issuer.into(),
            date: date.into(),
            link: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub tech: Vec<String>,
}

impl Experience {
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
        tech: &[&str],
    ) -> Self {
        Self {
            role: role.into(),
            company: company.into(),
            period: period.into(),
            description: description.into(),
            tech: tech.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// Everything the portfolio surface exposes in one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_serializes_with_camel_case_keys_and_omits_empty_links() {
        let project = Project::new("demo", "Demo", "A demo project.", &["AI"])
            .with_github_url("https://github.com/kavitaj11/demo");

        let json = serde_json::to_value(&project).expect("project should serialize");
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["githubUrl"], "https://github.com/kavitaj11/demo");
        assert!(json.get("websiteUrl").is_none());
    }

    #[test]
    fn skill_category_round_trips_display_labels() {
        let json =
            serde_json::to_string(&SkillCategory::QualityAssurance).expect("category serializes");
        assert_eq!(json, "\"Quality and AI Assurance Automation\"");

        let parsed: SkillCategory = serde_json::from_str("\"AI\"").expect("category parses");
        assert_eq!(parsed, SkillCategory::Ai);
    }
}
