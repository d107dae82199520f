//! Portfolio profile content: projects, skills, certifications,
//! education, and experience, plus the project filter tabs.
//!
//! ```rust
//! use tprofile::{ProjectFilter, data};
//!
//! let profile = data::profile();
//! assert!(!profile.projects.is_empty());
//! assert_eq!(ProjectFilter::from_label("Quality"), Some(ProjectFilter::Quality));
//! ```

pub mod data;
mod filter;
mod types;

pub use filter::{ProjectFilter, filter_projects};
pub use types::{
    Certification, Education, Experience, Profile, Project, Skill, SkillCategory,
};

pub mod prelude {
    pub use crate::data;
    pub use crate::{
        Certification, Education, Experience, Profile, Project, ProjectFilter, Skill,
        SkillCategory, filter_projects,
    };
}
