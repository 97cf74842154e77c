//! Portfolio content model.
//!
//! The page is rendered from a single hand-authored document. Field names are
//! camelCase on disk so documents exported from the original site load
//! unchanged. A default document ships embedded in the binary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod validation;

pub use validation::{ContentProblem, validate_portfolio};

/// Embedded default content.
pub const EMBEDDED_PORTFOLIO: &str = include_str!("../data/portfolio.json");

/// Error raised when content cannot be decoded or fails validation.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio JSON could not be decoded: {0}")]
    Json(#[from] serde_json::Error),
    #[error("portfolio content has {} problem(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<ContentProblem>),
}

fn summarize(problems: &[ContentProblem]) -> String {
    problems.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Root content document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub cinematography: Cinematography,
    pub skills: Skills,
    pub startups: Startups,
    pub contact: Contact,
    pub loading_image: Option<String>,
}

impl Portfolio {
    /// Decodes the embedded default document.
    pub fn embedded() -> Result<Self, ContentError> {
        Ok(serde_json::from_str(EMBEDDED_PORTFOLIO)?)
    }

    /// Returns every problem found in the document; empty when valid.
    pub fn problems(&self) -> Vec<ContentProblem> {
        validate_portfolio(self)
    }

    /// Fails with [`ContentError::Invalid`] when any problem is found.
    pub fn validate(&self) -> Result<(), ContentError> {
        let problems = self.problems();
        if problems.is_empty() { Ok(()) } else { Err(ContentError::Invalid(problems)) }
    }
}

/// Named outbound links (`github`, `linkedin`, ...) in authoring order.
pub type SocialLinks = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub subtitle: String,
    pub description: String,
    pub image: Option<String>,
    pub resume_url: Option<String>,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub bio: String,
    pub education: Education,
    pub timeline: Vec<Milestone>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cinematography {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub reels: Vec<Reel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reel {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub video: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub programming: Vec<Skill>,
    pub tools: Vec<Skill>,
    pub frameworks: Vec<Skill>,
    pub databases: Vec<Skill>,
}

impl Skills {
    /// Categories with their display titles, in page order.
    pub fn categories(&self) -> [(&'static str, &[Skill]); 4] {
        [
            ("Programming Languages", &self.programming),
            ("Tools & Software", &self.tools),
            ("Frameworks & Libraries", &self.frameworks),
            ("Databases & Cloud", &self.databases),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, `0..=100`.
    pub level: u8,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Startups {
    pub title: String,
    pub subtitle: String,
    pub ventures: Vec<Venture>,
    pub awards: Vec<Award>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Venture {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub year: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub website: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub icon: String,
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub social_links: SocialLinks,
    pub availability: Option<String>,
    pub response_time: Option<String>,
}
