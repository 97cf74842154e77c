//! Project filter predicates for the projects section.

use std::fmt;
use std::str::FromStr;

use folio_types::Project;
use thiserror::Error;

const WEB_TECHNOLOGIES: &[&str] = &["React", "Node.js", "HTML", "CSS", "JavaScript"];
const MOBILE_TECHNOLOGIES: &[&str] = &["React Native", "Flutter", "Android", "iOS"];
const AI_TECHNOLOGIES: &[&str] = &["Python", "Machine Learning", "OpenCV", "TensorFlow"];
const STARTUP_TITLE_MARKERS: &[&str] = &["igniteu", "prescripto"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Web,
    Mobile,
    Ai,
    Startup,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 6] = [
        ProjectFilter::All,
        ProjectFilter::Featured,
        ProjectFilter::Web,
        ProjectFilter::Mobile,
        ProjectFilter::Ai,
        ProjectFilter::Startup,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Featured => "featured",
            ProjectFilter::Web => "web",
            ProjectFilter::Mobile => "mobile",
            ProjectFilter::Ai => "ai",
            ProjectFilter::Startup => "startup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Featured => "Featured",
            ProjectFilter::Web => "Web",
            ProjectFilter::Mobile => "Mobile",
            ProjectFilter::Ai => "AI / ML",
            ProjectFilter::Startup => "Startups",
        }
    }

    /// The filter after this one, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|filter| *filter == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn matches(self, project: &Project) -> bool {
        let uses_any = |technologies: &[&str]| project.technologies.iter().any(|tech| technologies.contains(&tech.as_str()));
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::Web => uses_any(WEB_TECHNOLOGIES),
            ProjectFilter::Mobile => uses_any(MOBILE_TECHNOLOGIES),
            ProjectFilter::Ai => uses_any(AI_TECHNOLOGIES),
            ProjectFilter::Startup => {
                let title = project.title.to_lowercase();
                STARTUP_TITLE_MARKERS.iter().any(|marker| title.contains(*marker))
            }
        }
    }

    /// Matching projects, in their original order.
    pub fn apply(self, projects: &[Project]) -> Vec<&Project> {
        projects.iter().filter(|project| self.matches(project)).collect()
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project filter '{0}' (expected one of: all, featured, web, mobile, ai, startup)")]
pub struct UnknownFilter(pub String);

impl FromStr for ProjectFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ProjectFilter::ALL
            .into_iter()
            .find(|filter| filter.id() == normalized)
            .ok_or_else(|| UnknownFilter(value.to_string()))
    }
}
