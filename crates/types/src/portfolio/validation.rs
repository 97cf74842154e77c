//! Validation for portfolio documents.
//!
//! Every rule reports through a [`ContentProblem`] instead of failing fast so
//! the `validate` command can list all issues in one pass.

use std::collections::HashSet;
use std::fmt;

use url::Url;

use super::{Portfolio, Skill, SocialLinks};

/// A single issue found in a portfolio document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentProblem {
    /// Dotted path to the offending field (e.g. `projects[1].liveUrl`).
    pub location: String,
    pub message: String,
}

impl ContentProblem {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ContentProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Collects all problems in `portfolio`.
pub fn validate_portfolio(portfolio: &Portfolio) -> Vec<ContentProblem> {
    let mut problems = Vec::new();

    if portfolio.name.trim().is_empty() {
        problems.push(ContentProblem::new("name", "must not be empty"));
    }

    check_link(&mut problems, "hero.image", portfolio.hero.image.as_deref());
    check_link(&mut problems, "hero.resumeUrl", portfolio.hero.resume_url.as_deref());
    check_social_links(&mut problems, "hero.socialLinks", &portfolio.hero.social_links);
    check_link(&mut problems, "loadingImage", portfolio.loading_image.as_deref());

    let mut project_ids = HashSet::new();
    for (index, project) in portfolio.projects.iter().enumerate() {
        let location = format!("projects[{index}]");
        if !project_ids.insert(project.id) {
            problems.push(ContentProblem::new(format!("{location}.id"), format!("duplicate project id {}", project.id)));
        }
        if project.title.trim().is_empty() {
            problems.push(ContentProblem::new(format!("{location}.title"), "must not be empty"));
        }
        check_link(&mut problems, &format!("{location}.image"), project.image.as_deref());
        check_link(&mut problems, &format!("{location}.githubUrl"), project.github_url.as_deref());
        check_link(&mut problems, &format!("{location}.liveUrl"), project.live_url.as_deref());
    }

    let mut reel_ids = HashSet::new();
    for (index, reel) in portfolio.cinematography.reels.iter().enumerate() {
        let location = format!("cinematography.reels[{index}]");
        if !reel_ids.insert(reel.id) {
            problems.push(ContentProblem::new(format!("{location}.id"), format!("duplicate reel id {}", reel.id)));
        }
        check_link(&mut problems, &format!("{location}.video"), Some(reel.video.as_str()));
        check_link(&mut problems, &format!("{location}.thumbnail"), reel.thumbnail.as_deref());
    }

    for (category, skills) in [
        ("programming", &portfolio.skills.programming),
        ("tools", &portfolio.skills.tools),
        ("frameworks", &portfolio.skills.frameworks),
        ("databases", &portfolio.skills.databases),
    ] {
        check_skills(&mut problems, category, skills);
    }

    for (index, venture) in portfolio.startups.ventures.iter().enumerate() {
        let location = format!("startups.ventures[{index}]");
        check_link(&mut problems, &format!("{location}.image"), venture.image.as_deref());
        check_link(&mut problems, &format!("{location}.website"), venture.website.as_deref());
    }

    let email = portfolio.contact.email.trim();
    if !email.is_empty() && !looks_like_email(email) {
        problems.push(ContentProblem::new("contact.email", format!("'{email}' is not an email address")));
    }
    check_social_links(&mut problems, "contact.socialLinks", &portfolio.contact.social_links);

    problems
}

fn check_skills(problems: &mut Vec<ContentProblem>, category: &str, skills: &[Skill]) {
    for (index, skill) in skills.iter().enumerate() {
        if skill.level > 100 {
            problems.push(ContentProblem::new(
                format!("skills.{category}[{index}].level"),
                format!("{} exceeds 100", skill.level),
            ));
        }
    }
}

fn check_social_links(problems: &mut Vec<ContentProblem>, location: &str, links: &SocialLinks) {
    for (name, link) in links {
        check_link(problems, &format!("{location}.{name}"), Some(link.as_str()));
    }
}

/// Accepts absolute URLs and site-relative paths (`/resume.pdf`).
fn check_link(problems: &mut Vec<ContentProblem>, location: &str, link: Option<&str>) {
    let Some(link) = link.map(str::trim) else {
        return;
    };
    if link.is_empty() || link.starts_with('/') {
        return;
    }
    if let Err(error) = Url::parse(link) {
        problems.push(ContentProblem::new(location, format!("'{link}' is not a valid link: {error}")));
    }
}

fn looks_like_email(candidate: &str) -> bool {
    match candidate.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{Project, Reel};

    fn minimal() -> Portfolio {
        Portfolio {
            name: "Ada".to_string(),
            ..Portfolio::default()
        }
    }

    #[test]
    fn minimal_document_is_valid() {
        assert!(validate_portfolio(&minimal()).is_empty());
    }

    #[test]
    fn reports_every_problem_in_one_pass() {
        let mut portfolio = minimal();
        portfolio.name = String::new();
        portfolio.projects = vec![
            Project {
                id: 1,
                title: "One".to_string(),
                live_url: Some("not a url".to_string()),
                ..Project::default()
            },
            Project {
                id: 1,
                title: "Two".to_string(),
                ..Project::default()
            },
        ];
        portfolio.skills.tools.push(Skill {
            name: "Figma".to_string(),
            level: 140,
            icon: String::new(),
        });

        let locations: Vec<_> = validate_portfolio(&portfolio).into_iter().map(|problem| problem.location).collect();
        assert_eq!(
            locations,
            vec!["name", "projects[0].liveUrl", "projects[1].id", "skills.tools[0].level"]
        );
    }

    #[test]
    fn relative_paths_are_accepted_as_links() {
        let mut portfolio = minimal();
        portfolio.cinematography.reels.push(Reel {
            id: 1,
            title: "Reel".to_string(),
            video: "/videos/reel.mp4".to_string(),
            ..Reel::default()
        });
        portfolio.hero.resume_url = Some("/resume.pdf".to_string());
        assert!(validate_portfolio(&portfolio).is_empty());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut portfolio = minimal();
        portfolio.contact.email = "someone-at-example".to_string();
        let problems = validate_portfolio(&portfolio);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].location, "contact.email");
    }

    #[test]
    fn problem_display_includes_location() {
        let problem = ContentProblem::new("hero.image", "broken");
        assert_eq!(problem.to_string(), "hero.image: broken");
    }
}
