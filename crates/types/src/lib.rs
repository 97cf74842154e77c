//! Shared type definitions for Folio.
//!
//! - [`section`]: the validated, ordered registry of page sections.
//! - [`portfolio`]: the content document every page section renders from.

pub mod portfolio;
pub mod section;

pub use portfolio::{
    About, Award, Cinematography, Contact, ContentError, ContentProblem, Education, Hero, Milestone, Portfolio, Project, Reel, Skill,
    Skills, SocialLinks, Stat, Startups, Venture,
};
pub use section::{PORTFOLIO_SECTIONS, RegistryError, Section, SectionId, SectionRegistry};
