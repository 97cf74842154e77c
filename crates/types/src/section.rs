//! Section registry: the ordered set of named regions a page is divided into.
//!
//! The registry is static configuration. It is validated once when built and
//! never mutated afterwards, so every consumer (navigation bar, visibility
//! observer, dispatcher) can rely on ids being unique and non-empty.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a page section (e.g. `"projects"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Arc<str>);

impl SectionId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A named, ordered region of the page corresponding to one navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
    pub order: u32,
}

impl Section {
    pub fn new(id: impl AsRef<str>, label: impl Into<String>, order: u32) -> Self {
        Self {
            id: SectionId::new(id),
            label: label.into(),
            order,
        }
    }
}

/// Error raised when the section configuration is inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two entries share the same identifier.
    #[error("duplicate section id '{id}' at positions {first} and {second}")]
    DuplicateId { id: String, first: usize, second: usize },
    /// An entry has an empty (or whitespace-only) identifier.
    #[error("section at position {position} has an empty id")]
    MissingId { position: usize },
}

/// Sections of the portfolio page in page order: `(id, label)`.
pub const PORTFOLIO_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("cinematography", "Cinematography"),
    ("skills", "Skills"),
    ("startups", "Startups"),
    ("contact", "Contact"),
];

/// Ordered, immutable, validated list of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Arc<[Section]>,
}

impl SectionRegistry {
    /// Builds a registry from the provided sections, sorted by `order`.
    ///
    /// Fails when an id is empty or appears more than once. Positions in the
    /// error refer to the input order, before sorting.
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        for (position, section) in sections.iter().enumerate() {
            if section.id.as_str().trim().is_empty() {
                return Err(RegistryError::MissingId { position });
            }
            if let Some(first) = sections[..position].iter().position(|earlier| earlier.id == section.id) {
                return Err(RegistryError::DuplicateId {
                    id: section.id.to_string(),
                    first,
                    second: position,
                });
            }
        }

        let mut sections = sections;
        sections.sort_by_key(|section| section.order);
        Ok(Self {
            sections: Arc::from(sections),
        })
    }

    /// Builds a registry from `(id, label)` pairs, assigning `order` from the
    /// position in the slice.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, RegistryError> {
        let sections = pairs
            .iter()
            .enumerate()
            .map(|(index, (id, label))| Section::new(id, *label, index as u32))
            .collect();
        Self::new(sections)
    }

    /// The seven portfolio sections, validated like any other table.
    pub fn try_portfolio() -> Result<Self, RegistryError> {
        Self::from_pairs(PORTFOLIO_SECTIONS)
    }

    /// The seven portfolio sections without validation. Startup goes through
    /// [`SectionRegistry::try_portfolio`].
    pub fn portfolio() -> Self {
        let sections = PORTFOLIO_SECTIONS
            .iter()
            .enumerate()
            .map(|(index, (id, label))| Section::new(id, *label, index as u32))
            .collect::<Vec<_>>();
        Self {
            sections: Arc::from(sections),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Position of the section in page order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn by_index(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}
