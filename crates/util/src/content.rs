//! Loading portfolio content from disk.
//!
//! Files ending in `.yaml`/`.yml` are read as YAML; everything else as JSON.
//! Without a path the embedded document is used.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_types::{ContentError, Portfolio};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse YAML content file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to parse JSON content file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Content(#[from] ContentError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => ContentFormat::Yaml,
            _ => ContentFormat::Json,
        }
    }
}

/// Decodes a content file without validating it.
pub fn read_portfolio(path: &Path) -> Result<Portfolio, ContentLoadError> {
    let document = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = ContentFormat::from_path(path);
    debug!(path = %path.display(), ?format, "decoding portfolio content");
    match format {
        ContentFormat::Yaml => serde_yaml::from_str(&document).map_err(|source| ContentLoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        ContentFormat::Json => serde_json::from_str(&document).map_err(|source| ContentLoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads and validates content from `path`, or the embedded document.
pub fn load_portfolio(path: Option<&Path>) -> Result<Portfolio, ContentLoadError> {
    let portfolio = match path {
        Some(path) => read_portfolio(path)?,
        None => Portfolio::embedded()?,
    };
    portfolio.validate()?;
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let portfolio = load_portfolio(None).expect("embedded content");
        assert!(!portfolio.name.is_empty());
        assert!(!portfolio.projects.is_empty());
    }

    #[test]
    fn yaml_files_are_detected_by_extension() {
        assert_eq!(ContentFormat::from_path(Path::new("site.YML")), ContentFormat::Yaml);
        assert_eq!(ContentFormat::from_path(Path::new("site.yaml")), ContentFormat::Yaml);
        assert_eq!(ContentFormat::from_path(Path::new("site.json")), ContentFormat::Json);
        assert_eq!(ContentFormat::from_path(Path::new("site")), ContentFormat::Json);
    }

    #[test]
    fn yaml_document_loads_with_camel_case_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("portfolio.yaml");
        fs::write(
            &path,
            "name: Ada\nprojects:\n  - id: 1\n    title: Engine\n    githubUrl: https://example.com/engine\n    featured: true\n",
        )
        .expect("write");

        let portfolio = load_portfolio(Some(&path)).expect("load");
        assert_eq!(portfolio.name, "Ada");
        assert_eq!(portfolio.projects[0].github_url.as_deref(), Some("https://example.com/engine"));
    }

    #[test]
    fn invalid_content_is_rejected_after_decoding() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("portfolio.json");
        fs::write(&path, r#"{"name": "", "projects": [{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]}"#).expect("write");

        assert!(read_portfolio(&path).is_ok());
        let error = load_portfolio(Some(&path)).unwrap_err();
        assert!(matches!(error, ContentLoadError::Content(ContentError::Invalid(ref problems)) if problems.len() == 2));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let error = read_portfolio(Path::new("/nonexistent/folio.json")).unwrap_err();
        assert!(matches!(error, ContentLoadError::Io { .. }));
    }
}
