//! Profile content: who the page is about and what it lists.

mod builtin;
mod types;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use types::{Content, Experience, Link, News, Profile, Publication, LAB_LINK_NAME};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Content validation failed: {message}")]
    ValidationError { message: String },
}

impl Content {
    /// The researcher profile the site ships with.
    pub fn builtin() -> Self {
        builtin::builtin()
    }

    /// Load a TOML content file and validate it.
    pub fn load_from(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|e| ContentError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content: Content = toml::from_str(&raw).map_err(|e| ContentError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        content.validate()?;
        tracing::debug!(
            path = %path.display(),
            news = content.news.len(),
            publications = content.publications.len(),
            "content loaded"
        );
        Ok(content)
    }

    /// Checks:
    /// - The profile has a name
    /// - At least one focus phrase, none of them blank
    /// - Ids are unique within news, publications and experience
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(validation("profile.name must not be empty"));
        }
        if self.focus.is_empty() {
            return Err(validation("at least one focus phrase is required"));
        }
        if let Some(index) = self.focus.iter().position(|p| p.text.trim().is_empty()) {
            return Err(validation(format!("focus phrase {} has no text", index)));
        }

        check_unique("news", self.news.iter().map(|n| n.id.as_str()))?;
        check_unique(
            "publications",
            self.publications.iter().map(|p| p.id.as_str()),
        )?;
        check_unique("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        Ok(())
    }
}

fn validation(message: impl Into<String>) -> ContentError {
    ContentError::ValidationError {
        message: message.into(),
    }
}

fn check_unique<'a>(
    section: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(validation(format!("duplicate id '{}' in {}", id, section)));
        }
    }
    Ok(())
}
