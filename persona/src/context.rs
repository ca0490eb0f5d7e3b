//! Persona resources consumed by the prompt builder.
//!
//! A [`ContextProvider`] exposes four read-only resources: structured
//! [`Facts`], a free-text summary, an external profile document and notes on
//! communication style. [`PersonaContext`] is the owned implementation,
//! usually loaded once at startup with [`PersonaContext::load`] and shared
//! behind an [`Arc`] afterwards.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::facts::Facts;

/// Read-only access to the persona's resources.
pub trait ContextProvider: Send + Sync {
    fn facts(&self) -> &Facts;
    fn summary(&self) -> &str;
    /// External profile text, e.g. a LinkedIn export.
    fn profile(&self) -> &str;
    fn style(&self) -> &str;
}

impl<P: ContextProvider + ?Sized> ContextProvider for &P {
    fn facts(&self) -> &Facts {
        (**self).facts()
    }
    fn summary(&self) -> &str {
        (**self).summary()
    }
    fn profile(&self) -> &str {
        (**self).profile()
    }
    fn style(&self) -> &str {
        (**self).style()
    }
}

impl<P: ContextProvider + ?Sized> ContextProvider for Arc<P> {
    fn facts(&self) -> &Facts {
        (**self).facts()
    }
    fn summary(&self) -> &str {
        (**self).summary()
    }
    fn profile(&self) -> &str {
        (**self).profile()
    }
    fn style(&self) -> &str {
        (**self).style()
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid facts in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Locations of the four resource files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePaths {
    pub facts: PathBuf,
    pub summary: PathBuf,
    pub profile: PathBuf,
    pub style: PathBuf,
}

impl ResourcePaths {
    pub const FACTS_FILE: &'static str = "facts.json";
    pub const SUMMARY_FILE: &'static str = "summary.txt";
    pub const PROFILE_FILE: &'static str = "linkedin.txt";
    pub const STYLE_FILE: &'static str = "style.txt";

    /// Conventional file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            facts: dir.join(Self::FACTS_FILE),
            summary: dir.join(Self::SUMMARY_FILE),
            profile: dir.join(Self::PROFILE_FILE),
            style: dir.join(Self::STYLE_FILE),
        }
    }

    pub fn facts(mut self, path: impl Into<PathBuf>) -> Self {
        self.facts = path.into();
        self
    }

    pub fn summary(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary = path.into();
        self
    }

    pub fn profile(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile = path.into();
        self
    }

    pub fn style(mut self, path: impl Into<PathBuf>) -> Self {
        self.style = path.into();
        self
    }
}

/// Owned, immutable persona resources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonaContext {
    facts: Facts,
    summary: String,
    profile: String,
    style: String,
}

impl PersonaContext {
    pub fn new(
        facts: Facts,
        summary: impl Into<String>,
        profile: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            facts,
            summary: summary.into(),
            profile: profile.into(),
            style: style.into(),
        }
    }

    /// Load the resources stored under their conventional names in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_from(&ResourcePaths::in_dir(dir))
    }

    /// Load the resources from explicit paths.
    ///
    /// Text files are taken verbatim. The name fields are not checked here;
    /// rendering reports them.
    pub fn load_from(paths: &ResourcePaths) -> Result<Self, LoadError> {
        let raw = read(&paths.facts)?;
        let facts = Facts::from_json(&raw).map_err(|source| LoadError::Json {
            path: paths.facts.clone(),
            source,
        })?;
        Ok(Self {
            facts,
            summary: read(&paths.summary)?,
            profile: read(&paths.profile)?,
            style: read(&paths.style)?,
        })
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded persona resource");
    Ok(text)
}

impl ContextProvider for PersonaContext {
    fn facts(&self) -> &Facts {
        &self.facts
    }
    fn summary(&self) -> &str {
        &self.summary
    }
    fn profile(&self) -> &str {
        &self.profile
    }
    fn style(&self) -> &str {
        &self.style
    }
}
