//! Reference Markdown (team roster, calendar, pricing sheet, SOW boilerplate)
//! served to the dashboard and spliced into SOW prompts.

#[cfg(test)]
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Engineers,
    Calendar,
    Pricing,
    SowTemplates,
}

impl ContentKey {
    pub fn file_name(self) -> &'static str {
        match self {
            ContentKey::Engineers => "engineers.md",
            ContentKey::Calendar => "calendar.md",
            ContentKey::Pricing => "pricing.md",
            ContentKey::SowTemplates => "sow-templates.md",
        }
    }
}

/// Read-only source of reference documents.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Returns the document body; an absent document reads as empty text.
    async fn read(&self, key: ContentKey) -> Result<String, AppError>;
}

/// Markdown files under a single directory.
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn read(&self, key: ContentKey) -> Result<String, AppError> {
        let path = self.root.join(key.file_name());
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Reference document {} is missing", path.display());
                Ok(String::new())
            }
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }
}

/// Fixed documents held in memory.
#[cfg(test)]
#[derive(Default)]
pub struct StaticContentStore {
    documents: HashMap<ContentKey, String>,
}

#[cfg(test)]
impl StaticContentStore {
    pub fn with(mut self, key: ContentKey, body: impl Into<String>) -> Self {
        self.documents.insert(key, body.into());
        self
    }
}

#[cfg(test)]
#[async_trait]
impl ContentStore for StaticContentStore {
    async fn read(&self, key: ContentKey) -> Result<String, AppError> {
        Ok(self.documents.get(&key).cloned().unwrap_or_default())
    }
}
