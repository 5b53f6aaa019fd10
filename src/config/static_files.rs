//! Static front-end configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// URL prefix the static directory is mounted under.
pub const STATIC_MOUNT: &str = "/static";

/// Where the school's front-end files live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory served under `/static`
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// File inside `dir` that `/` redirects to
    #[serde(default = "default_index")]
    pub index: String,
}

impl StaticFilesConfig {
    /// URL the root path redirects to, e.g. `/static/index.html`.
    pub fn index_url(&self) -> String {
        format!("{}/{}", STATIC_MOUNT, self.index)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("static_files.dir"));
        }
        if self.index.is_empty() || self.index.starts_with('/') || self.index.contains("..") {
            return Err(ValidationError::InvalidIndexPath(self.index.clone()));
        }
        Ok(())
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            index: default_index(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("./static")
}

fn default_index() -> String {
    "index.html".to_string()
}
