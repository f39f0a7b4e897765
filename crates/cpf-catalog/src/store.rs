//! Content directory storage with XDG path support.
//!
//! A content directory holds one JSON file per dataset (`events.json`,
//! `projects.json`, ...). Files that are missing fall back to the bundled
//! sample data, so a directory may override just the datasets it cares
//! about. The default directory is `~/.local/share/cpf/content`.
//!
//! Both synchronous and asynchronous I/O methods are provided:
//! - `load()`, `save()` - Synchronous methods using `std::fs`
//! - `load_async()`, `save_async()` - Asynchronous methods using `tokio::fs`

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use cpf_content::bundled::Dataset;
use cpf_content::error::ContentError;
use cpf_content::Content;
use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::{Catalog, CatalogError, UpcomingPolicy};

/// Directory name below the data dir.
const CONTENT_DIRNAME: &str = "content";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "cpf";

/// Errors that can occur while reading or writing a content directory.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    #[error("failed to read content file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write content file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create content directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dataset file did not parse.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The loaded content failed validation.
    #[error("invalid content: {0}")]
    Catalog(#[from] CatalogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, CatalogStoreError>;

/// Where each dataset came from on the last load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    File,
    Bundled,
}

/// A content directory on disk.
///
/// # Example
///
/// ```no_run
/// use cpf_catalog::CatalogStore;
///
/// let store = CatalogStore::new()?;
///
/// // Files present in the directory replace the bundled datasets.
/// let content = store.load()?;
///
/// // Write every dataset back out.
/// store.save(&content)?;
/// # Ok::<(), cpf_catalog::CatalogStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: PathBuf,
}

impl CatalogStore {
    /// Creates a store at the default XDG content directory.
    ///
    /// # Errors
    ///
    /// Returns `CatalogStoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: Self::default_dir()?,
        })
    }

    /// Creates a store at a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the default content directory.
    ///
    /// On Unix: `~/.local/share/cpf/content`
    /// On macOS: `~/Library/Application Support/cpf/content`
    pub fn default_dir() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CatalogStoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(CONTENT_DIRNAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of one dataset file.
    pub fn path_for(&self, dataset: Dataset) -> PathBuf {
        self.dir.join(dataset.file_name())
    }

    /// Returns true if the content directory exists.
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Reports for each dataset whether a file overrides the bundled copy.
    pub fn sources(&self) -> Vec<(Dataset, DatasetSource)> {
        Dataset::ALL
            .into_iter()
            .map(|dataset| {
                let source = if self.path_for(dataset).is_file() {
                    DatasetSource::File
                } else {
                    DatasetSource::Bundled
                };
                (dataset, source)
            })
            .collect()
    }

    /// Loads content, falling back to bundled data per missing file.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::ReadError` for I/O errors other than "file not found".
    /// - Returns `CatalogStoreError::Content` if a file does not parse.
    pub fn load(&self) -> Result<Content> {
        let mut raw = HashMap::new();
        for dataset in Dataset::ALL {
            let path = self.path_for(dataset);
            match fs::read_to_string(&path) {
                Ok(json) => {
                    raw.insert(dataset, json);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(CatalogStoreError::ReadError { path, source: e }),
            }
        }
        self.assemble(raw)
    }

    /// Loads content and builds a validated catalog.
    pub fn load_catalog(&self, policy: UpcomingPolicy, today: NaiveDate) -> Result<Catalog> {
        Ok(Catalog::with_policy(self.load()?, policy, today)?)
    }

    /// Writes every dataset as pretty-printed JSON.
    ///
    /// Each file is written to a temporary path and renamed into place.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogStoreError::CreateDirError` if the directory cannot be created.
    /// - Returns `CatalogStoreError::WriteError` if a file cannot be written.
    pub fn save(&self, content: &Content) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| CatalogStoreError::CreateDirError {
            path: self.dir.clone(),
            source: e,
        })?;

        for dataset in Dataset::ALL {
            let json = content.dataset_json(dataset)?;
            let path = self.path_for(dataset);
            let temp_path = path.with_extension("tmp");
            fs::write(&temp_path, &json).map_err(|e| CatalogStoreError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;
            fs::rename(&temp_path, &path)
                .map_err(|e| CatalogStoreError::WriteError { path, source: e })?;
        }
        debug!(dir = %self.dir.display(), "saved content directory");
        Ok(())
    }

    // =========================================================================
    // Async I/O Methods
    // =========================================================================

    /// Async equivalent of [`load()`](Self::load).
    pub async fn load_async(&self) -> Result<Content> {
        let mut raw = HashMap::new();
        for dataset in Dataset::ALL {
            let path = self.path_for(dataset);
            match tokio::fs::read_to_string(&path).await {
                Ok(json) => {
                    raw.insert(dataset, json);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(CatalogStoreError::ReadError { path, source: e }),
            }
        }
        self.assemble(raw)
    }

    /// Async equivalent of [`load_catalog()`](Self::load_catalog).
    pub async fn load_catalog_async(
        &self,
        policy: UpcomingPolicy,
        today: NaiveDate,
    ) -> Result<Catalog> {
        Ok(Catalog::with_policy(self.load_async().await?, policy, today)?)
    }

    /// Async equivalent of [`save()`](Self::save).
    pub async fn save_async(&self, content: &Content) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CatalogStoreError::CreateDirError {
                path: self.dir.clone(),
                source: e,
            })?;

        for dataset in Dataset::ALL {
            let json = content.dataset_json(dataset)?;
            let path = self.path_for(dataset);
            let temp_path = path.with_extension("tmp");
            tokio::fs::write(&temp_path, &json)
                .await
                .map_err(|e| CatalogStoreError::WriteError {
                    path: temp_path.clone(),
                    source: e,
                })?;
            tokio::fs::rename(&temp_path, &path)
                .await
                .map_err(|e| CatalogStoreError::WriteError { path, source: e })?;
        }
        debug!(dir = %self.dir.display(), "saved content directory");
        Ok(())
    }

    /// Missing dataset files fall back to the bundled copy.
    fn assemble(&self, mut raw: HashMap<Dataset, String>) -> Result<Content> {
        Content::from_source(|dataset| {
            Ok::<_, CatalogStoreError>(match raw.remove(&dataset) {
                Some(json) => {
                    debug!(dataset = dataset.name(), "loaded dataset from content directory");
                    json
                }
                None => {
                    debug!(
                        dataset = dataset.name(),
                        dir = %self.dir.display(),
                        "no dataset file, using bundled copy"
                    );
                    dataset.bundled_json().to_string()
                }
            })
        })
    }
}
