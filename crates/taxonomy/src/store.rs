use std::fs;
use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::tree::Taxonomy;
use crate::util::write_atomic;

impl Taxonomy {
    /// Parses a taxonomy from its `{ name, children? }` JSON form.
    /// 從 `{ name, children? }` 形式的 JSON 解析分類樹。
    pub fn from_json_str(contents: &str) -> Result<Self, TaxonomyStoreError> {
        serde_json::from_str(contents).map_err(|err| TaxonomyStoreError::Invalid(err.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, TaxonomyStoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| TaxonomyStoreError::Invalid(err.to_string()))
    }
}

/// Reads and writes taxonomy definitions as JSON files.
/// 以 JSON 檔案讀寫分類樹定義。
#[derive(Debug)]
pub struct TaxonomyStore {
    path: PathBuf,
}

impl TaxonomyStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the taxonomy, returning `Ok(None)` when the file is absent.
    /// 載入分類樹；若檔案不存在則回傳 `Ok(None)`。
    pub fn load(&self) -> Result<Option<Taxonomy>, TaxonomyStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let taxonomy = Taxonomy::from_json_str(&contents)?;
                debug!(
                    "loaded taxonomy '{}' from {}",
                    taxonomy.root().name(),
                    self.path.display()
                );
                Ok(Some(taxonomy))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TaxonomyStoreError::Io(err)),
        }
    }

    /// Saves the taxonomy atomically as pretty-printed JSON.
    pub fn save(&self, taxonomy: &Taxonomy) -> Result<(), TaxonomyStoreError> {
        let payload = taxonomy.to_json_pretty()?;
        write_atomic(&self.path, payload.as_bytes()).map_err(TaxonomyStoreError::Io)
    }
}

#[derive(Debug, Error)]
pub enum TaxonomyStoreError {
    #[error("taxonomy IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid taxonomy payload: {0}")]
    Invalid(String),
}
