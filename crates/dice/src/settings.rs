use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use emotiondice_taxonomy::{ResourcePathFormat, DEFAULT_RESOURCE_EXTENSION, DEFAULT_RESOURCE_ROOT};

use crate::pool::FALLBACK_EMOTIONS;

const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize settings {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub images: ImageSettings,
    #[serde(default = "default_fallback_emotions")]
    pub fallback_emotions: Vec<String>,
    #[serde(default)]
    pub prompts: ImagePromptSettings,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_fallback_emotions() -> Vec<String> {
    FALLBACK_EMOTIONS.iter().map(|name| name.to_string()).collect()
}

impl Default for DiceSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            images: ImageSettings::default(),
            fallback_emotions: default_fallback_emotions(),
            prompts: ImagePromptSettings::default(),
        }
    }
}

impl DiceSettings {
    pub fn sanitize(&mut self) {
        if self.version == 0 {
            self.version = SETTINGS_VERSION;
        }
        self.images.sanitize();
        self.prompts.sanitize();
        self.fallback_emotions = self
            .fallback_emotions
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if self.fallback_emotions.is_empty() {
            self.fallback_emotions = default_fallback_emotions();
        }
    }
}

/// Where illustrative images live and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSettings {
    #[serde(default = "default_image_root")]
    pub root: String,
    #[serde(default = "default_image_extension")]
    pub extension: String,
}

fn default_image_root() -> String {
    DEFAULT_RESOURCE_ROOT.to_string()
}

fn default_image_extension() -> String {
    DEFAULT_RESOURCE_EXTENSION.to_string()
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            root: default_image_root(),
            extension: default_image_extension(),
        }
    }
}

impl ImageSettings {
    fn sanitize(&mut self) {
        let root = self.root.trim().trim_end_matches('/');
        self.root = if root.is_empty() && !self.root.trim().starts_with('/') {
            default_image_root()
        } else {
            root.to_string()
        };
        let extension = self.extension.trim().trim_start_matches('.');
        self.extension = if extension.is_empty() {
            default_image_extension()
        } else {
            extension.to_string()
        };
    }

    pub fn format(&self) -> ResourcePathFormat {
        ResourcePathFormat::new(self.root.clone(), self.extension.clone())
    }
}

/// Wording used when planning generated portraits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePromptSettings {
    #[serde(default = "default_style")]
    pub style: String,
    /// How many ancestor names to mention next to the leaf; negative means all.
    #[serde(default = "default_root_levels")]
    pub root_levels: i32,
}

fn default_style() -> String {
    "cinematic".to_string()
}

fn default_root_levels() -> i32 {
    1
}

impl Default for ImagePromptSettings {
    fn default() -> Self {
        Self {
            style: default_style(),
            root_levels: default_root_levels(),
        }
    }
}

impl ImagePromptSettings {
    fn sanitize(&mut self) {
        if self.style.trim().is_empty() {
            self.style = default_style();
        }
        if self.root_levels < -1 {
            self.root_levels = -1;
        }
    }
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    data: DiceSettings,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>, settings: DiceSettings) -> Self {
        Self {
            path: path.into(),
            data: settings,
        }
    }

    /// Loads settings from `path`, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            let mut data = DiceSettings::default();
            data.sanitize();
            return Ok(Self { path, data });
        }

        let contents = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
            path: path.clone(),
            source,
        })?;
        let mut data: DiceSettings =
            serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?;
        data.sanitize();
        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &DiceSettings {
        &self.data
    }

    pub fn update<F>(&mut self, mut op: F) -> Result<(), SettingsError>
    where
        F: FnMut(&mut DiceSettings),
    {
        op(&mut self.data);
        self.data.sanitize();
        self.save()
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string_pretty(&self.data).map_err(|source| {
            SettingsError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, payload.as_bytes()).map_err(|source| SettingsError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
