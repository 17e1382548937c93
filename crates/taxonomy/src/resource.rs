use serde::{Deserialize, Serialize};

use crate::node::AncestorPath;

pub const DEFAULT_RESOURCE_ROOT: &str = "/images";
pub const DEFAULT_RESOURCE_EXTENSION: &str = "jpg";

/// Describes how an ancestor path maps onto an image location.
/// 描述祖先路徑如何對應到圖片位置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePathFormat {
    pub root: String,
    pub extension: String,
}

impl Default for ResourcePathFormat {
    fn default() -> Self {
        Self {
            root: DEFAULT_RESOURCE_ROOT.to_string(),
            extension: DEFAULT_RESOURCE_EXTENSION.to_string(),
        }
    }
}

impl ResourcePathFormat {
    pub fn new(root: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Formats `path` as `<root>/<slug>/<slug>....<extension>`.
    /// 將路徑轉為小寫、空白改為連字號後組成資源位置。
    pub fn format(&self, path: &AncestorPath) -> String {
        let joined = self.relative(path);
        let root = self.root.trim_end_matches('/');
        format!("{root}/{joined}")
    }

    /// Same as [`format`](Self::format) without the root prefix.
    pub fn relative(&self, path: &AncestorPath) -> String {
        let slugs: Vec<String> = path.iter().map(slug).collect();
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            slugs.join("/")
        } else {
            format!("{}.{extension}", slugs.join("/"))
        }
    }
}

/// Formats `path` with the default `/images` root and `.jpg` extension.
pub fn format_resource_path(path: &AncestorPath) -> String {
    ResourcePathFormat::default().format(path)
}

/// Lowercases a segment and turns each space into a hyphen.
///
/// Other punctuation passes through untouched.
pub fn slug(segment: &str) -> String {
    segment.to_lowercase().replace(' ', "-")
}
