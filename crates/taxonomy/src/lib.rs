//! Feelings taxonomy: tree model, flattening, ancestry lookup and image paths.
//! 情緒分類樹：樹狀模型、攤平、祖先查詢與圖片路徑。

mod util;

pub mod builtin;
pub mod flatten;
pub mod node;
pub mod resolve;
pub mod resource;
pub mod store;
pub mod tree;

use thiserror::Error;

pub use builtin::{builtin_taxonomy, BUILTIN_FEELINGS_JSON};
pub use flatten::{flatten, leaf_count, leaf_paths, selectable_leaves};
pub use node::{AncestorPath, NodeKind, TaxonomyNode};
pub use resolve::resolve_path;
pub use resource::{
    format_resource_path, slug, ResourcePathFormat, DEFAULT_RESOURCE_EXTENSION,
    DEFAULT_RESOURCE_ROOT,
};
pub use store::{TaxonomyStore, TaxonomyStoreError};
pub use tree::Taxonomy;

/// Errors raised while deriving data from a taxonomy.
/// 從分類樹推導資料時可能發生的錯誤。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("taxonomy '{root}' has no selectable leaves")]
    EmptyTaxonomy { root: String },
}
