use serde::{Deserialize, Serialize};

use crate::flatten::{flatten, leaf_count, leaf_paths, selectable_leaves};
use crate::node::{AncestorPath, TaxonomyNode};
use crate::resolve::resolve_path;
use crate::TaxonomyError;

/// Immutable feelings taxonomy shared read-only for a whole session.
/// 整個工作階段共用的唯讀情緒分類樹。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    root: TaxonomyNode,
}

impl Taxonomy {
    pub fn new(root: TaxonomyNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TaxonomyNode {
        &self.root
    }

    /// Leaf names in depth-first order.
    /// 依深度優先順序排列的葉節點名稱。
    pub fn flatten(&self) -> Vec<String> {
        flatten(&self.root)
    }

    pub fn selectable_leaves(&self) -> Result<Vec<String>, TaxonomyError> {
        selectable_leaves(&self.root)
    }

    pub fn resolve_path(&self, leaf_name: &str) -> Option<AncestorPath> {
        resolve_path(&self.root, leaf_name)
    }

    pub fn leaf_paths(&self) -> Vec<AncestorPath> {
        leaf_paths(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        leaf_count(&self.root)
    }
}

impl From<TaxonomyNode> for Taxonomy {
    fn from(root: TaxonomyNode) -> Self {
        Self::new(root)
    }
}
