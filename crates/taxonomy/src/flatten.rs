use log::debug;

use crate::node::{AncestorPath, NodeKind, TaxonomyNode};
use crate::TaxonomyError;

/// Returns every leaf name under `root` in depth-first, left-to-right order.
/// 依深度優先、由左至右的順序列出所有葉節點名稱。
///
/// Duplicate names are kept; the result has one entry per leaf.
pub fn flatten(root: &TaxonomyNode) -> Vec<String> {
    let mut leaves = Vec::new();
    collect_leaves(root, &mut leaves);
    debug!("flattened taxonomy '{}' into {} leaves", root.name(), leaves.len());
    leaves
}

/// Like [`flatten`], but reports an empty result as [`TaxonomyError::EmptyTaxonomy`].
pub fn selectable_leaves(root: &TaxonomyNode) -> Result<Vec<String>, TaxonomyError> {
    let leaves = flatten(root);
    if leaves.is_empty() {
        return Err(TaxonomyError::EmptyTaxonomy {
            root: root.name().to_string(),
        });
    }
    Ok(leaves)
}

/// Returns the ancestor path of every leaf, in the same order as [`flatten`].
/// 回傳每個葉節點的完整祖先路徑。
pub fn leaf_paths(root: &TaxonomyNode) -> Vec<AncestorPath> {
    let mut paths = Vec::new();
    let mut trail = Vec::new();
    collect_paths(root, &mut trail, &mut paths);
    paths
}

pub fn leaf_count(root: &TaxonomyNode) -> usize {
    match root.kind() {
        NodeKind::Leaf => 1,
        NodeKind::Category(children) => children.iter().map(leaf_count).sum(),
    }
}

fn collect_leaves(node: &TaxonomyNode, out: &mut Vec<String>) {
    match node.kind() {
        NodeKind::Leaf => out.push(node.name().to_string()),
        NodeKind::Category(children) => {
            for child in children {
                collect_leaves(child, out);
            }
        }
    }
}

fn collect_paths<'a>(
    node: &'a TaxonomyNode,
    trail: &mut Vec<&'a str>,
    out: &mut Vec<AncestorPath>,
) {
    trail.push(node.name());
    match node.kind() {
        NodeKind::Leaf => out.extend(AncestorPath::from_trail(trail)),
        NodeKind::Category(children) => {
            for child in children {
                collect_paths(child, trail, out);
            }
        }
    }
    trail.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaxonomyNode {
        TaxonomyNode::category(
            "Root",
            [
                TaxonomyNode::leaf("Happy"),
                TaxonomyNode::category("Sad", [TaxonomyNode::leaf("Disappointed")]),
            ],
        )
    }

    #[test]
    fn flatten_preserves_depth_first_order() {
        assert_eq!(flatten(&sample()), vec!["Happy", "Disappointed"]);
    }

    #[test]
    fn flatten_keeps_duplicate_leaves() {
        let root = TaxonomyNode::category(
            "Root",
            [
                TaxonomyNode::category("A", [TaxonomyNode::leaf("Same")]),
                TaxonomyNode::category("B", [TaxonomyNode::leaf("Same")]),
            ],
        );
        assert_eq!(flatten(&root), vec!["Same", "Same"]);
        assert_eq!(leaf_count(&root), 2);
    }

    #[test]
    fn categories_sharing_a_leaf_name_are_not_flattened() {
        let root = TaxonomyNode::category(
            "Root",
            [TaxonomyNode::category("Sad", [TaxonomyNode::leaf("Lonely")])],
        );
        assert_eq!(flatten(&root), vec!["Lonely"]);
    }

    #[test]
    fn single_leaf_root_flattens_to_itself() {
        let root = TaxonomyNode::leaf("Only");
        assert_eq!(selectable_leaves(&root).unwrap(), vec!["Only"]);
    }

    #[test]
    fn leaf_paths_follow_flatten_order() {
        let paths: Vec<String> = leaf_paths(&sample()).iter().map(ToString::to_string).collect();
        assert_eq!(paths, vec!["Root > Happy", "Root > Sad > Disappointed"]);
    }
}
