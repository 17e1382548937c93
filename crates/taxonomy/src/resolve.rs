use log::debug;

use crate::node::{AncestorPath, NodeKind, TaxonomyNode};

/// Finds the root-to-leaf path of the first leaf named `leaf_name`.
/// 尋找名稱為 `leaf_name` 的第一個葉節點，並回傳其祖先路徑。
///
/// The search is depth-first and visits children in order. A category that
/// happens to share the name is not a match; its subtree is still searched.
/// Returns `None` when no leaf carries the name.
pub fn resolve_path(root: &TaxonomyNode, leaf_name: &str) -> Option<AncestorPath> {
    let mut trail = Vec::new();
    if descend(root, leaf_name, &mut trail) {
        AncestorPath::from_trail(&trail)
    } else {
        debug!("no leaf named '{leaf_name}' under '{}'", root.name());
        None
    }
}

fn descend<'a>(node: &'a TaxonomyNode, target: &str, trail: &mut Vec<&'a str>) -> bool {
    trail.push(node.name());
    let found = match node.kind() {
        NodeKind::Leaf => node.name() == target,
        NodeKind::Category(children) => children
            .iter()
            .any(|child| descend(child, target, trail)),
    };
    if !found {
        trail.pop();
    }
    found
}
