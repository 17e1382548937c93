use std::fmt;

use serde::{Deserialize, Serialize};

/// A single entry of the feelings taxonomy.
/// 情緒分類樹中的單一節點。
///
/// A node without children is a leaf; only leaves are selectable. Use
/// [`TaxonomyNode::kind`] to branch on the distinction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NodeRecord")]
pub struct TaxonomyNode {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<TaxonomyNode>,
}

/// Borrowed view separating leaves from categories.
/// 區分葉節點與分類節點的借用視圖。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Leaf,
    Category(&'a [TaxonomyNode]),
}

impl TaxonomyNode {
    /// Creates a leaf node.
    /// 建立葉節點。
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: normalize_name(name.into()),
            children: Vec::new(),
        }
    }

    /// Creates a category node; an empty child list produces a leaf.
    /// 建立分類節點；若子節點為空則視為葉節點。
    pub fn category(
        name: impl Into<String>,
        children: impl IntoIterator<Item = TaxonomyNode>,
    ) -> Self {
        Self {
            name: normalize_name(name.into()),
            children: children.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind<'_> {
        if self.children.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Category(&self.children)
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind(), NodeKind::Leaf)
    }

    pub fn children(&self) -> &[TaxonomyNode] {
        &self.children
    }
}

fn normalize_name(name: String) -> String {
    let trimmed = name.trim();
    if trimmed.len() == name.len() {
        name
    } else {
        trimmed.to_string()
    }
}

/// On-disk shape: `children` may be absent, `null`, or empty for a leaf.
#[derive(Deserialize)]
struct NodeRecord {
    name: String,
    #[serde(default)]
    children: Option<Vec<TaxonomyNode>>,
}

impl From<NodeRecord> for TaxonomyNode {
    fn from(record: NodeRecord) -> Self {
        TaxonomyNode::category(record.name, record.children.unwrap_or_default())
    }
}

/// Ordered chain of names from the taxonomy root to a leaf, both inclusive.
/// 從根節點到葉節點（含兩端）的名稱序列。
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AncestorPath(Vec<String>);

impl AncestorPath {
    /// Builds a path from raw segments, returning `None` when there are none.
    /// 由名稱片段建立路徑；若無片段則回傳 `None`。
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    pub(crate) fn from_trail(trail: &[&str]) -> Option<Self> {
        Self::new(trail.iter().copied())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn root(&self) -> &str {
        &self.0[0]
    }

    pub fn leaf(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Second-to-last segment, when the path has at least two.
    /// 倒數第二個名稱（父分類）。
    pub fn parent(&self) -> Option<&str> {
        self.from_end(2)
    }

    /// Third-to-last segment, when the path has at least three.
    /// 倒數第三個名稱（祖分類）。
    pub fn grandparent(&self) -> Option<&str> {
        self.from_end(3)
    }

    /// The trailing `count` segments (all of them when `count` exceeds the length).
    pub fn tail(&self, count: usize) -> &[String] {
        let start = self.0.len().saturating_sub(count);
        &self.0[start..]
    }

    fn from_end(&self, offset: usize) -> Option<&str> {
        self.0
            .len()
            .checked_sub(offset)
            .map(|index| self.0[index].as_str())
    }
}

impl fmt::Display for AncestorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" > "))
    }
}

impl IntoIterator for AncestorPath {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_child_list_is_a_leaf() {
        let node = TaxonomyNode::category("Calm", Vec::new());
        assert!(node.is_leaf());
        assert_eq!(node.kind(), NodeKind::Leaf);
    }

    #[test]
    fn names_are_trimmed() {
        let node = TaxonomyNode::leaf("  Let Down ");
        assert_eq!(node.name(), "Let Down");
    }

    #[test]
    fn deserialize_accepts_missing_null_and_empty_children() {
        let json = r#"{
            "name": "Root",
            "children": [
                {"name": "A"},
                {"name": "B", "children": null},
                {"name": "C", "children": []},
                {"name": "D", "children": [{"name": "E"}]}
            ]
        }"#;
        let root: TaxonomyNode = serde_json::from_str(json).unwrap();
        let kinds: Vec<bool> = root.children().iter().map(TaxonomyNode::is_leaf).collect();
        assert_eq!(kinds, vec![true, true, true, false]);
    }

    #[test]
    fn serialize_omits_children_for_leaves() {
        let root = TaxonomyNode::category("Root", [TaxonomyNode::leaf("Happy")]);
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, r#"{"name":"Root","children":[{"name":"Happy"}]}"#);
    }

    #[test]
    fn ancestor_path_rejects_empty_segments() {
        assert!(AncestorPath::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn ancestor_path_exposes_parent_and_grandparent() {
        let path = AncestorPath::new(["Feelings", "Sad", "Hurt", "Disappointed"]).unwrap();
        assert_eq!(path.root(), "Feelings");
        assert_eq!(path.leaf(), "Disappointed");
        assert_eq!(path.parent(), Some("Hurt"));
        assert_eq!(path.grandparent(), Some("Sad"));
        assert_eq!(path.tail(2), ["Hurt".to_string(), "Disappointed".to_string()]);
        assert_eq!(path.to_string(), "Feelings > Sad > Hurt > Disappointed");

        let short = AncestorPath::new(["Happy"]).unwrap();
        assert_eq!(short.parent(), None);
        assert_eq!(short.grandparent(), None);
        assert_eq!(short.tail(5).len(), 1);
    }
}
