use std::path::{Path, PathBuf};

use emotiondice_taxonomy::{AncestorPath, ResourcePathFormat, Taxonomy};

use crate::settings::ImagePromptSettings;

/// Text prompt for a portrait that illustrates the leaf at the end of `path`.
/// 為路徑末端的情緒產生人像圖片提示詞。
///
/// `root_levels` ancestor names are mentioned next to the leaf; a negative
/// value mentions the whole path.
pub fn build_image_prompt(path: &AncestorPath, style: &str, root_levels: i32) -> String {
    let relevant = match usize::try_from(root_levels) {
        Ok(levels) => path.tail(levels.saturating_add(1)),
        Err(_) => path.segments(),
    };
    let feeling_line = relevant.join(", ");
    format!(
        "A vertical portrait photograph of a single human subject centered in the frame, \
         displaying a clearly recognizable expression of '{feeling_line}'. \
         The emotional state must be immediately clear to viewers through facial expression and body language; \
         {style}. No text or lettering should appear in the image."
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    Pending,
    Exists,
}

/// One portrait to produce: the leaf, its prompt and where the file belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePlanEntry {
    pub path: AncestorPath,
    pub prompt: String,
    pub relative_file: String,
}

impl ImagePlanEntry {
    pub fn target(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(&self.relative_file)
    }

    pub fn status(&self, assets_dir: &Path) -> PlanStatus {
        if self.target(assets_dir).is_file() {
            PlanStatus::Exists
        } else {
            PlanStatus::Pending
        }
    }
}

/// Offline listing of every portrait the taxonomy calls for.
/// 列出分類樹中每個葉節點所需的圖片（不進行任何網路呼叫）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePlan {
    pub entries: Vec<ImagePlanEntry>,
}

impl ImagePlan {
    pub fn for_taxonomy(
        taxonomy: &Taxonomy,
        prompts: &ImagePromptSettings,
        format: &ResourcePathFormat,
    ) -> Self {
        let entries = taxonomy
            .leaf_paths()
            .into_iter()
            .map(|path| ImagePlanEntry {
                prompt: build_image_prompt(&path, &prompts.style, prompts.root_levels),
                relative_file: format.relative(&path),
                path,
            })
            .collect();
        Self { entries }
    }

    pub fn pending<'a>(
        &'a self,
        assets_dir: &'a Path,
    ) -> impl Iterator<Item = &'a ImagePlanEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.status(assets_dir) == PlanStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotiondice_taxonomy::TaxonomyNode;
    use std::fs;
    use tempfile::tempdir;

    fn path() -> AncestorPath {
        AncestorPath::new(["Feelings", "Sad", "Lonely", "Isolated"]).unwrap()
    }

    #[test]
    fn prompt_mentions_requested_levels() {
        let prompt = build_image_prompt(&path(), "cinematic", 1);
        assert!(prompt.contains("expression of 'Lonely, Isolated'."));
        assert!(prompt.contains("body language; cinematic. No text"));

        let leaf_only = build_image_prompt(&path(), "noir", 0);
        assert!(leaf_only.contains("expression of 'Isolated'."));

        let everything = build_image_prompt(&path(), "noir", -1);
        assert!(everything.contains("'Feelings, Sad, Lonely, Isolated'"));

        let oversized = build_image_prompt(&path(), "noir", 10);
        assert!(oversized.contains("'Feelings, Sad, Lonely, Isolated'"));
    }

    #[test]
    fn plan_marks_existing_files() {
        let taxonomy = Taxonomy::new(TaxonomyNode::category(
            "Feelings",
            [
                TaxonomyNode::leaf("Calm"),
                TaxonomyNode::category("Bad", [TaxonomyNode::leaf("Out of Control")]),
            ],
        ));
        let format = ResourcePathFormat::new("/images", "png");
        let plan = ImagePlan::for_taxonomy(&taxonomy, &ImagePromptSettings::default(), &format);
        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.entries[1].relative_file, "feelings/bad/out-of-control.png");

        let dir = tempdir().unwrap();
        let existing = plan.entries[0].target(dir.path());
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, b"png").unwrap();

        assert_eq!(plan.entries[0].status(dir.path()), PlanStatus::Exists);
        let pending: Vec<&str> = plan.pending(dir.path()).map(|e| e.path.leaf()).collect();
        assert_eq!(pending, vec!["Out of Control"]);
    }
}
