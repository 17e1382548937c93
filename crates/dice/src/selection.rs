use serde::Serialize;

use emotiondice_taxonomy::{ResourcePathFormat, Taxonomy};

const EXPRESSION_HINT: &str = "Consider body language, tone, and facial expressions.";
const IDLE_PROMPT: &str =
    "Click the button above to discover an emotion to portray in your improv exercise.";

/// What is currently on screen: the chosen emotion and everything derived from it.
/// 目前選取的情緒及其衍生資訊。
///
/// Owned by the front end and rebuilt from scratch whenever the selection
/// changes; nothing here is cached inside the taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub emotion: Option<String>,
    pub parent: Option<String>,
    pub grandparent: Option<String>,
    pub image_path: Option<String>,
}

impl SelectionState {
    /// Derives ancestry and image location for `emotion`.
    /// 為指定情緒推導父分類、祖分類與圖片位置。
    ///
    /// Names that do not resolve to a leaf (for instance fallback entries)
    /// keep the emotion but carry no ancestry and no image.
    pub fn for_emotion(
        taxonomy: Option<&Taxonomy>,
        emotion: &str,
        format: &ResourcePathFormat,
    ) -> Self {
        let path = taxonomy.and_then(|taxonomy| taxonomy.resolve_path(emotion));
        match path {
            Some(path) => Self {
                emotion: Some(emotion.to_string()),
                parent: path.parent().map(str::to_string),
                grandparent: path.grandparent().map(str::to_string),
                image_path: Some(format.format(&path)),
            },
            None => Self {
                emotion: Some(emotion.to_string()),
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emotion.is_none()
    }

    /// The improv prompt shown beneath the emotion.
    pub fn context_prompt(&self) -> String {
        let Some(emotion) = self.emotion.as_deref() else {
            return IDLE_PROMPT.to_string();
        };
        match (self.parent.as_deref(), self.grandparent.as_deref()) {
            (Some(parent), Some(grandparent)) => format!(
                "How would you express \"{emotion}\" (a type of {parent}, which is a type of {grandparent}) in a scene? {EXPRESSION_HINT}"
            ),
            (Some(parent), None) => format!(
                "How would you express \"{emotion}\" (a type of {parent}) in a scene? {EXPRESSION_HINT}"
            ),
            _ => format!("How would you express \"{emotion}\" in a scene? {EXPRESSION_HINT}"),
        }
    }

    /// Drops the image after the front end failed to load it.
    pub fn without_image(mut self) -> Self {
        self.image_path = None;
        self
    }
}
