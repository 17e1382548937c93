use std::fmt;
use std::path::Path;

use log::{debug, warn};
use rand::Rng;

use emotiondice_taxonomy::{ResourcePathFormat, Taxonomy};

use crate::pool::EmotionPool;
use crate::selection::SelectionState;
use crate::selector::SelectError;
use crate::settings::DiceSettings;

/// The picker: a selectable pool plus the state of the current roll.
/// 情緒骰子：可挑選的情緒清單與目前的選取狀態。
#[derive(Debug, Clone)]
pub struct EmotionDice {
    taxonomy: Option<Taxonomy>,
    pool: EmotionPool,
    format: ResourcePathFormat,
    state: SelectionState,
}

impl EmotionDice {
    pub fn new(taxonomy: Taxonomy, settings: &DiceSettings) -> Self {
        let pool = EmotionPool::from_taxonomy(&taxonomy, &settings.fallback_emotions);
        Self {
            taxonomy: Some(taxonomy),
            pool,
            format: settings.images.format(),
            state: SelectionState::default(),
        }
    }

    /// Builds the picker from a load attempt; a failed load keeps the dice
    /// usable with the fallback emotions and no ancestry.
    /// 載入失敗時改用備援情緒清單，骰子仍可使用。
    pub fn from_load_result<E: fmt::Display>(
        result: Result<Taxonomy, E>,
        settings: &DiceSettings,
    ) -> Self {
        match result {
            Ok(taxonomy) => Self::new(taxonomy, settings),
            Err(err) => Self {
                taxonomy: None,
                pool: EmotionPool::fallback(
                    format!("failed to load taxonomy: {err}"),
                    &settings.fallback_emotions,
                ),
                format: settings.images.format(),
                state: SelectionState::default(),
            },
        }
    }

    pub fn taxonomy(&self) -> Option<&Taxonomy> {
        self.taxonomy.as_ref()
    }

    pub fn pool(&self) -> &EmotionPool {
        &self.pool
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn format(&self) -> &ResourcePathFormat {
        &self.format
    }

    /// Picks a new emotion and recomputes everything derived from it.
    pub fn roll_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&SelectionState, SelectError> {
        let emotion = self.pool.pick_with(rng)?.to_string();
        Ok(self.select(&emotion))
    }

    pub fn roll(&mut self) -> Result<&SelectionState, SelectError> {
        let mut rng = rand::thread_rng();
        self.roll_with(&mut rng)
    }

    /// Makes `emotion` the current selection.
    pub fn select(&mut self, emotion: &str) -> &SelectionState {
        self.state = SelectionState::for_emotion(self.taxonomy.as_ref(), emotion, &self.format);
        debug!(
            "selected '{emotion}' (image: {})",
            self.state.image_path.as_deref().unwrap_or("none")
        );
        &self.state
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::default();
    }

    /// Hides the current image when its file is missing under `assets_dir`,
    /// which stands in for the resource root. Returns whether an image remains.
    /// 若圖片檔不存在則隱藏圖片，其餘資訊保持不變。
    pub fn verify_image(&mut self, assets_dir: &Path) -> bool {
        let Some(emotion) = self.state.emotion.as_deref() else {
            return false;
        };
        let Some(path) = self
            .taxonomy
            .as_ref()
            .and_then(|taxonomy| taxonomy.resolve_path(emotion))
        else {
            return false;
        };
        let file = assets_dir.join(self.format.relative(&path));
        if file.is_file() {
            return true;
        }
        warn!("failed to load image: {}", file.display());
        self.state = std::mem::take(&mut self.state).without_image();
        false
    }

    pub fn summary(&self) -> String {
        format!(
            "This tool randomly selects from {} different emotions to help improv performers practice emotional range and add spontaneity to exercises.",
            self.pool.len()
        )
    }
}
