//! Random emotion picker built on the feelings taxonomy.
//! 以情緒分類樹為基礎的隨機情緒挑選器。

pub mod dice;
pub mod image_prompt;
pub mod pool;
pub mod selection;
pub mod selector;
pub mod settings;

pub use dice::EmotionDice;
pub use image_prompt::{build_image_prompt, ImagePlan, ImagePlanEntry, PlanStatus};
pub use pool::{fallback_emotions, EmotionPool, PoolSource, FALLBACK_EMOTIONS};
pub use selection::SelectionState;
pub use selector::{pick_random, pick_random_with, SelectError};
pub use settings::{
    DiceSettings, ImagePromptSettings, ImageSettings, SettingsError, SettingsStore,
};
