use log::error;
use rand::Rng;

use emotiondice_taxonomy::{Taxonomy, TaxonomyError};

use crate::selector::{pick_random_with, SelectError};

/// Core emotions offered when the taxonomy cannot provide any leaves.
/// 無法從分類樹取得情緒時使用的預設清單。
pub const FALLBACK_EMOTIONS: [&str; 7] = [
    "Happy",
    "Sad",
    "Angry",
    "Surprised",
    "Fearful",
    "Bad",
    "Disgusted",
];

/// Where the selectable emotions came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource {
    Taxonomy,
    Fallback { reason: String },
}

/// The non-empty list the selector draws from.
/// 供隨機挑選使用的非空情緒清單。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionPool {
    emotions: Vec<String>,
    source: PoolSource,
}

impl EmotionPool {
    /// Flattens `taxonomy`; an empty result degrades to the fallback list.
    /// 攤平分類樹；若沒有葉節點則改用備援清單。
    pub fn from_taxonomy(taxonomy: &Taxonomy, fallback: &[String]) -> Self {
        match taxonomy.selectable_leaves() {
            Ok(emotions) => Self {
                emotions,
                source: PoolSource::Taxonomy,
            },
            Err(err @ TaxonomyError::EmptyTaxonomy { .. }) => Self::fallback(err, fallback),
        }
    }

    /// Builds a pool from the fallback list, recording why it was needed.
    pub fn fallback(reason: impl ToString, fallback: &[String]) -> Self {
        let reason = reason.to_string();
        error!("using fallback emotions: {reason}");
        Self {
            emotions: fallback_emotions(fallback),
            source: PoolSource::Fallback { reason },
        }
    }

    pub fn emotions(&self) -> &[String] {
        &self.emotions
    }

    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    pub fn source(&self) -> &PoolSource {
        &self.source
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PoolSource::Fallback { .. })
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, SelectError> {
        pick_random_with(&self.emotions, rng)
    }
}

/// Cleans a configured fallback list; blank names are dropped and an empty
/// result is replaced by [`FALLBACK_EMOTIONS`].
pub fn fallback_emotions(configured: &[String]) -> Vec<String> {
    let cleaned: Vec<String> = configured
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if cleaned.is_empty() {
        FALLBACK_EMOTIONS.iter().map(|name| name.to_string()).collect()
    } else {
        cleaned
    }
}
