use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compatibility::{best_color_pairing, category_compatibility};
use crate::models::ClothingItem;
use crate::moods::MoodTag;

const MAX_OUTFIT_CONFIDENCE: f32 = 10.0;

/// A generated or user-curated combination of wardrobe pieces.
///
/// The item list is an owned snapshot of the pieces at composition time, so
/// an outfit is a self-contained value that outlives the wardrobe slice it
/// was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<ClothingItem>,
    pub mood: MoodTag,
    pub whisper: String,
    /// Always clamped to [0, 10].
    pub confidence_score: f32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Confidence score for outfits assembled outside the composer, e.g.
/// user-curated saves: mean item confidence, plus the average pairwise
/// color harmony across all item pairs (worth up to one extra point), plus
/// the average pairwise category compatibility (also up to one point),
/// clamped to 10.
pub fn curated_confidence(items: &[ClothingItem]) -> f32 {
    if items.is_empty() {
        return 0.0;
    }
    let avg =
        items.iter().map(|item| item.confidence_score).sum::<f32>() / items.len() as f32;

    let mut harmony_sum = 0.0f32;
    let mut category_sum = 0.0f32;
    let mut pairs = 0u32;
    for (idx, a) in items.iter().enumerate() {
        for b in &items[idx + 1..] {
            harmony_sum += best_color_pairing(a, b);
            category_sum += category_compatibility(a.category, b.category);
            pairs += 1;
        }
    }

    let mut score = avg;
    if pairs > 0 {
        score += harmony_sum / pairs as f32;
        score += category_sum / pairs as f32;
    }
    score.min(MAX_OUTFIT_CONFIDENCE)
}
