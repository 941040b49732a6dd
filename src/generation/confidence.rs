use crate::models::ClothingItem;

const MAX_CONFIDENCE: f32 = 10.0;
const FULL_OUTFIT_SIZE: f32 = 4.0;
const COMPLETENESS_REWARD: f32 = 2.0;

/// Confidence for a composed outfit in [0, 10]: average item confidence
/// plus a completeness bonus that rewards fuller outfits, capped at +2.
pub fn outfit_confidence(items: &[&ClothingItem]) -> f32 {
    if items.is_empty() {
        return 0.0;
    }
    let avg = items.iter().map(|item| item.confidence_score).sum::<f32>() / items.len() as f32;
    let bonus = (items.len() as f32 / FULL_OUTFIT_SIZE).min(1.0) * COMPLETENESS_REWARD;
    (avg + bonus).min(MAX_CONFIDENCE)
}
