use chrono::Utc;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::compatibility::{item_score, normalize_color};
use crate::config::CompositionSettings;
use crate::generation::confidence::outfit_confidence;
use crate::generation::narrative::{outfit_name, whisper_for};
use crate::models::{ClothingCategory, ClothingItem, Outfit};
use crate::moods::{filter_by_mood, item_matches_palette, MoodCatalog, MoodTag};

/// Categories in the order the composer fills an outfit: structure first,
/// then footwear and finishing touches. Intimates are never auto-selected.
const CATEGORY_PRIORITY: [ClothingCategory; 6] = [
    ClothingCategory::Tops,
    ClothingCategory::Bottoms,
    ClothingCategory::Dresses,
    ClothingCategory::Outerwear,
    ClothingCategory::Shoes,
    ClothingCategory::Accessories,
];

/// Soft preference for palette-matching items when the hard mood filter had
/// to be bypassed.
const MOOD_FALLBACK_BONUS: f32 = 0.05;

const MIN_OUTFIT_ITEMS: usize = 2;

/// Greedy category-priority outfit builder.
pub struct OutfitComposer {
    catalog: MoodCatalog,
    max_items: usize,
}

impl OutfitComposer {
    pub fn new(catalog: MoodCatalog) -> Self {
        Self::with_settings(catalog, &CompositionSettings::default())
    }

    pub fn with_settings(catalog: MoodCatalog, settings: &CompositionSettings) -> Self {
        Self {
            catalog,
            max_items: (settings.max_outfit_items as usize).max(MIN_OUTFIT_ITEMS),
        }
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    /// Builds an outfit for the given mood, or `None` when the wardrobe
    /// holds fewer than two pieces. That is an expected empty-state
    /// outcome, not an error.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        wardrobe: &[ClothingItem],
        mood: MoodTag,
        rng: &mut R,
    ) -> Option<Outfit> {
        if wardrobe.len() < MIN_OUTFIT_ITEMS {
            return None;
        }

        let filtered = filter_by_mood(wardrobe, mood, &self.catalog);
        let mood_filtered = filtered.len() >= MIN_OUTFIT_ITEMS;
        let candidates: Vec<&ClothingItem> = if mood_filtered {
            filtered
        } else {
            debug!(
                "mood filter left {} candidate(s) for '{mood}', falling back to the full wardrobe",
                filtered.len()
            );
            wardrobe.iter().collect()
        };

        let palette: Vec<String> = self
            .catalog
            .profile(mood)
            .preferred_colors
            .iter()
            .map(|color| normalize_color(color))
            .collect();

        let mut selected: Vec<&ClothingItem> = Vec::new();
        for category in CATEGORY_PRIORITY {
            if selected.len() >= self.max_items {
                break;
            }
            let pool: Vec<&ClothingItem> = candidates
                .iter()
                .copied()
                .filter(|item| {
                    item.category == category && !selected.iter().any(|s| s.id == item.id)
                })
                .collect();
            if pool.is_empty() {
                continue;
            }

            let scored: Vec<(f32, &ClothingItem)> = pool
                .into_iter()
                .map(|item| {
                    let mut score = item_score(item, &selected, rng);
                    // Fallback keeps the mood signal as a soft preference.
                    if !mood_filtered && item_matches_palette(item, &palette) {
                        score += MOOD_FALLBACK_BONUS;
                    }
                    (score, item)
                })
                .collect();
            let best = scored
                .iter()
                .map(|(score, _)| *score)
                .fold(f32::MIN, f32::max);
            let tied: Vec<&ClothingItem> = scored
                .iter()
                .filter(|(score, _)| (*score - best).abs() < f32::EPSILON)
                .map(|(_, item)| *item)
                .collect();
            if let Some(pick) = tied.choose(rng) {
                selected.push(*pick);
            }
        }

        // A wardrobe of two or more pieces always yields at least a two-piece
        // outfit, even when no priority category matched.
        if selected.len() < MIN_OUTFIT_ITEMS {
            for item in candidates.iter().copied() {
                if selected.len() >= MIN_OUTFIT_ITEMS {
                    break;
                }
                if !selected.iter().any(|s| s.id == item.id) {
                    selected.push(item);
                }
            }
        }

        let confidence = outfit_confidence(&selected);
        let name = outfit_name(&selected, mood, &self.catalog, rng);
        let whisper = whisper_for(mood, &self.catalog, rng);
        debug!(
            "composed a {}-piece outfit for '{mood}' (confidence {confidence:.1})",
            selected.len()
        );

        Some(Outfit {
            id: Uuid::new_v4(),
            name,
            items: selected.into_iter().cloned().collect(),
            mood,
            whisper,
            confidence_score: confidence,
            created_at: Utc::now(),
            last_worn: None,
            favorite: false,
            tags: Vec::new(),
        })
    }
}
