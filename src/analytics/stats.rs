use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::compatibility::normalize_color;
use crate::config::AnalyticsSettings;
use crate::models::{ClothingCategory, ClothingItem};

/// Aggregate wardrobe statistics, recomputed on demand from a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeStats {
    pub total_items: u32,
    pub category_counts: HashMap<ClothingCategory, u32>,
    /// Occurrences per normalized color name.
    pub color_distribution: HashMap<String, u32>,
    pub recently_worn: u32,
    /// Percentage of items worn within the recency window. Zero for an
    /// empty wardrobe.
    pub utilization_rate: f32,
    /// Zero for an empty wardrobe.
    pub average_confidence: f32,
    pub generated_at: DateTime<Utc>,
}

/// Computes statistics with the default 30-day recency window.
pub fn compute_stats(wardrobe: &[ClothingItem], now: DateTime<Utc>) -> WardrobeStats {
    compute_stats_with(wardrobe, now, &AnalyticsSettings::default())
}

/// Single pass over the wardrobe snapshot. The clock is caller-supplied so
/// recency is reproducible.
pub fn compute_stats_with(
    wardrobe: &[ClothingItem],
    now: DateTime<Utc>,
    settings: &AnalyticsSettings,
) -> WardrobeStats {
    let mut category_counts: HashMap<ClothingCategory, u32> = HashMap::new();
    let mut color_distribution: HashMap<String, u32> = HashMap::new();
    let mut recently_worn = 0u32;
    let mut confidence_sum = 0.0f32;

    for item in wardrobe {
        *category_counts.entry(item.category).or_insert(0) += 1;
        for color in &item.colors {
            *color_distribution.entry(normalize_color(color)).or_insert(0) += 1;
        }
        if item.worn_within(settings.recency_window_days, now) {
            recently_worn += 1;
        }
        confidence_sum += item.confidence_score;
    }

    let total_items = wardrobe.len() as u32;
    let utilization_rate = if wardrobe.is_empty() {
        0.0
    } else {
        recently_worn as f32 / total_items as f32 * 100.0
    };
    let average_confidence = if wardrobe.is_empty() {
        0.0
    } else {
        confidence_sum / total_items as f32
    };

    WardrobeStats {
        total_items,
        category_counts,
        color_distribution,
        recently_worn,
        utilization_rate,
        average_confidence,
        generated_at: now,
    }
}
