use chrono::{DateTime, Utc};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use super::stats::WardrobeStats;
use crate::config::AnalyticsSettings;
use crate::models::{ClothingItem, Insight, InsightKind};

/// Derives 0–3 advisory insights with the default thresholds.
pub fn generate_insights<R: Rng + ?Sized>(
    wardrobe: &[ClothingItem],
    stats: &WardrobeStats,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Insight> {
    generate_insights_with(wardrobe, stats, now, &AnalyticsSettings::default(), rng)
}

/// Three independent rules, each contributing at most one insight. None of
/// them is mandatory and none can fail.
pub fn generate_insights_with<R: Rng + ?Sized>(
    wardrobe: &[ClothingItem],
    stats: &WardrobeStats,
    now: DateTime<Utc>,
    settings: &AnalyticsSettings,
    rng: &mut R,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    if let Some(insight) = forgotten_treasure(wardrobe, now, settings, rng) {
        insights.push(insight);
    }
    if let Some(insight) = color_harmony(stats) {
        insights.push(insight);
    }
    if let Some(insight) = confidence_boost(wardrobe, settings) {
        insights.push(insight);
    }
    debug!("derived {} wardrobe insight(s)", insights.len());
    insights
}

/// Flags one randomly chosen piece that was never worn or not worn for
/// longer than the forgotten threshold.
fn forgotten_treasure<R: Rng + ?Sized>(
    wardrobe: &[ClothingItem],
    now: DateTime<Utc>,
    settings: &AnalyticsSettings,
    rng: &mut R,
) -> Option<Insight> {
    let forgotten: Vec<&ClothingItem> = wardrobe
        .iter()
        .filter(|item| !item.worn_within(settings.forgotten_after_days, now))
        .collect();
    let pick = forgotten.choose(rng)?;
    Some(Insight {
        id: Uuid::new_v4(),
        kind: InsightKind::ForgottenTreasure,
        title: "A forgotten treasure".into(),
        message: format!(
            "{} has been waiting in your wardrobe for a while. It might be exactly what tomorrow needs.",
            pick.name
        ),
        actionable: true,
        related_item_ids: vec![pick.id],
    })
}

/// Names the two most frequent wardrobe colors. Count descending, name
/// ascending as a deterministic tiebreak.
fn color_harmony(stats: &WardrobeStats) -> Option<Insight> {
    let mut counts: Vec<(&String, &u32)> = stats.color_distribution.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let first = counts.first()?.0;
    let second = counts.get(1)?.0;
    Some(Insight {
        id: Uuid::new_v4(),
        kind: InsightKind::ColorHarmony,
        title: "Your signature palette".into(),
        message: format!(
            "{first} and {second} anchor your wardrobe. You can build almost any look around that pairing."
        ),
        actionable: false,
        related_item_ids: Vec::new(),
    })
}

/// Highlights every piece at or above the high-confidence threshold.
fn confidence_boost(wardrobe: &[ClothingItem], settings: &AnalyticsSettings) -> Option<Insight> {
    let boosters: Vec<&ClothingItem> = wardrobe
        .iter()
        .filter(|item| item.confidence_score >= settings.high_confidence_threshold)
        .collect();
    if boosters.is_empty() {
        return None;
    }
    let message = if boosters.len() == 1 {
        format!(
            "{} never lets you down. Reach for it when the day matters.",
            boosters[0].name
        )
    } else {
        format!(
            "{} pieces in your wardrobe consistently make you feel great. Lean on them when the day matters.",
            boosters.len()
        )
    };
    Some(Insight {
        id: Uuid::new_v4(),
        kind: InsightKind::ConfidenceBoost,
        title: "Your power pieces".into(),
        message,
        actionable: true,
        related_item_ids: boosters.iter().map(|item| item.id).collect(),
    })
}
