use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of wardrobe observations the engine can surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    ForgottenTreasure,
    ColorHarmony,
    ConfidenceBoost,
}

impl InsightKind {
    /// Display name for UI surfaces.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ForgottenTreasure => "Forgotten Treasure",
            Self::ColorHarmony => "Color Harmony",
            Self::ConfidenceBoost => "Confidence Boost",
        }
    }
}

/// A generated observation about the wardrobe. Insights are advisory text
/// for the UI layer, recomputed per request and never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub id: Uuid,
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub actionable: bool,
    #[serde(default)]
    pub related_item_ids: Vec<Uuid>,
}
