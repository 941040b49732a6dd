use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of wardrobe categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    Intimates,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 7] = [
        ClothingCategory::Tops,
        ClothingCategory::Bottoms,
        ClothingCategory::Dresses,
        ClothingCategory::Outerwear,
        ClothingCategory::Shoes,
        ClothingCategory::Accessories,
        ClothingCategory::Intimates,
    ];

    /// Singular label used when naming outfits.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tops => "Top",
            Self::Bottoms => "Bottom",
            Self::Dresses => "Dress",
            Self::Outerwear => "Layer",
            Self::Shoes => "Shoes",
            Self::Accessories => "Accessory",
            Self::Intimates => "Essential",
        }
    }
}

/// Season tag a user can attach to a piece.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllSeason,
}

/// A single wardrobe piece. Items are created by the wardrobe-management
/// layer and passed into the engine read-only; no call in this crate
/// mutates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub name: String,
    pub category: ClothingCategory,
    pub colors: Vec<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    /// How good the wearer historically feels in this piece, in [1, 10].
    pub confidence_score: f32,
    pub wear_count: u32,
    #[serde(default)]
    pub last_worn: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub favorite: bool,
}

impl ClothingItem {
    pub fn new(name: impl Into<String>, category: ClothingCategory, colors: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            colors,
            brand: None,
            notes: None,
            season: None,
            confidence_score: 5.0,
            wear_count: 0,
            last_worn: None,
            created_at: Utc::now(),
            archived: false,
            favorite: false,
        }
    }

    /// Sets the confidence score, clamped into [1, 10].
    pub fn with_confidence(mut self, score: f32) -> Self {
        self.confidence_score = score.clamp(1.0, 10.0);
        self
    }

    /// Whether the piece was worn within the given number of days before `now`.
    pub fn worn_within(&self, days: i64, now: DateTime<Utc>) -> bool {
        match self.last_worn {
            Some(worn) => now.signed_duration_since(worn) <= Duration::days(days),
            None => false,
        }
    }
}
