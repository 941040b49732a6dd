pub mod insight;
pub mod item;
pub mod outfit;

pub use insight::{Insight, InsightKind};
pub use item::{ClothingCategory, ClothingItem, Season};
pub use outfit::{curated_confidence, Outfit};
