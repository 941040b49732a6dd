pub mod analytics;
pub mod compatibility;
pub mod config;
pub mod generation;
pub mod models;
pub mod moods;

// Re-export commonly used types for convenience.
pub use analytics::{compute_stats, generate_insights, WardrobeStats};
pub use config::EngineSettings;
pub use generation::OutfitComposer;
pub use models::{curated_confidence, ClothingCategory, ClothingItem, Insight, InsightKind, Outfit, Season};
pub use moods::{filter_by_mood, MoodCatalog, MoodTag};
