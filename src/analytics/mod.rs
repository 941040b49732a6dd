pub mod insights;
pub mod stats;

pub use insights::{generate_insights, generate_insights_with};
pub use stats::{compute_stats, compute_stats_with, WardrobeStats};
