pub mod composer;
pub mod confidence;
pub mod narrative;

pub use composer::OutfitComposer;
pub use confidence::outfit_confidence;
pub use narrative::{outfit_name, whisper_for};
