//! Mood definitions and the mood-to-palette/adjective/whisper catalog.
//!
//! The catalog is plain data: one `MoodProfile` per mood, `match`-dispatched
//! so the mapping is total by construction. The builtin data cannot miss a
//! mood, and a catalog loaded from TOML fails at load time when a section is
//! absent or a bank is empty.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::compatibility::normalize_color;
use crate::models::ClothingItem;

/// Closed set of six moods driving outfit color and narrative selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoodTag {
    SereneGrounded,
    LuminousConfident,
    CreativeInspired,
    JoyfulPlayful,
    ElegantRefined,
    BoldAdventurous,
}

impl MoodTag {
    pub const ALL: [MoodTag; 6] = [
        MoodTag::SereneGrounded,
        MoodTag::LuminousConfident,
        MoodTag::CreativeInspired,
        MoodTag::JoyfulPlayful,
        MoodTag::ElegantRefined,
        MoodTag::BoldAdventurous,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SereneGrounded => "Serene & Grounded",
            Self::LuminousConfident => "Luminous & Confident",
            Self::CreativeInspired => "Creative & Inspired",
            Self::JoyfulPlayful => "Joyful & Playful",
            Self::ElegantRefined => "Elegant & Refined",
            Self::BoldAdventurous => "Bold & Adventurous",
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Palette, naming and whisper data for one mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodProfile {
    pub preferred_colors: Vec<String>,
    pub adjectives: Vec<String>,
    pub whispers: Vec<String>,
}

/// Catalog mapping every mood to its profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodCatalog {
    pub serene_grounded: MoodProfile,
    pub luminous_confident: MoodProfile,
    pub creative_inspired: MoodProfile,
    pub joyful_playful: MoodProfile,
    pub elegant_refined: MoodProfile,
    pub bold_adventurous: MoodProfile,
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MoodCatalog {
    /// The builtin reference data.
    pub fn builtin() -> Self {
        Self {
            serene_grounded: MoodProfile {
                preferred_colors: bank(&["sage", "cream", "taupe", "dusty blue", "ivory"]),
                adjectives: bank(&["Serene", "Grounded", "Tranquil", "Gentle", "Quiet"]),
                whispers: bank(&[
                    "Ease into the day. Everything you need is already with you.",
                    "Soft layers, steady heart.",
                    "You move gently, and the day follows.",
                    "Grounded is its own kind of glamour.",
                    "Breathe in. This outfit holds you.",
                ]),
            },
            luminous_confident: MoodProfile {
                preferred_colors: bank(&["gold", "champagne", "white", "camel", "bronze"]),
                adjectives: bank(&["Luminous", "Radiant", "Golden", "Gleaming", "Assured"]),
                whispers: bank(&[
                    "You were made to catch the light.",
                    "Walk in like the answer is yes.",
                    "Today meets you glowing.",
                    "Gold suits you, and so does certainty.",
                    "Shine first, explain never.",
                ]),
            },
            creative_inspired: MoodProfile {
                preferred_colors: bank(&["teal", "mustard", "rust", "plum", "emerald"]),
                adjectives: bank(&["Creative", "Inspired", "Curious", "Vivid", "Original"]),
                whispers: bank(&[
                    "Wear the idea before you can explain it.",
                    "Color outside the lines today.",
                    "Your imagination picked this one.",
                    "Unexpected pairings open unexpected doors.",
                    "Make something beautiful of the ordinary.",
                ]),
            },
            joyful_playful: MoodProfile {
                preferred_colors: bank(&["coral", "yellow", "pink", "turquoise", "lavender"]),
                adjectives: bank(&["Joyful", "Playful", "Sunny", "Lively", "Spirited"]),
                whispers: bank(&[
                    "Pick the fun option. You just did.",
                    "Your smile is the final accessory.",
                    "Bright colors, brighter company.",
                    "Today is for play. Dress accordingly.",
                    "Let the day be as light as this.",
                ]),
            },
            elegant_refined: MoodProfile {
                preferred_colors: bank(&["black", "white", "navy", "cream", "burgundy"]),
                adjectives: bank(&["Elegant", "Refined", "Polished", "Timeless", "Graceful"]),
                whispers: bank(&[
                    "Quiet lines, unmistakable presence.",
                    "Grace is the loudest statement in the room.",
                    "Refined never goes unnoticed.",
                    "You wear simplicity like a secret.",
                    "Polished, poised, entirely you.",
                ]),
            },
            bold_adventurous: MoodProfile {
                preferred_colors: bank(&["red", "cobalt", "fuchsia", "black", "orange"]),
                adjectives: bank(&["Bold", "Fearless", "Daring", "Electric", "Untamed"]),
                whispers: bank(&[
                    "Take the room before it takes you.",
                    "Fortune favors the well-dressed.",
                    "Loud color, louder conviction.",
                    "You did not come this far to blend in.",
                    "Adventure starts at the front door.",
                ]),
            },
        }
    }

    pub fn profile(&self, mood: MoodTag) -> &MoodProfile {
        match mood {
            MoodTag::SereneGrounded => &self.serene_grounded,
            MoodTag::LuminousConfident => &self.luminous_confident,
            MoodTag::CreativeInspired => &self.creative_inspired,
            MoodTag::JoyfulPlayful => &self.joyful_playful,
            MoodTag::ElegantRefined => &self.elegant_refined,
            MoodTag::BoldAdventurous => &self.bold_adventurous,
        }
    }

    /// Checks every mood carries a usable palette and non-empty banks.
    pub fn validate(&self) -> Result<()> {
        for mood in MoodTag::ALL {
            let profile = self.profile(mood);
            if profile.preferred_colors.is_empty() {
                bail!("mood '{mood}' has an empty color palette");
            }
            if profile.adjectives.is_empty() {
                bail!("mood '{mood}' has an empty adjective bank");
            }
            if profile.whispers.is_empty() {
                bail!("mood '{mood}' has an empty whisper bank");
            }
        }
        Ok(())
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let catalog: MoodCatalog =
            toml::from_str(data).context("Failed to parse mood catalog TOML")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog override from disk, or the builtin data when no file
    /// exists at `path`.
    pub fn load_or_builtin(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read mood catalog {:?}", path))?;
            Self::from_toml_str(&data)
        } else {
            Ok(Self::builtin())
        }
    }
}

fn bank(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Returns every item with at least one color in the mood's preferred
/// palette, input order preserved.
pub fn filter_by_mood<'a>(
    wardrobe: &'a [ClothingItem],
    mood: MoodTag,
    catalog: &MoodCatalog,
) -> Vec<&'a ClothingItem> {
    let palette: Vec<String> = catalog
        .profile(mood)
        .preferred_colors
        .iter()
        .map(|color| normalize_color(color))
        .collect();
    wardrobe
        .iter()
        .filter(|item| item_matches_palette(item, &palette))
        .collect()
}

/// Palette membership test against pre-normalized palette colors.
pub(crate) fn item_matches_palette(item: &ClothingItem, normalized_palette: &[String]) -> bool {
    item.colors
        .iter()
        .any(|color| normalized_palette.contains(&normalize_color(color)))
}
