use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::ClothingItem;
use crate::moods::{MoodCatalog, MoodTag};

const FALLBACK_ADJECTIVE: &str = "Styled";
const FALLBACK_NOUN: &str = "Ensemble";
const FALLBACK_WHISPER: &str = "You are ready for this day.";

/// Builds an outfit name as "<Adjective> <Category> Look" from the mood's
/// adjective bank and the first item's category.
pub fn outfit_name<R: Rng + ?Sized>(
    items: &[&ClothingItem],
    mood: MoodTag,
    catalog: &MoodCatalog,
    rng: &mut R,
) -> String {
    let profile = catalog.profile(mood);
    let adjective = profile
        .adjectives
        .choose(rng)
        .map(String::as_str)
        .unwrap_or(FALLBACK_ADJECTIVE);
    let noun = items
        .first()
        .map(|item| item.category.label())
        .unwrap_or(FALLBACK_NOUN);
    format!("{adjective} {noun} Look")
}

/// Picks a mood-keyed encouragement line from the whisper bank.
pub fn whisper_for<R: Rng + ?Sized>(mood: MoodTag, catalog: &MoodCatalog, rng: &mut R) -> String {
    catalog
        .profile(mood)
        .whispers
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| FALLBACK_WHISPER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClothingCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn name_combines_adjective_and_category_label() {
        let catalog = MoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let blouse = ClothingItem::new("Blouse", ClothingCategory::Tops, vec!["white".into()]);
        let name = outfit_name(&[&blouse], MoodTag::ElegantRefined, &catalog, &mut rng);
        assert!(name.ends_with("Top Look"), "unexpected name: {name}");
        let adjective = name.split(' ').next().unwrap_or_default();
        assert!(
            catalog
                .profile(MoodTag::ElegantRefined)
                .adjectives
                .iter()
                .any(|a| a == adjective),
            "adjective '{adjective}' not in the bank"
        );
    }

    #[test]
    fn empty_item_list_falls_back_to_a_generic_noun() {
        let catalog = MoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let name = outfit_name(&[], MoodTag::JoyfulPlayful, &catalog, &mut rng);
        assert!(name.contains("Ensemble"), "unexpected name: {name}");
    }

    #[test]
    fn whisper_comes_from_the_mood_bank() {
        let catalog = MoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let whisper = whisper_for(MoodTag::BoldAdventurous, &catalog, &mut rng);
        assert!(catalog
            .profile(MoodTag::BoldAdventurous)
            .whispers
            .contains(&whisper));
    }
}
