//! Static color/category compatibility tables and the pair scorer used by
//! outfit composition.
//!
//! Both lookup functions are symmetric and total: any color outside the
//! known vocabulary scores 0.0 rather than erroring, so a malformed
//! upstream record degrades scoring quality without breaking generation.

use rand::Rng;

use crate::models::{ClothingCategory, ClothingItem};

/// Colors treated as neutrals; they pair well with nearly everything.
const NEUTRALS: &[&str] = &[
    "black", "white", "grey", "cream", "ivory", "beige", "taupe", "camel", "navy", "denim",
];

/// Chromatic colors the scorer knows beyond the neutrals.
const CHROMATICS: &[&str] = &[
    "sage",
    "olive",
    "dusty blue",
    "gold",
    "champagne",
    "bronze",
    "teal",
    "mustard",
    "rust",
    "plum",
    "emerald",
    "coral",
    "yellow",
    "pink",
    "blush",
    "turquoise",
    "lavender",
    "burgundy",
    "red",
    "cobalt",
    "fuchsia",
    "orange",
    "brown",
    "green",
    "blue",
    "purple",
];

/// Pre-scored complementary pairings. Looked up in both orders.
const COLOR_PAIRS: &[(&str, &str, f32)] = &[
    ("sage", "dusty blue", 0.8),
    ("sage", "olive", 0.85),
    ("gold", "champagne", 0.9),
    ("gold", "bronze", 0.85),
    ("emerald", "gold", 0.8),
    ("teal", "mustard", 0.8),
    ("teal", "rust", 0.75),
    ("rust", "mustard", 0.8),
    ("plum", "emerald", 0.7),
    ("plum", "lavender", 0.8),
    ("coral", "turquoise", 0.8),
    ("coral", "gold", 0.75),
    ("pink", "lavender", 0.8),
    ("pink", "red", 0.7),
    ("yellow", "turquoise", 0.75),
    ("burgundy", "blush", 0.8),
    ("burgundy", "gold", 0.8),
    ("red", "cobalt", 0.75),
    ("fuchsia", "orange", 0.7),
    ("cobalt", "orange", 0.7),
    ("blue", "brown", 0.75),
    ("green", "brown", 0.75),
];

const NEUTRAL_PAIR_SCORE: f32 = 0.8;
const KNOWN_PAIR_DEFAULT: f32 = 0.35;

/// Category co-occurrence affinity, indexed in `ClothingCategory::ALL`
/// order: tops, bottoms, dresses, outerwear, shoes, accessories, intimates.
/// The matrix is symmetric.
const CATEGORY_AFFINITY: [[f32; 7]; 7] = [
    [0.25, 0.95, 0.30, 0.85, 0.90, 0.85, 0.40], // tops
    [0.95, 0.10, 0.15, 0.85, 0.90, 0.85, 0.40], // bottoms
    [0.30, 0.15, 0.05, 0.85, 0.90, 0.90, 0.40], // dresses
    [0.85, 0.85, 0.85, 0.20, 0.85, 0.80, 0.10], // outerwear
    [0.90, 0.90, 0.90, 0.85, 0.10, 0.85, 0.30], // shoes
    [0.85, 0.85, 0.90, 0.80, 0.85, 0.50, 0.30], // accessories
    [0.40, 0.40, 0.40, 0.10, 0.30, 0.30, 0.20], // intimates
];

/// Normalizes a user-entered color name for table lookups.
pub(crate) fn normalize_color(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn known_color(color: &str) -> bool {
    NEUTRALS.contains(&color) || CHROMATICS.contains(&color)
}

/// Compatibility of a color pair in [0, 1]. Symmetric; unknown colors
/// score 0.0.
pub fn color_compatibility(a: &str, b: &str) -> f32 {
    let a = normalize_color(a);
    let b = normalize_color(b);
    if !known_color(&a) || !known_color(&b) {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    for (x, y, score) in COLOR_PAIRS {
        if (*x == a && *y == b) || (*x == b && *y == a) {
            return *score;
        }
    }
    if NEUTRALS.contains(&a.as_str()) || NEUTRALS.contains(&b.as_str()) {
        return NEUTRAL_PAIR_SCORE;
    }
    KNOWN_PAIR_DEFAULT
}

/// Compatibility of a category pair in [0, 1]. Symmetric and total over
/// the closed category set.
pub fn category_compatibility(a: ClothingCategory, b: ClothingCategory) -> f32 {
    CATEGORY_AFFINITY[category_index(a)][category_index(b)]
}

fn category_index(category: ClothingCategory) -> usize {
    match category {
        ClothingCategory::Tops => 0,
        ClothingCategory::Bottoms => 1,
        ClothingCategory::Dresses => 2,
        ClothingCategory::Outerwear => 3,
        ClothingCategory::Shoes => 4,
        ClothingCategory::Accessories => 5,
        ClothingCategory::Intimates => 6,
    }
}

/// Best color compatibility across the cross product of two items' color
/// lists. Zero when either list is empty.
pub fn best_color_pairing(a: &ClothingItem, b: &ClothingItem) -> f32 {
    let mut best = 0.0f32;
    for color_a in &a.colors {
        for color_b in &b.colors {
            best = best.max(color_compatibility(color_a, color_b));
        }
    }
    best
}

/// Scores a candidate against the outfit selected so far, in [0, 1].
///
/// An empty outfit means any candidate is an equally valid starting piece,
/// so the score is a uniform draw from the injected random source. Otherwise
/// color harmony dominates category adjacency 0.7 to 0.3, averaged over the
/// already-selected items.
pub fn item_score<R: Rng + ?Sized>(
    candidate: &ClothingItem,
    outfit_so_far: &[&ClothingItem],
    rng: &mut R,
) -> f32 {
    if outfit_so_far.is_empty() {
        return rng.gen::<f32>();
    }
    let total: f32 = outfit_so_far
        .iter()
        .map(|existing| {
            0.7 * best_color_pairing(candidate, existing)
                + 0.3 * category_compatibility(candidate.category, existing.category)
        })
        .sum();
    total / outfit_so_far.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(name: &str, category: ClothingCategory, colors: &[&str]) -> ClothingItem {
        ClothingItem::new(name, category, colors.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn identical_known_colors_score_full() {
        for color in NEUTRALS.iter().chain(CHROMATICS.iter()) {
            assert_eq!(color_compatibility(color, color), 1.0, "{color}");
        }
    }

    #[test]
    fn color_compatibility_is_symmetric() {
        for (a, b, _) in COLOR_PAIRS {
            assert_eq!(color_compatibility(a, b), color_compatibility(b, a));
        }
        assert_eq!(
            color_compatibility("navy", "rust"),
            color_compatibility("rust", "navy")
        );
    }

    #[test]
    fn unknown_colors_fail_closed() {
        assert_eq!(color_compatibility("chartreuse", "black"), 0.0);
        assert_eq!(color_compatibility("", "white"), 0.0);
        assert_eq!(color_compatibility("chartreuse", "chartreuse"), 0.0);
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_whitespace() {
        assert_eq!(color_compatibility(" White ", "white"), 1.0);
        assert_eq!(color_compatibility("Dusty Blue", "dusty blue"), 1.0);
    }

    #[test]
    fn neutrals_pair_high_with_any_known_color() {
        assert_eq!(color_compatibility("black", "fuchsia"), NEUTRAL_PAIR_SCORE);
        assert_eq!(color_compatibility("teal", "white"), NEUTRAL_PAIR_SCORE);
    }

    #[test]
    fn category_table_is_symmetric_and_bounded() {
        for a in ClothingCategory::ALL {
            for b in ClothingCategory::ALL {
                let score = category_compatibility(a, b);
                assert_eq!(score, category_compatibility(b, a));
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }

    #[test]
    fn tops_prefer_bottoms_over_another_top() {
        let with_bottoms =
            category_compatibility(ClothingCategory::Tops, ClothingCategory::Bottoms);
        let with_tops = category_compatibility(ClothingCategory::Tops, ClothingCategory::Tops);
        assert!(with_bottoms > with_tops);
    }

    #[test]
    fn empty_outfit_scores_a_uniform_tiebreak() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidate = item("Blouse", ClothingCategory::Tops, &["white"]);
        let score = item_score(&candidate, &[], &mut rng);
        assert!((0.0..1.0).contains(&score));
    }

    #[test]
    fn item_score_blends_color_and_category() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidate = item("Blouse", ClothingCategory::Tops, &["white"]);
        let existing = item("Skirt", ClothingCategory::Bottoms, &["white"]);
        let score = item_score(&candidate, &[&existing], &mut rng);
        let expected = 0.7 * 1.0
            + 0.3 * category_compatibility(ClothingCategory::Tops, ClothingCategory::Bottoms);
        assert!((score - expected).abs() < 1e-6);
    }

    #[test]
    fn best_pairing_takes_the_maximum_over_color_lists() {
        let a = item("Jumper", ClothingCategory::Tops, &["chartreuse", "teal"]);
        let b = item("Chinos", ClothingCategory::Bottoms, &["mustard"]);
        assert_eq!(best_color_pairing(&a, &b), 0.8);
    }
}
