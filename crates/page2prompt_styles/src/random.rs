//! Random style generator.

use page2prompt_core::Style;
use rand::Rng;
use rand::seq::SliceRandom;

const ADJECTIVES: [&str; 8] = [
    "Vibrant",
    "Moody",
    "Retro",
    "Futuristic",
    "Ethereal",
    "Gritty",
    "Surreal",
    "Minimalist",
];

const NOUNS: [&str; 8] = [
    "Watercolor",
    "Neon",
    "Cyberpunk",
    "Impressionist",
    "Abstract",
    "Pop Art",
    "Noir",
    "Steampunk",
];

const PREFIX_TEMPLATES: [&str; 3] = [
    "A {style} image of",
    "In the style of {style}:",
    "Reimagined as {style}:",
];

const CHARACTERISTICS: [&str; 8] = [
    "high contrast",
    "soft focus",
    "vivid colors",
    "dramatic lighting",
    "muted tones",
    "sharp details",
    "dreamy atmosphere",
    "bold outlines",
];

const GENRES: [&str; 8] = [
    "Fantasy",
    "Sci-Fi",
    "Romance",
    "Horror",
    "Documentary",
    "Action",
    "Drama",
    "Comedy",
];

/// One descriptor is drawn from each category.
const DESCRIPTOR_CATEGORIES: [(&str, [&str; 5]); 4] = [
    ("Color", ["saturated", "monochromatic", "pastel", "neon", "earthy"]),
    ("Texture", ["smooth", "grainy", "glossy", "rough", "metallic"]),
    ("Mood", ["serene", "intense", "whimsical", "melancholic", "energetic"]),
    (
        "Technique",
        ["brush strokes", "digital art", "photorealistic", "collage", "vector graphics"],
    ),
];

/// Compose a random style using the thread-local generator.
pub fn random_style() -> Style {
    random_style_with(&mut rand::thread_rng())
}

/// Compose a random style from `rng`.
///
/// The name pairs an adjective with a noun, the prefix is one of three
/// sentence templates around that name, and the suffix joins two to four
/// distinct visual characteristics with `"; "`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use page2prompt_styles::random_style_with;
///
/// let style = random_style_with(&mut StdRng::seed_from_u64(7));
/// assert!(style.prefix.contains(&style.name));
/// assert!(style.genre.is_some());
/// ```
pub fn random_style_with<R: Rng + ?Sized>(rng: &mut R) -> Style {
    let name = format!(
        "{} {}",
        ADJECTIVES.choose(rng).copied().unwrap_or("Vibrant"),
        NOUNS.choose(rng).copied().unwrap_or("Watercolor"),
    );

    let prefix = PREFIX_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or("A {style} image of")
        .replace("{style}", &name);

    let count = rng.gen_range(2..=4);
    let suffix = CHARACTERISTICS
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join("; ");

    let genre = GENRES.choose(rng).copied().unwrap_or("Drama");
    let descriptors = DESCRIPTOR_CATEGORIES
        .iter()
        .filter_map(|(_, words)| words.choose(rng).copied())
        .collect::<Vec<_>>()
        .join("; ");

    Style::new(name, prefix, suffix)
        .with_genre(genre)
        .with_descriptors(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_vocabularies_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let style = random_style_with(&mut rng);

            let (adjective, noun) = style.name.split_once(' ').unwrap();
            assert!(ADJECTIVES.contains(&adjective));
            assert!(NOUNS.contains(&noun));

            let traits: Vec<&str> = style.suffix.split("; ").collect();
            assert!((2..=4).contains(&traits.len()));
            assert!(traits.iter().all(|t| CHARACTERISTICS.contains(t)));

            assert!(GENRES.contains(&style.genre.as_deref().unwrap()));
            let descriptors: Vec<&str> = style.descriptors.as_deref().unwrap().split("; ").collect();
            assert_eq!(descriptors.len(), DESCRIPTOR_CATEGORIES.len());
            for ((_, words), chosen) in DESCRIPTOR_CATEGORIES.iter().zip(&descriptors) {
                assert!(words.contains(chosen));
            }
        }
    }

    #[test]
    fn test_same_seed_same_style() {
        let a = random_style_with(&mut StdRng::seed_from_u64(3));
        let b = random_style_with(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
