// Local word table used whenever the remote lookup fails.
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::is_word_text;

/// (word, hint) pairs. Words are lowercase a-z; hints stay under 100 chars.
pub const FALLBACK_WORDS: &[(&str, &str)] = &[
    ("javascript", "Popular programming language for web development"),
    ("computer", "Electronic device for processing data"),
    ("elephant", "Large mammal with a trunk and big ears"),
    ("rainbow", "Colorful arc in the sky after rain"),
    ("guitar", "Musical instrument with strings"),
    ("ocean", "Large body of salt water"),
    ("butterfly", "Colorful flying insect with wings"),
    ("mountain", "High elevation landform"),
    ("library", "Place where books are kept and borrowed"),
    ("pizza", "Popular Italian dish with toppings"),
    ("camera", "Device used to take photographs"),
    ("bicycle", "Two-wheeled vehicle powered by pedaling"),
    ("diamond", "Precious gemstone, hardest natural substance"),
    ("volcano", "Mountain that can erupt with lava"),
    ("astronaut", "Person who travels to space"),
    ("telephone", "Device used for voice communication"),
    ("umbrella", "Portable shelter from rain or sun"),
    ("chocolate", "Sweet treat made from cocoa beans"),
    ("keyboard", "Computer input device with keys"),
    ("sandwich", "Food with filling between bread slices"),
    ("fireworks", "Explosive devices that create colorful displays"),
    ("telescope", "Instrument for observing distant objects"),
    ("penguin", "Flightless bird that lives in cold regions"),
    ("treasure", "Valuable items or wealth that is hidden"),
    ("dragon", "Mythical creature that breathes fire"),
];

const fn table_is_valid(table: &[(&str, &str)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if !is_word_text(table[i].0) {
            return false;
        }
        i += 1;
    }
    !table.is_empty()
}

const _: () = assert!(
    table_is_valid(FALLBACK_WORDS),
    "FALLBACK_WORDS must be non-empty and hold lowercase a-z words"
);

/// Uniform draw from [`FALLBACK_WORDS`].
pub fn pick_fallback<R: Rng + ?Sized>(rng: &mut R) -> (&'static str, &'static str) {
    // Non-empty is checked above at compile time.
    *FALLBACK_WORDS.choose(rng).unwrap_or(&FALLBACK_WORDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_fallback_returns_table_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let entry = pick_fallback(&mut rng);
            assert!(FALLBACK_WORDS.contains(&entry));
        }
    }

    #[test]
    fn test_pick_fallback_reaches_many_entries() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..2_000).map(|_| pick_fallback(&mut rng).0).collect();
        assert_eq!(seen.len(), FALLBACK_WORDS.len());
    }
}
