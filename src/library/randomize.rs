use rand::Rng;

use crate::config::TokenAlphabet;

/// Draw `chapter_count` tokens uniformly from the alphabet.
///
/// The generator is injected so tests can seed it; the CLI passes
/// `rand::thread_rng()`.
pub fn random_chapters<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &TokenAlphabet,
    chapter_count: usize,
) -> String {
    (0..chapter_count).map(|_| alphabet.choose(rng)).collect()
}
