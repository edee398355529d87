//! Seedable randomness for the fin flap rolls. Nothing in the crate draws
//! from a thread-local or global generator, so a seed fixes every frame.

pub use rand_chacha::ChaCha8Rng as SeededRng;

/// Stretches a small seed into a full ChaCha state.
pub fn new_rng(seed: u32) -> SeededRng {
    rand_seeder::Seeder::from(seed).make_rng()
}
