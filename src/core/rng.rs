//! Deterministic random number generation for the engine.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Derive independent per-move streams from one game seed
//! - **Explicit**: Threaded through search by `&mut`, never global
//!
//! ## Usage
//!
//! ```
//! use balanced_ttt::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for the next move
//! let mut move_rng = rng.fork();
//!
//! // Forks get their own seed; the same fork sequence replays from the same seed
//! assert_ne!(rng.seed(), move_rng.seed());
//! assert_eq!(GameRng::new(42).fork().seed(), move_rng.seed());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG seeded from a single `u64`.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from a seed drawn from OS entropy.
    ///
    /// The drawn seed is kept so the sequence can be replayed via [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Use `seed` when given, otherwise draw one from entropy.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a fresh seed for an independent stream.
    ///
    /// Each call yields a different but deterministic seed.
    pub fn next_seed(&mut self) -> u64 {
        self.fork_counter += 1;
        self.seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Fork this RNG to create an independent branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let seed = self.next_seed();
        Self::new(seed)
    }

    /// Generate a float uniformly from the closed range `[low, high]`.
    pub fn gen_uniform(&mut self, low: f64, high: f64) -> f64 {
        self.inner.gen_range(low..=high)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` must lie in `[0, 1]`; engine configs are validated
    /// before any search runs.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
