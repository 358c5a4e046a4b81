//! Sources of randomness for picking locations.
//!
//! The world never touches an RNG directly; it asks a [`RandomSource`] for an index.
//! Play uses [`RngSource`] over the thread RNG, while tests script the picks with
//! [`ScriptedSource`].

use std::collections::VecDeque;
use std::fmt::Debug;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Supplies uniformly chosen indices.
pub trait RandomSource: Debug {
    /// Returns an index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug)]
pub struct RngSource<R>(pub R);
impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        RngSource(rand::rng())
    }
}
impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}
impl<R: Rng + Debug> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.random_range(0..len)
    }
}

/// Replays a fixed list of picks, then keeps answering 0.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}
impl ScriptedSource {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}
impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.picks.pop_front().map_or(0, |pick| pick % len)
    }
}
