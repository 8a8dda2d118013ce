#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::RefCell;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns a random index in `[0, len)` range. Expects `len` to be positive.
    fn uniform_index(&self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.uniform_int(0, len as i32 - 1) as usize
    }
}

/// A default random implementation.
///
/// Unless a seed is given, a fast thread local generator is used.
#[derive(Default)]
pub struct DefaultRandom {
    seeded: Option<Mutex<SmallRng>>,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` which produces a reproducible sequence.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seeded: Some(Mutex::new(SmallRng::seed_from_u64(seed))) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                action(&mut rng)
            }
            None => DEFAULT_RNG.with(|rng| action(&mut rng.borrow_mut())),
        }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max + 1))
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn is_head_not_tails(&self) -> bool {
        self.with_rng(|rng| rng.gen_bool(0.5))
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability.clamp(0., 1.)))
    }
}

thread_local! {
    static DEFAULT_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Shuffles the slice in place using given random.
pub fn shuffle<T>(items: &mut [T], random: &dyn Random) {
    (1..items.len()).rev().for_each(|idx| {
        let other = random.uniform_int(0, idx as i32) as usize;
        items.swap(idx, other);
    });
}
