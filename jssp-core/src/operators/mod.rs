//! Contains permutation preserving genetic operators: crossover and mutation.

mod crossover;
pub use self::crossover::*;

mod mutation;
pub use self::mutation::*;

use crate::models::JobId;

/// Draws two ordered cut points from `[0, max]` range.
fn draw_cut_points(max: usize, random: &dyn crate::utils::Random) -> (usize, usize) {
    let first = random.uniform_int(0, max as i32) as usize;
    let second = random.uniform_int(0, max as i32) as usize;

    (first.min(second), first.max(second))
}

/// Checks that both genomes hold the same job ids.
fn has_same_jobs(left: &[JobId], right: &[JobId]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left == right && left.windows(2).all(|pair| pair[0] != pair[1])
}
