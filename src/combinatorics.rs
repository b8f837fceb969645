//! Stateless number helpers used to draw and check targets.
//!
//! - `sum` / `range`: basic sequence helpers
//! - `random_int`: uniform draw through an injected `RandomSource`
//! - `attainable_sums` / `random_attainable_sum`: which totals a set of
//!   numbers can make, and a uniform pick among them
//! - `subset_with_sum`: a concrete selection that hits a total
//!
//! Attainable sums come from a subset-sum reachability scan over
//! `0..=ceiling`, so the cost is `O(numbers * ceiling)` rather than
//! exponential in the number count.

use crate::core::RandomSource;

/// Total of a sequence. `sum(&[]) == 0`.
#[must_use]
pub fn sum(numbers: &[u32]) -> u32 {
    numbers.iter().sum()
}

/// Inclusive ascending sequence `min..=max`.
///
/// Empty when `max < min`.
#[must_use]
pub fn range(min: u32, max: u32) -> Vec<u32> {
    (min..=max).collect()
}

/// Uniform integer in `[min, max]`, both ends included.
///
/// Panics if `min > max`.
pub fn random_int<R: RandomSource + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    assert!(min <= max, "Empty range {}..={}", min, max);
    rng.random_int(min, max)
}

/// Total that clamps at `u32::MAX` instead of overflowing.
fn saturating_total(numbers: &[u32]) -> u32 {
    numbers.iter().fold(0, |total: u32, &n| total.saturating_add(n))
}

/// Reachability table: `table[s]` is true when some non-empty subset of
/// `numbers` sums to exactly `s`.
fn reachable_sums(numbers: &[u32], ceiling: u32) -> Vec<bool> {
    // No subset can exceed the total, so never scan past it.
    let limit = ceiling.min(saturating_total(numbers)) as usize;

    let mut any = vec![false; limit + 1];
    any[0] = true;
    let mut non_empty = vec![false; limit + 1];

    for &n in numbers {
        let n = n as usize;
        if n > limit {
            continue;
        }
        let hits: Vec<usize> = (n..=limit).filter(|&s| any[s - n]).collect();
        for s in hits {
            any[s] = true;
            non_empty[s] = true;
        }
    }

    non_empty
}

/// Distinct sums of non-empty subsets of `numbers` that are `<= ceiling`,
/// in ascending order.
#[must_use]
pub fn attainable_sums(numbers: &[u32], ceiling: u32) -> Vec<u32> {
    reachable_sums(numbers, ceiling)
        .into_iter()
        .enumerate()
        .filter_map(|(s, hit)| hit.then_some(s as u32))
        .collect()
}

/// Pick a sum uniformly among the attainable sums `<= ceiling`.
///
/// Every distinct total has the same chance, however many subsets reach
/// it.
///
/// Panics if `numbers` is empty or no non-empty subset fits under
/// `ceiling`. Callers keep a pool that always holds a small enough
/// number, so either case means the pool was corrupted upstream.
pub fn random_attainable_sum<R: RandomSource + ?Sized>(
    rng: &mut R,
    numbers: &[u32],
    ceiling: u32,
) -> u32 {
    assert!(!numbers.is_empty(), "Cannot draw a sum from an empty pool");

    let sums = attainable_sums(numbers, ceiling);
    assert!(
        !sums.is_empty(),
        "No subset of {:?} sums to at most {}",
        numbers,
        ceiling
    );

    let index = random_int(rng, 0, (sums.len() - 1) as u32);
    sums[index as usize]
}

/// Find a subset of `numbers` summing to exactly `target`.
///
/// Returns the chosen numbers in input order, or `None` if no subset
/// reaches the target. `target == 0` yields the empty selection.
#[must_use]
pub fn subset_with_sum(numbers: &[u32], target: u32) -> Option<Vec<u32>> {
    if target > saturating_total(numbers) {
        return None;
    }
    let target = target as usize;

    // reached[i][s]: some subset of numbers[..i] sums to s
    let mut reached = vec![vec![false; target + 1]; numbers.len() + 1];
    reached[0][0] = true;
    for (i, &n) in numbers.iter().enumerate() {
        let n = n as usize;
        for s in 0..=target {
            reached[i + 1][s] = reached[i][s] || (s >= n && reached[i][s - n]);
        }
    }

    if !reached[numbers.len()][target] {
        return None;
    }

    // Walk back, preferring to skip a number whenever possible.
    let mut picked = Vec::new();
    let mut remaining = target;
    for i in (0..numbers.len()).rev() {
        if reached[i][remaining] {
            continue;
        }
        let n = numbers[i] as usize;
        picked.push(numbers[i]);
        remaining -= n;
    }
    picked.reverse();
    Some(picked)
}
