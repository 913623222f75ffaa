//! Shuffle-until-ordered sorting
//!
//! This is a bogosort: the working copy is permuted uniformly at random
//! until it happens to be in non-decreasing order, bounded by an attempt
//! budget. Expected attempts for n distinct elements is n!, so realistic
//! budgets only rescue very small inputs (n <= ~7). Useful purely for
//! experimentation, never for production sorting.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::SortConfig;
use crate::error::{SortError, SortResult};

/// Returns true when `values` is monotonically non-decreasing.
///
/// Empty and single-element slices are trivially sorted: the condition over
/// adjacent pairs holds vacuously.
pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.iter().tuple_windows().all(|(a, b)| a <= b)
}

/// Randomized sorter that shuffles a working copy of its input until the
/// copy is ordered or the configured budget runs out.
///
/// The generator is owned by the instance, so concurrent callers each hold
/// their own shuffle state. Seed the config for reproducible runs.
pub struct RandomSorter {
    config: SortConfig,
    rng: StdRng,
    attempts: usize,
}

impl RandomSorter {
    /// Create a sorter with the generator drawn from `config`
    pub fn new(config: SortConfig) -> Self {
        let rng = config.rng();
        Self {
            config,
            rng,
            attempts: 0,
        }
    }

    /// Shuffles consumed by the most recent call to [`RandomSorter::sort`]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Sort `values` by repeatedly shuffling a copy until it is ordered.
    ///
    /// Returns a new sorted `Vec` holding the same multiset of elements;
    /// the input slice is never modified. Fails with
    /// [`SortError::ShuffleBudgetExceeded`] once the budget is exhausted.
    pub fn sort<T: Ord + Clone>(&mut self, values: &[T]) -> SortResult<Vec<T>> {
        let max_attempts = self.config.max_attempts;
        let mut candidate = values.to_vec();
        self.attempts = 0;

        let result = loop {
            // Sortedness is checked before the budget, so already-ordered
            // input succeeds even with a zero budget.
            if is_sorted(&candidate) {
                break Ok(candidate);
            }
            if self.attempts >= max_attempts {
                break Err(SortError::shuffle_budget_exceeded(max_attempts));
            }

            // Fisher-Yates via rand; every permutation equally likely.
            candidate.shuffle(&mut self.rng);
            self.attempts += 1;
        };

        if self.config.debug {
            eprintln!(
                "random_sort: {} of {} shuffle attempts used",
                self.attempts, max_attempts
            );
        }

        result
    }
}

/// Sort `values` by shuffling until ordered, giving up after `max_attempts`
/// shuffles.
///
/// Convenience wrapper around [`RandomSorter`] with an entropy-seeded
/// generator. See [`crate::config::DEFAULT_MAX_ATTEMPTS`] for the budget
/// used by the CLI when none is given.
pub fn random_sort<T: Ord + Clone>(values: &[T], max_attempts: usize) -> SortResult<Vec<T>> {
    let config = SortConfig::default().with_max_attempts(max_attempts);
    RandomSorter::new(config).sort(values)
}
