//! Brute-force threshold search.
//!
//! Every threshold 0..=255 is tried with [`threshold_binarize`] and the
//! black pixel count of each result is compared against half the pixel
//! count. Which candidate wins is decided by a [`SelectionPolicy`].

use crate::models::{BinaryImage, GrayscaleImage, SelectionPolicy};
use crate::utils::binarization::threshold_binarize;
use rayon::prelude::*;

/// A later candidate must beat the recorded one by more than this many
/// pixels to replace it under [`SelectionPolicy::Legacy`].
pub const LEGACY_MARGIN: usize = 1000;

/// Outcome of a threshold search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdSearch {
    /// Selected threshold
    pub threshold: u8,
    /// Black pixels at that threshold
    pub black_pixels: usize,
    /// Distance between `black_pixels` and half the pixel count
    pub difference: usize,
    /// Binarized image at that threshold
    pub binary: BinaryImage,
}

/// Half the pixel count, rounding halves up
pub fn half_pixels(total: usize) -> usize {
    total.div_ceil(2)
}

/// Tracks the recorded candidate while thresholds are offered in ascending order.
#[derive(Debug)]
struct Selector {
    policy: SelectionPolicy,
    best_difference: usize,
    recorded: bool,
}

impl Selector {
    fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            best_difference: 0,
            recorded: false,
        }
    }

    /// Returns true when the candidate replaces the recorded one.
    fn offer(&mut self, difference: usize) -> bool {
        let replace = match self.policy {
            // A recorded difference of 0 doubles as "nothing recorded yet",
            // so the candidate after a perfect split always overwrites it.
            SelectionPolicy::Legacy => {
                self.best_difference == 0 || difference + LEGACY_MARGIN < self.best_difference
            }
            SelectionPolicy::Closest => !self.recorded || difference < self.best_difference,
        };
        if replace {
            self.best_difference = difference;
            self.recorded = true;
        }
        replace
    }
}

fn evaluate(gray: &GrayscaleImage, threshold: u8, half: usize) -> ThresholdSearch {
    let binary = threshold_binarize(gray, threshold);
    let black_pixels = binary.black_count();
    ThresholdSearch {
        threshold,
        black_pixels,
        difference: half.abs_diff(black_pixels),
        binary,
    }
}

/// Search all 256 thresholds and return the selected binarization
pub fn optimal_binarize(gray: &GrayscaleImage, policy: SelectionPolicy) -> ThresholdSearch {
    let half = half_pixels(gray.width() * gray.height());
    let mut selector = Selector::new(policy);

    // The first offer is always accepted by both policies.
    let mut best = evaluate(gray, 0, half);
    selector.offer(best.difference);

    for threshold in 1..=u8::MAX {
        let candidate = evaluate(gray, threshold, half);
        if selector.offer(candidate.difference) {
            log::trace!(
                "threshold {} replaces {} (difference {})",
                threshold,
                best.threshold,
                candidate.difference
            );
            best = candidate;
        }
    }

    log::debug!(
        "selected threshold {} ({:?}): {} black of {} pixels",
        best.threshold,
        policy,
        best.black_pixels,
        best.binary.pixel_count()
    );
    best
}

/// Same result as [`optimal_binarize`], with the 256 candidates counted on the
/// rayon pool. Selection still runs in ascending threshold order.
pub fn optimal_binarize_parallel(
    gray: &GrayscaleImage,
    policy: SelectionPolicy,
) -> ThresholdSearch {
    let half = half_pixels(gray.width() * gray.height());
    let black_counts: Vec<usize> = (0..=u8::MAX)
        .into_par_iter()
        .map(|threshold| threshold_binarize(gray, threshold).black_count())
        .collect();

    let mut selector = Selector::new(policy);
    let mut chosen = 0u8;
    for (threshold, &black) in (0..=u8::MAX).zip(black_counts.iter()) {
        if selector.offer(half.abs_diff(black)) {
            chosen = threshold;
        }
    }

    evaluate(gray, chosen, half)
}
