use crate::config::{ClusterConfig, ExecutionMode};
use crate::distance::euclidean;
use crate::pixel::Rgb;
use log::{debug, trace};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::Instant;

/// Initialize centroids by drawing k samples uniformly at random, with
/// replacement. Two centroids may start identical; that is accepted and the
/// duplicate simply starves later (see `update_centroids`).
pub fn initialize_centroids(pixels: &[Rgb], k: usize, rng: &mut ChaCha8Rng) -> Vec<Rgb> {
    (0..k).map(|_| pixels[rng.gen_range(0..pixels.len())]).collect()
}

/// Index of the centroid nearest to `px`.
///
/// The comparison only updates on strict improvement, so ties break to the
/// lowest centroid index. Both execution modes funnel through this one
/// function, which is what makes their outputs bit-identical.
#[inline]
fn nearest_centroid(px: Rgb, centroids: &[Rgb]) -> usize {
    let mut best_dist = f64::INFINITY;
    let mut best = 0;
    for (j, &c) in centroids.iter().enumerate() {
        let d = euclidean(px, c);
        if d < best_dist {
            best_dist = d;
            best = j;
        }
    }
    best
}

/// Assignment step: label every pixel with its nearest centroid.
///
/// Pixels and centroids are read-only here and label slots are disjoint per
/// index, so the parallel path needs no locks; the `for_each` join is the
/// barrier before the update step reads the labels.
pub fn assign_labels(pixels: &[Rgb], centroids: &[Rgb], labels: &mut [usize], mode: ExecutionMode) {
    match mode {
        ExecutionMode::Sequential => {
            for (label, &px) in labels.iter_mut().zip(pixels) {
                *label = nearest_centroid(px, centroids);
            }
        }
        ExecutionMode::Parallel => {
            labels
                .par_iter_mut()
                .zip(pixels.par_iter())
                .for_each(|(label, &px)| {
                    *label = nearest_centroid(px, centroids);
                });
        }
    }
}

/// Update step: recompute each centroid as the truncated channel-wise mean
/// of its members. A centroid with no members keeps its previous value.
pub fn update_centroids(pixels: &[Rgb], labels: &[usize], centroids: &mut [Rgb]) {
    let k = centroids.len();
    let mut sums = vec![[0u64; 3]; k];
    let mut counts = vec![0u64; k];

    for (&px, &label) in pixels.iter().zip(labels) {
        sums[label][0] += px.r as u64;
        sums[label][1] += px.g as u64;
        sums[label][2] += px.b as u64;
        counts[label] += 1;
    }

    for j in 0..k {
        if counts[j] > 0 {
            centroids[j] = Rgb::new(
                (sums[j][0] / counts[j]) as u8,
                (sums[j][1] / counts[j]) as u8,
                (sums[j][2] / counts[j]) as u8,
            );
        }
    }
}

/// Writeback: overwrite every pixel with its assigned centroid's color.
/// Uses the labels from the last iteration, not a fresh assignment.
pub fn write_back(pixels: &mut [Rgb], labels: &[usize], centroids: &[Rgb], mode: ExecutionMode) {
    match mode {
        ExecutionMode::Sequential => {
            for (px, &label) in pixels.iter_mut().zip(labels) {
                *px = centroids[label];
            }
        }
        ExecutionMode::Parallel => {
            pixels
                .par_iter_mut()
                .zip(labels.par_iter())
                .for_each(|(px, &label)| {
                    *px = centroids[label];
                });
        }
    }
}

/// Run the fixed-iteration Lloyd loop and the final writeback.
///
/// The loop body is always executed exactly `config.max_iters` times; with a
/// budget of zero the labels keep their zero initialization and the
/// writeback paints the whole buffer with centroid 0.
pub fn run_lloyd(pixels: &mut [Rgb], config: &ClusterConfig, rng: &mut ChaCha8Rng) {
    let n = pixels.len();
    let mut centroids = initialize_centroids(pixels, config.k, rng);
    let mut labels = vec![0usize; n];

    debug!(
        "clustering {} samples into {} clusters, {} iterations, {:?} mode",
        n, config.k, config.max_iters, config.mode
    );

    for iteration in 0..config.max_iters {
        let iter_start = Instant::now();

        assign_labels(pixels, &centroids, &mut labels, config.mode);
        update_centroids(pixels, &labels, &mut centroids);

        trace!(
            "iteration {}/{}: {:.4}s",
            iteration + 1,
            config.max_iters,
            iter_start.elapsed().as_secs_f64()
        );
    }

    write_back(pixels, &labels, &centroids, config.mode);
}
