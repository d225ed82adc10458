use crate::algorithm::run_lloyd;
use crate::config::ClusterConfig;
use crate::error::ClusterError;
use crate::pixel::Rgb;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Segment a pixel buffer in place with fixed-iteration k-means.
///
/// Draws `config.k` initial centroids from the buffer (uniformly, with
/// replacement, from a `ChaCha8Rng` seeded with `config.seed`), runs exactly
/// `config.max_iters` assignment/update iterations, then overwrites every
/// pixel with its assigned centroid's color. The mutated buffer is the only
/// output; after the call each pixel holds one of at most `k` colors.
///
/// Centroids and labels live only for the duration of the call. Invoking
/// `cluster` twice on the same image — for example once sequentially and
/// once in parallel to compare timings — re-draws the initial centroids each
/// time from whatever seed the caller supplies.
///
/// # Arguments
///
/// * `pixels` - Flat row-major sample buffer; recolored in place
/// * `config` - Cluster count, iteration budget, seed, and execution mode
///
/// # Errors
///
/// Returns an error if:
/// - `pixels` is empty
/// - `config.k` is 0
/// - `config.k` exceeds the number of pixels
///
/// # Example
///
/// ```
/// use pixelseg::{cluster, ClusterConfig, Rgb};
///
/// let mut pixels = vec![Rgb::new(8, 8, 8); 64];
/// cluster(&mut pixels, &ClusterConfig::new(1)).unwrap();
/// assert!(pixels.iter().all(|&px| px == Rgb::new(8, 8, 8)));
/// ```
pub fn cluster(pixels: &mut [Rgb], config: &ClusterConfig) -> Result<(), ClusterError> {
    let n = pixels.len();

    if n == 0 {
        return Err(ClusterError::EmptyInput);
    }
    if config.k == 0 {
        return Err(ClusterError::InvalidK("k must be greater than 0".to_string()));
    }
    if n < config.k {
        return Err(ClusterError::InsufficientData(format!(
            "Number of samples ({}) is less than k ({})",
            n, config.k
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    run_lloyd(pixels, config, &mut rng);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutionMode;

    #[test]
    fn test_cluster_empty_input() {
        let mut pixels: Vec<Rgb> = Vec::new();
        let result = cluster(&mut pixels, &ClusterConfig::new(3));
        assert!(matches!(result, Err(ClusterError::EmptyInput)));
    }

    #[test]
    fn test_cluster_k_zero() {
        let mut pixels = vec![Rgb::new(1, 2, 3); 10];
        let result = cluster(&mut pixels, &ClusterConfig::new(0));
        assert!(matches!(result, Err(ClusterError::InvalidK(_))));
    }

    #[test]
    fn test_cluster_k_exceeds_samples() {
        let mut pixels = vec![Rgb::new(1, 2, 3); 4];
        let result = cluster(&mut pixels, &ClusterConfig::new(5));
        assert!(matches!(result, Err(ClusterError::InsufficientData(_))));
    }

    #[test]
    fn test_cluster_output_drawn_from_palette() {
        let mut pixels: Vec<Rgb> = (0..300)
            .map(|i| Rgb::new((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8))
            .collect();

        let config = ClusterConfig::new(5).with_max_iters(10).with_seed(1);
        cluster(&mut pixels, &config).unwrap();

        let palette: std::collections::HashSet<Rgb> = pixels.iter().copied().collect();
        assert!(palette.len() <= 5);
    }

    #[test]
    fn test_cluster_same_seed_same_output_across_modes() {
        let base: Vec<Rgb> = (0..777)
            .map(|i| Rgb::new((i * 3 % 256) as u8, (i * 5 % 256) as u8, (i * 11 % 256) as u8))
            .collect();

        let mut seq = base.clone();
        let mut par = base;
        let config = ClusterConfig::new(6).with_max_iters(8).with_seed(42);

        cluster(&mut seq, &config).unwrap();
        cluster(
            &mut par,
            &config.clone().with_mode(ExecutionMode::Parallel),
        )
        .unwrap();

        assert_eq!(seq, par);
    }
}
