//! # pixelseg
//!
//! Fixed-iteration k-means clustering over the RGB pixel space of an image,
//! with a sequential and a data-parallel execution mode that produce
//! bit-identical results.
//!
//! ## Features
//!
//! - **In-place segmentation**: `cluster` recolors the pixel buffer it is
//!   given; every output pixel is one of the `k` centroid colors
//! - **Two execution modes**: the same assignment scan runs either on one
//!   thread or spread across rayon's pool, so wall-clock cost can be
//!   compared on identical inputs
//! - **Deterministic**: centroid initialization draws from a seeded RNG;
//!   equal seeds give equal output in both modes
//! - **Fixed iteration budget**: the Lloyd loop always runs exactly
//!   `max_iters` times, with no convergence detection
//!
//! ## Example
//!
//! ```rust
//! use pixelseg::{cluster, ClusterConfig, ExecutionMode, Rgb};
//!
//! // A tiny "image": two dark pixels, two bright ones.
//! let mut pixels = vec![
//!     Rgb::new(0, 0, 0),
//!     Rgb::new(10, 10, 10),
//!     Rgb::new(250, 250, 250),
//!     Rgb::new(245, 245, 245),
//! ];
//!
//! let config = ClusterConfig::new(2)
//!     .with_max_iters(10)
//!     .with_seed(42)
//!     .with_mode(ExecutionMode::Parallel);
//!
//! cluster(&mut pixels, &config).unwrap();
//!
//! // The buffer now holds at most two distinct colors.
//! assert!(pixels.iter().collect::<std::collections::HashSet<_>>().len() <= 2);
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
mod kmeans;
mod pixel;

pub use config::{ClusterConfig, ExecutionMode};
pub use error::ClusterError;
pub use kmeans::cluster;
pub use pixel::Rgb;
