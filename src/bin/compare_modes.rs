//! Binary for comparing sequential and parallel clustering wall-clock cost
//! over a directory of images.
//!
//! Every image is decoded to a flat RGB buffer and segmented twice, once in
//! each execution mode, with the same per-image seed so both modes perform
//! identical work. The recolored buffers are discarded; only the timings are
//! reported.
//!
//! Usage: `compare-modes [folder] [k] [max_iters]`

use anyhow::{Context, Result};
use image::ImageReader;
use log::{info, warn};
use pixelseg::{cluster, ClusterConfig, ExecutionMode, Rgb};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Regular files in `folder`, in directory order.
fn image_paths(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(folder)
        .with_context(|| format!("cannot open folder {}", folder.display()))?
    {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Decode one image to a flat row-major RGB sample buffer.
/// Returns None (after logging) for files that cannot be read or decoded.
fn decode_pixels(path: &Path) -> Option<Vec<Rgb>> {
    let reader = match ImageReader::open(path) {
        Ok(reader) => reader,
        Err(err) => {
            warn!("skipping unreadable file {}: {}", path.display(), err);
            return None;
        }
    };
    let img = match reader.decode() {
        Ok(img) => img,
        Err(err) => {
            warn!("skipping undecodable file {}: {}", path.display(), err);
            return None;
        }
    };
    let rgb = img.to_rgb8();
    Some(rgb.pixels().map(|p| Rgb::new(p[0], p[1], p[2])).collect())
}

/// Segment every image once in the given mode, returning the elapsed time.
/// Each image gets its own seed so runs are reproducible, and the same seed
/// in both modes so the sweeps do identical work.
fn timed_sweep(paths: &[PathBuf], k: usize, max_iters: usize, mode: ExecutionMode) -> Result<f64> {
    let start = Instant::now();
    for (idx, path) in paths.iter().enumerate() {
        let Some(mut pixels) = decode_pixels(path) else {
            continue;
        };
        let config = ClusterConfig::new(k)
            .with_max_iters(max_iters)
            .with_seed(idx as u64)
            .with_mode(mode);
        cluster(&mut pixels, &config)
            .with_context(|| format!("clustering {}", path.display()))?;
        // The recolored buffer is dropped here; nothing is written out.
    }
    Ok(start.elapsed().as_secs_f64())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let folder = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("./dataset_jpg"));
    let k: usize = match args.get(2) {
        Some(arg) => arg.parse().context("invalid k")?,
        None => 5,
    };
    let max_iters: usize = match args.get(3) {
        Some(arg) => arg.parse().context("invalid max_iters")?,
        None => 50,
    };

    let paths = image_paths(&folder)?;

    // Census pass: count decodable images and total pixels up front.
    let mut total_images = 0usize;
    let mut total_pixels = 0u64;
    for path in &paths {
        if let Some(pixels) = decode_pixels(path) {
            total_images += 1;
            total_pixels += pixels.len() as u64;
        }
    }

    println!("Segmenting {} images with k-means", total_images);
    println!("Pixels in dataset: {}", total_pixels);
    println!();

    info!("sequential sweep over {}", folder.display());
    let t_seq = timed_sweep(&paths, k, max_iters, ExecutionMode::Sequential)?;

    info!("parallel sweep over {}", folder.display());
    let t_par = timed_sweep(&paths, k, max_iters, ExecutionMode::Parallel)?;

    println!("Sequential time: {:.4} s", t_seq);
    println!("Parallel time  : {:.4} s", t_par);
    if t_par > 0.0 {
        println!("Speedup        : {:.2}x", t_seq / t_par);
    }

    Ok(())
}
