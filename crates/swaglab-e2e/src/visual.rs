//! Baseline screenshot snapshots.
//!
//! First sight of a name writes the PNG as the baseline; later runs compare
//! pixel-wise against it with a small tolerance for rendering jitter. On a
//! mismatch the observed image is written next to the baseline for eyeball
//! debugging.

use crate::error::{Result, SuiteError};
use image::GenericImageView;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Per-channel difference below which two pixels count as equal.
const CHANNEL_TOLERANCE: u8 = 16;

/// The verdict of one snapshot check.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotVerdict {
    /// No baseline existed; the observed image is now the baseline.
    Created,
    /// The observed image matches the baseline within tolerance.
    Matched,
    /// The observed image diverges from the baseline.
    Mismatch {
        /// Fraction of pixels that differ, in `0.0..=1.0`.
        diff_ratio: f64,
    },
}

/// A directory of named PNG baselines.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
    /// Maximum differing-pixel fraction still counted as a match.
    max_diff_ratio: f64,
}

impl SnapshotStore {
    /// Opens (creating if needed) a snapshot directory.
    ///
    /// # Errors
    ///
    /// Fails if the directory can't be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            max_diff_ratio: 0.001,
        })
    }

    /// Overrides the mismatch threshold.
    #[must_use]
    pub fn with_max_diff_ratio(mut self, max_diff_ratio: f64) -> Self {
        self.max_diff_ratio = max_diff_ratio;
        self
    }

    /// Path of the baseline for `name`.
    #[must_use]
    pub fn baseline_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }

    /// Checks `png` against the stored baseline for `name`.
    ///
    /// # Errors
    ///
    /// Fails on I/O problems or undecodable image data.
    pub fn check(&self, name: &str, png: &[u8]) -> Result<SnapshotVerdict> {
        let baseline_path = self.baseline_path(name);

        if !baseline_path.exists() {
            std::fs::write(&baseline_path, png)?;
            info!("created snapshot baseline '{}'", baseline_path.display());
            return Ok(SnapshotVerdict::Created);
        }

        let baseline = image::open(&baseline_path)
            .map_err(|e| image_error(&baseline_path, &e))?;
        let observed = image::load_from_memory(png)
            .map_err(|e| SuiteError::mismatch(format!("snapshot '{name}'"), "decodable PNG", e))?;

        if baseline.dimensions() != observed.dimensions() {
            self.write_observed(name, png)?;
            warn!(
                "snapshot '{}' dimensions changed: {:?} -> {:?}",
                name,
                baseline.dimensions(),
                observed.dimensions()
            );
            return Ok(SnapshotVerdict::Mismatch { diff_ratio: 1.0 });
        }

        let baseline = baseline.to_rgba8();
        let observed_rgba = observed.to_rgba8();

        let total = u64::from(baseline.width()) * u64::from(baseline.height());
        let mut differing = 0_u64;
        for (base_pixel, seen_pixel) in baseline.pixels().zip(observed_rgba.pixels()) {
            let differs = base_pixel
                .0
                .iter()
                .zip(seen_pixel.0.iter())
                .any(|(a, b)| a.abs_diff(*b) > CHANNEL_TOLERANCE);
            if differs {
                differing += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let diff_ratio = if total == 0 {
            0.0
        } else {
            differing as f64 / total as f64
        };

        if diff_ratio <= self.max_diff_ratio {
            Ok(SnapshotVerdict::Matched)
        } else {
            self.write_observed(name, png)?;
            warn!("snapshot '{}' diverged: {:.4}% of pixels", name, diff_ratio * 100.0);
            Ok(SnapshotVerdict::Mismatch { diff_ratio })
        }
    }

    fn write_observed(&self, name: &str, png: &[u8]) -> Result<()> {
        let path = self.dir.join(format!("{name}.observed.png"));
        std::fs::write(path, png)?;
        Ok(())
    }
}

fn image_error(path: &Path, e: &image::ImageError) -> SuiteError {
    SuiteError::mismatch(
        format!("snapshot baseline '{}'", path.display()),
        "decodable PNG",
        e,
    )
}
