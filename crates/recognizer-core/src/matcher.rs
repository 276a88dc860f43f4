//! The stroke matcher: resampling, normalization, and pairwise distance.
//!
//! # Pipeline
//!
//! 1. **Resample** both strokes to `resolution` points, picked by index
//!    position (not arc length): O(k), no distance accumulation pass. The
//!    trade-off is sensitivity to non-uniform drawing speed.
//! 2. **Normalize** each reduced stroke: translate its bounding box to the
//!    origin, then stretch each axis independently to `norm_size`. Aspect
//!    ratio is deliberately not preserved — recognition is invariant to
//!    independent horizontal/vertical stretching.
//! 3. **Compare:** mean Euclidean distance over index-aligned point pairs.
//!
//! Normalizing after resampling means outlier raw points beyond the sampled
//! ones never affect scale computation.

use serde::{Deserialize, Serialize};

use scrawl_gesture_model::Stroke;

/// Configuration for the stroke matcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Number of points every stroke is reduced to before comparison (k).
    /// Must be at least 2; the constructor clamps lower values.
    pub resolution: usize,

    /// Target bounding-box extent after normalization.
    pub norm_size: f64,

    /// Strokes narrower than this keep their x axis unscaled.
    pub min_width: f64,

    /// Strokes shorter than this keep their y axis unscaled.
    pub min_height: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            resolution: 10,
            norm_size: 200.0,
            min_width: 30.0,
            min_height: 30.0,
        }
    }
}

/// The matching engine. Stateless apart from its configuration.
pub struct StrokeMatcher {
    config: MatcherConfig,
}

impl StrokeMatcher {
    /// Create a matcher. Resolution is clamped to at least 2 so the
    /// resampling index formula is always defined.
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config: MatcherConfig {
                resolution: config.resolution.max(2),
                ..config
            },
        }
    }

    /// Create a matcher with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MatcherConfig::default())
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Reduce a stroke to exactly `resolution` points chosen by index.
    ///
    /// Output index `i` maps to input index `n - 1` for the final point,
    /// else `floor(i * n / (k - 1))`. Duplicate picks are permitted (and
    /// expected when the input is shorter than the resolution); they are
    /// intentional, not deduplicated. An empty stroke resamples to an
    /// empty stroke — classification rejects empty input before this.
    pub fn resample(&self, stroke: &Stroke) -> Stroke {
        let n = stroke.len();
        if n == 0 {
            return Stroke::default();
        }
        let k = self.config.resolution;
        let mut points = Vec::with_capacity(k);
        for i in 0..k {
            let index = if i == k - 1 { n - 1 } else { i * n / (k - 1) };
            points.push(stroke.points[index]);
        }
        Stroke::new(points)
    }

    /// Translate a stroke's bounding box to the origin and scale it into
    /// the canonical frame.
    ///
    /// Each axis is scaled independently so its extent becomes exactly
    /// `norm_size` — except degenerate axes, which stay unscaled:
    /// a near-vertical stroke has width close to zero, and scaling x by
    /// `norm_size / width` would blow up. A stroke degenerate on *both*
    /// axes (a dot) is returned translated but unscaled, so no branch can
    /// divide by a near-zero extent.
    pub fn normalize(&self, stroke: &Stroke) -> Stroke {
        if stroke.is_empty() {
            return Stroke::default();
        }
        let moved = stroke.translated(-stroke.min_x(), -stroke.min_y());
        let width = moved.width();
        let height = moved.height();

        let narrow = width < self.config.min_width;
        let flat = height < self.config.min_height;

        if narrow && flat {
            moved
        } else if narrow {
            moved.scaled(1.0, self.config.norm_size / height)
        } else if flat {
            moved.scaled(self.config.norm_size / width, 1.0)
        } else {
            moved.scaled(
                self.config.norm_size / width,
                self.config.norm_size / height,
            )
        }
    }

    /// Mean pointwise distance between two strokes after resampling and
    /// normalization.
    ///
    /// Correspondence is positional: point `i` of one stroke is compared
    /// to point `i` of the other. Symmetric, and zero for identical
    /// strokes.
    pub fn compare(&self, a: &Stroke, b: &Stroke) -> f64 {
        let norm_a = self.normalize(&self.resample(a));
        let norm_b = self.normalize(&self.resample(b));

        let total: f64 = norm_a
            .points
            .iter()
            .zip(norm_b.points.iter())
            .map(|(p, q)| p.distance_to(q))
            .sum();
        total / self.config.resolution as f64
    }
}
