//! Nearest-template classification.

use scrawl_gesture_model::{Library, Stroke};

use crate::matcher::{MatcherConfig, StrokeMatcher};

/// Errors a classification attempt can produce.
///
/// Both are local and recoverable: the caller stays usable and may retry
/// with new input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The input stroke has no captured points. Surfaced to the user as a
    /// status message; nothing is mutated.
    #[error("No stroke captured")]
    EmptyStroke,

    /// The library has no templates to compare against. A setup fault —
    /// not expected once the default library is loaded.
    #[error("Gesture library is empty")]
    EmptyLibrary,
}

/// The winning template of a classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Label of the nearest template.
    pub label: String,

    /// Mean pointwise distance to the nearest template. A raw distance,
    /// not a probability: lower is closer, zero is identical.
    pub distance: f64,

    /// Index of the winning template within the library.
    pub template_index: usize,
}

/// Nearest-neighbor classifier over an immutable library snapshot.
pub struct Classifier {
    matcher: StrokeMatcher,
}

impl Classifier {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            matcher: StrokeMatcher::new(config),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatcherConfig::default())
    }

    pub fn matcher(&self) -> &StrokeMatcher {
        &self.matcher
    }

    /// Score the input against every template in library order and return
    /// the minimum-distance match.
    ///
    /// Ties keep the earliest template: later templates replace the
    /// running winner only on a strictly smaller distance. Templates with
    /// an empty stroke (a corrupted or hand-edited library line) are
    /// skipped — an empty stroke resamples to zero points and would win
    /// every comparison at distance zero. A library with no usable
    /// template is reported as empty. Cost is O(|library| * resolution).
    pub fn classify(&self, input: &Stroke, library: &Library) -> Result<Match, ClassifyError> {
        if input.is_empty() {
            return Err(ClassifyError::EmptyStroke);
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, template) in library.iter().enumerate() {
            if template.stroke.is_empty() {
                tracing::warn!(
                    label = %template.label,
                    index,
                    "Skipping template with empty stroke"
                );
                continue;
            }
            let distance = self.matcher.compare(input, &template.stroke);
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
        let Some((best_index, best_distance)) = best else {
            return Err(ClassifyError::EmptyLibrary);
        };

        let winner = &library.templates[best_index];
        tracing::debug!(
            label = %winner.label,
            distance = best_distance,
            candidates = library.len(),
            "Stroke classified"
        );

        Ok(Match {
            label: winner.label.clone(),
            distance: best_distance,
            template_index: best_index,
        })
    }
}
