//! Scrawl Stroke Capture
//!
//! Turns raw input samples into bounded strokes. Uses a pluggable source
//! architecture so the recognizer never depends on where points come from:
//!
//! - **Replay:** Pre-recorded samples (files, tests)
//! - Toolkit mouse-motion callbacks, tablet events, etc. behind the same trait
//!
//! Raw pointer streams are dense; the recorder retains every Nth sample
//! (default every 5th) to bound stroke length without materially changing
//! shape.

use scrawl_common::error::ScrawlResult;
use scrawl_gesture_model::{Point, Stroke};

/// Trait for raw point sources.
pub trait PointSource {
    /// Poll for the next raw sample. Returns `None` when the source is
    /// exhausted (pen lifted, file ended).
    fn poll(&mut self) -> ScrawlResult<Option<Point>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// A point source backed by a pre-recorded sample sequence.
pub struct ReplaySource {
    samples: std::vec::IntoIter<Point>,
}

impl ReplaySource {
    pub fn new(samples: Vec<Point>) -> Self {
        Self {
            samples: samples.into_iter(),
        }
    }
}

impl PointSource for ReplaySource {
    fn poll(&mut self) -> ScrawlResult<Option<Point>> {
        Ok(self.samples.next())
    }

    fn name(&self) -> &str {
        "replay"
    }
}

/// Accumulates one stroke from a raw sample stream, keeping every
/// `decimation`-th sample.
pub struct StrokeRecorder {
    decimation: u64,
    samples_seen: u64,
    buffer: Vec<Point>,
}

impl StrokeRecorder {
    /// Create a recorder. A decimation of 1 keeps every sample;
    /// 0 is treated as 1.
    pub fn new(decimation: usize) -> Self {
        Self {
            decimation: decimation.max(1) as u64,
            samples_seen: 0,
            buffer: Vec::new(),
        }
    }

    /// Feed one raw sample. Returns whether the sample was retained.
    pub fn push(&mut self, point: Point) -> bool {
        self.samples_seen += 1;
        if self.samples_seen % self.decimation == 0 {
            self.buffer.push(point);
            true
        } else {
            false
        }
    }

    /// Drain a source into the buffer. Returns the number of raw samples
    /// consumed.
    pub fn record_from(&mut self, source: &mut dyn PointSource) -> ScrawlResult<u64> {
        let mut consumed = 0;
        while let Some(point) = source.poll()? {
            self.push(point);
            consumed += 1;
        }
        tracing::debug!(
            source = source.name(),
            consumed,
            retained = self.buffer.len(),
            "Stroke recorded"
        );
        Ok(consumed)
    }

    /// Number of retained points in the active stroke.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take the accumulated stroke, resetting the recorder for the next one.
    pub fn take_stroke(&mut self) -> Stroke {
        self.samples_seen = 0;
        Stroke::new(std::mem::take(&mut self.buffer))
    }

    /// Discard the active stroke without producing it.
    pub fn clear(&mut self) {
        self.samples_seen = 0;
        self.buffer.clear();
    }
}
