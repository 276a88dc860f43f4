//! Scrawl Recognizer Core
//!
//! The matching pipeline that turns a captured stroke into a label:
//! - **Resample:** Reduce any stroke to a fixed number of points, chosen
//!   by index position in drawing order
//! - **Normalize:** Translate to the bounding-box origin and scale each
//!   axis independently into a canonical frame, with degenerate-axis guards
//! - **Compare:** Mean pointwise distance between two reduced strokes
//! - **Classify:** Nearest template in library order
//! - **Session:** Sequential multi-gesture recognition with an accumulated
//!   text result
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod classifier;
pub mod matcher;
pub mod session;

pub use classifier::{Classifier, ClassifyError, Match};
pub use matcher::{MatcherConfig, StrokeMatcher};
pub use session::RecognitionSession;
