//! Scrawl Gesture Model
//!
//! Defines the core data contracts for Scrawl:
//! - **Stroke:** An ordered sequence of 2D points, in drawing order,
//!   with pure geometry primitives (extents, translation, scaling)
//! - **Template:** A named reference stroke used as a classification target
//! - **Library:** An ordered, immutable-snapshot collection of templates
//! - **Store:** Append-only JSONL persistence for template libraries
//!
//! Strokes are stored in their raw (unnormalized) coordinate space;
//! normalization happens inside the recognizer at comparison time.

pub mod store;
pub mod stroke;
pub mod template;

pub use store::*;
pub use stroke::*;
pub use template::*;
