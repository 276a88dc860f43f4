//! Point and stroke types with pure geometry primitives.
//!
//! All geometry operations return new values; a captured stroke is never
//! mutated in place. Coordinates are raw capture coordinates (canvas
//! pixels or any other consistent unit) — the recognizer normalizes at
//! comparison time.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An ordered sequence of points representing one continuous drawn gesture.
///
/// Insertion order is significant: it is the temporal order of drawing,
/// and index-based resampling depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a stroke from `(x, y)` pairs. Convenient for tests and fixtures.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimum x coordinate. Meaningful only for non-empty strokes;
    /// `width`/`height` guard the empty case for extent callers.
    pub fn min_x(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
    }

    pub fn min_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
    }

    pub fn max_x(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn max_y(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Horizontal extent (max x minus min x). Zero for an empty stroke.
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.max_x() - self.min_x()
    }

    /// Vertical extent (max y minus min y). Zero for an empty stroke.
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.max_y() - self.min_y()
    }

    /// A new stroke with every point shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Stroke {
        Stroke {
            points: self
                .points
                .iter()
                .map(|p| Point::new(p.x + dx, p.y + dy))
                .collect(),
        }
    }

    /// A new stroke with every point scaled component-wise by `(sx, sy)`.
    pub fn scaled(&self, sx: f64, sy: f64) -> Stroke {
        Stroke {
            points: self
                .points
                .iter()
                .map(|p| Point::new(p.x * sx, p.y * sy))
                .collect(),
        }
    }
}

/// Parse stroke input from JSON: either a single stroke (array of points)
/// or an array of strokes.
pub fn parse_strokes(json: &str) -> Result<Vec<Stroke>, serde_json::Error> {
    if let Ok(strokes) = serde_json::from_str::<Vec<Stroke>>(json) {
        return Ok(strokes);
    }
    serde_json::from_str::<Stroke>(json).map(|s| vec![s])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_extents() {
        let stroke = Stroke::from_pairs(&[(10.0, 5.0), (40.0, 35.0), (25.0, 20.0)]);
        assert!((stroke.min_x() - 10.0).abs() < 1e-9);
        assert!((stroke.max_y() - 35.0).abs() < 1e-9);
        assert!((stroke.width() - 30.0).abs() < 1e-9);
        assert!((stroke.height() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_translated_is_pure() {
        let stroke = Stroke::from_pairs(&[(1.0, 2.0), (3.0, 4.0)]);
        let moved = stroke.translated(-1.0, -2.0);
        assert_eq!(moved.points[0], Point::new(0.0, 0.0));
        assert_eq!(moved.points[1], Point::new(2.0, 2.0));
        // Original untouched
        assert_eq!(stroke.points[0], Point::new(1.0, 2.0));
    }

    #[test]
    fn test_scaled_is_pure() {
        let stroke = Stroke::from_pairs(&[(1.0, 2.0), (3.0, 4.0)]);
        let scaled = stroke.scaled(2.0, 0.5);
        assert_eq!(scaled.points[0], Point::new(2.0, 1.0));
        assert_eq!(scaled.points[1], Point::new(6.0, 2.0));
        assert_eq!(stroke.points[1], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_extent_is_translation_invariant() {
        let stroke = Stroke::from_pairs(&[(0.0, 0.0), (50.0, 70.0)]);
        let moved = stroke.translated(123.0, -456.0);
        assert!((stroke.width() - moved.width()).abs() < 1e-9);
        assert!((stroke.height() - moved.height()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stroke_extents_are_zero() {
        let stroke = Stroke::default();
        assert_eq!(stroke.width(), 0.0);
        assert_eq!(stroke.height(), 0.0);
    }

    #[test]
    fn test_parse_single_stroke() {
        let json = r#"[{"x":0.0,"y":0.0},{"x":10.0,"y":5.0}]"#;
        let strokes = parse_strokes(json).unwrap();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].len(), 2);
    }

    #[test]
    fn test_parse_multiple_strokes() {
        let json = r#"[[{"x":0.0,"y":0.0}],[{"x":1.0,"y":1.0},{"x":2.0,"y":2.0}]]"#;
        let strokes = parse_strokes(json).unwrap();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[1].len(), 2);
    }
}
