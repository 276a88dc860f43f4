//! Templates and gesture libraries.
//!
//! A library is an ordered collection of named reference strokes. Order
//! matters: when two templates match an input equally well, the earlier
//! one wins. Duplicate labels are permitted — multiple samples of the
//! same gesture improve recognition.

use serde::{Deserialize, Serialize};

use crate::stroke::Stroke;

/// A named reference stroke used as a classification target.
///
/// The stroke is stored in its raw coordinate space, exactly as captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Free-form user-supplied name. Appended verbatim to recognized text.
    pub label: String,

    /// The reference gesture, raw (unnormalized).
    pub stroke: Stroke,

    /// Creation timestamp (ISO 8601). Absent for bundled defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Template {
    /// Create a template for a freshly captured stroke, stamped with the
    /// current time.
    pub fn new(label: impl Into<String>, stroke: Stroke) -> Self {
        Self {
            label: label.into(),
            stroke,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    /// Create an unstamped template (bundled defaults, fixtures).
    pub fn bundled(label: impl Into<String>, stroke: Stroke) -> Self {
        Self {
            label: label.into(),
            stroke,
            created_at: None,
        }
    }
}

/// An ordered, read-only snapshot of templates.
///
/// Mutation produces a new value (`with_template`); classification borrows
/// a library immutably. There is no shared mutable library state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    pub templates: Vec<Template>,
}

impl Library {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// A new library with `template` appended.
    pub fn with_template(&self, template: Template) -> Library {
        let mut templates = self.templates.clone();
        templates.push(template);
        Library { templates }
    }

    /// Merge two libraries, defaults first, preserving order within each.
    /// Earlier entries win classification ties.
    pub fn merged(defaults: &Library, custom: &Library) -> Library {
        let mut templates =
            Vec::with_capacity(defaults.templates.len() + custom.templates.len());
        templates.extend(defaults.templates.iter().cloned());
        templates.extend(custom.templates.iter().cloned());
        Library { templates }
    }

    /// Labels present in this library, in first-seen order, with counts.
    pub fn label_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for template in &self.templates {
            match counts.iter_mut().find(|(label, _)| label == &template.label) {
                Some((_, n)) => *n += 1,
                None => counts.push((template.label.clone(), 1)),
            }
        }
        counts
    }
}

/// The built-in seed library: a handful of simple single-stroke shapes in a
/// nominal 200x200 canvas space. Users extend this with custom templates.
pub fn default_library() -> Library {
    Library::new(vec![
        Template::bundled(
            "-",
            Stroke::from_pairs(&[
                (0.0, 100.0),
                (50.0, 100.0),
                (100.0, 100.0),
                (150.0, 100.0),
                (200.0, 100.0),
            ]),
        ),
        Template::bundled(
            "|",
            Stroke::from_pairs(&[
                (100.0, 0.0),
                (100.0, 50.0),
                (100.0, 100.0),
                (100.0, 150.0),
                (100.0, 200.0),
            ]),
        ),
        Template::bundled(
            "/",
            Stroke::from_pairs(&[
                (0.0, 200.0),
                (50.0, 150.0),
                (100.0, 100.0),
                (150.0, 50.0),
                (200.0, 0.0),
            ]),
        ),
        Template::bundled(
            "v",
            Stroke::from_pairs(&[
                (0.0, 0.0),
                (50.0, 100.0),
                (100.0, 200.0),
                (150.0, 100.0),
                (200.0, 0.0),
            ]),
        ),
        Template::bundled(
            "z",
            Stroke::from_pairs(&[
                (0.0, 0.0),
                (100.0, 0.0),
                (200.0, 0.0),
                (100.0, 100.0),
                (0.0, 200.0),
                (100.0, 200.0),
                (200.0, 200.0),
            ]),
        ),
        Template::bundled(
            "o",
            Stroke::from_pairs(&[
                (100.0, 0.0),
                (170.0, 30.0),
                (200.0, 100.0),
                (170.0, 170.0),
                (100.0, 200.0),
                (30.0, 170.0),
                (0.0, 100.0),
                (30.0, 30.0),
                (100.0, 0.0),
            ]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_template_is_a_new_snapshot() {
        let base = default_library();
        let extended = base.with_template(Template::new(
            "x",
            Stroke::from_pairs(&[(0.0, 0.0), (200.0, 200.0)]),
        ));
        assert_eq!(extended.len(), base.len() + 1);
        // The original snapshot is unchanged
        assert!(base.iter().all(|t| t.label != "x"));
    }

    #[test]
    fn test_merged_preserves_order() {
        let defaults = Library::new(vec![Template::bundled(
            "a",
            Stroke::from_pairs(&[(0.0, 0.0), (100.0, 100.0)]),
        )]);
        let custom = Library::new(vec![
            Template::bundled("b", Stroke::from_pairs(&[(0.0, 100.0), (100.0, 0.0)])),
            Template::bundled("a", Stroke::from_pairs(&[(0.0, 0.0), (90.0, 110.0)])),
        ]);
        let merged = Library::merged(&defaults, &custom);
        let labels: Vec<&str> = merged.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_duplicate_labels_allowed() {
        let merged = Library::merged(
            &default_library(),
            &Library::new(vec![Template::new(
                "-",
                Stroke::from_pairs(&[(0.0, 98.0), (200.0, 102.0)]),
            )]),
        );
        let counts = merged.label_counts();
        let dash = counts.iter().find(|(label, _)| label == "-").unwrap();
        assert_eq!(dash.1, 2);
    }

    #[test]
    fn test_template_serialization_roundtrip() {
        let template = Template::new("w", Stroke::from_pairs(&[(0.0, 0.0), (10.0, 20.0)]));
        let json = serde_json::to_string(&template).unwrap();
        let parsed: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, template);
    }

    #[test]
    fn test_bundled_template_omits_timestamp() {
        let template = Template::bundled("-", Stroke::from_pairs(&[(0.0, 0.0), (10.0, 0.0)]));
        let json = serde_json::to_string(&template).unwrap();
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_default_library_is_nonempty_and_nondegenerate() {
        let library = default_library();
        assert!(!library.is_empty());
        for template in library.iter() {
            assert!(template.stroke.len() >= 2, "{} too short", template.label);
            assert!(
                template.stroke.width() >= 30.0 || template.stroke.height() >= 30.0,
                "{} degenerate on both axes",
                template.label
            );
        }
    }
}
