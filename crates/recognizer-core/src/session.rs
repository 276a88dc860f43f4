//! Sequential multi-gesture recognition.
//!
//! Gestures arrive one at a time: draw, recognize, repeat. Each winning
//! label is appended to an accumulated sequence, so a run of strokes
//! produces a text. The session never touches the stroke buffer — the
//! capture side drains it after each successful recognition.

use scrawl_gesture_model::{Library, Stroke};

use crate::classifier::{Classifier, ClassifyError, Match};
use crate::matcher::MatcherConfig;

/// A classifier plus the label sequence recognized so far.
pub struct RecognitionSession {
    classifier: Classifier,
    labels: Vec<String>,
}

impl RecognitionSession {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
            labels: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatcherConfig::default())
    }

    /// Classify a stroke and append the winning label to the session.
    ///
    /// On error nothing is appended; the session stays usable and the
    /// caller may retry with new input.
    pub fn recognize(
        &mut self,
        stroke: &Stroke,
        library: &Library,
    ) -> Result<Match, ClassifyError> {
        let result = self.classifier.classify(stroke, library)?;
        self.labels.push(result.label.clone());
        Ok(result)
    }

    /// The accumulated text: all recognized labels concatenated in order.
    pub fn text(&self) -> String {
        self.labels.concat()
    }

    /// Labels recognized so far, oldest first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Remove the most recently appended label (the whole label, even if
    /// it is more than one character). Returns it, or `None` if the
    /// session is empty.
    pub fn delete_last(&mut self) -> Option<String> {
        self.labels.pop()
    }

    /// Forget everything recognized so far.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_gesture_model::{Library, Template};

    fn library() -> Library {
        Library::new(vec![
            Template::bundled("a", Stroke::from_pairs(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)])),
            Template::bundled("b", Stroke::from_pairs(&[(0.0, 0.0), (0.0, 100.0), (80.0, 50.0)])),
        ])
    }

    #[test]
    fn test_labels_accumulate_in_order() {
        let mut session = RecognitionSession::with_defaults();
        let library = library();

        let a = Stroke::from_pairs(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]);
        let b = Stroke::from_pairs(&[(0.0, 0.0), (0.0, 100.0), (80.0, 50.0)]);

        session.recognize(&a, &library).unwrap();
        session.recognize(&b, &library).unwrap();
        session.recognize(&a, &library).unwrap();

        assert_eq!(session.text(), "aba");
    }

    #[test]
    fn test_delete_last_removes_whole_label() {
        let mut session = RecognitionSession::with_defaults();
        let library = Library::new(vec![Template::bundled(
            "th",
            Stroke::from_pairs(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]),
        )]);

        let stroke = Stroke::from_pairs(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]);
        session.recognize(&stroke, &library).unwrap();
        session.recognize(&stroke, &library).unwrap();
        assert_eq!(session.text(), "thth");

        assert_eq!(session.delete_last().as_deref(), Some("th"));
        assert_eq!(session.text(), "th");
    }

    #[test]
    fn test_delete_last_on_empty_session() {
        let mut session = RecognitionSession::with_defaults();
        assert_eq!(session.delete_last(), None);
    }

    #[test]
    fn test_failed_recognition_leaves_session_unchanged() {
        let mut session = RecognitionSession::with_defaults();
        let library = library();

        let err = session.recognize(&Stroke::default(), &library).unwrap_err();
        assert_eq!(err, ClassifyError::EmptyStroke);
        assert!(session.is_empty());

        // Still usable afterwards
        let a = Stroke::from_pairs(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]);
        session.recognize(&a, &library).unwrap();
        assert_eq!(session.text(), "a");
    }

    #[test]
    fn test_clear_resets_text() {
        let mut session = RecognitionSession::with_defaults();
        let library = library();
        let a = Stroke::from_pairs(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)]);
        session.recognize(&a, &library).unwrap();
        session.clear();
        assert_eq!(session.text(), "");
        assert!(session.is_empty());
    }
}
