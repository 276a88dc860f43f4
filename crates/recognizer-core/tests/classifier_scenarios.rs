//! End-to-end classification scenarios over small libraries.

use scrawl_gesture_model::{default_library, parse_templates, Library, Stroke, Template};
use scrawl_recognizer_core::{Classifier, ClassifyError, MatcherConfig, RecognitionSession};

#[test]
fn line_input_matches_line_template_over_dot() {
    let library = Library::new(vec![
        Template::bundled("line", Stroke::from_pairs(&[(0.0, 0.0), (10.0, 0.0)])),
        Template::bundled("dot-ish", Stroke::from_pairs(&[(0.0, 0.0), (1.0, 1.0)])),
    ]);
    let classifier = Classifier::new(MatcherConfig {
        resolution: 3,
        ..MatcherConfig::default()
    });

    let input = Stroke::from_pairs(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let result = classifier.classify(&input, &library).unwrap();

    assert_eq!(result.label, "line");
    let dot_distance = classifier
        .matcher()
        .compare(&input, &library.templates[1].stroke);
    assert!(result.distance < dot_distance);
}

#[test]
fn hand_edited_library_line_with_empty_stroke_does_not_hijack_recognition() {
    // An empty stroke parses fine from JSONL but resamples to zero points,
    // which would score distance zero against anything. It must not win.
    let jsonl = concat!(
        "{\"label\":\"line\",\"stroke\":[{\"x\":0.0,\"y\":0.0},{\"x\":10.0,\"y\":0.0}]}\n",
        "{\"label\":\"corrupt\",\"stroke\":[]}\n",
    );
    let library = Library::new(parse_templates(jsonl).unwrap());

    let classifier = Classifier::with_defaults();
    let input = Stroke::from_pairs(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let result = classifier.classify(&input, &library).unwrap();

    assert_eq!(result.label, "line");
    assert!(result.distance.is_finite());
}

#[test]
fn narrow_stroke_is_classified_via_degenerate_guard() {
    // Width 9 is under the 30-unit minimum: x stays unscaled and the
    // near-vertical input still lands on the vertical template.
    let library = Library::new(vec![
        Template::bundled("|", Stroke::from_pairs(&[(100.0, 0.0), (100.0, 200.0)])),
        Template::bundled("-", Stroke::from_pairs(&[(0.0, 100.0), (200.0, 100.0)])),
    ]);
    let classifier = Classifier::with_defaults();

    let input = Stroke::from_pairs(&[
        (100.0, 0.0),
        (103.0, 60.0),
        (106.0, 130.0),
        (109.0, 200.0),
    ]);
    let result = classifier.classify(&input, &library).unwrap();
    assert_eq!(result.label, "|");
    assert!(result.distance.is_finite());
}

#[test]
fn noisy_slash_is_recognized_from_default_library() {
    let classifier = Classifier::with_defaults();
    let input = Stroke::from_pairs(&[
        (2.0, 198.0),
        (48.0, 152.0),
        (101.0, 99.0),
        (149.0, 51.0),
        (198.0, 2.0),
    ]);
    let result = classifier.classify(&input, &default_library()).unwrap();
    assert_eq!(result.label, "/");
}

#[test]
fn tie_across_merged_libraries_keeps_the_default() {
    let shape = Stroke::from_pairs(&[(0.0, 0.0), (60.0, 120.0), (120.0, 0.0)]);
    let defaults = Library::new(vec![Template::bundled("default-v", shape.clone())]);
    let custom = Library::new(vec![Template::bundled("custom-v", shape.clone())]);
    let merged = Library::merged(&defaults, &custom);

    let classifier = Classifier::with_defaults();
    let result = classifier.classify(&shape, &merged).unwrap();
    assert_eq!(result.label, "default-v");
    assert_eq!(result.template_index, 0);
}

#[test]
fn session_accumulates_default_shapes() {
    let library = default_library();
    let mut session = RecognitionSession::with_defaults();

    for template in library.iter().take(3) {
        session.recognize(&template.stroke, &library).unwrap();
    }
    assert_eq!(session.text(), "-|/");
}

#[test]
fn session_errors_leave_accumulated_text_intact() {
    let library = default_library();
    let mut session = RecognitionSession::with_defaults();

    session
        .recognize(&library.templates[0].stroke, &library)
        .unwrap();
    assert_eq!(session.text(), "-");

    let err = session
        .recognize(&Stroke::default(), &library)
        .unwrap_err();
    assert_eq!(err, ClassifyError::EmptyStroke);
    assert_eq!(session.text(), "-");

    let err = session
        .recognize(&library.templates[1].stroke, &Library::default())
        .unwrap_err();
    assert_eq!(err, ClassifyError::EmptyLibrary);
    assert_eq!(session.text(), "-");
}
