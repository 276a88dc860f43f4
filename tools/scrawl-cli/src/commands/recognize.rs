//! Classify strokes against the merged default + custom library.

use std::path::PathBuf;

use scrawl_common::config::AppConfig;
use scrawl_common::ScrawlError;
use scrawl_gesture_model::{Library, Stroke, TemplateStore};
use scrawl_recognizer_core::{MatcherConfig, RecognitionSession};
use scrawl_stroke_capture::StrokeRecorder;

pub fn run(
    stroke_file: PathBuf,
    library: Option<PathBuf>,
    custom: Option<PathBuf>,
    resolution: Option<usize>,
    raw: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let default_path = library.unwrap_or_else(|| config.default_library_path());
    let custom_path = custom.unwrap_or_else(|| config.custom_library_path());

    let defaults = TemplateStore::new(&default_path).load().map_err(|e| {
        ScrawlError::library(format!(
            "Failed to load default library (run `scrawl init`?): {e}"
        ))
    })?;
    let custom_templates = TemplateStore::new(&custom_path)
        .load_or_empty()
        .map_err(|e| ScrawlError::library(format!("Failed to load custom library: {e}")))?;
    let merged = Library::merged(&defaults, &custom_templates);
    tracing::debug!(
        defaults = defaults.len(),
        custom = custom_templates.len(),
        "Library loaded"
    );

    let mut strokes = super::load_strokes(&stroke_file)?;

    if raw {
        strokes = strokes.iter().map(|s| decimate(s, &config)).collect();
    }

    let matcher_config = MatcherConfig {
        resolution: resolution.unwrap_or(config.recognizer.resolution),
        norm_size: config.recognizer.norm_size,
        min_width: config.recognizer.min_width,
        min_height: config.recognizer.min_height,
    };
    let mut session = RecognitionSession::new(matcher_config);

    for (index, stroke) in strokes.iter().enumerate() {
        match session.recognize(stroke, &merged) {
            Ok(result) => {
                println!(
                    "Stroke {}: \"{}\" (distance {:.2})",
                    index + 1,
                    result.label,
                    result.distance
                );
            }
            Err(e) => {
                println!("Stroke {}: {e}", index + 1);
            }
        }
    }

    println!();
    println!("Recognized text: {}", session.text());
    Ok(())
}

/// Replay raw capture samples through the decimating recorder.
fn decimate(stroke: &Stroke, config: &AppConfig) -> Stroke {
    let mut recorder = StrokeRecorder::new(config.recognizer.capture_decimation);
    for point in &stroke.points {
        recorder.push(*point);
    }
    recorder.take_stroke()
}
