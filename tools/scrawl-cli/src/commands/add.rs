//! Append a stroke file as a custom template.

use std::path::PathBuf;

use scrawl_common::config::AppConfig;
use scrawl_common::ScrawlError;
use scrawl_gesture_model::{Template, TemplateStore};

pub fn run(stroke_file: PathBuf, label: String, library: Option<PathBuf>) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let path = library.unwrap_or_else(|| config.custom_library_path());

    let strokes = super::load_strokes(&stroke_file)?;
    let Some(stroke) = strokes.into_iter().next() else {
        return Err(ScrawlError::capture("Stroke file contains no strokes").into());
    };
    if stroke.is_empty() {
        return Err(ScrawlError::capture("Stroke has no points").into());
    }

    let template = Template::new(label, stroke);
    let store = TemplateStore::new(&path);
    store
        .append(&template)
        .map_err(|e| ScrawlError::library(format!("Failed to append template: {e}")))?;

    println!(
        "Saved gesture \"{}\" ({} points) to {}",
        template.label,
        template.stroke.len(),
        path.display()
    );
    Ok(())
}
