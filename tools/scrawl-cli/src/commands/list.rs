//! Show library contents.

use std::path::PathBuf;

use scrawl_common::config::AppConfig;
use scrawl_common::ScrawlError;
use scrawl_gesture_model::TemplateStore;

pub fn run(paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let paths = if paths.is_empty() {
        let config = AppConfig::load();
        vec![config.default_library_path(), config.custom_library_path()]
            .into_iter()
            .filter(|p| p.exists())
            .collect()
    } else {
        paths
    };

    if paths.is_empty() {
        println!("No libraries found. Run `scrawl init` first.");
        return Ok(());
    }

    for path in paths {
        let store = TemplateStore::new(&path);
        let library = store
            .load()
            .map_err(|e| ScrawlError::library(format!("Failed to load library: {e}")))?;

        println!("Library: {}", path.display());
        if let Some(header) = store.read_header()? {
            println!("  Schema: {}", header.schema_version);
            println!("  Created: {}", header.created_at);
        }
        println!("  Templates: {}", library.len());
        for (label, count) in library.label_counts() {
            if count == 1 {
                println!("    {label}");
            } else {
                println!("    {label} ({count} samples)");
            }
        }
        println!();
    }

    Ok(())
}
