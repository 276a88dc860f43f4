//! Create the data directory and write the built-in default library.

use std::path::PathBuf;

use scrawl_common::config::AppConfig;
use scrawl_common::ScrawlError;
use scrawl_gesture_model::{default_library, TemplateStore};

pub fn run(data_dir: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let mut config = AppConfig::load();
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    let path = config.default_library_path();
    let store = TemplateStore::new(&path);
    if store.exists() && !force {
        anyhow::bail!(
            "Default library already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let library = default_library();
    store
        .write_all(&library)
        .map_err(|e| ScrawlError::library(format!("Failed to write default library: {e}")))?;

    println!(
        "Wrote {} default gestures to {}",
        library.len(),
        path.display()
    );
    Ok(())
}
