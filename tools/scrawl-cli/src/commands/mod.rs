pub mod add;
pub mod init;
pub mod list;
pub mod recognize;

use std::path::Path;

use scrawl_common::{ScrawlError, ScrawlResult};
use scrawl_gesture_model::{parse_strokes, Stroke};

/// Read and parse a stroke file: a single stroke (array of points) or an
/// array of strokes.
pub(crate) fn load_strokes(path: &Path) -> ScrawlResult<Vec<Stroke>> {
    if !path.exists() {
        return Err(ScrawlError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_strokes(&content)?)
}
