use crate::error::RenderError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write rendered DOT text to `path`.
///
/// The text goes to a temp file in the destination directory which is then
/// renamed over `path`, so readers never observe a half-written file.
pub fn write_dot(path: &Path, dot: &str) -> Result<(), RenderError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(dot.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| RenderError::Io(e.error))?;

    debug!(path = %path.display(), bytes = dot.len(), "wrote dot file");
    Ok(())
}
