//! Persist output artifacts.

use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::OutputError;

/// Write `text` plus a trailing newline to `path`, replacing any existing file.
///
/// Content goes to a temporary file in the same directory first and is then
/// renamed over `path`, so a failed run never leaves a half-written file.
/// A new file gets the umask-filtered default mode; an existing file keeps
/// its mode.
pub fn write_artifact(path: &Path, text: &str) -> Result<(), OutputError> {
    let wrap = |source: std::io::Error| OutputError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(wrap)?;
    tmp.write_all(text.as_bytes()).map_err(wrap)?;
    tmp.write_all(b"\n").map_err(wrap)?;
    tmp.flush().map_err(wrap)?;

    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(wrap)?;
    }

    tmp.persist(path).map_err(|e| wrap(e.error))?;

    Ok(())
}
