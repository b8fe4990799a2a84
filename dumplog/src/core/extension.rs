//! Target path extension check.
//!
//! The extension is everything after the last `.` in the whole path string,
//! not just the file name, so `dir.log/out` is rejected and `.log` is accepted.

use std::path::Path;

use crate::error::DumpError;

/// Extensions a dump file may carry. Compared case-sensitively.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["txt", "log"];

/// Returns the substring after the last `.`, or `None` if there is no `.` or
/// the path is not valid UTF-8.
pub fn extension_of(path: &Path) -> Option<&str> {
    let raw = path.to_str()?;
    raw.rsplit_once('.').map(|(_, ext)| ext)
}

pub fn has_allowed_extension(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext))
}

/// Fail with [`DumpError::InvalidExtension`] unless the path ends in `.txt` or `.log`.
pub fn check_extension(path: &Path) -> Result<(), DumpError> {
    if has_allowed_extension(path) {
        Ok(())
    } else {
        Err(DumpError::InvalidExtension {
            path: path.to_path_buf(),
        })
    }
}
