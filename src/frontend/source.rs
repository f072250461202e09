//! Reading source files from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Maximum source file size (16 MiB).
///
/// Checked against file metadata before anything is read; applies to included files too.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Why a source file could not be loaded.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot access file '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Source file '{}' is too large ({size} bytes, max {MAX_SOURCE_SIZE} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64 },
    #[error("Error reading file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a source file, refusing anything larger than [`MAX_SOURCE_SIZE`].
///
/// # Errors
///
/// - The file does not exist or its metadata cannot be read
/// - The file exceeds [`MAX_SOURCE_SIZE`]
/// - The file is not valid UTF-8 or cannot be read
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let metadata = fs::metadata(path).map_err(|source| SourceError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
        });
    }

    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_access_error() {
        let err = read_source(Path::new("definitely/not/here.r7")).unwrap_err();
        assert!(matches!(err, SourceError::Access { .. }));
        assert!(err.to_string().starts_with("Cannot access file 'definitely/not/here.r7'"));
    }

    #[test]
    fn reads_a_small_file() {
        let path = std::env::temp_dir().join(format!("ra7ma_source_{}.r7", std::process::id()));
        fs::write(&path, "Imw x;\n").unwrap();
        let text = read_source(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(text, "Imw x;\n");
    }
}
