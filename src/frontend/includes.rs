//! File-system resolution of `Include` directives
//!
//! Paths in a directive are resolved relative to the directory of the file that contains it; the entry file's
//! directory (or the working directory, for stdin) anchors the outermost level.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ra7ma::frontend::includes::FsIncludeResolver;
//! use ra7ma::frontend::include::lex_with_includes;
//! use ra7ma_syntax::FrontendConfig;
//!
//! let mut resolver = FsIncludeResolver::for_entry(Path::new("main.r7"));
//! let lexed = lex_with_includes("Include lib.r7\n", &mut resolver, &FrontendConfig::default());
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ra7ma_syntax::include::{IncludeError, IncludeResolver};

use super::source::{SourceError, read_source};

/// Include resolver backed by the file system
///
/// Keeps the chain of files currently being expanded so that a file including itself, directly or through others,
/// is reported as a cycle instead of recursing until the depth limit.
#[derive(Debug, Default)]
pub struct FsIncludeResolver {
    /// Directory for includes in the outermost source
    base_dir: PathBuf,
    /// Canonical paths of the files being expanded, outermost first
    active: Vec<PathBuf>,
    /// Every file successfully included so far
    included: HashSet<PathBuf>,
}

impl FsIncludeResolver {
    /// Resolver for source that is not itself a file (stdin): includes resolve against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            active: Vec::new(),
            included: HashSet::new(),
        }
    }

    /// Resolver for the file at `entry`.
    ///
    /// The entry file itself counts as active, so `Include`-ing it from anywhere below is a cycle.
    pub fn for_entry(entry: &Path) -> Self {
        let base_dir = entry
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut resolver = Self::new(base_dir);
        if let Ok(canonical) = fs::canonicalize(entry) {
            resolver.active.push(canonical);
        }
        resolver
    }

    /// Files that were spliced in, in no particular order.
    pub fn included_files(&self) -> impl Iterator<Item = &Path> {
        self.included.iter().map(PathBuf::as_path)
    }

    fn current_dir(&self) -> &Path {
        self.active
            .last()
            .and_then(|path| path.parent())
            .unwrap_or(self.base_dir.as_path())
    }
}

impl IncludeResolver for FsIncludeResolver {
    fn enter(&mut self, path: &str) -> Result<String, IncludeError> {
        let candidate = self.current_dir().join(path);
        let canonical = fs::canonicalize(&candidate).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => IncludeError::NotFound(path.to_string()),
            _ => IncludeError::Io {
                path: path.to_string(),
                source,
            },
        })?;

        if self.active.contains(&canonical) {
            return Err(IncludeError::Cycle(path.to_string()));
        }

        let text = read_source(&canonical).map_err(|e| match e {
            SourceError::Access { source, .. } | SourceError::Read { source, .. } => IncludeError::Io {
                path: path.to_string(),
                source,
            },
            too_large @ SourceError::TooLarge { .. } => IncludeError::Io {
                path: path.to_string(),
                source: io::Error::other(too_large.to_string()),
            },
        })?;

        tracing::debug!(path, resolved = %canonical.display(), "resolved include");
        self.included.insert(canonical.clone());
        self.active.push(canonical);
        Ok(text)
    }

    fn leave(&mut self) {
        self.active.pop();
    }
}
