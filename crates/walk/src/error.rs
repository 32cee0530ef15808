use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned by the caller-facing walker operations.
///
/// Filesystem failures never appear here: a directory that cannot be listed
/// is treated as empty.
#[derive(Debug, Error)]
pub enum WalkError {
    /// [`DirWalker::next_file`](crate::DirWalker::next_file) was called with
    /// no file left to deliver.
    #[error("no further files beneath '{}'", root.display())]
    Exhausted {
        /// Root of the exhausted walker.
        root: PathBuf,
    },
    /// [`DirWalker::relative_path`](crate::DirWalker::relative_path) was given
    /// a path that is not textually nested below the root.
    #[error(
        "the file '{}' is not nested below the base directory '{}'",
        path.display(),
        root.display()
    )]
    NotNested {
        /// Path that was rejected.
        path: PathBuf,
        /// Root the path was compared against.
        root: PathBuf,
    },
}

impl WalkError {
    pub(crate) fn exhausted(root: &Path) -> Self {
        Self::Exhausted {
            root: root.to_path_buf(),
        }
    }

    pub(crate) fn not_nested(path: &Path, root: &Path) -> Self {
        Self::NotNested {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        }
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// For [`WalkError::Exhausted`] this is the walker root; for
    /// [`WalkError::NotNested`] it is the rejected path.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirwalk::DirWalker;
    ///
    /// let mut walker = DirWalker::new("./definitely_missing_root");
    /// let error = walker.next_file().unwrap_err();
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Exhausted { root } => root,
            Self::NotNested { path, .. } => path,
        }
    }

    /// Reports whether the error marks the normal end of iteration.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}
