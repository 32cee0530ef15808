use crate::error::WalkError;
use crate::walker::DirWalker;
use std::ffi::OsStr;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// A delivered file paired with its name relative to the walk root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
}

impl ArchiveEntry {
    /// Returns the path relative to the walk root, e.g. `a/b/C.class`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full path as produced by the walker.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the final component of the path.
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Splits the entry into its name and full path.
    #[must_use]
    pub fn into_parts(self) -> (String, PathBuf) {
        (self.name, self.path)
    }
}

/// Iterator returned by [`DirWalker::into_entries`].
#[derive(Debug)]
pub struct ArchiveEntries {
    walker: DirWalker,
}

impl ArchiveEntries {
    pub(crate) const fn new(walker: DirWalker) -> Self {
        Self { walker }
    }

    /// Borrows the underlying walker, e.g. to read its statistics.
    #[must_use]
    pub const fn walker(&self) -> &DirWalker {
        &self.walker
    }

    /// Returns the underlying walker.
    #[must_use]
    pub fn into_inner(self) -> DirWalker {
        self.walker
    }
}

impl Iterator for ArchiveEntries {
    type Item = Result<ArchiveEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.walker.next()?;
        Some(
            self.walker
                .relative_path(&path)
                .map(|name| ArchiveEntry { name, path }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walker.size_hint()
    }
}

impl FusedIterator for ArchiveEntries {}
