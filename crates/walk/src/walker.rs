use crate::entry::ArchiveEntries;
use crate::error::WalkError;
use crate::stats::WalkStats;
use logging::debug_log;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf, is_separator};

/// Breadth-first iterator over the non-directory entries beneath a root.
///
/// Directories are listed on demand: the walker only expands the next queued
/// directory when its file buffer is empty and the caller asks for more.
/// Construction performs no I/O.
#[derive(Debug)]
pub struct DirWalker {
    root: PathBuf,
    pending_files: VecDeque<PathBuf>,
    pending_directories: VecDeque<PathBuf>,
    started: bool,
    stats: WalkStats,
}

impl DirWalker {
    /// Creates a walker bound to `root`.
    ///
    /// The root is not inspected until the first call to
    /// [`has_next`](Self::has_next) or [`next_file`](Self::next_file). A missing
    /// or unreadable root behaves like an empty directory.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            pending_files: VecDeque::new(),
            pending_directories: VecDeque::new(),
            started: false,
            stats: WalkStats::default(),
        }
    }

    /// Returns the root the walker was created with, unmodified.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reports whether another file can be delivered.
    ///
    /// May list directories to find out. Repeated calls without an
    /// intervening [`next_file`](Self::next_file) do not change what is
    /// delivered next.
    pub fn has_next(&mut self) -> bool {
        self.fill();
        !self.pending_files.is_empty()
    }

    /// Removes and returns the next file.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Exhausted`] once every reachable file has been
    /// delivered.
    pub fn next_file(&mut self) -> Result<PathBuf, WalkError> {
        self.take_next().ok_or_else(|| WalkError::exhausted(&self.root))
    }

    /// Computes the path of `file` relative to the root.
    ///
    /// The check is textual: the rendered `file` path must start with the
    /// rendered root followed by a separator, and exactly one separator is
    /// stripped. `..` segments, symlinks and case folding are not resolved,
    /// so only paths delivered by this walker are guaranteed to succeed.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::NotNested`] when `file` is not below the root,
    /// including when `file` is the root itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirwalk::DirWalker;
    /// use std::path::Path;
    ///
    /// let walker = DirWalker::new("/srv/classes");
    /// let name = walker.relative_path(Path::new("/srv/classes/a/b/C.class")).unwrap();
    /// assert_eq!(name, "a/b/C.class");
    /// assert!(walker.relative_path(Path::new("/srv/other/C.class")).is_err());
    /// ```
    pub fn relative_path(&self, file: &Path) -> Result<String, WalkError> {
        let root_text = self.root.to_string_lossy();
        let file_text = file.to_string_lossy();

        file_text
            .strip_prefix(root_text.as_ref())
            .and_then(|rest| {
                if root_text.ends_with(is_separator) {
                    Some(rest)
                } else {
                    rest.strip_prefix(is_separator)
                }
            })
            .filter(|rest| !rest.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| WalkError::not_nested(file, &self.root))
    }

    /// Reports whether the walk has started and nothing is left to list or
    /// deliver. Performs no I/O.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.started && self.pending_files.is_empty() && self.pending_directories.is_empty()
    }

    /// Number of discovered files not yet delivered.
    #[must_use]
    pub fn pending_files(&self) -> usize {
        self.pending_files.len()
    }

    /// Number of discovered directories not yet listed.
    #[must_use]
    pub fn pending_directories(&self) -> usize {
        self.pending_directories.len()
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Converts the walker into an iterator of archive entries pairing each
    /// file with its name relative to the root.
    #[must_use]
    pub fn into_entries(self) -> ArchiveEntries {
        ArchiveEntries::new(self)
    }

    fn take_next(&mut self) -> Option<PathBuf> {
        self.fill();
        let file = self.pending_files.pop_front()?;
        self.stats.files_delivered += 1;
        debug_log!(Deliver, 3, "delivering {:?}", file);
        Some(file)
    }

    /// Primes the frontier on first use, then lists queued directories until
    /// a file is buffered or the frontier runs dry.
    fn fill(&mut self) {
        if !self.started {
            self.started = true;
            debug_log!(Frontier, 1, "starting walk at {:?}", self.root);
            self.pending_directories.push_back(self.root.clone());
        }

        while self.pending_files.is_empty() {
            let Some(directory) = self.pending_directories.pop_front() else {
                break;
            };
            self.expand(&directory);
        }
    }

    fn expand(&mut self, directory: &Path) {
        self.stats.directories_expanded += 1;

        let children = match list_children(directory) {
            Ok(children) => children,
            Err(error) => {
                self.stats.unreadable_directories += 1;
                debug_log!(Listing, 1, "treating {:?} as empty: {}", directory, error);
                return;
            }
        };

        let mut files = 0;
        let mut directories = 0;
        for (path, is_dir) in children {
            if is_dir {
                self.pending_directories.push_back(path);
                directories += 1;
            } else {
                self.pending_files.push_back(path);
                files += 1;
            }
        }
        self.stats.files_discovered += files;

        debug_log!(
            Frontier,
            2,
            "expanded {:?}: {} files, {} directories",
            directory,
            files,
            directories
        );
    }
}

impl Iterator for DirWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            (0, Some(0))
        } else {
            (self.pending_files.len(), None)
        }
    }
}

impl FusedIterator for DirWalker {}

/// Lists the immediate children of `directory` in the order the platform
/// returns them, flagging which ones are directories.
///
/// Symlinks are followed when classifying, so a link to a directory is
/// expanded like the directory itself. Any failure while reading the listing
/// discards it whole.
fn list_children(directory: &Path) -> io::Result<Vec<(PathBuf, bool)>> {
    fs::read_dir(directory)?
        .map(|entry| -> io::Result<(PathBuf, bool)> {
            let path = entry?.path();
            // Dangling links and unresolvable targets are delivered as files.
            let is_dir = fs::metadata(&path).is_ok_and(|metadata| metadata.is_dir());
            Ok((path, is_dir))
        })
        .collect()
}
