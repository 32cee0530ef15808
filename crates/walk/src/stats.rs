/// Counters describing the work a [`DirWalker`](crate::DirWalker) has done
/// so far. Every counter only grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub(crate) directories_expanded: usize,
    pub(crate) unreadable_directories: usize,
    pub(crate) files_discovered: usize,
    pub(crate) files_delivered: usize,
}

impl WalkStats {
    /// Directories whose children have been listed, including the root and
    /// directories that could not be read.
    #[must_use]
    pub const fn directories_expanded(&self) -> usize {
        self.directories_expanded
    }

    /// Directories whose listing failed and were treated as empty.
    #[must_use]
    pub const fn unreadable_directories(&self) -> usize {
        self.unreadable_directories
    }

    /// Non-directory entries placed in the file buffer.
    #[must_use]
    pub const fn files_discovered(&self) -> usize {
        self.files_discovered
    }

    /// Files handed to the caller.
    #[must_use]
    pub const fn files_delivered(&self) -> usize {
        self.files_delivered
    }
}
