#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `dirwalk` discovers every non-directory entry beneath a root directory so
//! packaging steps (for example, assembling compiled classes into an archive)
//! can enumerate a tree without writing recursive traversal code and without
//! materialising the whole tree up front.
//!
//! # Design
//!
//! - [`DirWalker`] owns the root, a FIFO of discovered-but-undelivered files
//!   and a FIFO of discovered-but-unlisted directories. It exposes a pull
//!   protocol ([`DirWalker::has_next`] / [`DirWalker::next_file`]) and also
//!   implements [`Iterator`].
//! - Directories are listed lazily and breadth-first: the next queued
//!   directory is listed only when the file buffer is empty and the caller
//!   asks for more.
//! - [`DirWalker::relative_path`] turns a delivered path into an archive entry
//!   name; [`DirWalker::into_entries`] does this for every file as it drains.
//! - [`WalkError`] has exactly two variants: exhaustion and a path that is not
//!   nested below the root.
//!
//! # Invariants
//!
//! - Construction performs no I/O; the root is listed on first demand.
//! - Every file is delivered at most once. Files discovered while listing an
//!   earlier directory are delivered before files of later directories.
//! - A directory that cannot be listed (missing, unreadable, not a directory)
//!   contributes no entries and raises no error.
//! - Symbolic links are followed: a link to a directory is expanded and a link
//!   to anything else (or to nothing) is delivered as a file. Cycles are not
//!   detected; a self-referencing link stops expanding once the platform
//!   refuses to resolve the path.
//! - Output is not sorted; within a directory the platform's listing order is
//!   preserved.
//!
//! # Examples
//!
//! ```
//! use dirwalk::DirWalker;
//! use std::collections::BTreeSet;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("classes");
//! fs::create_dir_all(root.join("com/example"))?;
//! fs::write(root.join("Main.class"), b"data")?;
//! fs::write(root.join("com/example/Util.class"), b"data")?;
//!
//! let mut walker = DirWalker::new(&root);
//! let mut names = BTreeSet::new();
//! while walker.has_next() {
//!     let file = walker.next_file()?;
//!     names.insert(walker.relative_path(&file)?);
//! }
//!
//! assert!(names.contains("Main.class"));
//! assert!(names.contains("com/example/Util.class"));
//! assert!(walker.next_file().is_err());
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the workspace `logging` crate under the
//! `Frontier`, `Listing` and `Deliver` debug flags.

mod entry;
mod error;
mod stats;
mod walker;


pub use crate::entry::{ArchiveEntries, ArchiveEntry};
pub use crate::error::WalkError;
pub use crate::stats::WalkStats;
pub use crate::walker::DirWalker;
