//! Integration tests for lazy breadth-first traversal.
//!
//! These tests verify completeness, uniqueness, ordering and the handling of
//! missing or unreadable directories on real temporary trees.

use dirwalk::{DirWalker, WalkError};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Helper Functions
// ============================================================================

/// Drains a walker through the pull protocol.
fn drain(walker: &mut DirWalker) -> Vec<PathBuf> {
    let mut files = Vec::new();
    while walker.has_next() {
        files.push(walker.next_file().expect("has_next promised a file"));
    }
    files
}

/// Writes `contents` to `root/relative`, creating parents as needed.
fn write_file(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, relative.as_bytes()).expect("write file");
    path
}

// ============================================================================
// Completeness and Uniqueness
// ============================================================================

/// Verifies every file is delivered exactly once regardless of depth.
#[test]
fn drains_every_file_exactly_once() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("root");
    let expected: BTreeSet<PathBuf> = [
        "a.txt",
        "b.txt",
        "one/c.txt",
        "one/two/d.txt",
        "one/two/three/e.txt",
        "other/f.txt",
        "other/deep/er/still/g.txt",
    ]
    .into_iter()
    .map(|name| write_file(&root, name))
    .collect();
    fs::create_dir_all(root.join("empty/nested")).expect("create empty dirs");

    let files = drain(&mut DirWalker::new(&root));
    let unique: BTreeSet<PathBuf> = files.iter().cloned().collect();

    assert_eq!(files.len(), unique.len(), "no file delivered twice");
    assert_eq!(unique, expected);
}

/// Verifies directories themselves are never delivered.
#[test]
fn directories_are_never_delivered() {
    let temp = tempfile::tempdir().expect("create tempdir");
    fs::create_dir_all(temp.path().join("a/b")).expect("create dirs");
    write_file(temp.path(), "a/b/leaf");

    let files = drain(&mut DirWalker::new(temp.path()));
    assert_eq!(files, vec![temp.path().join("a").join("b").join("leaf")]);
    assert!(files.iter().all(|file| file.is_file()));
}

/// Verifies the iterator and the pull protocol deliver the same set.
#[test]
fn iterator_matches_pull_protocol() {
    let temp = tempfile::tempdir().expect("create tempdir");
    for name in ["x", "d/y", "d/e/z"] {
        write_file(temp.path(), name);
    }

    let pulled: BTreeSet<PathBuf> = drain(&mut DirWalker::new(temp.path())).into_iter().collect();
    let iterated: BTreeSet<PathBuf> = DirWalker::new(temp.path()).collect();
    assert_eq!(pulled, iterated);
    assert_eq!(iterated.len(), 3);
}

// ============================================================================
// Ordering
// ============================================================================

/// Verifies files directly under the root come before files in subdirectories.
#[test]
fn root_files_precede_subdirectory_files() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path();
    let a = write_file(root, "a");
    let b = write_file(root, "d1/b");
    let c = write_file(root, "d2/c");

    let files = drain(&mut DirWalker::new(root));
    assert_eq!(files.len(), 3);
    assert_eq!(files[0], a);
    assert!(files[1..].contains(&b));
    assert!(files[1..].contains(&c));
}

/// Verifies a file discovered at the third level comes after every file from
/// the second level.
#[test]
fn deeper_waves_come_last() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path();
    let x = write_file(root, "x");
    let y = write_file(root, "d1/y");
    let w = write_file(root, "d2/w");
    let z = write_file(root, "d1/d3/z");

    let files = drain(&mut DirWalker::new(root));
    assert_eq!(files.len(), 4);
    assert_eq!(files[0], x);
    assert!(files[1..3].contains(&y));
    assert!(files[1..3].contains(&w));
    assert_eq!(files[3], z);
}

/// Verifies calling has_next repeatedly does not change the next file.
#[test]
fn repeated_has_next_is_idempotent() {
    let temp = tempfile::tempdir().expect("create tempdir");
    for name in ["p", "q", "s/r"] {
        write_file(temp.path(), name);
    }

    let mut direct = DirWalker::new(temp.path());
    let first_direct = direct.next_file().expect("direct first");

    let mut primed = DirWalker::new(temp.path());
    assert!(primed.has_next());
    assert!(primed.has_next());
    assert!(primed.has_next());
    let first_primed = primed.next_file().expect("primed first");

    assert_eq!(first_primed, first_direct);
    assert_eq!(drain(&mut primed), drain(&mut direct));
}

// ============================================================================
// Empty, Missing and Unreadable Roots
// ============================================================================

/// Verifies an empty root has no files and reports exhaustion.
#[test]
fn empty_directory_is_immediately_exhausted() {
    let temp = tempfile::tempdir().expect("create tempdir");

    let mut walker = DirWalker::new(temp.path());
    assert!(!walker.has_next());
    assert!(matches!(
        walker.next_file(),
        Err(WalkError::Exhausted { .. })
    ));
}

/// Verifies a missing root behaves like an empty one.
#[test]
fn missing_root_behaves_like_empty_directory() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let missing = temp.path().join("does-not-exist");

    let mut walker = DirWalker::new(&missing);
    assert!(!walker.has_next());
    let error = walker.next_file().expect_err("nothing to deliver");
    assert!(error.is_exhausted());
    assert_eq!(error.path(), missing.as_path());
}

/// Verifies a directory removed after discovery is treated as empty.
#[test]
fn directory_removed_before_expansion_is_skipped() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path();
    let kept = write_file(root, "kept.txt");
    write_file(root, "gone/lost.txt");

    let mut walker = DirWalker::new(root);
    assert_eq!(walker.next_file().expect("kept"), kept);

    fs::remove_dir_all(root.join("gone")).expect("remove gone");
    assert!(!walker.has_next());
    assert_eq!(walker.stats().unreadable_directories(), 1);
}

/// Verifies an unreadable subdirectory is silently skipped.
#[cfg(unix)]
#[test]
fn unreadable_directory_contributes_nothing() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path();
    let visible = write_file(root, "open/visible.txt");
    write_file(root, "locked/hidden.txt");

    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("lock dir");
    if fs::read_dir(&locked).is_ok() {
        // Running with privileges that ignore permission bits.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("unlock dir");
        return;
    }

    let mut walker = DirWalker::new(root);
    let files = drain(&mut walker);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("unlock dir");

    assert_eq!(files, vec![visible]);
    assert_eq!(walker.stats().unreadable_directories(), 1);
}

// ============================================================================
// Symbolic Links
// ============================================================================

/// Verifies a symlink to a directory is expanded rather than delivered.
#[cfg(unix)]
#[test]
fn directory_symlinks_are_expanded() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("root");
    let target = temp.path().join("target");
    fs::create_dir(&root).expect("create root");
    write_file(&target, "inner.txt");
    symlink(&target, root.join("link")).expect("create symlink");

    let files: Vec<PathBuf> = DirWalker::new(&root).collect();
    assert_eq!(files, vec![root.join("link").join("inner.txt")]);
    assert!(files.iter().all(|file| !file.is_dir()));
    assert_eq!(fs::read(&files[0]).expect("read through link"), b"inner.txt");
}

/// Verifies a symlink to a file is delivered under the link's own path.
#[cfg(unix)]
#[test]
fn file_symlinks_are_delivered() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    let target = write_file(temp.path(), "outside.txt");
    symlink(&target, root.join("alias.txt")).expect("create symlink");

    let files = drain(&mut DirWalker::new(&root));
    assert_eq!(files, vec![root.join("alias.txt")]);
}

/// Verifies a dangling symlink is delivered as a file.
#[cfg(unix)]
#[test]
fn dangling_symlink_is_delivered_as_file() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    symlink(temp.path().join("missing"), root.join("broken")).expect("create symlink");

    let mut walker = DirWalker::new(&root);
    let files = drain(&mut walker);
    assert_eq!(files, vec![root.join("broken")]);
    assert_eq!(walker.stats().directories_expanded(), 1);
}

/// Verifies a symlink pointing back at the root does not loop forever.
#[cfg(unix)]
#[test]
fn self_referencing_symlink_terminates() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("create tempdir");
    let root = temp.path().join("root");
    fs::create_dir(&root).expect("create root");
    symlink(&root, root.join("self")).expect("create symlink");

    let mut walker = DirWalker::new(&root);
    let files = drain(&mut walker);

    // Expansion continues through root/self/self/... until the platform stops
    // resolving the path; whatever is left over is named `self`.
    assert!(walker.is_exhausted());
    assert!(walker.stats().directories_expanded() > 1);
    assert!(files.len() <= 1);
    assert!(
        files
            .iter()
            .all(|file| file.file_name() == Some(std::ffi::OsStr::new("self")))
    );
}
