//! Integration tests for a full strip run over a temporary `lib/` tree.

use dediacritic::formatting::FormattingConfig;
use dediacritic::io::MemoryDestination;
use dediacritic::report::Reporter;
use dediacritic::{run_strip, Error, RunSummary, StripConfig};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a temp project with a `lib/` directory holding `files`.
fn create_test_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path().join("lib");
    fs::create_dir_all(&root).expect("Failed to create lib directory");

    for (name, content) in files {
        let file_path = root.join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
    }

    (temp_dir, root)
}

fn run(root: &Path) -> (Result<RunSummary, Error>, String, String) {
    let out = MemoryDestination::new();
    let err = MemoryDestination::new();
    let reporter = Reporter::new(&out, &err, FormattingConfig::plain());
    let result = run_strip(&StripConfig::with_root(root), &reporter);
    (result, out.get_content(), err.get_content())
}

#[test]
fn test_selective_file_targeting() {
    let (_temp_dir, root) = create_test_project(&[
        ("a.dart", "âș"),
        ("b.png", "âș"),
        ("sub/c.yaml", "âș"),
    ]);

    let (result, _, _) = run(&root);
    let summary = result.unwrap();

    assert_eq!(fs::read_to_string(root.join("a.dart")).unwrap(), "as");
    assert_eq!(fs::read_to_string(root.join("sub/c.yaml")).unwrap(), "as");
    assert_eq!(fs::read_to_string(root.join("b.png")).unwrap(), "âș");
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_modified, 2);
}

#[test]
fn test_write_skip_on_no_op() {
    let (_temp_dir, root) = create_test_project(&[
        ("clean.md", "# Titlu fara diacritice\n"),
        ("dirty.md", "# Titlu cu diacritice: ăîț\n"),
    ]);
    let clean = root.join("clean.md");
    let before = fs::metadata(&clean).unwrap().modified().unwrap();

    let (result, out, _) = run(&root);
    let summary = result.unwrap();

    let after = fs::metadata(&clean).unwrap().modified().unwrap();
    assert_eq!(before, after);
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_modified, 1);
    assert!(!out.contains("clean.md"));
    assert_eq!(
        fs::read_to_string(root.join("dirty.md")).unwrap(),
        "# Titlu cu diacritice: ait\n"
    );
}

#[test]
fn test_aggregate_counts() {
    let (_temp_dir, root) = create_test_project(&[
        ("one.dart", "const a = 'Țară';"),
        ("two.yaml", "name: plain\n"),
        ("nested/three.yml", "titlu: Șoșea\n"),
        ("nested/deep/four.json", r#"{"k": "v"}"#),
        ("nested/deep/five.md", "ÎNTÂRZIAT"),
        ("six.txt", "no-accent-text"),
        ("ignored.rs", "// Țară"),
        ("ignored.html", "<p>Câine</p>"),
    ]);

    let (result, out, err) = run(&root);
    let summary = result.unwrap();

    assert_eq!(summary.files_scanned, 6);
    assert_eq!(summary.files_modified, 3);
    assert_eq!(summary.files_failed, 0);
    assert!(err.is_empty());
    assert!(out.contains("- Files scanned: 6"));
    assert!(out.contains("- Files modified: 3"));
    assert!(out.trim_end().ends_with("Diacritics removed successfully!"));
    assert_eq!(
        fs::read_to_string(root.join("ignored.rs")).unwrap(),
        "// Țară"
    );
}

#[test]
fn test_second_run_modifies_nothing() {
    let (_temp_dir, root) = create_test_project(&[
        ("a.dart", "Câine și pisică"),
        ("b.txt", "Îți mulțumesc"),
    ]);

    let (first, _, _) = run(&root);
    assert_eq!(first.unwrap().files_modified, 2);

    let (second, out, _) = run(&root);
    let second = second.unwrap();
    assert_eq!(second.files_scanned, 2);
    assert_eq!(second.files_modified, 0);
    assert!(out.contains("No diacritics found in the scanned files."));
    assert_eq!(
        fs::read_to_string(root.join("b.txt")).unwrap(),
        "Iti multumesc"
    );
}

#[test]
fn test_undecodable_file_is_reported_and_skipped() {
    let latin1 = [b'C', 0xE2, b'i', b'n', b'e'];
    let (_temp_dir, root) = create_test_project(&[("fresh.txt", "Câine")]);
    fs::write(root.join("legacy.txt"), latin1).unwrap();

    let (result, _, err) = run(&root);
    let summary = result.unwrap();

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_modified, 1);
    assert_eq!(summary.files_failed, 1);
    assert!(err.contains("Error processing"));
    assert!(err.contains("legacy.txt"));
    assert_eq!(fs::read(root.join("legacy.txt")).unwrap(), latin1);
}

#[test]
fn test_missing_root_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let sibling = temp_dir.path().join("notes.md");
    fs::write(&sibling, "Țară").unwrap();

    let (result, out, err) = run(&temp_dir.path().join("lib"));

    assert!(matches!(result, Err(Error::RootMissing { .. })));
    assert!(out.is_empty());
    assert!(err.contains("does not exist"));
    assert_eq!(fs::read_to_string(&sibling).unwrap(), "Țară");
}

#[test]
fn test_root_that_is_a_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("lib");
    fs::write(&root, "Țară").unwrap();

    let (result, _, err) = run(&root);

    assert!(matches!(result, Err(Error::RootNotDirectory { .. })));
    assert!(err.contains("is not a directory"));
    assert_eq!(fs::read_to_string(&root).unwrap(), "Țară");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_counted_as_scanned() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp_dir, root) = create_test_project(&[
        ("locked.md", "Țară"),
        ("open.md", "Țară"),
    ]);
    let locked = root.join("locked.md");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits, so the locked file reads fine there
    if fs::read(&locked).is_ok() {
        return;
    }

    let (result, _, err) = run(&root);
    let summary = result.unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_modified, 1);
    assert_eq!(summary.files_failed, 1);
    assert!(err.contains("locked.md"));
    assert_eq!(fs::read_to_string(&locked).unwrap(), "Țară");
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_rewritten_through_the_link() {
    let (temp_dir, root) = create_test_project(&[]);
    let shared = temp_dir.path().join("shared");
    fs::create_dir_all(&shared).unwrap();
    fs::write(shared.join("s.md"), "Țară").unwrap();
    std::os::unix::fs::symlink(shared.join("s.md"), root.join("s.md")).unwrap();

    let (result, _, _) = run(&root);
    let summary = result.unwrap();

    assert_eq!(summary.files_modified, 1);
    assert!(fs::symlink_metadata(root.join("s.md"))
        .unwrap()
        .file_type()
        .is_symlink());
    assert_eq!(fs::read_to_string(shared.join("s.md")).unwrap(), "Tara");
}

#[cfg(unix)]
#[test]
fn test_hard_linked_file_stays_linked() {
    let (temp_dir, root) = create_test_project(&[("a.txt", "Câine")]);
    let other = temp_dir.path().join("a-copy.txt");
    fs::hard_link(root.join("a.txt"), &other).unwrap();

    let (result, _, _) = run(&root);

    assert_eq!(result.unwrap().files_modified, 1);
    assert_eq!(fs::read_to_string(&other).unwrap(), "Caine");
}
