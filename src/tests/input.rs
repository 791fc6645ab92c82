use super::{find_documents, has_extension, read_document};
use std::fs;
use std::path::{Path, PathBuf};

fn exts() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

#[test]
fn test_walks_directories_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("notes/deep")).unwrap();
    fs::write(root.join("a.md"), "# A\n").unwrap();
    fs::write(root.join("notes/b.markdown"), "# B\n").unwrap();
    fs::write(root.join("notes/deep/c.MD"), "# C\n").unwrap();
    fs::write(root.join("notes/skip.txt"), "not markdown").unwrap();

    let found = find_documents(&[root.to_path_buf()], &exts()).unwrap();
    let expected: Vec<PathBuf> = vec![
        root.join("a.md"),
        root.join("notes/b.markdown"),
        root.join("notes/deep/c.MD"),
    ];
    assert_eq!(found, expected);
}

#[test]
fn test_hidden_entries_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/HEAD.md"), "x").unwrap();
    fs::write(root.join(".draft.md"), "x").unwrap();
    fs::write(root.join("kept.md"), "x").unwrap();

    let found = find_documents(&[root.to_path_buf()], &exts()).unwrap();
    assert_eq!(found, vec![root.join("kept.md")]);
}

#[test]
fn test_explicit_files_ignore_extension_and_dedupe() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("README.txt");
    fs::write(&file, "# Readme\n").unwrap();

    let found = find_documents(&[file.clone(), file.clone()], &exts()).unwrap();
    assert_eq!(found, vec![file]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_documents(&[dir.path().join("nope.md")], &exts()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_has_extension() {
    assert!(has_extension(Path::new("x.md"), &exts()));
    assert!(has_extension(Path::new("x.Markdown"), &exts()));
    assert!(has_extension(Path::new("x.md"), &[".md".to_string()]));
    assert!(!has_extension(Path::new("x.mdx"), &exts()));
    assert!(!has_extension(Path::new("md"), &exts()));
}

#[test]
fn test_read_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, "# Title\nbody\n").unwrap();
    assert_eq!(read_document(&path).unwrap(), "# Title\nbody\n");
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_not_followed() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/a.md"), "# A\n").unwrap();
    // A link back to the root would loop forever if followed
    std::os::unix::fs::symlink(root, root.join("docs/loop")).unwrap();
    std::os::unix::fs::symlink(root.join("docs/a.md"), root.join("alias.md")).unwrap();

    let found = find_documents(&[root.to_path_buf()], &exts()).unwrap();
    assert_eq!(found, vec![root.join("alias.md"), root.join("docs/a.md")]);
}
