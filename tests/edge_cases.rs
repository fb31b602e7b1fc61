//! Edge case and error handling tests for aliasfix


use harness::{TestTree, run_aliasfix};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

/// Whether permission bits are enforced for this process (they are not for root).
fn permissions_enforced(path: &std::path::Path) -> bool {
    fs::OpenOptions::new().write(true).open(path).is_err()
}

// ============================================================================
// Per-file failures
// ============================================================================

#[test]
#[cfg(unix)]
fn test_write_failure_does_not_stop_run() {
    let tree = TestTree::new();
    let locked = tree.add_source("a/locked.ts", "import l from '../l';\n");
    tree.add_source("b/open.ts", "import o from '../o';\n");

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o444);
    fs::set_permissions(&locked, perms).expect("Failed to set permissions");

    if !permissions_enforced(&locked) {
        return;
    }

    let (stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o644);
    fs::set_permissions(&locked, perms).expect("Failed to restore permissions");

    assert!(!success, "a failed file should make the exit status non-zero");
    assert!(
        stdout.contains("Error processing src/a/locked.ts"),
        "should report the failing file: {}",
        stdout
    );
    assert!(stdout.contains("Fixed: src/b/open.ts"), "{}", stdout);
    assert!(stdout.contains("(1 failed)"), "{}", stdout);
    assert_eq!(tree.read_source("a/locked.ts"), "import l from '../l';\n");
    assert_eq!(tree.read_source("b/open.ts"), "import o from '@/o';\n");
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory_skipped() {
    let tree = TestTree::new();
    tree.add_source("readable/file.ts", "import r from '../r';\n");
    let hidden = tree.add_source("unreadable/file.ts", "import h from '../h';\n");
    let unreadable = hidden.parent().unwrap().to_path_buf();

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");
    let enforced = fs::read_dir(&unreadable).is_err();

    let (stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "scan-time errors are not failures: {}", stdout);
    assert!(stdout.contains("Fixed: src/readable/file.ts"), "{}", stdout);
    if enforced {
        assert!(!stdout.contains("unreadable"), "{}", stdout);
    }
}

// ============================================================================
// Encoding and content edge cases
// ============================================================================

#[test]
fn test_invalid_utf8_not_a_candidate() {
    let tree = TestTree::new();
    let path = tree.src().join("binary.ts");
    let mut bytes = b"import x from '../x';".to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    fs::write(&path, &bytes).unwrap();

    let (stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("Found 0 files"), "{}", stdout);
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_crlf_and_unicode_preserved() {
    let tree = TestTree::new();
    tree.add_source(
        "i18n/fr/strings.ts",
        "// Chaînes 🇫🇷\r\nimport { t } from '../../core/t';\r\nexport const s = t('é');\r\n",
    );

    let (_stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree.read_source("i18n/fr/strings.ts"),
        "// Chaînes 🇫🇷\r\nimport { t } from '@/core/t';\r\nexport const s = t('é');\r\n"
    );
}

#[test]
fn test_empty_source_root() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("Found 0 files"));
    assert!(stdout.contains("Summary: Fixed 0 files out of 0 total"));
}

#[test]
fn test_root_is_a_file() {
    let tree = TestTree::new();
    tree.add_file("not_a_dir.ts", "");
    let (_stdout, stderr, success) = run_aliasfix(tree.path(), &["not_a_dir.ts"]);
    assert!(!success);
    assert!(stderr.contains("aliasfix: cannot access"), "{}", stderr);
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_symlinked_directory_not_followed() {
    let tree = TestTree::new();
    tree.add_file("outside/lib/ext.ts", "import e from '../e';\n");
    symlink(tree.path().join("outside"), tree.src().join("linked"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("Found 0 files"), "{}", stdout);
    let content = fs::read_to_string(tree.path().join("outside/lib/ext.ts")).unwrap();
    assert_eq!(content, "import e from '../e';\n");
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_source("sub/file.ts", "import f from '../f';\n");
    symlink("..", tree.src().join("sub").join("parent")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);
    assert!(success, "aliasfix should not hang on parent symlink");
    assert!(stdout.contains("Fixed 1 files out of 1 total"), "{}", stdout);
}

// ============================================================================
// Walk filters
// ============================================================================

#[test]
fn test_ignore_pattern_flag() {
    let tree = TestTree::new();
    let generated = "import g from '../g';\n";
    tree.add_source("__generated__/api.ts", generated);
    tree.add_source("app/main.ts", "import m from '../m';\n");

    let (_stdout, _stderr, success) = run_aliasfix(tree.path(), &["-I", "__generated__"]);
    assert!(success);
    assert_eq!(tree.read_source("__generated__/api.ts"), generated);
    assert_eq!(tree.read_source("app/main.ts"), "import m from '@/m';\n");
}

#[test]
fn test_gitignore_flag() {
    let tree = TestTree::new();
    let vendored = "import v from '../v';\n";
    tree.add_source(".gitignore", "vendor/\n");
    tree.add_source("vendor/lib.js", vendored);
    tree.add_source("app/main.js", "import m from '../m';\n");

    let (_stdout, _stderr, success) = run_aliasfix(tree.path(), &[]);
    assert!(success);
    assert_eq!(tree.read_source("vendor/lib.js"), "import v from '@/v';\n");

    tree.add_source("vendor/lib.js", vendored);
    let (stdout, _stderr, success) = run_aliasfix(tree.path(), &["--gitignore"]);
    assert!(success);
    assert!(stdout.contains("Found 0 files"), "{}", stdout);
    assert_eq!(tree.read_source("vendor/lib.js"), vendored);
}
