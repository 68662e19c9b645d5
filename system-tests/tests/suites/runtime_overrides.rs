// system-tests/tests/suites/runtime_overrides.rs
// ============================================================================
// Module: Runtime Override Suite
// Description: Localized override tables applied to generated catalogs.
// Purpose: Verify override precedence, fail-open loading, and fixed metadata.
// Dependencies: system-tests, message-catalog, tempfile
// ============================================================================

//! Applies `data/*_ja.tsv` to the generated catalogs.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use message_catalog::OverrideTable;
use system_tests::DefaultMessageCatalog;
use system_tests::ValidationMessageCatalog;
use tempfile::tempdir;

use crate::helpers::data_path;

fn japanese() -> DefaultMessageCatalog {
    DefaultMessageCatalog::new(Some(data_path("messages_ja.tsv").as_path()))
}

#[test]
fn japanese_table_overrides_text() {
    let catalog = japanese();
    assert_eq!(catalog.TEST001.text(), "テストメッセージ1");
    assert_eq!(catalog.TEST002.text(), "パラメーター '{0}' のテスト");
    assert_eq!(catalog.TEST003.text(), "エラーテスト");
    assert_eq!(catalog.TEST001.to_string(), "テストメッセージ1");
    assert!(catalog.TEST001.is_overridden());
}

#[test]
fn japanese_table_formats_correctly() {
    assert_eq!(japanese().TEST002.format(&[&"テスト値"]), "パラメーター 'テスト値' のテスト");
}

#[test]
fn validation_japanese_table_overrides_text() {
    let catalog = ValidationMessageCatalog::new(Some(data_path("Validation_messages_ja.tsv").as_path()));
    assert_eq!(catalog.VALID001.text(), "入力値が正しく検証されました。");
    assert_eq!(catalog.VALID002.format(&[&"ユーザー名"]), "必須項目 'ユーザー名' が入力されていません。");
    assert_eq!(catalog.VALID003.text(), "'{0}' の形式が正しくありません。");
}

#[test]
fn missing_override_file_falls_back_to_built_in_text() {
    let catalog = DefaultMessageCatalog::new(Some(Path::new("NonExistent.tsv")));
    assert_eq!(catalog.TEST001.text(), "Test message 1");
    assert!(!catalog.TEST001.is_overridden());
    let catalog = DefaultMessageCatalog::for_locale("xx");
    assert_eq!(catalog.TEST002.format(&[&"v"]), "Test for parameter 'v'");
}

#[test]
fn metadata_does_not_change_with_language() {
    let english = DefaultMessageCatalog::new(Some(Path::new("NonExistent.tsv")));
    let japanese = japanese();
    for ((id, left), (_, right)) in english.iter().zip(japanese.iter()) {
        assert_ne!(left.text(), right.text(), "{id}");
        assert_eq!(left.category(), right.category(), "{id}");
        assert_eq!(left.severity(), right.severity(), "{id}");
        assert_eq!(left.description(), right.description(), "{id}");
    }
}

#[test]
fn partial_and_malformed_override_tables() {
    let dir = tempdir().unwrap();
    let partial = dir.path().join("partial.tsv");
    fs::write(&partial, "Id\tText\nTEST002\tOnly {0}\nTEST003\t\nUNKNOWN\tignored\n").unwrap();
    let catalog = DefaultMessageCatalog::new(Some(partial.as_path()));
    assert_eq!(catalog.TEST001.text(), "Test message 1");
    assert_eq!(catalog.TEST002.format(&[&"this"]), "Only this");
    assert_eq!(catalog.TEST003.text(), "Error test");

    let malformed = dir.path().join("malformed.tsv");
    fs::write(&malformed, "Key\tValue\nTEST001\tx\n").unwrap();
    let catalog = DefaultMessageCatalog::new(Some(malformed.as_path()));
    assert_eq!(catalog.TEST001.text(), "Test message 1");
}

#[test]
fn preloaded_table_is_shared_by_every_item() {
    let table: OverrideTable =
        [("TEST001".to_string(), "Shared".to_string())].into_iter().collect();
    let shared = Some(Arc::new(table));
    let catalog = DefaultMessageCatalog::with_overrides(shared.clone());
    assert_eq!(catalog.TEST001.text(), "Shared");
    let handle = catalog.TEST003.overrides().unwrap();
    assert!(Arc::ptr_eq(handle, shared.as_ref().unwrap()));
}
