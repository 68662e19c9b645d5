// system-tests/tests/suites/default_catalog.rs
// ============================================================================
// Module: Default Catalog Suite
// Description: Built-in text and metadata of the generated default catalog.
// Purpose: Verify the catalog compiled from messages.tsv without overrides.
// Dependencies: system-tests, message-catalog
// ============================================================================

//! Checks `DefaultMessageCatalog` against `data/messages.tsv`.

use std::path::Path;

use message_catalog::format_message;
use system_tests::DefaultMessageCatalog;
use system_tests::DefaultMessageCategory;
use system_tests::DefaultMessageSeverity;
use system_tests::PlainMessageCatalog;
use system_tests::PlainMessageCategory;

fn catalog() -> DefaultMessageCatalog {
    DefaultMessageCatalog::new(Some(Path::new("does-not-exist/messages.tsv")))
}

#[test]
fn has_one_field_per_row_in_order() {
    assert_eq!(DefaultMessageCatalog::IDS, ["TEST001", "TEST002", "TEST003"]);
    assert_eq!(DefaultMessageCatalog::SOURCE_FILE, "messages.tsv");
    let catalog = catalog();
    let ids: Vec<&str> = catalog.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, DefaultMessageCatalog::IDS);
}

#[test]
fn test001_has_built_in_properties() {
    let message = &catalog().TEST001;
    assert_eq!(message.text(), "Test message 1");
    assert_eq!(*message.category(), DefaultMessageCategory::Test);
    assert_eq!(*message.severity(), DefaultMessageSeverity::Information);
    assert_eq!(message.description(), "Test message for testing 1");
    assert_eq!(message.to_string(), "Test message 1");
}

#[test]
fn test002_formats_with_parameter() {
    let catalog = catalog();
    assert_eq!(catalog.TEST002.format(&[&"testValue"]), "Test for parameter 'testValue'");
    assert_eq!(format_message!(catalog.TEST002, "value1"), "Test for parameter 'value1'");
    assert_eq!(*catalog.TEST002.category(), DefaultMessageCategory::Test);
    assert_eq!(*catalog.TEST002.severity(), DefaultMessageSeverity::Warning);
}

#[test]
fn test003_has_empty_description() {
    let message = &catalog().TEST003;
    assert_eq!(message.text(), "Error test");
    assert_eq!(*message.severity(), DefaultMessageSeverity::Error);
    assert_eq!(message.description(), "");
}

#[test]
fn severities_match_table() {
    let catalog = catalog();
    for (id, expected) in [
        ("TEST001", DefaultMessageSeverity::Information),
        ("TEST002", DefaultMessageSeverity::Warning),
        ("TEST003", DefaultMessageSeverity::Error),
    ] {
        assert_eq!(*catalog.get(id).unwrap().severity(), expected, "{id}");
    }
    assert!(catalog.get("TEST004").is_none());
}

#[test]
fn enums_are_sorted_after_none() {
    assert_eq!(DefaultMessageCategory::ALL, [DefaultMessageCategory::None, DefaultMessageCategory::Test]);
    assert_eq!(
        DefaultMessageSeverity::ALL,
        [
            DefaultMessageSeverity::None,
            DefaultMessageSeverity::Error,
            DefaultMessageSeverity::Information,
            DefaultMessageSeverity::Warning,
        ]
    );
    assert_eq!(DefaultMessageSeverity::default(), DefaultMessageSeverity::None);
    assert!(DefaultMessageSeverity::Error < DefaultMessageSeverity::Warning);
    assert_eq!(DefaultMessageSeverity::Warning.as_str(), "Warning");
    assert_eq!(format!("[{:>8}]", DefaultMessageSeverity::Error), "[   Error]");
}

#[test]
fn default_and_new_without_path_use_built_in_text() {
    let defaulted = DefaultMessageCatalog::default();
    let unset = DefaultMessageCatalog::new(None);
    for ((id, left), (_, right)) in defaulted.iter().zip(unset.iter()) {
        assert_eq!(left.text(), right.text(), "{id}");
        assert!(!left.is_overridden(), "{id}");
    }
}

#[test]
fn plain_table_has_none_only_enums() {
    let catalog = PlainMessageCatalog::default();
    assert_eq!(PlainMessageCategory::ALL, [PlainMessageCategory::None]);
    assert_eq!(*catalog.PLAIN001.category(), PlainMessageCategory::None);
    assert_eq!(catalog.PLAIN001.severity().as_str(), "None");
    assert_eq!(
        format_message!(catalog.PLAIN002, "ab", 7),
        "[ab    ] [   7] {literal}"
    );
}

#[test]
fn catalogs_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultMessageCatalog>();
    let catalog = std::sync::Arc::new(catalog());
    let worker = {
        let catalog = std::sync::Arc::clone(&catalog);
        std::thread::spawn(move || catalog.TEST001.text().to_string())
    };
    assert_eq!(worker.join().unwrap(), catalog.TEST001.text());
}
