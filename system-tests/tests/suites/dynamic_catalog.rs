// system-tests/tests/suites/dynamic_catalog.rs
// ============================================================================
// Module: Data-Driven Catalog Suite
// Description: Runtime catalogs built from the same fixture tables.
// Purpose: Verify generated and data-driven catalogs agree.
// Dependencies: system-tests, message-catalog
// ============================================================================

//! Loads `data/` tables with [`MessageCatalog`] and compares every message
//! with its generated counterpart.

use message_catalog::MessageCatalog;
use system_tests::DefaultMessageCatalog;
use system_tests::ValidationMessageCatalog;

use crate::helpers::data_path;

#[test]
fn default_catalog_agrees_with_generated_code() {
    let overrides = data_path("messages_ja.tsv");
    let dynamic = MessageCatalog::load(data_path("messages.tsv"), Some(overrides.as_path())).unwrap();
    let generated = DefaultMessageCatalog::new(Some(overrides.as_path()));
    assert_eq!(dynamic.ids(), DefaultMessageCatalog::IDS);
    assert_eq!(dynamic.name().catalog_type(), "DefaultMessageCatalog");
    for (id, item) in generated.iter() {
        let other = dynamic.get(id).unwrap();
        assert_eq!(item.text(), other.text(), "{id}");
        assert_eq!(item.category().as_str(), other.category().as_str(), "{id}");
        assert_eq!(item.severity().as_str(), other.severity().as_str(), "{id}");
        assert_eq!(item.description(), other.description(), "{id}");
    }
}

#[test]
fn validation_catalog_agrees_with_generated_code() {
    let dynamic = MessageCatalog::load(data_path("Validation_messages.tsv"), None).unwrap();
    let generated = ValidationMessageCatalog::new(None);
    for (id, item) in generated.iter() {
        let other = dynamic.get(id).unwrap();
        assert_eq!(item.text(), other.text(), "{id}");
        assert_eq!(item.severity().as_str(), other.severity().as_str(), "{id}");
    }
    let members: Vec<&str> =
        dynamic.schema().severities.members().iter().map(String::as_str).collect();
    let generated_members: Vec<&str> = system_tests::ValidationMessageSeverity::ALL
        .iter()
        .map(|member| member.as_str())
        .collect();
    assert_eq!(members, generated_members);
}
