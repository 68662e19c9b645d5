// system-tests/tests/suites/validation_catalog.rs
// ============================================================================
// Module: Validation Catalog Suite
// Description: Prefixed catalog compiled from Validation_messages.tsv.
// Purpose: Verify file-name prefixes yield independent catalog types.
// Dependencies: system-tests
// ============================================================================

//! Checks `ValidationMessageCatalog` and its independent enums.

use std::path::Path;

use system_tests::ValidationMessageCatalog;
use system_tests::ValidationMessageCategory;
use system_tests::ValidationMessageSeverity;

#[test]
fn valid001_has_built_in_properties() {
    let catalog = ValidationMessageCatalog::new(Some(Path::new("Validation_messages.json")));
    let message = &catalog.VALID001;
    assert_eq!(message.text(), "Input has been validated successfully.");
    assert_eq!(*message.category(), ValidationMessageCategory::Validation);
    assert_eq!(*message.severity(), ValidationMessageSeverity::Information);
    assert_eq!(message.description(), "Shown after a successful validation");
    assert_eq!(message.to_string(), "Input has been validated successfully.");
}

#[test]
fn prefixed_catalog_has_own_enums() {
    assert_eq!(ValidationMessageCatalog::SOURCE_FILE, "Validation_messages.tsv");
    assert_eq!(
        ValidationMessageCategory::ALL,
        [ValidationMessageCategory::None, ValidationMessageCategory::Validation]
    );
    assert_eq!(ValidationMessageSeverity::ALL.len(), 4);
}

#[test]
fn formats_with_parameter() {
    let catalog = ValidationMessageCatalog::default();
    assert_eq!(catalog.VALID002.format(&[&"username"]), "Required field 'username' is missing.");
    assert_eq!(*catalog.VALID002.severity(), ValidationMessageSeverity::Error);
    assert_eq!(catalog.get("VALID003").unwrap().format(&[&"email"]), "The format of 'email' is invalid.");
}
