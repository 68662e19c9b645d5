// system-tests/tests/catalogs.rs
// ============================================================================
// Module: Catalog Suite
// Description: Aggregates generated-catalog system tests into one binary.
// Purpose: Keep end-to-end catalog coverage centralized.
// Dependencies: suites/*, helpers
// ============================================================================

//! ## Overview
//! Aggregates the end-to-end catalog suites.
//! Invariants:
//! - Catalogs are compiled by the build script from `data/`.
//! - Override tables are read from `data/` by absolute path.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

mod helpers;

#[path = "suites/default_catalog.rs"]
mod default_catalog;
#[path = "suites/dynamic_catalog.rs"]
mod dynamic_catalog;
#[path = "suites/runtime_overrides.rs"]
mod runtime_overrides;
#[path = "suites/validation_catalog.rs"]
mod validation_catalog;
