// crates/contact-form-config/src/warnings/tests.rs
// ============================================================================
// Module: Warning Sink Tests
// Description: Unit tests for the in-memory warning sink.
// Purpose: Ensure recorded warnings survive a panicked lock holder.
// Dependencies: contact-form-config
// ============================================================================

//! ## Overview
//! Poisons the sink's buffer from another thread and checks that earlier and
//! later warnings are all still reported.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::thread;

use super::ConfigWarning;
use super::MemoryWarningSink;
use super::WarningSink;
use crate::path::FieldPath;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn memory_sink_keeps_warnings_after_poisoned_lock() {
    let sink = Arc::new(MemoryWarningSink::new());
    sink.record(&ConfigWarning::unknown_field(FieldPath::root().key("theme")));

    let holder = Arc::clone(&sink);
    let outcome = thread::spawn(move || {
        let _guard = holder.warnings.lock().unwrap();
        panic!("poison the warning buffer");
    })
    .join();
    assert!(outcome.is_err());
    assert!(sink.warnings.is_poisoned());

    sink.record(&ConfigWarning::unknown_field(FieldPath::root().key("layout")));
    let paths: Vec<String> =
        sink.warnings().iter().map(|warning| warning.path.to_string()).collect();
    assert_eq!(paths, vec!["theme".to_string(), "layout".to_string()]);

    assert_eq!(sink.take().len(), 2);
    assert!(sink.warnings().is_empty());
}
