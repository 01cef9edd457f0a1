//! End-to-end resolution tests.
//!
//! These run the full orchestrator over the character exports in
//! `test_data/characters/` and check the assembled `ResolvedCharacter`.
//!
//! # Running E2E Tests
//!
//! ```bash
//! # Run all E2E tests
//! cargo test -p sheetforge-engine --lib e2e_tests
//!
//! # Run one test with pipeline logging
//! RUST_LOG=sheetforge_engine=debug cargo test -p sheetforge-engine --lib multiclass_caster -- --nocapture
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
