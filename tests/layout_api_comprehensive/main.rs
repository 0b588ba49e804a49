//! Comprehensive layout API tests
//!
//! End-to-end coverage of the public store contract, grouped by concern:
//!
//! - defaults: first-access document creation
//! - install: install/merge semantics and idempotence
//! - update: patch and template rename
//! - uninstall: removal semantics
//! - validation: user id / api / template name rejection
//! - persistence: on-disk format, atomic replace, reopen, corruption
//!
//! ```text
//! # Run the whole suite
//! cargo test --test layout_api_comprehensive
//!
//! # Run one concern
//! cargo test --test layout_api_comprehensive install
//! ```


mod defaults_tests;
mod install_tests;
mod uninstall_tests;
