//! `DoveShop` - a balance-ledger storefront backend
//!
//! This crate provides the backend of a small e-commerce shop: a product
//! catalog, per-user carts and wishlists, balance-based checkout, manual
//! purchase requests with receipt upload, and an admin approval workflow for
//! balance recharges and refunds. All balance-affecting state transitions go
//! through the ledger module, which pairs every mutation with an append-only
//! audit transaction.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration management for database, shop settings, and catalog seeding
pub mod config;
/// Core business logic - accounts, catalog, cart, wishlist, ledger, reports
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Best-effort notification dispatch and message builders
pub mod notify;
/// Receipt/image blob storage with an extension allow-list
pub mod storage;

#[cfg(test)]
pub mod test_utils;
