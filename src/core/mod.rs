//! Core business logic - framework-agnostic storefront operations.
//! The ledger module owns every balance-affecting state transition; the
//! other modules are simple keyed stores consumed by it.

/// Account registration and the request-scoped identity check
pub mod account;
/// Product catalog - read-mostly, admin-mutated
pub mod catalog;
/// Per-user shopping cart (duplicates allowed)
pub mod cart;
/// Balance & order ledger - recharges, refunds, checkout, audit trail
pub mod ledger;
/// Admin dashboard and account summaries
pub mod report;
/// Per-user wishlist (deduplicated)
pub mod wishlist;
