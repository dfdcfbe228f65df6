//! Unified error types for the storefront.
//!
//! One `thiserror` enum covers the whole crate. Recoverable business
//! conditions (`InsufficientBalance`, `EmptyCart`, `AlreadyProcessed`) get
//! their own variants so callers can redirect users to a remediation flow
//! instead of rendering a fatal error.

use thiserror::Error;

/// All errors produced by the storefront crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// User-correctable input problem (empty fields, out-of-range values)
    #[error("Validation error: {message}")]
    Validation {
        /// What to fix, shown inline to the user
        message: String,
    },

    /// Amount is zero or negative where a positive amount is required
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// No user row for the given id
    #[error("User not found: {id}")]
    UserNotFound {
        /// The missing user id
        id: i64,
    },

    /// No product row for the given id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The missing product id
        id: i64,
    },

    /// No recharge/refund request row for the given id
    #[error("Request not found: {id}")]
    RequestNotFound {
        /// The missing request id
        id: i64,
    },

    /// No order row for the given id
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// The missing order id
        id: i64,
    },

    /// Idempotency guard: the request already left the pending state
    #[error("Request {id} has already been processed")]
    AlreadyProcessed {
        /// The terminal request id
        id: i64,
    },

    /// Balance does not cover the attempted debit; no state was changed
    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance {
        /// Current balance
        balance: i64,
        /// Amount the operation needed
        required: i64,
    },

    /// Checkout was attempted against an empty cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Registration with a username that already exists
    #[error("Username already taken: {username}")]
    UsernameTaken {
        /// The conflicting username
        username: String,
    },

    /// Operation requires the admin flag on the caller's identity
    #[error("Admin privileges required")]
    AdminRequired,

    /// Upload with a file extension outside the allow-list
    #[error("Unsupported file type: {name}")]
    UnsupportedFileType {
        /// The rejected file name
        name: String,
    },

    /// Underlying persistence failure - fatal, aborts the request
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (blob storage, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
