#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-codes
//!
//! Code sets of the X12 834 benefit enrollment transaction and fuzzy
//! resolution of caller input against them.
//!
//! Every code set is a closed list of [`CodeEntry`] values plus a table of
//! synonyms. [`CodeSet::resolve`] accepts the code itself, the symbolic
//! member name, the description from the standard, or a curated alias, in
//! any case and with surrounding whitespace, and returns exactly one entry.
//!
//! ## Example Usage
//!
//! ```rust
//! use x12_codes::tables::ACKNOWLEDGMENT_REQUESTED;
//!
//! let entry = ACKNOWLEDGMENT_REQUESTED.resolve("  TA1 ").unwrap();
//! assert_eq!(entry.code, "1");
//!
//! let err = ACKNOWLEDGMENT_REQUESTED.resolve("maybe").unwrap_err();
//! assert!(err.to_string().contains("Acknowledgment Requested"));
//! ```

/// Code entry and code set lookup.
pub mod lookup;
/// Name-addressable registry of every shipped code set.
pub mod registry;
/// Static 834 code tables.
pub mod tables;

pub use lookup::{CodeEntry, CodeSet};
pub use registry::{CodeSetRegistry, registry};

use thiserror::Error;

/// Errors raised when resolving input against a code set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("{code_set}: a value is required")]
    InvalidInput { code_set: String },

    #[error("{code_set}: no code matches '{input}'")]
    NotFound { code_set: String, input: String },

    #[error("Unknown code set: {0}")]
    UnknownCodeSet(String),
}

impl CodeError {
    /// Build an invalid-input error for a code set.
    pub fn invalid_input(code_set: impl Into<String>) -> Self {
        Self::InvalidInput {
            code_set: code_set.into(),
        }
    }

    /// Build a not-found error carrying the offending input.
    pub fn not_found(code_set: impl Into<String>, input: impl Into<String>) -> Self {
        Self::NotFound {
            code_set: code_set.into(),
            input: input.into(),
        }
    }
}

/// Crate-local result type for code resolution.
pub type Result<T> = std::result::Result<T, CodeError>;

/// Build every shipped code set.
///
/// Code sets are otherwise constructed on first use. Calling this once at
/// startup finishes construction before any concurrent readers exist.
pub fn init() -> &'static CodeSetRegistry {
    registry()
}
