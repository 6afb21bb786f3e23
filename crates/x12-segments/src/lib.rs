#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-segments
//!
//! Rendering of X12 segments and the 834 segment builders built on it.
//!
//! A segment is a tag followed by a fixed number of optional element slots.
//! [`SegmentRenderer`] joins them with the element separator, drops trailing
//! empty slots and appends the segment terminator. Builders resolve coded
//! fields through `x12-codes`, check required fields and lengths, and produce
//! immutable segment values that render through the same engine.
//!
//! ## Example Usage
//!
//! ```rust
//! use x12_segments::{Delimiters, SegmentRenderer};
//!
//! let renderer = SegmentRenderer::with_delimiters(Delimiters::default());
//! let line = renderer
//!     .render("N1", &[Some("01"), Some("Test Name"), Some("PB"), Some("123456")])
//!     .unwrap();
//! assert_eq!(line, "N1*01*Test Name*PB*123456~");
//! ```
//!
//! Element values are written as given. A value containing the active
//! element separator or segment terminator produces a line a receiver will
//! split differently; keeping such characters out of the data is up to the
//! caller.

/// Interchange, functional group and transaction set assembly.
pub mod document;
/// ISA/IEA, GS/GE and ST/SE envelope segments.
pub mod envelope;
/// Transaction header and name/address segments.
pub mod header;
/// Member level detail and health coverage segments.
pub mod member;
/// Segment line rendering.
pub mod renderer;
/// Required, length and format rules shared by builders.
pub mod rules;
/// The segment trait and an untyped segment.
pub mod segment;
/// Delimiter configuration.
pub mod syntax;

pub use document::{FunctionalGroup, Interchange, TransactionSet};
pub use envelope::{GeSegment, GsSegment, IeaSegment, IsaSegment, SeSegment, StSegment};
pub use header::{BgnSegment, DtpSegment, N1Segment, N3Segment, N4Segment, RefSegment};
pub use member::{HdSegment, InsSegment, Nm1Segment};
pub use renderer::{SegmentRenderer, render};
pub use segment::{GenericSegment, X12Segment};
pub use syntax::Delimiters;

use thiserror::Error;
use x12_codes::CodeError;

/// Errors that can occur when building or rendering segments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Segment {segment_id} declares no element slots")]
    EmptySegment { segment_id: String },

    #[error("No delimiters configured for rendering segment {segment_id}")]
    NoContext { segment_id: String },

    #[error("{segment}: required field {field} is missing")]
    RequiredFieldMissing { segment: String, field: String },

    #[error("{segment}: field {field} has length {length}, expected {min} to {max}")]
    InvalidLength {
        segment: String,
        field: String,
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("{segment}: field {field} {message}")]
    InvalidValue {
        segment: String,
        field: String,
        message: String,
    },

    #[error("Invalid delimiters: {0}")]
    InvalidDelimiters(String),

    #[error("Envelope error: {0}")]
    Envelope(String),

    #[error(transparent)]
    Code(#[from] CodeError),
}

impl Error {
    /// Build a missing-field error.
    pub fn required(segment: impl Into<String>, field: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            segment: segment.into(),
            field: field.into(),
        }
    }

    /// Build a length error with the accepted bounds.
    pub fn length(
        segment: impl Into<String>,
        field: impl Into<String>,
        length: usize,
        min: usize,
        max: usize,
    ) -> Self {
        Self::InvalidLength {
            segment: segment.into(),
            field: field.into(),
            length,
            min,
            max,
        }
    }

    /// Build an invalid-value error.
    pub fn invalid(
        segment: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            segment: segment.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Crate-local result type for segment operations.
pub type Result<T> = std::result::Result<T, Error>;
