#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-enrollment
//!
//! Benefit enrollment data and its encoding as an X12 834 interchange.
//!
//! An [`EnrollmentFile`] describes the envelope, the sponsor and payer and
//! the members with their coverages. It is read from YAML or JSON; members
//! can also be imported from a CSV roster with one row per coverage.
//! [`Encoder`] turns the model into typed segments and renders the document.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use x12_enrollment::{EnrollmentFile, Encoder};
//! use x12_segments::Delimiters;
//!
//! let yaml = r#"
//! interchange:
//!   sender_id: ACME
//!   receiver_id: HEALTHPLAN
//!   control_number: 1
//! transaction:
//!   reference: "0001"
//!   action: update
//! sponsor:
//!   name: Acme Corp
//! payer:
//!   name: Good Health Plan
//! members:
//!   - subscriber_id: "SUB001"
//!     relationship: self
//!     last_name: Doe
//!     coverages:
//!       - insurance_line: health
//!         start: 2024-02-01
//! "#;
//!
//! let file = EnrollmentFile::from_yaml(yaml).unwrap();
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let text = Encoder::new(Delimiters::default())
//!     .with_timestamp(now)
//!     .encode(&file)
//!     .unwrap();
//! assert!(text.contains("~INS*Y*18*021**A~"));
//! ```

/// Enrollment model to interchange encoding.
pub mod encode;
/// Serde model of an enrollment file.
pub mod model;
/// CSV roster import.
pub mod roster;

pub use encode::Encoder;
pub use model::{
    Address, Coverage, EnrollmentFile, FileFormat, GroupHeader, InterchangeHeader, Member, Party,
    TransactionHeader,
};
pub use roster::{load_roster, parse_roster};

use thiserror::Error;

/// Errors that can occur when loading or encoding enrollment data
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Segment(#[from] x12_segments::Error),

    #[error("Member {member}: {source}")]
    Member {
        member: String,
        source: x12_segments::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster line {line}: {message}")]
    Roster { line: u64, message: String },

    #[error("Unsupported enrollment file format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Build a roster error at a CSV line.
    pub fn roster(line: u64, message: impl Into<String>) -> Self {
        Self::Roster {
            line,
            message: message.into(),
        }
    }
}

/// Crate-local result type for enrollment operations.
pub type Result<T> = std::result::Result<T, Error>;
