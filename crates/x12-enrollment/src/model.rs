//! Enrollment file model
//!
//! Coded fields hold caller input as written ("add", "spouse", "HLT") and
//! are resolved against the code sets when the document is encoded.

use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Serialization format of an enrollment file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Pick the format from a file extension
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything other than
    /// `.yaml`, `.yml` or `.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A complete enrollment: envelope, parties and members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrollmentFile {
    pub interchange: InterchangeHeader,
    #[serde(default)]
    pub group: GroupHeader,
    pub transaction: TransactionHeader,
    pub sponsor: Party,
    pub payer: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<Party>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl EnrollmentFile {
    /// Parse an enrollment from YAML
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] when the text does not match the model.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse an enrollment from JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the text does not match the model.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse an enrollment in the given format
    ///
    /// # Errors
    ///
    /// Same as [`EnrollmentFile::from_yaml`] and [`EnrollmentFile::from_json`].
    pub fn parse(text: &str, format: FileFormat) -> Result<Self> {
        match format {
            FileFormat::Yaml => Self::from_yaml(text),
            FileFormat::Json => Self::from_json(text),
        }
    }

    /// Read and parse an enrollment file, choosing the format by extension
    ///
    /// # Errors
    ///
    /// Returns an I/O, format or parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let file = Self::parse(&text, format)?;
        debug!(
            path = %path.display(),
            members = file.members.len(),
            "Loaded enrollment file"
        );
        Ok(file)
    }

    /// Append members, e.g. from a CSV roster
    pub fn extend_members(&mut self, members: impl IntoIterator<Item = Member>) {
        self.members.extend(members);
    }
}

/// ISA envelope values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterchangeHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_qualifier: Option<String>,
    pub sender_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_qualifier: Option<String>,
    pub receiver_id: String,
    pub control_number: u64,
    /// Defaults to the encoding time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Defaults to the encoding time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgment_requested: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_indicator: Option<String>,
}

/// GS envelope values; each falls back to the interchange value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_number: Option<u64>,
}

/// ST and BGN values plus transaction level references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionHeader {
    #[serde(default = "default_transaction_control")]
    pub control_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    pub reference: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_code: Option<String>,
    /// REF*38 master policy number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_policy: Option<String>,
    /// DTP*007 file effective date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_effective: Option<NaiveDate>,
}

fn default_transaction_control() -> String {
    "0001".to_string()
}

/// A party named in an N1 segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Party {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_qualifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One member (subscriber or dependent) and their coverages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Member {
    /// REF*0F, shared by a subscriber and their dependents
    pub subscriber_id: String,
    /// INS02; INS01 is derived from it
    pub relationship: String,
    #[serde(default = "default_maintenance_type")]
    pub maintenance_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_reason: Option<String>,
    #[serde(default = "default_benefit_status")]
    pub benefit_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    /// REF*1L
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_number: Option<String>,
    /// DTP*336
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// NM1*..*34 identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default)]
    pub coverages: Vec<Coverage>,
}

impl Member {
    /// Short label used in error messages and logs
    #[must_use]
    pub fn label(&self) -> String {
        match &self.first_name {
            Some(first) => format!("{} ({first} {})", self.subscriber_id, self.last_name),
            None => format!("{} ({})", self.subscriber_id, self.last_name),
        }
    }
}

pub(crate) fn default_maintenance_type() -> String {
    "add".to_string()
}

pub(crate) fn default_benefit_status() -> String {
    "active".to_string()
}

/// Member mailing address (N3/N4)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// One health coverage loop (HD with its DTP dates)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coverage {
    /// HD01; defaults to the member's maintenance type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_type: Option<String>,
    pub insurance_line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_level: Option<String>,
    /// DTP*348
    pub start: NaiveDate,
    /// DTP*349
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}
