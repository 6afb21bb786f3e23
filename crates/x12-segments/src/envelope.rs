//! X12 envelope segments (ISA/IEA, GS/GE, ST/SE)
//!
//! Headers are produced by builders. Trailers carry counts that are only
//! known once the enclosed segments are assembled, so they are created by
//! [`crate::document`] from the finished contents.

use crate::rules::{
    check_length, check_numeric, check_single_char, format_ccyymmdd, format_hhmm, format_yymmdd,
    pad_right, require, require_text, zero_pad,
};
use crate::segment::X12Segment;
use crate::syntax::Delimiters;
use crate::Result;
use chrono::{NaiveDate, NaiveTime};
use x12_codes::tables::{
    ACCREDITED_STANDARDS_COMMITTEE_X12, ACKNOWLEDGMENT_REQUESTED,
    AUTHORIZATION_INFORMATION_QUALIFIER, BENEFIT_ENROLLMENT_GROUP,
    BENEFIT_ENROLLMENT_TRANSACTION, FUNCTIONAL_IDENTIFIER_CODE, INTERCHANGE_ID_QUALIFIER,
    MUTUALLY_DEFINED_INTERCHANGE_ID, NO_ACKNOWLEDGMENT, NO_AUTHORIZATION_INFORMATION,
    NO_SECURITY_INFORMATION, PRODUCTION_DATA, RESPONSIBLE_AGENCY_CODE,
    SECURITY_INFORMATION_QUALIFIER, TRANSACTION_SET_IDENTIFIER_CODE, USAGE_INDICATOR,
};
use x12_codes::CodeEntry;

/// Interchange control version number for 005010
pub const INTERCHANGE_VERSION: &str = "00501";
/// Implementation guide for 834 benefit enrollment
pub const IMPLEMENTATION_GUIDE_834: &str = "005010X220A1";

// ============================================================================
// ISA - Interchange Control Header
// ============================================================================

/// ISA - Interchange Control Header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsaSegment {
    authorization_qualifier: CodeEntry,
    authorization_information: String,
    security_qualifier: CodeEntry,
    security_information: String,
    sender_qualifier: CodeEntry,
    sender_id: String,
    receiver_qualifier: CodeEntry,
    receiver_id: String,
    date: String,
    time: String,
    repetition_separator: String,
    version: String,
    control_number: String,
    acknowledgment_requested: CodeEntry,
    usage_indicator: CodeEntry,
    component_separator: String,
}

impl IsaSegment {
    pub const ID: &'static str = "ISA";
    pub const ELEMENT_COUNT: usize = 16;

    /// Start building an ISA segment
    #[must_use]
    pub fn builder() -> IsaBuilder {
        IsaBuilder::default()
    }

    /// Interchange control number (ISA13), zero-padded to 9 digits
    #[must_use]
    pub fn control_number(&self) -> &str {
        &self.control_number
    }

    /// Repetition separator announced in ISA11
    #[must_use]
    pub fn repetition_separator(&self) -> &str {
        &self.repetition_separator
    }

    /// Component separator announced in ISA16
    #[must_use]
    pub fn component_separator(&self) -> &str {
        &self.component_separator
    }

    /// Usage indicator (ISA15)
    #[must_use]
    pub fn usage_indicator(&self) -> CodeEntry {
        self.usage_indicator
    }

    /// Sender ID (ISA06) including its padding
    #[must_use]
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }
}

impl X12Segment for IsaSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.authorization_qualifier.code),
            Some(&self.authorization_information),
            Some(self.security_qualifier.code),
            Some(&self.security_information),
            Some(self.sender_qualifier.code),
            Some(&self.sender_id),
            Some(self.receiver_qualifier.code),
            Some(&self.receiver_id),
            Some(&self.date),
            Some(&self.time),
            Some(&self.repetition_separator),
            Some(&self.version),
            Some(&self.control_number),
            Some(self.acknowledgment_requested.code),
            Some(self.usage_indicator.code),
            Some(&self.component_separator),
        ]
    }
}

/// Builder for [`IsaSegment`]
#[derive(Debug, Clone, Default)]
pub struct IsaBuilder {
    authorization_qualifier: Option<CodeEntry>,
    authorization_information: Option<String>,
    security_qualifier: Option<CodeEntry>,
    security_information: Option<String>,
    sender_qualifier: Option<CodeEntry>,
    sender_id: Option<String>,
    receiver_qualifier: Option<CodeEntry>,
    receiver_id: Option<String>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    repetition_separator: Option<String>,
    version: Option<String>,
    control_number: Option<u64>,
    acknowledgment_requested: Option<CodeEntry>,
    usage_indicator: Option<CodeEntry>,
    component_separator: Option<String>,
}

impl IsaBuilder {
    /// Set ISA01 (default "00")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no authorization qualifier.
    pub fn authorization_qualifier(mut self, input: &str) -> Result<Self> {
        self.authorization_qualifier = Some(*AUTHORIZATION_INFORMATION_QUALIFIER.resolve(input)?);
        Ok(self)
    }

    /// Set ISA02, padded to 10 characters (default blank)
    #[must_use]
    pub fn authorization_information(mut self, value: impl Into<String>) -> Self {
        self.authorization_information = Some(value.into());
        self
    }

    /// Set ISA03 (default "00")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no security qualifier.
    pub fn security_qualifier(mut self, input: &str) -> Result<Self> {
        self.security_qualifier = Some(*SECURITY_INFORMATION_QUALIFIER.resolve(input)?);
        Ok(self)
    }

    /// Set ISA04, padded to 10 characters (default blank)
    #[must_use]
    pub fn security_information(mut self, value: impl Into<String>) -> Self {
        self.security_information = Some(value.into());
        self
    }

    /// Set ISA05 (default "ZZ")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no interchange ID qualifier.
    pub fn sender_qualifier(mut self, input: &str) -> Result<Self> {
        self.sender_qualifier = Some(*INTERCHANGE_ID_QUALIFIER.resolve(input)?);
        Ok(self)
    }

    /// Set ISA06, padded to 15 characters
    #[must_use]
    pub fn sender_id(mut self, value: impl Into<String>) -> Self {
        self.sender_id = Some(value.into());
        self
    }

    /// Set ISA07 (default "ZZ")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no interchange ID qualifier.
    pub fn receiver_qualifier(mut self, input: &str) -> Result<Self> {
        self.receiver_qualifier = Some(*INTERCHANGE_ID_QUALIFIER.resolve(input)?);
        Ok(self)
    }

    /// Set ISA08, padded to 15 characters
    #[must_use]
    pub fn receiver_id(mut self, value: impl Into<String>) -> Self {
        self.receiver_id = Some(value.into());
        self
    }

    /// Set ISA09
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set ISA10
    #[must_use]
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set ISA11 and ISA16 from the document delimiters
    #[must_use]
    pub fn delimiters(mut self, delimiters: &Delimiters) -> Self {
        self.repetition_separator = Some(delimiters.repetition.to_string());
        self.component_separator = Some(delimiters.component.to_string());
        self
    }

    /// Set ISA11
    #[must_use]
    pub fn repetition_separator(mut self, value: impl Into<String>) -> Self {
        self.repetition_separator = Some(value.into());
        self
    }

    /// Set ISA12 (default "00501")
    #[must_use]
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    /// Set ISA13
    #[must_use]
    pub fn control_number(mut self, number: u64) -> Self {
        self.control_number = Some(number);
        self
    }

    /// Set ISA14 (default "0")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no acknowledgment code.
    pub fn acknowledgment_requested(mut self, input: &str) -> Result<Self> {
        self.acknowledgment_requested = Some(*ACKNOWLEDGMENT_REQUESTED.resolve(input)?);
        Ok(self)
    }

    /// Set ISA15 (default "P")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no usage indicator.
    pub fn usage_indicator(mut self, input: &str) -> Result<Self> {
        self.usage_indicator = Some(*USAGE_INDICATOR.resolve(input)?);
        Ok(self)
    }

    /// Set ISA16
    #[must_use]
    pub fn component_separator(mut self, value: impl Into<String>) -> Self {
        self.component_separator = Some(value.into());
        self
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when a required field is missing or a field does not
    /// fit its fixed width.
    pub fn build(self) -> Result<IsaSegment> {
        const ID: &str = IsaSegment::ID;

        let sender_id = require_text(ID, "ISA06", self.sender_id)?;
        let receiver_id = require_text(ID, "ISA08", self.receiver_id)?;
        let date = require(ID, "ISA09", self.date)?;
        let time = require(ID, "ISA10", self.time)?;
        let repetition_separator = require(ID, "ISA11", self.repetition_separator)?;
        let control_number = require(ID, "ISA13", self.control_number)?;
        let component_separator = require(ID, "ISA16", self.component_separator)?;
        let version = self
            .version
            .unwrap_or_else(|| INTERCHANGE_VERSION.to_string());

        check_single_char(ID, "ISA11", &repetition_separator)?;
        check_numeric(ID, "ISA12", &version, 5, 5)?;
        check_single_char(ID, "ISA16", &component_separator)?;

        Ok(IsaSegment {
            authorization_qualifier: self
                .authorization_qualifier
                .unwrap_or(NO_AUTHORIZATION_INFORMATION),
            authorization_information: pad_right(
                ID,
                "ISA02",
                self.authorization_information.as_deref().unwrap_or_default(),
                10,
            )?,
            security_qualifier: self.security_qualifier.unwrap_or(NO_SECURITY_INFORMATION),
            security_information: pad_right(
                ID,
                "ISA04",
                self.security_information.as_deref().unwrap_or_default(),
                10,
            )?,
            sender_qualifier: self
                .sender_qualifier
                .unwrap_or(MUTUALLY_DEFINED_INTERCHANGE_ID),
            sender_id: pad_right(ID, "ISA06", &sender_id, 15)?,
            receiver_qualifier: self
                .receiver_qualifier
                .unwrap_or(MUTUALLY_DEFINED_INTERCHANGE_ID),
            receiver_id: pad_right(ID, "ISA08", &receiver_id, 15)?,
            date: format_yymmdd(date),
            time: format_hhmm(time),
            repetition_separator,
            version,
            control_number: zero_pad(ID, "ISA13", control_number, 9)?,
            acknowledgment_requested: self.acknowledgment_requested.unwrap_or(NO_ACKNOWLEDGMENT),
            usage_indicator: self.usage_indicator.unwrap_or(PRODUCTION_DATA),
            component_separator,
        })
    }
}

// ============================================================================
// IEA - Interchange Control Trailer
// ============================================================================

/// IEA - Interchange Control Trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IeaSegment {
    group_count: String,
    control_number: String,
}

impl IeaSegment {
    pub const ID: &'static str = "IEA";
    pub const ELEMENT_COUNT: usize = 2;

    /// Create a trailer for `group_count` functional groups
    #[must_use]
    pub fn new(group_count: usize, control_number: impl Into<String>) -> Self {
        Self {
            group_count: group_count.to_string(),
            control_number: control_number.into(),
        }
    }

    /// IEA02, must equal ISA13
    #[must_use]
    pub fn control_number(&self) -> &str {
        &self.control_number
    }

    /// IEA01
    #[must_use]
    pub fn group_count(&self) -> &str {
        &self.group_count
    }
}

impl X12Segment for IeaSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![Some(&self.group_count), Some(&self.control_number)]
    }
}

// ============================================================================
// GS - Functional Group Header
// ============================================================================

/// GS - Functional Group Header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsSegment {
    functional_id: CodeEntry,
    sender_code: String,
    receiver_code: String,
    date: String,
    time: String,
    control_number: String,
    agency: CodeEntry,
    version: String,
}

impl GsSegment {
    pub const ID: &'static str = "GS";
    pub const ELEMENT_COUNT: usize = 8;

    /// Start building a GS segment
    #[must_use]
    pub fn builder() -> GsBuilder {
        GsBuilder::default()
    }

    /// Group control number (GS06)
    #[must_use]
    pub fn control_number(&self) -> &str {
        &self.control_number
    }
}

impl X12Segment for GsSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.functional_id.code),
            Some(&self.sender_code),
            Some(&self.receiver_code),
            Some(&self.date),
            Some(&self.time),
            Some(&self.control_number),
            Some(self.agency.code),
            Some(&self.version),
        ]
    }
}

/// Builder for [`GsSegment`]
#[derive(Debug, Clone, Default)]
pub struct GsBuilder {
    functional_id: Option<CodeEntry>,
    sender_code: Option<String>,
    receiver_code: Option<String>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    control_number: Option<u64>,
    agency: Option<CodeEntry>,
    version: Option<String>,
}

impl GsBuilder {
    /// Set GS01 (default "BE")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no functional identifier.
    pub fn functional_id(mut self, input: &str) -> Result<Self> {
        self.functional_id = Some(*FUNCTIONAL_IDENTIFIER_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set GS02
    #[must_use]
    pub fn sender_code(mut self, value: impl Into<String>) -> Self {
        self.sender_code = Some(value.into());
        self
    }

    /// Set GS03
    #[must_use]
    pub fn receiver_code(mut self, value: impl Into<String>) -> Self {
        self.receiver_code = Some(value.into());
        self
    }

    /// Set GS04
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set GS05
    #[must_use]
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set GS06
    #[must_use]
    pub fn control_number(mut self, number: u64) -> Self {
        self.control_number = Some(number);
        self
    }

    /// Set GS07 (default "X")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no responsible agency.
    pub fn agency(mut self, input: &str) -> Result<Self> {
        self.agency = Some(*RESPONSIBLE_AGENCY_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set GS08 (default "005010X220A1")
    #[must_use]
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when a required field is missing or out of bounds.
    pub fn build(self) -> Result<GsSegment> {
        const ID: &str = GsSegment::ID;

        let sender_code = require_text(ID, "GS02", self.sender_code)?;
        let receiver_code = require_text(ID, "GS03", self.receiver_code)?;
        let date = require(ID, "GS04", self.date)?;
        let time = require(ID, "GS05", self.time)?;
        let control_number = require(ID, "GS06", self.control_number)?.to_string();
        let version = self
            .version
            .unwrap_or_else(|| IMPLEMENTATION_GUIDE_834.to_string());

        check_length(ID, "GS02", &sender_code, 2, 15)?;
        check_length(ID, "GS03", &receiver_code, 2, 15)?;
        check_numeric(ID, "GS06", &control_number, 1, 9)?;
        check_length(ID, "GS08", &version, 1, 12)?;

        Ok(GsSegment {
            functional_id: self.functional_id.unwrap_or(BENEFIT_ENROLLMENT_GROUP),
            sender_code,
            receiver_code,
            date: format_ccyymmdd(date),
            time: format_hhmm(time),
            control_number,
            agency: self.agency.unwrap_or(ACCREDITED_STANDARDS_COMMITTEE_X12),
            version,
        })
    }
}

// ============================================================================
// GE - Functional Group Trailer
// ============================================================================

/// GE - Functional Group Trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeSegment {
    transaction_count: String,
    control_number: String,
}

impl GeSegment {
    pub const ID: &'static str = "GE";
    pub const ELEMENT_COUNT: usize = 2;

    /// Create a trailer for `transaction_count` transaction sets
    #[must_use]
    pub fn new(transaction_count: usize, control_number: impl Into<String>) -> Self {
        Self {
            transaction_count: transaction_count.to_string(),
            control_number: control_number.into(),
        }
    }

    /// GE01
    #[must_use]
    pub fn transaction_count(&self) -> &str {
        &self.transaction_count
    }

    /// GE02, must equal GS06
    #[must_use]
    pub fn control_number(&self) -> &str {
        &self.control_number
    }
}

impl X12Segment for GeSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![Some(&self.transaction_count), Some(&self.control_number)]
    }
}

// ============================================================================
// ST - Transaction Set Header
// ============================================================================

/// ST - Transaction Set Header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StSegment {
    transaction_set_id: CodeEntry,
    control_number: String,
    implementation_reference: String,
}

impl StSegment {
    pub const ID: &'static str = "ST";
    pub const ELEMENT_COUNT: usize = 3;

    /// Start building an ST segment
    #[must_use]
    pub fn builder() -> StBuilder {
        StBuilder::default()
    }

    /// Transaction set control number (ST02)
    #[must_use]
    pub fn control_number(&self) -> &str {
        &self.control_number
    }
}

impl X12Segment for StSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.transaction_set_id.code),
            Some(&self.control_number),
            Some(&self.implementation_reference),
        ]
    }
}

/// Builder for [`StSegment`]
#[derive(Debug, Clone, Default)]
pub struct StBuilder {
    transaction_set_id: Option<CodeEntry>,
    control_number: Option<String>,
    implementation_reference: Option<String>,
}

impl StBuilder {
    /// Set ST01 (default "834")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no transaction set identifier.
    pub fn transaction_set_id(mut self, input: &str) -> Result<Self> {
        self.transaction_set_id = Some(*TRANSACTION_SET_IDENTIFIER_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set ST02
    #[must_use]
    pub fn control_number(mut self, value: impl Into<String>) -> Self {
        self.control_number = Some(value.into());
        self
    }

    /// Set ST03 (default "005010X220A1")
    #[must_use]
    pub fn implementation_reference(mut self, value: impl Into<String>) -> Self {
        self.implementation_reference = Some(value.into());
        self
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when ST02 is missing or not 4 to 9 characters.
    pub fn build(self) -> Result<StSegment> {
        const ID: &str = StSegment::ID;

        let control_number = require_text(ID, "ST02", self.control_number)?;
        check_length(ID, "ST02", &control_number, 4, 9)?;
        let implementation_reference = self
            .implementation_reference
            .unwrap_or_else(|| IMPLEMENTATION_GUIDE_834.to_string());
        check_length(ID, "ST03", &implementation_reference, 1, 35)?;

        Ok(StSegment {
            transaction_set_id: self
                .transaction_set_id
                .unwrap_or(BENEFIT_ENROLLMENT_TRANSACTION),
            control_number,
            implementation_reference,
        })
    }
}

// ============================================================================
// SE - Transaction Set Trailer
// ============================================================================

/// SE - Transaction Set Trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeSegment {
    segment_count: String,
    control_number: String,
}

impl SeSegment {
    pub const ID: &'static str = "SE";
    pub const ELEMENT_COUNT: usize = 2;

    /// Create a trailer counting `segment_count` segments, ST and SE included
    #[must_use]
    pub fn new(segment_count: usize, control_number: impl Into<String>) -> Self {
        Self {
            segment_count: segment_count.to_string(),
            control_number: control_number.into(),
        }
    }

    /// SE01
    #[must_use]
    pub fn segment_count(&self) -> &str {
        &self.segment_count
    }

    /// SE02, must equal ST02
    #[must_use]
    pub fn control_number(&self) -> &str {
        &self.control_number
    }
}

impl X12Segment for SeSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![Some(&self.segment_count), Some(&self.control_number)]
    }
}
