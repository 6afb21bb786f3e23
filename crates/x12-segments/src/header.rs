//! Transaction header and name/address segments (BGN, REF, DTP, N1, N3, N4)

use crate::rules::{
    check_date_period, check_length, check_optional_length, format_ccyymmdd, format_date_range,
    format_hhmm, require, require_text,
};
use crate::segment::X12Segment;
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use x12_codes::tables::{
    ACTION_CODE, DATE_CCYYMMDD, DATE_RANGE_CCYYMMDD, DATE_TIME_PERIOD_FORMAT_QUALIFIER,
    DATE_TIME_QUALIFIER, ENTITY_IDENTIFIER_CODE, IDENTIFICATION_CODE_QUALIFIER, ORIGINAL,
    REFERENCE_IDENTIFICATION_QUALIFIER, TIME_CODE, TRANSACTION_SET_PURPOSE_CODE,
};
use x12_codes::CodeEntry;

/// Check that an identification qualifier and its identifier come together
pub(crate) fn check_pair(
    segment: &str,
    qualifier_field: &str,
    qualifier: Option<&CodeEntry>,
    id_field: &str,
    id: Option<&str>,
) -> Result<()> {
    match (qualifier, id) {
        (Some(_), None) => Err(Error::required(segment, id_field)),
        (None, Some(_)) => Err(Error::required(segment, qualifier_field)),
        _ => Ok(()),
    }
}

// ============================================================================
// BGN - Beginning Segment
// ============================================================================

/// BGN - Beginning Segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgnSegment {
    purpose: CodeEntry,
    reference: String,
    date: String,
    time: Option<String>,
    time_code: Option<CodeEntry>,
    original_reference: Option<String>,
    action: CodeEntry,
}

impl BgnSegment {
    pub const ID: &'static str = "BGN";
    pub const ELEMENT_COUNT: usize = 8;

    /// Start building a BGN segment
    #[must_use]
    pub fn builder() -> BgnBuilder {
        BgnBuilder::default()
    }

    /// Transaction set reference (BGN02)
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Action code (BGN08)
    #[must_use]
    pub fn action(&self) -> CodeEntry {
        self.action
    }
}

impl X12Segment for BgnSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.purpose.code),
            Some(&self.reference),
            Some(&self.date),
            self.time.as_deref(),
            self.time_code.map(|c| c.code),
            self.original_reference.as_deref(),
            // BGN07 is not used in the 834
            None,
            Some(self.action.code),
        ]
    }
}

/// Builder for [`BgnSegment`]
#[derive(Debug, Clone, Default)]
pub struct BgnBuilder {
    purpose: Option<CodeEntry>,
    reference: Option<String>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    time_code: Option<CodeEntry>,
    original_reference: Option<String>,
    action: Option<CodeEntry>,
}

impl BgnBuilder {
    /// Set BGN01 (default "00")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no purpose code.
    pub fn purpose(mut self, input: &str) -> Result<Self> {
        self.purpose = Some(*TRANSACTION_SET_PURPOSE_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set BGN02
    #[must_use]
    pub fn reference(mut self, value: impl Into<String>) -> Self {
        self.reference = Some(value.into());
        self
    }

    /// Set BGN03
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set BGN04
    #[must_use]
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Set BGN05
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no time code.
    pub fn time_code(mut self, input: &str) -> Result<Self> {
        self.time_code = Some(*TIME_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set BGN06
    #[must_use]
    pub fn original_reference(mut self, value: impl Into<String>) -> Self {
        self.original_reference = Some(value.into());
        self
    }

    /// Set BGN08
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no action code.
    pub fn action(mut self, input: &str) -> Result<Self> {
        self.action = Some(*ACTION_CODE.resolve(input)?);
        Ok(self)
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when BGN02, BGN03 or BGN08 is missing or a reference
    /// is longer than 50 characters.
    pub fn build(self) -> Result<BgnSegment> {
        const ID: &str = BgnSegment::ID;

        let reference = require_text(ID, "BGN02", self.reference)?;
        check_length(ID, "BGN02", &reference, 1, 50)?;
        let date = require(ID, "BGN03", self.date)?;
        check_optional_length(ID, "BGN06", self.original_reference.as_deref(), 1, 50)?;
        let action = require(ID, "BGN08", self.action)?;

        Ok(BgnSegment {
            purpose: self.purpose.unwrap_or(ORIGINAL),
            reference,
            date: format_ccyymmdd(date),
            time: self.time.map(format_hhmm),
            time_code: self.time_code,
            original_reference: self.original_reference,
            action,
        })
    }
}

// ============================================================================
// REF - Reference Information
// ============================================================================

/// REF - Reference Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefSegment {
    qualifier: CodeEntry,
    value: String,
    description: Option<String>,
}

impl RefSegment {
    pub const ID: &'static str = "REF";
    pub const ELEMENT_COUNT: usize = 3;

    /// Build a reference from a qualifier and value
    ///
    /// # Errors
    ///
    /// Returns an error if the qualifier does not resolve or the value is
    /// blank or longer than 50 characters.
    pub fn new(qualifier: &str, value: impl Into<String>) -> Result<Self> {
        let qualifier = *REFERENCE_IDENTIFICATION_QUALIFIER.resolve(qualifier)?;
        let value = require_text(Self::ID, "REF02", Some(value.into()))?;
        check_length(Self::ID, "REF02", &value, 1, 50)?;
        Ok(Self {
            qualifier,
            value,
            description: None,
        })
    }

    /// Add a free-form description (REF03)
    ///
    /// # Errors
    ///
    /// Returns an error if the description is longer than 80 characters.
    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        check_length(Self::ID, "REF03", &description, 1, 80)?;
        self.description = Some(description);
        Ok(self)
    }

    /// Reference qualifier (REF01)
    #[must_use]
    pub fn qualifier(&self) -> CodeEntry {
        self.qualifier
    }
}

impl X12Segment for RefSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.qualifier.code),
            Some(&self.value),
            self.description.as_deref(),
        ]
    }
}

// ============================================================================
// DTP - Date or Time Period
// ============================================================================

/// DTP - Date or Time Period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtpSegment {
    qualifier: CodeEntry,
    format: CodeEntry,
    value: String,
}

impl DtpSegment {
    pub const ID: &'static str = "DTP";
    pub const ELEMENT_COUNT: usize = 3;

    /// A single date in `D8` format
    ///
    /// # Errors
    ///
    /// Returns an error if the qualifier does not resolve.
    pub fn date(qualifier: &str, date: NaiveDate) -> Result<Self> {
        Ok(Self {
            qualifier: *DATE_TIME_QUALIFIER.resolve(qualifier)?,
            format: DATE_CCYYMMDD,
            value: format_ccyymmdd(date),
        })
    }

    /// An inclusive date range in `RD8` format
    ///
    /// # Errors
    ///
    /// Returns an error if the qualifier does not resolve or `end` is
    /// before `start`.
    pub fn date_range(qualifier: &str, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let qualifier = *DATE_TIME_QUALIFIER.resolve(qualifier)?;
        if end < start {
            return Err(Error::invalid(
                Self::ID,
                "DTP03",
                format!("range ends {end} before it starts {start}"),
            ));
        }
        Ok(Self {
            qualifier,
            format: DATE_RANGE_CCYYMMDD,
            value: format_date_range(start, end),
        })
    }

    /// A date value already formatted as text
    ///
    /// # Errors
    ///
    /// Returns an error if a code does not resolve or the value does not
    /// match the format qualifier.
    pub fn from_text(qualifier: &str, format: &str, value: &str) -> Result<Self> {
        let qualifier = *DATE_TIME_QUALIFIER.resolve(qualifier)?;
        let format = *DATE_TIME_PERIOD_FORMAT_QUALIFIER.resolve(format)?;
        let value = value.trim();
        check_date_period(Self::ID, "DTP03", format.code, value)?;
        Ok(Self {
            qualifier,
            format,
            value: value.to_string(),
        })
    }

    /// Date qualifier (DTP01)
    #[must_use]
    pub fn qualifier(&self) -> CodeEntry {
        self.qualifier
    }

    /// Formatted date value (DTP03)
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl X12Segment for DtpSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.qualifier.code),
            Some(self.format.code),
            Some(&self.value),
        ]
    }
}

// ============================================================================
// N1 - Party Identification
// ============================================================================

/// N1 - Party Identification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct N1Segment {
    entity: CodeEntry,
    name: Option<String>,
    id_qualifier: Option<CodeEntry>,
    id: Option<String>,
}

impl N1Segment {
    pub const ID: &'static str = "N1";
    pub const ELEMENT_COUNT: usize = 4;

    /// Start building an N1 segment
    #[must_use]
    pub fn builder() -> N1Builder {
        N1Builder::default()
    }

    /// Entity identifier (N101)
    #[must_use]
    pub fn entity(&self) -> CodeEntry {
        self.entity
    }
}

impl X12Segment for N1Segment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.entity.code),
            self.name.as_deref(),
            self.id_qualifier.map(|c| c.code),
            self.id.as_deref(),
        ]
    }
}

/// Builder for [`N1Segment`]
#[derive(Debug, Clone, Default)]
pub struct N1Builder {
    entity: Option<CodeEntry>,
    name: Option<String>,
    id_qualifier: Option<CodeEntry>,
    id: Option<String>,
}

impl N1Builder {
    /// Set N101
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no entity identifier.
    pub fn entity(mut self, input: &str) -> Result<Self> {
        self.entity = Some(*ENTITY_IDENTIFIER_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set N102
    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Set N103 and N104
    ///
    /// # Errors
    ///
    /// Returns an error if the qualifier matches no identification code
    /// qualifier.
    pub fn identification(mut self, qualifier: &str, id: impl Into<String>) -> Result<Self> {
        self.id_qualifier = Some(*IDENTIFICATION_CODE_QUALIFIER.resolve(qualifier)?);
        self.id = Some(id.into());
        Ok(self)
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when N101 is missing, the segment names no party,
    /// or a field length is out of bounds.
    pub fn build(self) -> Result<N1Segment> {
        const ID: &str = N1Segment::ID;

        let entity = require(ID, "N101", self.entity)?;
        let name = self.name.filter(|n| !n.trim().is_empty());
        let id = self.id.filter(|i| !i.trim().is_empty());

        check_optional_length(ID, "N102", name.as_deref(), 1, 60)?;
        check_pair(ID, "N103", self.id_qualifier.as_ref(), "N104", id.as_deref())?;
        check_optional_length(ID, "N104", id.as_deref(), 2, 80)?;
        if name.is_none() && id.is_none() {
            return Err(Error::required(ID, "N102"));
        }

        Ok(N1Segment {
            entity,
            name,
            id_qualifier: self.id_qualifier,
            id,
        })
    }
}

// ============================================================================
// N3 - Address Information
// ============================================================================

/// N3 - Address Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct N3Segment {
    line1: String,
    line2: Option<String>,
}

impl N3Segment {
    pub const ID: &'static str = "N3";
    pub const ELEMENT_COUNT: usize = 2;

    /// Build an address from one or two lines
    ///
    /// # Errors
    ///
    /// Returns an error when the first line is blank or a line is longer
    /// than 55 characters.
    pub fn new(line1: impl Into<String>, line2: Option<String>) -> Result<Self> {
        let line1 = require_text(Self::ID, "N301", Some(line1.into()))?;
        let line2 = line2.filter(|l| !l.trim().is_empty());
        check_length(Self::ID, "N301", &line1, 1, 55)?;
        check_optional_length(Self::ID, "N302", line2.as_deref(), 1, 55)?;
        Ok(Self { line1, line2 })
    }
}

impl X12Segment for N3Segment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![Some(&self.line1), self.line2.as_deref()]
    }
}

// ============================================================================
// N4 - Geographic Location
// ============================================================================

/// N4 - Geographic Location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct N4Segment {
    city: String,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl N4Segment {
    pub const ID: &'static str = "N4";
    pub const ELEMENT_COUNT: usize = 4;

    /// Start building an N4 segment
    #[must_use]
    pub fn builder() -> N4Builder {
        N4Builder::default()
    }
}

impl X12Segment for N4Segment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.city),
            self.state.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        ]
    }
}

/// Builder for [`N4Segment`]
#[derive(Debug, Clone, Default)]
pub struct N4Builder {
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl N4Builder {
    /// Set N401
    #[must_use]
    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    /// Set N402
    #[must_use]
    pub fn state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    /// Set N403
    #[must_use]
    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    /// Set N404
    #[must_use]
    pub fn country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when N401 is missing or a field length is out of
    /// bounds.
    pub fn build(self) -> Result<N4Segment> {
        const ID: &str = N4Segment::ID;

        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let city = require_text(ID, "N401", self.city)?;
        let state = non_blank(self.state);
        let postal_code = non_blank(self.postal_code);
        let country = non_blank(self.country);

        check_length(ID, "N401", &city, 2, 30)?;
        check_optional_length(ID, "N402", state.as_deref(), 2, 2)?;
        check_optional_length(ID, "N403", postal_code.as_deref(), 3, 15)?;
        check_optional_length(ID, "N404", country.as_deref(), 2, 3)?;

        Ok(N4Segment {
            city,
            state,
            postal_code,
            country,
        })
    }
}
