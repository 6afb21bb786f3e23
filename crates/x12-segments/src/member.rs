//! Member level detail, member name and health coverage segments (INS, NM1, HD)

use crate::header::check_pair;
use crate::rules::{check_length, check_optional_length, require, require_text};
use crate::segment::X12Segment;
use crate::{Error, Result};
use x12_codes::tables::{
    BENEFIT_STATUS_CODE, COVERAGE_LEVEL_CODE, EMPLOYMENT_STATUS_CODE, ENTITY_IDENTIFIER_CODE,
    ENTITY_TYPE_QUALIFIER, IDENTIFICATION_CODE_QUALIFIER, INDIVIDUAL_RELATIONSHIP_CODE,
    INSURANCE_LINE_CODE, INSURED_OR_SUBSCRIBER, MAINTENANCE_REASON_CODE, MAINTENANCE_TYPE_CODE,
    PERSON, SELF, YES, YES_NO_CONDITION,
};
use x12_codes::CodeEntry;

// ============================================================================
// INS - Member Level Detail
// ============================================================================

/// INS - Member Level Detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsSegment {
    subscriber: CodeEntry,
    relationship: CodeEntry,
    maintenance_type: CodeEntry,
    maintenance_reason: Option<CodeEntry>,
    benefit_status: CodeEntry,
    employment_status: Option<CodeEntry>,
}

impl InsSegment {
    pub const ID: &'static str = "INS";
    pub const ELEMENT_COUNT: usize = 8;

    /// Start building an INS segment
    #[must_use]
    pub fn builder() -> InsBuilder {
        InsBuilder::default()
    }

    /// Whether this member is the subscriber (INS01 = Y)
    #[must_use]
    pub fn is_subscriber(&self) -> bool {
        self.subscriber == YES
    }

    /// Maintenance type (INS03)
    #[must_use]
    pub fn maintenance_type(&self) -> CodeEntry {
        self.maintenance_type
    }
}

impl X12Segment for InsSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.subscriber.code),
            Some(self.relationship.code),
            Some(self.maintenance_type.code),
            self.maintenance_reason.map(|c| c.code),
            Some(self.benefit_status.code),
            // INS06 Medicare status and INS07 COBRA qualifying event are not carried
            None,
            None,
            self.employment_status.map(|c| c.code),
        ]
    }
}

/// Builder for [`InsSegment`]
#[derive(Debug, Clone, Default)]
pub struct InsBuilder {
    subscriber: Option<CodeEntry>,
    relationship: Option<CodeEntry>,
    maintenance_type: Option<CodeEntry>,
    maintenance_reason: Option<CodeEntry>,
    benefit_status: Option<CodeEntry>,
    employment_status: Option<CodeEntry>,
}

impl InsBuilder {
    /// Set INS01
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a yes/no value.
    pub fn subscriber(mut self, input: &str) -> Result<Self> {
        self.subscriber = Some(*YES_NO_CONDITION.resolve(input)?);
        Ok(self)
    }

    /// Set INS02
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no relationship code.
    pub fn relationship(mut self, input: &str) -> Result<Self> {
        self.relationship = Some(*INDIVIDUAL_RELATIONSHIP_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set INS03
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no maintenance type.
    pub fn maintenance_type(mut self, input: &str) -> Result<Self> {
        self.maintenance_type = Some(*MAINTENANCE_TYPE_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set INS04
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no maintenance reason.
    pub fn maintenance_reason(mut self, input: &str) -> Result<Self> {
        self.maintenance_reason = Some(*MAINTENANCE_REASON_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set INS05
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no benefit status.
    pub fn benefit_status(mut self, input: &str) -> Result<Self> {
        self.benefit_status = Some(*BENEFIT_STATUS_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set INS08
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no employment status.
    pub fn employment_status(mut self, input: &str) -> Result<Self> {
        self.employment_status = Some(*EMPLOYMENT_STATUS_CODE.resolve(input)?);
        Ok(self)
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when INS01, INS02, INS03 or INS05 is missing, or
    /// when INS01 and INS02 disagree about the member being the subscriber.
    pub fn build(self) -> Result<InsSegment> {
        const ID: &str = InsSegment::ID;

        let subscriber = require(ID, "INS01", self.subscriber)?;
        let relationship = require(ID, "INS02", self.relationship)?;
        let maintenance_type = require(ID, "INS03", self.maintenance_type)?;
        let benefit_status = require(ID, "INS05", self.benefit_status)?;

        match (subscriber == YES, relationship == SELF) {
            (true, false) => {
                return Err(Error::invalid(
                    ID,
                    "INS02",
                    format!("must be 18 (Self) for a subscriber, got {}", relationship.code),
                ));
            }
            (false, true) => {
                return Err(Error::invalid(
                    ID,
                    "INS02",
                    "18 (Self) is only valid for a subscriber",
                ));
            }
            _ => {}
        }

        Ok(InsSegment {
            subscriber,
            relationship,
            maintenance_type,
            maintenance_reason: self.maintenance_reason,
            benefit_status,
            employment_status: self.employment_status,
        })
    }
}

// ============================================================================
// NM1 - Individual or Organizational Name
// ============================================================================

/// NM1 - Individual or Organizational Name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nm1Segment {
    entity: CodeEntry,
    entity_type: CodeEntry,
    last_name: String,
    first_name: Option<String>,
    middle_name: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
    id_qualifier: Option<CodeEntry>,
    id: Option<String>,
}

impl Nm1Segment {
    pub const ID: &'static str = "NM1";
    pub const ELEMENT_COUNT: usize = 9;

    /// Start building an NM1 segment
    #[must_use]
    pub fn builder() -> Nm1Builder {
        Nm1Builder::default()
    }
}

impl X12Segment for Nm1Segment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.entity.code),
            Some(self.entity_type.code),
            Some(&self.last_name),
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
            self.prefix.as_deref(),
            self.suffix.as_deref(),
            self.id_qualifier.map(|c| c.code),
            self.id.as_deref(),
        ]
    }
}

/// Builder for [`Nm1Segment`]
#[derive(Debug, Clone, Default)]
pub struct Nm1Builder {
    entity: Option<CodeEntry>,
    entity_type: Option<CodeEntry>,
    last_name: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
    id_qualifier: Option<CodeEntry>,
    id: Option<String>,
}

impl Nm1Builder {
    /// Set NM101 (default "IL")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no entity identifier.
    pub fn entity(mut self, input: &str) -> Result<Self> {
        self.entity = Some(*ENTITY_IDENTIFIER_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set NM102 (default "1")
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no entity type.
    pub fn entity_type(mut self, input: &str) -> Result<Self> {
        self.entity_type = Some(*ENTITY_TYPE_QUALIFIER.resolve(input)?);
        Ok(self)
    }

    /// Set NM103
    #[must_use]
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    /// Set NM104
    #[must_use]
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Set NM105
    #[must_use]
    pub fn middle_name(mut self, value: impl Into<String>) -> Self {
        self.middle_name = Some(value.into());
        self
    }

    /// Set NM106
    #[must_use]
    pub fn prefix(mut self, value: impl Into<String>) -> Self {
        self.prefix = Some(value.into());
        self
    }

    /// Set NM107
    #[must_use]
    pub fn suffix(mut self, value: impl Into<String>) -> Self {
        self.suffix = Some(value.into());
        self
    }

    /// Set NM108 and NM109
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
    /// Returns an error when NM103 is missing, a name part is too long, or
    /// only one of NM108 and NM109 is present.
    pub fn build(self) -> Result<Nm1Segment> {
        const ID: &str = Nm1Segment::ID;

        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let last_name = require_text(ID, "NM103", self.last_name)?;
        let first_name = non_blank(self.first_name);
        let middle_name = non_blank(self.middle_name);
        let prefix = non_blank(self.prefix);
        let suffix = non_blank(self.suffix);
        let id = non_blank(self.id);

        check_length(ID, "NM103", &last_name, 1, 60)?;
        check_optional_length(ID, "NM104", first_name.as_deref(), 1, 35)?;
        check_optional_length(ID, "NM105", middle_name.as_deref(), 1, 25)?;
        check_optional_length(ID, "NM106", prefix.as_deref(), 1, 10)?;
        check_optional_length(ID, "NM107", suffix.as_deref(), 1, 10)?;
        check_pair(ID, "NM108", self.id_qualifier.as_ref(), "NM109", id.as_deref())?;
        check_optional_length(ID, "NM109", id.as_deref(), 2, 80)?;

        Ok(Nm1Segment {
            entity: self.entity.unwrap_or(INSURED_OR_SUBSCRIBER),
            entity_type: self.entity_type.unwrap_or(PERSON),
            last_name,
            first_name,
            middle_name,
            prefix,
            suffix,
            id_qualifier: self.id_qualifier,
            id,
        })
    }
}

// ============================================================================
// HD - Health Coverage
// ============================================================================

/// HD - Health Coverage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdSegment {
    maintenance_type: CodeEntry,
    insurance_line: CodeEntry,
    plan_description: Option<String>,
    coverage_level: Option<CodeEntry>,
}

impl HdSegment {
    pub const ID: &'static str = "HD";
    pub const ELEMENT_COUNT: usize = 5;

    /// Start building an HD segment
    #[must_use]
    pub fn builder() -> HdBuilder {
        HdBuilder::default()
    }

    /// Insurance line (HD03)
    #[must_use]
    pub fn insurance_line(&self) -> CodeEntry {
        self.insurance_line
    }
}

impl X12Segment for HdSegment {
    fn segment_id(&self) -> &str {
        Self::ID
    }

    fn elements(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.maintenance_type.code),
            // HD02 is not used in the 834
            None,
            Some(self.insurance_line.code),
            self.plan_description.as_deref(),
            self.coverage_level.map(|c| c.code),
        ]
    }
}

/// Builder for [`HdSegment`]
#[derive(Debug, Clone, Default)]
pub struct HdBuilder {
    maintenance_type: Option<CodeEntry>,
    insurance_line: Option<CodeEntry>,
    plan_description: Option<String>,
    coverage_level: Option<CodeEntry>,
}

impl HdBuilder {
    /// Set HD01
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no maintenance type.
    pub fn maintenance_type(mut self, input: &str) -> Result<Self> {
        self.maintenance_type = Some(*MAINTENANCE_TYPE_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set HD03
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no insurance line.
    pub fn insurance_line(mut self, input: &str) -> Result<Self> {
        self.insurance_line = Some(*INSURANCE_LINE_CODE.resolve(input)?);
        Ok(self)
    }

    /// Set HD04
    #[must_use]
    pub fn plan_description(mut self, value: impl Into<String>) -> Self {
        self.plan_description = Some(value.into());
        self
    }

    /// Set HD05
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches no coverage level.
    pub fn coverage_level(mut self, input: &str) -> Result<Self> {
        self.coverage_level = Some(*COVERAGE_LEVEL_CODE.resolve(input)?);
        Ok(self)
    }

    /// Validate and build the segment
    ///
    /// # Errors
    ///
    /// Returns an error when HD01 or HD03 is missing or HD04 is longer than
    /// 50 characters.
    pub fn build(self) -> Result<HdSegment> {
        const ID: &str = HdSegment::ID;

        let maintenance_type = require(ID, "HD01", self.maintenance_type)?;
        let insurance_line = require(ID, "HD03", self.insurance_line)?;
        let plan_description = self.plan_description.filter(|d| !d.trim().is_empty());
        check_optional_length(ID, "HD04", plan_description.as_deref(), 1, 50)?;

        Ok(HdSegment {
            maintenance_type,
            insurance_line,
            plan_description,
            coverage_level: self.coverage_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::SegmentRenderer;
    use crate::syntax::Delimiters;

    fn renderer() -> SegmentRenderer {
        SegmentRenderer::with_delimiters(Delimiters::default())
    }

    #[test]
    fn test_ins_subscriber() {
        let ins = InsSegment::builder()
            .subscriber("Y")
            .unwrap()
            .relationship("self")
            .unwrap()
            .maintenance_type("add")
            .unwrap()
            .maintenance_reason("new hire")
            .unwrap()
            .benefit_status("active")
            .unwrap()
            .employment_status("full time")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            ins.render(&renderer()).unwrap(),
            "INS*Y*18*021*28*A***FT~"
        );
        assert_eq!(ins.elements().len(), InsSegment::ELEMENT_COUNT);
        assert!(ins.is_subscriber());
        assert_eq!(ins.maintenance_type().code, "021");
    }

    #[test]
    fn test_ins_dependent_drops_trailing() {
        let ins = InsSegment::builder()
            .subscriber("dependent")
            .unwrap()
            .relationship("child")
            .unwrap()
            .maintenance_type("021")
            .unwrap()
            .benefit_status("A")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(ins.render(&renderer()).unwrap(), "INS*N*19*021**A~");
        assert!(!ins.is_subscriber());
    }

    #[test]
    fn test_ins_subscriber_relationship_rule() {
        let base = || {
            InsSegment::builder()
                .maintenance_type("021")
                .unwrap()
                .benefit_status("A")
                .unwrap()
        };

        let err = base()
            .subscriber("Y")
            .unwrap()
            .relationship("spouse")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref field, .. } if field == "INS02"));

        let err = base()
            .subscriber("N")
            .unwrap()
            .relationship("18")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));

        let err = base().relationship("18").unwrap().build().unwrap_err();
        assert_eq!(err, Error::required("INS", "INS01"));
    }

    #[test]
    fn test_nm1_defaults() {
        let nm1 = Nm1Segment::builder()
            .last_name("Doe")
            .first_name("Jane")
            .identification("ssn", "123456789")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            nm1.render(&renderer()).unwrap(),
            "NM1*IL*1*Doe*Jane****34*123456789~"
        );
        assert_eq!(nm1.elements().len(), Nm1Segment::ELEMENT_COUNT);
    }

    #[test]
    fn test_nm1_rules() {
        assert_eq!(
            Nm1Segment::builder().first_name("Jane").build().unwrap_err(),
            Error::required("NM1", "NM103")
        );

        let err = Nm1Segment::builder()
            .last_name("Doe")
            .identification("34", "  ")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, Error::required("NM1", "NM109"));

        let err = Nm1Segment::builder()
            .last_name("X".repeat(61))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::length("NM1", "NM103", 61, 1, 60));

        let nm1 = Nm1Segment::builder()
            .entity("corrected")
            .unwrap()
            .last_name("Doe")
            .middle_name("")
            .build()
            .unwrap();
        assert_eq!(nm1.render(&renderer()).unwrap(), "NM1*74*1*Doe~");
    }

    #[test]
    fn test_hd() {
        let hd = HdSegment::builder()
            .maintenance_type("030")
            .unwrap()
            .insurance_line("medical")
            .unwrap()
            .plan_description("PPO Gold")
            .coverage_level("family")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            hd.render(&renderer()).unwrap(),
            "HD*030**HLT*PPO Gold*FAM~"
        );
        assert_eq!(hd.elements().len(), HdSegment::ELEMENT_COUNT);
        assert_eq!(hd.insurance_line().code, "HLT");
    }

    #[test]
    fn test_hd_required() {
        let err = HdSegment::builder()
            .insurance_line("DEN")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, Error::required("HD", "HD01"));

        let err = HdSegment::builder()
            .maintenance_type("021")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, Error::required("HD", "HD03"));

        let hd = HdSegment::builder()
            .maintenance_type("021")
            .unwrap()
            .insurance_line("DEN")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(hd.render(&renderer()).unwrap(), "HD*021**DEN~");
    }
}
