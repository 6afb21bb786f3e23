//! Enrollment model to 834 interchange
//!
//! Segment order inside the transaction set:
//!
//! ```text
//! ST BGN [REF*38] [DTP*007] N1*P5 N1*IN [N1*BO]
//!   per member: INS REF*0F [REF*1L] [DTP*336] NM1 [N3 N4]
//!     per coverage: HD DTP*348 [DTP*349]
//! SE
//! ```

use crate::model::{Coverage, EnrollmentFile, Member, Party};
use crate::{Error, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};
use x12_codes::tables::{INDIVIDUAL_RELATIONSHIP_CODE, SELF};
use x12_segments::{
    BgnSegment, Delimiters, DtpSegment, FunctionalGroup, GsSegment, HdSegment, InsSegment,
    Interchange, IsaSegment, N1Segment, N3Segment, N4Segment, Nm1Segment, RefSegment, StSegment,
    TransactionSet,
};

/// Encodes enrollment files with one set of delimiters
#[derive(Debug, Clone)]
pub struct Encoder {
    delimiters: Delimiters,
    timestamp: NaiveDateTime,
}

impl Encoder {
    /// Create an encoder stamping documents with the current local time
    #[must_use]
    pub fn new(delimiters: Delimiters) -> Self {
        Self {
            delimiters,
            timestamp: Local::now().naive_local(),
        }
    }

    /// Use a fixed time for ISA09/ISA10, GS04/GS05 and BGN03/BGN04 where
    /// the file leaves the interchange date or time unset
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Delimiters used for rendering
    #[must_use]
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Build and render the interchange
    ///
    /// # Errors
    ///
    /// Same as [`Encoder::build`], plus any rendering error.
    pub fn encode(&self, file: &EnrollmentFile) -> Result<String> {
        let interchange = self.build(file)?;
        Ok(interchange.render(&self.delimiters)?)
    }

    /// Build the interchange without rendering it
    ///
    /// # Errors
    ///
    /// Returns [`Error::Segment`] for envelope and party problems and
    /// [`Error::Member`] naming the member whose data is invalid.
    pub fn build(&self, file: &EnrollmentFile) -> Result<Interchange> {
        let header = &file.interchange;
        let stamp = self.document_timestamp(file);

        let mut isa = IsaSegment::builder()
            .sender_id(&header.sender_id)
            .receiver_id(&header.receiver_id)
            .date(stamp.date())
            .time(stamp.time())
            .control_number(header.control_number)
            .delimiters(&self.delimiters);
        if let Some(qualifier) = &header.sender_qualifier {
            isa = isa.sender_qualifier(qualifier)?;
        }
        if let Some(qualifier) = &header.receiver_qualifier {
            isa = isa.receiver_qualifier(qualifier)?;
        }
        if let Some(ack) = &header.acknowledgment_requested {
            isa = isa.acknowledgment_requested(ack)?;
        }
        if let Some(usage) = &header.usage_indicator {
            isa = isa.usage_indicator(usage)?;
        }

        let gs = GsSegment::builder()
            .sender_code(file.group.sender_code.as_ref().unwrap_or(&header.sender_id))
            .receiver_code(
                file.group
                    .receiver_code
                    .as_ref()
                    .unwrap_or(&header.receiver_id),
            )
            .date(stamp.date())
            .time(stamp.time())
            .control_number(file.group.control_number.unwrap_or(header.control_number))
            .build()?;

        let transaction = build_transaction(file, stamp)?;
        let interchange =
            Interchange::new(isa.build()?).with(FunctionalGroup::new(gs).with(transaction));

        debug!(
            control_number = header.control_number,
            members = file.members.len(),
            segments = interchange.segment_count(),
            "Built enrollment interchange"
        );
        Ok(interchange)
    }

    /// Interchange date and time from the file, each falling back to the
    /// encoder timestamp
    #[must_use]
    pub fn document_timestamp(&self, file: &EnrollmentFile) -> NaiveDateTime {
        let header = &file.interchange;
        NaiveDateTime::new(
            header.date.unwrap_or(self.timestamp.date()),
            header.time.unwrap_or(self.timestamp.time()),
        )
    }
}

fn build_transaction(file: &EnrollmentFile, stamp: NaiveDateTime) -> Result<TransactionSet> {
    let header = &file.transaction;
    let st = StSegment::builder()
        .control_number(&header.control_number)
        .build()?;

    let mut bgn = BgnSegment::builder()
        .reference(&header.reference)
        .date(stamp.date())
        .time(stamp.time())
        .action(&header.action)?;
    if let Some(purpose) = &header.purpose {
        bgn = bgn.purpose(purpose)?;
    }
    if let Some(time_code) = &header.time_code {
        bgn = bgn.time_code(time_code)?;
    }

    let mut transaction = TransactionSet::new(st).with(bgn.build()?);
    if let Some(policy) = &header.master_policy {
        transaction.push(RefSegment::new("38", policy)?);
    }
    if let Some(effective) = header.file_effective {
        transaction.push(DtpSegment::date("007", effective)?);
    }

    transaction.push(party("P5", &file.sponsor)?);
    transaction.push(party("IN", &file.payer)?);
    if let Some(broker) = &file.broker {
        transaction.push(party("BO", broker)?);
    }

    if file.members.is_empty() {
        warn!(
            control_number = %header.control_number,
            "Enrollment transaction has no members"
        );
    }
    for member in &file.members {
        push_member(&mut transaction, member).map_err(|source| Error::Member {
            member: member.label(),
            source,
        })?;
    }

    Ok(transaction)
}

fn party(entity: &str, party: &Party) -> x12_segments::Result<N1Segment> {
    let mut builder = N1Segment::builder().entity(entity)?.name(&party.name);
    match (&party.id_qualifier, &party.id) {
        (Some(qualifier), Some(id)) => builder = builder.identification(qualifier, id)?,
        (None, None) => {}
        (Some(_), None) => return Err(x12_segments::Error::required(N1Segment::ID, "N104")),
        (None, Some(_)) => return Err(x12_segments::Error::required(N1Segment::ID, "N103")),
    }
    builder.build()
}

fn push_member(transaction: &mut TransactionSet, member: &Member) -> x12_segments::Result<()> {
    let relationship = INDIVIDUAL_RELATIONSHIP_CODE.resolve(&member.relationship)?;
    let subscriber = if *relationship == SELF { "Y" } else { "N" };

    let mut ins = InsSegment::builder()
        .subscriber(subscriber)?
        .relationship(relationship.code)?
        .maintenance_type(&member.maintenance_type)?
        .benefit_status(&member.benefit_status)?;
    if let Some(reason) = &member.maintenance_reason {
        ins = ins.maintenance_reason(reason)?;
    }
    if let Some(status) = &member.employment_status {
        ins = ins.employment_status(status)?;
    }
    transaction.push(ins.build()?);

    transaction.push(RefSegment::new("0F", &member.subscriber_id)?);
    if let Some(group) = &member.group_number {
        transaction.push(RefSegment::new("1L", group)?);
    }
    if let Some(hired) = member.hire_date {
        transaction.push(DtpSegment::date("336", hired)?);
    }

    let mut nm1 = Nm1Segment::builder().last_name(&member.last_name);
    if let Some(first) = &member.first_name {
        nm1 = nm1.first_name(first);
    }
    if let Some(middle) = &member.middle_name {
        nm1 = nm1.middle_name(middle);
    }
    if let Some(ssn) = &member.ssn {
        nm1 = nm1.identification("34", ssn)?;
    }
    transaction.push(nm1.build()?);

    if let Some(address) = &member.address {
        transaction.push(N3Segment::new(&address.line1, address.line2.clone())?);
        let mut n4 = N4Segment::builder().city(&address.city);
        if let Some(state) = &address.state {
            n4 = n4.state(state);
        }
        if let Some(postal_code) = &address.postal_code {
            n4 = n4.postal_code(postal_code);
        }
        if let Some(country) = &address.country {
            n4 = n4.country(country);
        }
        transaction.push(n4.build()?);
    }

    for coverage in &member.coverages {
        push_coverage(transaction, member, coverage)?;
    }
    Ok(())
}

fn push_coverage(
    transaction: &mut TransactionSet,
    member: &Member,
    coverage: &Coverage,
) -> x12_segments::Result<()> {
    if let Some(end) = coverage.end {
        if end < coverage.start {
            return Err(x12_segments::Error::invalid(
                DtpSegment::ID,
                "DTP03",
                format!("coverage ends {end} before it starts {}", coverage.start),
            ));
        }
    }

    let maintenance_type = coverage
        .maintenance_type
        .as_deref()
        .unwrap_or(&member.maintenance_type);
    let mut hd = HdSegment::builder()
        .maintenance_type(maintenance_type)?
        .insurance_line(&coverage.insurance_line)?;
    if let Some(plan) = &coverage.plan {
        hd = hd.plan_description(plan);
    }
    if let Some(level) = &coverage.coverage_level {
        hd = hd.coverage_level(level)?;
    }
    transaction.push(hd.build()?);

    transaction.push(DtpSegment::date("348", coverage.start)?);
    if let Some(end) = coverage.end {
        transaction.push(DtpSegment::date("349", end)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, GroupHeader, InterchangeHeader, TransactionHeader};
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn member(relationship: &str, first: &str) -> Member {
        Member {
            subscriber_id: "SUB1".to_string(),
            relationship: relationship.to_string(),
            maintenance_type: "add".to_string(),
            maintenance_reason: None,
            benefit_status: "active".to_string(),
            employment_status: None,
            group_number: None,
            hire_date: None,
            last_name: "Doe".to_string(),
            first_name: Some(first.to_string()),
            middle_name: None,
            ssn: None,
            address: None,
            coverages: vec![Coverage {
                maintenance_type: None,
                insurance_line: "HLT".to_string(),
                plan: None,
                coverage_level: Some("FAM".to_string()),
                start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                end: None,
            }],
        }
    }

    fn file() -> EnrollmentFile {
        EnrollmentFile {
            interchange: InterchangeHeader {
                sender_qualifier: None,
                sender_id: "ACME".to_string(),
                receiver_qualifier: None,
                receiver_id: "PLAN".to_string(),
                control_number: 12,
                date: None,
                time: None,
                acknowledgment_requested: None,
                usage_indicator: Some("test".to_string()),
            },
            group: GroupHeader::default(),
            transaction: TransactionHeader {
                control_number: "0001".to_string(),
                purpose: None,
                reference: "BATCH-1".to_string(),
                action: "2".to_string(),
                time_code: None,
                master_policy: None,
                file_effective: None,
            },
            sponsor: Party {
                name: "Acme Corp".to_string(),
                id_qualifier: Some("FI".to_string()),
                id: Some("123456789".to_string()),
            },
            payer: Party {
                name: "Good Health".to_string(),
                id_qualifier: None,
                id: None,
            },
            broker: None,
            members: vec![member("self", "John"), member("spouse", "Mary")],
        }
    }

    fn encode(file: &EnrollmentFile) -> Result<String> {
        Encoder::new(Delimiters::default())
            .with_timestamp(timestamp())
            .encode(file)
    }

    #[test]
    fn test_subscriber_flag_follows_relationship() {
        let text = encode(&file()).unwrap();
        assert!(text.contains("~INS*Y*18*021**A~"));
        assert!(text.contains("~INS*N*01*021**A~"));
        assert!(text.contains("~HD*021**HLT**FAM~DTP*348*D8*20240201~"));
    }

    #[test]
    fn test_envelope_defaults_from_timestamp() {
        let text = encode(&file()).unwrap();
        assert!(text.contains("*240115*0930*^*00501*000000012*0*T*:~"));
        assert!(text.contains("~GS*BE*ACME*PLAN*20240115*0930*12*X*005010X220A1~"));
        assert!(text.contains("~BGN*00*BATCH-1*20240115*0930****2~"));
        assert!(text.contains("~N1*P5*Acme Corp*FI*123456789~N1*IN*Good Health~"));
        assert!(text.ends_with("~GE*1*12~IEA*1*000000012~"));
    }

    #[test]
    fn test_file_date_stamps_every_envelope() {
        let mut file = file();
        file.interchange.date = NaiveDate::from_ymd_opt(2023, 6, 30);
        file.interchange.time = chrono::NaiveTime::from_hms_opt(8, 0, 0);

        let text = encode(&file).unwrap();
        assert!(text.contains("*230630*0800*^*00501*000000012*0*T*:~"));
        assert!(text.contains("~GS*BE*ACME*PLAN*20230630*0800*12*X*005010X220A1~"));
        assert!(text.contains("~BGN*00*BATCH-1*20230630*0800****2~"));

        // Date alone keeps the encoder's time of day
        file.interchange.time = None;
        let text = encode(&file).unwrap();
        assert!(text.contains("~GS*BE*ACME*PLAN*20230630*0930*12*X*005010X220A1~"));
    }

    #[test]
    fn test_optional_member_segments() {
        let mut file = file();
        let subscriber = &mut file.members[0];
        subscriber.group_number = Some("GRP1".to_string());
        subscriber.hire_date = NaiveDate::from_ymd_opt(2020, 5, 4);
        subscriber.ssn = Some("111223333".to_string());
        subscriber.address = Some(Address {
            line1: "1 Main St".to_string(),
            line2: None,
            city: "Springfield".to_string(),
            state: Some("IL".to_string()),
            postal_code: Some("62701".to_string()),
            country: None,
        });
        subscriber.coverages[0].end = NaiveDate::from_ymd_opt(2024, 12, 31);

        let text = encode(&file).unwrap();
        assert!(text.contains(
            "~REF*0F*SUB1~REF*1L*GRP1~DTP*336*D8*20200504~NM1*IL*1*Doe*John****34*111223333~\
             N3*1 Main St~N4*Springfield*IL*62701~HD*021**HLT**FAM~DTP*348*D8*20240201~\
             DTP*349*D8*20241231~"
        ));
    }

    #[test]
    fn test_member_error_names_member() {
        let mut file = file();
        file.members[1].relationship = "neighbour".to_string();

        let err = encode(&file).unwrap_err();
        assert!(matches!(err, Error::Member { .. }));
        let message = err.to_string();
        assert!(message.contains("SUB1 (Mary Doe)"));
        assert!(message.contains("neighbour"));
    }

    #[test]
    fn test_coverage_end_before_start() {
        let mut file = file();
        file.members[0].coverages[0].end = NaiveDate::from_ymd_opt(2023, 1, 1);
        assert!(matches!(
            encode(&file).unwrap_err(),
            Error::Member { .. }
        ));
    }

    #[test]
    fn test_party_requires_paired_identification() {
        let mut file = file();
        file.payer.id = Some("999".to_string());
        assert!(matches!(
            encode(&file).unwrap_err(),
            Error::Segment(x12_segments::Error::RequiredFieldMissing { .. })
        ));
    }

    #[test]
    fn test_segment_count_matches_trailer() {
        let file = file();
        let interchange = Encoder::new(Delimiters::default())
            .with_timestamp(timestamp())
            .build(&file)
            .unwrap();
        let transaction = &interchange.groups()[0].transactions()[0];

        // ST BGN N1 N1 + 2 * (INS REF NM1 HD DTP) + SE
        assert_eq!(transaction.segment_count(), 15);
        assert_eq!(transaction.trailer().segment_count(), "15");
    }
}
