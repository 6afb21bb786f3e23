//! Integration tests for x12-segments
//!
//! Builds complete 834 documents from typed segments and checks the wire
//! text segment by segment.

use chrono::{NaiveDate, NaiveTime};
use x12_segments::document::validate_interchange;
use x12_segments::{
    BgnSegment, Delimiters, DtpSegment, Error, FunctionalGroup, GenericSegment, GsSegment,
    HdSegment, InsSegment, Interchange, IsaSegment, N1Segment, N3Segment, N4Segment, Nm1Segment,
    RefSegment, SegmentRenderer, StSegment, TransactionSet, X12Segment,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

/// Helper to create a subscriber with one dependent, both on a health plan
fn enrollment_transaction(control: &str) -> anyhow::Result<TransactionSet> {
    let st = StSegment::builder().control_number(control).build()?;

    let mut transaction = TransactionSet::new(st)
        .with(
            BgnSegment::builder()
                .reference("12456")
                .date(ymd(2024, 1, 15))
                .time(noon())
                .action("update")?
                .build()?,
        )
        .with(RefSegment::new("38", "MASTER-0001")?)
        .with(DtpSegment::date("file effective", ymd(2024, 2, 1))?)
        .with(
            N1Segment::builder()
                .entity("sponsor")?
                .name("Acme Corp")
                .identification("fein", "123456789")?
                .build()?,
        )
        .with(
            N1Segment::builder()
                .entity("payer")?
                .name("Good Health Plan")
                .identification("fein", "987654321")?
                .build()?,
        );

    // Subscriber loop
    transaction.push(
        InsSegment::builder()
            .subscriber("yes")?
            .relationship("subscriber")?
            .maintenance_type("add")?
            .maintenance_reason("new hire")?
            .benefit_status("active")?
            .employment_status("full time")?
            .build()?,
    );
    transaction.push(RefSegment::new("member id", "SUB001")?);
    transaction.push(RefSegment::new("group", "GRP-77")?);
    transaction.push(DtpSegment::date("hire", ymd(2023, 11, 1))?);
    transaction.push(
        Nm1Segment::builder()
            .last_name("Doe")
            .first_name("John")
            .identification("ssn", "111223333")?
            .build()?,
    );
    transaction.push(N3Segment::new("1 Main St", None)?);
    transaction.push(
        N4Segment::builder()
            .city("Springfield")
            .state("IL")
            .postal_code("62701")
            .build()?,
    );
    transaction.push(
        HdSegment::builder()
            .maintenance_type("add")?
            .insurance_line("health")?
            .plan_description("PPO Gold")
            .coverage_level("employee and one dependent")?
            .build()?,
    );
    transaction.push(DtpSegment::date("coverage start", ymd(2024, 2, 1))?);

    // Dependent loop
    transaction.push(
        InsSegment::builder()
            .subscriber("no")?
            .relationship("child")?
            .maintenance_type("add")?
            .benefit_status("A")?
            .build()?,
    );
    transaction.push(RefSegment::new("0F", "SUB001")?);
    transaction.push(Nm1Segment::builder().last_name("Doe").first_name("Jane").build()?);
    transaction.push(
        HdSegment::builder()
            .maintenance_type("021")?
            .insurance_line("HLT")?
            .build()?,
    );
    transaction.push(DtpSegment::date_range(
        "benefit begin",
        ymd(2024, 2, 1),
        ymd(2024, 12, 31),
    )?);

    Ok(transaction)
}

fn interchange(delimiters: &Delimiters) -> anyhow::Result<Interchange> {
    let isa = IsaSegment::builder()
        .sender_qualifier("fein")?
        .sender_id("123456789")
        .receiver_qualifier("naic")?
        .receiver_id("54321")
        .date(ymd(2024, 1, 15))
        .time(noon())
        .control_number(17)
        .acknowledgment_requested("no")?
        .usage_indicator("T")?
        .delimiters(delimiters)
        .build()?;

    let gs = GsSegment::builder()
        .sender_code("123456789")
        .receiver_code("54321")
        .date(ymd(2024, 1, 15))
        .time(noon())
        .control_number(17)
        .build()?;

    Ok(Interchange::new(isa).with(FunctionalGroup::new(gs).with(enrollment_transaction("0001")?)))
}

/// Split rendered text into segments, each as a list of elements
fn segments<'a>(text: &'a str, delimiters: &Delimiters) -> Vec<Vec<&'a str>> {
    text.split(delimiters.segment_terminator.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.split(delimiters.element).collect())
        .collect()
}

#[test]
fn test_complete_834_document() -> anyhow::Result<()> {
    let delimiters = Delimiters::default();
    let interchange = interchange(&delimiters)?;
    validate_interchange(&interchange)?;

    let text = interchange.render(&delimiters)?;
    let segs = segments(&text, &delimiters);
    let ids: Vec<&str> = segs.iter().map(|s| s[0]).collect();

    assert_eq!(
        ids,
        vec![
            "ISA", "GS", "ST", "BGN", "REF", "DTP", "N1", "N1", "INS", "REF", "REF", "DTP",
            "NM1", "N3", "N4", "HD", "DTP", "INS", "REF", "NM1", "HD", "DTP", "SE", "GE", "IEA",
        ]
    );
    assert_eq!(segs.len(), interchange.segment_count());

    // ISA carries all 16 elements
    assert_eq!(segs[0].len(), 17);
    assert_eq!(segs[0][5], "30");
    assert_eq!(segs[0][7], "33");
    assert_eq!(segs[0][15], "T");

    // SE01 counts ST through SE
    let st = ids.iter().position(|id| *id == "ST").unwrap();
    let se = ids.iter().position(|id| *id == "SE").unwrap();
    assert_eq!(segs[se][1], (se - st + 1).to_string());
    assert_eq!(segs[se][2], segs[st][2]);

    // GE and IEA echo their headers
    assert_eq!(segs[23], vec!["GE", "1", "17"]);
    assert_eq!(segs[24], vec!["IEA", "1", "000000017"]);

    Ok(())
}

#[test]
fn test_member_loop_lines() -> anyhow::Result<()> {
    let delimiters = Delimiters::default();
    let text = interchange(&delimiters)?.render(&delimiters)?;

    assert!(text.contains("~BGN*00*12456*20240115*1200****2~"));
    assert!(text.contains("~N1*P5*Acme Corp*FI*123456789~"));
    assert!(text.contains("~INS*Y*18*021*28*A***FT~"));
    assert!(text.contains("~NM1*IL*1*Doe*John****34*111223333~"));
    assert!(text.contains("~HD*021**HLT*PPO Gold*E1D~"));
    assert!(text.contains("~INS*N*19*021**A~"));
    assert!(text.contains("~NM1*IL*1*Doe*Jane~"));
    assert!(text.contains("~DTP*348*RD8*20240201-20241231~"));
    Ok(())
}

#[test]
fn test_document_with_custom_delimiters() -> anyhow::Result<()> {
    let delimiters: Delimiters = serde_json::from_str(
        r#"{"element": "|", "component": ">", "repetition": "{", "segment_terminator": "\n"}"#,
    )?;
    let interchange = interchange(&delimiters)?;
    let text = interchange.render(&delimiters)?;

    let first = text.lines().next().unwrap();
    assert!(first.starts_with("ISA|00|"));
    assert!(first.ends_with("|{|00501|000000017|0|T|>"));
    assert_eq!(text.lines().count(), interchange.segment_count());
    Ok(())
}

#[test]
fn test_delimiters_must_match_isa() -> anyhow::Result<()> {
    let interchange = interchange(&Delimiters::default())?;
    let other = Delimiters::default().with_repetition('{');

    let err = interchange.render(&other).unwrap_err();
    assert!(matches!(err, Error::InvalidDelimiters(_)));
    assert!(err.to_string().contains("ISA11"));
    Ok(())
}

#[test]
fn test_unknown_code_is_reported_with_set_name() {
    let err = HdSegment::builder().insurance_line("space travel").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Insurance Line Code"));
    assert!(message.contains("space travel"));
}

#[test]
fn test_generic_segment_in_body() -> anyhow::Result<()> {
    let delimiters = Delimiters::default();
    let st = StSegment::builder().control_number("0042").build()?;
    let transaction = TransactionSet::new(st)
        .with(GenericSegment::from_values("N1", ["01", "Test Name", "PB", "123456"])?);

    let renderer = SegmentRenderer::with_delimiters(delimiters);
    let lines: Vec<String> = transaction
        .body()
        .iter()
        .map(|segment| segment.render(&renderer))
        .collect::<Result<_, _>>()?;

    assert_eq!(lines, vec!["N1*01*Test Name*PB*123456~"]);
    assert_eq!(transaction.trailer().render(&renderer)?, "SE*3*0042~");
    Ok(())
}
