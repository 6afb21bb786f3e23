//! Integration tests for x12-enrollment
//!
//! Encodes the sample enrollment in `demos/` and checks the envelope
//! trailers of the rendered document against its contents.

use chrono::{NaiveDate, NaiveDateTime};
use std::io::Write;
use std::path::PathBuf;
use x12_enrollment::{EnrollmentFile, Encoder, Error, load_roster};
use x12_segments::Delimiters;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 20)
        .unwrap()
        .and_hms_opt(16, 5, 0)
        .unwrap()
}

fn encode(file: &EnrollmentFile) -> anyhow::Result<String> {
    Ok(Encoder::new(Delimiters::default())
        .with_timestamp(timestamp())
        .encode(file)?)
}

/// Split a rendered document into element lists
fn segments(text: &str) -> Vec<Vec<&str>> {
    text.split('~')
        .filter(|s| !s.is_empty())
        .map(|s| s.split('*').collect())
        .collect()
}

/// Check every trailer against the segments it closes
fn assert_envelopes_consistent(segs: &[Vec<&str>]) {
    let isa = &segs[0];
    let iea = segs.last().unwrap();
    assert_eq!(isa[0], "ISA");
    assert_eq!(iea[0], "IEA");
    assert_eq!(iea[2], isa[13]);

    let mut groups = 0;
    let mut group_start = None;
    let mut transactions = 0;
    let mut transaction_start = None;

    for (i, seg) in segs.iter().enumerate() {
        match seg[0] {
            "GS" => {
                group_start = Some(i);
                transactions = 0;
            }
            "ST" => transaction_start = Some(i),
            "SE" => {
                let start = transaction_start.take().unwrap();
                assert_eq!(seg[1], (i - start + 1).to_string(), "SE01 at segment {i}");
                assert_eq!(seg[2], segs[start][2], "SE02 at segment {i}");
                transactions += 1;
            }
            "GE" => {
                let start = group_start.take().unwrap();
                assert_eq!(seg[1], transactions.to_string());
                assert_eq!(seg[2], segs[start][6]);
                groups += 1;
            }
            _ => {}
        }
    }

    assert_eq!(iea[1], groups.to_string());
}

#[test]
fn test_sample_enrollment_encodes() -> anyhow::Result<()> {
    let file = EnrollmentFile::load(demo("enrollment.yaml"))?;
    assert_eq!(file.members.len(), 2);

    let text = encode(&file)?;
    let segs = segments(&text);
    assert_envelopes_consistent(&segs);

    // ISA GS + 24 transaction segments + GE IEA
    assert_eq!(segs.len(), 28);
    assert_eq!(segs[0][5], "30");
    assert_eq!(segs[0][7], "33");
    assert_eq!(segs[0][14], "0");
    assert_eq!(segs[0][15], "T");

    assert!(text.contains("~REF*38*MP-7781~DTP*007*D8*20240201~"));
    assert!(text.contains("~INS*Y*18*021*28*A***FT~"));
    assert!(text.contains("~HD*021**HLT*PPO Gold*ESP~DTP*348*D8*20240201~"));
    assert!(text.contains("~HD*021**DEN**ESP~DTP*348*D8*20240201~DTP*349*D8*20241231~"));
    assert!(text.contains("~INS*N*01*021**A~REF*0F*SUB001~NM1*IL*1*Doe*Mary~"));
    Ok(())
}

#[test]
fn test_roster_members_are_appended() -> anyhow::Result<()> {
    let mut file = EnrollmentFile::load(demo("enrollment.yaml"))?;
    let roster = load_roster(demo("roster.csv"))?;
    assert_eq!(roster.len(), 3);
    assert_eq!(roster[0].coverages.len(), 2);
    file.extend_members(roster);

    let text = encode(&file)?;
    let segs = segments(&text);
    assert_envelopes_consistent(&segs);
    assert_eq!(segs.len(), 28 + 18);

    assert!(text.contains("~INS*Y*18*021**A~REF*0F*SUB002~NM1*IL*1*Roe*Richard****34*222334444~"));
    assert!(text.contains("~HD*021**VIS**ECH~"));
    assert!(text.contains("~INS*N*19*021**A~REF*0F*SUB002~NM1*IL*1*Roe*Ann~"));
    assert!(text.contains("~INS*Y*18*024**A~"));
    assert!(text.contains("~HD*024**HLT*PPO Gold*EMP~DTP*348*D8*20230101~DTP*349*D8*20240229~"));
    Ok(())
}

#[test]
fn test_json_enrollment_file() -> anyhow::Result<()> {
    let file = EnrollmentFile::load(demo("enrollment.yaml"))?;

    let mut json = tempfile::Builder::new().suffix(".json").tempfile()?;
    json.write_all(serde_json::to_string_pretty(&file)?.as_bytes())?;
    let reloaded = EnrollmentFile::load(json.path())?;

    assert_eq!(reloaded, file);
    assert_eq!(encode(&reloaded)?, encode(&file)?);
    Ok(())
}

#[test]
fn test_load_errors() -> anyhow::Result<()> {
    let mut txt = tempfile::Builder::new().suffix(".txt").tempfile()?;
    txt.write_all(b"interchange: {}")?;
    assert!(matches!(
        EnrollmentFile::load(txt.path()),
        Err(Error::UnsupportedFormat(_))
    ));

    assert!(matches!(
        EnrollmentFile::load(demo("missing.yaml")),
        Err(Error::Io(_))
    ));

    let mut bad = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    bad.write_all(b"interchange:\n  sender_id: A\n")?;
    assert!(matches!(
        EnrollmentFile::load(bad.path()),
        Err(Error::Yaml(_))
    ));
    Ok(())
}

#[test]
fn test_line_break_delimiters() -> anyhow::Result<()> {
    let file = EnrollmentFile::load(demo("enrollment.yaml"))?;
    let text = Encoder::new(Delimiters::default().with_line_breaks())
        .with_timestamp(timestamp())
        .encode(&file)?;

    assert_eq!(text.lines().count(), 28);
    assert!(text.lines().all(|line| line.ends_with('~')));
    Ok(())
}
