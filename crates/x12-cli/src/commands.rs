//! Command implementations
//!
//! Each command returns the text to print on stdout. Logging goes to stderr.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;
use x12_codes::{CodeEntry, CodeSet};
use x12_enrollment::{EnrollmentFile, Encoder, FileFormat, parse_roster};
use x12_segments::{Delimiters, GenericSegment, SegmentRenderer, X12Segment};

/// Resolve one input against a code set
pub fn lookup(set: &str, input: &str, json: bool) -> Result<String> {
    let entry = x12_codes::registry().resolve(set, input)?;
    info!(set, input, code = entry.code, "Resolved");
    if json {
        return Ok(serde_json::to_string_pretty(entry)?);
    }
    Ok(format!("{}\t{}\t{}", entry.code, entry.name, entry.description))
}

#[derive(Serialize)]
struct CodeSetListing<'a> {
    name: &'a str,
    entries: &'a [CodeEntry],
    aliases: Vec<AliasListing<'a>>,
}

#[derive(Serialize)]
struct AliasListing<'a> {
    term: &'a str,
    code: &'a str,
}

/// List the entries and aliases of one code set
pub fn codes(set: &str, json: bool) -> Result<String> {
    let set: &CodeSet = x12_codes::registry()
        .get(set)
        .with_context(|| format!("Unknown code set: {set}"))?;

    if json {
        let listing = CodeSetListing {
            name: set.name(),
            entries: set.entries(),
            aliases: set
                .aliases()
                .map(|(term, entry)| AliasListing {
                    term,
                    code: entry.code,
                })
                .collect(),
        };
        return Ok(serde_json::to_string_pretty(&listing)?);
    }

    let mut out = String::new();
    writeln!(out, "{}", set.name())?;
    for entry in set.entries() {
        writeln!(out, "  {:<5} {:<40} {}", entry.code, entry.name, entry.description)?;
    }
    let mut aliases = set.aliases().peekable();
    if aliases.peek().is_some() {
        writeln!(out, "Aliases")?;
        for (term, entry) in aliases {
            writeln!(out, "  {term:<20} -> {}", entry.code)?;
        }
    }
    Ok(out)
}

/// List every code set with its size
pub fn sets(json: bool) -> Result<String> {
    let registry = x12_codes::registry();
    if json {
        let names: Vec<&str> = registry.list_names();
        return Ok(serde_json::to_string_pretty(&names)?);
    }

    let mut out = String::new();
    for set in registry.sets() {
        writeln!(out, "{:<40} {:>3} codes", set.name(), set.len())?;
    }
    Ok(out)
}

/// Render one segment from raw element values; empty values are absent
pub fn segment(id: &str, elements: &[String], delimiters: Delimiters) -> Result<String> {
    let segment = GenericSegment::from_values(id, elements.iter().map(String::as_str))?;
    let renderer = SegmentRenderer::with_delimiters(delimiters);
    Ok(segment.render(&renderer)?)
}

/// Encode an enrollment file, optionally adding members from a roster
pub async fn encode(
    input: &Path,
    roster: Option<&Path>,
    timestamp: Option<NaiveDateTime>,
    delimiters: Delimiters,
) -> Result<String> {
    let format = FileFormat::from_path(input)?;
    let text = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let mut file = EnrollmentFile::parse(&text, format)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    if let Some(roster) = roster {
        let content = tokio::fs::read_to_string(roster)
            .await
            .with_context(|| format!("Failed to read {}", roster.display()))?;
        let members = parse_roster(&content)
            .with_context(|| format!("Failed to import roster {}", roster.display()))?;
        info!(path = %roster.display(), members = members.len(), "Imported roster");
        file.extend_members(members);
    }

    let mut encoder = Encoder::new(delimiters);
    if let Some(timestamp) = timestamp {
        encoder = encoder.with_timestamp(timestamp);
    }
    let document = encoder.encode(&file)?;
    info!(
        members = file.members.len(),
        bytes = document.len(),
        "Encoded enrollment"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_text_and_json() {
        let line = lookup("Acknowledgment Requested", "TA1", false).unwrap();
        assert!(line.starts_with("1\t"));

        let json = lookup("acknowledgment-requested", "no", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["code"], "0");
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("Acknowledgment Requested", "perhaps", false).unwrap_err();
        assert!(err.to_string().contains("perhaps"));
        assert!(lookup("No Such Set", "x", false).is_err());
    }

    #[test]
    fn test_codes_listing() {
        let text = codes("Usage Indicator", false);
        assert!(text.is_err());

        let text = codes("Interchange Usage Indicator", false).unwrap();
        assert!(text.contains("PRODUCTION"));
        assert!(text.contains("Aliases"));

        let json = codes("Interchange Usage Indicator", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_sets_listing() {
        let json = sets(true).unwrap();
        let names: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(names.len(), 25);
        assert!(sets(false).unwrap().contains("Insurance Line Code"));
    }

    #[test]
    fn test_segment_rendering() {
        let elements: Vec<String> = ["01", "Test Name", "PB", "123456"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            segment("N1", &elements, Delimiters::default()).unwrap(),
            "N1*01*Test Name*PB*123456~"
        );

        let sparse = vec!["a".to_string(), String::new(), "b".to_string(), String::new()];
        assert_eq!(
            segment("HD", &sparse, Delimiters::default()).unwrap(),
            "HD*a**b~"
        );
        assert!(segment("HD", &[], Delimiters::default()).is_err());
        assert!(segment("hd", &sparse, Delimiters::default()).is_err());
    }
}
