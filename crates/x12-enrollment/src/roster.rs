//! CSV roster import
//!
//! A roster has one row per member coverage. Rows for the same person
//! (subscriber ID, relationship and name) are merged into one [`Member`]
//! carrying all of their coverages, in the order the rows appear. A row
//! without coverage columns adds the member with no coverage loop. Member
//! columns repeated on later rows must match the first row.

use crate::model::{Address, Coverage, Member, default_benefit_status, default_maintenance_type};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// One CSV row. Empty cells deserialize as `None`.
#[derive(Debug, Deserialize)]
struct RosterRow {
    subscriber_id: String,
    relationship: String,
    #[serde(default)]
    maintenance_type: Option<String>,
    #[serde(default)]
    maintenance_reason: Option<String>,
    #[serde(default)]
    benefit_status: Option<String>,
    #[serde(default)]
    employment_status: Option<String>,
    #[serde(default)]
    group_number: Option<String>,
    #[serde(default)]
    hire_date: Option<NaiveDate>,
    last_name: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    middle_name: Option<String>,
    #[serde(default)]
    ssn: Option<String>,
    #[serde(default)]
    address_line1: Option<String>,
    #[serde(default)]
    address_line2: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    insurance_line: Option<String>,
    #[serde(default)]
    plan: Option<String>,
    #[serde(default)]
    coverage_level: Option<String>,
    #[serde(default)]
    coverage_start: Option<NaiveDate>,
    #[serde(default)]
    coverage_end: Option<NaiveDate>,
}

impl RosterRow {
    fn key(&self) -> (String, String, String, String) {
        (
            self.subscriber_id.clone(),
            self.relationship.to_lowercase(),
            self.last_name.to_lowercase(),
            self.first_name.as_deref().unwrap_or_default().to_lowercase(),
        )
    }

    fn coverage(&self, line: u64) -> Result<Option<Coverage>> {
        match (&self.insurance_line, self.coverage_start) {
            (None, None) => Ok(None),
            (Some(insurance_line), Some(start)) => Ok(Some(Coverage {
                maintenance_type: self.maintenance_type.clone(),
                insurance_line: insurance_line.clone(),
                plan: self.plan.clone(),
                coverage_level: self.coverage_level.clone(),
                start,
                end: self.coverage_end,
            })),
            (Some(_), None) => Err(Error::roster(line, "insurance_line requires coverage_start")),
            (None, Some(_)) => Err(Error::roster(line, "coverage_start requires insurance_line")),
        }
    }

    fn address(&self, line: u64) -> Result<Option<Address>> {
        match (&self.address_line1, &self.city) {
            (None, None) => Ok(None),
            (Some(line1), Some(city)) => Ok(Some(Address {
                line1: line1.clone(),
                line2: self.address_line2.clone(),
                city: city.clone(),
                state: self.state.clone(),
                postal_code: self.postal_code.clone(),
                country: self.country.clone(),
            })),
            _ => Err(Error::roster(line, "address_line1 and city must be given together")),
        }
    }

    fn into_member(self, line: u64) -> Result<Member> {
        let coverage = self.coverage(line)?;
        let address = self.address(line)?;
        Ok(Member {
            subscriber_id: self.subscriber_id,
            relationship: self.relationship,
            maintenance_type: self
                .maintenance_type
                .unwrap_or_else(default_maintenance_type),
            maintenance_reason: self.maintenance_reason,
            benefit_status: self.benefit_status.unwrap_or_else(default_benefit_status),
            employment_status: self.employment_status,
            group_number: self.group_number,
            hire_date: self.hire_date,
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            ssn: self.ssn,
            address,
            coverages: coverage.into_iter().collect(),
        })
    }

    /// Add this row's coverage to a member from an earlier row
    ///
    /// Member columns left empty inherit the earlier values; filled ones
    /// must agree with them. `maintenance_type` also sets HD01, so it may
    /// vary per row.
    fn merge_into(&self, member: &mut Member, line: u64) -> Result<()> {
        let address = self.address(line)?;
        let mut conflicts = Vec::new();
        if differs(self.maintenance_reason.as_ref(), member.maintenance_reason.as_ref()) {
            conflicts.push("maintenance_reason");
        }
        if differs(self.benefit_status.as_ref(), Some(&member.benefit_status)) {
            conflicts.push("benefit_status");
        }
        if differs(self.employment_status.as_ref(), member.employment_status.as_ref()) {
            conflicts.push("employment_status");
        }
        if differs(self.group_number.as_ref(), member.group_number.as_ref()) {
            conflicts.push("group_number");
        }
        if differs(self.hire_date.as_ref(), member.hire_date.as_ref()) {
            conflicts.push("hire_date");
        }
        if differs(self.middle_name.as_ref(), member.middle_name.as_ref()) {
            conflicts.push("middle_name");
        }
        if differs(self.ssn.as_ref(), member.ssn.as_ref()) {
            conflicts.push("ssn");
        }
        if differs(address.as_ref(), member.address.as_ref()) {
            conflicts.push("address");
        }
        if !conflicts.is_empty() {
            return Err(Error::roster(
                line,
                format!(
                    "{} differ from an earlier row for {}",
                    conflicts.join(", "),
                    member.label()
                ),
            ));
        }

        if let Some(coverage) = self.coverage(line)? {
            member.coverages.push(coverage);
        }
        Ok(())
    }
}

fn differs<T: PartialEq>(row: Option<&T>, member: Option<&T>) -> bool {
    row.is_some() && row != member
}

/// Parse roster CSV text into members
///
/// # Errors
///
/// Returns [`Error::Csv`] for malformed CSV and [`Error::Roster`] with the
/// line number for rows that cannot become a member.
pub fn parse_roster(content: &str) -> Result<Vec<Member>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();

    let mut members: Vec<Member> = Vec::new();
    let mut index: HashMap<(String, String, String, String), usize> = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: RosterRow = record
            .deserialize(Some(&headers))
            .map_err(|e| Error::roster(line, e.to_string()))?;

        if row.subscriber_id.is_empty() || row.relationship.is_empty() || row.last_name.is_empty()
        {
            return Err(Error::roster(
                line,
                "subscriber_id, relationship and last_name are required",
            ));
        }

        let key = row.key();
        if let Some(&existing) = index.get(&key) {
            row.merge_into(&mut members[existing], line)?;
        } else {
            index.insert(key, members.len());
            members.push(row.into_member(line)?);
        }
    }

    debug!(members = members.len(), "Parsed roster");
    Ok(members)
}

/// Read and parse a roster CSV file
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise the errors
/// of [`parse_roster`].
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Member>> {
    let content = std::fs::read_to_string(path)?;
    parse_roster(&content)
}
