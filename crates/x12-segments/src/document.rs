//! Interchange, functional group and transaction set assembly
//!
//! Each envelope owns its header and contents. Trailers are derived from the
//! contents when rendering, so counts and control numbers cannot drift.

use crate::envelope::{GeSegment, GsSegment, IeaSegment, IsaSegment, SeSegment, StSegment};
use crate::renderer::SegmentRenderer;
use crate::segment::X12Segment;
use crate::syntax::Delimiters;
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

// ============================================================================
// Transaction set (ST ... SE)
// ============================================================================

/// One transaction set: ST, body segments, SE
#[derive(Debug)]
pub struct TransactionSet {
    header: StSegment,
    body: Vec<Box<dyn X12Segment>>,
}

impl TransactionSet {
    /// Create an empty transaction set
    #[must_use]
    pub fn new(header: StSegment) -> Self {
        Self {
            header,
            body: Vec::new(),
        }
    }

    /// Append a body segment
    pub fn push(&mut self, segment: impl X12Segment + 'static) {
        self.body.push(Box::new(segment));
    }

    /// Append a body segment, builder style
    #[must_use]
    pub fn with(mut self, segment: impl X12Segment + 'static) -> Self {
        self.push(segment);
        self
    }

    /// Transaction set header
    #[must_use]
    pub fn header(&self) -> &StSegment {
        &self.header
    }

    /// Body segments between ST and SE
    #[must_use]
    pub fn body(&self) -> &[Box<dyn X12Segment>] {
        &self.body
    }

    /// Number of segments from ST through SE inclusive
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.body.len() + 2
    }

    /// SE trailer for the current contents
    #[must_use]
    pub fn trailer(&self) -> SeSegment {
        SeSegment::new(self.segment_count(), self.header.control_number())
    }

    fn render_into(&self, renderer: &SegmentRenderer, out: &mut String) -> Result<()> {
        out.push_str(&self.header.render(renderer)?);
        for segment in &self.body {
            out.push_str(&segment.render(renderer)?);
        }
        out.push_str(&self.trailer().render(renderer)?);
        Ok(())
    }
}

// ============================================================================
// Functional group (GS ... GE)
// ============================================================================

/// One functional group: GS, transaction sets, GE
#[derive(Debug)]
pub struct FunctionalGroup {
    header: GsSegment,
    transactions: Vec<TransactionSet>,
}

impl FunctionalGroup {
    /// Create an empty functional group
    #[must_use]
    pub fn new(header: GsSegment) -> Self {
        Self {
            header,
            transactions: Vec::new(),
        }
    }

    /// Append a transaction set
    pub fn push(&mut self, transaction: TransactionSet) {
        self.transactions.push(transaction);
    }

    /// Append a transaction set, builder style
    #[must_use]
    pub fn with(mut self, transaction: TransactionSet) -> Self {
        self.push(transaction);
        self
    }

    /// Group header
    #[must_use]
    pub fn header(&self) -> &GsSegment {
        &self.header
    }

    /// Transaction sets in the group
    #[must_use]
    pub fn transactions(&self) -> &[TransactionSet] {
        &self.transactions
    }

    /// GE trailer for the current contents
    #[must_use]
    pub fn trailer(&self) -> GeSegment {
        GeSegment::new(self.transactions.len(), self.header.control_number())
    }

    /// Number of segments from GS through GE inclusive
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.transactions
            .iter()
            .map(TransactionSet::segment_count)
            .sum::<usize>()
            + 2
    }

    fn render_into(&self, renderer: &SegmentRenderer, out: &mut String) -> Result<()> {
        out.push_str(&self.header.render(renderer)?);
        for transaction in &self.transactions {
            transaction.render_into(renderer, out)?;
        }
        out.push_str(&self.trailer().render(renderer)?);
        Ok(())
    }
}

// ============================================================================
// Interchange (ISA ... IEA)
// ============================================================================

/// One interchange: ISA, functional groups, IEA
#[derive(Debug)]
pub struct Interchange {
    header: IsaSegment,
    groups: Vec<FunctionalGroup>,
}

impl Interchange {
    /// Create an empty interchange
    #[must_use]
    pub fn new(header: IsaSegment) -> Self {
        Self {
            header,
            groups: Vec::new(),
        }
    }

    /// Append a functional group
    pub fn push(&mut self, group: FunctionalGroup) {
        self.groups.push(group);
    }

    /// Append a functional group, builder style
    #[must_use]
    pub fn with(mut self, group: FunctionalGroup) -> Self {
        self.push(group);
        self
    }

    /// Interchange header
    #[must_use]
    pub fn header(&self) -> &IsaSegment {
        &self.header
    }

    /// Functional groups in the interchange
    #[must_use]
    pub fn groups(&self) -> &[FunctionalGroup] {
        &self.groups
    }

    /// IEA trailer for the current contents
    #[must_use]
    pub fn trailer(&self) -> IeaSegment {
        IeaSegment::new(self.groups.len(), self.header.control_number())
    }

    /// Number of segments from ISA through IEA inclusive
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.groups
            .iter()
            .map(FunctionalGroup::segment_count)
            .sum::<usize>()
            + 2
    }

    /// Render the whole document
    ///
    /// The interchange is validated first, and the separators announced in
    /// ISA11 and ISA16 must be the ones used to render.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiters`] for unusable or mismatched
    /// delimiters, [`Error::Envelope`] for a structurally invalid
    /// interchange, or any segment rendering error.
    pub fn render(&self, delimiters: &Delimiters) -> Result<String> {
        delimiters.validate()?;
        check_announced(
            "ISA11 repetition",
            self.header.repetition_separator(),
            delimiters.repetition,
        )?;
        check_announced(
            "ISA16 component",
            self.header.component_separator(),
            delimiters.component,
        )?;
        validate_interchange(self)?;

        let renderer = SegmentRenderer::with_delimiters(delimiters.clone());
        let mut out = String::new();
        out.push_str(&self.header.render(&renderer)?);
        for group in &self.groups {
            group.render_into(&renderer, &mut out)?;
        }
        out.push_str(&self.trailer().render(&renderer)?);

        debug!(
            control_number = self.header.control_number(),
            groups = self.groups.len(),
            segments = self.segment_count(),
            bytes = out.len(),
            "Rendered interchange"
        );
        Ok(out)
    }
}

fn check_announced(element: &str, announced: &str, actual: char) -> Result<()> {
    if announced.chars().eq(std::iter::once(actual)) {
        Ok(())
    } else {
        Err(Error::InvalidDelimiters(format!(
            "{element} separator is '{announced}' but the document uses '{actual}'"
        )))
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the envelope structure of an interchange
///
/// Every group must hold at least one transaction set, group control numbers
/// must be unique in the interchange and transaction set control numbers
/// unique in their group.
///
/// # Errors
///
/// Returns [`Error::Envelope`] describing the first problem found.
pub fn validate_interchange(interchange: &Interchange) -> Result<()> {
    if interchange.groups.is_empty() {
        return Err(Error::Envelope(format!(
            "Interchange {} contains no functional groups",
            interchange.header.control_number()
        )));
    }

    let mut seen = HashSet::new();
    for group in &interchange.groups {
        let control = group.header.control_number();
        if !seen.insert(control) {
            return Err(Error::Envelope(format!(
                "Duplicate group control number {control} in interchange {}",
                interchange.header.control_number()
            )));
        }
        validate_group(group)
            .map_err(|e| Error::Envelope(format!("Group {control} validation failed: {e}")))?;
    }

    Ok(())
}

/// Validate a functional group
///
/// # Errors
///
/// Returns [`Error::Envelope`] when the group is empty or two transaction
/// sets share a control number.
pub fn validate_group(group: &FunctionalGroup) -> Result<()> {
    if group.transactions.is_empty() {
        return Err(Error::Envelope(
            "Functional group contains no transaction sets".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for transaction in &group.transactions {
        let control = transaction.header.control_number();
        if !seen.insert(control) {
            return Err(Error::Envelope(format!(
                "Duplicate transaction set control number {control}"
            )));
        }
    }

    Ok(())
}
