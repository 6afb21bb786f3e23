//! Segment trait and an untyped segment

use crate::renderer::SegmentRenderer;
use crate::{Error, Result};
use std::fmt;

/// A segment with a fixed number of optional element slots
pub trait X12Segment: fmt::Debug + Send + Sync {
    /// Segment identifier (e.g. "ISA", "HD")
    fn segment_id(&self) -> &str;

    /// Element slots in order; the length is fixed per segment type
    fn elements(&self) -> Vec<Option<&str>>;

    /// Render this segment as one wire line
    ///
    /// # Errors
    ///
    /// Returns the renderer's error, e.g. [`Error::NoContext`].
    fn render(&self, renderer: &SegmentRenderer) -> Result<String> {
        renderer.render(self.segment_id(), &self.elements())
    }
}

/// A segment assembled from raw element values
///
/// Used for segments that have no typed builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericSegment {
    segment_id: String,
    elements: Vec<Option<String>>,
}

impl GenericSegment {
    /// Create a segment from an identifier and its element slots
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] when the identifier is not two or three
    /// uppercase letters or digits starting with a letter.
    pub fn new(segment_id: impl Into<String>, elements: Vec<Option<String>>) -> Result<Self> {
        let segment_id = segment_id.into();
        let valid = (2..=3).contains(&segment_id.len())
            && segment_id.starts_with(|c: char| c.is_ascii_uppercase())
            && segment_id
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if !valid {
            return Err(Error::invalid(
                segment_id.clone(),
                "identifier",
                format!("'{segment_id}' is not a segment identifier"),
            ));
        }
        Ok(Self {
            segment_id,
            elements,
        })
    }

    /// Create a segment treating empty strings as absent slots
    ///
    /// # Errors
    ///
    /// Same as [`GenericSegment::new`].
    pub fn from_values<I, S>(segment_id: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = values
            .into_iter()
            .map(Into::into)
            .map(|value: String| (!value.is_empty()).then_some(value))
            .collect();
        Self::new(segment_id, elements)
    }

    /// Number of element slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the segment has no element slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl X12Segment for GenericSegment {
    fn segment_id(&self) -> &str {
        &self.segment_id
    }

    fn elements(&self) -> Vec<Option<&str>> {
        self.elements.iter().map(Option::as_deref).collect()
    }
}
