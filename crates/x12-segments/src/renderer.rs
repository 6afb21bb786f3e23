//! Segment line rendering
//!
//! A line is `ID (SEP value)* TERM`. Trailing absent elements are dropped;
//! absent elements before the last present one render as empty fields.

use crate::syntax::Delimiters;
use crate::{Error, Result};

/// Renders segments with the delimiters of one document
///
/// A renderer created with [`SegmentRenderer::new`] has no delimiters and
/// refuses to render. Delimiters are never guessed.
#[derive(Debug, Clone, Default)]
pub struct SegmentRenderer {
    delimiters: Option<Delimiters>,
}

impl SegmentRenderer {
    /// Create a renderer without delimiters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given delimiters
    #[must_use]
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        Self {
            delimiters: Some(delimiters),
        }
    }

    /// Replace the delimiters, e.g. at the start of a new document
    pub fn set_delimiters(&mut self, delimiters: Delimiters) {
        self.delimiters = Some(delimiters);
    }

    /// Get the configured delimiters
    #[must_use]
    pub fn delimiters(&self) -> Option<&Delimiters> {
        self.delimiters.as_ref()
    }

    /// Render one segment line
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySegment`] if `elements` is empty and
    /// [`Error::NoContext`] if no delimiters are configured.
    pub fn render(&self, segment_id: &str, elements: &[Option<&str>]) -> Result<String> {
        if elements.is_empty() {
            return Err(Error::EmptySegment {
                segment_id: segment_id.to_string(),
            });
        }
        let delimiters = self.delimiters.as_ref().ok_or_else(|| Error::NoContext {
            segment_id: segment_id.to_string(),
        })?;
        render(segment_id, elements, delimiters)
    }
}

/// Render one segment line with explicit delimiters
///
/// # Errors
///
/// Returns [`Error::EmptySegment`] if `elements` is empty.
pub fn render(
    segment_id: &str,
    elements: &[Option<&str>],
    delimiters: &Delimiters,
) -> Result<String> {
    if elements.is_empty() {
        return Err(Error::EmptySegment {
            segment_id: segment_id.to_string(),
        });
    }

    let render_len = elements
        .iter()
        .rposition(Option::is_some)
        .map_or(0, |last| last + 1);

    let capacity = segment_id.len()
        + delimiters.segment_terminator.len()
        + elements[..render_len]
            .iter()
            .map(|e| e.map_or(0, str::len) + delimiters.element.len_utf8())
            .sum::<usize>();

    let mut line = String::with_capacity(capacity);
    line.push_str(segment_id);
    for element in &elements[..render_len] {
        line.push(delimiters.element);
        if let Some(value) = element {
            line.push_str(value);
        }
    }
    line.push_str(&delimiters.segment_terminator);

    Ok(line)
}
