//! X12 delimiter definitions
//!
//! The element separator, component separator, repetition separator and
//! segment terminator are chosen per interchange. The component and
//! repetition separators are also announced in ISA16 and ISA11.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default X12 separators
pub const DEFAULT_ELEMENT_SEPARATOR: char = '*';
pub const DEFAULT_COMPONENT_SEPARATOR: char = ':';
pub const DEFAULT_REPETITION_SEPARATOR: char = '^';
pub const DEFAULT_SEGMENT_TERMINATOR: &str = "~";

/// Delimiters shared by every segment rendered within one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    /// Element separator (default '*')
    pub element: char,
    /// Component element separator, sent in ISA16 (default ':')
    pub component: char,
    /// Repetition separator, sent in ISA11 (default '^')
    pub repetition: char,
    /// Segment terminator, optionally followed by a line break (default "~")
    pub segment_terminator: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            element: DEFAULT_ELEMENT_SEPARATOR,
            component: DEFAULT_COMPONENT_SEPARATOR,
            repetition: DEFAULT_REPETITION_SEPARATOR,
            segment_terminator: DEFAULT_SEGMENT_TERMINATOR.to_string(),
        }
    }
}

impl Delimiters {
    /// Create delimiters with a custom element separator and terminator
    pub fn new(element: char, segment_terminator: impl Into<String>) -> Self {
        Self {
            element,
            segment_terminator: segment_terminator.into(),
            ..Self::default()
        }
    }

    /// Set the component separator
    #[must_use]
    pub fn with_component(mut self, component: char) -> Self {
        self.component = component;
        self
    }

    /// Set the repetition separator
    #[must_use]
    pub fn with_repetition(mut self, repetition: char) -> Self {
        self.repetition = repetition;
        self
    }

    /// Append a line break after every segment terminator
    #[must_use]
    pub fn with_line_breaks(mut self) -> Self {
        if !self.segment_terminator.ends_with('\n') {
            self.segment_terminator.push('\n');
        }
        self
    }

    /// Check that the separators can be told apart on the wire
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiters`] when the terminator is empty,
    /// two separators are equal, a separator is alphanumeric or whitespace,
    /// or the terminator contains a separator.
    pub fn validate(&self) -> Result<()> {
        if self.segment_terminator.is_empty() {
            return Err(Error::InvalidDelimiters(
                "segment terminator is empty".to_string(),
            ));
        }

        let separators = [
            ("element", self.element),
            ("component", self.component),
            ("repetition", self.repetition),
        ];

        for (i, &(name, sep)) in separators.iter().enumerate() {
            if sep.is_alphanumeric() || sep.is_whitespace() {
                return Err(Error::InvalidDelimiters(format!(
                    "{name} separator {sep:?} is not a delimiter character"
                )));
            }
            if self.segment_terminator.contains(sep) {
                return Err(Error::InvalidDelimiters(format!(
                    "segment terminator {:?} contains the {name} separator",
                    self.segment_terminator
                )));
            }
            if let Some((other, _)) = separators[i + 1..].iter().find(|(_, s)| *s == sep) {
                return Err(Error::InvalidDelimiters(format!(
                    "{name} and {other} separators are both {sep:?}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let delimiters = Delimiters::default();
        assert_eq!(delimiters.element, '*');
        assert_eq!(delimiters.component, ':');
        assert_eq!(delimiters.repetition, '^');
        assert_eq!(delimiters.segment_terminator, "~");
        assert!(delimiters.validate().is_ok());
    }

    #[test]
    fn test_custom_delimiters() {
        let delimiters = Delimiters::new('|', "\n")
            .with_component('>')
            .with_repetition('{');
        assert_eq!(delimiters.element, '|');
        assert_eq!(delimiters.component, '>');
        assert_eq!(delimiters.repetition, '{');
        assert!(delimiters.validate().is_ok());
    }

    #[test]
    fn test_line_breaks_added_once() {
        let delimiters = Delimiters::default().with_line_breaks().with_line_breaks();
        assert_eq!(delimiters.segment_terminator, "~\n");
    }

    #[test]
    fn test_validate_rejects_collisions() {
        let same = Delimiters::default().with_component('*');
        let err = same.validate().unwrap_err();
        assert!(err.to_string().contains("element and component"));

        let empty = Delimiters::new('*', "");
        assert!(empty.validate().is_err());

        let inside = Delimiters::new('*', "*~");
        assert!(inside.validate().is_err());

        let letter = Delimiters::new('A', "~");
        assert!(letter.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let delimiters: Delimiters =
            serde_yaml::from_str("element: \"|\"\nsegment_terminator: \"~\\n\"\n").unwrap();
        assert_eq!(delimiters.element, '|');
        assert_eq!(delimiters.component, ':');
        assert_eq!(delimiters.segment_terminator, "~\n");
    }
}
