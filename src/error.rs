//! Error types for parsing prime sets.

use std::num::ParseIntError;

/// Represents an error when parsing a [`PrimeSet`](crate::PrimeSet) from its
/// textual rendering.
///
/// # Examples
///
/// ```rust
/// use primeset::{ParsePrimeSetError, PrimeSet};
///
/// let error = "{3,9}".parse::<PrimeSet>().unwrap_err();
/// assert_eq!(error, ParsePrimeSetError::NotAnOddPrime { index: 1, value: 9 });
/// assert_eq!(format!("{error}"), "element 1 (9) is not an odd prime");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePrimeSetError {
    /// The input is not enclosed in `{` and `}`.
    MissingBraces,
    /// An element is not a decimal `i32`.
    InvalidElement {
        /// Zero-based position of the element.
        index: usize,
        /// The offending text, trimmed.
        text: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
    /// An element is an integer but not an odd prime, so it can never be stored.
    NotAnOddPrime {
        /// Zero-based position of the element.
        index: usize,
        /// The rejected value.
        value: i32,
    },
}

impl std::fmt::Display for ParsePrimeSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBraces => write!(formatter, "prime set must be enclosed in '{{' and '}}'"),
            Self::InvalidElement { index, text, source } => {
                write!(formatter, "element {index} ({text:?}) is not an integer: {source}")
            }
            Self::NotAnOddPrime { index, value } => {
                write!(formatter, "element {index} ({value}) is not an odd prime")
            }
        }
    }
}

impl std::error::Error for ParsePrimeSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidElement { source, .. } => Some(source),
            Self::MissingBraces | Self::NotAnOddPrime { .. } => None,
        }
    }
}
