//! Format errors raised while converting a key chord string

use std::fmt;

/// What was wrong with the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// A comma-delimited segment had no content
    EmptyChord,
    /// A separator was not followed by a token
    EmptyToken,
    /// Text left over after a complete chord
    UnexpectedText,
    /// A token in modifier position is not a modifier name
    UnknownModifier,
    /// The same logical modifier appears twice in one chord
    DuplicateModifier,
    /// A multi-character key token is not in the named-key table
    UnknownKey,
    /// A single-character key token is a control character
    NonPrintable,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FormatErrorKind::EmptyChord => "empty chord",
            FormatErrorKind::EmptyToken => "missing key or modifier after separator",
            FormatErrorKind::UnexpectedText => "unexpected text after key",
            FormatErrorKind::UnknownModifier => "unknown modifier",
            FormatErrorKind::DuplicateModifier => "duplicate modifier",
            FormatErrorKind::UnknownKey => "unknown key",
            FormatErrorKind::NonPrintable => "non-printable character",
        };
        f.write_str(text)
    }
}

/// A key chord string that could not be converted
///
/// Carries the offending fragment and its byte offset for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub kind: FormatErrorKind,
    pub fragment: String,
    pub offset: usize,
    pub input: String,
}

impl FormatError {
    pub fn new(kind: FormatErrorKind, fragment: &str, offset: usize, input: &str) -> Self {
        Self {
            kind,
            fragment: fragment.to_string(),
            offset,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fragment.is_empty() {
            write!(
                f,
                "Invalid key chord {:?}: {} at offset {}",
                self.input, self.kind, self.offset
            )
        } else {
            write!(
                f,
                "Invalid key chord {:?}: {} {:?} at offset {}",
                self.input, self.kind, self.fragment, self.offset
            )
        }
    }
}

impl std::error::Error for FormatError {}
