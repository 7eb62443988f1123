//! Conversion of key chord strings into descriptor sequences
//!
//! Accepts strings like `"a"`, `"Ctrl+Shift+F5"` or `"Ctrl+K,Ctrl+C"`:
//! - chords are delimited by `,`
//! - tokens within a chord are separated by `+` or `-` (interchangeable)
//! - every token but the last names a modifier, the last names the key
//!
//! The separators are themselves valid keys (`"+"`, `"Ctrl+-"`). A comma is
//! read as a key after a separator (`"Ctrl+,"`), or as a whole chord when it
//! is followed by the end of input or a chord delimiter (`","`, `"x,,"`,
//! `",,x"`). Any other comma delimits chords, so `"x,,y"` is an empty chord.

use std::str::FromStr;

use unicode_width::UnicodeWidthChar;

use super::error::{FormatError, FormatErrorKind};
use super::named_keys::lookup_named_key;
use super::types::{ChordSequence, KeyDescriptor, Modifiers};

const CHORD_DELIMITER: char = ',';

const MODIFIER_NAMES: &[(&str, Modifiers)] = &[
    ("control", Modifiers::CONTROL),
    ("ctrl", Modifiers::CONTROL),
    ("alt", Modifiers::ALT),
    ("shift", Modifiers::SHIFT),
];

#[inline]
fn is_separator(c: char) -> bool {
    c == '+' || c == '-'
}

/// Convert a key chord string into its descriptor sequence
///
/// Fails on the first malformed chord; nothing is returned unless the whole
/// input parses.
pub fn convert(input: &str) -> Result<ChordSequence, FormatError> {
    let mut lexer = Lexer::new(input);
    let mut chords = Vec::new();

    loop {
        chords.push(parse_chord(&mut lexer)?);
        if lexer.peek().is_none() {
            break;
        }
        // Chord delimiter
        lexer.bump();
    }

    ChordSequence::new(chords)
        .ok_or_else(|| lexer.error(FormatErrorKind::EmptyChord, "", 0))
}

/// Resolve a modifier name, ignoring case
pub fn resolve_modifier(name: &str) -> Option<Modifiers> {
    MODIFIER_NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, modifier)| *modifier)
}

fn parse_chord(lexer: &mut Lexer<'_>) -> Result<KeyDescriptor, FormatError> {
    let chord_start = lexer.pos;
    let mut comma_is_key = lexer.comma_chord_ahead();
    let mut tokens: Vec<(&str, usize)> = Vec::new();

    loop {
        let Some(token) = lexer.token(comma_is_key) else {
            let kind = if tokens.is_empty() {
                FormatErrorKind::EmptyChord
            } else {
                FormatErrorKind::EmptyToken
            };
            return Err(lexer.error(kind, "", lexer.pos));
        };
        tokens.push(token);

        match lexer.peek() {
            Some(c) if is_separator(c) => {
                lexer.bump();
                comma_is_key = true;
            }
            Some(CHORD_DELIMITER) | None => break,
            Some(_) => {
                let offset = lexer.pos;
                return Err(lexer.error(
                    FormatErrorKind::UnexpectedText,
                    lexer.rest_of_chord(),
                    offset,
                ));
            }
        }
    }

    let Some((key_token, key_offset)) = tokens.pop() else {
        return Err(lexer.error(FormatErrorKind::EmptyChord, "", chord_start));
    };

    let mut modifiers = Modifiers::NONE;
    for (name, offset) in tokens {
        let Some(modifier) = resolve_modifier(name) else {
            return Err(lexer.error(FormatErrorKind::UnknownModifier, name, offset));
        };
        if modifiers.contains(modifier) {
            return Err(lexer.error(FormatErrorKind::DuplicateModifier, name, offset));
        }
        modifiers |= modifier;
    }

    resolve_key(lexer, key_token, key_offset, modifiers)
}

/// Printable characters have a display width and are not private-use
///
/// Control, format (e.g. U+200B, U+FEFF) and combining characters have no
/// width of their own.
fn is_printable(c: char) -> bool {
    let private_use = matches!(
        c,
        '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    );
    !c.is_control() && !private_use && c.width().is_some_and(|w| w > 0)
}

fn resolve_key(
    lexer: &Lexer<'_>,
    token: &str,
    offset: usize,
    modifiers: Modifiers,
) -> Result<KeyDescriptor, FormatError> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !is_printable(c) {
            return Err(lexer.error(FormatErrorKind::NonPrintable, token, offset));
        }
        return Ok(KeyDescriptor::literal(c, modifiers));
    }

    lookup_named_key(token)
        .map(|key| KeyDescriptor::named(key, modifiers))
        .ok_or_else(|| lexer.error(FormatErrorKind::UnknownKey, token, offset))
}

/// Left-to-right cursor over the input, tracking byte offsets
struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// A comma standing alone as a chord: followed by end of input or another delimiter
    fn comma_chord_ahead(&self) -> bool {
        let mut rest = self.input[self.pos..].chars();
        rest.next() == Some(CHORD_DELIMITER)
            && matches!(rest.next(), None | Some(CHORD_DELIMITER))
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Read the next token and its offset
    ///
    /// A separator at the start of a token is a one-character token. Returns
    /// `None` at end of input, or at a comma outside key position.
    fn token(&mut self, comma_is_key: bool) -> Option<(&'a str, usize)> {
        let start = self.pos;
        let first = self.peek()?;

        if first == CHORD_DELIMITER && !comma_is_key {
            return None;
        }
        if first == CHORD_DELIMITER || is_separator(first) {
            self.bump();
            return Some((&self.input[start..self.pos], start));
        }

        while let Some(c) = self.peek() {
            if c == CHORD_DELIMITER || is_separator(c) {
                break;
            }
            self.bump();
        }
        Some((&self.input[start..self.pos], start))
    }

    /// Remaining text up to the next chord delimiter
    fn rest_of_chord(&self) -> &'a str {
        let rest = &self.input[self.pos..];
        match rest.find(CHORD_DELIMITER) {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    fn error(&self, kind: FormatErrorKind, fragment: &str, offset: usize) -> FormatError {
        FormatError::new(kind, fragment, offset, self.input)
    }
}

impl FromStr for ChordSequence {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        convert(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::named_keys::NamedKey;
    use crate::keymap::types::KeyIdentity;

    fn kind_of(input: &str) -> FormatErrorKind {
        convert(input).unwrap_err().kind
    }

    #[test]
    fn test_resolve_modifier_aliases() {
        assert_eq!(resolve_modifier("Control"), Some(Modifiers::CONTROL));
        assert_eq!(resolve_modifier("CTRL"), Some(Modifiers::CONTROL));
        assert_eq!(resolve_modifier("aLt"), Some(Modifiers::ALT));
        assert_eq!(resolve_modifier("shift"), Some(Modifiers::SHIFT));
        assert_eq!(resolve_modifier("shft"), None);
        assert_eq!(resolve_modifier("meta"), None);
    }

    #[test]
    fn test_mixed_separators() {
        let a = convert("Ctrl+Shift-F5").unwrap();
        let b = convert("Ctrl-Shift+F5").unwrap();
        let c = convert("Ctrl+Shift+F5").unwrap();
        assert_eq!(a, c);
        assert_eq!(b, c);
        assert_eq!(c[0].modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(c[0].key, KeyIdentity::Named(NamedKey::F(5)));
    }

    #[test]
    fn test_character_case_preserved() {
        let seq = convert("Shift+a").unwrap();
        assert_eq!(seq[0].character, Some('a'));
        assert_eq!(seq[0].key, KeyIdentity::Named(NamedKey::Letter('A')));

        let seq = convert("A").unwrap();
        assert_eq!(seq[0].character, Some('A'));
    }

    #[test]
    fn test_separators_as_keys() {
        for input in ["+", "-", ","] {
            let seq = convert(input).unwrap();
            assert_eq!(seq.len(), 1);
            assert_eq!(seq[0].character, input.chars().next());
            assert_eq!(seq[0].key, KeyIdentity::Unspecified);
        }

        let seq = convert("Ctrl++").unwrap();
        assert_eq!(seq[0].character, Some('+'));
        assert_eq!(seq[0].modifiers, Modifiers::CONTROL);

        let seq = convert("Alt-Shift--").unwrap();
        assert_eq!(seq[0].character, Some('-'));
        assert_eq!(seq[0].modifiers, Modifiers::ALT | Modifiers::SHIFT);
    }

    #[test]
    fn test_comma_as_key_after_separator() {
        let seq = convert("Ctrl+,").unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].character, Some(','));

        let seq = convert("Ctrl+,,x").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].character, Some(','));
        assert_eq!(seq[1].character, Some('x'));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(kind_of(""), FormatErrorKind::EmptyChord);
        assert_eq!(kind_of("x,"), FormatErrorKind::EmptyChord);
        assert_eq!(kind_of("x,,y"), FormatErrorKind::EmptyChord);
        assert_eq!(kind_of("shift+"), FormatErrorKind::EmptyToken);
        assert_eq!(kind_of("x+"), FormatErrorKind::EmptyToken);
        assert_eq!(kind_of("+x"), FormatErrorKind::UnexpectedText);
        assert_eq!(kind_of(",x"), FormatErrorKind::EmptyChord);
        assert_eq!(kind_of("Ctrl+K,,Ctrl+C"), FormatErrorKind::EmptyChord);
        assert_eq!(kind_of("alt+shft+x"), FormatErrorKind::UnknownModifier);
        assert_eq!(kind_of("alt+alt+x"), FormatErrorKind::DuplicateModifier);
        assert_eq!(kind_of("escrape"), FormatErrorKind::UnknownKey);
        assert_eq!(kind_of("Ctrl+10"), FormatErrorKind::UnknownKey);
        assert_eq!(kind_of("\t"), FormatErrorKind::NonPrintable);
        assert_eq!(kind_of("Ctrl+K,Ctrl+C,"), FormatErrorKind::EmptyChord);
    }

    #[test]
    fn test_error_reports_fragment_and_offset() {
        let err = convert("Ctrl+K,alt+sift+x").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::UnknownModifier);
        assert_eq!(err.fragment, "sift");
        assert_eq!(err.offset, 11);
        assert_eq!(err.input, "Ctrl+K,alt+sift+x");

        let err = convert("control+Ctrl+x").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::DuplicateModifier);
        assert_eq!(err.fragment, "Ctrl");
        assert_eq!(err.offset, 8);

        let err = convert("Ctrl++x").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::UnexpectedText);
        assert_eq!(err.fragment, "x");
    }

    #[test]
    fn test_comma_as_whole_chord() {
        let seq = convert("x,,").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].character, Some('x'));
        assert_eq!(seq[1].character, Some(','));

        let seq = convert(",,x").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].character, Some(','));
        assert_eq!(seq[1].character, Some('x'));

        let seq = convert("x,,,y").unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[1].character, Some(','));
    }

    #[test]
    fn test_zero_width_and_private_use_rejected() {
        for c in ['\u{200B}', '\u{FEFF}', '\u{0301}', '\u{E000}', '\u{7F}', '\u{85}'] {
            let err = convert(&format!("Alt+{}", c)).unwrap_err();
            assert_eq!(err.kind, FormatErrorKind::NonPrintable, "{:?}", c);
            assert_eq!(err.offset, 4);
        }
    }

    #[test]
    fn test_non_ascii_literal() {
        let seq = convert("Alt+é").unwrap();
        assert_eq!(seq[0].character, Some('é'));
        assert_eq!(seq[0].key, KeyIdentity::Unspecified);
        assert_eq!(seq[0].modifiers, Modifiers::ALT);
    }

    #[test]
    fn test_from_str() {
        let seq: ChordSequence = "Ctrl+K,Ctrl+C".parse().unwrap();
        assert_eq!(seq.len(), 2);
        assert!("Ctrl+ab".parse::<ChordSequence>().is_err());
    }
}
