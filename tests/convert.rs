//! Chord conversion tests against the public API

mod common;

use common::single_chord;
use keychord::keymap::{
    convert, ChordSequence, FormatErrorKind, KeyIdentity, Modifiers, NamedKey,
};

// ========================================================================
// Literal chords
// ========================================================================

#[test]
fn test_letter_with_modifiers_keeps_typed_case() {
    let chord = single_chord("Ctrl+Alt+q");
    assert_eq!(chord.key, KeyIdentity::Named(NamedKey::Letter('Q')));
    assert_eq!(chord.character, Some('q'));
    assert_eq!(chord.modifiers, Modifiers::CONTROL | Modifiers::ALT);
}

#[test]
fn test_digit_chord() {
    let chord = single_chord("shift-7");
    assert_eq!(chord.key, KeyIdentity::Named(NamedKey::Digit(7)));
    assert_eq!(chord.character, Some('7'));
    assert_eq!(chord.modifiers, Modifiers::SHIFT);
}

#[test]
fn test_symbol_chord_has_unspecified_key() {
    let chord = single_chord("Alt+[");
    assert_eq!(chord.key, KeyIdentity::Unspecified);
    assert_eq!(chord.character, Some('['));
    assert_eq!(chord.modifiers, Modifiers::ALT);
}

#[test]
fn test_space_is_a_literal() {
    let chord = single_chord("Ctrl+ ");
    assert_eq!(chord.character, Some(' '));
    assert_eq!(chord.key, KeyIdentity::Unspecified);
}

// ========================================================================
// Named keys
// ========================================================================

#[test]
fn test_named_key_has_no_character() {
    let chord = single_chord("control+shift+alt+escape");
    assert_eq!(chord.key, KeyIdentity::Named(NamedKey::Escape));
    assert_eq!(chord.character, None);
    assert_eq!(
        chord.modifiers,
        Modifiers::CONTROL | Modifiers::ALT | Modifiers::SHIFT
    );
}

#[test]
fn test_keypad_and_digit_names() {
    assert_eq!(
        single_chord("NumPad5").key,
        KeyIdentity::Named(NamedKey::NumPad(5))
    );
    assert_eq!(single_chord("D5").key, KeyIdentity::Named(NamedKey::Digit(5)));
    assert_eq!(single_chord("oemplus").key, KeyIdentity::Named(NamedKey::OemPlus));
}

#[test]
fn test_named_key_near_misses_rejected() {
    for input in ["Esc", "PgUp", "Enterr", "F25", "F0", "D10", "NumPad10", "Up"] {
        let err = convert(input).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::UnknownKey, "{:?}", input);
        assert_eq!(err.fragment, input);
    }
}

// ========================================================================
// Sequences
// ========================================================================

#[test]
fn test_three_chord_sequence_order() {
    let chords = convert("Ctrl+X,Ctrl+S,Enter").unwrap();
    assert_eq!(chords.len(), 3);
    assert!(chords.is_chord());
    assert_eq!(chords[0].character, Some('X'));
    assert_eq!(chords[1].character, Some('S'));
    assert_eq!(chords[2].key, KeyIdentity::Named(NamedKey::Enter));
    assert_eq!(chords[2].modifiers, Modifiers::NONE);
}

#[test]
fn test_from_str_matches_convert() {
    let parsed: ChordSequence = "Alt+F4".parse().unwrap();
    assert_eq!(parsed, convert("Alt+F4").unwrap());
}

#[test]
fn test_empty_segments_rejected() {
    for input in ["", "x,,y", "Ctrl+K,", ",Ctrl+K"] {
        assert!(convert(input).is_err(), "{:?} should be rejected", input);
    }
}

#[test]
fn test_leading_comma_is_a_key() {
    let chord = single_chord(",");
    assert_eq!(chord.character, Some(','));
    assert_eq!(chord.key, KeyIdentity::Unspecified);
}

#[test]
fn test_error_display_names_fragment() {
    let err = convert("Ctrl+K,alt+shifr+x").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown modifier"), "{}", message);
    assert!(message.contains("\"shifr\""), "{}", message);
}

#[test]
fn test_conversion_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| convert("Ctrl+Shift+F5,Alt+x").unwrap()))
        .collect();
    let expected = convert("Ctrl+Shift+F5,Alt+x").unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
