//! Core types for chord conversion: Modifiers, KeyIdentity, KeyDescriptor, ChordSequence

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

use super::named_keys::NamedKey;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CONTROL: Modifiers = Modifiers(0b001);
    pub const ALT: Modifiers = Modifiers(0b010);
    pub const SHIFT: Modifiers = Modifiers(0b100);

    /// Create modifiers from individual flags
    pub const fn new(control: bool, alt: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if control {
            bits |= 0b001;
        }
        if alt {
            bits |= 0b010;
        }
        if shift {
            bits |= 0b100;
        }
        Modifiers(bits)
    }

    /// Check if control is held
    #[inline]
    pub const fn control(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// Check if alt is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Canonical names of the held modifiers, in Ctrl, Alt, Shift order
    pub fn names(self) -> Vec<&'static str> {
        let mut parts = Vec::new();
        if self.control() {
            parts.push("Ctrl");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.shift() {
            parts.push("Shift");
        }
        parts
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join("+"))
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

/// Identity of the key a chord resolves to
///
/// Symbols map to different physical keys depending on the keyboard layout,
/// so a chord typed as punctuation only guarantees its character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum KeyIdentity {
    Named(NamedKey),
    Unspecified,
}

impl KeyIdentity {
    /// The named key, if the identity is known
    pub fn named(self) -> Option<NamedKey> {
        match self {
            KeyIdentity::Named(key) => Some(key),
            KeyIdentity::Unspecified => None,
        }
    }
}

/// A single chord: a key identity, its literal character, and held modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct KeyDescriptor {
    pub key: KeyIdentity,
    pub character: Option<char>,
    pub modifiers: Modifiers,
}

impl KeyDescriptor {
    /// Descriptor for a named key without a literal character
    ///
    /// Letter keys have no multi-character name, so a `Letter` descriptor
    /// without a character prints as a literal and re-converts with one.
    pub const fn named(key: NamedKey, modifiers: Modifiers) -> Self {
        Self {
            key: KeyIdentity::Named(key),
            character: None,
            modifiers,
        }
    }

    /// Descriptor for a typed character; ASCII letters and digits also get their named key
    pub fn literal(c: char, modifiers: Modifiers) -> Self {
        let key = match NamedKey::from_char(c) {
            Some(named) => KeyIdentity::Named(named),
            None => KeyIdentity::Unspecified,
        };
        Self {
            key,
            character: Some(c),
            modifiers,
        }
    }
}

impl fmt::Display for KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.modifiers.names() {
            write!(f, "{}+", name)?;
        }
        match (self.character, self.key) {
            (Some(c), _) => write!(f, "{}", c),
            (None, KeyIdentity::Named(key)) => write!(f, "{}", key),
            (None, KeyIdentity::Unspecified) => write!(f, "?"),
        }
    }
}

/// An ordered, non-empty sequence of chords typed one after another
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChordSequence(Vec<KeyDescriptor>);

impl ChordSequence {
    /// Build a sequence; returns `None` for an empty list
    pub fn new(chords: Vec<KeyDescriptor>) -> Option<Self> {
        if chords.is_empty() {
            None
        } else {
            Some(Self(chords))
        }
    }

    /// Sequence of exactly one chord
    pub fn single(chord: KeyDescriptor) -> Self {
        Self(vec![chord])
    }

    /// Check if this is a multi-chord gesture
    pub fn is_chord(&self) -> bool {
        self.0.len() > 1
    }

    /// The first chord of the gesture
    pub fn first_chord(&self) -> &KeyDescriptor {
        &self.0[0]
    }
}

impl Deref for ChordSequence {
    type Target = [KeyDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ChordSequence {
    type Item = &'a KeyDescriptor;
    type IntoIter = std::slice::Iter<'a, KeyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ChordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", chord)?;
        }
        Ok(())
    }
}
