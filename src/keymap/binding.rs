//! Keybinding struct representing a mapping from a chord sequence to a function

use super::types::{ChordSequence, KeyDescriptor};

/// A single keybinding mapping one or more chords to a named function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    /// The chord sequence (usually 1, sometimes 2 for multi-key gestures)
    pub chords: ChordSequence,
    /// Name of the function the consumer dispatches to
    pub function: String,
    /// Optional human-readable description
    pub description: Option<String>,
}

impl Keybinding {
    /// Create a binding
    pub fn new(chords: ChordSequence, function: impl Into<String>) -> Self {
        Self {
            chords,
            function: function.into(),
            description: None,
        }
    }

    /// Add a description to this binding (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if this binding starts with the given chord
    pub fn starts_with(&self, chord: &KeyDescriptor) -> bool {
        self.chords.first_chord() == chord
    }

    /// Check if this is a multi-chord binding
    pub fn is_chord(&self) -> bool {
        self.chords.is_chord()
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        format!("{} → {}", self.chords, self.function)
    }
}
