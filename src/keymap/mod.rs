//! Key chord conversion and keymap loading
//!
//! This module turns human-typed key-binding descriptions into structured
//! chord sequences that a key-binding lookup table can consume:
//! - Parses chords like `Ctrl+Shift+F5`, `a`, or `Ctrl+K,Ctrl+C`
//! - Accepts `+` and `-` separators interchangeably, case-insensitively
//! - Rejects malformed input with a [`FormatError`] instead of guessing
//! - Loads keymap YAML files into [`Keybinding`]s
//!
//! # Architecture
//!
//! ```text
//! "Ctrl+K,Ctrl+C" → convert() → ChordSequence [KeyDescriptor, KeyDescriptor]
//! keymap.yaml → parse_keymap_yaml() → Vec<Keybinding>
//! ```
//!
//! # Example
//!
//! ```
//! use keychord::keymap::{convert, KeyIdentity, Modifiers, NamedKey};
//!
//! let chords = convert("Ctrl+Shift+F5").unwrap();
//! assert_eq!(chords[0].key, KeyIdentity::Named(NamedKey::F(5)));
//! assert_eq!(chords[0].modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
//! ```

mod binding;
mod config;
mod converter;
mod error;
mod named_keys;
mod types;

pub use binding::Keybinding;
pub use config::{load_keymap_file, parse_keymap_yaml, KeymapError};
pub use converter::{convert, resolve_modifier};
pub use error::{FormatError, FormatErrorKind};
pub use named_keys::{lookup_named_key, NamedKey, FUNCTION_KEY_MAX};
pub use types::{ChordSequence, KeyDescriptor, KeyIdentity, Modifiers};
