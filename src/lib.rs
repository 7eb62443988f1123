//! keychord - key chord conversion for line-editor key bindings
//!
//! This crate turns human-typed key-binding descriptions such as
//! `Ctrl+Shift+F5` or `Ctrl+K,Ctrl+C` into ordered chord sequences for a
//! key-binding lookup table, and loads keymap YAML files built from them.

pub mod cli;
pub mod config_paths;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use keymap::{convert, ChordSequence, FormatError, KeyDescriptor, KeyIdentity, Modifiers};
