//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;

use keychord::keymap::{convert, KeyDescriptor};
use tempfile::NamedTempFile;

/// Convert an input expected to hold exactly one chord
pub fn single_chord(input: &str) -> KeyDescriptor {
    let chords = convert(input).unwrap_or_else(|e| panic!("{:?} should convert: {}", input, e));
    assert_eq!(chords.len(), 1, "{:?} should be a single chord", input);
    chords[0]
}

/// Write a keymap to a temporary YAML file
pub fn keymap_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp keymap");
    file.write_all(yaml.as_bytes()).expect("write temp keymap");
    file.flush().expect("flush temp keymap");
    file
}
