//! Command-line argument parsing and output formatting
//!
//! Supports:
//! - Converting chord strings and printing their descriptors
//! - Validating a keymap file
//! - Listing the named-key table

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::keymap::{ChordSequence, KeyIdentity, Keybinding, NamedKey};

/// Convert key-binding descriptions into key chords
#[derive(Parser, Debug)]
#[command(name = "keychord", version, about = "Convert key-binding descriptions into key chords")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Convert chord strings such as "Ctrl+Shift+F5" or "Ctrl+K,Ctrl+C"
    Parse {
        /// Chord strings to convert
        #[arg(value_name = "CHORDS", required = true)]
        inputs: Vec<String>,

        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a keymap file (defaults to the user keymap)
    Check {
        /// Keymap YAML file to validate
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
    /// List every named key
    Keys,
}

impl CliCommand {
    /// Only `check` keeps a log file; `parse` and `keys` log to stderr alone
    pub fn writes_log_file(&self) -> bool {
        matches!(self, CliCommand::Check { .. })
    }
}

/// Human-readable description of a converted sequence, one chord per line
pub fn describe_sequence(input: &str, chords: &ChordSequence) -> String {
    let mut out = format!("{} => {}\n", input, chords);
    for (i, chord) in chords.iter().enumerate() {
        let key = match chord.key {
            KeyIdentity::Named(key) => key.to_string(),
            KeyIdentity::Unspecified => "(unspecified)".to_string(),
        };
        let character = chord
            .character
            .map(|c| format!("{:?}", c))
            .unwrap_or_else(|| "-".to_string());
        let modifiers = if chord.modifiers.is_empty() {
            "-".to_string()
        } else {
            chord.modifiers.to_string()
        };
        out.push_str(&format!(
            "  [{}] key: {}  char: {}  modifiers: {}\n",
            i, key, character, modifiers
        ));
    }
    out
}

/// Summary of a validated keymap
pub fn describe_keymap(bindings: &[Keybinding]) -> String {
    let mut out = String::new();
    for binding in bindings {
        out.push_str(&binding.display_string());
        out.push('\n');
    }
    let chord_count = bindings.iter().filter(|b| b.is_chord()).count();
    out.push_str(&format!(
        "{} bindings ({} multi-chord)\n",
        bindings.len(),
        chord_count
    ));
    out
}

/// Every named key, one per line
pub fn list_keys() -> String {
    NamedKey::all().map(|key| format!("{}\n", key)).collect()
}
