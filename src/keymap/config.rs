//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs. An entry whose key
//! string does not convert rejects the whole file.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::converter::convert;
use super::error::FormatError;
use super::types::ChordSequence;

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub function: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| KeymapError::IoError(format!("{}: {}", path.display(), e)))?;

    let bindings = parse_keymap_yaml(&content)?;
    tracing::info!(
        "Loaded keymap from {} ({} bindings)",
        path.display(),
        bindings.len()
    );
    Ok(bindings)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let mut bindings = Vec::with_capacity(config.bindings.len());
    let mut seen: HashMap<ChordSequence, usize> = HashMap::new();

    for (index, entry) in config.bindings.into_iter().enumerate() {
        let chords = convert(&entry.key).map_err(|source| KeymapError::InvalidKey {
            index,
            key: entry.key.clone(),
            source,
        })?;

        let function = entry.function.trim();
        if function.is_empty() {
            return Err(KeymapError::InvalidFunction {
                index,
                key: entry.key,
            });
        }

        if let Some(previous) = seen.insert(chords.clone(), index) {
            tracing::warn!(
                "Keymap entry {} ({}) rebinds {} from entry {}",
                index,
                function,
                chords,
                previous
            );
        }
        tracing::debug!("Binding {} → {}", chords, function);

        let mut binding = Keybinding::new(chords, function);
        if let Some(description) = entry.description {
            binding = binding.with_description(description);
        }
        bindings.push(binding);
    }

    Ok(bindings)
}

/// Errors that can occur when loading keymaps
#[derive(Debug, Clone)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey {
        index: usize,
        key: String,
        source: FormatError,
    },
    InvalidFunction {
        index: usize,
        key: String,
    },
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey { index, source, .. } => {
                write!(f, "Binding {}: {}", index, source)
            }
            KeymapError::InvalidFunction { index, key } => {
                write!(f, "Binding {}: no function for key {:?}", index, key)
            }
        }
    }
}

impl std::error::Error for KeymapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeymapError::InvalidKey { source, .. } => Some(source),
            _ => None,
        }
    }
}
