//! Java-style property file parsing.
//!
//! `local.properties` is the fallback source for per-platform JDK homes.
//! Only the flat subset of the format is supported: `key=value` lines with
//! surrounding whitespace trimmed; blank lines and lines starting with `#`
//! or `!` are ignored.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// A loaded set of key-value properties.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Load properties from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;
        Ok(Properties::parse(&text))
    }

    /// Parse properties from text. Malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Properties { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
