//! `.bed` string-name lookup files
//!
//! Plain `name = id` lines mapping container string IDs to readable
//! names. The names are cosmetic: they label blocks in the text output
//! and provide an expected-block count for cross-checking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// ID-to-name lookup parsed from a `.bed` file.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    /// Names keyed by string ID.
    pub names: HashMap<u32, String>,
    /// Count of `name = id` lines seen, whether or not the ID parsed.
    pub expected_blocks: usize,
}

/// Read a `.bed` file from disk.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_bed_file<P: AsRef<Path>>(path: P) -> Result<LabelMap> {
    Ok(parse_bed_str(&fs::read_to_string(path)?))
}

/// Parse `.bed` content.
///
/// Lines without `=` are ignored. A line is split once on its first `=`;
/// the trimmed left side is the name, the trimmed right side the ID.
/// Lines whose ID is not an integer still count toward
/// `expected_blocks` but are skipped with a warning.
#[must_use]
pub fn parse_bed_str(content: &str) -> LabelMap {
    let mut map = LabelMap::default();
    for line in content.lines() {
        let line = line.trim();
        let Some((name, id_str)) = line.split_once('=') else {
            continue;
        };
        map.expected_blocks += 1;
        match id_str.trim().parse::<u32>() {
            Ok(id) => {
                map.names.insert(id, name.trim().to_string());
            }
            Err(_) => {
                tracing::warn!("invalid string ID in line: {line}");
            }
        }
    }
    map
}
