//! Structural validation of `.dat` containers

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use super::text_offset;
use crate::error::{Error, Result};

/// One structural finding from [`validate_dat`].
///
/// Findings are advisory: they are reported, never corrected, and never
/// turn a completed write into a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// An entry's byte range falls outside the payload region.
    OutOfBounds {
        index: usize,
        position: u32,
        unit_length: u32,
    },
    /// Two entries' byte ranges intersect.
    Overlap { first: usize, second: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                index,
                position,
                unit_length,
            } => write!(
                f,
                "string {index} position/length out of bounds: pos={position}, len={unit_length}"
            ),
            Self::Overlap { first, second } => {
                write!(f, "overlap between string {first} and string {second}")
            }
        }
    }
}

/// Re-read a container's offset table and check every entry for bounds
/// and pairwise overlap. The payload blob itself is never read, so
/// validation cannot mutate anything and repeated runs yield identical
/// findings.
///
/// The overlap check compares every unordered pair, which is O(N²); at
/// the scale these containers reach (hundreds to low thousands of
/// strings) that costs less than being clever. A sort-by-start sweep is
/// the upgrade path should much larger containers ever appear.
///
/// # Errors
/// Returns an error if the file cannot be opened or its table read.
pub fn validate_dat<P: AsRef<Path>>(path: P) -> Result<Vec<ValidationIssue>> {
    let file_size = std::fs::metadata(&path)?.len();
    let mut file = File::open(&path)?;

    let mut header = [0u8; 4];
    file.read_exact(&mut header)
        .map_err(|_| Error::TruncatedHeader)?;
    let str_num = (u32::from_le_bytes(header) & 0xFFFF) as usize;

    let mut entries = Vec::with_capacity(str_num);
    for index in 0..str_num {
        let position = file
            .read_u32::<LittleEndian>()
            .map_err(|_| Error::TruncatedTable { index })?;
        let unit_length = file
            .read_u32::<LittleEndian>()
            .map_err(|_| Error::TruncatedTable { index })?;
        entries.push((position, unit_length));
    }

    let blob_start = u64::from(text_offset(str_num));
    let mut issues = Vec::new();

    for (index, &(position, unit_length)) in entries.iter().enumerate() {
        let start = u64::from(position);
        let end = start + u64::from(unit_length) * 2;
        if start < blob_start || end > file_size {
            issues.push(ValidationIssue::OutOfBounds {
                index,
                position,
                unit_length,
            });
        }
    }

    for (first, &(pos_a, len_a)) in entries.iter().enumerate() {
        let range_a = byte_range(pos_a, len_a);
        for (offset, &(pos_b, len_b)) in entries[first + 1..].iter().enumerate() {
            let range_b = byte_range(pos_b, len_b);
            if range_a.0.max(range_b.0) < range_a.1.min(range_b.1) {
                issues.push(ValidationIssue::Overlap {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }

    Ok(issues)
}

/// Half-open byte range an entry claims in the file.
fn byte_range(position: u32, unit_length: u32) -> (u64, u64) {
    let start = u64::from(position);
    (start, start + u64::from(unit_length) * 2)
}
