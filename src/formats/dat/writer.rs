//! `.dat` container writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use super::{LanguageResource, text_offset};
use crate::error::Result;

/// Write a language `.dat` container to disk
///
/// Payloads are laid out contiguously in index order starting right after
/// the offset table, each followed by one zero separator unit. The count
/// field is 16 bits wide; keeping the string count below 65536 is the
/// caller's responsibility.
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_dat<P: AsRef<Path>>(path: P, resource: &LanguageResource) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let str_num = resource.strings.len();
    writer.write_u16::<LittleEndian>(str_num as u16)?;
    writer.write_u16::<LittleEndian>(0)?; // reserved word

    // First pass: offset table with precomputed positions.
    let mut position = text_offset(str_num);
    for text in &resource.strings {
        let unit_length = text.encode_utf16().count() as u32;
        writer.write_u32::<LittleEndian>(position)?;
        writer.write_u32::<LittleEndian>(unit_length)?;
        position += unit_length * 2 + 2; // payload + zero separator
    }

    // Second pass: UTF-16LE payloads, no byte-order mark.
    for text in &resource.strings {
        for unit in text.encode_utf16() {
            writer.write_u16::<LittleEndian>(unit)?;
        }
        writer.write_u16::<LittleEndian>(0)?; // separator
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_single_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("language0.dat");
        let resource = LanguageResource::from_strings(vec!["Hi".to_string()]);
        write_dat(&path, &resource).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(
            bytes,
            vec![
                0x01, 0x00, 0x00, 0x00, // count + reserved word
                0x0C, 0x00, 0x00, 0x00, // position = 4 + 8
                0x02, 0x00, 0x00, 0x00, // unit length
                0x48, 0x00, 0x69, 0x00, // "Hi"
                0x00, 0x00, // separator
            ]
        );
    }

    #[test]
    fn test_empty_resource_writes_bare_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        write_dat(&path, &LanguageResource::new()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_lengths_count_utf16_units_not_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("astral.dat");
        // U+1F600 needs a surrogate pair: 2 units, 4 bytes.
        let resource = LanguageResource::from_strings(vec!["\u{1F600}".to_string()]);
        write_dat(&path, &resource).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[8..12], &2u32.to_le_bytes());
        assert_eq!(bytes.len(), 4 + 8 + 4 + 2);
    }
}
