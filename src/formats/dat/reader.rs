//! `.dat` container reading and parsing

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use super::LanguageResource;
use crate::error::{Error, Result};

/// Read a language `.dat` container from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::TruncatedHeader`] or [`Error::TruncatedTable`] if the
/// header or offset table is cut short.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::TruncatedHeader`]: crate::Error::TruncatedHeader
/// [`Error::TruncatedTable`]: crate::Error::TruncatedTable
pub fn read_dat<P: AsRef<Path>>(path: P) -> Result<LanguageResource> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_dat_bytes(&buffer)
}

/// Read only the declared string count from a container header
///
/// # Errors
/// Returns [`Error::TruncatedHeader`] if fewer than 4 bytes are available.
///
/// [`Error::TruncatedHeader`]: crate::Error::TruncatedHeader
pub fn read_dat_count<P: AsRef<Path>>(path: P) -> Result<usize> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 4];
    file.read_exact(&mut header)
        .map_err(|_| Error::TruncatedHeader)?;
    Ok((u32::from_le_bytes(header) & 0xFFFF) as usize)
}

/// Parse container data from bytes
///
/// The string count lives in the low 16 bits of the header word. Each
/// table entry is followed to its payload and decoded as UTF-16LE with
/// replacement characters substituted for invalid code unit sequences,
/// without disturbing the table read position.
/// Payloads that run past the end of the data decode to what is there,
/// matching the tolerant read path; [`validate_dat`] is the place where
/// out-of-bounds entries are reported.
///
/// # Errors
///
/// Returns [`Error::TruncatedHeader`] if the data holds no full header
/// and [`Error::TruncatedTable`] if the offset table ends early.
///
/// [`validate_dat`]: super::validate_dat
/// [`Error::TruncatedHeader`]: crate::Error::TruncatedHeader
/// [`Error::TruncatedTable`]: crate::Error::TruncatedTable
pub fn parse_dat_bytes(data: &[u8]) -> Result<LanguageResource> {
    if data.len() < 4 {
        return Err(Error::TruncatedHeader);
    }
    let mut cursor = Cursor::new(data);
    let str_num = (cursor.read_u32::<LittleEndian>()? & 0xFFFF) as usize;

    let mut strings = Vec::with_capacity(str_num);
    for index in 0..str_num {
        let position = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| Error::TruncatedTable { index })? as usize;
        let unit_length = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| Error::TruncatedTable { index })? as usize;

        strings.push(decode_payload(data, position, unit_length));
    }

    Ok(LanguageResource { strings })
}

/// Decode one entry's UTF-16LE payload, tolerating a range that runs past
/// the end of the data.
fn decode_payload(data: &[u8], position: usize, unit_length: usize) -> String {
    let available = data.get(position..).unwrap_or(&[]);
    let wanted = unit_length.saturating_mul(2);
    let payload = &available[..wanted.min(available.len())];

    let mut units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    // A dangling odd byte decodes to a replacement character.
    if payload.len() % 2 != 0 {
        units.push(0xFFFD);
    }
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single_entry_container(payload_units: &[u16]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&12u32.to_le_bytes()); // position
        data.extend_from_slice(&(payload_units.len() as u32).to_le_bytes());
        for unit in payload_units {
            data.extend_from_slice(&unit.to_le_bytes());
        }
        data.extend_from_slice(&0u16.to_le_bytes()); // separator
        data
    }

    #[test]
    fn test_parse_single_string() {
        let data = single_entry_container(&[0x0048, 0x0069]); // "Hi"
        let resource = parse_dat_bytes(&data).unwrap();
        assert_eq!(resource.strings, vec!["Hi".to_string()]);
    }

    #[test]
    fn test_count_masked_to_low_16_bits() {
        // Garbage in the reserved high word must not change the count.
        let mut data = single_entry_container(&[0x0041]);
        data[2] = 0xCD;
        data[3] = 0xAB;
        let resource = parse_dat_bytes(&data).unwrap();
        assert_eq!(resource.strings, vec!["A".to_string()]);
    }

    #[test]
    fn test_invalid_code_units_replaced() {
        // Lone high surrogate decodes to U+FFFD instead of failing.
        let data = single_entry_container(&[0xD800]);
        let resource = parse_dat_bytes(&data).unwrap();
        assert_eq!(resource.strings, vec!["\u{FFFD}".to_string()]);
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            parse_dat_bytes(&[0x01, 0x00]),
            Err(Error::TruncatedHeader)
        ));
        assert!(matches!(parse_dat_bytes(&[]), Err(Error::TruncatedHeader)));
    }

    #[test]
    fn test_truncated_table() {
        // Declares two strings but only one table entry is present.
        let mut data = Vec::new();
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&20u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            parse_dat_bytes(&data),
            Err(Error::TruncatedTable { index: 1 })
        ));
    }

    #[test]
    fn test_payload_past_end_decodes_short() {
        // Length claims 4 units but only 1 exists; read what is there.
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&12u32.to_le_bytes());
        data.extend_from_slice(&4u32.to_le_bytes());
        data.extend_from_slice(&0x0041u16.to_le_bytes());
        let resource = parse_dat_bytes(&data).unwrap();
        assert_eq!(resource.strings, vec!["A".to_string()]);
    }

    #[test]
    fn test_empty_container() {
        let data = 0u32.to_le_bytes();
        let resource = parse_dat_bytes(&data).unwrap();
        assert!(resource.is_empty());
    }
}
