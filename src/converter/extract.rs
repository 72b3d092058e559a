//! DAT to TXT extraction

use std::fs;
use std::path::Path;

use super::ProgressCallback;
use crate::error::{Error, Result};
use crate::formats::bed::{LabelMap, read_bed_file};
use crate::formats::dat::{read_dat, text_offset};
use crate::formats::txt::emit_document;
use crate::formats::version::language_label_for;

/// Diagnostic summary of one extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Total blocks written.
    pub total: usize,
    /// Blocks written as `{EMPTY}`.
    pub empty: usize,
    /// Blocks written as `{INVALID}`. Extraction never produces these;
    /// the tally exists so both directions report the same shape.
    pub invalid: usize,
    /// Blocks whose text contains interior line breaks.
    pub multi_line: usize,
    /// Blocks without interior line breaks (empty ones included).
    pub single_line: usize,
    /// Name-map records that parsed.
    pub bed_names: usize,
    /// Name-map lines that looked like records, parsed or not.
    pub expected_blocks: usize,
    /// Byte offset of the payload blob in the container.
    pub text_offset: u32,
    /// Size of the container file in bytes.
    pub file_size: u64,
    /// Non-fatal findings, also emitted as log warnings.
    pub warnings: Vec<String>,
}

impl ExtractReport {
    fn push_warning(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }
}

/// Extract a DAT container into a translator text document.
///
/// # Errors
///
/// Fails when the container cannot be read or holds zero strings
/// ([`Error::EmptyContainer`]), or when the document cannot be written.
/// Count disagreements with the name map or the reference container are
/// warnings, never failures.
///
/// [`Error::EmptyContainer`]: crate::Error::EmptyContainer
pub fn convert_dat_to_txt(
    dat: &Path,
    bed: &Path,
    dest: &Path,
    reference: Option<&Path>,
) -> Result<ExtractReport> {
    convert_dat_to_txt_with_progress(dat, bed, dest, reference, &|_| {})
}

/// Extract a DAT container into a text document with progress callback
///
/// The callback fires three times: name-map read, container read,
/// document write.
///
/// # Errors
/// See [`convert_dat_to_txt`].
pub fn convert_dat_to_txt_with_progress(
    dat: &Path,
    bed: &Path,
    dest: &Path,
    reference: Option<&Path>,
    progress: ProgressCallback,
) -> Result<ExtractReport> {
    tracing::info!(
        "Extracting DAT to TXT: {:?}{} -> {:?}",
        dat,
        language_label_for(dat),
        dest
    );

    let mut report = ExtractReport::default();

    progress(&format!("Reading name map {}...", bed.display()));
    let labels = read_bed_file(bed).unwrap_or_else(|err| {
        report.push_warning(format!("could not read .bed file: {err}"));
        LabelMap::default()
    });
    report.bed_names = labels.names.len();
    report.expected_blocks = labels.expected_blocks;

    progress(&format!("Reading DAT container {}...", dat.display()));
    let resource = read_dat(dat)?;
    let str_num = resource.len();

    let reference_strings = match reference {
        Some(path) => {
            tracing::info!("Reference DAT: {:?}{}", path, language_label_for(path));
            match read_dat(path) {
                Ok(original) => {
                    if original.len() != str_num {
                        report.push_warning(format!(
                            "number of strings in reference DAT ({}) and current DAT ({str_num}) do not match",
                            original.len()
                        ));
                    }
                    Some(original)
                }
                Err(err) => {
                    report.push_warning(format!("could not read reference DAT: {err}"));
                    None
                }
            }
        }
        None => None,
    };

    if labels.names.len() != str_num {
        report.push_warning(format!(
            "number of strings in .dat ({str_num}) and .bed ({}) do not match",
            labels.names.len()
        ));
    }

    if str_num == 0 {
        return Err(Error::EmptyContainer);
    }

    report.file_size = fs::metadata(dat)?.len();
    report.text_offset = text_offset(str_num);
    tracing::info!(
        "DAT structure: {str_num} strings, text section at 0x{:X}, {} bytes total",
        report.text_offset,
        report.file_size
    );

    progress(&format!("Writing {str_num} text blocks..."));
    let document = emit_document(
        &resource.strings,
        &labels.names,
        reference_strings.as_ref().map(|r| r.strings.as_slice()),
    );
    fs::write(dest, document)?;

    report.total = str_num;
    for text in &resource.strings {
        if text.contains('\n') {
            report.multi_line += 1;
        } else {
            report.single_line += 1;
        }
        if text.is_empty() {
            report.empty += 1;
        }
    }

    tracing::info!(
        "Extraction complete: total={}, empty={}, invalid={}, multiline={}, single={}",
        report.total,
        report.empty,
        report.invalid,
        report.multi_line,
        report.single_line
    );
    Ok(report)
}
