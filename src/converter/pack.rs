//! TXT to DAT packing

use std::fs;
use std::path::Path;

use super::ProgressCallback;
use crate::error::Result;
use crate::formats::bed::read_bed_file;
use crate::formats::dat::{
    LanguageResource, ValidationIssue, read_dat_count, validate_dat, write_dat,
};
use crate::formats::txt::{BlockBody, TextBlock, parse_block, split_blocks};
use crate::formats::version::language_label_for;

/// Diagnostic summary of one packing run.
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Strings written to the output container.
    pub total: usize,
    /// Blocks that assembled to an empty string.
    pub empty: usize,
    /// Blocks carrying the `{INVALID}` marker; written as empty strings.
    pub invalid: usize,
    /// Strings with interior line breaks.
    pub multi_line: usize,
    /// Non-empty, non-invalid single-line strings.
    pub single_line: usize,
    /// Blocks found in the text document, parseable or not.
    pub blocks_found: usize,
    /// Structural findings from validating the written container.
    pub validation: Vec<ValidationIssue>,
    /// Non-fatal findings, also emitted as log warnings.
    pub warnings: Vec<String>,
}

impl PackReport {
    fn push_warning(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }
}

/// Pack a translator text document back into a DAT container.
///
/// The template container only supplies the declared string count for a
/// cross-check; blocks are paired to output entries by position, so a
/// document with a diverging block count still packs (with a warning)
/// into a container holding exactly one entry per parsed block.
///
/// # Errors
///
/// Fails when the document or template cannot be read, or the output
/// cannot be written. Validation findings on the written file are
/// reported in the returned [`PackReport`] and never fail the call.
pub fn convert_txt_to_dat(
    source: &Path,
    template: &Path,
    dest: &Path,
    bed: Option<&Path>,
) -> Result<PackReport> {
    convert_txt_to_dat_with_progress(source, template, dest, bed, &|_| {})
}

/// Pack a text document into a DAT container with progress callback
///
/// The callback fires four times: document read, string assembly,
/// container write, validation.
///
/// # Errors
/// See [`convert_txt_to_dat`].
pub fn convert_txt_to_dat_with_progress(
    source: &Path,
    template: &Path,
    dest: &Path,
    bed: Option<&Path>,
    progress: ProgressCallback,
) -> Result<PackReport> {
    tracing::info!(
        "Packing TXT to DAT: {:?} -> {:?} (template {:?}{})",
        source,
        dest,
        template,
        language_label_for(template)
    );

    let mut report = PackReport::default();

    progress(&format!("Reading text document {}...", source.display()));
    let content = fs::read_to_string(source)?;
    let blocks = split_blocks(&content);
    report.blocks_found = blocks.len();
    tracing::info!("Found {} text blocks", blocks.len());

    let declared = read_dat_count(template)?;
    if blocks.len() != declared {
        report.push_warning(format!(
            "number of blocks in .txt ({}) and .dat ({declared}) do not match",
            blocks.len()
        ));
    }
    if let Some(bed_path) = bed {
        match read_bed_file(bed_path) {
            Ok(labels) => {
                if labels.names.len() != blocks.len() {
                    report.push_warning(format!(
                        "number of blocks in .txt ({}) and .bed ({}) do not match",
                        blocks.len(),
                        labels.names.len()
                    ));
                }
            }
            Err(err) => {
                report.push_warning(format!("could not read .bed file: {err}"));
            }
        }
    }

    progress("Assembling strings...");
    let mut strings = Vec::with_capacity(blocks.len());
    for block in &blocks {
        match parse_block(block) {
            None => {}
            Some(TextBlock {
                body: BlockBody::Invalid,
                ..
            }) => {
                report.invalid += 1;
                strings.push(String::new());
            }
            Some(TextBlock { body, .. }) => {
                let text = body.assemble();
                if text.is_empty() {
                    report.empty += 1;
                }
                strings.push(text);
            }
        }
    }

    report.total = strings.len();
    report.multi_line = strings.iter().filter(|s| s.contains('\n')).count();
    report.single_line = report.total - report.multi_line - report.empty - report.invalid;

    progress(&format!("Writing {} strings to DAT...", strings.len()));
    write_dat(dest, &LanguageResource::from_strings(strings))?;

    progress("Validating written container...");
    match validate_dat(dest) {
        Ok(issues) => {
            for issue in &issues {
                tracing::warn!("{issue}");
            }
            report.validation = issues;
        }
        Err(err) => {
            report.push_warning(format!("could not validate written container: {err}"));
        }
    }

    tracing::info!(
        "Packing complete: total={}, empty={}, invalid={}, multiline={}, single={}",
        report.total,
        report.empty,
        report.invalid,
        report.multi_line,
        report.single_line
    );
    Ok(report)
}
