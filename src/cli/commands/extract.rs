//! CLI command for DAT to TXT extraction

use std::cell::Cell;
use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, print_done, print_step};
use crate::converter::convert_dat_to_txt_with_progress;
use crate::formats::version::language_label_for;

/// Run the extract command and print its diagnostic summary.
///
/// # Errors
/// Returns an error if the extraction fails.
pub fn execute(
    dat: &Path,
    bed: &Path,
    txt: &Path,
    original_dat: Option<&Path>,
) -> anyhow::Result<()> {
    let started = Instant::now();

    println!("Processing files:");
    println!("- DAT file: {}{}", dat.display(), language_label_for(dat));
    println!("- BED file: {}", bed.display());
    println!("- Output: {}", txt.display());
    if let Some(original) = original_dat {
        println!(
            "- Original DAT: {}{}",
            original.display(),
            language_label_for(original)
        );
    }
    println!();

    let step = Cell::new(0usize);
    let report = convert_dat_to_txt_with_progress(dat, bed, txt, original_dat, &|msg| {
        let current = step.get() + 1;
        step.set(current);
        let emoji = match current {
            1 => LOOKING_GLASS,
            2 => GEAR,
            _ => DISK,
        };
        print_step(current, 3, emoji, msg);
    })?;

    println!();
    println!("BED file info:");
    println!("- Found {} string IDs", report.bed_names);
    println!("- Expected blocks: {}", report.expected_blocks);

    println!();
    println!("DAT file structure:");
    println!("- Number of strings: {}", report.total);
    println!("- Text section offset: 0x{:X}", report.text_offset);
    println!("- Header size: {} bytes", report.text_offset);
    println!("- Total file size: {} bytes", report.file_size);
    println!(
        "- Text section size: {} bytes",
        report.file_size - u64::from(report.text_offset)
    );

    println!();
    println!("Extraction complete:");
    println!("- Total blocks: {}", report.total);
    println!("- Empty blocks: {}", report.empty);
    println!("- Invalid blocks: {}", report.invalid);
    println!("- Multiline blocks: {}", report.multi_line);
    println!("- Single line blocks: {}", report.single_line);

    print_done(started.elapsed());
    Ok(())
}
