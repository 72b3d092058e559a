//! CLI command for TXT to DAT packing

use std::cell::Cell;
use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, print_done, print_step};
use crate::converter::convert_txt_to_dat_with_progress;
use crate::formats::version::language_label_for;

/// Run the pack command and print its diagnostic summary.
///
/// # Errors
/// Returns an error if the packing fails.
pub fn execute(txt: &Path, dat: &Path, bed: Option<&Path>, out: &Path) -> anyhow::Result<()> {
    let started = Instant::now();

    println!("Processing files:");
    println!("- Input text: {}", txt.display());
    println!(
        "- Template DAT: {}{}",
        dat.display(),
        language_label_for(dat)
    );
    println!("- Output DAT: {}", out.display());
    println!();

    let step = Cell::new(0usize);
    let report = convert_txt_to_dat_with_progress(txt, dat, out, bed, &|msg| {
        let current = step.get() + 1;
        step.set(current);
        let emoji = match current {
            1 => LOOKING_GLASS,
            2 => GEAR,
            3 => DISK,
            _ => LOOKING_GLASS,
        };
        print_step(current, 4, emoji, msg);
    })?;

    println!();
    println!("Text file info:");
    println!("- Found {} text blocks", report.blocks_found);

    println!();
    println!("Conversion diagnostics:");
    println!("- Total blocks: {}", report.total);
    println!("- Empty blocks: {}", report.empty);
    println!("- Invalid blocks: {}", report.invalid);
    println!("- Multiline blocks: {}", report.multi_line);
    println!("- Single line blocks: {}", report.single_line);
    if !report.validation.is_empty() {
        println!("- Validation findings: {}", report.validation.len());
    }

    print_done(started.elapsed());
    Ok(())
}
