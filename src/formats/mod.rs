//! File format handlers for `FlatOut`-engine language files

pub mod bed;
pub mod dat;
pub mod txt;
pub mod version;

// Re-export main types for convenience
pub use bed::{LabelMap, read_bed_file};
pub use dat::{LanguageResource, read_dat, validate_dat, write_dat};
pub use txt::{TextBlock, parse_block, split_blocks};
