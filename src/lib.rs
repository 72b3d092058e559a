//! # langdat
//!
//! A pure-Rust library for the `FlatOut`-engine language file formats.
//!
//! ## Supported Formats
//!
//! - **DAT containers** - Binary offset-table blobs of UTF-16 strings
//! - **TXT documents** - Translator text format with `{LF}` markup,
//!   `{EMPTY}`/`{INVALID}` markers, and `//...//` reference annotations
//! - **BED name maps** - String-ID labels for text blocks
//! - **`version.ini`** - Language-ID definitions for display labels
//!
//! ## Quick Start
//!
//! ### Extracting and packing
//!
//! ```no_run
//! use langdat::converter::{convert_dat_to_txt, convert_txt_to_dat};
//! use std::path::Path;
//!
//! // Extract a container into a translator document
//! let report = convert_dat_to_txt(
//!     Path::new("language0.dat"),
//!     Path::new("languages.bed"),
//!     Path::new("language0.txt"),
//!     None,
//! )?;
//! println!("Extracted {} blocks", report.total);
//!
//! // Pack the edited document back
//! let report = convert_txt_to_dat(
//!     Path::new("language0.txt"),
//!     Path::new("language0.dat"),
//!     Path::new("new_language0.dat"),
//!     None,
//! )?;
//! println!("Packed {} strings", report.total);
//! # Ok::<(), langdat::Error>(())
//! ```
//!
//! ### Working with containers directly
//!
//! ```no_run
//! use langdat::formats::dat::{read_dat, validate_dat};
//!
//! let resource = read_dat("language0.dat")?;
//! println!("Found {} strings", resource.len());
//!
//! for issue in validate_dat("language0.dat")? {
//!     eprintln!("warning: {issue}");
//! }
//! # Ok::<(), langdat::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `langdat` command-line binary

pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::formats::bed::{LabelMap, parse_bed_str, read_bed_file};
    pub use crate::formats::dat::{
        LanguageResource, ValidationIssue, parse_dat_bytes, read_dat, read_dat_count, validate_dat,
        write_dat,
    };
    pub use crate::formats::txt::{
        BlockBody, Fragment, TextBlock, emit_block, emit_document, parse_block, split_blocks,
    };
    pub use crate::formats::version::{language_label, language_label_for, read_language_map};

    pub use crate::converter::{
        ExtractReport, PackReport, convert_dat_to_txt, convert_txt_to_dat,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
