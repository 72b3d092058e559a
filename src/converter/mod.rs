//! DAT / TXT conversion
//!
//! High-level operations pairing the container codec with the text
//! markup codec:
//! - **extract** - DAT container to translator text document
//! - **pack** - edited text document back into a DAT container
//!
//! Both return structured diagnostic reports; writing those to a
//! terminal or log sink is the caller's concern.

mod extract;
mod pack;

pub use extract::{ExtractReport, convert_dat_to_txt, convert_dat_to_txt_with_progress};
pub use pack::{PackReport, convert_txt_to_dat, convert_txt_to_dat_with_progress};

/// Progress callback type for conversion operations.
/// The callback receives a message describing the current step.
pub type ProgressCallback<'a> = &'a dyn Fn(&str);
