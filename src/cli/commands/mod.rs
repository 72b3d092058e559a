//! Subcommand definitions and dispatch

use std::path::PathBuf;

use clap::Subcommand;

pub mod extract;
pub mod pack;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract text from a DAT container into a translator document
    Extract {
        /// Source DAT container
        #[arg(short, long)]
        dat: PathBuf,

        /// BED name map supplying block labels
        #[arg(short, long)]
        bed: PathBuf,

        /// Output text document
        #[arg(short, long)]
        txt: PathBuf,

        /// Original DAT whose text is embedded as //...// reference
        /// annotations for translator context
        #[arg(short = 'r', long = "original-dat")]
        original_dat: Option<PathBuf>,
    },

    /// Pack a translator document back into a DAT container
    Pack {
        /// Input text document
        #[arg(short, long)]
        txt: PathBuf,

        /// Template DAT container used for the count cross-check
        #[arg(short, long)]
        dat: PathBuf,

        /// BED name map for an additional block-count cross-check
        #[arg(short, long)]
        bed: Option<PathBuf>,

        /// Output DAT container
        #[arg(short, long)]
        out: PathBuf,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying conversion fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                dat,
                bed,
                txt,
                original_dat,
            } => extract::execute(dat, bed, txt, original_dat.as_deref()),
            Commands::Pack { txt, dat, bed, out } => {
                pack::execute(txt, dat, bed.as_deref(), out)
            }
        }
    }
}
