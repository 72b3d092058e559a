//! langdat command-line binary

fn main() -> anyhow::Result<()> {
    langdat::cli::run_cli()
}
