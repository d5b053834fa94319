// src/bin/cli.rs
use pickem_paste::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
