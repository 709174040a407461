use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use mkreadme_lib::readme;

/// Print the README for the machine learning development environment to
/// standard output. Redirect it to capture the file: `mkreadme > README.md`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    let document = readme::render();
    log::debug!("rendered document of {} bytes", document.len());

    let mut stdout = io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
