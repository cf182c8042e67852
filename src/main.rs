//! lynxenc - encrypts Atari 8-bit executables for the Atari Lynx.
//!
//! Reads one program image, encodes its loader segment with the boot
//! ROM's key material and writes either the bare loader or a padded
//! cartridge image.

use clap::Parser;
use lynxenc::image::OutputKind;
use lynxenc::{container, encoder, image, Error, KeySet, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lynxenc")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Encrypts Atari 8-bit executables into Atari Lynx boot loaders",
    long_about = "Encodes the loader segment of a program image with the Lynx boot ROM's key \
                  material. A .lyx output is padded into a full cartridge image; any other \
                  output extension receives the bare encoded loader."
)]
struct Cli {
    /// Program image to encode (Atari executable or raw loader)
    input: PathBuf,

    /// Output file; the .lyx extension selects a cartridge image
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.input.exists() {
        return Err(Error::Input {
            path: cli.input,
            reason: "does not exist".into(),
        });
    }

    let input = std::fs::read(&cli.input)?;
    if input.is_empty() {
        return Err(Error::Input {
            path: cli.input,
            reason: "is empty".into(),
        });
    }

    let parsed = container::parse(&input)?;
    let kind = OutputKind::for_output(&cli.output, &parsed);
    let loader = encoder::encode(&parsed.loader, &KeySet::lynx())?;
    let output = image::assemble(parsed.metadata.as_ref(), &loader, &parsed.trailing, kind)?;

    // The output file is only opened once the whole pipeline has
    // succeeded; a failed run never touches it.
    std::fs::write(&cli.output, &output)?;

    println!("Wrote {} bytes to {}", output.len(), cli.output.display());

    Ok(())
}
