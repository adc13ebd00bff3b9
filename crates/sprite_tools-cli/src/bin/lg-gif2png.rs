//! lg-gif2png - Turn GIF sprites into PNGs with transparent white
//!
//! Every `*.gif` in the sprite directory is pasted onto a 32x32 transparent
//! canvas, pure white is keyed out and the result is saved next to the source.

use clap::Parser;
use sprite_tools::{convert_dir, DEFAULT_SPRITE_DIR};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lg-gif2png")]
#[command(version)]
#[command(about = "Convert GIF sprites to 32x32 PNGs with white keyed to transparent", long_about = None)]
struct Cli {
    /// Directory containing the GIF sprites
    #[arg(default_value = DEFAULT_SPRITE_DIR)]
    dir: PathBuf,
}

fn run(cli: &Cli) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    eprintln!("Converting GIF sprites in '{}'", cli.dir.display());

    let written = convert_dir(&cli.dir)?;
    for png in &written {
        eprintln!("Wrote '{}'", png.display());
    }
    eprintln!("Converted {} sprite(s)", written.len());

    Ok(written)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}
