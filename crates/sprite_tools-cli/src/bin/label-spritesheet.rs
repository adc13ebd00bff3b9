//! label-spritesheet - Number the tiles of a sprite sheet
//!
//! Scales the sheet with nearest-neighbor sampling and draws each tile's
//! index in black or white, depending on how light the tile is.

use clap::Parser;
use sprite_tools::{label_file, LabelOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "label-spritesheet")]
#[command(version)]
#[command(
    about = "Label tiles in a sprite sheet with index numbers, scale, padding, offset, and optional hairline dividers with dynamic contrasting colors",
    long_about = None
)]
struct Cli {
    /// Path to the sprite sheet image file
    image_path: PathBuf,

    /// Width of each tile in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    tile_width: u32,

    /// Height of each tile in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    tile_height: u32,

    /// Path for the output labeled sprite sheet image
    output_path: PathBuf,

    /// Scale factor for the image
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Padding around each tile in pixels (non-negative)
    #[arg(long, default_value = "0")]
    padding: u32,

    /// Horizontal offset in pixels (non-negative)
    #[arg(long = "offset_x", default_value = "0")]
    offset_x: u32,

    /// Vertical offset in pixels (non-negative)
    #[arg(long = "offset_y", default_value = "0")]
    offset_y: u32,

    /// Add hairline dividers between tiles
    #[arg(long)]
    hairline: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let opts = LabelOptions {
        tile_width: cli.tile_width,
        tile_height: cli.tile_height,
        scale: cli.scale,
        padding: cli.padding,
        offset_x: cli.offset_x,
        offset_y: cli.offset_y,
        hairline: cli.hairline,
    };

    eprintln!(
        "Labeling '{}' with {}x{} tiles, scale={}, padding={}, offset=({}, {}){}",
        cli.image_path.display(),
        opts.tile_width,
        opts.tile_height,
        opts.scale,
        opts.padding,
        opts.offset_x,
        opts.offset_y,
        if opts.hairline { ", hairline" } else { "" }
    );

    let grid = label_file(&cli.image_path, &cli.output_path, &opts)?;

    eprintln!(
        "Labeled {} tiles ({}x{}) -> '{}'",
        grid.len(),
        grid.cols,
        grid.rows,
        cli.output_path.display()
    );

    Ok(())
}
