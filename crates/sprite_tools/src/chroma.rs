//! White-to-transparent conversion for GIF sprites.
//!
//! Every GIF is pasted at the origin of its own 32×32 transparent canvas and
//! pixels that are exactly opaque white are made fully transparent. Near-white
//! pixels are left untouched.

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::{Result, SpriteError};

/// Side length of the sprite canvas in pixels.
pub const SPRITE_SIZE: u32 = 32;

/// Directory scanned by `lg-gif2png` when none is given.
pub const DEFAULT_SPRITE_DIR: &str = "last-guardian-sprites";

/// The only color that gets keyed out.
pub const KEY_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// What a keyed pixel becomes. RGB is kept, alpha drops to zero.
pub const KEYED_COLOR: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Copy `src` onto a fresh transparent sprite canvas at (0, 0).
///
/// Source pixels replace canvas pixels (no blending). Anything beyond
/// [`SPRITE_SIZE`] in either axis is dropped; smaller sources leave the rest
/// of the canvas transparent.
#[must_use = "this returns the new canvas"]
pub fn sprite_canvas(src: &DynamicImage) -> RgbaImage {
    let mut canvas = RgbaImage::new(SPRITE_SIZE, SPRITE_SIZE);
    imageops::replace(&mut canvas, &src.to_rgba8(), 0, 0);
    canvas
}

/// Rewrite every [`KEY_COLOR`] pixel to [`KEYED_COLOR`].
///
/// Returns how many pixels were changed.
pub fn key_out_white(img: &mut RgbaImage) -> usize {
    let mut keyed = 0;
    for pixel in img.pixels_mut() {
        if *pixel == KEY_COLOR {
            *pixel = KEYED_COLOR;
            keyed += 1;
        }
    }
    keyed
}

/// Sibling path of `gif` with a `.png` extension.
pub fn png_path_for(gif: &Path) -> PathBuf {
    gif.with_extension("png")
}

/// List the GIF files directly inside `dir`, sorted by path.
///
/// Matches like the shell glob `dir/*.gif`: the extension must be exactly
/// `gif` and hidden files are skipped.
pub fn find_gifs(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| SpriteError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut gifs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        let is_gif = path.extension().and_then(|e| e.to_str()) == Some("gif");
        if is_gif && !hidden && path.is_file() {
            gifs.push(path);
        }
    }
    gifs.sort();
    Ok(gifs)
}

/// Convert one GIF into a keyed 32×32 PNG next to it.
///
/// An existing PNG of the same name is overwritten. Returns the written path.
pub fn convert_gif(path: &Path) -> Result<PathBuf> {
    let src = image::open(path).map_err(|source| SpriteError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sprite = sprite_canvas(&src);
    key_out_white(&mut sprite);

    let out = png_path_for(path);
    sprite
        .save_with_format(&out, ImageFormat::Png)
        .map_err(|source| SpriteError::Image {
            path: out.clone(),
            source,
        })?;
    Ok(out)
}

/// Convert every GIF in `dir`, stopping at the first failure.
///
/// Returns the PNG paths written, in processing order.
pub fn convert_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    find_gifs(dir)?
        .iter()
        .map(|gif| convert_gif(gif))
        .collect()
}
