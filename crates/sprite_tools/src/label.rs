//! Sprite sheet tile labeling.
//!
//! The sheet is upscaled with nearest-neighbor sampling, partitioned into a
//! grid of tiles and every tile gets its zero-based row-major index drawn in
//! black or white, whichever contrasts with the tile's average color.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::glyphs::draw_text;
use crate::{Result, SpriteError};

/// Inset of a label from its tile's top-left corner, in pre-scale pixels.
const LABEL_INSET: u32 = 5;

/// Luminance at or above which a tile counts as light.
const LUMINANCE_MIDPOINT: f64 = 128.0;

/// Tile geometry for [`label_sheet`].
///
/// Tile size and padding are in source pixels and get multiplied by `scale`.
/// The offsets are margins in the scaled sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelOptions {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Nearest-neighbor upscale factor (>= 1).
    pub scale: u32,
    /// Gap between neighbouring tiles.
    pub padding: u32,
    pub offset_x: u32,
    pub offset_y: u32,
    /// Draw one-pixel divider lines along tile boundaries.
    pub hairline: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            tile_width: 16,
            tile_height: 16,
            scale: 1,
            padding: 0,
            offset_x: 0,
            offset_y: 0,
            hairline: false,
        }
    }
}

impl LabelOptions {
    pub fn validate(&self) -> Result<()> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(SpriteError::InvalidGeometry(format!(
                "tile size must be positive, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if self.scale == 0 {
            return Err(SpriteError::InvalidGeometry(
                "scale must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One cell of a [`TileGrid`], in scaled sheet coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub index: u32,
    pub row: u32,
    pub col: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The full tiles that fit inside a scaled sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub cols: u32,
    pub rows: u32,
    step_x: u32,
    step_y: u32,
    tile_width: u32,
    tile_height: u32,
    offset_x: u32,
    offset_y: u32,
}

impl TileGrid {
    /// Lay out tiles over a `width`×`height` sheet that is already scaled.
    ///
    /// Partial tiles at the right and bottom are not counted. Offsets that eat
    /// the whole sheet give an empty grid.
    pub fn new(width: u32, height: u32, opts: &LabelOptions) -> Result<Self> {
        opts.validate()?;
        let overflow = || SpriteError::InvalidGeometry("tile geometry overflows".to_string());

        let step_x = opts
            .tile_width
            .checked_add(opts.padding)
            .and_then(|w| w.checked_mul(opts.scale))
            .ok_or_else(overflow)?;
        let step_y = opts
            .tile_height
            .checked_add(opts.padding)
            .and_then(|h| h.checked_mul(opts.scale))
            .ok_or_else(overflow)?;

        let usable_w = width.saturating_sub(opts.offset_x.saturating_mul(2));
        let usable_h = height.saturating_sub(opts.offset_y.saturating_mul(2));

        Ok(Self {
            cols: usable_w / step_x,
            rows: usable_h / step_y,
            step_x,
            step_y,
            tile_width: opts.tile_width * opts.scale,
            tile_height: opts.tile_height * opts.scale,
            offset_x: opts.offset_x,
            offset_y: opts.offset_y,
        })
    }

    pub fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| Tile {
                index: row * self.cols + col,
                row,
                col,
                x: col * self.step_x + self.offset_x,
                y: row * self.step_y + self.offset_y,
                width: self.tile_width,
                height: self.tile_height,
            })
        })
    }
}

/// Label ink color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelColor {
    Black,
    White,
}

impl LabelColor {
    pub fn to_rgb(self) -> Rgb<u8> {
        match self {
            LabelColor::Black => Rgb([0, 0, 0]),
            LabelColor::White => Rgb([255, 255, 255]),
        }
    }
}

/// Perceptual luminance `0.299 R + 0.587 G + 0.114 B`.
pub fn luminance(color: Rgb<u8>) -> f64 {
    weighted_luminance(color) as f64 / 1000.0
}

// Luminance scaled by 1000 so the midpoint comparison is exact.
fn weighted_luminance(Rgb([r, g, b]): Rgb<u8>) -> u32 {
    299 * r as u32 + 587 * g as u32 + 114 * b as u32
}

/// Black on light backgrounds, white on dark ones.
pub fn contrasting_color(background: Rgb<u8>) -> LabelColor {
    if weighted_luminance(background) < (LUMINANCE_MIDPOINT as u32) * 1000 {
        LabelColor::White
    } else {
        LabelColor::Black
    }
}

/// Mean color of a rectangle, each channel rounded to nearest.
///
/// The rectangle is clipped to the image; an empty rectangle averages to
/// black.
pub fn average_color(img: &RgbImage, x: u32, y: u32, width: u32, height: u32) -> Rgb<u8> {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());

    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for py in y..y_end {
        for px in x..x_end {
            let Rgb(channels) = img.get_pixel(px, py);
            for (acc, &c) in sum.iter_mut().zip(channels) {
                *acc += u64::from(c);
            }
            count += 1;
        }
    }
    if count == 0 {
        return Rgb([0, 0, 0]);
    }
    Rgb(sum.map(|s| ((s + count / 2) / count) as u8))
}

/// Upscale by an integer factor, duplicating pixels.
pub fn scale_nearest(img: &RgbImage, scale: u32) -> Result<RgbImage> {
    if scale == 0 {
        return Err(SpriteError::InvalidGeometry(
            "scale must be at least 1".to_string(),
        ));
    }
    let (width, height) = img.dimensions();
    let (Some(scaled_w), Some(scaled_h)) = (width.checked_mul(scale), height.checked_mul(scale))
    else {
        return Err(SpriteError::InvalidGeometry(format!(
            "{width}x{height} scaled by {scale} is too large"
        )));
    };
    Ok(imageops::resize(img, scaled_w, scaled_h, FilterType::Nearest))
}

fn draw_vline(img: &mut RgbImage, x: u32, y0: u32, y1: u32, color: Rgb<u8>) {
    if x >= img.width() || img.height() == 0 {
        return;
    }
    for y in y0..=y1.min(img.height() - 1) {
        img.put_pixel(x, y, color);
    }
}

fn draw_hline(img: &mut RgbImage, y: u32, x0: u32, x1: u32, color: Rgb<u8>) {
    if y >= img.height() || img.width() == 0 {
        return;
    }
    for x in x0..=x1.min(img.width() - 1) {
        img.put_pixel(x, y, color);
    }
}

/// Scale `img` and stamp tile indices (and optional hairlines) on it.
///
/// Alpha is discarded. Tiles are processed in row-major order directly on
/// the output, so lines drawn for earlier tiles feed into the average color
/// of later ones. The closing right and bottom lines reuse the color of the
/// last tile processed, or white when the grid is empty.
pub fn label_sheet(img: &DynamicImage, opts: &LabelOptions) -> Result<RgbImage> {
    draw_labels(img, opts).map(|(sheet, _)| sheet)
}

fn draw_labels(img: &DynamicImage, opts: &LabelOptions) -> Result<(RgbImage, TileGrid)> {
    opts.validate()?;
    let mut sheet = scale_nearest(&img.to_rgb8(), opts.scale)?;
    let (width, height) = sheet.dimensions();
    let grid = TileGrid::new(width, height, opts)?;

    let right = width.saturating_sub(opts.offset_x);
    let bottom = height.saturating_sub(opts.offset_y);
    let inset = LABEL_INSET.saturating_mul(opts.scale);

    let mut color = LabelColor::White;
    for tile in grid.tiles() {
        let average = average_color(&sheet, tile.x, tile.y, tile.width, tile.height);
        color = contrasting_color(average);
        let ink = color.to_rgb();

        if opts.hairline {
            draw_vline(&mut sheet, tile.x, opts.offset_y, bottom, ink);
            draw_hline(&mut sheet, tile.y, opts.offset_x, right, ink);
        }

        draw_text(
            &mut sheet,
            tile.x.saturating_add(inset),
            tile.y.saturating_add(inset),
            &tile.index.to_string(),
            ink,
        );
    }

    if opts.hairline {
        let ink = color.to_rgb();
        draw_vline(&mut sheet, right, opts.offset_y, bottom, ink);
        draw_hline(&mut sheet, bottom, opts.offset_x, right, ink);
    }

    Ok((sheet, grid))
}

/// Label the image at `input` and save it to `output`.
///
/// The output format follows the extension of `output`; an existing file is
/// overwritten. Returns the grid that was labeled.
pub fn label_file(input: &Path, output: &Path, opts: &LabelOptions) -> Result<TileGrid> {
    let img = image::open(input).map_err(|source| SpriteError::Image {
        path: input.to_path_buf(),
        source,
    })?;

    let (sheet, grid) = draw_labels(&img, opts)?;

    sheet.save(output).map_err(|source| SpriteError::Image {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(grid)
}
