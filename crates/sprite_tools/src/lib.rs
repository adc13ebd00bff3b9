//! # sprite_tools
//!
//! Small image transforms for preparing sprite assets.
//!
//! ## Features
//!
//! - **Chroma key**: paste GIF sprites onto a 32×32 transparent canvas and turn
//!   pure white into transparency, saving a PNG next to each source.
//! - **Labeler**: upscale a sprite sheet with nearest-neighbor sampling and
//!   stamp every tile with its index, optionally drawing hairline dividers.
//!
//! ## Quick Start
//!
//! ### Converting a directory of GIF sprites
//!
//! ```ignore
//! use sprite_tools::convert_dir;
//!
//! for png in convert_dir("last-guardian-sprites".as_ref())? {
//!     println!("{}", png.display());
//! }
//! ```
//!
//! ### Labeling a sprite sheet
//!
//! ```ignore
//! use sprite_tools::{label_file, LabelOptions};
//!
//! let opts = LabelOptions {
//!     tile_width: 16,
//!     tile_height: 16,
//!     scale: 2,
//!     ..Default::default()
//! };
//! let grid = label_file("sheet.png".as_ref(), "labeled.png".as_ref(), &opts)?;
//! println!("{} tiles", grid.len());
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub mod chroma;
pub mod glyphs;
pub mod label;

pub use chroma::{
    convert_dir, convert_gif, find_gifs, key_out_white, png_path_for, sprite_canvas,
    DEFAULT_SPRITE_DIR, KEYED_COLOR, KEY_COLOR, SPRITE_SIZE,
};
pub use label::{
    average_color, contrasting_color, label_file, label_sheet, luminance, scale_nearest,
    LabelColor, LabelOptions, Tile, TileGrid,
};

/// Errors that can occur while converting or labeling sprites.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// An image could not be decoded, encoded or written
    #[error("image error for '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A file or directory could not be accessed
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tile geometry that cannot partition an image
    #[error("invalid tile geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type for sprite operations.
pub type Result<T> = core::result::Result<T, SpriteError>;
