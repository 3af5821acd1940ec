use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The smallest pixel dimension an icon entry can describe:
pub(crate) const MIN_DIMENSION: u32 = 1;

/// The largest pixel dimension an icon entry can describe (stored as a zero
/// byte in the entry record):
pub(crate) const MAX_DIMENSION: u32 = 256;

/// The pixel sizes conventionally rasterized for a Windows application icon.
///
/// The format itself accepts any dimensions from 1 to 256; this table is
/// advisory, for callers that want the customary multi-resolution set.
pub const STANDARD_SIZES: [u32; 10] = [16, 24, 32, 48, 64, 72, 96, 128, 180, 256];

/// A single pre-rasterized source image to be packed into an icon file: the
/// path of a PNG-encoded file together with its pixel dimensions.
///
/// Sources are produced by an external rasterizer and consumed once by
/// [`IconDir::assemble`](struct.IconDir.html#method.assemble); the file only
/// needs to remain readable until assembly, and the payload bytes are never
/// inspected or re-encoded.
#[derive(Clone, Debug)]
pub struct IconSource {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl IconSource {
    /// Creates a source descriptor for a PNG file rasterized at the given
    /// dimensions.  Both dimensions must be between 1 and 256 inclusive;
    /// returns an error otherwise.  The dimensions are trusted as declared
    /// and are not checked against the file contents (see
    /// [`for_png_file`](#method.for_png_file) to read them from the file
    /// instead).
    pub fn new<P: Into<PathBuf>>(path: P, width: u32, height: u32) -> Result<IconSource> {
        if width < MIN_DIMENSION || width > MAX_DIMENSION || height < MIN_DIMENSION
            || height > MAX_DIMENSION
        {
            return Err(Error::ImageTooLarge { width, height });
        }
        Ok(IconSource {
            path: path.into(),
            width,
            height,
        })
    }

    /// Returns the path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the declared width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the declared height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}
