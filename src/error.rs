use std::io;
use std::path::PathBuf;

/// Errors that can occur while assembling, encoding, or decoding an icon
/// file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The number of images is outside the range the directory header can
    /// describe (1 to 255).  An empty directory is rejected with this error
    /// too; a zero-image icon file is not a valid output.
    #[error("an icon file must hold between 1 and 255 images (was given {count})")]
    TooManyImages {
        /// The number of images that was requested.
        count: usize,
    },

    /// An image dimension falls outside the 1 to 256 range that the
    /// single-byte dimension fields can encode.
    #[error("image dimensions must be between 1x1 and 256x256 (was {width}x{height})")]
    ImageTooLarge {
        /// The rejected width, in pixels.
        width: u32,
        /// The rejected height, in pixels.
        height: u32,
    },

    /// A source image file could not be read.  The whole build is aborted;
    /// there is no partial-success mode.
    #[error("failed to read source image {}: {source}", .path.display())]
    SourceUnreadable {
        /// The path of the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An image payload, or the assembled container as a whole, exceeds the
    /// format's 32-bit size fields.
    #[error("encoded data is too large for a 32-bit size field ({length} bytes)")]
    SizeOverflow {
        /// The length that did not fit, in bytes.
        length: u64,
    },

    /// The assembled container could not be persisted to the destination
    /// path.  No truncated file is left behind.
    #[error("failed to write icon file {}: {source}", .path.display())]
    DestinationWriteFailed {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input data is not a valid icon container.
    #[error("malformed icon file: {0}")]
    Malformed(String),

    /// An I/O failure from a caller-supplied reader or writer.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for icon container operations.
pub type Result<T> = std::result::Result<T, Error>;
