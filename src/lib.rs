//! Library for encoding/decoding Windows icon (.ico) container files
//!
//! See https://en.wikipedia.org/wiki/ICO_(file_format) for more information
//! about the file format.
//!
//! An ICO file packs several resolutions of one icon into a single
//! container: a 6-byte global header, a fixed 16-byte directory record per
//! image, and then every image's encoded payload, back to back.  This
//! library assembles such containers from PNG files that have already been
//! rasterized at their target sizes (for example by an external SVG
//! renderer), and can parse a container back into its entries.  Payload
//! bytes pass through untouched in both directions; pixel data is never
//! decoded or re-encoded.
//!
//! # Example
//!
//! ```no_run
//! use icodir::{IconDir, IconSource};
//!
//! let sources = vec![
//!     IconSource::new("icon-16.png", 16, 16)?,
//!     IconSource::new("icon-32.png", 32, 32)?,
//!     IconSource::new("icon-256.png", 256, 256)?,
//! ];
//! IconDir::assemble(sources)?.save("icon.ico")?;
//! # Ok::<(), icodir::Error>(())
//! ```

#![warn(missing_docs)]

mod directory;
mod entry;
mod error;
#[cfg(feature = "pngio")]
mod pngio;
mod source;

pub use crate::directory::IconDir;
pub use crate::entry::IconDirEntry;
pub use crate::error::{Error, Result};
pub use crate::source::{IconSource, STANDARD_SIZES};
