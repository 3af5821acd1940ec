use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::source::IconSource;

impl IconSource {
    /// Creates a source descriptor for a PNG file, reading the pixel
    /// dimensions from the file's header instead of having the caller
    /// declare them.  Only the header is parsed; the image data itself is
    /// not decoded.  Returns an error if the file cannot be opened, if it
    /// does not start with a well-formed PNG header, or if its dimensions
    /// are outside the encodable 1 to 256 range.
    pub fn for_png_file<P: Into<PathBuf>>(path: P) -> Result<IconSource> {
        let path = path.into();
        let file = File::open(&path).map_err(|err| Error::SourceUnreadable {
            path: path.clone(),
            source: err,
        })?;
        let mut decoder = png::Decoder::new(BufReader::new(file));
        let info = decoder.read_header_info().map_err(|err| {
            Error::Malformed(format!("bad PNG header in {}: {}", path.display(), err))
        })?;
        let (width, height) = (info.width, info.height);
        IconSource::new(path, width, height)
    }
}
