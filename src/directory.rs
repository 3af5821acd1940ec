use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;
use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::process;

use crate::entry::{dimension_from_byte, IconDirEntry, ENTRY_LENGTH};
use crate::error::{Error, Result};
use crate::source::IconSource;

/// The length of the global header, in bytes:
const HEADER_LENGTH: u32 = 6;

/// The resource type field value for icon (as opposed to cursor) files:
const RESOURCE_TYPE_ICON: u16 = 1;

/// The most images one directory can hold.  The header field is 16 bits
/// wide, but the count is kept within a single byte so that byte 4 of the
/// header carries the count and byte 5 is always zero.
const MAX_ENTRIES: usize = 255;

/// A complete icon container: an ordered collection of images that
/// serializes as a single .ico file.
///
/// The encoded layout is a 6-byte global header, one fixed 16-byte record
/// per image, then every image's payload appended contiguously in the same
/// order, with no padding.  Each record's offset field points at the
/// absolute position of its payload, so records and payloads must always be
/// written together; [`write`](#method.write) produces the whole layout in
/// one pass.
pub struct IconDir {
    entries: Vec<IconDirEntry>,
}

impl IconDir {
    /// Creates a new, empty icon directory.
    pub fn new() -> IconDir {
        IconDir {
            entries: Vec::new(),
        }
    }

    /// Reads every source image in input order and collects the results
    /// into a directory, ready to be encoded.  Any unreadable source aborts
    /// the whole assembly; a container with a subset of its images would
    /// not be the container that was asked for.
    pub fn assemble<I>(sources: I) -> Result<IconDir>
    where
        I: IntoIterator<Item = IconSource>,
    {
        let mut icondir = IconDir::new();
        for source in sources {
            let data = fs::read(source.path()).map_err(|err| Error::SourceUnreadable {
                path: source.path().to_path_buf(),
                source: err,
            })?;
            debug!(
                "read {} payload bytes for {}x{} image from {}",
                data.len(),
                source.width(),
                source.height(),
                source.path().display()
            );
            icondir.add_entry(IconDirEntry::new(source.width(), source.height(), data)?);
        }
        Ok(icondir)
    }

    /// Appends an entry to the directory.  The count limit is checked when
    /// the directory is encoded, not here.
    pub fn add_entry(&mut self, entry: IconDirEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in this directory, in encoding order.
    pub fn entries(&self) -> &[IconDirEntry] {
        &self.entries
    }

    /// Returns the encoded length of the file, in bytes, including the
    /// header and all directory records.
    pub fn total_length(&self) -> u64 {
        let mut length =
            u64::from(HEADER_LENGTH) + u64::from(ENTRY_LENGTH) * self.entries.len() as u64;
        for entry in &self.entries {
            length += u64::from(entry.data_size());
        }
        length
    }

    /// Writes the directory to an ICO file (or other writer).
    ///
    /// Fails before emitting anything if the directory holds no images or
    /// more than 255 of them, or if the encoded file would exceed what the
    /// records' 32-bit offset fields can address.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.entries.is_empty() || self.entries.len() > MAX_ENTRIES {
            return Err(Error::TooManyImages {
                count: self.entries.len(),
            });
        }
        let total_length = self.total_length();
        if total_length > u64::from(u32::MAX) {
            return Err(Error::SizeOverflow {
                length: total_length,
            });
        }
        writer.write_u16::<LittleEndian>(0)?; // reserved
        writer.write_u16::<LittleEndian>(RESOURCE_TYPE_ICON)?;
        writer.write_u16::<LittleEndian>(self.entries.len() as u16)?;
        let mut data_offset = HEADER_LENGTH + ENTRY_LENGTH * self.entries.len() as u32;
        for entry in &self.entries {
            entry.write_record(writer.by_ref(), data_offset)?;
            data_offset += entry.data_size();
        }
        for entry in &self.entries {
            writer.write_all(entry.data())?;
        }
        Ok(())
    }

    /// Encodes the directory into a byte buffer; equivalent to
    /// [`write`](#method.write) into a `Vec<u8>`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.total_length() as usize);
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Encodes the directory and persists it to the given path, replacing
    /// any existing file.
    ///
    /// The whole buffer is encoded in memory first, written to a sibling
    /// temporary file, and renamed into place, so a failure never leaves a
    /// truncated icon file at the destination.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let buffer = self.to_bytes()?;
        let mut staging = path.as_os_str().to_os_string();
        staging.push(format!(".{}.tmp", process::id()));
        let staging = PathBuf::from(staging);
        let written = fs::write(&staging, &buffer).and_then(|()| fs::rename(&staging, path));
        if let Err(err) = written {
            let _ = fs::remove_file(&staging);
            return Err(Error::DestinationWriteFailed {
                path: path.to_path_buf(),
                source: err,
            });
        }
        debug!("wrote {} bytes to {}", buffer.len(), path.display());
        Ok(())
    }

    /// Reads an icon directory from an ICO file.
    ///
    /// Only the container layer is parsed: the header, the records, and
    /// each record's payload span.  Payload bytes are carried through
    /// verbatim and never decoded.  Color count, plane, and bits-per-pixel
    /// fields from other producers are accepted without interpretation.
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<IconDir> {
        let reserved = reader.read_u16::<LittleEndian>()?;
        if reserved != 0 {
            return Err(Error::Malformed(format!(
                "invalid reserved field in header (was {}, must be 0)",
                reserved
            )));
        }
        let resource_type = reader.read_u16::<LittleEndian>()?;
        if resource_type != RESOURCE_TYPE_ICON {
            return Err(Error::Malformed(format!(
                "not an icon resource (type field was {})",
                resource_type
            )));
        }
        let num_entries = reader.read_u16::<LittleEndian>()? as usize;
        let mut dimensions = Vec::<(u32, u32)>::with_capacity(num_entries);
        let mut spans = Vec::<(u32, u32)>::with_capacity(num_entries);
        for _ in 0..num_entries {
            let width = dimension_from_byte(reader.read_u8()?);
            let height = dimension_from_byte(reader.read_u8()?);
            let _color_count = reader.read_u8()?;
            let reserved = reader.read_u8()?;
            if reserved != 0 {
                return Err(Error::Malformed(format!(
                    "invalid reserved field in entry record (was {}, must be 0)",
                    reserved
                )));
            }
            let _color_planes = reader.read_u16::<LittleEndian>()?;
            let _bits_per_pixel = reader.read_u16::<LittleEndian>()?;
            let data_size = reader.read_u32::<LittleEndian>()?;
            let data_offset = reader.read_u32::<LittleEndian>()?;
            dimensions.push((width, height));
            spans.push((data_offset, data_size));
        }
        let mut icondir = IconDir::new();
        for (&(width, height), &(data_offset, data_size)) in
            dimensions.iter().zip(spans.iter())
        {
            reader.seek(SeekFrom::Start(u64::from(data_offset)))?;
            let mut data = vec![0u8; data_size as usize];
            reader.read_exact(&mut data)?;
            icondir.add_entry(IconDirEntry::new(width, height, data)?);
        }
        Ok(icondir)
    }
}

impl Default for IconDir {
    fn default() -> IconDir {
        IconDir::new()
    }
}
