//! Tile payload copy
//!
//! Seeks to a record's payload, reads exactly the declared byte count
//! into a reusable buffer, and writes the bytes verbatim to a per-tile
//! output file. The payload is an opaque compressed blob; nothing is
//! decoded or transformed.

use log::debug;
use std::fs::File;
use std::io::{SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::format::errors::{SlideError, SlideResult};
use crate::io::seekable::SeekableReader;

/// Writes tile payloads to individual files
///
/// The buffer grows to the largest payload seen and is never shrunk,
/// so repeated tiles do not reallocate.
pub struct TileWriter {
    buffer: Vec<u8>,
    filled: usize,
    output_dir: PathBuf,
    prefix: String,
}

impl TileWriter {
    /// Creates a writer targeting `output_dir` with the given name prefix
    pub fn new(output_dir: &Path, prefix: &str) -> Self {
        TileWriter {
            buffer: Vec::new(),
            filled: 0,
            output_dir: output_dir.to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    /// Output path for the tile at sequential `index`
    ///
    /// Names follow the fixed `{prefix}{index:04}.{ext}` pattern of the
    /// reference tools.
    pub fn tile_path(&self, index: u64, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}{:04}.{}", self.prefix, index, extension))
    }

    /// Reads a payload into the reusable buffer
    ///
    /// A short read against the declared length means the container is
    /// truncated and the whole run must abort.
    pub fn read_payload(
        &mut self,
        reader: &mut dyn SeekableReader,
        offset: u64,
        numbytes: u32,
    ) -> SlideResult<()> {
        let len = numbytes as usize;
        if self.buffer.len() < len {
            self.buffer.resize(len, 0);
        }
        reader.seek(SeekFrom::Start(offset))?;
        reader
            .read_exact(&mut self.buffer[..len])
            .map_err(|e| SlideError::from_read(e, offset))?;
        self.filled = len;
        debug!("Read {} payload bytes at offset {}", len, offset);
        Ok(())
    }

    /// Writes the buffered payload to the tile's output file
    ///
    /// The file is opened, written, and closed before returning, so each
    /// output file is a distinct ownership scope.
    pub fn write_payload(&self, index: u64, extension: &str) -> SlideResult<PathBuf> {
        let path = self.tile_path(index, extension);
        let mut out = File::create(&path)?;
        out.write_all(&self.buffer[..self.filled])?;
        Ok(path)
    }
}
