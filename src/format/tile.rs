//! Tile record codecs
//!
//! One fixed-width directory entry per tile, decoded sequentially. Beyond
//! the fixed byte count there is nothing to validate here: the companion
//! fields were never decoded upstream and are kept verbatim. Records are
//! immutable once read.

use crate::format::constants::tile;
use crate::format::errors::{SlideError, SlideResult};
use crate::format::validation;
use crate::io::seekable::SeekableReader;

/// A tile directory entry of the two-tier (SIS/ETS) format
///
/// 36 bytes on disk: an opaque lead-in, a 3-component grid coordinate,
/// the pyramid level, the absolute payload offset, the payload length,
/// and an opaque trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRecord {
    /// Opaque lead-in field, meaning unknown
    pub reserved: u32,
    /// Grid coordinate (x, y, z)
    pub coord: [u32; 3],
    /// Pyramid level; only level 0 is ever materialized
    pub level: u32,
    /// Absolute byte offset of the payload in the stream
    pub offset: u64,
    /// Payload byte length
    pub numbytes: u32,
    /// Opaque trailer field, meaning unknown
    pub companion: u32,
}

impl TileRecord {
    /// Decodes one record, advancing the stream cursor by 36 bytes
    pub fn read(reader: &mut dyn SeekableReader) -> SlideResult<Self> {
        let reserved = validation::read_u32_field(reader)?;
        let coord = [
            validation::read_u32_field(reader)?,
            validation::read_u32_field(reader)?,
            validation::read_u32_field(reader)?,
        ];
        let level = validation::read_u32_field(reader)?;
        let offset = validation::read_u64_field(reader)?;
        let numbytes = validation::read_u32_field(reader)?;
        let companion = validation::read_u32_field(reader)?;

        Ok(TileRecord { reserved, coord, level, offset, numbytes, companion })
    }

    /// Dumps the record to stdout in the reference tool's layout
    pub fn dump(&self) {
        println!("coord: {},{},{}", self.coord[0], self.coord[1], self.coord[2]);
        println!("level:    {}", self.level);
        println!("offset:   {}", self.offset);
        println!("numbytes: {}", self.numbytes);
        println!("dummy2:   {}", self.companion);
    }
}

/// A tile directory entry of the single-tier (WTP) format
///
/// 16 bytes on disk. An absent grid cell is signaled in-band by a record
/// whose offset is the all-ones sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WtpTileRecord {
    /// Absolute byte offset of the payload, or the all-ones sentinel
    pub offset: u64,
    /// Payload byte length
    pub numbytes: u32,
    /// Opaque trailer field, meaning unknown
    pub companion: u32,
}

impl WtpTileRecord {
    /// Decodes one record, advancing the stream cursor by 16 bytes
    pub fn read(reader: &mut dyn SeekableReader) -> SlideResult<Self> {
        let offset = validation::read_u64_field(reader)?;
        let numbytes = validation::read_u32_field(reader)?;
        let companion = validation::read_u32_field(reader)?;

        Ok(WtpTileRecord { offset, numbytes, companion })
    }

    /// Whether the offset carries the absent-tile sentinel
    pub fn is_empty(&self) -> bool {
        self.offset == tile::EMPTY_OFFSET
    }

    /// Checks sentinel consistency for the record at `index`
    ///
    /// Returns `Ok(true)` for a well-formed empty tile, `Ok(false)` for a
    /// real tile, and `MalformedRecord` when the offset is the sentinel
    /// but the length or companion field is not at its reserved zero.
    pub fn check_empty(&self, index: usize) -> SlideResult<bool> {
        if !self.is_empty() {
            return Ok(false);
        }
        if self.numbytes != 0 {
            return Err(SlideError::MalformedRecord {
                index,
                field: "numbytes",
                value: self.numbytes as u64,
            });
        }
        if self.companion != 0 {
            return Err(SlideError::MalformedRecord {
                index,
                field: "companion",
                value: self.companion as u64,
            });
        }
        Ok(true)
    }

    /// Dumps the record to stdout in the reference tool's layout
    pub fn dump(&self) {
        println!("offset:    {}", self.offset);
        println!("numbytes:  {}", self.numbytes);
        println!("dummy2:    {}", self.companion);
    }
}
