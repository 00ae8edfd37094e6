//! Tile directory structures
//!
//! A directory is the ordered in-memory list of tile records, decoded
//! exactly once per file by invoking the record codec `ntiles` times from
//! the header's declared directory offset. Read order equals on-disk
//! order and carries no grid semantics by itself; those are derived by
//! the grid resolver. No sorting, no deduplication.

use log::{debug, info};
use std::io::SeekFrom;

use crate::format::errors::SlideResult;
use crate::format::tile::{TileRecord, WtpTileRecord};
use crate::format::validation;
use crate::io::seekable::SeekableReader;

/// Tile directory of a two-tier (SIS/ETS) container
#[derive(Debug, Clone)]
pub struct EtsDirectory {
    records: Vec<TileRecord>,
}

impl EtsDirectory {
    /// Decodes `ntiles` records starting at `offset`
    pub fn read(
        reader: &mut dyn SeekableReader,
        offset: u64,
        ntiles: u32,
    ) -> SlideResult<Self> {
        // An empty directory may legitimately sit at end of file; the
        // offset only has to be readable when there are records to read
        if ntiles > 0 {
            let file_size = validation::get_file_size(reader)?;
            validation::validate_directory_offset(offset, file_size)?;
        }
        reader.seek(SeekFrom::Start(offset))?;

        let mut records = Vec::with_capacity(ntiles as usize);
        for n in 0..ntiles {
            let record = TileRecord::read(reader)?;
            debug!("Tile record {}: coord {:?}, level {}, offset {}, {} bytes",
                   n, record.coord, record.level, record.offset, record.numbytes);
            records.push(record);
        }

        info!("Read {} tile records from directory at offset {}", records.len(), offset);
        Ok(EtsDirectory { records })
    }

    /// Number of records in the directory
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index` in on-disk order
    pub fn get(&self, index: usize) -> Option<&TileRecord> {
        self.records.get(index)
    }

    /// Iterates records in on-disk order
    pub fn iter(&self) -> std::slice::Iter<'_, TileRecord> {
        self.records.iter()
    }
}

/// Tile directory of a single-tier (WTP) pack
#[derive(Debug, Clone)]
pub struct WtpDirectory {
    records: Vec<WtpTileRecord>,
}

impl WtpDirectory {
    /// Decodes `ntiles` records starting at `offset`
    pub fn read(
        reader: &mut dyn SeekableReader,
        offset: u64,
        ntiles: u32,
    ) -> SlideResult<Self> {
        if ntiles > 0 {
            let file_size = validation::get_file_size(reader)?;
            validation::validate_directory_offset(offset, file_size)?;
        }
        reader.seek(SeekFrom::Start(offset))?;

        let mut records = Vec::with_capacity(ntiles as usize);
        for _ in 0..ntiles {
            records.push(WtpTileRecord::read(reader)?);
        }

        info!("Read {} tile records from directory at offset {}", records.len(), offset);
        Ok(WtpDirectory { records })
    }

    /// Number of records in the directory
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index` in on-disk order
    pub fn get(&self, index: usize) -> Option<&WtpTileRecord> {
        self.records.get(index)
    }

    /// Iterates records in on-disk order
    pub fn iter(&self) -> std::slice::Iter<'_, WtpTileRecord> {
        self.records.iter()
    }
}
