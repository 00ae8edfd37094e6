//! SIS header and ETS sub-header codecs (two-tier format)
//!
//! A SIS container opens with a fixed 64-byte outer header that locates
//! both the nested ETS sub-header and the tile directory. The schema was
//! reverse-engineered from real files: every field with an established
//! known-good value is validated on read, and the remaining fields are
//! retained as opaque values without any invented checks.

use log::{debug, info};
use std::io::SeekFrom;

use crate::format::constants::{compression, ets, sis};
use crate::format::errors::{SlideError, SlideResult};
use crate::format::validation;
use crate::io::seekable::SeekableReader;

/// Outer header of a SIS container
#[derive(Debug, Clone)]
pub struct SisHeader {
    /// Declared struct byte-size, always 64
    pub nbytes: u32,
    /// Format version, always 2
    pub version: u32,
    /// Dimensionality marker, 4 or 6
    pub dim: u32,
    /// Byte offset of the ETS sub-header, always 64
    pub ets_offset: u64,
    /// Declared ETS struct byte-size, always 228
    pub ets_nbytes: u32,
    /// Byte offset where the tile directory begins
    pub tile_dir_offset: u64,
    /// Number of tile records in the directory
    pub ntiles: u32,
    /// Retained opaque fields, meaning unknown
    pub reserved: [u32; 6],
}

impl SisHeader {
    /// Reads and validates the SIS header at offset 0
    pub fn read(reader: &mut dyn SeekableReader) -> SlideResult<Self> {
        reader.seek(SeekFrom::Start(0))?;
        validation::read_magic(reader, &sis::MAGIC, "SIS")?;

        let nbytes = validation::read_u32_expect(reader, "nbytes", sis::HEADER_NBYTES)?;
        let version = validation::read_u32_expect(reader, "version", sis::VERSION)?;
        let dim = validation::read_u32_one_of(reader, "dim", &sis::KNOWN_DIMS)?;
        let ets_offset = validation::read_u64_expect(reader, "ets offset", sis::ETS_OFFSET)?;
        let ets_nbytes = validation::read_u32_expect(reader, "ets nbytes", sis::ETS_NBYTES)?;

        let mut reserved = [0u32; 6];
        // Observed always zero; a nonzero value would mean a schema drift
        reserved[0] = validation::read_u32_expect(reader, "reserved0", 0)?;
        let tile_dir_offset = validation::read_u64_field(reader)?;
        let ntiles = validation::read_u32_field(reader)?;
        reserved[1] = validation::read_u32_expect(reader, "reserved1", 0)?;
        // reserved2 and reserved4 vary between files, semantics unknown
        reserved[2] = validation::read_u32_field(reader)?;
        reserved[3] = validation::read_u32_expect(reader, "reserved3", 0)?;
        reserved[4] = validation::read_u32_field(reader)?;
        reserved[5] = validation::read_u32_expect(reader, "reserved5", 0)?;

        info!("SIS header: {} tiles, directory at offset {}", ntiles, tile_dir_offset);
        debug!("SIS reserved fields: {:?}", reserved);

        Ok(SisHeader {
            nbytes,
            version,
            dim,
            ets_offset,
            ets_nbytes,
            tile_dir_offset,
            ntiles,
            reserved,
        })
    }

    /// Dumps every header field to stdout in the reference tool's layout
    pub fn dump(&self) {
        println!("magic : SIS");
        println!("nbytes: {}", self.nbytes);
        println!("versi : {}", self.version);
        println!("dim   : {}", self.dim);
        println!("etsoff: {}", self.ets_offset);
        println!("etsnby: {}", self.ets_nbytes);
        println!("dummy0: {}", self.reserved[0]);
        println!("offtil: {}", self.tile_dir_offset);
        println!("ntiles: {}", self.ntiles);
        println!("dummy1: {}", self.reserved[1]);
        println!("dummy2: {}", self.reserved[2]);
        println!("dummy3: {}", self.reserved[3]);
        println!("dummy4: {}", self.reserved[4]);
        println!("dummy5: {}", self.reserved[5]);
    }
}

/// Nested ETS sub-header of a SIS container
#[derive(Debug, Clone)]
pub struct EtsHeader {
    /// Sub-header version, 0x30001 or 0x30003
    pub version: u32,
    /// Three undocumented fields with small known-good sets
    pub field1: u32,
    pub field2: u32,
    pub field3: u32,
    /// Compression codec identifier (0 raw, 2 JPEG, 3 JPEG 2000)
    pub compression: u32,
    /// Quality parameter, 90 or 100
    pub quality: u32,
    /// Tile pixel width
    pub dimx: u32,
    /// Tile pixel height
    pub dimy: u32,
    /// Plane count, must be 1
    pub dimz: u32,
}

impl EtsHeader {
    /// Reads and validates the ETS sub-header at the given offset
    pub fn read(reader: &mut dyn SeekableReader, offset: u64) -> SlideResult<Self> {
        reader.seek(SeekFrom::Start(offset))?;
        validation::read_magic(reader, &ets::MAGIC, "ETS")?;

        let version = validation::read_u32_one_of(reader, "ets version", &ets::KNOWN_VERSIONS)?;
        let field1 = validation::read_u32_one_of(reader, "ets field1", &ets::KNOWN_FIELD1)?;
        let field2 = validation::read_u32_one_of(reader, "ets field2", &ets::KNOWN_FIELD2)?;
        let field3 = validation::read_u32_one_of(reader, "ets field3", &ets::KNOWN_FIELD3)?;
        let compression = validation::read_u32_one_of(
            reader,
            "compression",
            &[compression::RAW, compression::JPEG, compression::JPEG2000],
        )?;
        let quality = validation::read_u32_one_of(reader, "quality", &ets::KNOWN_QUALITIES)?;
        // Tile dimensions carry no fixed constraint, 512x512 is just common
        let dimx = validation::read_u32_field(reader)?;
        let dimy = validation::read_u32_field(reader)?;
        let dimz = validation::read_u32_expect(reader, "dimz", ets::REQUIRED_DIMZ)?;

        info!("ETS sub-header: {}x{}x{} tiles, compression {}, quality {}",
              dimx, dimy, dimz, compression, quality);

        Ok(EtsHeader {
            version,
            field1,
            field2,
            field3,
            compression,
            quality,
            dimx,
            dimy,
            dimz,
        })
    }

    /// File extension derived from the compression codec
    pub fn extension(&self) -> SlideResult<&'static str> {
        match self.compression {
            compression::RAW => Ok("raw"),
            compression::JPEG => Ok("jpg"),
            compression::JPEG2000 => Ok("jp2"),
            other => Err(SlideError::UnknownCompression(other)),
        }
    }

    /// Dumps every sub-header field to stdout in the reference tool's layout
    pub fn dump(&self) {
        println!("magic : ETS");
        println!("versio: {}", self.version);
        println!("dummy1: {}", self.field1);
        println!("dummy2: {}", self.field2);
        println!("dummy3: {}", self.field3);
        println!("compre: {}", self.extension().unwrap_or("?"));
        println!("qualit: {}", self.quality);
        println!("dimx  : {}", self.dimx);
        println!("dimy  : {}", self.dimy);
        println!("dimz  : {}", self.dimz);
    }
}
