//! WTP header codec (single-tier format)
//!
//! A WTP pack is the simpler cousin of the SIS container: one fixed
//! 80-byte run of u32-sized fields, a tile directory at a fixed offset,
//! and no pyramid levels. Most fields remain undocumented; values that
//! were observed constant in real files are validated, the rest are
//! retained untouched.

use log::info;
use std::io::SeekFrom;

use crate::format::constants::{compression, wtp};
use crate::format::errors::{SlideError, SlideResult};
use crate::format::validation;
use crate::io::seekable::SeekableReader;

/// Header of a WTP tile pack
#[derive(Debug, Clone)]
pub struct WtpHeader {
    /// Declared struct byte-size, always 272
    pub nbytes: u32,
    /// Number of tile records in the directory
    pub ntiles: u32,
    /// Tiles-across policy field for the row-major grid
    pub tiledim: u32,
    /// Offset of the first tile payload; unreliable in practice
    pub first_offset: u32,
    /// Compression codec identifier (2 JPEG, 3 JPEG 2000)
    pub compression: u32,
    /// Quality parameter; no known-good set was ever established
    pub quality: u32,
    /// Retained opaque fields in header order
    pub reserved: [u32; 11],
}

impl WtpHeader {
    /// Reads and validates the WTP header at offset 0
    pub fn read(reader: &mut dyn SeekableReader) -> SlideResult<Self> {
        reader.seek(SeekFrom::Start(0))?;
        validation::read_magic(reader, &wtp::MAGIC, "WTP")?;

        let nbytes = validation::read_u32_expect(reader, "nbytes", wtp::HEADER_NBYTES)?;

        let mut reserved = [0u32; 11];
        // Observed as 0x10000 or 2, no stable set
        reserved[0] = validation::read_u32_field(reader)?;
        reserved[1] = validation::read_u32_expect(reader, "field2", wtp::FIELD2)?;
        reserved[2] = validation::read_u32_expect(reader, "field3", wtp::FIELD3)?;
        reserved[3] = validation::read_u32_expect(reader, "field4", wtp::FIELD4)?;
        reserved[4] = validation::read_u32_field(reader)?;
        reserved[5] = validation::read_u32_field(reader)?;
        reserved[6] = validation::read_u32_expect(reader, "field7", wtp::FIELD7)?;
        reserved[7] = validation::read_u32_field(reader)?;
        let ntiles = validation::read_u32_field(reader)?;
        reserved[8] = validation::read_u32_field(reader)?;
        let tiledim = validation::read_u32_field(reader)?;
        validation::read_u32_expect(reader, "field12", wtp::FIELD12)?;
        reserved[9] = validation::read_u32_field(reader)?;
        reserved[10] = validation::read_u32_field(reader)?;
        let first_offset = validation::read_u32_field(reader)?;
        validation::read_u32_expect(reader, "field16", wtp::FIELD16)?;
        let compression = validation::read_u32_one_of(
            reader,
            "compression",
            &[compression::JPEG, compression::JPEG2000],
        )?;
        let quality = validation::read_u32_field(reader)?;

        info!("WTP header: {} tiles, {} across, compression {}",
              ntiles, tiledim, compression);

        Ok(WtpHeader {
            nbytes,
            ntiles,
            tiledim,
            first_offset,
            compression,
            quality,
            reserved,
        })
    }

    /// File extension derived from the compression codec
    pub fn extension(&self) -> SlideResult<&'static str> {
        match self.compression {
            compression::JPEG => Ok("jpg"),
            compression::JPEG2000 => Ok("jp2"),
            other => Err(SlideError::UnknownCompression(other)),
        }
    }

    /// Human-readable compression name
    pub fn compression_name(&self) -> &'static str {
        match self.compression {
            compression::JPEG => "JPEG",
            compression::JPEG2000 => "JPEG 2000",
            _ => "unknown",
        }
    }

    /// Renders every header field in the reference tool's layout, one
    /// line per field in disk order; validated-constant fields included
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str("magic : WTP\n");
        out.push_str(&format!("nbytes: {}\n", self.nbytes));
        out.push_str(&format!("dummy1: {}\n", self.reserved[0]));
        out.push_str(&format!("dummy2: {}\n", self.reserved[1]));
        out.push_str(&format!("dummy3: {}\n", self.reserved[2]));
        out.push_str(&format!("dummy4: {}\n", self.reserved[3]));
        out.push_str(&format!("dummy5: {}\n", self.reserved[4]));
        out.push_str(&format!("dummy6: {}\n", self.reserved[5]));
        out.push_str(&format!("dummy7: {}\n", self.reserved[6]));
        out.push_str(&format!("dummy8: {}\n", self.reserved[7]));
        out.push_str(&format!("ntiles: {}\n", self.ntiles));
        out.push_str(&format!("dummy10: {}\n", self.reserved[8]));
        out.push_str(&format!("tiledim: {}\n", self.tiledim));
        out.push_str(&format!("dummy12: {}\n", wtp::FIELD12));
        out.push_str(&format!("dummy13: {}\n", self.reserved[9]));
        out.push_str(&format!("dummy14: {}\n", self.reserved[10]));
        out.push_str(&format!("firstof: {}\n", self.first_offset));
        out.push_str(&format!("dummy16: {}\n", wtp::FIELD16));
        out.push_str(&format!("compres: {}\n", self.compression_name()));
        out.push_str(&format!("quality: {}\n", self.quality));
        out
    }

    /// Dumps every header field to stdout
    pub fn dump(&self) {
        print!("{}", self.describe());
    }
}
