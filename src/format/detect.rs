//! Container format detection
//!
//! The two formats are close cousins but carry different magic tags in
//! their first four bytes. Detection peeks at the magic and rewinds so
//! the per-format header codec starts from a clean offset 0.

use log::debug;
use std::io::SeekFrom;

use crate::format::constants::{sis, wtp};
use crate::format::errors::{SlideError, SlideResult};
use crate::io::seekable::SeekableReader;

/// The two supported slide container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// Two-tier SIS container with a nested ETS sub-header
    SisEts,
    /// Single-level WTP tile pack
    Wtp,
}

impl ContainerFormat {
    /// Detects the container format from the magic tag at offset 0
    pub fn detect(reader: &mut dyn SeekableReader) -> SlideResult<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let mut magic = [0u8; 4];
        reader
            .read_exact(&mut magic)
            .map_err(|e| SlideError::from_read(e, 0))?;
        reader.seek(SeekFrom::Start(0))?;

        let format = match magic {
            m if m == sis::MAGIC => ContainerFormat::SisEts,
            m if m == wtp::MAGIC => ContainerFormat::Wtp,
            other => return Err(SlideError::UnknownFormat(other)),
        };

        debug!("Detected container format: {}", format.name());
        Ok(format)
    }

    /// Human-readable format name
    pub fn name(&self) -> &'static str {
        match self {
            ContainerFormat::SisEts => "SIS/ETS",
            ContainerFormat::Wtp => "WTP",
        }
    }
}
