//! Whole-container loader
//!
//! Ties the per-format codecs together: detect the format from the
//! magic, read the header(s), then build the tile directory exactly
//! once. The stream is left reusable for payload extraction afterwards.

use crate::format::constants::wtp;
use crate::format::detect::ContainerFormat;
use crate::format::directory::{EtsDirectory, WtpDirectory};
use crate::format::errors::SlideResult;
use crate::format::sis::{EtsHeader, SisHeader};
use crate::format::wtp::WtpHeader;
use crate::io::seekable::SeekableReader;

/// A fully parsed container: headers plus tile directory
#[derive(Debug, Clone)]
pub enum Container {
    /// Two-tier SIS container with nested ETS sub-header
    SisEts {
        header: SisHeader,
        ets: EtsHeader,
        directory: EtsDirectory,
    },
    /// Single-level WTP tile pack
    Wtp {
        header: WtpHeader,
        directory: WtpDirectory,
    },
}

impl Container {
    /// Detects the format and parses headers and directory
    pub fn read(reader: &mut dyn SeekableReader) -> SlideResult<Self> {
        match ContainerFormat::detect(reader)? {
            ContainerFormat::SisEts => {
                let header = SisHeader::read(reader)?;
                let ets = EtsHeader::read(reader, header.ets_offset)?;
                let directory =
                    EtsDirectory::read(reader, header.tile_dir_offset, header.ntiles)?;
                Ok(Container::SisEts { header, ets, directory })
            }
            ContainerFormat::Wtp => {
                let header = WtpHeader::read(reader)?;
                let directory =
                    WtpDirectory::read(reader, wtp::DIRECTORY_OFFSET, header.ntiles)?;
                Ok(Container::Wtp { header, directory })
            }
        }
    }

    /// Which of the two formats this container is
    pub fn format(&self) -> ContainerFormat {
        match self {
            Container::SisEts { .. } => ContainerFormat::SisEts,
            Container::Wtp { .. } => ContainerFormat::Wtp,
        }
    }

    /// Number of records in the tile directory
    pub fn tile_count(&self) -> usize {
        match self {
            Container::SisEts { directory, .. } => directory.len(),
            Container::Wtp { directory, .. } => directory.len(),
        }
    }

    /// Dumps all header fields to stdout
    pub fn dump_headers(&self) {
        match self {
            Container::SisEts { header, ets, .. } => {
                header.dump();
                ets.dump();
            }
            Container::Wtp { header, .. } => header.dump(),
        }
    }
}
