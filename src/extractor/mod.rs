//! Level-0 tile extraction
//!
//! Walks the derived grid in raster order, resolves each cell through the
//! grid resolver, and streams every present payload out to its own file.
//! Absent cells are legitimate: they get a diagnostic line and no file.

pub mod grid;
mod tile_writer;

pub use grid::{EtsGrid, WtpGrid};
pub use tile_writer::TileWriter;

use log::{error, info};
use std::path::Path;

use crate::format::directory::{EtsDirectory, WtpDirectory};
use crate::format::errors::SlideResult;
use crate::format::sis::EtsHeader;
use crate::format::wtp::WtpHeader;
use crate::io::seekable::SeekableReader;
use crate::utils::progress::ProgressTracker;

/// Outcome counts of an extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Tiles written to disk
    pub written: u64,
    /// Grid cells with no tile
    pub empty: u64,
    /// Tiles whose output file could not be created or written
    pub failed: u64,
}

/// Extracts tile payloads from a container stream
///
/// Holds no state beyond the reusable output writer; each run is a
/// single forward pass over the grid with no retries.
pub struct TileExtractor {
    writer: TileWriter,
}

impl TileExtractor {
    /// Creates an extractor writing into `output_dir` with `prefix` names
    pub fn new(output_dir: &Path, prefix: &str) -> Self {
        TileExtractor {
            writer: TileWriter::new(output_dir, prefix),
        }
    }

    /// Extracts all level-0 tiles of a two-tier container
    pub fn extract_ets(
        &mut self,
        reader: &mut dyn SeekableReader,
        header: &EtsHeader,
        directory: &EtsDirectory,
    ) -> SlideResult<ExtractionSummary> {
        let grid = EtsGrid::from_directory(header, directory);
        let extension = header.extension()?;
        let total = grid.tiles_per_image();

        println!("TilesAcross:   {}", grid.tiles_across);
        println!("TilesDown:     {}", grid.tiles_down);
        println!("TilesPerImage: {}", total);

        info!("Extracting {} grid cells ({} directory records)", total, directory.len());
        let progress = ProgressTracker::new(total, "Extracting tiles");
        let mut summary = ExtractionSummary::default();

        for index in 0..total {
            let x = (index % grid.tiles_across) as u32;
            let y = (index / grid.tiles_across) as u32;

            match grid.resolve(directory, x, y) {
                Some(record) => {
                    record.dump();
                    self.copy_cell(reader, record.offset, record.numbytes, index,
                                   extension, &mut summary)?;
                }
                None => {
                    println!("Empty tile {}!", index);
                    summary.empty += 1;
                }
            }
            progress.increment(1);
        }

        progress.finish();
        info!("Extraction done: {} written, {} empty, {} failed",
              summary.written, summary.empty, summary.failed);
        Ok(summary)
    }

    /// Extracts all tiles of a single-tier pack
    pub fn extract_wtp(
        &mut self,
        reader: &mut dyn SeekableReader,
        header: &WtpHeader,
        directory: &WtpDirectory,
    ) -> SlideResult<ExtractionSummary> {
        let grid = WtpGrid::new(header);
        let extension = header.extension()?;
        let total = grid.tiles_per_image();

        println!("TilesAcross:   {}", grid.tiles_across);
        println!("TilesDown:     {}", grid.tiles_down);
        println!("TilesPerImage: {}", total);

        info!("Extracting {} tiles", total);
        let progress = ProgressTracker::new(total, "Extracting tiles");
        let mut summary = ExtractionSummary::default();

        for index in 0..total {
            match grid.resolve(directory, index as usize)? {
                Some(record) => {
                    self.copy_cell(reader, record.offset, record.numbytes, index,
                                   extension, &mut summary)?;
                }
                None => {
                    println!("Empty tile {}!", index);
                    summary.empty += 1;
                }
            }
            progress.increment(1);
        }

        progress.finish();
        info!("Extraction done: {} written, {} empty, {} failed",
              summary.written, summary.empty, summary.failed);
        Ok(summary)
    }

    /// Copies one payload out, recording rather than aborting on a
    /// failed output write
    ///
    /// A truncated payload read is still fatal: the source stream is
    /// lying about its own layout at that point.
    fn copy_cell(
        &mut self,
        reader: &mut dyn SeekableReader,
        offset: u64,
        numbytes: u32,
        index: u64,
        extension: &str,
        summary: &mut ExtractionSummary,
    ) -> SlideResult<()> {
        self.writer.read_payload(reader, offset, numbytes)?;
        match self.writer.write_payload(index, extension) {
            Ok(path) => {
                println!("tile: {}", path.display());
                summary.written += 1;
            }
            Err(e) => {
                error!("Failed to write tile {}: {}", index, e);
                summary.failed += 1;
            }
        }
        Ok(())
    }
}
