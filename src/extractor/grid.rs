//! Grid resolution for tile directories
//!
//! Tile records are stored sparsely and in arbitrary order on disk. The
//! resolvers here reconstruct a dense raster addressable by (column, row)
//! from that order: the two-tier format by scanning level-0 coordinates,
//! the single-tier format by trusting the directory's own sequence and
//! its in-band absent-tile sentinel.

use log::debug;

use crate::format::directory::{EtsDirectory, WtpDirectory};
use crate::format::errors::SlideResult;
use crate::format::sis::EtsHeader;
use crate::format::tile::{TileRecord, WtpTileRecord};
use crate::format::wtp::WtpHeader;

/// Derived tile grid of a two-tier container
#[derive(Debug, Clone, Copy)]
pub struct EtsGrid {
    /// Tile pixel width
    pub tile_width: u32,
    /// Tile pixel height
    pub tile_height: u32,
    /// Full image width in pixels, inferred from the level-0 extent
    pub image_width: u64,
    /// Full image height in pixels
    pub image_height: u64,
    /// Grid columns
    pub tiles_across: u64,
    /// Grid rows
    pub tiles_down: u64,
}

impl EtsGrid {
    /// Infers the grid extent from the directory's level-0 records
    ///
    /// The extent is the maximum observed coordinate + 1 in each axis,
    /// both starting at 0, so a directory without level-0 entries yields
    /// a degenerate 1x1 grid.
    pub fn from_directory(header: &EtsHeader, directory: &EtsDirectory) -> Self {
        let mut tilexmax = 0u32;
        let mut tileymax = 0u32;
        for record in directory.iter() {
            if record.level == 0 {
                tilexmax = tilexmax.max(record.coord[0]);
                tileymax = tileymax.max(record.coord[1]);
            }
        }

        let tile_width = header.dimx;
        let tile_height = header.dimy;
        let image_width = tile_width as u64 * (tilexmax as u64 + 1);
        let image_height = tile_height as u64 * (tileymax as u64 + 1);
        // A zero tile dimension makes the raster unaddressable; treat it
        // as an empty grid rather than dividing by it
        let tiles_across = if tile_width == 0 {
            0
        } else {
            (image_width + tile_width as u64 - 1) / tile_width as u64
        };
        let tiles_down = if tile_height == 0 {
            0
        } else {
            (image_height + tile_height as u64 - 1) / tile_height as u64
        };

        debug!("Grid extent: {}x{} tiles for a {}x{} pixel image",
               tiles_across, tiles_down, image_width, image_height);

        EtsGrid {
            tile_width,
            tile_height,
            image_width,
            image_height,
            tiles_across,
            tiles_down,
        }
    }

    /// Number of cells in the dense raster
    pub fn tiles_per_image(&self) -> u64 {
        self.tiles_across * self.tiles_down
    }

    /// Resolves the level-0 record at grid position (x, y)
    ///
    /// Full forward scan of the directory without early exit; when
    /// duplicate coordinates exist the last record in directory order
    /// wins, matching the reference tool. An unpopulated cell resolves
    /// to `None` and is a legitimate empty result, never an error.
    pub fn resolve<'a>(
        &self,
        directory: &'a EtsDirectory,
        x: u32,
        y: u32,
    ) -> Option<&'a TileRecord> {
        let mut found = None;
        for record in directory.iter() {
            if record.level == 0 && record.coord[0] == x && record.coord[1] == y {
                found = Some(record);
            }
        }
        found
    }
}

/// Derived tile grid of a single-tier pack
///
/// Grid order is the directory's own sequential order, row-major with
/// the header's tiledim field as the row width.
#[derive(Debug, Clone, Copy)]
pub struct WtpGrid {
    /// Grid columns, from the header's tiledim field
    pub tiles_across: u32,
    /// Grid rows
    pub tiles_down: u32,
    /// Number of directory cells
    pub cells: u32,
}

impl WtpGrid {
    /// Derives the grid from the header's declared counts
    pub fn new(header: &WtpHeader) -> Self {
        let tiles_down = if header.tiledim == 0 {
            0
        } else {
            (header.ntiles + header.tiledim - 1) / header.tiledim
        };

        WtpGrid {
            tiles_across: header.tiledim,
            tiles_down,
            cells: header.ntiles,
        }
    }

    /// Number of cells in the raster, one per directory record
    pub fn tiles_per_image(&self) -> u64 {
        self.cells as u64
    }

    /// Resolves the record at the sequential cell `index`
    ///
    /// A consistent sentinel record resolves to `None` (explicit empty
    /// tile); a sentinel offset with nonzero length or companion is a
    /// malformed record. Out-of-range indices also resolve to `None`.
    pub fn resolve<'a>(
        &self,
        directory: &'a WtpDirectory,
        index: usize,
    ) -> SlideResult<Option<&'a WtpTileRecord>> {
        let Some(record) = directory.get(index) else {
            return Ok(None);
        };
        if record.check_empty(index)? {
            return Ok(None);
        }
        Ok(Some(record))
    }
}
