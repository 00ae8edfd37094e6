//! Library facade
//!
//! A small programmatic entry point for consumers that want the parsing
//! and extraction pipeline without going through the CLI.

use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::extractor::grid::{EtsGrid, WtpGrid};
use crate::extractor::{ExtractionSummary, TileExtractor};
use crate::format::container::Container;
use crate::format::errors::SlideResult;
use crate::utils::logger::Logger;

/// Main interface to the slidekit library
pub struct SlideKit {
    logger: Logger,
}

impl SlideKit {
    /// Create a new SlideKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "slidekit.log"
    pub fn new(log_file: Option<&str>) -> SlideResult<Self> {
        let log_path = log_file.unwrap_or("slidekit.log");
        let logger = Logger::new(log_path)?;
        Ok(SlideKit { logger })
    }

    /// Analyze a container file and return a structure summary
    pub fn analyze(&self, input_path: &str) -> SlideResult<String> {
        self.logger.log(&format!("Analyzing {}", input_path))?;

        let file = File::open(input_path)?;
        let mut reader = BufReader::new(file);
        let container = Container::read(&mut reader)?;

        let mut result = format!("Container format: {}\n", container.format().name());
        result.push_str(&format!("Tile records: {}\n", container.tile_count()));

        match &container {
            Container::SisEts { ets, directory, .. } => {
                let grid = EtsGrid::from_directory(ets, directory);
                result.push_str(&format!("Tile size: {}x{}\n", grid.tile_width, grid.tile_height));
                result.push_str(&format!("Image size: {}x{}\n", grid.image_width, grid.image_height));
                result.push_str(&format!("Grid: {}x{} ({} cells)\n",
                                         grid.tiles_across, grid.tiles_down, grid.tiles_per_image()));
                result.push_str(&format!("Compression: {}\n", ets.extension()?));
            }
            Container::Wtp { header, .. } => {
                let grid = WtpGrid::new(header);
                result.push_str(&format!("Grid: {}x{} ({} cells)\n",
                                         grid.tiles_across, grid.tiles_down, grid.tiles_per_image()));
                result.push_str(&format!("Compression: {}\n", header.compression_name()));
            }
        }

        Ok(result)
    }

    /// Extract every present level-0 tile into `output_dir`
    ///
    /// Output files are named `{prefix}{index:04}.{ext}` with the
    /// extension derived from the container's compression codec.
    pub fn extract(
        &self,
        input_path: &str,
        output_dir: &str,
        prefix: &str,
    ) -> SlideResult<ExtractionSummary> {
        self.logger.log(&format!("Extracting {} into {}", input_path, output_dir))?;
        info!("Extracting {} into {}", input_path, output_dir);

        let file = File::open(input_path)?;
        let mut reader = BufReader::new(file);
        let container = Container::read(&mut reader)?;

        let out = Path::new(output_dir);
        if !out.exists() {
            std::fs::create_dir_all(out)?;
        }

        let mut extractor = TileExtractor::new(out, prefix);
        match &container {
            Container::SisEts { ets, directory, .. } => {
                extractor.extract_ets(&mut reader, ets, directory)
            }
            Container::Wtp { header, directory } => {
                extractor.extract_wtp(&mut reader, header, directory)
            }
        }
    }
}
