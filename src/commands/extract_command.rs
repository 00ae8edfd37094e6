//! Tile extraction command
//!
//! Parses the container, dumps its headers (the reference tools always
//! did both), then writes every present level-0 tile payload to its own
//! file in the output directory.

use clap::ArgMatches;
use log::{error, info};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::extractor::TileExtractor;
use crate::format::container::Container;
use crate::format::errors::{SlideError, SlideResult};
use crate::utils::logger::Logger;

/// Command for extracting tile payloads from a container
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Directory to write tile files into
    output_dir: String,
    /// Filename prefix for tile files
    prefix: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SlideResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| SlideError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_dir = args
            .get_one::<String>("output-dir")
            .cloned()
            .unwrap_or_else(|| ".".to_string());

        let prefix = args
            .get_one::<String>("prefix")
            .cloned()
            .unwrap_or_else(|| "tile".to_string());

        Ok(ExtractCommand { input_file, output_dir, prefix, logger })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> SlideResult<()> {
        info!("Extracting tiles from {} into {}", self.input_file, self.output_dir);
        self.logger.log(&format!("Extracting {}", self.input_file))?;

        let file = File::open(&self.input_file)?;
        let mut reader = BufReader::new(file);
        let container = Container::read(&mut reader)?;

        container.dump_headers();

        let output_dir = Path::new(&self.output_dir);
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let mut extractor = TileExtractor::new(output_dir, &self.prefix);
        let summary = match &container {
            Container::SisEts { ets, directory, .. } => {
                extractor.extract_ets(&mut reader, ets, directory)?
            }
            Container::Wtp { header, directory } => {
                extractor.extract_wtp(&mut reader, header, directory)?
            }
        };

        self.logger.log(&format!(
            "Extraction summary: {} written, {} empty, {} failed",
            summary.written, summary.empty, summary.failed
        ))?;

        if summary.failed > 0 {
            error!("{} tile(s) could not be written", summary.failed);
            return Err(SlideError::TileWriteFailures(summary.failed));
        }

        info!("Extraction successful: {} tiles written", summary.written);
        Ok(())
    }
}
