//! Container structure analysis command
//!
//! Dumps every known header field, the derived grid extent, and (in
//! verbose mode) each tile record, without writing any tiles.

use clap::ArgMatches;
use log::info;
use std::fs::File;
use std::io::BufReader;

use crate::commands::command_traits::Command;
use crate::extractor::grid::{EtsGrid, WtpGrid};
use crate::format::container::Container;
use crate::format::errors::{SlideError, SlideResult};
use crate::utils::logger::Logger;

/// Command for analyzing container file structure
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to dump every tile record as well
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SlideResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| SlideError::GenericError("Missing input file".to_string()))?
            .clone();
        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand { input_file, verbose, logger })
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> SlideResult<()> {
        info!("Analyzing container structure: {}", self.input_file);
        self.logger.log(&format!("Analyzing {}", self.input_file))?;

        let file = File::open(&self.input_file)?;
        let mut reader = BufReader::new(file);
        let container = Container::read(&mut reader)?;

        container.dump_headers();

        match &container {
            Container::SisEts { ets, directory, .. } => {
                let grid = EtsGrid::from_directory(ets, directory);
                println!("TilesAcross:   {}", grid.tiles_across);
                println!("TilesDown:     {}", grid.tiles_down);
                println!("TilesPerImage: {}", grid.tiles_per_image());

                if self.verbose {
                    for record in directory.iter() {
                        record.dump();
                    }
                }
            }
            Container::Wtp { header, directory } => {
                let grid = WtpGrid::new(header);
                println!("TilesAcross:   {}", grid.tiles_across);
                println!("TilesDown:     {}", grid.tiles_down);
                println!("TilesPerImage: {}", grid.tiles_per_image());

                if self.verbose {
                    for record in directory.iter() {
                        record.dump();
                    }
                }
            }
        }

        info!("Analysis complete: {} format, {} tile records",
              container.format().name(), container.tile_count());
        Ok(())
    }
}
