//! CLI command implementations
//!
//! Commands supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use extract_command::ExtractCommand;

use clap::ArgMatches;
use crate::format::errors::SlideResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct SlidekitCommandFactory;

impl SlidekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SlidekitCommandFactory
    }
}

impl Default for SlidekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for SlidekitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> SlideResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else {
            // Default to structure analysis
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}
