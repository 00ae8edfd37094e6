//! Command pattern interfaces
//!
//! Core interfaces for the CLI, keeping argument handling separate from
//! the container parsing and extraction logic.

use crate::format::errors::SlideResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    fn execute(&self) -> SlideResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        logger: &'a Logger,
    ) -> SlideResult<Box<dyn Command + 'a>>;
}
