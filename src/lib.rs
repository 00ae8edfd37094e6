pub mod io;
pub mod format;
pub mod extractor;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::SlideKit;

pub use format::{Container, ContainerFormat, SlideError, SlideResult};
pub use extractor::{ExtractionSummary, TileExtractor};
