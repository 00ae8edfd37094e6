//! Slide container format parsing module
//!
//! Structures and codecs for the two reverse-engineered container
//! formats: SIS/ETS two-tier pyramid containers and WTP single-level
//! tile packs.

pub mod errors;
pub(crate) mod constants;
pub(crate) mod validation;
pub mod detect;
pub mod container;
pub mod sis;
pub mod wtp;
pub mod tile;
pub mod directory;
mod tests;

pub use container::Container;
pub use detect::ContainerFormat;
pub use directory::{EtsDirectory, WtpDirectory};
pub use errors::{SlideError, SlideResult};
pub use sis::{EtsHeader, SisHeader};
pub use tile::{TileRecord, WtpTileRecord};
pub use wtp::WtpHeader;
