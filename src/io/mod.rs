//! I/O utilities for container stream handling

pub mod seekable;

pub use seekable::SeekableReader;
