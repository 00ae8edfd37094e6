//! Seekable reader trait
//!
//! Both container formats are read through a single exclusively owned
//! stream that is repositioned with seek-then-read. This trait unifies
//! the readers (files, in-memory cursors in tests) that support that.

use std::io::{Read, Seek};

/// Trait for readers that can both read and seek
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
