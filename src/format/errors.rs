//! Custom error types for container processing
//!
//! The reference tools this crate reimplements abort the whole process on
//! the first unexpected value. Here every failure is a typed error that
//! carries the byte offset and field name involved, so a bad file can be
//! diagnosed without a trap.

use std::fmt;
use std::io;

/// Slide-container specific error types
#[derive(Debug)]
pub enum SlideError {
    /// I/O error
    IoError(io::Error),
    /// First four bytes match neither known container magic
    UnknownFormat([u8; 4]),
    /// A magic tag did not match its expected value
    BadMagic {
        /// Expected tag (3-character ASCII prefix)
        expected: &'static str,
        /// Bytes actually found
        found: [u8; 4],
        /// Byte offset of the tag in the stream
        offset: u64,
    },
    /// A validated header field fell outside its known-good set
    MalformedHeader {
        /// Name of the offending field
        field: &'static str,
        /// Byte offset of the field in the stream
        offset: u64,
        /// Value that was read
        value: u64,
    },
    /// A tile record's sentinel/companion fields are inconsistent
    MalformedRecord {
        /// Index of the record in the directory
        index: usize,
        /// Name of the offending field
        field: &'static str,
        /// Value that was read
        value: u64,
    },
    /// Stream ended inside a declared fixed-size read
    TruncatedFile {
        /// Byte offset where the read started
        offset: u64,
    },
    /// Compression identifier outside the known codec set
    UnknownCompression(u32),
    /// One or more tile payloads could not be written out
    TileWriteFailures(u64),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideError::IoError(e) => write!(f, "I/O error: {}", e),
            SlideError::UnknownFormat(magic) => {
                write!(f, "Unknown container format, magic bytes: {:02x?}", magic)
            }
            SlideError::BadMagic { expected, found, offset } => {
                write!(f, "Bad magic at offset {}: expected \"{}\", found {:02x?}",
                       offset, expected, found)
            }
            SlideError::MalformedHeader { field, offset, value } => {
                write!(f, "Malformed header: field '{}' at offset {} has unexpected value {}",
                       field, offset, value)
            }
            SlideError::MalformedRecord { index, field, value } => {
                write!(f, "Malformed tile record {}: field '{}' has unexpected value {}",
                       index, field, value)
            }
            SlideError::TruncatedFile { offset } => {
                write!(f, "Truncated file: stream ended inside a read starting at offset {}", offset)
            }
            SlideError::UnknownCompression(c) => {
                write!(f, "Unknown compression identifier: {}", c)
            }
            SlideError::TileWriteFailures(n) => {
                write!(f, "Extraction finished but {} tile(s) could not be written", n)
            }
            SlideError::GenericError(msg) => write!(f, "Slide container error: {}", msg),
        }
    }
}

impl std::error::Error for SlideError {}

impl From<io::Error> for SlideError {
    fn from(error: io::Error) -> Self {
        SlideError::IoError(error)
    }
}

impl From<String> for SlideError {
    fn from(msg: String) -> Self {
        SlideError::GenericError(msg)
    }
}

impl SlideError {
    /// Converts a failed fixed-size read into the right error kind
    ///
    /// A short read against a declared struct layout means the file is
    /// truncated; anything else is a plain I/O failure.
    pub(crate) fn from_read(error: io::Error, offset: u64) -> Self {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            SlideError::TruncatedFile { offset }
        } else {
            SlideError::IoError(error)
        }
    }

    /// Process exit code for this error kind
    ///
    /// 1 usage/open failure, 2 malformed header or unknown format,
    /// 3 malformed record, 4 truncated file, 5 unknown compression,
    /// 6 run finished with failed tile writes.
    pub fn exit_code(&self) -> i32 {
        match self {
            SlideError::IoError(_) | SlideError::GenericError(_) => 1,
            SlideError::UnknownFormat(_)
            | SlideError::BadMagic { .. }
            | SlideError::MalformedHeader { .. } => 2,
            SlideError::MalformedRecord { .. } => 3,
            SlideError::TruncatedFile { .. } => 4,
            SlideError::UnknownCompression(_) => 5,
            SlideError::TileWriteFailures(_) => 6,
        }
    }
}

/// Result type for container operations
pub type SlideResult<T> = Result<T, SlideError>;
