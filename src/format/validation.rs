//! Container validation utilities
//!
//! Helpers for the validate-or-fail reads that make up the header codecs.
//! Every reverse-engineered assertion in the reference tools maps onto one
//! of these checks; the difference is that a violation produces a typed
//! error naming the field and its byte offset instead of a trap.

use byteorder::{LittleEndian, ReadBytesExt};
use log::warn;
use std::io::SeekFrom;

use crate::format::errors::{SlideError, SlideResult};
use crate::io::seekable::SeekableReader;

/// Gets the stream size, restoring the cursor afterwards
pub fn get_file_size(reader: &mut dyn SeekableReader) -> SlideResult<u64> {
    let current_position = reader.seek(SeekFrom::Current(0))?;
    let file_size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(current_position))?;
    Ok(file_size)
}

/// Validates a tile directory offset against the stream size
pub fn validate_directory_offset(offset: u64, file_size: u64) -> SlideResult<()> {
    if offset >= file_size {
        warn!("Directory offset {} exceeds file size {}", offset, file_size);
        return Err(SlideError::MalformedHeader {
            field: "directory offset",
            offset: 0,
            value: offset,
        });
    }
    Ok(())
}

/// Reads a u32 field without any value validation
///
/// Used for fields that carry real data (tile counts, dimensions) and for
/// the opaque fields whose known-good set was never established upstream.
pub fn read_u32_field(reader: &mut dyn SeekableReader) -> SlideResult<u32> {
    let offset = reader.seek(SeekFrom::Current(0))?;
    reader
        .read_u32::<LittleEndian>()
        .map_err(|e| SlideError::from_read(e, offset))
}

/// Reads a u64 field without any value validation
pub fn read_u64_field(reader: &mut dyn SeekableReader) -> SlideResult<u64> {
    let offset = reader.seek(SeekFrom::Current(0))?;
    reader
        .read_u64::<LittleEndian>()
        .map_err(|e| SlideError::from_read(e, offset))
}

/// Reads a u32 field that must equal a single known value
pub fn read_u32_expect(
    reader: &mut dyn SeekableReader,
    field: &'static str,
    expected: u32,
) -> SlideResult<u32> {
    let offset = reader.seek(SeekFrom::Current(0))?;
    let value = reader
        .read_u32::<LittleEndian>()
        .map_err(|e| SlideError::from_read(e, offset))?;
    if value != expected {
        return Err(SlideError::MalformedHeader { field, offset, value: value as u64 });
    }
    Ok(value)
}

/// Reads a u32 field whose value must belong to a known-good set
pub fn read_u32_one_of(
    reader: &mut dyn SeekableReader,
    field: &'static str,
    allowed: &[u32],
) -> SlideResult<u32> {
    let offset = reader.seek(SeekFrom::Current(0))?;
    let value = reader
        .read_u32::<LittleEndian>()
        .map_err(|e| SlideError::from_read(e, offset))?;
    if !allowed.contains(&value) {
        return Err(SlideError::MalformedHeader { field, offset, value: value as u64 });
    }
    Ok(value)
}

/// Reads a u64 field that must equal a single known value
pub fn read_u64_expect(
    reader: &mut dyn SeekableReader,
    field: &'static str,
    expected: u64,
) -> SlideResult<u64> {
    let offset = reader.seek(SeekFrom::Current(0))?;
    let value = reader
        .read_u64::<LittleEndian>()
        .map_err(|e| SlideError::from_read(e, offset))?;
    if value != expected {
        return Err(SlideError::MalformedHeader { field, offset, value });
    }
    Ok(value)
}

/// Reads and checks a 4-byte magic tag
pub fn read_magic(
    reader: &mut dyn SeekableReader,
    expected: &[u8; 4],
    tag: &'static str,
) -> SlideResult<[u8; 4]> {
    let offset = reader.seek(SeekFrom::Current(0))?;
    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .map_err(|e| SlideError::from_read(e, offset))?;
    if &magic != expected {
        return Err(SlideError::BadMagic { expected: tag, found: magic, offset });
    }
    Ok(magic)
}
