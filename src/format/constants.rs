//! Container format constants
//!
//! Both formats were reverse-engineered empirically; the known-good value
//! sets below are exactly the ones observed in real files. Fields whose
//! semantics were never established are read and retained as opaque values
//! and have no constants here on purpose.

/// SIS container header constants (two-tier format, outer header)
pub mod sis {
    /// Magic tag: 3-character ASCII prefix in a 4-byte field
    pub const MAGIC: [u8; 4] = *b"SIS\0";

    /// Declared struct byte-size, acts as a version fence
    pub const HEADER_NBYTES: u32 = 64;

    /// Only known header version
    pub const VERSION: u32 = 2;

    /// Observed dimensionality values
    pub const KNOWN_DIMS: [u32; 2] = [4, 6];

    /// The ETS sub-header always follows the SIS header directly
    pub const ETS_OFFSET: u64 = 64;

    /// Declared ETS struct byte-size
    pub const ETS_NBYTES: u32 = 228;
}

/// ETS sub-header constants (two-tier format, nested header)
pub mod ets {
    /// Magic tag
    pub const MAGIC: [u8; 4] = *b"ETS\0";

    /// Observed sub-header versions
    pub const KNOWN_VERSIONS: [u32; 2] = [0x30001, 0x30003];

    /// Observed values of the three undocumented fields after the version
    pub const KNOWN_FIELD1: [u32; 2] = [2, 4];
    pub const KNOWN_FIELD2: [u32; 2] = [1, 3];
    pub const KNOWN_FIELD3: [u32; 2] = [1, 4];

    /// Observed quality values
    pub const KNOWN_QUALITIES: [u32; 2] = [90, 100];

    /// Only single-plane tiles are supported
    pub const REQUIRED_DIMZ: u32 = 1;
}

/// WTP container header constants (single-tier format)
pub mod wtp {
    /// Magic tag
    pub const MAGIC: [u8; 4] = *b"WTP\0";

    /// Declared struct byte-size
    pub const HEADER_NBYTES: u32 = 272;

    /// Observed fixed values of undocumented fields, by header position
    pub const FIELD2: u32 = 2;
    pub const FIELD3: u32 = 3;
    pub const FIELD4: u32 = 4;
    pub const FIELD7: u32 = 9;
    pub const FIELD12: u32 = 0;
    pub const FIELD16: u32 = 0;

    /// The tile directory sits at a fixed offset in this format
    pub const DIRECTORY_OFFSET: u64 = 0x200;
}

/// Compression codec identifiers shared by both formats
pub mod compression {
    /// Uncompressed tile payload
    pub const RAW: u32 = 0;
    /// JPEG payload
    pub const JPEG: u32 = 2;
    /// JPEG 2000 payload
    pub const JPEG2000: u32 = 3;
}

/// Tile record constants
pub mod tile {
    /// Reserved offset value marking an absent tile in the single-tier format
    pub const EMPTY_OFFSET: u64 = u64::MAX;
}
