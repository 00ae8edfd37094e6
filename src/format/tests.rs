#![cfg(test)]

//! Unit tests for the container codecs

use std::io::Cursor;

use crate::format::container::Container;
use crate::format::detect::ContainerFormat;
use crate::format::directory::EtsDirectory;
use crate::format::errors::SlideError;
use crate::format::sis::{EtsHeader, SisHeader};
use crate::format::tile::TileRecord;
use crate::format::wtp::WtpHeader;

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_u64(buf: &mut Vec<u8>, v: u64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Valid 64-byte SIS header
fn sis_header_bytes(ntiles: u32, dir_offset: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"SIS\0");
    push_u32(&mut buf, 64); // nbytes
    push_u32(&mut buf, 2); // version
    push_u32(&mut buf, 4); // dim
    push_u64(&mut buf, 64); // ets offset
    push_u32(&mut buf, 228); // ets nbytes
    push_u32(&mut buf, 0); // reserved0
    push_u64(&mut buf, dir_offset);
    push_u32(&mut buf, ntiles);
    push_u32(&mut buf, 0); // reserved1
    push_u32(&mut buf, 0x610138); // reserved2, varies between files
    push_u32(&mut buf, 0); // reserved3
    push_u32(&mut buf, 42); // reserved4, varies between files
    push_u32(&mut buf, 0); // reserved5
    assert_eq!(buf.len(), 64);
    buf
}

/// Valid ETS sub-header (the 40 bytes the codec reads)
fn ets_header_bytes(compression: u32, quality: u32, dimx: u32, dimy: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"ETS\0");
    push_u32(&mut buf, 0x30001); // version
    push_u32(&mut buf, 4); // field1
    push_u32(&mut buf, 1); // field2
    push_u32(&mut buf, 4); // field3
    push_u32(&mut buf, compression);
    push_u32(&mut buf, quality);
    push_u32(&mut buf, dimx);
    push_u32(&mut buf, dimy);
    push_u32(&mut buf, 1); // dimz
    buf
}

/// Valid 80-byte WTP header field run
fn wtp_header_bytes(ntiles: u32, tiledim: u32, compression: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"WTP\0");
    push_u32(&mut buf, 272); // nbytes
    push_u32(&mut buf, 0x10000); // field1, unvalidated
    push_u32(&mut buf, 2); // field2
    push_u32(&mut buf, 3); // field3
    push_u32(&mut buf, 4); // field4
    push_u32(&mut buf, 0); // field5
    push_u32(&mut buf, 0); // field6
    push_u32(&mut buf, 9); // field7
    push_u32(&mut buf, 0); // field8
    push_u32(&mut buf, ntiles);
    push_u32(&mut buf, 0); // field10
    push_u32(&mut buf, tiledim);
    push_u32(&mut buf, 0); // field12
    push_u32(&mut buf, 0); // field13
    push_u32(&mut buf, 0); // field14
    push_u32(&mut buf, 0x400); // first offset
    push_u32(&mut buf, 0); // field16
    push_u32(&mut buf, compression);
    push_u32(&mut buf, 80); // quality, unvalidated
    assert_eq!(buf.len(), 80);
    buf
}

fn tile_record_bytes(x: u32, y: u32, level: u32, offset: u64, numbytes: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    push_u32(&mut buf, 4); // lead-in, unvalidated
    push_u32(&mut buf, x);
    push_u32(&mut buf, y);
    push_u32(&mut buf, 0);
    push_u32(&mut buf, level);
    push_u64(&mut buf, offset);
    push_u32(&mut buf, numbytes);
    push_u32(&mut buf, 0x18c78d); // companion, unvalidated
    assert_eq!(buf.len(), 36);
    buf
}

#[test]
fn sis_header_parses_valid_bytes() {
    let mut cursor = Cursor::new(sis_header_bytes(7, 292));
    let header = SisHeader::read(&mut cursor).unwrap();
    assert_eq!(header.nbytes, 64);
    assert_eq!(header.version, 2);
    assert_eq!(header.dim, 4);
    assert_eq!(header.ets_offset, 64);
    assert_eq!(header.ets_nbytes, 228);
    assert_eq!(header.ntiles, 7);
    assert_eq!(header.tile_dir_offset, 292);
    assert_eq!(header.reserved[2], 0x610138);
    assert_eq!(header.reserved[4], 42);
}

#[test]
fn sis_header_rejects_wrong_magic() {
    let mut bytes = sis_header_bytes(1, 292);
    bytes[0..4].copy_from_slice(b"XIS\0");
    let mut cursor = Cursor::new(bytes);
    match SisHeader::read(&mut cursor) {
        Err(SlideError::BadMagic { expected, offset, .. }) => {
            assert_eq!(expected, "SIS");
            assert_eq!(offset, 0);
        }
        other => panic!("expected BadMagic, got {:?}", other),
    }
}

#[test]
fn sis_header_rejects_bad_version() {
    let mut bytes = sis_header_bytes(1, 292);
    bytes[8..12].copy_from_slice(&3u32.to_le_bytes());
    let mut cursor = Cursor::new(bytes);
    match SisHeader::read(&mut cursor) {
        Err(SlideError::MalformedHeader { field, offset, value }) => {
            assert_eq!(field, "version");
            assert_eq!(offset, 8);
            assert_eq!(value, 3);
        }
        other => panic!("expected MalformedHeader, got {:?}", other),
    }
}

#[test]
fn sis_header_rejects_bad_dim() {
    let mut bytes = sis_header_bytes(1, 292);
    bytes[12..16].copy_from_slice(&5u32.to_le_bytes());
    let mut cursor = Cursor::new(bytes);
    assert!(matches!(
        SisHeader::read(&mut cursor),
        Err(SlideError::MalformedHeader { field: "dim", .. })
    ));
}

#[test]
fn sis_header_rejects_bad_struct_size() {
    let mut bytes = sis_header_bytes(1, 292);
    bytes[4..8].copy_from_slice(&65u32.to_le_bytes());
    let mut cursor = Cursor::new(bytes);
    assert!(matches!(
        SisHeader::read(&mut cursor),
        Err(SlideError::MalformedHeader { field: "nbytes", .. })
    ));
}

#[test]
fn truncated_sis_header_reports_truncation() {
    let bytes = sis_header_bytes(1, 292);
    let mut cursor = Cursor::new(bytes[..20].to_vec());
    assert!(matches!(
        SisHeader::read(&mut cursor),
        Err(SlideError::TruncatedFile { .. })
    ));
}

#[test]
fn ets_header_parses_and_maps_extensions() {
    for (compression, ext) in [(0u32, "raw"), (2, "jpg"), (3, "jp2")] {
        let mut container = vec![0u8; 64];
        container.extend_from_slice(&ets_header_bytes(compression, 90, 512, 512));
        let mut cursor = Cursor::new(container);
        let header = EtsHeader::read(&mut cursor, 64).unwrap();
        assert_eq!(header.compression, compression);
        assert_eq!(header.extension().unwrap(), ext);
        assert_eq!(header.dimx, 512);
        assert_eq!(header.dimy, 512);
    }
}

#[test]
fn ets_header_rejects_unknown_compression() {
    let mut container = vec![0u8; 64];
    container.extend_from_slice(&ets_header_bytes(5, 90, 512, 512));
    let mut cursor = Cursor::new(container);
    assert!(matches!(
        EtsHeader::read(&mut cursor, 64),
        Err(SlideError::MalformedHeader { field: "compression", .. })
    ));
}

#[test]
fn ets_header_rejects_bad_quality() {
    let mut container = vec![0u8; 64];
    container.extend_from_slice(&ets_header_bytes(2, 85, 512, 512));
    let mut cursor = Cursor::new(container);
    assert!(matches!(
        EtsHeader::read(&mut cursor, 64),
        Err(SlideError::MalformedHeader { field: "quality", .. })
    ));
}

#[test]
fn ets_header_rejects_multi_plane_tiles() {
    let mut container = vec![0u8; 64];
    let mut ets = ets_header_bytes(2, 90, 512, 512);
    let len = ets.len();
    ets[len - 4..].copy_from_slice(&2u32.to_le_bytes()); // dimz = 2
    container.extend_from_slice(&ets);
    let mut cursor = Cursor::new(container);
    assert!(matches!(
        EtsHeader::read(&mut cursor, 64),
        Err(SlideError::MalformedHeader { field: "dimz", .. })
    ));
}

#[test]
fn tile_record_decodes_fixed_layout() {
    let mut cursor = Cursor::new(tile_record_bytes(3, 9, 0, 0xdead_beef, 1234));
    let record = TileRecord::read(&mut cursor).unwrap();
    assert_eq!(record.reserved, 4);
    assert_eq!(record.coord, [3, 9, 0]);
    assert_eq!(record.level, 0);
    assert_eq!(record.offset, 0xdead_beef);
    assert_eq!(record.numbytes, 1234);
    assert_eq!(record.companion, 0x18c78d);
    assert_eq!(cursor.position(), 36);
}

#[test]
fn directory_preserves_disk_order() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&tile_record_bytes(1, 0, 0, 100, 10));
    bytes.extend_from_slice(&tile_record_bytes(0, 0, 0, 200, 20));
    let mut cursor = Cursor::new(bytes);
    let dir = EtsDirectory::read(&mut cursor, 0, 2).unwrap();
    assert_eq!(dir.len(), 2);
    assert_eq!(dir.get(0).unwrap().coord, [1, 0, 0]);
    assert_eq!(dir.get(1).unwrap().coord, [0, 0, 0]);
}

#[test]
fn zero_tile_directory_at_end_of_file_is_valid() {
    // Nothing to decode, so a directory offset equal to the file size
    // is fine
    let mut bytes = sis_header_bytes(0, 104);
    bytes.extend_from_slice(&ets_header_bytes(2, 90, 512, 512));
    assert_eq!(bytes.len() as u64, 104);
    let mut cursor = Cursor::new(bytes);
    let container = Container::read(&mut cursor).unwrap();
    assert_eq!(container.tile_count(), 0);
}

#[test]
fn short_directory_reports_truncation() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&tile_record_bytes(0, 0, 0, 100, 10));
    let mut cursor = Cursor::new(bytes);
    assert!(matches!(
        EtsDirectory::read(&mut cursor, 0, 2),
        Err(SlideError::TruncatedFile { .. })
    ));
}

#[test]
fn wtp_header_parses_valid_bytes() {
    let mut cursor = Cursor::new(wtp_header_bytes(12, 4, 2));
    let header = WtpHeader::read(&mut cursor).unwrap();
    assert_eq!(header.nbytes, 272);
    assert_eq!(header.ntiles, 12);
    assert_eq!(header.tiledim, 4);
    assert_eq!(header.first_offset, 0x400);
    assert_eq!(header.compression, 2);
    assert_eq!(header.quality, 80);
    assert_eq!(header.extension().unwrap(), "jpg");
}

#[test]
fn wtp_header_dump_lists_every_field_in_disk_order() {
    let mut cursor = Cursor::new(wtp_header_bytes(12, 4, 2));
    let header = WtpHeader::read(&mut cursor).unwrap();
    let description = header.describe();
    let lines: Vec<&str> = description.lines().collect();
    let labels: Vec<&str> = lines
        .iter()
        .map(|l| l.split(':').next().unwrap().trim())
        .collect();
    assert_eq!(
        labels,
        [
            "magic", "nbytes", "dummy1", "dummy2", "dummy3", "dummy4", "dummy5",
            "dummy6", "dummy7", "dummy8", "ntiles", "dummy10", "tiledim",
            "dummy12", "dummy13", "dummy14", "firstof", "dummy16", "compres",
            "quality",
        ]
    );
    assert!(lines.contains(&"dummy12: 0"));
    assert!(lines.contains(&"dummy16: 0"));
}

#[test]
fn wtp_header_rejects_bad_fixed_field() {
    let mut bytes = wtp_header_bytes(12, 4, 2);
    bytes[12..16].copy_from_slice(&9u32.to_le_bytes()); // field2 must be 2
    let mut cursor = Cursor::new(bytes);
    assert!(matches!(
        WtpHeader::read(&mut cursor),
        Err(SlideError::MalformedHeader { field: "field2", .. })
    ));
}

#[test]
fn wtp_header_rejects_raw_compression() {
    let mut cursor = Cursor::new(wtp_header_bytes(12, 4, 0));
    assert!(matches!(
        WtpHeader::read(&mut cursor),
        Err(SlideError::MalformedHeader { field: "compression", .. })
    ));
}

#[test]
fn detect_recognizes_both_magics() {
    let mut cursor = Cursor::new(sis_header_bytes(0, 292));
    assert_eq!(ContainerFormat::detect(&mut cursor).unwrap(), ContainerFormat::SisEts);
    assert_eq!(cursor.position(), 0); // cursor rewound for the header codec

    let mut cursor = Cursor::new(wtp_header_bytes(0, 1, 2));
    assert_eq!(ContainerFormat::detect(&mut cursor).unwrap(), ContainerFormat::Wtp);
}

#[test]
fn detect_rejects_unknown_magic() {
    let mut cursor = Cursor::new(b"TIFF....".to_vec());
    assert!(matches!(
        ContainerFormat::detect(&mut cursor),
        Err(SlideError::UnknownFormat(_))
    ));
}

#[test]
fn container_read_fails_before_any_record_on_bad_magic() {
    // A bad inner magic must surface from the header codec, not the
    // directory decode
    let mut bytes = sis_header_bytes(1, 292);
    let mut ets = ets_header_bytes(2, 90, 512, 512);
    ets[0..4].copy_from_slice(b"ET5\0");
    bytes.extend_from_slice(&ets);
    bytes.resize(292 + 36, 0);
    let mut cursor = Cursor::new(bytes);
    assert!(matches!(
        Container::read(&mut cursor),
        Err(SlideError::BadMagic { expected: "ETS", .. })
    ));
}
