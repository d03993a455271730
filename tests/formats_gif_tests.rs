use calamus::{ImageSize, SniffError, sniff_image_size};
use proptest::prelude::*;

fn make_gif(version: &[u8], width: u16, height: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"GIF");
    data.extend_from_slice(version);
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0xF7, 0x00, 0x00]); // rest of the screen descriptor
    data
}

#[test]
fn sniffs_gif89a() {
    let data = make_gif(b"89a", 16, 16);
    assert_eq!(sniff_image_size(&data).unwrap(), ImageSize::new(16, 16));
}

#[test]
fn sniffs_gif87a() {
    let data = make_gif(b"87a", 640, 480);
    assert_eq!(sniff_image_size(&data).unwrap(), ImageSize::new(640, 480));
}

#[test]
fn dimension_fields_are_little_endian() {
    let data = make_gif(b"89a", 0x0201, 0x0403);
    let size = sniff_image_size(&data).unwrap();
    assert_eq!(size.width, 0x0201);
    assert_eq!(size.height, 0x0403);
}

#[test]
fn truncated_descriptor_is_hard_error() {
    let err = sniff_image_size(b"GIF89a\x10\x00\x10").unwrap_err();
    assert!(matches!(err, SniffError::UnexpectedEof { .. }));
}

#[test]
fn gif_prefix_alone_is_recognized_but_truncated() {
    // Magic matched on four bytes; the descriptor read then runs off the end.
    let err = sniff_image_size(b"GIF8").unwrap_err();
    assert!(!err.is_unrecognized());
}

#[test]
fn unrelated_text_is_unrecognized() {
    assert!(sniff_image_size(b"GIXYZ123").unwrap_err().is_unrecognized());
}

proptest! {
    /// Sniffing never panics, whatever the bytes.
    #[test]
    fn sniff_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = sniff_image_size(&data);
    }

    /// Pure function: two runs over the same buffer agree.
    #[test]
    fn sniff_is_pure(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(sniff_image_size(&data), sniff_image_size(&data));
    }
}
