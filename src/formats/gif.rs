use super::ByteCursor;
use crate::error::Result;
use crate::types::{ImageFormat, ImageSize};

/// Covers both GIF87a and GIF89a.
pub const GIF_MAGIC: [u8; 4] = *b"GIF8";

/// Logical screen descriptor offset, past the 6-byte signature + version.
const SCREEN_DESCRIPTOR_OFFSET: usize = 6;

#[inline]
pub fn matches_signature(data: &[u8]) -> bool {
    data.len() >= GIF_MAGIC.len() && data[..GIF_MAGIC.len()] == GIF_MAGIC
}

pub fn sniff_dimensions(data: &[u8]) -> Result<ImageSize> {
    let mut cursor = ByteCursor::new(data, SCREEN_DESCRIPTOR_OFFSET, ImageFormat::Gif);
    let width = cursor.read_u16_le()?;
    let height = cursor.read_u16_le()?;

    Ok(ImageSize {
        width: width as u32,
        height: height as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SniffError;

    fn gif_header(version: &[u8], width: u16, height: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"GIF");
        data.extend_from_slice(version);
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data
    }

    #[test]
    fn reads_screen_descriptor() {
        let data = gif_header(b"89a", 16, 16);
        assert_eq!(sniff_dimensions(&data).unwrap(), ImageSize::new(16, 16));

        let data = gif_header(b"87a", 320, 200);
        assert_eq!(sniff_dimensions(&data).unwrap(), ImageSize::new(320, 200));
    }

    #[test]
    fn little_endian_fields() {
        let data = gif_header(b"89a", 0x0102, 0x0304);
        let size = sniff_dimensions(&data).unwrap();
        assert_eq!(size.width, 0x0102);
        assert_eq!(size.height, 0x0304);
    }

    #[test]
    fn truncated_descriptor_is_eof() {
        let err = sniff_dimensions(b"GIF89a\x10").unwrap_err();
        assert!(matches!(
            err,
            SniffError::UnexpectedEof {
                format: ImageFormat::Gif,
                ..
            }
        ));
    }
}
