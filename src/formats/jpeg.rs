use super::ByteCursor;
use crate::error::{Result, SniffError};
use crate::types::{ImageFormat, ImageSize};

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

const SOS_MARKER: u8 = 0xDA;

#[inline]
pub fn matches_signature(data: &[u8]) -> bool {
    data.len() >= JPEG_SOI.len() && data[..JPEG_SOI.len()] == JPEG_SOI
}

/// Start-of-frame test: `0xC0..=0xCF` with bits `0x4` and `0x8` both clear.
/// The cleared bits drop DHT (`0xC4`), JPG extensions (`0xC8`) and DAC
/// (`0xCC`), which numerically fall in the SOF range but carry no frame
/// header.
#[inline]
pub fn is_frame_marker(marker: u8) -> bool {
    (0xC0..=0xCF).contains(&marker) && marker & 0x4 == 0 && marker & 0x8 == 0
}

/// Walks the segment stream from just past SOI until a start-of-frame segment
/// yields the dimensions. Hitting start-of-scan first means the frame header
/// was never seen; dimensions always precede scan data in a well-formed
/// stream.
pub fn sniff_dimensions(data: &[u8]) -> Result<ImageSize> {
    let mut cursor = ByteCursor::new(data, JPEG_SOI.len(), ImageFormat::Jpeg);

    while cursor.has_remaining() {
        if cursor.next_byte()? != 0xFF {
            return Err(SniffError::Malformed {
                format: ImageFormat::Jpeg,
                reason: "segment without 0xFF marker prefix",
            });
        }

        let marker = cursor.next_byte()?;
        if marker == SOS_MARKER {
            return Err(SniffError::Malformed {
                format: ImageFormat::Jpeg,
                reason: "start of scan before any frame header",
            });
        }

        let length = cursor.read_u16_be()? as usize;

        if is_frame_marker(marker) {
            cursor.skip(1); // sample precision
            let height = cursor.read_u16_be()?;
            let width = cursor.read_u16_be()?;
            return Ok(ImageSize {
                width: width as u32,
                height: height as u32,
            });
        }

        // Saturating keeps a degenerate length (< 2) from walking backward.
        cursor.skip(length.saturating_sub(2));
    }

    Err(SniffError::Malformed {
        format: ImageFormat::Jpeg,
        reason: "no frame header before end of stream",
    })
}
