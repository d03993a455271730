use memchr::memmem;

use super::ByteCursor;
use crate::error::{Result, SniffError};
use crate::types::{ImageFormat, ImageSize};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const IHDR_MARKER: &[u8; 4] = b"IHDR";

#[inline]
pub fn matches_signature(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && data[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Reads the IHDR width and height fields.
///
/// Known limitation: the IHDR chunk is located by substring search over the
/// whole buffer, not by walking the length-prefixed chunk list. A buffer
/// carrying the bytes `IHDR` inside earlier chunk data would be mis-sniffed.
pub fn sniff_dimensions(data: &[u8]) -> Result<ImageSize> {
    let marker = memmem::find(data, IHDR_MARKER).ok_or(SniffError::Malformed {
        format: ImageFormat::Png,
        reason: "missing IHDR chunk",
    })?;

    // The four bytes after the chunk type are the width field.
    let mut cursor = ByteCursor::new(data, marker + IHDR_MARKER.len(), ImageFormat::Png);
    let width = cursor.read_u32_be()?;
    let height = cursor.read_u32_be()?;

    Ok(ImageSize { width, height })
}
