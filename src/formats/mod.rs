//! Image header sniffing: format detection by magic bytes, then a
//! format-specific walk to the pixel dimensions.

pub mod gif;
pub mod jpeg;
pub mod png;

use tracing::trace;

use crate::error::{Result, SniffError};
use crate::types::{ImageFormat, ImageSize};

/// Read position into a byte buffer. Every read advances; running past the
/// end aborts the whole decode, since a recognized header promised more bytes
/// than the buffer holds.
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    format: ImageFormat,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8], pos: usize, format: ImageFormat) -> Self {
        Self { data, pos, format }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn has_remaining(&self) -> bool {
        self.pos < self.data.len()
    }

    #[inline]
    pub(crate) fn next_byte(&mut self) -> Result<u8> {
        let byte = self
            .data
            .get(self.pos)
            .copied()
            .ok_or(SniffError::UnexpectedEof {
                format: self.format,
                offset: self.pos,
            })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Skip may move past the end of the buffer; the next read reports the
    /// overrun.
    #[inline]
    pub(crate) fn skip(&mut self, count: usize) {
        self.pos += count;
    }

    pub(crate) fn read_u16_be(&mut self) -> Result<u16> {
        let b0 = self.next_byte()? as u16;
        let b1 = self.next_byte()? as u16;
        Ok((b0 << 8) | b1)
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16> {
        let b0 = self.next_byte()? as u16;
        let b1 = self.next_byte()? as u16;
        Ok(b0 | (b1 << 8))
    }

    pub(crate) fn read_u32_be(&mut self) -> Result<u32> {
        let b0 = self.next_byte()? as u32;
        let b1 = self.next_byte()? as u32;
        let b2 = self.next_byte()? as u32;
        let b3 = self.next_byte()? as u32;
        Ok((b0 << 24) | (b1 << 16) | (b2 << 8) | b3)
    }
}

/// Detects the image format of `data` by magic bytes and decodes its pixel
/// dimensions.
///
/// Three outcomes: `Ok` with the dimensions, [`SniffError::UnrecognizedFormat`]
/// when no magic matches (a negative result, nothing was decoded), or a
/// truncation/malformation error when a recognized header has a broken
/// structure behind it.
pub fn sniff_image_size(data: &[u8]) -> Result<ImageSize> {
    let result = if png::matches_signature(data) {
        png::sniff_dimensions(data)
    } else if gif::matches_signature(data) {
        gif::sniff_dimensions(data)
    } else if jpeg::matches_signature(data) {
        jpeg::sniff_dimensions(data)
    } else {
        Err(SniffError::UnrecognizedFormat)
    };
    trace!(len = data.len(), ?result, "image header sniff");
    result
}
