//! Core helpers for abbreviation-expansion editor tooling: extracting the
//! abbreviation token that ends at the caret, and sniffing image dimensions
//! from raw byte buffers.

pub mod extract;
pub mod formats;
pub mod types;

mod error;

pub use error::{Result, SniffError};
pub use extract::{AbbreviationGrammar, DefaultGrammar, expression_bounds, extract_abbreviation};
pub use formats::sniff_image_size;
pub use types::{ImageFormat, ImageSize, mime_type_for_extension};
