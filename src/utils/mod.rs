//! Utility modules shared by the client, the providers and the binary.
//!
//! - [`text`] - quote stripping and Unicode escape decoding for server text
//! - [`color`] - progress-bar and category display colors
//! - [`datetime`] - parsing and relative formatting of task dates

pub mod color;
pub mod datetime;
pub mod text;

pub use text::{decode_unicode_escapes, sanitize, Sanitize};
