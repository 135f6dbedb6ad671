//! Directory object identifiers.
//!
//! Directory services store `objectGUID` as a 16-byte binary attribute. The bytes are **not** a
//! left-to-right dump of the dashed text form: the first three fields are stored little-endian
//! and the remaining eight bytes are kept as written.
//!
//! This crate provides:
//! - A wrapper type ([`ObjectGuid`]) that is only constructed from validated input.
//! - Conversion between the canonical text form, the mixed-endian byte layout and base64.
//!
//! ## Canonical text form
//! - Length: 36
//! - Grouping: 8-4-4-4-12 hex digits separated by `-`
//! - Case: either case accepted on input, lowercase on output
//! - Example: `a2b9312c-f112-44e0-bbb1-22e1fdb6f5c3`
//!
//! ## Mixed-endian byte layout
//! For the example above the stored bytes are:
//!
//! ```text
//! 2c 31 b9 a2 | 12 f1 | e0 44 | bb b1 22 e1 fd b6 f5 c3
//!  time-low   |  mid  |  hi   | clock-seq + node (verbatim)
//! ```

mod guid;

// Re-export public types
pub use guid::{ObjectGuid, Uuid, GUID_BYTE_LEN, GUID_TEXT_LEN};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GuidError {
    /// Text is not in the canonical dashed-hex shape.
    #[error("invalid identifier format: {0}")]
    InvalidIdentifierFormat(String),
    /// Binary input is not exactly 16 bytes.
    #[error("invalid byte length: expected 16 bytes, got {0}")]
    InvalidByteLength(usize),
}

/// Result type for identifier operations.
pub type GuidResult<T> = Result<T, GuidError>;
