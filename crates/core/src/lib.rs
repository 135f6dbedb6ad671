//! # adguid Core
//!
//! Directory search-filter encoding for binary `objectGUID` values.
//!
//! This crate contains pure string operations only:
//! - Encoding an identifier (text or mixed-endian bytes) into an escaped-hex filter
//! - Decoding such a filter back into an identifier
//! - Startup configuration for the filter attribute name
//!
//! **No I/O**: reading the environment, parsing command-line flags and printing results belong in
//! the `adguid` binary.
//!
//! ```
//! use adguid_core::encode_from_text;
//!
//! let filter = encode_from_text("a2b9312c-f112-44e0-bbb1-22e1fdb6f5c3").unwrap();
//! assert_eq!(
//!     filter,
//!     r"(objectGUID=\2c\31\b9\a2\12\f1\e0\44\bb\b1\22\e1\fd\b6\f5\c3)"
//! );
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod validation;

pub use adguid_uuid::{GuidError, GuidResult, ObjectGuid};
pub use config::CoreConfig;
pub use error::{FilterError, FilterResult};
pub use filter::{
    decode_filter, encode_from_bytes, encode_from_text, encode_guid, escape_bytes,
    GuidFilterEncoder,
};
