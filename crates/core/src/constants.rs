//! Constants used throughout the adguid core crate.

/// Attribute name used by the fixed-template encoders.
pub const OBJECT_GUID_ATTRIBUTE: &str = "objectGUID";

/// Maximum accepted length of a configured attribute name.
pub const MAX_ATTRIBUTE_LEN: usize = 64;

/// Length of one escaped byte in a filter value (`\` plus two hex digits).
pub const ESCAPED_BYTE_LEN: usize = 3;
