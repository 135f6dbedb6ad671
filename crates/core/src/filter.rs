//! Escaped-hex search filters for binary identifier attributes.
//!
//! A filter item for a binary attribute cannot carry raw bytes, so every byte of the value is
//! written as `\` followed by two lowercase hex digits:
//!
//! ```text
//! (objectGUID=\2c\31\b9\a2\12\f1\e0\44\bb\b1\22\e1\fd\b6\f5\c3)
//! ```
//!
//! The bytes are always in the mixed-endian layout returned by [`ObjectGuid::to_bytes_le`].
//! [`encode_from_text`] performs that reordering; [`encode_from_bytes`] expects the caller to have
//! done it already and copies the bytes through unchanged.

use crate::constants::{ESCAPED_BYTE_LEN, OBJECT_GUID_ATTRIBUTE};
use crate::validation::validate_attribute_descriptor;
use crate::{CoreConfig, FilterError, FilterResult};
use adguid_uuid::{GuidResult, ObjectGuid, GUID_BYTE_LEN};
use std::fmt::Write;

/// Encodes canonical dashed text into an `objectGUID` filter.
///
/// # Errors
///
/// Returns [`adguid_uuid::GuidError::InvalidIdentifierFormat`] if `text` is not in 8-4-4-4-12
/// dashed hex form.
pub fn encode_from_text(text: &str) -> GuidResult<String> {
    let guid = ObjectGuid::parse(text)?;
    Ok(encode_guid(&guid))
}

/// Encodes 16 bytes, already in mixed-endian layout, into an `objectGUID` filter.
///
/// The bytes are not reordered.
///
/// # Errors
///
/// Returns [`adguid_uuid::GuidError::InvalidByteLength`] if `bytes` is not exactly 16 bytes.
pub fn encode_from_bytes(bytes: &[u8]) -> GuidResult<String> {
    let guid = ObjectGuid::from_bytes_le(bytes)?;
    Ok(encode_guid(&guid))
}

/// Encodes a validated identifier into an `objectGUID` filter.
pub fn encode_guid(guid: &ObjectGuid) -> String {
    render(OBJECT_GUID_ATTRIBUTE, &guid.to_bytes_le())
}

/// Escapes each byte as `\xx`, joined in order.
///
/// Useful when composing a larger filter such as `(&(objectClass=user)(objectGUID=...))`.
pub fn escape_bytes(bytes: &[u8; GUID_BYTE_LEN]) -> String {
    let mut out = String::with_capacity(GUID_BYTE_LEN * ESCAPED_BYTE_LEN);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "\\{:02x}", byte);
    }
    out
}

fn render(attribute: &str, bytes: &[u8; GUID_BYTE_LEN]) -> String {
    format!("({}={})", attribute, escape_bytes(bytes))
}

/// Decodes a single-item filter produced by the encoders back into an identifier.
///
/// The attribute name may be any valid descriptor; it is not required to be `objectGUID`.
/// Hex digits may be in either case.
///
/// # Errors
///
/// - [`FilterError::InvalidFilter`] if the input is not `(<attr>=\xx...)` with well-formed pairs.
/// - [`FilterError::Guid`] wrapping `InvalidByteLength` if there are not exactly 16 pairs.
pub fn decode_filter(filter: &str) -> FilterResult<ObjectGuid> {
    let inner = filter
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| {
            FilterError::InvalidFilter(format!("filter must be enclosed in parentheses: '{}'", filter))
        })?;

    let (attribute, value) = inner.split_once('=').ok_or_else(|| {
        FilterError::InvalidFilter(format!("filter has no '=' separator: '{}'", filter))
    })?;

    validate_attribute_descriptor(attribute)
        .map_err(|e| FilterError::InvalidFilter(format!("bad attribute in '{}': {}", filter, e)))?;

    let pairs = value.strip_prefix('\\').ok_or_else(|| {
        FilterError::InvalidFilter(format!("value must start with '\\': '{}'", value))
    })?;

    let mut digits = String::with_capacity(GUID_BYTE_LEN * 2);
    for pair in pairs.split('\\') {
        if pair.len() != 2 || !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FilterError::InvalidFilter(format!(
                "expected two hex digits after '\\', got '{}'",
                pair
            )));
        }
        digits.push_str(pair);
    }

    let bytes = hex::decode(&digits)
        .map_err(|e| FilterError::InvalidFilter(format!("invalid hex in filter value: {}", e)))?;
    let guid = ObjectGuid::from_bytes_le(&bytes)?;

    tracing::debug!(attribute, guid = %guid, "decoded identifier filter");
    Ok(guid)
}

/// Filter encoder bound to a configured attribute name.
///
/// With [`CoreConfig::default`] this produces the same output as the free functions.
#[derive(Clone, Debug)]
pub struct GuidFilterEncoder {
    attribute: String,
}

impl Default for GuidFilterEncoder {
    fn default() -> Self {
        Self::new(&CoreConfig::default())
    }
}

impl GuidFilterEncoder {
    pub fn new(config: &CoreConfig) -> Self {
        tracing::debug!(attribute = config.filter_attribute(), "filter encoder configured");
        Self {
            attribute: config.filter_attribute().to_string(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn encode_guid(&self, guid: &ObjectGuid) -> String {
        render(&self.attribute, &guid.to_bytes_le())
    }

    /// See [`encode_from_text`].
    pub fn encode_text(&self, text: &str) -> GuidResult<String> {
        let guid = ObjectGuid::parse(text)?;
        Ok(self.encode_guid(&guid))
    }

    /// See [`encode_from_bytes`].
    pub fn encode_bytes(&self, bytes: &[u8]) -> GuidResult<String> {
        let guid = ObjectGuid::from_bytes_le(bytes)?;
        Ok(self.encode_guid(&guid))
    }
}
