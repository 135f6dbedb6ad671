//! Internal implementation of the directory identifier type.
//!
//! Byte order conversions are delegated to [`uuid::Uuid::to_bytes_le`] and
//! [`uuid::Uuid::from_bytes_le`], which implement the mixed-endian layout used for binary
//! `objectGUID` storage.

use crate::{GuidError, GuidResult};
use base64::Engine;
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Number of bytes in the binary form of an identifier.
pub const GUID_BYTE_LEN: usize = 16;

/// Number of characters in the canonical dashed text form.
pub const GUID_TEXT_LEN: usize = 36;

/// Positions of the group separators in the canonical text form.
const DASH_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A validated directory object identifier.
///
/// Once you hold an `ObjectGuid` the contained value is a well-formed 128-bit identifier, so
/// formatting it into a filter or a byte layout cannot fail.
///
/// # Construction
/// - [`ObjectGuid::parse`] validates canonical dashed text.
/// - [`ObjectGuid::from_bytes_le`] reads 16 bytes in mixed-endian layout.
/// - [`ObjectGuid::from_base64`] reads the base64 form stored by directory connectors.
/// - [`ObjectGuid::new`] allocates a fresh random identifier.
///
/// # Display format
/// Always the lowercase 8-4-4-4-12 dashed form, regardless of the case it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectGuid(Uuid);

impl ObjectGuid {
    /// Generates a new random (version 4) identifier.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing [`Uuid`].
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Validates and parses an identifier in canonical dashed text form.
    ///
    /// Hex digits may be upper or lower case. Other forms accepted by [`Uuid::parse_str`]
    /// (braced, `urn:uuid:` prefixed, or without dashes) are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::InvalidIdentifierFormat`] if `input` is not canonical.
    pub fn parse(input: &str) -> GuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(GuidError::InvalidIdentifierFormat(format!(
                "expected 8-4-4-4-12 hex digits separated by '-', got: '{}'",
                input
            )));
        }

        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| GuidError::InvalidIdentifierFormat(format!("'{}': {}", input, e)))
    }

    /// Returns true if `input` has the canonical dashed-hex shape.
    ///
    /// This is a purely syntactic check:
    /// - Exactly 36 bytes long
    /// - `-` at offsets 8, 13, 18 and 23
    /// - ASCII hex digits (either case) everywhere else
    pub fn is_canonical(input: &str) -> bool {
        input.len() == GUID_TEXT_LEN
            && input.bytes().enumerate().all(|(i, b)| {
                if DASH_POSITIONS.contains(&i) {
                    b == b'-'
                } else {
                    b.is_ascii_hexdigit()
                }
            })
    }

    /// Reads an identifier from 16 bytes in mixed-endian layout.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::InvalidByteLength`] if `bytes` is not exactly 16 bytes long.
    pub fn from_bytes_le(bytes: &[u8]) -> GuidResult<Self> {
        let array: [u8; GUID_BYTE_LEN] = bytes
            .try_into()
            .map_err(|_| GuidError::InvalidByteLength(bytes.len()))?;
        Ok(Self(Uuid::from_bytes_le(array)))
    }

    /// Decodes the standard padded base64 form of the mixed-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GuidError::InvalidIdentifierFormat`] if `input` is not valid base64, or
    /// [`GuidError::InvalidByteLength`] if it does not decode to 16 bytes.
    pub fn from_base64(input: &str) -> GuidResult<Self> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(input.trim())
            .map_err(|e| GuidError::InvalidIdentifierFormat(format!("invalid base64: {}", e)))?;
        Self::from_bytes_le(&bytes)
    }

    /// Returns the underlying [`Uuid`].
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the identifier in the mixed-endian layout used for binary attribute storage.
    pub fn to_bytes_le(&self) -> [u8; GUID_BYTE_LEN] {
        self.0.to_bytes_le()
    }

    /// Returns the mixed-endian bytes as standard padded base64.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.to_bytes_le())
    }
}

impl fmt::Display for ObjectGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ObjectGuid {
    type Err = GuidError;

    /// Equivalent to [`ObjectGuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectGuid::parse(s)
    }
}

impl From<Uuid> for ObjectGuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ObjectGuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ObjectGuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectGuid::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "a2b9312c-f112-44e0-bbb1-22e1fdb6f5c3";

    #[test]
    fn test_parse_valid_lowercase() {
        let guid = ObjectGuid::parse(SAMPLE).unwrap();
        assert_eq!(guid.to_string(), SAMPLE);
    }

    #[test]
    fn test_parse_uppercase_displays_lowercase() {
        let guid = ObjectGuid::parse(&SAMPLE.to_uppercase()).unwrap();
        assert_eq!(guid.to_string(), SAMPLE);
        assert_eq!(guid, ObjectGuid::parse(SAMPLE).unwrap());
    }

    #[test]
    fn test_parse_rejects_not_a_guid() {
        let result = ObjectGuid::parse("not-a-guid");

        match result {
            Err(GuidError::InvalidIdentifierFormat(msg)) => {
                assert!(msg.contains("8-4-4-4-12"));
                assert!(msg.contains("not-a-guid"));
            }
            _ => panic!("Expected InvalidIdentifierFormat error"),
        }
    }

    #[test]
    fn test_parse_rejects_simple_form() {
        assert!(ObjectGuid::parse("a2b9312cf11244e0bbb122e1fdb6f5c3").is_err());
    }

    #[test]
    fn test_parse_rejects_braced_and_urn_forms() {
        assert!(ObjectGuid::parse("{a2b9312c-f112-44e0-bbb1-22e1fdb6f5c3}").is_err());
        assert!(ObjectGuid::parse("urn:uuid:a2b9312c-f112-44e0-bbb1-22e1fdb6f5c3").is_err());
    }

    #[test]
    fn test_parse_rejects_misplaced_dashes() {
        assert!(ObjectGuid::parse("a2b9312cf-112-44e0-bbb1-22e1fdb6f5c3").is_err());
        assert!(ObjectGuid::parse("a2b9-312c-f112-44e0bbb1-22e1fdb6f5c3").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex_digit() {
        assert!(ObjectGuid::parse("a2b9312c-f112-44e0-bbb1-22e1fdb6f5cg").is_err());
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert!(ObjectGuid::parse(" a2b9312c-f112-44e0-bbb1-22e1fdb6f5c3").is_err());
    }

    #[test]
    fn test_is_canonical() {
        assert!(ObjectGuid::is_canonical(SAMPLE));
        assert!(ObjectGuid::is_canonical("A2B9312C-F112-44E0-BBB1-22E1FDB6F5C3"));
        assert!(ObjectGuid::is_canonical("00000000-0000-0000-0000-000000000000"));

        assert!(!ObjectGuid::is_canonical(""));
        assert!(!ObjectGuid::is_canonical("a2b9312c-f112-44e0-bbb1-22e1fdb6f5c"));
        assert!(!ObjectGuid::is_canonical("a2b9312c-f112-44e0-bbb1-22e1fdb6f5c33"));
        assert!(!ObjectGuid::is_canonical("a2b9312c_f112_44e0_bbb1_22e1fdb6f5c3"));
    }

    #[test]
    fn test_to_bytes_le_reverses_first_three_fields() {
        let guid = ObjectGuid::parse(SAMPLE).unwrap();

        assert_eq!(
            guid.to_bytes_le(),
            [
                0x2cu8, 0x31, 0xb9, 0xa2, 0x12, 0xf1, 0xe0, 0x44, 0xbb, 0xb1, 0x22, 0xe1, 0xfd,
                0xb6, 0xf5, 0xc3
            ]
        );
    }

    #[test]
    fn test_to_bytes_le_differs_from_big_endian_dump() {
        let guid = ObjectGuid::parse("00112233-4455-6677-8899-aabbccddeeff").unwrap();

        assert_eq!(&guid.to_bytes_le()[..8], &[0x33u8, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66]);
        assert_eq!(&guid.to_bytes_le()[8..], &guid.uuid().as_bytes()[8..]);
        assert_ne!(&guid.to_bytes_le(), guid.uuid().as_bytes());
    }

    #[test]
    fn test_from_bytes_le_sequential() {
        let bytes: Vec<u8> = (0u8..16).collect();
        let guid = ObjectGuid::from_bytes_le(&bytes).unwrap();

        assert_eq!(guid.to_string(), "03020100-0504-0706-0809-0a0b0c0d0e0f");
    }

    #[test]
    fn test_from_bytes_le_rejects_wrong_length() {
        assert_eq!(
            ObjectGuid::from_bytes_le(&[0u8; 15]),
            Err(GuidError::InvalidByteLength(15))
        );
        assert_eq!(
            ObjectGuid::from_bytes_le(&[0u8; 17]),
            Err(GuidError::InvalidByteLength(17))
        );
        assert_eq!(ObjectGuid::from_bytes_le(&[]), Err(GuidError::InvalidByteLength(0)));
    }

    #[test]
    fn test_base64_of_sample() {
        let guid = ObjectGuid::parse(SAMPLE).unwrap();
        assert_eq!(guid.to_base64(), "LDG5ohLx4ES7sSLh/bb1ww==");
    }

    #[test]
    fn test_from_base64() {
        let guid = ObjectGuid::from_base64("LDG5ohLx4ES7sSLh/bb1ww==").unwrap();
        assert_eq!(guid.to_string(), SAMPLE);
    }

    #[test]
    fn test_from_base64_rejects_garbage() {
        assert!(matches!(
            ObjectGuid::from_base64("not base64!"),
            Err(GuidError::InvalidIdentifierFormat(_))
        ));
    }

    #[test]
    fn test_from_base64_rejects_short_payload() {
        // 12 bytes
        assert_eq!(
            ObjectGuid::from_base64("AAAAAAAAAAAAAAAA"),
            Err(GuidError::InvalidByteLength(12))
        );
    }

    #[test]
    fn test_new_generates_distinct_v4() {
        let a = ObjectGuid::new();
        let b = ObjectGuid::new();

        assert_ne!(a, b);
        assert_eq!(a.uuid().get_version_num(), 4);
        assert!(ObjectGuid::is_canonical(&a.to_string()));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: ObjectGuid = SAMPLE.parse().unwrap();
        assert_eq!(parsed, ObjectGuid::parse(SAMPLE).unwrap());

        let bad: Result<ObjectGuid, _> = "not-a-guid".parse();
        assert!(bad.is_err());
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::parse_str(SAMPLE).unwrap();
        assert_eq!(ObjectGuid::from(uuid), ObjectGuid::from_uuid(uuid));
        assert_eq!(ObjectGuid::from_uuid(uuid).uuid(), uuid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_text() {
        let guid = ObjectGuid::parse(&SAMPLE.to_uppercase()).unwrap();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{}\"", SAMPLE));

        let back: ObjectGuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, guid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_non_canonical() {
        let result: Result<ObjectGuid, _> =
            serde_json::from_str("\"a2b9312cf11244e0bbb122e1fdb6f5c3\"");
        assert!(result.is_err());
    }
}
