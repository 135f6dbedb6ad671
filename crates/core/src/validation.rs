//! Input validation utilities.
//!
//! This module checks attribute names before they are embedded into a search filter.

use crate::constants::MAX_ATTRIBUTE_LEN;
use crate::{FilterError, FilterResult};

/// Validates that `attribute` is safe to place on the left-hand side of a filter item.
///
/// Two shapes are accepted:
/// - a descriptor: an ASCII letter followed by ASCII letters, digits or `-` (`objectGUID`)
/// - a numeric OID: two or more runs of digits separated by single dots (`1.2.840.113556.1.4.2`)
///
/// Anything else, including filter metacharacters such as `(`, `)`, `=` and `*`, is rejected.
///
/// # Errors
///
/// Returns [`FilterError::InvalidAttribute`] if the name is empty, too long, or malformed.
pub fn validate_attribute_descriptor(attribute: &str) -> FilterResult<()> {
    if attribute.is_empty() {
        return Err(FilterError::InvalidAttribute(
            "attribute name cannot be empty".into(),
        ));
    }

    if attribute.len() > MAX_ATTRIBUTE_LEN {
        return Err(FilterError::InvalidAttribute(format!(
            "attribute name exceeds maximum length of {} characters",
            MAX_ATTRIBUTE_LEN
        )));
    }

    if is_descriptor(attribute) || is_numeric_oid(attribute) {
        return Ok(());
    }

    Err(FilterError::InvalidAttribute(format!(
        "'{}' is neither a descriptor nor a numeric OID",
        attribute
    )))
}

fn is_descriptor(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'-')
        }
        _ => false,
    }
}

fn is_numeric_oid(s: &str) -> bool {
    let mut parts = 0usize;
    for part in s.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts >= 2
}
