//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the encoder. Library
//! code never reads environment variables itself.

use crate::constants::OBJECT_GUID_ATTRIBUTE;
use crate::validation::validate_attribute_descriptor;
use crate::FilterResult;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    filter_attribute: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            filter_attribute: OBJECT_GUID_ATTRIBUTE.to_string(),
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterError::InvalidAttribute`] if `filter_attribute` is not a valid
    /// attribute descriptor or numeric OID.
    pub fn new(filter_attribute: String) -> FilterResult<Self> {
        validate_attribute_descriptor(&filter_attribute)?;
        Ok(Self { filter_attribute })
    }

    pub fn filter_attribute(&self) -> &str {
        &self.filter_attribute
    }
}

/// Resolve the filter attribute from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `objectGUID`. The result is not validated
/// here; pass it to [`CoreConfig::new`].
pub fn filter_attribute_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| OBJECT_GUID_ATTRIBUTE.to_string())
}
