use adguid_uuid::GuidError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("identifier error: {0}")]
    Guid(#[from] GuidError),
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

pub type FilterResult<T> = std::result::Result<T, FilterError>;
