use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("preference `{field}` out of range: {value} (expected {expected})")]
    PreferenceOutOfRange { field: &'static str, value: String, expected: &'static str },
    #[error("preference `{field}` has unsupported value `{value}`")]
    UnsupportedPreference { field: &'static str, value: String },
    #[error("catalog invariant violation for item `{item_id}`: {reason}")]
    CatalogInvariant { item_id: String, reason: String },
}
