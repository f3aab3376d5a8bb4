//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes malformed input: static relation data that does not hold
/// together, or text that does not parse into a domain value. Filtering and sorting
/// never produce errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an unknown sort column name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A foreign key did not resolve to a row of the referenced relation.
    #[error("{relation} {id} references missing {target}")]
    DanglingReference {
        relation: &'static str,
        id: String,
        target: String,
    },

    /// Two rows of one relation share an identifier.
    #[error("duplicate {relation} id {id}")]
    DuplicateId { relation: &'static str, id: String },

    /// The static data source could not be read or decoded.
    #[error("data source: {0}")]
    DataSource(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn dangling(
        relation: &'static str,
        id: impl core::fmt::Display,
        target: impl Into<String>,
    ) -> Self {
        Self::DanglingReference {
            relation,
            id: id.to_string(),
            target: target.into(),
        }
    }

    pub fn duplicate(relation: &'static str, id: impl core::fmt::Display) -> Self {
        Self::DuplicateId {
            relation,
            id: id.to_string(),
        }
    }

    pub fn data_source(msg: impl Into<String>) -> Self {
        Self::DataSource(msg.into())
    }
}
