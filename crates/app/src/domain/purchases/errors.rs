//! Purchases service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind as DbErrorKind},
};
use thiserror::Error;

use crate::{domain::products::models::ProductId, ids::ParseIdError};

/// Coarse error class surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    NotFound,
    Conflict,
    Internal,
}

#[derive(Debug, Error)]
pub enum PurchasesServiceError {
    #[error("invalid {entity} identifier `{value}`")]
    InvalidIdentifier {
        entity: &'static str,
        value: String,
        #[source]
        source: ParseIdError,
    },

    #[error("purchased quantity must be at least 1")]
    InvalidQuantity,

    #[error("no matching products")]
    NoMatchingProducts,

    #[error("requested quantity exceeds stock for product {product}")]
    InsufficientStock { product: ProductId },

    #[error("missing payment: expected {expected} proofs, received {received}")]
    MissingPayment { expected: u32, received: usize },

    #[error("amount out of range")]
    AmountOutOfRange,

    #[error("purchase already paid")]
    AlreadyPaid,

    #[error("purchase already exists")]
    AlreadyExists,

    #[error("purchase not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl PurchasesServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIdentifier { .. }
            | Self::InvalidQuantity
            | Self::NoMatchingProducts
            | Self::InsufficientStock { .. }
            | Self::MissingPayment { .. }
            | Self::AmountOutOfRange
            | Self::InvalidReference
            | Self::MissingRequiredData
            | Self::InvalidData => ErrorKind::InvalidRequest,
            Self::NotFound => ErrorKind::NotFound,
            Self::AlreadyPaid | Self::AlreadyExists => ErrorKind::Conflict,
            Self::Sql(_) => ErrorKind::Internal,
        }
    }
}

impl From<Error> for PurchasesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(DbErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(DbErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(DbErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(DbErrorKind::CheckViolation) => Self::InvalidData,
            Some(DbErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<TryFromIntError> for PurchasesServiceError {
    fn from(_overflow: TryFromIntError) -> Self {
        Self::AmountOutOfRange
    }
}
