//! Error types for the marketplace core

use thiserror::Error;

use crate::quote::QuoteField;

/// Raised by the quote request form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// One or more required fields were empty at submit time. The form keeps
    /// every entered value and stays editable.
    #[error("missing required fields: {}", field_names(.0))]
    MissingRequired(Vec<QuoteField>),

    /// The request was already filed; the form is read-only until reload.
    #[error("quote request already submitted")]
    AlreadySubmitted,
}

fn field_names(fields: &[QuoteField]) -> String {
    fields
        .iter()
        .map(QuoteField::key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raised when static catalog data or a catalog lookup is invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("unknown aircraft size: {0}")]
    UnknownSize(String),

    #[error("unknown filter chip: {0}")]
    UnknownChip(String),

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("provider {0} serves no airports")]
    NoAirports(String),

    #[error("provider {0} offers no services")]
    NoServices(String),

    #[error("provider {provider} has invalid airport code {code}")]
    InvalidAirport { provider: String, code: String },

    #[error("provider {provider} rating {rating} is outside 0.0..=5.0")]
    RatingOutOfRange { provider: String, rating: f32 },

    #[error("duplicate provider id: {0}")]
    DuplicateProvider(String),
}
