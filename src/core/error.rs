use thiserror::Error;

use crate::core::model::Voltage;

/// Estimation failure. Out-of-range queries are *not* errors: they produce
/// an estimate with extrapolation flags set.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum PricingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no reference models for the {0} voltage class")]
    NoReferenceData(Voltage),

    #[error("reference model `{model}` amounts to zero modules")]
    DegenerateCatalogEntry { model: String },
}
