use thiserror::Error;

/// Errors raised by item type selection and item lifecycle misuse
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemError {
    /// The item kind was configured without any types to choose from
    #[error("item type set is empty")]
    EmptyTypeSet,

    /// Every configured type has a weight of zero
    #[error("all item type weights are zero")]
    ZeroWeights,

    /// A weight is negative, NaN or infinite
    #[error("invalid item type weight: {0}")]
    InvalidWeight(String),

    /// The item was hit while sitting in its pool
    #[error("item is not active")]
    Inactive,
}
