//! Order domain error model.

use thiserror::Error;

/// Result type used across the orders domain.
pub type OrderResult<T> = Result<T, OrderError>;

/// Order-level error.
///
/// Deterministic domain failures only. Parsing and storage concerns belong to
/// the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A fulfillment status value outside the fixed set.
    #[error(
        "fulfillment status must be one of pending, paid, processing, shipped, complete (got '{0}')"
    )]
    UnknownStatus(String),

    /// An add of a product name already present on the order.
    #[error("a product named '{0}' has already been added to the order")]
    DuplicateProduct(String),

    /// A remove of a product name absent from the order.
    #[error("no product named '{0}' exists on the order")]
    ProductNotFound(String),
}
