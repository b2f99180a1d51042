use thiserror::Error;

use crate::model::RelationType;

/// Main error type for belro.
///
/// "No rule matched" is not an error: the rule engine returns the unmapped
/// sentinel as a normal result value so callers can count unmapped edges
/// without exception-driven control flow.
#[derive(Error, Debug)]
pub enum BelroError {
    /// The requested edge key does not exist between the given endpoints
    #[error("edge not found: no edge with key {key} between the given endpoints")]
    EdgeNotFound { key: String },

    /// The edge's relation type is outside the recognized polarity set
    #[error("unknown edge kind: {0:?} is not a recognized causal polarity")]
    UnknownEdgeKind(RelationType),
}

/// Convenient Result type using BelroError
pub type Result<T> = std::result::Result<T, BelroError>;
