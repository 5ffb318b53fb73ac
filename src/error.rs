use thiserror::Error;

/// Convenience result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned by operator factories and JSON interop.
///
/// Pipeline execution itself is infallible: operators are a closed set of
/// tagged variants, so there is no "unknown operator" failure at run time.
/// The remaining failure modes are configuration errors caught when an
/// operator is constructed, and malformed input when building records from
/// JSON text.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A combinator (`or`/`and`) was given an operator that is not a filter.
    #[error("'{combinator}' accepts only filter operators, got '{found}'")]
    NotAFilter {
        combinator: &'static str,
        found: &'static str,
    },

    /// JSON parse error while building records.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (flat objects of scalars).
    #[error("shape mismatch: {message}")]
    ShapeMismatch { message: String },
}
