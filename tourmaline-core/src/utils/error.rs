use std::fmt;

/// An error type for failures which abort a route computation.
///
/// Unreachable node pairs are deliberately not part of this taxonomy: search
/// algorithms report them as sentinel results (empty path, infinite distance)
/// and callers decide how to degrade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// Input was rejected before any search has run.
    InvalidInput(String),
    /// Start or end node is absent from the graph.
    NodeNotFound(String),
    /// An external distance matrix source failed or returned an unusable payload.
    MatrixSource(String),
}

/// A type alias for result type with `RouteError`.
pub type RouteResult<T> = Result<T, RouteError>;

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            RouteError::NodeNotFound(msg) => write!(f, "node not found: {msg}"),
            RouteError::MatrixSource(msg) => write!(f, "map service unavailable: {msg}"),
        }
    }
}

impl std::error::Error for RouteError {}
