use thiserror::Error;

/// Errors from [`crate::directions::DirectionsProvider::walking_path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The service found no walkable path between the two points.
    #[error("no walking route between the requested points")]
    NoRoute,
    /// The service could not be reached or returned a malformed answer.
    ///
    /// Callers are expected to degrade to a straight line rather than
    /// surface this to the visitor.
    #[error("directions service failed: {message}")]
    Service {
        /// Human-readable description of the failure.
        message: String,
    },
}
