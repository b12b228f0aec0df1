//! Errors raised at the edges of the engine.
//!
//! Ticking never produces these: a failed behavior is [`Status::Failure`].
//! They only surface when converting foreign input into engine types or when
//! a caller explicitly asks for a checked operation.
//!
//! [`Status::Failure`]: crate::Status::Failure

/// A raw value could not be interpreted as a [`Status`](crate::Status).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// The numeric code does not name one of the four statuses.
    #[error("unknown status code {0}")]
    UnknownCode(u8),
}

/// Errors reported by checked [`BehaviorTree`](crate::BehaviorTree) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The tree was ticked without a root node.
    #[error("behavior tree has no root node")]
    MissingRoot,
}
