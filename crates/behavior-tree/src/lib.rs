//! Behavior tree execution engine.
//!
//! This library composes hierarchical decision logic (game AI, robot
//! controllers) out of small reusable nodes. The host ticks the tree once per
//! control-loop iteration; each tick walks the tree depth-first, left to right,
//! and statuses flow back up through the composites and decorators.
//!
//! - **Four statuses**: `Ready`, `Running`, `Success`, `Failure`
//! - **Single-threaded ticks**: no suspension points, no background tasks;
//!   `Parallel` is logical fan-out, not threads
//! - **Explicit cancellation**: `reset` is the only way to abort a running
//!   subtree
//! - **Failure is a value**: nothing in a tick panics or returns an error
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, [`Node`] is its boxed form
//! - [`Status`]: Result of a tick
//! - Leaf nodes: [`Action`], [`Condition`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`], [`Composite`]
//! - Decorator nodes: [`Retry`], [`Repeat`], [`RepeatN`], [`Invert`],
//!   [`AlwaysSuccess`], [`AlwaysFailure`], [`WhileSuccess`], [`WhileFailure`],
//!   [`Forever`], [`WithTimeout`], [`Log`]
//! - [`BehaviorTree`]: Root holder used by the host's control loop

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod render;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Node, NodeKind};
pub use composite::{Composite, Parallel, Selector, Sequence};
pub use decorator::{
    AlwaysFailure, AlwaysSuccess, Clock, Forever, Invert, Log, LogRecord, LogSink, Repeat,
    RepeatN, Retry, SystemClock, TracingSink, WhileFailure, WhileSuccess, WithTimeout,
};
pub use error::{StatusError, TreeError};
pub use leaf::{Action, Condition};
pub use status::Status;
pub use tree::{BehaviorTree, TreeConfig};
