//! Looping decorators.
//!
//! Each of these turns a finished child run into another run by resetting the
//! child and reporting `Running`. At most one child run completes per tick;
//! the next run starts on the following tick.

use crate::behavior::{reset_slot, slot_children};
use crate::{Behavior, Node, NodeKind, Status};

/// Retries its child until it succeeds.
///
/// # Semantics
///
/// - `Success`: `Success`
/// - `Running` or `Ready`: `Running`
/// - `Failure`: the child is reset and the node reports `Running`
/// - No child: `Failure`
///
/// There is no retry limit; wrap in [`WithTimeout`](super::WithTimeout) to
/// bound it.
pub struct Retry<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> Retry<C> {
    /// Creates a retry loop around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates a retry node with no child.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for Retry<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for Retry<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let Some(child) = &mut self.child else {
            self.status = Status::Failure;
            return self.status;
        };

        self.status = match child.tick(ctx) {
            Status::Success => Status::Success,
            Status::Failure => {
                // Ignore failure, start over next tick
                let _ = child.reset();
                Status::Running
            }
            Status::Running | Status::Ready => Status::Running,
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_slot(&mut self.child);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Retry
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

/// Repeats its child until it fails.
///
/// # Semantics
///
/// - `Success`: the child is reset and the node reports `Running`
/// - `Running`: `Running`
/// - `Failure` or `Ready`: `Failure`
/// - No child: `Failure`
pub struct Repeat<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> Repeat<C> {
    /// Creates a repeat loop around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates a repeat node with no child.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for Repeat<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for Repeat<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let Some(child) = &mut self.child else {
            self.status = Status::Failure;
            return self.status;
        };

        self.status = match child.tick(ctx) {
            Status::Success => {
                let _ = child.reset();
                Status::Running
            }
            Status::Running => Status::Running,
            Status::Failure | Status::Ready => Status::Failure,
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_slot(&mut self.child);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Repeat
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

/// Runs its child to completion exactly `max_count` times.
///
/// # Semantics
///
/// While fewer than `max_count` runs have finished:
/// - `Running` or `Ready`: `Running`, the counter is untouched
/// - `Success` or `Failure`: the counter advances; if more runs remain the
///   child is reset and the node reports `Running`, otherwise the node
///   reports the child's final status
///
/// Once the counter reaches `max_count` the final status is frozen: further
/// ticks return it without ticking the child. A `max_count` of zero disables
/// counting and the node mirrors its child. With no child the node fails and
/// marks the counter exhausted.
pub struct RepeatN<C> {
    child: Option<Node<C>>,
    max_count: u32,
    count: u32,
    status: Status,
}

impl<C> RepeatN<C> {
    /// Creates a counted loop of `max_count` runs around `child`.
    pub fn new(child: Node<C>, max_count: u32) -> Self {
        Self {
            child: Some(child),
            max_count,
            count: 0,
            status: Status::Ready,
        }
    }

    /// Creates a counted loop with no child.
    pub fn empty(max_count: u32) -> Self {
        Self {
            child: None,
            max_count,
            count: 0,
            status: Status::Ready,
        }
    }

    /// Completed runs since construction or the last reset.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of runs this node performs.
    pub fn max_count(&self) -> u32 {
        self.max_count
    }
}

impl<C> Behavior<C> for RepeatN<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let Some(child) = &mut self.child else {
            self.count = self.max_count;
            self.status = Status::Failure;
            return self.status;
        };

        if self.max_count == 0 {
            self.status = child.tick(ctx);
            return self.status;
        }

        if self.count >= self.max_count {
            return self.status;
        }

        self.status = match child.tick(ctx) {
            Status::Running | Status::Ready => Status::Running,
            finished => {
                self.count += 1;
                if self.count < self.max_count {
                    let _ = child.reset();
                    Status::Running
                } else {
                    finished
                }
            }
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_slot(&mut self.child);
        self.count = 0;
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::RepeatN
    }

    fn label(&self) -> String {
        format!("RepeatN ({}, {}/{})", self.status, self.count, self.max_count)
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

/// Loops its child for as long as it keeps succeeding.
///
/// # Semantics
///
/// - `Success`: the child is reset and the node reports `Running`
/// - `Running`: `Running`
/// - `Failure` or `Ready`: `Failure`
/// - No child: `Failure`
pub struct WhileSuccess<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> WhileSuccess<C> {
    /// Creates a loop that continues while `child` succeeds.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates a loop with no child.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for WhileSuccess<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for WhileSuccess<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let Some(child) = &mut self.child else {
            self.status = Status::Failure;
            return self.status;
        };

        self.status = match child.tick(ctx) {
            Status::Success => {
                let _ = child.reset();
                Status::Running
            }
            Status::Running => Status::Running,
            Status::Failure | Status::Ready => Status::Failure,
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_slot(&mut self.child);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::WhileSuccess
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

/// Loops its child for as long as it keeps failing.
///
/// # Semantics
///
/// - `Failure`: the child is reset and the node reports `Running`
/// - `Running` or `Ready`: `Running`
/// - `Success`: `Success`
/// - No child: `Success`
pub struct WhileFailure<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> WhileFailure<C> {
    /// Creates a loop that continues while `child` fails.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates a loop with no child.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for WhileFailure<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for WhileFailure<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let Some(child) = &mut self.child else {
            self.status = Status::Success;
            return self.status;
        };

        self.status = match child.tick(ctx) {
            Status::Failure => {
                let _ = child.reset();
                Status::Running
            }
            Status::Running | Status::Ready => Status::Running,
            Status::Success => Status::Success,
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_slot(&mut self.child);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::WhileFailure
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}
