//! Decorators that rewrite a single tick's result.

use crate::behavior::{reset_slot, slot_children, tick_slot};
use crate::{Behavior, Node, NodeKind, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` and `Ready` pass through unchanged
/// - With no child the inverter fails
///
/// This is analogous to a logical NOT (!) operation, but only on the
/// terminal statuses: `Invert(Invert(x))` equals `x` for every status.
pub struct Invert<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> Invert<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates an inverter with no child.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for Invert<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for Invert<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.status = match &mut self.child {
            Some(child) => child.tick(ctx).invert(),
            None => Status::Failure,
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
        NodeKind::Invert
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// # Semantics
///
/// - The child is still ticked for its side effects
/// - If the child returns anything, **still returns `Success`**
/// - With no child, returns `Success`
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
/// - Error suppression in non-critical paths
pub struct AlwaysSuccess<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> AlwaysSuccess<C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates an always-succeed node with no child.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for AlwaysSuccess<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for AlwaysSuccess<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        // Execute child but ignore the result
        let _ = tick_slot(&mut self.child, ctx, Status::Success);
        self.status = Status::Success;
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
        NodeKind::AlwaysSuccess
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

/// Always returns `Failure`, regardless of the child's result.
///
/// The mirror of [`AlwaysSuccess`]: the child runs for its side effects and
/// the node fails, with or without a child.
pub struct AlwaysFailure<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> AlwaysFailure<C> {
    /// Creates a new always-fail wrapper around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates an always-fail node with no child.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for AlwaysFailure<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for AlwaysFailure<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let _ = tick_slot(&mut self.child, ctx, Status::Failure);
        self.status = Status::Failure;
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
        NodeKind::AlwaysFailure
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

/// Ticks its child forever and never finishes.
///
/// The child's status is discarded and the node always reports `Running`;
/// only a [`reset`](Behavior::reset) from above stops it. Terminal child
/// statuses are not reset here, so a child that should loop must reset
/// itself or be wrapped in [`Repeat`](super::Repeat).
pub struct Forever<C> {
    child: Option<Node<C>>,
    status: Status,
}

impl<C> Forever<C> {
    /// Creates a forever loop around the given child behavior.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates a forever node with no child; it idles in `Running`.
    pub fn empty() -> Self {
        Self {
            child: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for Forever<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for Forever<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let _ = tick_slot(&mut self.child, ctx, Status::Running);
        self.status = Status::Running;
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
        NodeKind::Forever
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}
