//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, handed mutably to every tick so leaves can read and
//! update host state. Hosts with nothing to share use `()`.

use crate::{Status, render};

/// Owned, type-erased behavior node.
///
/// Every composite and decorator exclusively owns its children through this
/// type, so a subtree lives and dies with its parent.
pub type Node<C> = Box<dyn Behavior<C>>;

/// The built-in node kinds, used for labels and introspection.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Action,
    Condition,
    Sequence,
    Selector,
    Parallel,
    Composite,
    Retry,
    Repeat,
    RepeatN,
    Invert,
    AlwaysSuccess,
    AlwaysFailure,
    WhileSuccess,
    WhileFailure,
    Forever,
    WithTimeout,
    Log,
    /// A node implemented by the host application.
    Custom,
}

/// A behavior tree node that can be ticked against a context.
///
/// Implementations cache the status of their last tick so that
/// [`status`](Behavior::status) is a pure accessor between ticks.
pub trait Behavior<C>: Send {
    /// Advance this node by one step.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Leaves can read
    ///   host state and modify it (e.g., to store intermediate results).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior needs more ticks
    /// - `Status::Ready` if the behavior has not started yet
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Return this node and every descendant to `Ready`.
    ///
    /// Idempotent. Counters and timers are cleared; no host callback runs.
    fn reset(&mut self) -> Status;

    /// Status observed on the last tick, `Ready` before any tick.
    fn status(&self) -> Status;

    /// Kind of this node, `Custom` for host-defined behaviors.
    fn kind(&self) -> NodeKind {
        NodeKind::Custom
    }

    /// One-line description used when rendering the tree.
    fn label(&self) -> String {
        format!("{} ({})", self.kind(), self.status())
    }

    /// Direct children in tick order.
    fn children(&self) -> Vec<&dyn Behavior<C>> {
        Vec::new()
    }

    /// Multi-line dump of this subtree, two spaces per level.
    fn render(&self) -> String {
        render::subtree::<C, Self>(self, render::DEFAULT_INDENT)
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) -> Status {
        (**self).reset()
    }

    #[inline]
    fn status(&self) -> Status {
        (**self).status()
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        (**self).children()
    }
}

/// Ticks an optional child, reporting `missing` when the slot is empty.
pub(crate) fn tick_slot<C>(slot: &mut Option<Node<C>>, ctx: &mut C, missing: Status) -> Status {
    match slot {
        Some(child) => child.tick(ctx),
        None => missing,
    }
}

/// Resets an optional child if present.
pub(crate) fn reset_slot<C>(slot: &mut Option<Node<C>>) {
    if let Some(child) = slot {
        let _ = child.reset();
    }
}

/// Borrows an optional child for introspection.
pub(crate) fn slot_children<C>(slot: &Option<Node<C>>) -> Vec<&dyn Behavior<C>> {
    slot.iter().map(|child| child.as_ref() as &dyn Behavior<C>).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        status: Status,
    }

    impl Behavior<u32> for Counter {
        fn tick(&mut self, ctx: &mut u32) -> Status {
            *ctx += 1;
            self.status = Status::Success;
            self.status
        }

        fn reset(&mut self) -> Status {
            self.status = Status::Ready;
            self.status
        }

        fn status(&self) -> Status {
            self.status
        }
    }

    #[test]
    fn custom_behavior_gets_default_introspection() {
        let mut node: Node<u32> = Box::new(Counter {
            status: Status::Ready,
        });
        let mut ctx = 0;

        assert_eq!(node.kind(), NodeKind::Custom);
        assert_eq!(node.label(), "Custom (Ready)");
        assert!(node.children().is_empty());

        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(ctx, 1);
        assert_eq!(node.render(), "Custom (Success)");

        assert_eq!(node.reset(), Status::Ready);
        assert_eq!(node.status(), Status::Ready);
    }

    #[test]
    fn node_kind_round_trips_through_strings() {
        assert_eq!(NodeKind::RepeatN.to_string(), "RepeatN");
        assert_eq!("WithTimeout".parse::<NodeKind>(), Ok(NodeKind::WithTimeout));
        assert_eq!(NodeKind::AlwaysSuccess.as_ref(), "AlwaysSuccess");
    }
}
