//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.
//!
//! ```rust
//! use behavior_tree::builder::*;
//! use behavior_tree::{BehaviorTree, Status};
//!
//! let mut tree = BehaviorTree::new(selector(vec![
//!     sequence(vec![
//!         condition(|hp: &mut u32| if *hp > 20 { Status::Success } else { Status::Failure }),
//!         action(|_: &mut u32| Status::Success),
//!     ]),
//!     retry(action(|hp: &mut u32| {
//!         *hp += 10;
//!         Status::Running
//!     })),
//! ]));
//!
//! let mut hp = 5;
//! assert_eq!(tree.tick(&mut hp), Status::Running);
//! assert_eq!(hp, 15);
//! ```

use std::time::Duration;

use crate::{
    Action, AlwaysFailure, AlwaysSuccess, Composite, Condition, Forever, Invert, Log, Node,
    Parallel, Repeat, RepeatN, Retry, Selector, Sequence, Status, WhileFailure, WhileSuccess,
    WithTimeout,
};

/// Creates an action node.
///
/// Shorthand for `Box::new(Action::new(run))`.
#[inline]
pub fn action<C: 'static>(run: impl FnMut(&mut C) -> Status + Send + 'static) -> Node<C> {
    Box::new(Action::new(run))
}

/// Creates a condition node.
///
/// Shorthand for `Box::new(Condition::new(check))`.
#[inline]
pub fn condition<C: 'static>(check: impl FnMut(&mut C) -> Status + Send + 'static) -> Node<C> {
    Box::new(Condition::new(check))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Box::new(Selector::new(children))
}

/// Creates a parallel node.
#[inline]
pub fn parallel<C: 'static>(children: Vec<Node<C>>, min_success_count: usize) -> Node<C> {
    Box::new(Parallel::new(children, min_success_count))
}

/// Creates a composite gating `child` behind `conditions`.
#[inline]
pub fn composite<C: 'static>(conditions: Vec<Node<C>>, child: Node<C>) -> Node<C> {
    Box::new(Composite::new(conditions, child))
}

/// Creates a retry node.
#[inline]
pub fn retry<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Retry::new(child))
}

/// Creates a repeat node.
#[inline]
pub fn repeat<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Repeat::new(child))
}

/// Creates a counted repeat node.
#[inline]
pub fn repeat_n<C: 'static>(child: Node<C>, max_count: u32) -> Node<C> {
    Box::new(RepeatN::new(child, max_count))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Invert::new(child))`.
#[inline]
pub fn invert<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Invert::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSuccess::new(child))`.
#[inline]
pub fn always_success<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(AlwaysSuccess::new(child))
}

/// Creates an always-fail node.
#[inline]
pub fn always_failure<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(AlwaysFailure::new(child))
}

/// Creates a loop that runs while `child` succeeds.
#[inline]
pub fn while_success<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(WhileSuccess::new(child))
}

/// Creates a loop that runs while `child` fails.
#[inline]
pub fn while_failure<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(WhileFailure::new(child))
}

/// Creates a node that ticks `child` forever.
#[inline]
pub fn forever<C: 'static>(child: Node<C>) -> Node<C> {
    Box::new(Forever::new(child))
}

/// Creates a wall-clock deadline around `child`.
#[inline]
pub fn with_timeout<C: 'static>(child: Node<C>, duration: Duration) -> Node<C> {
    Box::new(WithTimeout::new(child, duration))
}

/// Creates a logging wrapper around `child`.
#[inline]
pub fn log<C: 'static>(child: Node<C>, message: impl Into<String>) -> Node<C> {
    Box::new(Log::new(child, message))
}
