//! Deadline decorator and the clock it polls.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::behavior::{reset_slot, slot_children};
use crate::{Behavior, Node, NodeKind, Status};

/// Source of the current time for time-aware nodes.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Fails its child if it keeps running past a deadline.
///
/// # Semantics
///
/// The deadline starts on the first tick after construction or reset, not
/// when the node is built. On every tick the child is ticked first:
/// - `Success` or `Failure` pass through, even after the deadline
/// - `Running` or `Ready` pass through until `duration` has elapsed, then
///   the node reports `Failure`
/// - No child: `Failure`
///
/// Time is only checked when the node is ticked; there is no timer thread.
pub struct WithTimeout<C> {
    child: Option<Node<C>>,
    duration: Duration,
    clock: Arc<dyn Clock>,
    started_at: Option<Instant>,
    status: Status,
}

impl<C> WithTimeout<C> {
    /// Creates a deadline of `duration` around `child`, using the wall clock.
    pub fn new(child: Node<C>, duration: Duration) -> Self {
        Self::with_clock(child, duration, Arc::new(SystemClock))
    }

    /// Creates a deadline measured with a custom clock.
    pub fn with_clock(child: Node<C>, duration: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            child: Some(child),
            duration,
            clock,
            started_at: None,
            status: Status::Ready,
        }
    }

    /// Creates a deadline node with no child.
    pub fn empty(duration: Duration) -> Self {
        Self {
            child: None,
            duration,
            clock: Arc::new(SystemClock),
            started_at: None,
            status: Status::Ready,
        }
    }

    /// Allowed running time.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Instant of the first tick since construction or reset.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}

impl<C> Behavior<C> for WithTimeout<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let Some(child) = &mut self.child else {
            self.status = Status::Failure;
            return self.status;
        };

        let started_at = *self.started_at.get_or_insert_with(|| self.clock.now());

        self.status = match child.tick(ctx) {
            finished @ (Status::Success | Status::Failure) => finished,
            pending => {
                if self.clock.now().saturating_duration_since(started_at) >= self.duration {
                    Status::Failure
                } else {
                    pending
                }
            }
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_slot(&mut self.child);
        self.started_at = None;
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::WithTimeout
    }

    fn label(&self) -> String {
        format!("WithTimeout ({}, {:?})", self.status, self.duration)
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}
