//! Leaf behavior nodes.
//!
//! Leaves are where host work happens. [`Action`] runs an operation and
//! [`Condition`] evaluates a check; both delegate to a host-supplied callback
//! whose result becomes the node's status. These are the only nodes with
//! host-visible side effects.

use crate::{Behavior, NodeKind, Status};

/// Host callback returning a status.
pub type StatusFn<C> = Box<dyn FnMut(&mut C) -> Status + Send>;

/// Host callback returning a raw status code (see [`Status::try_from`]).
pub type CodeFn<C> = Box<dyn FnMut(&mut C) -> u8 + Send>;

enum Callback<C> {
    Status(StatusFn<C>),
    Code(CodeFn<C>),
}

impl<C> Callback<C> {
    fn call(&mut self, kind: NodeKind, ctx: &mut C) -> Status {
        match self {
            Callback::Status(f) => f(ctx),
            Callback::Code(f) => {
                let code = f(ctx);
                Status::try_from(code).unwrap_or_else(|err| {
                    tracing::warn!(node = %kind, %err, "callback returned an unknown status; treating as Failure");
                    Status::Failure
                })
            }
        }
    }
}

fn run<C>(callback: &mut Option<Callback<C>>, kind: NodeKind, ctx: &mut C) -> Status {
    match callback {
        Some(callback) => callback.call(kind, ctx),
        None => Status::Failure,
    }
}

/// Executes a host operation.
///
/// # Semantics
///
/// - No callback: `Failure`
/// - Otherwise the callback's status, verbatim
/// - Reset never invokes the callback
pub struct Action<C> {
    run: Option<Callback<C>>,
    status: Status,
}

impl<C> Action<C> {
    /// Creates an action around the given operation.
    pub fn new(run: impl FnMut(&mut C) -> Status + Send + 'static) -> Self {
        Self {
            run: Some(Callback::Status(Box::new(run))),
            status: Status::Ready,
        }
    }

    /// Creates an action whose operation reports raw status codes.
    ///
    /// Codes outside the four known statuses are treated as `Failure`.
    pub fn from_code(run: impl FnMut(&mut C) -> u8 + Send + 'static) -> Self {
        Self {
            run: Some(Callback::Code(Box::new(run))),
            status: Status::Ready,
        }
    }

    /// Creates an action with no operation; it fails on every tick.
    pub fn empty() -> Self {
        Self {
            run: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for Action<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.status = run(&mut self.run, NodeKind::Action, ctx);
        self.status
    }

    fn reset(&mut self) -> Status {
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }
}

/// Evaluates a host check.
///
/// Identical contract to [`Action`]; kept separate so trees read as intended
/// and render the distinction.
pub struct Condition<C> {
    check: Option<Callback<C>>,
    status: Status,
}

impl<C> Condition<C> {
    /// Creates a condition around the given check.
    pub fn new(check: impl FnMut(&mut C) -> Status + Send + 'static) -> Self {
        Self {
            check: Some(Callback::Status(Box::new(check))),
            status: Status::Ready,
        }
    }

    /// Creates a condition from a boolean predicate: `true` is `Success`.
    pub fn predicate(mut check: impl FnMut(&C) -> bool + Send + 'static) -> Self {
        Self::new(move |ctx: &mut C| {
            if check(ctx) {
                Status::Success
            } else {
                Status::Failure
            }
        })
    }

    /// Creates a condition whose check reports raw status codes.
    pub fn from_code(check: impl FnMut(&mut C) -> u8 + Send + 'static) -> Self {
        Self {
            check: Some(Callback::Code(Box::new(check))),
            status: Status::Ready,
        }
    }

    /// Creates a condition with no check; it fails on every tick.
    pub fn empty() -> Self {
        Self {
            check: None,
            status: Status::Ready,
        }
    }
}

impl<C> Default for Condition<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.status = run(&mut self.check, NodeKind::Condition, ctx);
        self.status
    }

    fn reset(&mut self) -> Status {
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Condition
    }
}
