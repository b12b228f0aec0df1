//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! The child slot may be empty; every decorator documents what it reports in
//! that case, and they do not all agree.
//!
//! - Result rewriting: [`Invert`] (NOT logic), [`AlwaysSuccess`],
//!   [`AlwaysFailure`], [`Forever`]
//! - Loops: [`Retry`], [`Repeat`], [`RepeatN`], [`WhileSuccess`],
//!   [`WhileFailure`]
//! - Deadlines: [`WithTimeout`]
//! - Observation: [`Log`]
//!
//! `reset` on any decorator resets its child and clears counters and timers.

mod log;
mod repeat;
mod timeout;
mod transform;

pub use log::{Log, LogRecord, LogSink, TracingSink, level_for};
pub use repeat::{Repeat, RepeatN, Retry, WhileFailure, WhileSuccess};
pub use timeout::{Clock, SystemClock, WithTimeout};
pub use transform::{AlwaysFailure, AlwaysSuccess, Forever, Invert};
