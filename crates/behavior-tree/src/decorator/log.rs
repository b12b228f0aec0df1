//! Logging decorator.
//!
//! [`Log`] reports each tick of its child to a [`LogSink`] and otherwise
//! stays out of the way. The engine never installs or configures a
//! subscriber; [`TracingSink`] simply forwards to whatever `tracing`
//! subscriber the host has set up.

use std::sync::Arc;

use tracing::Level;

use crate::behavior::{reset_slot, slot_children};
use crate::{Behavior, Node, NodeKind, Status};

/// One observation emitted by a [`Log`] node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Message configured on the node.
    pub message: &'a str,
    /// Status the node reported for this tick.
    pub status: Status,
    /// Kind of the wrapped child, `None` if the node has no child.
    pub child: Option<NodeKind>,
}

/// Destination for [`Log`] records.
pub trait LogSink: Send + Sync {
    /// Emit `record` at `level`.
    fn emit(&self, level: Level, record: &LogRecord<'_>);
}

/// Sink that forwards records to the `tracing` macros.
///
/// Events carry the fields `message`, `status` and `child` under the target
/// `behavior_tree::log`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, level: Level, record: &LogRecord<'_>) {
        let child = record.child.as_ref().map_or("nil", |kind| kind.as_ref());
        let message = record.message;
        let status = record.status.as_ref();

        // `tracing` needs the level at compile time.
        if level == Level::ERROR {
            tracing::error!(target: "behavior_tree::log", message, status, child);
        } else if level == Level::WARN {
            tracing::warn!(target: "behavior_tree::log", message, status, child);
        } else if level == Level::INFO {
            tracing::info!(target: "behavior_tree::log", message, status, child);
        } else if level == Level::DEBUG {
            tracing::debug!(target: "behavior_tree::log", message, status, child);
        } else {
            tracing::trace!(target: "behavior_tree::log", message, status, child);
        }
    }
}

/// Severity for a tick that reported `status`.
pub fn level_for(status: Status) -> Level {
    match status {
        Status::Success => Level::INFO,
        Status::Failure => Level::WARN,
        Status::Running | Status::Ready => Level::DEBUG,
    }
}

/// Passes its child's status through and logs every tick.
///
/// # Semantics
///
/// - The child's status is returned unchanged
/// - One record per tick, at `INFO` for `Success`, `WARN` for `Failure` and
///   `DEBUG` otherwise, unless a fixed level was set with
///   [`with_level`](Log::with_level)
/// - No child: a `WARN` record (or the fixed level) and `Failure`
pub struct Log<C> {
    child: Option<Node<C>>,
    message: String,
    level: Option<Level>,
    sink: Arc<dyn LogSink>,
    status: Status,
}

impl<C> Log<C> {
    /// Creates a logging wrapper around `child`.
    pub fn new(child: Node<C>, message: impl Into<String>) -> Self {
        Self {
            child: Some(child),
            message: message.into(),
            level: None,
            sink: Arc::new(TracingSink),
            status: Status::Ready,
        }
    }

    /// Creates a logging node with no child.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            child: None,
            message: message.into(),
            level: None,
            sink: Arc::new(TracingSink),
            status: Status::Ready,
        }
    }

    /// Logs every tick at `level` regardless of status.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Sends records to `sink` instead of `tracing`.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Message attached to every record.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Fixed severity, if one was set.
    pub fn level(&self) -> Option<Level> {
        self.level
    }
}

impl<C> Behavior<C> for Log<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let (status, child, default_level) = match &mut self.child {
            Some(child) => {
                let status = child.tick(ctx);
                (status, Some(child.kind()), level_for(status))
            }
            None => (Status::Failure, None, Level::WARN),
        };

        self.status = status;
        let record = LogRecord {
            message: &self.message,
            status,
            child,
        };
        self.sink.emit(self.level.unwrap_or(default_level), &record);
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
        NodeKind::Log
    }

    fn label(&self) -> String {
        if self.message.is_empty() {
            format!("Log ({})", self.status)
        } else {
            format!("Log ({}): {}", self.status, self.message)
        }
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        slot_children(&self.child)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{Action, Sequence};

    struct TestContext {
        value: i32,
    }

    #[derive(Default)]
    struct RecordingSink {
        records: Mutex<Vec<(Level, String, Status, Option<NodeKind>)>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<(Level, String, Status, Option<NodeKind>)> {
            std::mem::take(&mut *self.records.lock().unwrap())
        }
    }

    impl LogSink for RecordingSink {
        fn emit(&self, level: Level, record: &LogRecord<'_>) {
            self.records.lock().unwrap().push((
                level,
                record.message.to_owned(),
                record.status,
                record.child,
            ));
        }
    }

    fn returns(status: Status) -> Node<TestContext> {
        Box::new(Action::new(move |ctx: &mut TestContext| {
            ctx.value += 1;
            status
        }))
    }

    #[test]
    fn passes_status_through_with_matching_level() {
        let cases = [
            (Status::Success, Level::INFO),
            (Status::Failure, Level::WARN),
            (Status::Running, Level::DEBUG),
            (Status::Ready, Level::DEBUG),
        ];

        for (status, level) in cases {
            let sink = Arc::new(RecordingSink::default());
            let mut log = Log::new(returns(status), "watching").with_sink(sink.clone());

            let mut ctx = TestContext { value: 0 };
            assert_eq!(log.tick(&mut ctx), status);
            assert_eq!(log.status(), status);
            assert_eq!(
                sink.take(),
                vec![(level, "watching".to_owned(), status, Some(NodeKind::Action))]
            );
        }
    }

    #[test]
    fn one_record_per_tick() {
        let sink = Arc::new(RecordingSink::default());
        let mut log = Log::new(returns(Status::Success), "tick").with_sink(sink.clone());

        let mut ctx = TestContext { value: 0 };
        let _ = log.tick(&mut ctx);
        let _ = log.tick(&mut ctx);
        assert_eq!(ctx.value, 2);
        assert_eq!(sink.take().len(), 2);
    }

    #[test]
    fn fixed_level_overrides_status_mapping() {
        let sink = Arc::new(RecordingSink::default());
        let mut log = Log::new(returns(Status::Failure), "quiet")
            .with_level(Level::TRACE)
            .with_sink(sink.clone());

        let mut ctx = TestContext { value: 0 };
        assert_eq!(log.tick(&mut ctx), Status::Failure);
        assert_eq!(sink.take()[0].0, Level::TRACE);
    }

    #[test]
    fn without_child_warns_and_fails() {
        let sink = Arc::new(RecordingSink::default());
        let mut log = Log::<TestContext>::empty("orphan").with_sink(sink.clone());

        let mut ctx = TestContext { value: 0 };
        assert_eq!(log.tick(&mut ctx), Status::Failure);
        assert_eq!(
            sink.take(),
            vec![(Level::WARN, "orphan".to_owned(), Status::Failure, None)]
        );
    }

    #[test]
    fn records_child_kind() {
        let sink = Arc::new(RecordingSink::default());
        let child: Node<TestContext> = Box::new(Sequence::new(vec![returns(Status::Success)]));
        let mut log = Log::new(child, "seq").with_sink(sink.clone());

        let mut ctx = TestContext { value: 0 };
        let _ = log.tick(&mut ctx);
        assert_eq!(sink.take()[0].3, Some(NodeKind::Sequence));
    }

    #[test]
    fn reset_and_render() {
        let sink = Arc::new(RecordingSink::default());
        let mut log = Log::new(returns(Status::Success), "Action log").with_sink(sink);

        let mut ctx = TestContext { value: 0 };
        let _ = log.tick(&mut ctx);
        assert_eq!(log.render(), "Log (Success): Action log\n  Action (Success)");

        assert_eq!(log.reset(), Status::Ready);
        assert_eq!(log.children()[0].status(), Status::Ready);
        assert_eq!(Log::<TestContext>::empty("").label(), "Log (Ready)");
    }

    #[test]
    fn tracing_sink_accepts_every_level() {
        for level in [
            Level::ERROR,
            Level::WARN,
            Level::INFO,
            Level::DEBUG,
            Level::TRACE,
        ] {
            let mut log = Log::new(returns(Status::Running), "no subscriber").with_level(level);

            let mut ctx = TestContext { value: 0 };
            assert_eq!(log.tick(&mut ctx), Status::Running);
        }
    }
}
