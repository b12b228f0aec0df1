//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic), [`Selector`] (OR logic),
//! [`Parallel`] (quorum voting) and [`Composite`] (a condition-gated child).
//!
//! None of these keep a resume pointer between ticks: every tick starts from
//! the first child, and any progress lives in the children themselves.

use crate::behavior::{reset_slot, slot_children};
use crate::{Behavior, Node, NodeKind, Status};

fn reset_all<C>(children: &mut [Node<C>]) {
    for child in children {
        let _ = child.reset();
    }
}

fn borrow_all<C>(children: &[Node<C>]) -> Vec<&dyn Behavior<C>> {
    children
        .iter()
        .map(|child| child.as_ref() as &dyn Behavior<C>)
        .collect()
}

/// Executes child behaviors in sequence until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - Any other status **stops the sequence immediately** and is returned as-is
/// - If all children return `Success`, the sequence returns `Success`
/// - With no children the sequence succeeds
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
    status: Status,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            status: Status::Ready,
        }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Success => continue, // Move to next child
                other => {
                    // Short-circuit
                    self.status = other;
                    return other;
                }
            }
        }
        // All children succeeded
        self.status = Status::Success;
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_all(&mut self.children);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        borrow_all(&self.children)
    }
}

/// Executes child behaviors in sequence until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - Any other status **stops the selector immediately** and is returned as-is
/// - If all children return `Failure`, the selector returns `Failure`
/// - With no children the selector fails
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Node<C>>,
    status: Status,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            status: Status::Ready,
        }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        // Try children in order until one does not fail
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Failure => continue, // Try next child
                other => {
                    self.status = other;
                    return other;
                }
            }
        }
        // All children failed
        self.status = Status::Failure;
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_all(&mut self.children);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Selector
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        borrow_all(&self.children)
    }
}

/// Ticks every child each tick and succeeds once enough of them do.
///
/// # Semantics
///
/// All children are ticked on every call, in order, including children that
/// already finished on an earlier tick. Results are counted and decided in
/// this order:
///
/// 1. `successes >= min_success_count`: `Success`
/// 2. `successes + in_progress < min_success_count`: `Failure` (the
///    threshold is out of reach even if every pending child succeeds)
/// 3. any child still `Running` or `Ready`: `Running`
/// 4. otherwise: `Failure`
///
/// `min_success_count` is clamped into `1..=children.len()` on the first
/// tick. With no children the node succeeds.
pub struct Parallel<C> {
    children: Vec<Node<C>>,
    min_success_count: usize,
    status: Status,
}

impl<C> Parallel<C> {
    /// Creates a parallel node requiring `min_success_count` successes.
    pub fn new(children: Vec<Node<C>>, min_success_count: usize) -> Self {
        Self {
            children,
            min_success_count,
            status: Status::Ready,
        }
    }

    /// Success threshold; reflects clamping once the node has been ticked.
    pub fn min_success_count(&self) -> usize {
        self.min_success_count
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.children.is_empty() {
            self.status = Status::Success;
            return self.status;
        }

        self.min_success_count = self.min_success_count.clamp(1, self.children.len());

        let mut successes = 0;
        let mut in_progress = 0;
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Success => successes += 1,
                Status::Failure => {}
                Status::Running | Status::Ready => in_progress += 1,
            }
        }

        self.status = if successes >= self.min_success_count {
            Status::Success
        } else if successes + in_progress < self.min_success_count {
            Status::Failure
        } else if in_progress > 0 {
            Status::Running
        } else {
            Status::Failure
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_all(&mut self.children);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Parallel
    }

    fn label(&self) -> String {
        format!(
            "Parallel ({}, MinSuccess: {})",
            self.status, self.min_success_count
        )
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        borrow_all(&self.children)
    }
}

/// Runs a child only while all of its gate conditions pass.
///
/// # Semantics
///
/// Conditions are ticked left to right like a [`Sequence`], except that the
/// gate only distinguishes three outcomes:
/// - `Success` continues to the next condition
/// - `Running` stops and returns `Running`
/// - `Failure` or `Ready` stops and returns `Failure`
///
/// Once every condition passes the child is ticked and its status returned
/// verbatim. Without a child a passing gate succeeds; without conditions the
/// child runs directly; with neither the node fails.
pub struct Composite<C> {
    conditions: Vec<Node<C>>,
    child: Option<Node<C>>,
    status: Status,
}

impl<C> Composite<C> {
    /// Creates a gate over `conditions` guarding `child`.
    pub fn new(conditions: Vec<Node<C>>, child: Node<C>) -> Self {
        Self {
            conditions,
            child: Some(child),
            status: Status::Ready,
        }
    }

    /// Creates a gate with no guarded child.
    pub fn gate(conditions: Vec<Node<C>>) -> Self {
        Self {
            conditions,
            child: None,
            status: Status::Ready,
        }
    }

    /// Creates a composite with no conditions around `child`.
    pub fn guarded(child: Node<C>) -> Self {
        Self::new(Vec::new(), child)
    }

    /// Creates a composite with neither conditions nor child.
    pub fn empty() -> Self {
        Self::gate(Vec::new())
    }

    fn check_conditions(&mut self, ctx: &mut C) -> Status {
        for condition in &mut self.conditions {
            match condition.tick(ctx) {
                Status::Success => continue,
                Status::Running => return Status::Running,
                Status::Failure | Status::Ready => return Status::Failure,
            }
        }
        Status::Success
    }
}

impl<C> Default for Composite<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> Behavior<C> for Composite<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.conditions.is_empty() && self.child.is_none() {
            self.status = Status::Failure;
            return self.status;
        }

        let gate = self.check_conditions(ctx);
        self.status = match (gate, &mut self.child) {
            (Status::Success, Some(child)) => child.tick(ctx),
            (gate, _) => gate,
        };
        self.status
    }

    fn reset(&mut self) -> Status {
        reset_all(&mut self.conditions);
        reset_slot(&mut self.child);
        self.status = Status::Ready;
        self.status
    }

    fn status(&self) -> Status {
        self.status
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Composite
    }

    fn children(&self) -> Vec<&dyn Behavior<C>> {
        let mut children = borrow_all(&self.conditions);
        children.extend(slot_children(&self.child));
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    struct TestContext {
        value: i32,
    }

    struct Increment {
        status: Status,
    }

    impl Increment {
        fn boxed() -> Node<TestContext> {
            Box::new(Increment {
                status: Status::Ready,
            })
        }
    }

    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
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

    fn returns(status: Status) -> Node<TestContext> {
        Box::new(Action::new(move |_: &mut TestContext| status))
    }

    /// Returns `status` and counts invocations in `ctx.value`.
    fn counted(status: Status) -> Node<TestContext> {
        Box::new(Action::new(move |ctx: &mut TestContext| {
            ctx.value += 1;
            status
        }))
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![Increment::boxed(), Increment::boxed()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(seq.status(), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            Increment::boxed(),
            returns(Status::Failure),
            Increment::boxed(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
    }

    #[test]
    fn sequence_stops_on_running_and_ready() {
        for pending in [Status::Running, Status::Ready] {
            let mut seq = Sequence::new(vec![Increment::boxed(), returns(pending), Increment::boxed()]);

            let mut ctx = TestContext { value: 0 };
            assert_eq!(seq.tick(&mut ctx), pending);
            assert_eq!(ctx.value, 1);
        }
    }

    #[test]
    fn sequence_restarts_from_first_child() {
        let mut seq = Sequence::new(vec![Increment::boxed(), returns(Status::Running)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut seq = Sequence::<TestContext>::new(Vec::new());

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(vec![
            returns(Status::Failure),
            Increment::boxed(),
            Increment::boxed(), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1); // Only one Increment executed
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![returns(Status::Failure), returns(Status::Failure)]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn selector_returns_running_without_trying_later_children() {
        let mut sel = Selector::new(vec![returns(Status::Running), Increment::boxed()]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn empty_selector_fails() {
        let mut sel = Selector::<TestContext>::new(Vec::new());

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn parallel_threshold_arithmetic() {
        let mut ctx = TestContext { value: 0 };

        let mut pending = Parallel::new(
            vec![
                returns(Status::Success),
                returns(Status::Failure),
                returns(Status::Running),
            ],
            2,
        );
        assert_eq!(pending.tick(&mut ctx), Status::Running);

        let mut unreachable = Parallel::new(
            vec![
                returns(Status::Success),
                returns(Status::Failure),
                returns(Status::Failure),
            ],
            2,
        );
        assert_eq!(unreachable.tick(&mut ctx), Status::Failure);

        let mut reached = Parallel::new(
            vec![
                returns(Status::Success),
                returns(Status::Running),
                returns(Status::Success),
            ],
            2,
        );
        assert_eq!(reached.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn parallel_counts_ready_as_in_progress() {
        let mut parallel = Parallel::new(vec![returns(Status::Ready), returns(Status::Success)], 2);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(parallel.tick(&mut ctx), Status::Running);
    }

    #[test]
    fn parallel_ticks_every_child_every_tick() {
        let mut parallel = Parallel::new(
            vec![counted(Status::Success), counted(Status::Failure), counted(Status::Running)],
            3,
        );

        let mut ctx = TestContext { value: 0 };
        assert_eq!(parallel.tick(&mut ctx), Status::Failure);
        assert_eq!(parallel.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 6);
    }

    #[test]
    fn parallel_clamps_min_success_count() {
        let mut ctx = TestContext { value: 0 };

        let mut too_low = Parallel::new(vec![returns(Status::Success), returns(Status::Success)], 0);
        assert_eq!(too_low.min_success_count(), 0);
        let _ = too_low.tick(&mut ctx);
        assert_eq!(too_low.min_success_count(), 1);

        let mut too_high = Parallel::new(vec![returns(Status::Success)], 5);
        let _ = too_high.tick(&mut ctx);
        assert_eq!(too_high.min_success_count(), 1);
    }

    #[test]
    fn empty_parallel_succeeds() {
        let mut parallel = Parallel::<TestContext>::new(Vec::new(), 3);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(parallel.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn parallel_reset_resets_children() {
        let mut parallel = Parallel::new(vec![returns(Status::Success), returns(Status::Failure)], 1);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(parallel.tick(&mut ctx), Status::Success);
        assert_eq!(parallel.reset(), Status::Ready);
        assert!(parallel.children().iter().all(|c| c.status() == Status::Ready));
        assert_eq!(
            parallel.render(),
            "Parallel (Ready, MinSuccess: 1)\n  Action (Ready)\n  Action (Ready)"
        );
    }

    #[test]
    fn composite_gate_outcomes() {
        let cases = [
            (Vec::new(), None, Status::Failure),
            (Vec::new(), Some(Status::Success), Status::Success),
            (Vec::new(), Some(Status::Failure), Status::Failure),
            (vec![Status::Success], None, Status::Success),
            (vec![Status::Success], Some(Status::Success), Status::Success),
            (vec![Status::Success], Some(Status::Failure), Status::Failure),
            (vec![Status::Success], Some(Status::Running), Status::Running),
            (vec![Status::Failure], Some(Status::Success), Status::Failure),
            (vec![Status::Running], Some(Status::Success), Status::Running),
            (vec![Status::Ready], Some(Status::Success), Status::Failure),
            (vec![Status::Success, Status::Failure], Some(Status::Success), Status::Failure),
            (vec![Status::Running, Status::Failure], Some(Status::Success), Status::Running),
        ];

        for (conditions, child, expected) in cases {
            let conditions = conditions.into_iter().map(returns).collect();
            let mut composite = match child {
                Some(child) => Composite::new(conditions, returns(child)),
                None => Composite::gate(conditions),
            };

            let mut ctx = TestContext { value: 0 };
            assert_eq!(composite.tick(&mut ctx), expected);
            assert_eq!(composite.status(), expected);
        }
    }

    #[test]
    fn composite_does_not_tick_child_when_gate_fails() {
        let mut composite = Composite::new(
            vec![counted(Status::Success), counted(Status::Failure), counted(Status::Success)],
            counted(Status::Success),
        );

        let mut ctx = TestContext { value: 0 };
        assert_eq!(composite.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn composite_without_conditions_runs_child() {
        let mut composite = Composite::guarded(Increment::boxed());

        let mut ctx = TestContext { value: 0 };
        assert_eq!(composite.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn composite_reset_resets_conditions_and_child() {
        let mut composite = Composite::new(vec![returns(Status::Success)], returns(Status::Running));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(composite.tick(&mut ctx), Status::Running);
        assert_eq!(composite.reset(), Status::Ready);
        assert_eq!(composite.children().len(), 2);
        assert!(composite.children().iter().all(|c| c.status() == Status::Ready));
    }
}
