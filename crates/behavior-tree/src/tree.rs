//! Root wrapper driven by the host's control loop.

use std::fmt;

use crate::error::TreeError;
use crate::{Behavior, Node, Status, render};

/// Settings for a [`BehaviorTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    /// Name recorded on the tick span.
    pub name: String,
    /// Emit a `trace` event with the root status after every tick.
    pub trace_ticks: bool,
    /// Spaces per depth level when rendering.
    pub indent_width: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            name: "behavior_tree".to_owned(),
            trace_ticks: false,
            indent_width: render::DEFAULT_INDENT,
        }
    }
}

/// Holds the root node and exposes the tick/reset surface to the host.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, BehaviorTree, Status};
///
/// let mut tree = BehaviorTree::new(Box::new(Action::new(|ticks: &mut u32| {
///     *ticks += 1;
///     Status::Success
/// })));
///
/// let mut ticks = 0;
/// assert_eq!(tree.tick(&mut ticks), Status::Success);
/// assert_eq!(tree.reset().status(), Status::Ready);
/// ```
pub struct BehaviorTree<C> {
    root: Option<Node<C>>,
    config: TreeConfig,
    status: Status,
}

impl<C> BehaviorTree<C> {
    /// Creates a tree around `root` with default settings.
    pub fn new(root: Node<C>) -> Self {
        Self::with_config(Some(root), TreeConfig::default())
    }

    /// Creates a tree with no root; every tick fails.
    pub fn empty() -> Self {
        Self::with_config(None, TreeConfig::default())
    }

    /// Creates a tree with explicit settings.
    pub fn with_config(root: Option<Node<C>>, config: TreeConfig) -> Self {
        Self {
            root,
            config,
            status: Status::Ready,
        }
    }

    /// Ticks the root once, `Failure` if there is none.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let span = tracing::trace_span!("tick", tree = %self.config.name);
        let _enter = span.enter();

        self.status = match &mut self.root {
            Some(root) => root.tick(ctx),
            None => Status::Failure,
        };

        if self.config.trace_ticks {
            tracing::trace!(status = %self.status, "tree ticked");
        }
        self.status
    }

    /// Like [`tick`](Self::tick), but reports a missing root as an error.
    pub fn try_tick(&mut self, ctx: &mut C) -> Result<Status, TreeError> {
        if self.root.is_none() {
            self.status = Status::Failure;
            return Err(TreeError::MissingRoot);
        }
        Ok(self.tick(ctx))
    }

    /// Resets the whole tree to `Ready`.
    pub fn reset(&mut self) -> &mut Self {
        if let Some(root) = &mut self.root {
            let _ = root.reset();
        }
        self.status = Status::Ready;
        self
    }

    /// Status of the last tick, `Ready` before the first one.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Root node, if any.
    pub fn root(&self) -> Option<&dyn Behavior<C>> {
        self.root.as_deref().map(|root| root as &dyn Behavior<C>)
    }

    /// Mutable root node, if any.
    pub fn root_mut(&mut self) -> Option<&mut Node<C>> {
        self.root.as_mut()
    }

    /// Replaces the root and returns the previous one.
    ///
    /// Meant for swapping plans between runs; the tree status goes back to
    /// `Ready`.
    pub fn set_root(&mut self, root: Node<C>) -> Option<Node<C>> {
        self.status = Status::Ready;
        self.root.replace(root)
    }

    /// Settings this tree was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

impl<C> Default for BehaviorTree<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> fmt::Display for BehaviorTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = format!("BehaviorTree ({})", self.status);
        if let Some(root) = &self.root {
            render::append_subtree::<C, _>(&mut out, root, 1, self.config.indent_width);
        }
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Selector, Sequence};

    struct TestContext {
        value: i32,
    }

    fn returns(status: Status) -> Node<TestContext> {
        Box::new(Action::new(move |ctx: &mut TestContext| {
            ctx.value += 1;
            status
        }))
    }

    #[test]
    fn new_tree_is_ready() {
        let tree = BehaviorTree::new(returns(Status::Success));

        assert_eq!(tree.status(), Status::Ready);
        assert!(tree.root().is_some());
        assert_eq!(tree.config(), &TreeConfig::default());
    }

    #[test]
    fn tick_delegates_to_root_and_caches() {
        let mut tree = BehaviorTree::new(returns(Status::Running));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(tree.tick(&mut ctx), Status::Running);
        assert_eq!(tree.status(), Status::Running);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn tree_without_root_fails() {
        let mut tree = BehaviorTree::<TestContext>::empty();

        let mut ctx = TestContext { value: 0 };
        assert_eq!(tree.tick(&mut ctx), Status::Failure);
        assert_eq!(tree.try_tick(&mut ctx), Err(TreeError::MissingRoot));
        assert_eq!(tree.status(), Status::Failure);
        assert_eq!(tree.to_string(), "BehaviorTree (Failure)");
    }

    #[test]
    fn try_tick_with_root() {
        let mut tree = BehaviorTree::new(returns(Status::Failure));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(tree.try_tick(&mut ctx), Ok(Status::Failure));
    }

    #[test]
    fn reset_chains_and_resets_root() {
        let mut tree = BehaviorTree::new(Box::new(Sequence::new(vec![
            returns(Status::Success),
            returns(Status::Running),
        ])));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(tree.tick(&mut ctx), Status::Running);

        assert_eq!(tree.reset().status(), Status::Ready);
        let root = tree.root().unwrap();
        assert_eq!(root.status(), Status::Ready);
        assert!(root.children().iter().all(|c| c.status() == Status::Ready));
    }

    #[test]
    fn render_indents_by_depth() {
        let mut tree = BehaviorTree::new(Box::new(Selector::new(vec![
            returns(Status::Failure),
            Box::new(Sequence::new(vec![returns(Status::Success)])),
        ])));

        let mut ctx = TestContext { value: 0 };
        let _ = tree.tick(&mut ctx);
        assert_eq!(
            tree.to_string(),
            "BehaviorTree (Success)\n  Selector (Success)\n    Action (Failure)\n    Sequence (Success)\n      Action (Success)"
        );
    }

    #[test]
    fn custom_indent_width() {
        let config = TreeConfig {
            indent_width: 4,
            ..TreeConfig::default()
        };
        let tree = BehaviorTree::with_config(Some(returns(Status::Success)), config);

        assert_eq!(tree.to_string(), "BehaviorTree (Ready)\n    Action (Ready)");
    }

    #[test]
    fn set_root_swaps_plan() {
        let mut tree = BehaviorTree::new(returns(Status::Failure));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(tree.tick(&mut ctx), Status::Failure);

        let previous = tree.set_root(returns(Status::Success));
        assert_eq!(previous.map(|node| node.status()), Some(Status::Failure));
        assert_eq!(tree.status(), Status::Ready);
        assert_eq!(tree.tick(&mut ctx), Status::Success);
    }
}
