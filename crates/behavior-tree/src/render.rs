//! Indented text dumps of a (sub)tree.
//!
//! Purely diagnostic: the output shows structure and cached statuses and is
//! never consulted for control flow.

use std::fmt::Write;

use crate::Behavior;

/// Spaces per depth level used by [`Behavior::render`].
pub const DEFAULT_INDENT: usize = 2;

/// Renders `node` and all its descendants, one label per line.
pub fn subtree<C, N>(node: &N, indent: usize) -> String
where
    N: Behavior<C> + ?Sized,
{
    let mut out = String::new();
    write_node::<C, N>(&mut out, node, 0, indent);
    out
}

/// Appends `node` at `depth` to `out`, preceded by a newline.
///
/// Used by [`BehaviorTree`](crate::BehaviorTree) so its own header stays on
/// the first line.
pub(crate) fn append_subtree<C, N>(out: &mut String, node: &N, depth: usize, indent: usize)
where
    N: Behavior<C> + ?Sized,
{
    out.push('\n');
    write_node::<C, N>(out, node, depth, indent);
}

fn write_node<C, N>(out: &mut String, node: &N, depth: usize, indent: usize)
where
    N: Behavior<C> + ?Sized,
{
    let _ = write!(out, "{:width$}{}", "", node.label(), width = depth * indent);
    for child in node.children() {
        out.push('\n');
        write_node::<C, dyn Behavior<C>>(out, child, depth + 1, indent);
    }
}
