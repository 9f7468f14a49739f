//! A sideways ASCII drawing of a tree, used for its `Display` impl. The right subtree is drawn
//! above its parent and the left subtree below, so reading from the bottom up gives ascending
//! order:
//!
//! ```text
//!  ┌──5
//! ┌──4
//! | └──3
//! 2
//! └──1
//! ```
//!
//! This is a debugging aid and the exact layout may change.

use std::fmt::{self, Write};

use crate::node::Node;

/// Writes the diagram of the subtree rooted at `root`, one node per line.
pub(crate) fn write_diagram<T, W>(out: &mut W, root: &Node<T>) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    write_node(out, Some(root), "", "", "")
}

/// `top` prefixes lines above this node, `here` prefixes this node's own line, and `bottom`
/// prefixes lines below it.
fn write_node<T, W>(
    out: &mut W,
    node: Option<&Node<T>>,
    top: &str,
    here: &str,
    bottom: &str,
) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    let Some(node) = node else {
        return writeln!(out, "{here}nil");
    };

    if node.is_leaf() {
        return writeln!(out, "{here}{}", node.value());
    }

    write_node(
        out,
        node.right(),
        &format!("{top} "),
        &format!("{top}┌──"),
        &format!("{top}| "),
    )?;
    writeln!(out, "{here}{}", node.value())?;
    write_node(
        out,
        node.left(),
        &format!("{bottom}| "),
        &format!("{bottom}└──"),
        &format!("{bottom} "),
    )
}
