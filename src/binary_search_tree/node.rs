use core::fmt::{self, Formatter, Display};
use crate::storage::Storage;

/// A node of a binary search tree.
///
/// Created by the binary search tree internally and only publicly exposed so that binary search tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T> {
    pub(super) value: T,
    pub(super) parent: Option<usize>,
    pub(super) left: Option<usize>,
    pub(super) right: Option<usize>,
    /// Free for use by algorithms built on top of the tree; never read by the tree itself.
    pub(super) tag: i32,
}
impl<T> Node<T> {
    #[inline(always)]
    pub(super) const fn leaf(value: T, parent: Option<usize>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
            tag: 0,
        }
    }
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub(super) fn into_value(self) -> T {
        self.value
    }
}
impl<T: Ord> Node<T> {
    /// Returns the key of the node holding the smallest value greater than the one of this node, or `None` if this node holds the maximum.
    ///
    /// Without a right subtree, the successor is the first ancestor holding a greater value: every node of an ancestor's left subtree is less than that ancestor, so ancestors reached from a right subtree are skipped by the comparison alone.
    pub(super) fn successor<S>(&self, storage: &S) -> Option<usize>
    where S: Storage<Element = Self>,
    {
        if let Some(mut key) = self.right {
            while let Some(left) = node_at(storage, key).left {
                key = left;
            }
            return Some(key);
        }
        let mut ancestor = self.parent;
        while let Some(key) = ancestor {
            let node = node_at(storage, key);
            if node.value > self.value {
                return Some(key);
            }
            ancestor = node.parent;
        }
        None
    }
}

/// Fetches the node at a key which is known to be present: links between nodes and keys held by borrowed cursors always are.
#[inline(always)]
pub(super) fn node_at<T, S>(storage: &S, key: usize) -> &Node<T>
where S: Storage<Element = Node<T>>,
{
    debug_assert!(
        key < storage.len(),
        "\
debug key check failed: tried to reference key {} which is not present in the storage",
        key,
    );
    unsafe {
        // SAFETY: nodes are never removed individually, and the whole storage is only cleared
        // through a mutable borrow of the tree, which cannot coexist with a cursor
        storage.get_unchecked(key)
    }
}
#[inline(always)]
pub(super) fn node_at_mut<T, S>(storage: &mut S, key: usize) -> &mut Node<T>
where S: Storage<Element = Node<T>>,
{
    debug_assert!(
        key < storage.len(),
        "\
debug key check failed: tried to reference key {} which is not present in the storage",
        key,
    );
    unsafe {
        // SAFETY: as above
        storage.get_unchecked_mut(key)
    }
}

/// Diagnostic view of a node, produced by [`Cursor::node_info`].
///
/// Displays as `[k:<key>; p:<parent>; l:<left>; r:<right>; i:<tag>; d:<value>]`, with `-` standing in for absent links.
///
/// [`Cursor::node_info`]: struct.Cursor.html#method.node_info " "
#[derive(Copy, Clone, Debug)]
pub struct NodeInfo<'a, T> {
    pub(super) key: usize,
    pub(super) node: &'a Node<T>,
}
impl<T: Display> Display for NodeInfo<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[k:{}; p:{}; l:{}; r:{}; i:{}; d:{}]",
            self.key,
            Link(self.node.parent),
            Link(self.node.left),
            Link(self.node.right),
            self.node.tag,
            self.node.value,
        )
    }
}

struct Link(Option<usize>);
impl Display for Link {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => Display::fmt(&key, f),
            None => f.pad("-"),
        }
    }
}
