use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use crate::storage::{Storage, DefaultStorage};
use super::{BinarySearchTree, Node};

/// An iterator over the raw keys of the nodes of a binary search tree, in ascending order of their values.
///
/// Created by [`BinarySearchTree::keys`]. Every step computes the in-order successor of the previous node, so the iterator does not allocate.
///
/// [`BinarySearchTree::keys`]: struct.BinarySearchTree.html#method.keys " "
pub struct Keys<'a, T, S = DefaultStorage<Node<T>>>
where S: Storage<Element = Node<T>>,
{
    tree: &'a BinarySearchTree<T, S>,
    next: Option<usize>,
    /// Upper bound on the number of keys left.
    remaining: usize,
}
impl<'a, T, S> Keys<'a, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline]
    pub(super) fn new(tree: &'a BinarySearchTree<T, S>, start: Option<usize>) -> Self {
        Self {
            tree,
            next: start,
            remaining: if start.is_some() { tree.len() } else { 0 },
        }
    }
}
impl<T, S> Iterator for Keys<'_, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let key = self.next?;
        self.next = self.tree.node(key).successor(&self.tree.storage);
        self.remaining -= 1;
        Some(key)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(..) => (1, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}
impl<T, S> FusedIterator for Keys<'_, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{}
impl<T, S> Clone for Keys<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}
impl<T, S> Debug for Keys<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("next", &self.next)
            .finish()
    }
}

/// An iterator over the values of a binary search tree in ascending order.
///
/// Created by [`BinarySearchTree::iter`], or by converting a [`Cursor`] into an iterator, in which case it starts at the cursor's position.
///
/// [`BinarySearchTree::iter`]: struct.BinarySearchTree.html#method.iter " "
/// [`Cursor`]: struct.Cursor.html " "
pub struct Iter<'a, T, S = DefaultStorage<Node<T>>>
where S: Storage<Element = Node<T>>,
{
    keys: Keys<'a, T, S>,
}
impl<'a, T, S> Iter<'a, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline]
    pub(super) fn new(tree: &'a BinarySearchTree<T, S>, start: Option<usize>) -> Self {
        Self {
            keys: Keys::new(tree, start),
        }
    }
}
impl<'a, T, S> Iterator for Iter<'a, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let tree = self.keys.tree;
        self.keys.next().map(|key| &tree.node(key).value)
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<T, S> FusedIterator for Iter<'_, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{}
impl<T, S> Clone for Iter<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}
impl<T, S> Debug for Iter<'_, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
