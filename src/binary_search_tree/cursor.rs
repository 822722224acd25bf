use core::{
    fmt::{self, Formatter, Debug},
    ops::Deref,
    ptr,
};
use crate::storage::{Storage, DefaultStorage};
use super::{
    BinarySearchTree,
    InvalidCursorError,
    Iter,
    Node,
    NodeInfo,
};

/// A position inside a binary search tree: either a node, or the end of the tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to walk the tree in sorted order. The cursor borrows the tree, which means that the tree cannot be modified for as long as the cursor exists.
///
/// Two cursors are equal if they point to the same node of the same tree, or are both end cursors of the same tree.
pub struct Cursor<'a, T, S = DefaultStorage<Node<T>>>
where S: Storage<Element = Node<T>>,
{
    tree: &'a BinarySearchTree<T, S>,
    key: Option<usize>,
}
impl<'a, T, S> Cursor<'a, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline(always)]
    pub(super) fn new(tree: &'a BinarySearchTree<T, S>, key: Option<usize>) -> Self {
        debug_assert!(
            key.map_or(true, |key| tree.storage.get(key).is_some()),
            "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
            key,
        );
        Self { tree, key }
    }
    /// Returns `true` if this is the end cursor, i.e. it points past the greatest value; `false` otherwise.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const_option is not stable
    pub fn is_end(&self) -> bool {
        self.key.is_none()
    }
    /// Returns the raw storage key for the node, or `None` for the end cursor.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn raw_key(&self) -> Option<usize> {
        self.key
    }
    /// Returns a reference to the value the cursor points to, or `None` for the end cursor.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.key.map(|key| &self.tree.node(key).value)
    }
    /// Returns a reference to the value the cursor points to.
    ///
    /// # Errors
    /// Fails for the end cursor.
    #[inline]
    pub fn try_value(&self) -> Result<&'a T, InvalidCursorError> {
        self.get().ok_or(InvalidCursorError)
    }
    /// Returns a reference to the value the cursor points to.
    ///
    /// # Panics
    /// Panics for the end cursor. See [`try_value`] and [`get`] for non-panicking versions.
    ///
    /// [`try_value`]: #method.try_value " "
    /// [`get`]: #method.get " "
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &'a T {
        match self.try_value() {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
    /// Returns the auxiliary tag of the node, or `None` for the end cursor.
    #[inline]
    pub fn tag(&self) -> Option<i32> {
        self.key.map(|key| self.tree.node(key).tag)
    }
    /// Returns a view of the node the cursor points to which displays its key, links, tag and value, or `None` for the end cursor. Meant for debugging.
    #[inline]
    pub fn node_info(&self) -> Option<NodeInfo<'a, T>> {
        let tree = self.tree;
        self.key.map(|key| NodeInfo {
            key,
            node: tree.node(key),
        })
    }
}
impl<'a, T, S> Cursor<'a, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    /// Moves the cursor to the next greater value, or to the end if it pointed to the greatest one.
    ///
    /// # Errors
    /// Fails for the end cursor, which is left untouched.
    pub fn try_advance(&mut self) -> Result<(), InvalidCursorError> {
        let key = self.key.ok_or(InvalidCursorError)?;
        self.key = self.tree.node(key).successor(&self.tree.storage);
        Ok(())
    }
    /// Moves the cursor to the next greater value, or to the end if it pointed to the greatest one. Returns the cursor itself to allow chaining.
    ///
    /// # Panics
    /// Panics for the end cursor. See [`try_advance`] for a non-panicking version.
    ///
    /// [`try_advance`]: #method.try_advance " "
    #[inline]
    #[track_caller]
    pub fn advance(&mut self) -> &mut Self {
        if let Err(error) = self.try_advance() {
            panic!("{}", error);
        }
        self
    }
    /// Moves the cursor to the next greater value like [`advance`], returning the position it had before moving.
    ///
    /// # Panics
    /// Panics for the end cursor.
    ///
    /// [`advance`]: #method.advance " "
    #[inline]
    #[track_caller]
    pub fn advance_post(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }
}

impl<T, S> Deref for Cursor<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    type Target = T;

    /// Panics for the end cursor.
    #[inline(always)]
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}
impl<T, S> Copy for Cursor<'_, T, S>
where S: Storage<Element = Node<T>>,
{}
impl<T, S> Clone for Cursor<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, S> PartialEq for Cursor<'_, T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.key == other.key
    }
}
impl<T, S> Eq for Cursor<'_, T, S>
where S: Storage<Element = Node<T>>,
{}
impl<T, S> Debug for Cursor<'_, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("key", &self.key)
            .field("value", &self.get())
            .finish()
    }
}
impl<'a, T, S> IntoIterator for Cursor<'a, T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S>;

    /// Returns an iterator over the value the cursor points to and all values after it.
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.tree, self.key)
    }
}
