use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{self, Formatter, Debug},
    iter::FromIterator,
};
use crate::storage::{Storage, DefaultStorage};
use super::{
    node::{node_at, node_at_mut},
    Cursor,
    InsertError,
    InvalidKeyError,
    Iter,
    Keys,
    Node,
};

/// An unbalanced binary search tree holding a sorted set of unique values.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone)]
pub struct BinarySearchTree<T, S = DefaultStorage<Node<T>>>
where S: Storage<Element = Node<T>>,
{
    pub(super) storage: S,
    pub(super) root: Option<usize>,
}

/// Where the search for a value ended.
enum Search {
    Found(usize),
    Vacant(Slot),
}
/// A free position for a new leaf.
#[derive(Copy, Clone)]
enum Slot {
    Root,
    Left(usize),
    Right(usize),
}

impl<T, S> BinarySearchTree<T, S>
where S: Storage<Element = Node<T>>,
{
    /// Creates an empty tree. Dynamically-allocated storages do not allocate memory until the first value is inserted.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified capacity does not match it.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }
    /// Returns the number of values in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        // Nodes are never removed individually, so every node in the storage is reachable
        self.storage.len()
    }
    /// Returns `true` if the tree holds no values, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of values the tree can hold without reallocating its storage.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves capacity in the storage for at least `additional` more values.
    ///
    /// # Panics
    /// Fixed-capacity storages panic if the requested capacity exceeds theirs.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the capacity of the storage as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
    /// Removes and drops every value in the tree, leaving it empty. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        let released = self.len();
        self.storage.clear();
        self.root = None;
        tracing::debug!(released, "cleared tree");
    }
    /// Returns the end cursor, which points past the greatest value of the tree.
    #[inline(always)]
    pub fn end(&self) -> Cursor<'_, T, S> {
        Cursor::new(self, None)
    }
    /// Returns the auxiliary tag of the node at the specified raw key, or `None` if there is no such node.
    ///
    /// The tag is zero for new nodes and is never read or changed by the tree itself; it is reserved for algorithms built on top of it, such as marking subtrees.
    #[inline]
    pub fn tag(&self, key: usize) -> Option<i32> {
        self.storage.get(key).map(|node| node.tag)
    }
    /// Sets the auxiliary tag of the node at the specified raw key, returning the previous one.
    ///
    /// # Errors
    /// Fails if no node exists at the specified key.
    #[inline]
    pub fn set_tag(&mut self, key: usize, tag: i32) -> Result<i32, InvalidKeyError> {
        let node = self.storage.get_mut(key).ok_or(InvalidKeyError { key })?;
        Ok(core::mem::replace(&mut node.tag, tag))
    }

    #[inline(always)]
    pub(super) fn node(&self, key: usize) -> &Node<T> {
        node_at(&self.storage, key)
    }
    #[inline(always)]
    fn node_mut(&mut self, key: usize) -> &mut Node<T> {
        node_at_mut(&mut self.storage, key)
    }
    /// Descends along left children, returning the key of the smallest value in the subtree.
    pub(super) fn leftmost(&self, mut key: usize) -> usize {
        while let Some(left) = self.node(key).left {
            key = left;
        }
        key
    }
    fn rightmost(&self, mut key: usize) -> usize {
        while let Some(right) = self.node(key).right {
            key = right;
        }
        key
    }
    fn search<Q>(&self, value: &Q) -> Search
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;
        while let Some(key) = current {
            let node = self.node(key);
            match value.cmp(node.value.borrow()) {
                Ordering::Less => {
                    slot = Slot::Left(key);
                    current = node.left;
                }
                Ordering::Greater => {
                    slot = Slot::Right(key);
                    current = node.right;
                }
                Ordering::Equal => return Search::Found(key),
            }
        }
        Search::Vacant(slot)
    }
    /// Adds a new leaf at the specified slot. The storage is left untouched if it has no room.
    fn attach(&mut self, value: T, slot: Slot) -> Result<usize, InsertError<T>> {
        let parent = match slot {
            Slot::Root => None,
            Slot::Left(parent) | Slot::Right(parent) => Some(parent),
        };
        let key = match self.storage.try_add(Node::leaf(value, parent)) {
            Ok(key) => key,
            Err(node) => {
                tracing::warn!(len = self.len(), "storage is out of capacity, value not inserted");
                return Err(InsertError::StorageFull(node.into_value()));
            }
        };
        match slot {
            Slot::Root => self.root = Some(key),
            Slot::Left(parent) => self.node_mut(parent).left = Some(key),
            Slot::Right(parent) => self.node_mut(parent).right = Some(key),
        }
        tracing::trace!(key, len = self.len(), "inserted node");
        Ok(key)
    }
}
impl<T, S> BinarySearchTree<T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    /// Inserts a value into the tree as a new leaf, unless an equal value is already present.
    ///
    /// Returns a cursor pointing to either the new node or the node holding the equal value, and `true` if a node was added or `false` if the equal value was already there; the tree is not modified in the latter case.
    ///
    /// # Panics
    /// Panics if the storage cannot make room for a new node. See [`try_insert`] for a non-panicking version.
    ///
    /// [`try_insert`]: #method.try_insert " "
    #[track_caller]
    pub fn insert(&mut self, value: T) -> (Cursor<'_, T, S>, bool) {
        match self.try_insert(value) {
            Ok(result) => result,
            Err(error) => panic!("{}", error),
        }
    }
    /// Inserts a value into the tree as a new leaf, unless an equal value is already present.
    ///
    /// See [`insert`] for the meaning of the returned values.
    ///
    /// # Errors
    /// Fails if the storage cannot make room for a new node, handing the value back. The tree is left unchanged. Inserting a value which is already present never fails, even if the storage is full.
    ///
    /// [`insert`]: #method.insert " "
    pub fn try_insert(&mut self, value: T) -> Result<(Cursor<'_, T, S>, bool), InsertError<T>> {
        let (key, inserted) = match self.search(&value) {
            Search::Found(key) => (key, false),
            Search::Vacant(slot) => (self.attach(value, slot)?, true),
        };
        Ok((Cursor::new(self, Some(key)), inserted))
    }
    /// Returns a cursor pointing to the node holding a value equal to the specified one, or the end cursor if there is none.
    #[inline]
    pub fn find<Q>(&self, value: &Q) -> Cursor<'_, T, S>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(value) {
            Search::Found(key) => Cursor::new(self, Some(key)),
            Search::Vacant(..) => self.end(),
        }
    }
    /// Returns `true` if the tree holds a value equal to the specified one, `false` otherwise.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self.search(value), Search::Found(..))
    }
    /// Returns a reference to the stored value equal to the specified one, or `None` if there is none.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(value) {
            Search::Found(key) => Some(&self.node(key).value),
            Search::Vacant(..) => None,
        }
    }
    /// Returns a cursor pointing to the smallest value, or the end cursor if the tree is empty.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, S> {
        Cursor::new(self, self.root.map(|root| self.leftmost(root)))
    }
    /// Returns a reference to the smallest value, or `None` if the tree is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.begin().get()
    }
    /// Returns a reference to the greatest value, or `None` if the tree is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.root.map(|root| &self.node(self.rightmost(root)).value)
    }
    /// Returns an iterator over the values in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S> {
        self.begin().into_iter()
    }
    /// Returns an iterator over the raw keys of the nodes, in ascending order of their values.
    ///
    /// The keys can be used with [`tag`] and [`set_tag`] once the iterator is dropped.
    ///
    /// [`tag`]: #method.tag " "
    /// [`set_tag`]: #method.set_tag " "
    #[inline]
    pub fn keys(&self) -> Keys<'_, T, S> {
        Keys::new(self, self.root.map(|root| self.leftmost(root)))
    }
}

impl<T, S> Default for BinarySearchTree<T, S>
where S: Storage<Element = Node<T>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, S> Debug for BinarySearchTree<T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
impl<T, S> Extend<T> for BinarySearchTree<T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
impl<T, S> FromIterator<T> for BinarySearchTree<T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
impl<'a, T, S> IntoIterator for &'a BinarySearchTree<T, S>
where
    S: Storage<Element = Node<T>>,
    T: Ord,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
