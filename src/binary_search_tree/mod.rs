//! Unbalanced binary search trees holding a sorted set of unique values.
//!
//! The [Wikipedia article] on binary search trees covers their use cases and specifics in more detail.
//!
//! Values are inserted as new leaves and the tree is never restructured, which means that the order of insertion determines its shape: inserting values in sorted order degrades the tree into a list. Individual values cannot be removed; [`clear`] drops all of them at once.
//!
//! Positions inside the tree are represented by [`Cursor`]s, which borrow the tree and hold the key of a node inside its storage, or nothing at all for the *end cursor* which points past the greatest value. Cursors advance to the in-order successor of their node, so walking from [`begin`] to [`end`] visits the values in ascending order.
//!
//! # Example
//! ```rust
//! use sapling::binary_search_tree::BinarySearchTree;
//!
//! // The turbofish is needed to state that we are using the default storage method instead of
//! // asking the compiler to infer it, which would be impossible.
//! let mut tree = BinarySearchTree::<_>::new();
//! for value in [5, 3, 8, 1, 4].iter().copied() {
//!     tree.insert(value);
//! }
//!
//! // Inserting a value which is already present does not add a second node...
//! let (existing, inserted) = tree.insert(3);
//! assert!(!inserted);
//! // ...but still points to the node holding the value.
//! assert_eq!(*existing, 3);
//! assert_eq!(tree.len(), 5);
//!
//! // Cursors can be walked manually, C++-style...
//! let mut cursor = tree.begin();
//! let mut sorted = Vec::new();
//! while cursor != tree.end() {
//!     sorted.push(*cursor);
//!     cursor.advance();
//! }
//! assert_eq!(sorted, [1, 3, 4, 5, 8]);
//! // ...or replaced with regular iterators.
//! assert!(tree.iter().copied().eq(sorted));
//!
//! assert_eq!(tree.find(&4).get(), Some(&4));
//! assert!(tree.find(&9).is_end());
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! assert_eq!(tree.begin(), tree.end());
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_search_tree " "
//! [`clear`]: struct.BinarySearchTree.html#method.clear " "
//! [`begin`]: struct.BinarySearchTree.html#method.begin " "
//! [`end`]: struct.BinarySearchTree.html#method.end " "
//! [`Cursor`]: struct.Cursor.html " "

mod base;
mod cursor;
mod iter;
mod node;

pub use base::BinarySearchTree;
pub use cursor::Cursor;
pub use iter::{Iter, Keys};
pub use node::{Node, NodeInfo};

/// The error type returned when a cursor pointing past the end of the tree is dereferenced or advanced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cannot dereference or advance the end cursor")]
pub struct InvalidCursorError;

/// The error type returned by [`BinarySearchTree::try_insert`].
///
/// [`BinarySearchTree::try_insert`]: struct.BinarySearchTree.html#method.try_insert " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum InsertError<T> {
    /// The backing storage could not make room for another node, either because it has a fixed capacity which has been reached or because the allocator failed. Contains the value which was to be inserted, to avoid dropping it.
    #[error("the backing storage is out of capacity")]
    StorageFull(T),
}
impl<T> InsertError<T> {
    /// Extracts the value which was to be inserted.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_inner(self) -> T {
        match self {
            Self::StorageFull(value) => value,
        }
    }
}

/// The error type returned when a raw key does not refer to a node of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no node exists at key {key}")]
pub struct InvalidKeyError {
    /// The offending key.
    pub key: usize,
}

/// A binary search tree which uses a `Vec` as backing storage.
///
/// The default `BinarySearchTree` type already uses this, so this is only provided for explicitness and consistency.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type VecBinarySearchTree<T> = BinarySearchTree<T, alloc::vec::Vec<Node<T>>>;
/// A binary search tree which uses a `VecDeque` as backing storage.
///
/// This does not use `VecDeque` semantics in any way and is simply provided for convenience.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type VecDequeBinarySearchTree<T> =
    BinarySearchTree<T, alloc::collections::VecDeque<Node<T>>>;
/// A binary search tree which uses an `ArrayVec` as backing storage, i.e. can only hold a fixed number of values and does not need a memory allocator.
///
/// `A` is the backing array, like `[Node<T>; 16]`. Inserting into a full tree of this kind fails with [`InsertError::StorageFull`] when using [`try_insert`].
///
/// [`InsertError::StorageFull`]: enum.InsertError.html#variant.StorageFull " "
/// [`try_insert`]: struct.BinarySearchTree.html#method.try_insert " "
pub type ArrayVecBinarySearchTree<T, A> = BinarySearchTree<T, arrayvec::ArrayVec<A>>;
