//! Implements an arena-allocated, unbalanced binary search tree with cursor-based traversal.
//!
//! # Overview
//! Sapling stores a sorted set of unique values in a binary search tree which uses the technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The gist of it is that the tree uses some sort of backing storage to store the nodes, typically a [`Vec`] (or its variants, like [`ArrayVec`]), and instead of using pointers to link nodes to their parents and children, indices into the storage are used instead. No node ever holds a reference to another one, which means that the parent links, needed to walk the tree in sorted order without a stack, come at no cost in terms of ownership.
//!
//! The tree is *unbalanced*: values are always inserted as new leaves and existing nodes are never moved around. Individual values cannot be removed; the tree can only be cleared as a whole.
//!
//! Positions in the tree are represented with cursors, which can be compared with each other and advanced towards the greater values until they reach the *end cursor*. See the [`binary_search_tree`] module for the details and an example.
//!
//! # Storage
//! The trait used for defining the "arena" type used is [`Storage`]. Several types from both the standard library and external crates already implement it out of the box:
//! - [`Vec`] and [`ArrayVec`]
//! - [`VecDeque`] — does not use `VecDeque` semantics and is simply provided for convenience
//!
//! Storages with a fixed capacity, like `ArrayVec`, can run out of room for new nodes. Use `try_insert` to handle that gracefully.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only makes the error types implement [`Error`] via `std` and enables `std` support in the dependencies.
//! - `alloc` (**enabled by default**) — adds `Storage` trait implementations for `Vec` and `VecDeque` and makes `Vec` the default storage. *This does not require standard library support and will only panic at runtime in `no_std` environments without an allocator.* Without it, the default storage is a zero-capacity `ArrayVec`, meaning that a storage with a nonzero capacity must be specified explicitly.
//! - `doc_cfg` — annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Logging
//! The tree emits [`tracing`] events: `trace` for every inserted node, `debug` when the tree is cleared and `warn` when the storage runs out of capacity. No subscriber is installed by the crate.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [`binary_search_tree`]: binary_search_tree/index.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod binary_search_tree;
#[doc(no_inline)]
pub use binary_search_tree::{BinarySearchTree, Cursor};

/// A prelude for using Sapling, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_search_tree::{
        BinarySearchTree,
        Cursor as BinarySearchTreeCursor,
        InsertError as BinarySearchTreeInsertError,
        InvalidCursorError as BinarySearchTreeCursorError,
    };
}
