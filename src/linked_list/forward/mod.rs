//! # Forward List
//!
//! This module provides an owned, singly linked list.
//!
//! ## Core Components
//!
//! - [`list::ForwardList`]: the list itself, a sentinel head plus a chain of nodes.
//! - [`position::Position`]: a copyable handle naming the before-begin slot, a node, or the end.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: read-only and mutable cursors that share
//!   traversal through [`traits::ForwardCursor`].
//! - [`iter`]: borrowing and owning iterators for `for` loops and adapters.
//!
//! ## Storage
//!
//! Nodes live in a slot arena owned by the list and are linked by slot index.
//! Each slot carries a generation that changes when its node is released, so a
//! position naming a removed node is rejected with
//! [`ListError::InvalidPosition`](error::ListError::InvalidPosition) even after
//! the slot has been reused.
//!
//! ## Position validity
//!
//! - Inserting never invalidates a position.
//! - Erasing a node invalidates only the positions naming that node.
//! - [`swap`] moves node positions along with their nodes; before-begin positions stay
//!   with the list they were taken from.

pub mod cmp;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
pub mod position;
pub mod traits;

mod node;
mod store;

#[cfg(test)]
mod tests;

pub use cmp::swap;
pub use cursor::{Cursor, CursorMut};
pub use error::ListError;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::ForwardList;
pub use position::Position;
pub use traits::ForwardCursor;
