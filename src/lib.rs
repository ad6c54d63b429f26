//! Owned singly linked lists with stable, checked positions.
//!
//! The main type is [`ForwardList`], a forward-only list that supports O(1)
//! insertion and removal at the front or after any known [`Position`].
//! See [`linked_list::forward`] for the details.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::forward::{
    Cursor, CursorMut, ForwardCursor, ForwardList, IntoIter, Iter, IterMut, ListError, Position,
    swap,
};
