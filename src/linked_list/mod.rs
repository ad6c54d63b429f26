//! Linked list implementations.
//!
//! A [`forward::ForwardList`] owns its nodes and links them in a single
//! direction. Positions handed out by the list stay usable until the node
//! they name is removed, and every operation that takes a position checks it
//! first instead of trusting the caller.
//!
//! # Examples
//!
//! ```
//! use forward_list::linked_list::forward::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//! list.push_front(0);
//! assert_eq!(list.len(), 4);
//!
//! // Erase the `1` that follows the first node.
//! let begin = list.begin();
//! list.erase_after(begin).unwrap();
//!
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![0, 2, 3]);
//! ```
pub mod forward;
