use core::fmt;

use super::{
    cursor::{Cursor, CursorMut},
    error::ListError,
    iter::{Iter, IterMut},
    node::{Head, Node},
    position::{Anchor, Position},
    store::{Identity, NodeStore},
    traits::Link,
};

/// An owned, singly linked list.
///
/// The list keeps a sentinel head in front of its first node, so inserting or
/// erasing after [`before_begin`](Self::before_begin) works exactly like doing
/// so after any other node.
///
/// # Examples
///
/// ```
/// use forward_list::ForwardList;
///
/// let mut list = ForwardList::new();
/// list.push_front(2);
/// list.push_front(1);
///
/// let first = list.begin();
/// let third = list.insert_after(first, 3).unwrap();
/// assert_eq!(list.get(third), Ok(&3));
/// assert_eq!(list, ForwardList::from([1, 3, 2]));
/// ```
pub struct ForwardList<T> {
    id: Identity,
    head: Head,
    len: usize,
    store: NodeStore<T>,
}

/// A resolved anchor: the sentinel head or the slot of a live node.
#[derive(Debug, Clone, Copy)]
enum At {
    Head,
    Node(usize),
}

/// Log a rejected operation and hand the error back.
fn rejected(error: ListError) -> ListError {
    log::debug!("forward list rejected an operation: {error}");
    error
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: Identity::fresh(),
            head: Head::default(),
            len: 0,
            store: NodeStore::with_capacity(capacity),
        }
    }

    /// Builds a list holding clones of `values` in the same order.
    pub fn from_values(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut list = Self::with_capacity(values.len());
        list.push_front_rev(values.iter().cloned());
        list
    }

    /// Like [`from_values`](Self::from_values), but reports a failed
    /// allocation instead of aborting.
    pub fn try_from_values(values: &[T]) -> Result<Self, ListError>
    where
        T: Clone,
    {
        let mut list = Self::new();
        list.store
            .try_reserve(values.len())
            .map_err(|error| rejected(error.into()))?;
        list.push_front_rev(values.iter().cloned());
        Ok(list)
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first value, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.next().map(|index| &self.store.node(index).value)
    }

    /// Mutable access to the first value.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head
            .next()
            .map(|index| &mut self.store.node_mut(index).value)
    }

    /// Returns `true` if some value equals `value`. Walks the list.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    /// Push a value to the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.link_after(At::Head, value);
    }

    /// Push a value to the front of the list, returning its position.
    ///
    /// # Errors
    ///
    /// [`ListError::AllocationFailed`] if no slot could be reserved. The list is
    /// left as it was.
    pub fn try_push_front(&mut self, value: T) -> Result<Position, ListError> {
        self.insert_after(self.before_begin(), value)
    }

    /// Remove the first value and return it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(At::Head)
    }

    /// Remove every value, front to back.
    ///
    /// Like [`Vec::clear`](alloc::vec::Vec::clear) this keeps the node
    /// storage for reuse; call [`shrink_to_fit`](Self::shrink_to_fit) to
    /// release it.
    pub fn clear(&mut self) {
        let released = self.len;
        while self.unlink_after(At::Head).is_some() {}
        if released > 0 {
            log::trace!("forward list cleared, released {released} nodes");
        }
    }

    /// Number of nodes the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Release node storage that no longer backs a value.
    ///
    /// Positions of live nodes stay valid and stale positions stay rejected.
    pub fn shrink_to_fit(&mut self) {
        let before = self.store.capacity();
        self.store.shrink_to_fit();
        log::trace!(
            "forward list shrunk from {before} to {} slots",
            self.store.capacity()
        );
    }

    /// Insert `value` right after `position` and return the new node's position.
    ///
    /// `position` may be [`before_begin`](Self::before_begin), which inserts at
    /// the front.
    ///
    /// # Errors
    ///
    /// - [`ListError::PastTheEnd`] if `position` is the end.
    /// - [`ListError::InvalidPosition`] if `position` is stale or from another list.
    /// - [`ListError::AllocationFailed`] if no slot could be reserved.
    ///
    /// The list is unchanged on error.
    pub fn insert_after(&mut self, position: Position, value: T) -> Result<Position, ListError> {
        let at = self.resolve(position)?;
        self.store
            .try_reserve_one()
            .map_err(|error| rejected(error.into()))?;
        let index = self.link_after(at, value);
        Ok(self.position_of(Some(index)))
    }

    /// Erase the node right after `position` and return the position that now
    /// follows `position`.
    ///
    /// Only positions naming the erased node become invalid.
    ///
    /// # Errors
    ///
    /// - [`ListError::NothingAfter`] if `position` names the last node.
    /// - [`ListError::PastTheEnd`] if `position` is the end.
    /// - [`ListError::InvalidPosition`] if `position` is stale or from another list.
    pub fn erase_after(&mut self, position: Position) -> Result<Position, ListError> {
        let at = self.resolve(position)?;
        self.unlink_after(at)
            .ok_or_else(|| rejected(ListError::NothingAfter))?;
        Ok(self.position_of(self.link(at).next()))
    }

    /// Remove the node right after `position` and return its value.
    ///
    /// Fails exactly when [`erase_after`](Self::erase_after) would.
    pub fn remove_after(&mut self, position: Position) -> Result<T, ListError> {
        let at = self.resolve(position)?;
        self.unlink_after(at)
            .ok_or_else(|| rejected(ListError::NothingAfter))
    }

    /// The position in front of the first node.
    ///
    /// It can anchor [`insert_after`](Self::insert_after) and
    /// [`erase_after`](Self::erase_after) but never holds a value.
    pub fn before_begin(&self) -> Position {
        Position(Anchor::BeforeBegin(self.id))
    }

    /// The position of the first node, or [`end`](Self::end) if the list is empty.
    pub fn begin(&self) -> Position {
        self.position_of(self.head.next())
    }

    /// The position one past the last node. It holds no value.
    pub fn end(&self) -> Position {
        Position::END
    }

    /// The position following `position`.
    ///
    /// # Errors
    ///
    /// [`ListError::PastTheEnd`] for the end position and
    /// [`ListError::InvalidPosition`] for a stale or foreign one.
    pub fn next_position(&self, position: Position) -> Result<Position, ListError> {
        let at = self.resolve(position)?;
        Ok(self.position_of(self.link(at).next()))
    }

    /// The value at `position`.
    ///
    /// # Errors
    ///
    /// [`ListError::BeforeBegin`] and [`ListError::PastTheEnd`] for the two
    /// positions that hold no value, [`ListError::InvalidPosition`] for a stale
    /// or foreign one.
    pub fn get(&self, position: Position) -> Result<&T, ListError> {
        match self.resolve(position)? {
            At::Head => Err(rejected(ListError::BeforeBegin)),
            At::Node(index) => Ok(&self.store.node(index).value),
        }
    }

    /// Mutable access to the value at `position`. Fails like [`get`](Self::get).
    pub fn get_mut(&mut self, position: Position) -> Result<&mut T, ListError> {
        match self.resolve(position)? {
            At::Head => Err(rejected(ListError::BeforeBegin)),
            At::Node(index) => Ok(&mut self.store.node_mut(index).value),
        }
    }

    /// A read-only cursor at the first node.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.begin())
    }

    /// A read-only cursor at the end.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::END)
    }

    /// A read-only cursor at the before-begin position.
    pub fn cursor_before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.before_begin())
    }

    /// A read-only cursor at `position`. The position is checked when the
    /// cursor is used.
    pub fn cursor_at(&self, position: Position) -> Cursor<'_, T> {
        Cursor::new(self, position)
    }

    /// A mutable cursor at the first node.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        let position = self.begin();
        CursorMut::new(self, position)
    }

    /// A mutable cursor at the before-begin position.
    pub fn cursor_mut_before_begin(&mut self) -> CursorMut<'_, T> {
        let position = self.before_begin();
        CursorMut::new(self, position)
    }

    /// A mutable cursor at `position`. The position is checked when the
    /// cursor is used.
    pub fn cursor_mut_at(&mut self, position: Position) -> CursorMut<'_, T> {
        CursorMut::new(self, position)
    }

    /// An iterator over the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.store, self.head.next(), self.len)
    }

    /// An iterator over mutable references to the values, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let first = self.head.next();
        IterMut::new(&mut self.store, first, self.len)
    }

    /// Exchange the contents of two lists in O(1).
    ///
    /// Node positions move with their nodes. Each list keeps its own
    /// before-begin position.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.head, &mut other.head);
        core::mem::swap(&mut self.len, &mut other.len);
        core::mem::swap(&mut self.store, &mut other.store);
    }

    fn resolve(&self, position: Position) -> Result<At, ListError> {
        match position.0 {
            Anchor::BeforeBegin(id) if id == self.id => Ok(At::Head),
            Anchor::Node {
                store,
                index,
                generation,
            } if store == self.store.id() && self.store.is_live(index, generation) => {
                Ok(At::Node(index))
            }
            Anchor::End => Err(rejected(ListError::PastTheEnd)),
            _ => Err(rejected(ListError::InvalidPosition)),
        }
    }

    fn position_of(&self, index: Option<usize>) -> Position {
        match index {
            Some(index) => Position(Anchor::Node {
                store: self.store.id(),
                index,
                generation: self.store.generation(index),
            }),
            None => Position::END,
        }
    }

    fn link(&self, at: At) -> &dyn Link {
        match at {
            At::Head => &self.head,
            At::Node(index) => self.store.node(index),
        }
    }

    fn link_mut(&mut self, at: At) -> &mut dyn Link {
        match at {
            At::Head => &mut self.head,
            At::Node(index) => self.store.node_mut(index),
        }
    }

    /// Store a node holding `value` and splice it in after `at`.
    fn link_after(&mut self, at: At, value: T) -> usize {
        let next = self.link(at).next();
        let index = self.store.insert(Node::new(value, next));
        self.link_mut(at).set_next(Some(index));
        self.len += 1;
        index
    }

    /// Splice out the node after `at`, release its slot and return its value.
    fn unlink_after(&mut self, at: At) -> Option<T> {
        let index = self.link(at).next()?;
        let node = self.store.remove(index);
        self.link_mut(at).set_next(node.next());
        self.len -= 1;
        Some(node.into_value())
    }

    /// Push `values` to the front back to front, so they end up in order.
    fn push_front_rev<I: DoubleEndedIterator<Item = T>>(&mut self, values: I) {
        for value in values.rev() {
            self.push_front(value);
        }
    }

    /// The anchor of the last node, or the head when empty.
    fn last(&self) -> At {
        let mut at = At::Head;
        while let Some(index) = self.link(at).next() {
            at = At::Node(index);
        }
        at
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        let mut tail = At::Head;
        for value in self.iter() {
            tail = At::Node(copy.link_after(tail, value.clone()));
        }
        log::trace!("forward list cloned, copied {} nodes", copy.len);
        copy
    }

    /// Builds the whole copy first and swaps it in, so a panicking
    /// `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
        log::trace!("forward list assigned from a copy of {} nodes", self.len);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Appends after the current last node, which costs one walk of the list.
impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last();
        for value in iter {
            tail = At::Node(self.link_after(tail, value));
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.push_front_rev(values.into_iter());
        list
    }
}

impl<T> From<alloc::vec::Vec<T>> for ForwardList<T> {
    fn from(values: alloc::vec::Vec<T>) -> Self {
        let mut list = Self::with_capacity(values.len());
        list.push_front_rev(values.into_iter());
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
