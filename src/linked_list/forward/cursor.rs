use core::fmt;

use super::{error::ListError, list::ForwardList, position::Position, traits::ForwardCursor};

/// A read-only cursor over a [`ForwardList`].
///
/// Cursors compare equal when they sit at the same position, whatever their
/// flavor.
pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    position: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>, position: Position) -> Self {
        Self { list, position }
    }

    /// The value at the cursor, borrowed for as long as the list is.
    pub fn get(&self) -> Result<&'a T, ListError> {
        self.list.get(self.position)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> ForwardCursor for Cursor<'_, T> {
    type Item = T;

    fn list(&self) -> &ForwardList<T> {
        self.list
    }

    fn position(&self) -> Position {
        self.position
    }

    fn seek(&mut self, position: Position) {
        self.position = position;
    }
}

/// A cursor that can modify the value it points at and insert or erase after it.
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    position: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut ForwardList<T>, position: Position) -> Self {
        Self { list, position }
    }

    pub fn current_mut(&mut self) -> Result<&mut T, ListError> {
        self.list.get_mut(self.position)
    }

    /// Insert `value` after the cursor. The cursor does not move.
    pub fn insert_after(&mut self, value: T) -> Result<Position, ListError> {
        self.list.insert_after(self.position, value)
    }

    /// Erase the node after the cursor. The cursor does not move.
    pub fn erase_after(&mut self) -> Result<Position, ListError> {
        self.list.erase_after(self.position)
    }

    /// Remove the node after the cursor and return its value.
    pub fn remove_after(&mut self) -> Result<T, ListError> {
        self.list.remove_after(self.position)
    }

    /// A read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.position)
    }
}

impl<T> ForwardCursor for CursorMut<'_, T> {
    type Item = T;

    fn list(&self) -> &ForwardList<T> {
        self.list
    }

    fn position(&self) -> Position {
        self.position
    }

    fn seek(&mut self, position: Position) {
        self.position = position;
    }
}

impl<T, C> PartialEq<C> for Cursor<'_, T>
where
    C: ForwardCursor<Item = T>,
{
    fn eq(&self, other: &C) -> bool {
        self.position == other.position()
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T, C> PartialEq<C> for CursorMut<'_, T>
where
    C: ForwardCursor<Item = T>,
{
    fn eq(&self, other: &C) -> bool {
        self.position == other.position()
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .finish()
    }
}
