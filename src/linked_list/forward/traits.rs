use super::{error::ListError, list::ForwardList, position::Position};

/// A link in the forward chain.
///
/// Both nodes and the list's sentinel head implement this, so linking or
/// unlinking "after" an anchor is the same operation whether the anchor is
/// the head or a real node.
pub(crate) trait Link {
    /// Get the slot index of the next node
    fn next(&self) -> Option<usize>;

    /// Set the slot index of the next node
    fn set_next(&mut self, next: Option<usize>);
}

/// Forward-only traversal shared by [`Cursor`](super::Cursor) and
/// [`CursorMut`](super::CursorMut).
///
/// A cursor is a list borrow plus a [`Position`]. Every provided method
/// validates the position against the list before using it.
pub trait ForwardCursor {
    /// The type of values stored in the list.
    type Item;

    /// The list this cursor walks.
    fn list(&self) -> &ForwardList<Self::Item>;

    /// The position the cursor currently names.
    fn position(&self) -> Position;

    /// Move the cursor to `position`.
    ///
    /// The position is not checked here; a stale or foreign position makes the
    /// next operation on the cursor fail with [`ListError::InvalidPosition`].
    fn seek(&mut self, position: Position);

    /// Advance to the next node, or to the end after the last node.
    ///
    /// # Errors
    ///
    /// [`ListError::PastTheEnd`] if the cursor is already at the end, and
    /// [`ListError::InvalidPosition`] if its position is no longer valid.
    fn move_next(&mut self) -> Result<(), ListError> {
        let next = self.list().next_position(self.position())?;
        self.seek(next);
        Ok(())
    }

    /// Advance like [`move_next`](Self::move_next) and return the position the
    /// cursor held before moving.
    fn advance(&mut self) -> Result<Position, ListError> {
        let prior = self.position();
        self.move_next()?;
        Ok(prior)
    }

    /// The value at the cursor.
    fn current(&self) -> Result<&Self::Item, ListError> {
        self.list().get(self.position())
    }

    /// Whether the cursor sits at the end.
    fn is_end(&self) -> bool {
        self.position().is_end()
    }

    /// Whether the cursor sits at the before-begin position.
    fn is_before_begin(&self) -> bool {
        self.position().is_before_begin()
    }
}
