use super::store::Identity;

/// A position in a [`ForwardList`](super::ForwardList).
///
/// A position names the before-begin slot of a list, one of its nodes, or the
/// end. It does not borrow the list; the list checks it whenever it is used.
///
/// Two positions are equal when they name the same node, the before-begin slot
/// of the same list, or when both are the end. End positions taken from
/// different lists are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub(crate) Anchor);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Anchor {
    BeforeBegin(Identity),
    Node {
        store: Identity,
        index: usize,
        generation: u32,
    },
    End,
}

impl Position {
    /// The position one past the last node of any list.
    pub const END: Position = Position(Anchor::End);

    /// Returns `true` for the end position.
    pub fn is_end(&self) -> bool {
        matches!(self.0, Anchor::End)
    }

    /// Returns `true` for a before-begin position.
    pub fn is_before_begin(&self) -> bool {
        matches!(self.0, Anchor::BeforeBegin(_))
    }
}
