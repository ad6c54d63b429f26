use super::traits::Link;

/// A node in a forward list.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    next: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<usize>) -> Self {
        Self { value, next }
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

impl<T> Link for Node<T> {
    #[inline]
    fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }
}

/// The sentinel in front of the first node. It never holds a value.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Head {
    next: Option<usize>,
}

impl Link for Head {
    #[inline]
    fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }
}
