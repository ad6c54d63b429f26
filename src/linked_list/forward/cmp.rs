//! Comparison, hashing and swapping for [`ForwardList`].
//!
//! Lists compare lexicographically by value, like slices: a list that is a
//! strict prefix of another compares less. If the first pair of values
//! that is not equal cannot be compared (a NaN, say), the whole comparison
//! is `None` and every ordering operator returns `false`.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use super::list::ForwardList;

/// Exchange the contents of `a` and `b` in O(1). See [`ForwardList::swap`].
pub fn swap<T>(a: &mut ForwardList<T>, b: &mut ForwardList<T>) {
    a.swap(b);
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}
