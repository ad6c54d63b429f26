use alloc::{collections::TryReserveError, vec::Vec};
use core::{
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

use super::node::Node;

static NEXT_IDENTITY: AtomicUsize = AtomicUsize::new(0);

/// A process-unique tag for a list or a node store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Identity(usize);

impl Identity {
    pub(crate) fn fresh() -> Self {
        Identity(NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed))
    }
}

pub(crate) enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    Vacant { generation: u32, next_free: Option<usize> },
}

impl<T> Slot<T> {
    pub(crate) fn node_mut(&mut self) -> &mut Node<T> {
        match self {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }
}

/// Slot arena holding the nodes of one list.
///
/// Released slots are threaded onto a free list and reused. Their generation
/// is bumped on release so handles to the old node no longer match.
pub(crate) struct NodeStore<T> {
    id: Identity,
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    /// Generation for slots appended past the end. Raised when trailing
    /// slots are trimmed so their old handles never match again.
    floor: u32,
}

impl<T> NodeStore<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            id: Identity::fresh(),
            slots: Vec::with_capacity(capacity),
            free: None,
            floor: 0,
        }
    }

    pub(crate) fn id(&self) -> Identity {
        self.id
    }

    /// Make sure the next [`insert`](Self::insert) does not allocate.
    pub(crate) fn try_reserve_one(&mut self) -> Result<(), TryReserveError> {
        if self.free.is_none() {
            self.slots.try_reserve(1)?;
        }
        Ok(())
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drop trailing vacant slots, rebuild the free list and hand spare
    /// capacity back to the allocator.
    pub(crate) fn shrink_to_fit(&mut self) {
        while let Some(Slot::Vacant { generation, .. }) = self.slots.last() {
            self.floor = self.floor.max(*generation);
            self.slots.pop();
        }
        self.free = None;
        for index in (0..self.slots.len()).rev() {
            if let Slot::Vacant { next_free, .. } = &mut self.slots[index] {
                *next_free = self.free;
                self.free = Some(index);
            }
        }
        self.slots.shrink_to_fit();
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.slots.try_reserve(additional)
    }

    /// Store `node` and return its slot index.
    pub(crate) fn insert(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                let Slot::Vacant {
                    generation,
                    next_free,
                } = *slot
                else {
                    unreachable!("free list points at an occupied slot")
                };
                *slot = Slot::Occupied { generation, node };
                self.free = next_free;
                index
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot::Occupied {
                    generation: self.floor,
                    node,
                });
                index
            }
        }
    }

    /// Release the node at `index` and return it.
    pub(crate) fn remove(&mut self, index: usize) -> Node<T> {
        let placeholder = Slot::Vacant {
            generation: 0,
            next_free: None,
        };
        let Slot::Occupied { generation, node } =
            core::mem::replace(&mut self.slots[index], placeholder)
        else {
            unreachable!("released a vacant slot")
        };
        self.slots[index] = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next_free: self.free,
        };
        self.free = Some(index);
        node
    }

    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index].node_mut()
    }

    /// Generation of the live node at `index`.
    pub(crate) fn generation(&self, index: usize) -> u32 {
        match self.slots[index] {
            Slot::Occupied { generation, .. } => generation,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    /// Whether `index` holds a live node of the given generation.
    pub(crate) fn is_live(&self, index: usize, generation: u32) -> bool {
        matches!(
            self.slots.get(index),
            Some(Slot::Occupied { generation: current, .. }) if *current == generation
        )
    }

    /// Raw access to the slots for iterators that hand out disjoint `&mut` borrows.
    pub(crate) fn slots_ptr(&mut self) -> NonNull<Slot<T>> {
        NonNull::from(self.slots.as_mut_slice()).cast()
    }
}
