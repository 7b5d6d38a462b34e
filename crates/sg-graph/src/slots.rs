//! Generation-checked slot storage.
//!
//! Removed slots go onto a free list and are handed out again by later inserts.
//! Each removal bumps the slot's generation, so a `(slot, generation)` pair
//! issued before the removal never matches again.

use core::mem;
use sg_core::Id;

#[derive(Debug)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Free { generation: u32, next_free: Option<Id> },
}

#[derive(Debug)]
pub(crate) struct Slots<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<Id>,
    len: usize,
}

impl<T> Slots<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Store `value` and return its slot and generation.
    ///
    /// # Panics
    /// Panics if more than `Id::MAX_INDEX` slots would be needed.
    pub(crate) fn insert(&mut self, value: T) -> (Id, u32) {
        if let Some(slot) = self.free_head {
            let entry = &mut self.slots[slot.as_usize()];
            let (generation, next_free) = match entry {
                Slot::Free {
                    generation,
                    next_free,
                } => (*generation, *next_free),
                Slot::Occupied { .. } => panic!("free head points to occupied slot"),
            };
            *entry = Slot::Occupied { generation, value };
            self.free_head = next_free;
            self.len += 1;
            return (slot, generation);
        }

        let slot = match Id::try_from_usize(self.slots.len()) {
            Ok(slot) => slot,
            Err(err) => panic!("slot storage exhausted: {err}"),
        };
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        self.len += 1;
        (slot, 0)
    }

    pub(crate) fn get(&self, slot: Id, generation: u32) -> Option<&T> {
        match self.slots.get(slot.as_usize())? {
            Slot::Occupied {
                generation: current,
                value,
            } if *current == generation => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, slot: Id, generation: u32) -> Option<&mut T> {
        match self.slots.get_mut(slot.as_usize())? {
            Slot::Occupied {
                generation: current,
                value,
            } if *current == generation => Some(value),
            _ => None,
        }
    }

    /// Take the value out of a live slot and retire the `(slot, generation)` pair.
    pub(crate) fn remove(&mut self, slot: Id, generation: u32) -> Option<T> {
        let entry = self.slots.get_mut(slot.as_usize())?;
        if !matches!(entry, Slot::Occupied { generation: current, .. } if *current == generation)
        {
            return None;
        }

        // A slot whose generation would wrap is never handed out again.
        let next_generation = generation.checked_add(1);
        let freed = Slot::Free {
            generation: next_generation.unwrap_or(u32::MAX),
            next_free: next_generation.and(self.free_head),
        };
        let Slot::Occupied { value, .. } = mem::replace(entry, freed) else {
            return None;
        };
        if next_generation.is_some() {
            self.free_head = Some(slot);
        }
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter_map(|slot| match slot {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free { .. } => None,
        })
    }
}
