/// One occupied slot of a [`BoundedTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub key: String,
    pub value: u64,
}

/// Fixed-capacity, first-seen-wins key table.
///
/// Slots are filled in arrival order. A known key accumulates in place; a new
/// key takes the next free slot; once every slot holds a distinct key, new
/// keys are dropped. Nothing is ever evicted or reordered, so this is not a
/// ranking of the largest values.
#[derive(Debug, Clone)]
pub struct BoundedTable {
    slots: Vec<Slot>,
    capacity: usize,
}

impl BoundedTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add `delta` to `key`'s slot, claiming a free slot if the key is new.
    /// A new key arriving when every slot is taken is dropped.
    pub fn add(&mut self, key: &str, delta: u64) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.key == key) {
            slot.value = slot.value.saturating_add(delta);
            return;
        }
        if self.slots.len() < self.capacity {
            self.slots.push(Slot {
                key: key.to_string(),
                value: delta,
            });
        }
    }

    pub fn into_slots(self) -> Vec<Slot> {
        self.slots
    }
}

#[cfg(test)]
impl BoundedTable {
    fn get(&self, key: &str) -> Option<u64> {
        self.slots.iter().find(|s| s.key == key).map(|s| s.value)
    }

    fn keys(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.key.as_str()).collect()
    }
}
