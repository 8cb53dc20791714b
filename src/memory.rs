//! Named memories: a store/load/del mapping from short names to values
//!
//! Entries keep insertion order; deleting compacts by shifting later
//! entries left, so the order of survivors never changes. Lookup is a
//! linear scan, which is plenty for the 99-entry cap.

use crate::eval::EvalError;

/// Entries allocated at startup
pub const INITIAL_CAPACITY: usize = 10;
/// Entries added on each overflow
pub const GROWTH_STEP: usize = 5;
/// Hard maximum number of memories
pub const MAX_ENTRIES: usize = 99;
/// Maximum memory name length in bytes
pub const MAX_NAME_LENGTH: usize = 10;

/// One named memory slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEntry {
    pub name: String,
    pub value: f64,
}

/// The calculator memory.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Vec<MemoryEntry>,
    capacity: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Store `value` under `name`. An existing name is overwritten in
    /// place; a new one is appended, growing the clamped capacity. Rejects
    /// over-long names and a full store without mutating anything.
    pub fn store(&mut self, name: &str, value: f64) -> Result<(), EvalError> {
        if name.len() > MAX_NAME_LENGTH {
            return Err(EvalError::NameTooLong(MAX_NAME_LENGTH));
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.value = value;
            return Ok(());
        }

        if self.entries.len() >= self.capacity {
            if self.capacity >= MAX_ENTRIES {
                return Err(EvalError::MemoryFull(self.capacity));
            }
            self.capacity = (self.capacity + GROWTH_STEP).min(MAX_ENTRIES);
            self.entries.reserve(self.capacity - self.entries.len());
        }

        self.entries.push(MemoryEntry {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    /// Look up `name`, returning its value on an exact match.
    pub fn load(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
    }

    /// Remove the entry named `name`, shifting later entries left.
    /// Unknown names are a no-op.
    pub fn delete(&mut self, name: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e.name == name) {
            self.entries.remove(pos);
        }
    }

    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
