//! The memory register behind the M+, MR and MC keys.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Add `amount` to the stored value.
    pub fn add(&mut self, amount: f64) {
        self.value += amount;
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Whether the memory lamp should be lit.
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }
}
