/// Number of float slots in a shader evaluation stack.
pub const SVM_STACK_SIZE: usize = 255;
/// Sentinel offset for stack slots no node reads or writes.
pub const SVM_STACK_INVALID: u32 = 255;

/// The per-thread value stack shader nodes read inputs from and write
/// results to.
pub struct Stack {
    slots: [f32; SVM_STACK_SIZE],
}

impl Stack {
    /// Creates a new zeroed `Stack`.
    pub fn new() -> Self {
        Self {
            slots: [0.0; SVM_STACK_SIZE],
        }
    }

    /// Checks if `offset` refers to a live slot.
    pub fn valid(offset: u32) -> bool {
        offset != SVM_STACK_INVALID
    }

    /// Loads the float at `offset`.
    pub fn load_float(&self, offset: u32) -> f32 {
        self.slots[offset as usize]
    }

    /// Stores `value` at `offset`.
    pub fn store_float(&mut self, offset: u32, value: f32) {
        self.slots[offset as usize] = value;
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
