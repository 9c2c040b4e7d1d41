use std::collections::HashMap;

use retrace_mem::{MemoryLayout, Pool};

/// The mutable context a replay pass executes against.
///
/// One instance per pass: commands are applied to it strictly in program
/// order, and sharing a state across concurrent passes is not supported. All
/// memory access goes through the pool by pointer + the device
/// [`MemoryLayout`], never by host address.
#[derive(Debug)]
pub struct GlobalState {
    layout: MemoryLayout,
    memory: Pool,
    scratch: HashMap<String, u64>,
}

impl GlobalState {
    pub fn new(layout: MemoryLayout, memory_size: u64) -> Self {
        Self {
            layout,
            memory: Pool::new(memory_size),
            scratch: HashMap::new(),
        }
    }

    pub fn memory_layout(&self) -> &MemoryLayout {
        &self.layout
    }

    pub fn memory(&self) -> &Pool {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Pool {
        &mut self.memory
    }

    /// Reads a named scratch value commands use for bookkeeping effects.
    pub fn scratch(&self, name: &str) -> Option<u64> {
        self.scratch.get(name).copied()
    }

    pub fn set_scratch(&mut self, name: impl Into<String>, value: u64) {
        self.scratch.insert(name.into(), value);
    }
}
