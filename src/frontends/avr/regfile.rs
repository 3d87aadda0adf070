use std::fmt::Display;

use crate::isa::machine::write_register_dump;

pub const REGISTER_COUNT: usize = 32;

/// The 32 general purpose registers r0..r31.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    pub regs: [u8; REGISTER_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    pub fn new() -> RegisterFile {
        RegisterFile {
            regs: [0; REGISTER_COUNT],
        }
    }

    pub fn clear(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }
}

impl Display for RegisterFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_register_dump(f, &self.regs)
    }
}
