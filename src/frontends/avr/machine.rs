use std::fmt::Display;

use crate::isa::{RegisterValue, TargetMachine};

use super::{
    regfile::{RegisterFile, REGISTER_COUNT},
    sreg::StatusRegister,
};

/// Architectural state an AVR instruction can observe or change: the
/// register file and SREG.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvrMachine {
    reg_file: RegisterFile,
    pub(super) sreg: StatusRegister,
}

impl AvrMachine {
    pub fn new() -> Self {
        Self {
            reg_file: RegisterFile::new(),
            sreg: StatusRegister(0),
        }
    }

    pub fn sreg(&self) -> StatusRegister {
        self.sreg
    }

    pub fn set_sreg(&mut self, sreg: StatusRegister) {
        self.sreg = sreg;
    }
}

impl TargetMachine for AvrMachine {
    type DataType = u8;
    const MAIN_REGISTER_COUNT: usize = REGISTER_COUNT;

    fn registers(&self) -> &[u8] {
        &self.reg_file.regs
    }

    fn registers_mut(&mut self) -> &mut [u8] {
        &mut self.reg_file.regs
    }

    fn truncate(value: RegisterValue) -> u8 {
        value as u8
    }

    fn reset(&mut self) {
        self.reg_file.clear();
        self.sreg = StatusRegister(0);
    }
}

impl Display for AvrMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reg_file)?;
        writeln!(f, "\tSREG = {}", self.sreg)
    }
}
