//! A six-register, 4-bit toy target for exercising the generic core.

use std::fmt::Display;

use smallvec::smallvec;

use crate::error::IsaError;

use super::{
    instruction::Instruction,
    machine::{write_register_dump, RegisterValue, TargetMachine},
    slot::{RegisterClass, Slot, SlotKind, SlotList, SlotRole, SlotValue, ValidValues},
    syntax::{format_line, parse_into, OperandSyntax},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Nibbles {
    regs: [u8; 6],
}

impl Display for Nibbles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_register_dump(f, &self.regs)
    }
}

impl TargetMachine for Nibbles {
    type DataType = u8;
    const MAIN_REGISTER_COUNT: usize = 6;

    fn registers(&self) -> &[u8] {
        &self.regs
    }

    fn registers_mut(&mut self) -> &mut [u8] {
        &mut self.regs
    }

    fn truncate(value: RegisterValue) -> u8 {
        (value & 0xF) as u8
    }

    fn reset(&mut self) {
        self.regs = [0; 6];
    }
}

const ALL: &[SlotValue] = &[0, 1, 2, 3, 4, 5];
const NIBBLE: &[SlotValue] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

#[derive(Debug, Clone, Copy)]
pub struct AllNibbles;

impl RegisterClass for AllNibbles {
    fn name(self) -> &'static str {
        "all"
    }

    fn registers(self) -> &'static [SlotValue] {
        ALL
    }
}

/// Registers are `n<index>`, immediates are decimal.
pub struct NibbleSyntax;

impl OperandSyntax for NibbleSyntax {
    fn format_operand(slot: &Slot, value: SlotValue) -> String {
        match slot.kind() {
            SlotKind::Register(_) => format!("n{}", value),
            SlotKind::Immediate => value.to_string(),
        }
    }

    fn parse_operand(slot: &Slot, token: &str) -> Option<SlotValue> {
        match slot.kind() {
            SlotKind::Register(_) => token.strip_prefix('n')?.parse().ok(),
            SlotKind::Immediate => token.parse().ok(),
        }
    }
}

/// `<name> nD, K`: loads a 4-bit immediate.
#[derive(Debug)]
pub struct Load(pub &'static str);

impl Instruction<Nibbles> for Load {
    fn name(&self) -> &'static str {
        self.0
    }

    fn slots(&self) -> SlotList {
        smallvec![
            Slot::register(AllNibbles, SlotRole::WRITE),
            Slot::immediate(ValidValues::new(NIBBLE)),
        ]
    }

    fn number_of_slots(&self) -> usize {
        2
    }

    fn execute(&self, machine: &mut Nibbles, slots: &[Slot]) -> Result<usize, IsaError> {
        self.check_slots(slots)?;
        machine.set_register(&slots[0], slots[1].populated_value()?)?;
        Ok(2)
    }

    fn format(&self, slots: &[Slot]) -> Result<String, IsaError> {
        format_line::<NibbleSyntax>(self.0, slots)
    }

    fn parse(&self, text: &str, out: &mut SlotList) -> bool {
        parse_into::<NibbleSyntax>(self.0, text, self.slots(), out)
    }
}

/// `<name> nD, nS`: copies a register.
#[derive(Debug)]
pub struct Move(pub &'static str);

impl Instruction<Nibbles> for Move {
    fn name(&self) -> &'static str {
        self.0
    }

    fn slots(&self) -> SlotList {
        smallvec![
            Slot::register(AllNibbles, SlotRole::WRITE),
            Slot::register(AllNibbles, SlotRole::READ),
        ]
    }

    fn number_of_slots(&self) -> usize {
        2
    }

    fn execute(&self, machine: &mut Nibbles, slots: &[Slot]) -> Result<usize, IsaError> {
        self.check_slots(slots)?;
        let value = machine.register(&slots[1])?;
        machine.set_register(&slots[0], value)?;
        Ok(2)
    }

    fn format(&self, slots: &[Slot]) -> Result<String, IsaError> {
        format_line::<NibbleSyntax>(self.0, slots)
    }

    fn parse(&self, text: &str, out: &mut SlotList) -> bool {
        parse_into::<NibbleSyntax>(self.0, text, self.slots(), out)
    }
}
