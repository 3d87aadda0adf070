//! The AVR instruction table.
//!
//! Every instruction is one line of [`avr_instructions!`]: a type name, the
//! mnemonic, the operand list and the function computing the result. The
//! macro supplies the slot plumbing: operands are loaded from the machine
//! (or taken from immediates), the semantics function rewrites them in place,
//! and the writable register operands are stored back.

mod add_sub;
mod bitops;
mod logical;
mod mul;
mod transfer;

use arrayvec::ArrayVec;

use crate::{
    error::IsaError,
    isa::{
        syntax::{format_line, parse_into, MAX_OPERANDS},
        Catalog, Frontend, Instruction, Slot, SlotList, SlotRole, TargetMachine,
    },
};

use super::{
    machine::AvrMachine,
    register_class::{AvrImmediate, AvrRegisterClass},
    syntax::AvrSyntax,
    Avr,
};

/// Computes an instruction's effect. `operands` holds one byte per operand
/// in table order: register contents for readable registers, the value for
/// immediates, 0 for write-only registers. Whatever is left in a writable
/// register's position is stored back.
pub type Semantics = fn(&mut AvrMachine, &mut [u8]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvrOperand {
    Register(SlotRole, AvrRegisterClass),
    Immediate(AvrImmediate),
}

impl AvrOperand {
    pub fn slot(self) -> Slot {
        match self {
            AvrOperand::Register(role, class) => Slot::register(class, role),
            AvrOperand::Immediate(domain) => Slot::immediate(domain.valid_values()),
        }
    }

    fn is_written(self) -> bool {
        matches!(self, AvrOperand::Register(role, _) if role.is_write())
    }
}

const fn r(class: AvrRegisterClass) -> AvrOperand {
    AvrOperand::Register(SlotRole::READ, class)
}

const fn w(class: AvrRegisterClass) -> AvrOperand {
    AvrOperand::Register(SlotRole::WRITE, class)
}

const fn rw(class: AvrRegisterClass) -> AvrOperand {
    AvrOperand::Register(SlotRole::READ_WRITE, class)
}

const fn imm(domain: AvrImmediate) -> AvrOperand {
    AvrOperand::Immediate(domain)
}

fn operand_slots(operands: &[AvrOperand]) -> SlotList {
    operands.iter().map(|operand| operand.slot()).collect()
}

/// Runs `semantics` over already checked `slots`.
fn run(
    operands: &[AvrOperand],
    semantics: Semantics,
    machine: &mut AvrMachine,
    slots: &[Slot],
) -> Result<usize, IsaError> {
    let mut values = ArrayVec::<u8, MAX_OPERANDS>::new();
    for (operand, slot) in operands.iter().zip(slots) {
        let value = match operand {
            AvrOperand::Register(role, _) if !role.is_read() => 0,
            AvrOperand::Register(..) => machine.register(slot)?,
            AvrOperand::Immediate(_) => slot.populated_value()?,
        };
        values.push(AvrMachine::truncate(value));
    }

    semantics(machine, &mut values);

    for ((operand, slot), value) in operands.iter().zip(slots).zip(values) {
        if operand.is_written() {
            machine.set_register(slot, value.into())?;
        }
    }
    Ok(operands.len())
}

macro_rules! avr_instructions {
    (
        $(
            $name:ident, $mnemonic:literal, [$($operand:expr),* $(,)?], $semantics:path;
        )*
    ) => {
        $(
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl $name {
                pub const OPERANDS: &'static [AvrOperand] = &[$($operand),*];
            }

            impl Instruction<AvrMachine> for $name {
                fn name(&self) -> &'static str {
                    $mnemonic
                }

                fn slots(&self) -> SlotList {
                    operand_slots(Self::OPERANDS)
                }

                fn number_of_slots(&self) -> usize {
                    Self::OPERANDS.len()
                }

                fn execute(&self, machine: &mut AvrMachine, slots: &[Slot]) -> Result<usize, IsaError> {
                    self.check_slots(slots)?;
                    run(Self::OPERANDS, $semantics, machine, slots)
                }

                fn format(&self, slots: &[Slot]) -> Result<String, IsaError> {
                    self.check_slots(slots)?;
                    format_line::<AvrSyntax>($mnemonic, &slots[..Self::OPERANDS.len()])
                }

                fn parse(&self, text: &str, out: &mut SlotList) -> bool {
                    parse_into::<AvrSyntax>($mnemonic, text, self.slots(), out)
                }
            }
        )*

        fn build_catalog(name: &'static str) -> Catalog<AvrMachine> {
            Catalog::new(name)$(.with($name))*
        }
    };
}

use AvrImmediate::{Bit, Byte};
use AvrRegisterClass::{
    AllRegisters as All, Register0 as R0, Register1 as R1, Registers16Plus as Upper,
};

avr_instructions! {
    Add,  "add",  [rw(All), r(All)],             add_sub::add;
    Adc,  "adc",  [rw(All), r(All)],             add_sub::adc;
    Sub,  "sub",  [rw(All), r(All)],             add_sub::sub;
    Subi, "subi", [rw(Upper), imm(Byte)],        add_sub::sub;
    Sbc,  "sbc",  [rw(All), r(All)],             add_sub::sbc;
    Sbci, "sbci", [rw(Upper), imm(Byte)],        add_sub::sbc;
    Inc,  "inc",  [rw(All)],                     add_sub::inc;
    Dec,  "dec",  [rw(All)],                     add_sub::dec;
    Cp,   "cp",   [r(All), r(All)],              add_sub::cp;
    Cpc,  "cpc",  [r(All), r(All)],              add_sub::cpc;
    Cpi,  "cpi",  [r(Upper), imm(Byte)],         add_sub::cp;
    And,  "and",  [rw(All), r(All)],             logical::and;
    Andi, "andi", [rw(Upper), imm(Byte)],        logical::and;
    Or,   "or",   [rw(All), r(All)],             logical::or;
    Ori,  "ori",  [rw(Upper), imm(Byte)],        logical::or;
    Eor,  "eor",  [rw(All), r(All)],             logical::eor;
    Com,  "com",  [rw(All)],                     logical::com;
    Neg,  "neg",  [rw(All)],                     logical::neg;
    Lsr,  "lsr",  [rw(All)],                     bitops::lsr;
    Ror,  "ror",  [rw(All)],                     bitops::ror;
    Asr,  "asr",  [rw(All)],                     bitops::asr;
    Swap, "swap", [rw(All)],                     bitops::swap;
    Bst,  "bst",  [r(All), imm(Bit)],            bitops::bst;
    Bld,  "bld",  [rw(All), imm(Bit)],           bitops::bld;
    Bset, "bset", [imm(Bit)],                    bitops::bset;
    Bclr, "bclr", [imm(Bit)],                    bitops::bclr;
    Mov,  "mov",  [w(All), r(All)],              transfer::mov;
    Ldi,  "ldi",  [w(Upper), imm(Byte)],         transfer::mov;
    Nop,  "nop",  [],                            transfer::nop;
    Mul,  "mul",  [r(All), r(All), w(R0), w(R1)],       mul::mul;
    Muls, "muls", [r(Upper), r(Upper), w(R0), w(R1)],   mul::muls;
}

/// Every AVR instruction, in catalog order.
pub fn catalog() -> Catalog<AvrMachine> {
    build_catalog(Avr::NAME)
}
