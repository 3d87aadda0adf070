use crate::isa::{RegisterClass, SlotValue, ValidValues};

/// Sets of register indices an AVR operand may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvrRegisterClass {
    /// r0..r31
    AllRegisters,
    /// r16..r31, the operands of immediate forms and `muls`.
    Registers16Plus,
    Register0,
    Register1,
}

impl AvrRegisterClass {
    pub const ALL: [AvrRegisterClass; 4] = [
        AvrRegisterClass::AllRegisters,
        AvrRegisterClass::Registers16Plus,
        AvrRegisterClass::Register0,
        AvrRegisterClass::Register1,
    ];
}

lazy_static! {
    static ref REGISTER_CLASS_TABLE: [Vec<SlotValue>; 4] = [
        (0..32).collect(),
        (16..32).collect(),
        vec![0],
        vec![1],
    ];
    static ref BYTE_VALUES: Vec<SlotValue> = (0..=0xFF).collect();
    static ref BIT_VALUES: Vec<SlotValue> = (0..8).collect();
}

impl RegisterClass for AvrRegisterClass {
    fn name(self) -> &'static str {
        match self {
            AvrRegisterClass::AllRegisters => "all",
            AvrRegisterClass::Registers16Plus => "upper",
            AvrRegisterClass::Register0 => "r0",
            AvrRegisterClass::Register1 => "r1",
        }
    }

    fn registers(self) -> &'static [SlotValue] {
        let table: &'static [Vec<SlotValue>; 4] = &REGISTER_CLASS_TABLE;
        &table[self as usize]
    }
}

/// Value domains of immediate operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvrImmediate {
    /// K, 0..=255
    Byte,
    /// b, a bit position 0..=7
    Bit,
}

impl AvrImmediate {
    pub fn valid_values(self) -> ValidValues {
        let values: &'static Vec<SlotValue> = match self {
            AvrImmediate::Byte => &BYTE_VALUES,
            AvrImmediate::Bit => &BIT_VALUES,
        };
        ValidValues::new(values)
    }
}
