//! AVR 8-bit frontend: 32 byte-wide registers, SREG, and the arithmetic,
//! logic, bit and transfer instructions that only touch them.

pub mod isa;
pub mod machine;
pub mod regfile;
pub mod register_class;
pub mod sreg;
pub mod syntax;

use crate::{
    error::IsaError,
    isa::{Catalog, Frontend, RegisterValue},
};

pub use machine::AvrMachine;
pub use register_class::{AvrImmediate, AvrRegisterClass};
pub use sreg::StatusRegister;

lazy_static! {
    static ref CATALOG: Catalog<AvrMachine> = isa::catalog();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Avr;

impl Frontend for Avr {
    type Machine = AvrMachine;
    type RegisterClass = AvrRegisterClass;

    const NAME: &'static str = "avr";

    fn catalog() -> &'static Catalog<AvrMachine> {
        &CATALOG
    }

    fn register_classes() -> &'static [AvrRegisterClass] {
        &AvrRegisterClass::ALL
    }

    fn new_machine() -> AvrMachine {
        AvrMachine::new()
    }

    fn apply_status(machine: &mut AvrMachine, status: RegisterValue) -> Result<(), IsaError> {
        machine.set_sreg(StatusRegister::from_status(status)?);
        Ok(())
    }
}
