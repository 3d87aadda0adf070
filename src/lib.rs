//! A retargetable instruction-set core.
//!
//! [`isa`] holds the target-independent contracts: operand [slots](isa::slot::Slot),
//! [instructions](isa::instruction::Instruction) and [machine state](isa::machine::TargetMachine).
//! Each module under [`frontends`] binds those contracts to one processor.

#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod frontends;
pub mod isa;
