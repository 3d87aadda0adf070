pub mod catalog;
pub mod frontend;
pub mod instruction;
pub mod machine;
pub mod slot;
pub mod syntax;

pub use catalog::{Catalog, ParsedLine};
pub use frontend::Frontend;
pub use instruction::Instruction;
pub use machine::{RegisterValue, TargetMachine};
pub use slot::{RegisterClass, Slot, SlotKind, SlotList, SlotRole, SlotValue, ValidValues};

#[cfg(test)]
pub(crate) mod test_helper;
