use std::fmt::{Debug, Display};

use crate::error::IsaError;

use super::slot::Slot;

/// Register contents as seen by target-independent code. Wider than any
/// register so that arithmetic on it cannot overflow before truncation.
pub type RegisterValue = u32;

/// Mutable state of one simulated processor.
///
/// Concrete machines provide a fixed-size register file; all indexed and
/// slot-keyed access goes through the provided methods, which bounds-check
/// the index and wrap stored values to the register width.
pub trait TargetMachine: Debug + Display + Send {
    type DataType: Copy + Into<RegisterValue>;
    const MAIN_REGISTER_COUNT: usize;

    fn registers(&self) -> &[Self::DataType];
    fn registers_mut(&mut self) -> &mut [Self::DataType];

    /// Wraps a value to the register width.
    fn truncate(value: RegisterValue) -> Self::DataType;

    /// Returns every register and any target status to zero.
    fn reset(&mut self);

    fn register_value(&self, index: usize) -> Result<RegisterValue, IsaError> {
        self.registers()
            .get(index)
            .map(|&v| v.into())
            .ok_or(IsaError::RegisterOutOfRange {
                index,
                size: Self::MAIN_REGISTER_COUNT,
            })
    }

    fn set_register_value(&mut self, index: usize, value: RegisterValue) -> Result<(), IsaError> {
        let reg = self
            .registers_mut()
            .get_mut(index)
            .ok_or(IsaError::RegisterOutOfRange {
                index,
                size: Self::MAIN_REGISTER_COUNT,
            })?;
        *reg = Self::truncate(value);
        Ok(())
    }

    /// Reads the register whose index is the slot's value.
    fn register(&self, slot: &Slot) -> Result<RegisterValue, IsaError> {
        self.register_value(slot.populated_value()? as usize)
    }

    /// Writes the register whose index is the slot's value.
    fn set_register(&mut self, slot: &Slot, value: RegisterValue) -> Result<(), IsaError> {
        self.set_register_value(slot.populated_value()? as usize, value)
    }
}

/// Writes a register file as `r<i> = <value>` entries, four to a line.
pub fn write_register_dump<T: Display>(
    f: &mut std::fmt::Formatter<'_>,
    regs: &[T],
) -> std::fmt::Result {
    for (i, reg) in regs.iter().enumerate() {
        write!(f, "\tr{} = {}  ", i, reg)?;
        if i % 4 == 3 {
            writeln!(f)?;
        }
    }
    if regs.len() % 4 != 0 {
        writeln!(f)?;
    }
    Ok(())
}
