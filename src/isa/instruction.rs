use std::fmt::Debug;

use itertools::Itertools;

use crate::error::IsaError;

use super::{machine::TargetMachine, slot::Slot, slot::SlotList};

/// One operation of a target's instruction set.
///
/// Implementations are stateless: everything that changes lives in the slots
/// and in the machine passed to [`Instruction::execute`].
pub trait Instruction<M: TargetMachine>: Debug + Send + Sync {
    /// The bare mnemonic, e.g. `"add"`.
    fn name(&self) -> &'static str;

    /// Fresh, unpopulated slots in the order `execute` expects them. Every
    /// call returns new instances of the same shape.
    fn slots(&self) -> SlotList;

    /// Same as `self.slots().len()`, without building the slots.
    fn number_of_slots(&self) -> usize;

    /// Applies the instruction to `machine` using the values already held in
    /// `slots`, and returns how many slots were consumed.
    ///
    /// Fails without touching the machine when there are too few slots or a
    /// value is not legal for its operand position.
    fn execute(&self, machine: &mut M, slots: &[Slot]) -> Result<usize, IsaError>;

    /// The canonical text of the instruction with these slot values,
    /// e.g. `"add r0, r1"`. [`Instruction::parse`] accepts it back.
    fn format(&self, slots: &[Slot]) -> Result<String, IsaError>;

    /// Matches `text` against this instruction's syntax. On success the
    /// populated slots are appended to `out` and `true` is returned; on
    /// failure `out` is left as it was.
    fn parse(&self, text: &str, out: &mut SlotList) -> bool;

    /// The textual form with numbered placeholders, e.g. `"add S1, S2"`.
    fn syntax(&self) -> String {
        match self.number_of_slots() {
            0 => self.name().to_string(),
            n => format!(
                "{} {}",
                self.name(),
                (1..=n).map(|i| format!("S{}", i)).join(", ")
            ),
        }
    }

    /// Parses into a new slot list.
    fn parse_slots(&self, text: &str) -> Option<SlotList> {
        let mut slots = SlotList::new();
        self.parse(text, &mut slots).then_some(slots)
    }

    /// Checks that `slots` covers every operand and that each value is legal
    /// for its position.
    fn check_slots(&self, slots: &[Slot]) -> Result<(), IsaError> {
        let expected = self.number_of_slots();
        if slots.len() < expected {
            return Err(IsaError::ArityMismatch {
                mnemonic: self.name(),
                expected,
                actual: slots.len(),
            });
        }
        for (shape, slot) in self.slots().iter().zip(slots) {
            let value = slot.populated_value()?;
            if !shape.accepts(value) {
                return Err(IsaError::InvalidOperand {
                    value,
                    domain: shape.valid_values().to_string(),
                });
            }
        }
        Ok(())
    }
}
