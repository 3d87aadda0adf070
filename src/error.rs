use thiserror::Error;

use crate::isa::slot::SlotValue;

/// Failures raised by slots, instructions, machines and configuration.
///
/// A line that simply does not match an instruction is not an error: `parse`
/// reports that with `false`. [`IsaError::UnrecognizedInstruction`] is only
/// produced once a whole catalog has been tried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsaError {
    /// A value outside a slot's valid set.
    #[error("invalid operand {value}, expected one of {domain}")]
    InvalidOperand { value: SlotValue, domain: String },
    /// A slot was read before a value was assigned to it.
    #[error("slot has no value")]
    UnpopulatedSlot,
    /// Fewer slots than the instruction requires.
    #[error("{mnemonic} expects {expected} slots, got {actual}")]
    ArityMismatch {
        mnemonic: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Register index outside the register file.
    #[error("register index {index} out of range (register file has {size} registers)")]
    RegisterOutOfRange { index: usize, size: usize },
    /// No instruction in the catalog accepted the line.
    #[error("unrecognized instruction: {0}")]
    UnrecognizedInstruction(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("configuration is for target {found}, expected {expected}")]
    TargetMismatch {
        expected: &'static str,
        found: String,
    },
}
