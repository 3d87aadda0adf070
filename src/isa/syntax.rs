//! Assembly line shape shared by all targets: a mnemonic, then operands
//! separated by commas. How a single operand is written is left to the
//! target through [`OperandSyntax`].

use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::error::IsaError;

use super::slot::{Slot, SlotList, SlotValue};

/// Longest operand list a line may carry.
pub const MAX_OPERANDS: usize = 8;

pub type OperandTokens<'a> = ArrayVec<&'a str, MAX_OPERANDS>;

/// Target-specific spelling of one operand.
pub trait OperandSyntax {
    fn format_operand(slot: &Slot, value: SlotValue) -> String;

    /// Reads `token` as a value for `slot`. Does not check the slot's valid set.
    fn parse_operand(slot: &Slot, token: &str) -> Option<SlotValue>;
}

/// Splits a line into its mnemonic and the (trimmed) operand text.
pub fn split_mnemonic(text: &str) -> Option<(&str, &str)> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.split_once(char::is_whitespace) {
        Some((mnemonic, rest)) => Some((mnemonic, rest.trim())),
        None => Some((text, "")),
    }
}

/// Splits operand text on commas. Empty operands are rejected.
pub fn split_operands(rest: &str) -> Option<OperandTokens<'_>> {
    let mut tokens = OperandTokens::new();
    if rest.is_empty() {
        return Some(tokens);
    }
    for token in rest.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        tokens.try_push(token).ok()?;
    }
    Some(tokens)
}

pub fn format_line<S: OperandSyntax>(mnemonic: &str, slots: &[Slot]) -> Result<String, IsaError> {
    if slots.is_empty() {
        return Ok(mnemonic.to_string());
    }
    let operands: Vec<String> = slots
        .iter()
        .map(|slot| Ok(S::format_operand(slot, slot.populated_value()?)))
        .collect::<Result<_, IsaError>>()?;
    Ok(format!("{} {}", mnemonic, operands.iter().join(", ")))
}

/// Fills `shape` from `text`, or returns `None` if the mnemonic differs, the
/// operand count is wrong, or an operand is malformed or out of its domain.
pub fn parse_line<S: OperandSyntax>(
    mnemonic: &str,
    text: &str,
    mut shape: SlotList,
) -> Option<SlotList> {
    let (found, rest) = split_mnemonic(text)?;
    if found != mnemonic {
        return None;
    }
    let tokens = split_operands(rest)?;
    if tokens.len() != shape.len() {
        return None;
    }
    for (slot, token) in shape.iter_mut().zip(tokens) {
        let value = S::parse_operand(slot, token)?;
        slot.set_value(value).ok()?;
    }
    Some(shape)
}

/// [`parse_line`] that appends to `out` on success and leaves it alone
/// otherwise.
pub fn parse_into<S: OperandSyntax>(
    mnemonic: &str,
    text: &str,
    shape: SlotList,
    out: &mut SlotList,
) -> bool {
    match parse_line::<S>(mnemonic, text, shape) {
        Some(slots) => {
            out.extend(slots);
            true
        }
        None => false,
    }
}
