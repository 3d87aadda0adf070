use crate::isa::{syntax::OperandSyntax, Slot, SlotKind, SlotValue};

/// `r<n>` registers; decimal or `0x` hexadecimal immediates, always
/// printed in decimal.
pub struct AvrSyntax;

fn parse_decimal(digits: &str) -> Option<SlotValue> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_immediate(token: &str) -> Option<SlotValue> {
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            SlotValue::from_str_radix(hex, 16).ok()
        }
        Some(_) => None,
        None => parse_decimal(token),
    }
}

impl OperandSyntax for AvrSyntax {
    fn format_operand(slot: &Slot, value: SlotValue) -> String {
        match slot.kind() {
            SlotKind::Register(_) => format!("r{}", value),
            SlotKind::Immediate => value.to_string(),
        }
    }

    fn parse_operand(slot: &Slot, token: &str) -> Option<SlotValue> {
        match slot.kind() {
            SlotKind::Register(_) => parse_decimal(token.strip_prefix('r')?),
            SlotKind::Immediate => parse_immediate(token),
        }
    }
}
