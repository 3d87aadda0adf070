use std::fmt::{Debug, Display};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::IsaError;

pub type SlotValue = u32;

/// Operand lists of this length or shorter stay on the stack.
pub const INLINE_SLOTS: usize = 4;

pub type SlotList = SmallVec<[Slot; INLINE_SLOTS]>;

/// Whether execution reads an operand, writes it, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRole {
    read: bool,
    write: bool,
}

impl SlotRole {
    pub const READ: SlotRole = SlotRole::new(true, false);
    pub const WRITE: SlotRole = SlotRole::new(false, true);
    pub const READ_WRITE: SlotRole = SlotRole::new(true, true);

    pub const fn new(read: bool, write: bool) -> Self {
        Self { read, write }
    }

    pub const fn is_read(&self) -> bool {
        self.read
    }

    pub const fn is_write(&self) -> bool {
        self.write
    }
}

/// The legal values of a slot.
///
/// Backed by a table owned by the frontend; slots only hold a reference to it.
/// An empty table means any value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidValues(&'static [SlotValue]);

impl ValidValues {
    pub const UNCONSTRAINED: ValidValues = ValidValues(&[]);

    pub const fn new(values: &'static [SlotValue]) -> Self {
        Self(values)
    }

    pub const fn is_unconstrained(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: SlotValue) -> bool {
        self.is_unconstrained() || self.0.contains(&value)
    }

    pub const fn values(&self) -> &'static [SlotValue] {
        self.0
    }
}

impl Display for ValidValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            [] => write!(f, "any value"),
            [single] => write!(f, "{{{}}}", single),
            [first, .., last]
                if self.0.iter().tuple_windows().all(|(a, b)| *b == a + 1) =>
            {
                write!(f, "{}..={}", first, last)
            }
            values => write!(f, "{{{}}}", values.iter().join(", ")),
        }
    }
}

/// A named subset of a target's register file.
///
/// Implemented by each frontend; the table behind [`RegisterClass::registers`]
/// is built once and shared by every slot of that class.
pub trait RegisterClass: Copy + Debug + 'static {
    fn name(self) -> &'static str;
    fn registers(self) -> &'static [SlotValue];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Holds a register index drawn from the named register class.
    Register(&'static str),
    Immediate,
}

/// One operand of an instruction.
///
/// Slots come out of [`Instruction::slots`](super::Instruction::slots) empty
/// and are filled either by parsing text or by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    kind: SlotKind,
    role: SlotRole,
    valid: ValidValues,
    value: Option<SlotValue>,
}

impl Slot {
    pub const fn new(kind: SlotKind, role: SlotRole, valid: ValidValues) -> Self {
        Self {
            kind,
            role,
            valid,
            value: None,
        }
    }

    pub fn register<C: RegisterClass>(class: C, role: SlotRole) -> Self {
        Self::new(
            SlotKind::Register(class.name()),
            role,
            ValidValues::new(class.registers()),
        )
    }

    pub const fn immediate(valid: ValidValues) -> Self {
        Self::new(SlotKind::Immediate, SlotRole::READ, valid)
    }

    pub const fn kind(&self) -> SlotKind {
        self.kind
    }

    pub const fn role(&self) -> SlotRole {
        self.role
    }

    pub const fn is_register(&self) -> bool {
        matches!(self.kind, SlotKind::Register(_))
    }

    pub const fn valid_values(&self) -> ValidValues {
        self.valid
    }

    pub const fn value(&self) -> Option<SlotValue> {
        self.value
    }

    /// Like [`Slot::value`], failing when nothing has been assigned yet.
    pub fn populated_value(&self) -> Result<SlotValue, IsaError> {
        self.value.ok_or(IsaError::UnpopulatedSlot)
    }

    pub fn accepts(&self, value: SlotValue) -> bool {
        self.valid.contains(value)
    }

    pub fn set_value(&mut self, value: SlotValue) -> Result<(), IsaError> {
        if !self.accepts(value) {
            return Err(IsaError::InvalidOperand {
                value,
                domain: self.valid.to_string(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn with_value(mut self, value: SlotValue) -> Result<Self, IsaError> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Replaces the valid set. Rejected if the slot already holds a value
    /// the new set does not contain.
    pub fn set_valid_values(&mut self, valid: ValidValues) -> Result<(), IsaError> {
        if let Some(value) = self.value {
            if !valid.contains(value) {
                return Err(IsaError::InvalidOperand {
                    value,
                    domain: valid.to_string(),
                });
            }
        }
        self.valid = valid;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENS: &[SlotValue] = &[0, 2, 4, 6];
    const LOW: &[SlotValue] = &[0, 1, 2, 3];

    #[derive(Debug, Clone, Copy)]
    struct Low;

    impl RegisterClass for Low {
        fn name(self) -> &'static str {
            "low"
        }

        fn registers(self) -> &'static [SlotValue] {
            LOW
        }
    }

    #[test]
    fn set_value_checks_domain() {
        let mut slot = Slot::immediate(ValidValues::new(EVENS));
        assert!(slot.set_value(4).is_ok());
        assert_eq!(slot.value(), Some(4));

        let err = slot.set_value(3).unwrap_err();
        assert_eq!(
            err,
            IsaError::InvalidOperand {
                value: 3,
                domain: "{0, 2, 4, 6}".to_string()
            }
        );
        // A rejected assignment keeps the previous value.
        assert_eq!(slot.value(), Some(4));
    }

    #[test]
    fn unconstrained_accepts_anything() {
        let mut slot = Slot::immediate(ValidValues::UNCONSTRAINED);
        assert!(slot.set_value(0).is_ok());
        assert!(slot.set_value(u32::MAX).is_ok());
    }

    #[test]
    fn fresh_slot_is_unpopulated() {
        let slot = Slot::register(Low, SlotRole::READ);
        assert_eq!(slot.value(), None);
        assert_eq!(slot.populated_value(), Err(IsaError::UnpopulatedSlot));
    }

    #[test]
    fn register_slot_takes_class_table() {
        let slot = Slot::register(Low, SlotRole::READ_WRITE);
        assert_eq!(slot.kind(), SlotKind::Register("low"));
        assert_eq!(slot.valid_values().values(), LOW);
        assert!(slot.role().is_read());
        assert!(slot.role().is_write());
        assert!(slot.accepts(3));
        assert!(!slot.accepts(4));
    }

    #[test]
    fn set_valid_values_keeps_current_value_legal() {
        let mut slot = Slot::immediate(ValidValues::UNCONSTRAINED);
        slot.set_value(3).unwrap();
        assert!(slot.set_valid_values(ValidValues::new(EVENS)).is_err());
        assert!(slot.valid_values().is_unconstrained());

        assert!(slot.set_valid_values(ValidValues::new(LOW)).is_ok());
        assert_eq!(slot.valid_values().values(), LOW);
    }

    #[test]
    fn valid_values_display() {
        assert_eq!(ValidValues::UNCONSTRAINED.to_string(), "any value");
        assert_eq!(ValidValues::new(&[7]).to_string(), "{7}");
        assert_eq!(ValidValues::new(LOW).to_string(), "0..=3");
        assert_eq!(ValidValues::new(EVENS).to_string(), "{0, 2, 4, 6}");
    }
}
