use std::fmt::{Debug, Display};

use crate::error::IsaError;

use super::{instruction::Instruction, machine::TargetMachine, slot::SlotList};

/// The ordered instruction set of one frontend.
///
/// Order is significant: when more than one instruction accepts a line, the
/// earliest one wins.
pub struct Catalog<M: TargetMachine> {
    name: &'static str,
    instructions: Vec<Box<dyn Instruction<M>>>,
}

impl<M: TargetMachine> Catalog<M> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            instructions: Vec::new(),
        }
    }

    pub fn with<I: Instruction<M> + 'static>(mut self, instruction: I) -> Self {
        self.push(instruction);
        self
    }

    pub fn push<I: Instruction<M> + 'static>(&mut self, instruction: I) {
        self.instructions.push(Box::new(instruction));
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Instruction<M>> + '_ {
        self.instructions.iter().map(|i| i.as_ref())
    }

    /// First instruction with this mnemonic.
    pub fn find(&self, mnemonic: &str) -> Option<&dyn Instruction<M>> {
        self.iter().find(|i| i.name() == mnemonic)
    }

    /// Tries every instruction in order and keeps the first that parses.
    pub fn parse_line(&self, text: &str) -> Result<ParsedLine<'_, M>, IsaError> {
        let mut slots = SlotList::new();
        match self.iter().find(|i| i.parse(text, &mut slots)) {
            Some(instruction) => {
                debug!("{}: parsed {:?} as {}", self.name, text, instruction.name());
                Ok(ParsedLine { instruction, slots })
            }
            None => {
                debug!("{}: no instruction matches {:?}", self.name, text);
                Err(IsaError::UnrecognizedInstruction(text.trim().to_string()))
            }
        }
    }

    /// Parses `text` and runs it against `machine`.
    pub fn execute_line(&self, machine: &mut M, text: &str) -> Result<usize, IsaError> {
        self.parse_line(text)?.execute(machine)
    }
}

impl<M: TargetMachine> Debug for Catalog<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("name", &self.name)
            .field("instructions", &self.instructions)
            .finish()
    }
}

/// An instruction together with the slots parsed for it.
pub struct ParsedLine<'a, M: TargetMachine> {
    instruction: &'a dyn Instruction<M>,
    slots: SlotList,
}

impl<'a, M: TargetMachine> ParsedLine<'a, M> {
    pub fn instruction(&self) -> &'a dyn Instruction<M> {
        self.instruction
    }

    pub fn slots(&self) -> &SlotList {
        &self.slots
    }

    pub fn into_slots(self) -> SlotList {
        self.slots
    }

    pub fn execute(&self, machine: &mut M) -> Result<usize, IsaError> {
        self.instruction.execute(machine, &self.slots)
    }
}

impl<M: TargetMachine> Debug for ParsedLine<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedLine")
            .field("instruction", &self.instruction.name())
            .field("slots", &self.slots)
            .finish()
    }
}

impl<M: TargetMachine> Display for ParsedLine<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .instruction
            .format(&self.slots)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::test_helper::{Load, Move, Nibbles};

    fn catalog() -> Catalog<Nibbles> {
        Catalog::new("nibbles")
            .with(Move("mv"))
            .with(Load("ld"))
            .with(Move("ld"))
            .with(Load("li"))
            .with(Load("li"))
    }

    #[test]
    fn first_match_wins() {
        let cat = catalog();

        let line = cat.parse_line("ld n1, 7").unwrap();
        assert_eq!(line.instruction().number_of_slots(), 2);
        assert!(!line.slots()[1].is_register());

        // `ld n1, n2` only fits the second `ld`.
        let line = cat.parse_line("ld n1, n2").unwrap();
        assert!(line.slots()[1].is_register());

        // Two identical `li` forms: the first one is picked.
        let line = cat.parse_line("li n0, 3").unwrap();
        let first = cat.iter().nth(3).unwrap();
        assert!(std::ptr::addr_eq(line.instruction(), first));
    }

    #[test]
    fn unrecognized_line() {
        let cat = catalog();
        assert_eq!(
            cat.parse_line("  jmp n1 ").unwrap_err(),
            IsaError::UnrecognizedInstruction("jmp n1".to_string())
        );
        // Immediate out of the 4-bit domain: no form accepts it.
        assert!(cat.parse_line("li n0, 16").is_err());
    }

    #[test]
    fn execute_line_updates_machine() {
        let cat = catalog();
        let mut m = Nibbles::default();
        assert_eq!(cat.execute_line(&mut m, "li n2, 9"), Ok(2));
        assert_eq!(cat.execute_line(&mut m, "mv n5, n2"), Ok(2));
        assert_eq!(m.register_value(5), Ok(9));
    }

    #[test]
    fn parsed_line_displays_canonical_text() {
        let cat = catalog();
        let line = cat.parse_line("mv   n5 ,n2").unwrap();
        assert_eq!(line.to_string(), "mv n5, n2");
    }

    #[test]
    fn find_by_mnemonic() {
        let cat = catalog();
        assert_eq!(cat.len(), 5);
        assert_eq!(cat.find("ld").unwrap().syntax(), "ld S1, S2");
        assert!(cat.find("add").is_none());
    }

    #[test]
    fn failed_parse_leaves_output_alone() {
        let mut out = SlotList::new();
        assert!(!Load("ld").parse("ld n1, n2", &mut out));
        assert!(out.is_empty());

        assert!(Load("ld").parse("ld n1, 2", &mut out));
        assert!(!Move("mv").parse("ld n1, 2", &mut out));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn execute_checks_slots() {
        let mut m = Nibbles::default();
        let load = Load("ld");

        let err = load.execute(&mut m, &[]).unwrap_err();
        assert_eq!(
            err,
            IsaError::ArityMismatch {
                mnemonic: "ld",
                expected: 2,
                actual: 0
            }
        );

        // A register slot from another instruction shape holding an index
        // this instruction does not accept.
        let mut slots = load.slots();
        slots[0]
            .set_valid_values(crate::isa::ValidValues::UNCONSTRAINED)
            .unwrap();
        slots[0].set_value(9).unwrap();
        slots[1].set_value(1).unwrap();
        assert!(matches!(
            load.execute(&mut m, &slots),
            Err(IsaError::InvalidOperand { value: 9, .. })
        ));
        assert_eq!(m, Nibbles::default());
    }
}
