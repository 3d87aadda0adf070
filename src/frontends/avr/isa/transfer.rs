use crate::frontends::avr::machine::AvrMachine;

/// `mov` and `ldi`: the source operand lands in the destination.
pub(super) fn mov(_: &mut AvrMachine, ops: &mut [u8]) {
    ops[0] = ops[1];
}

pub(super) fn nop(_: &mut AvrMachine, _: &mut [u8]) {}
