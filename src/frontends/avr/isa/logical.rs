use bitfield::Bit;

use crate::frontends::avr::machine::AvrMachine;

impl AvrMachine {
    fn status_logic(&mut self, r: u8) {
        self.sreg.set_z(r == 0);
        self.sreg.set_n(r.bit(7));
        self.sreg.set_v(false);
        self.sreg.set_s(r.bit(7));
    }
}

fn apply_logic(m: &mut AvrMachine, ops: &mut [u8], op: fn(u8, u8) -> u8) {
    let result = op(ops[0], ops[1]);
    m.status_logic(result);
    ops[0] = result;
}

/// `and` and `andi`.
pub(super) fn and(m: &mut AvrMachine, ops: &mut [u8]) {
    apply_logic(m, ops, |rd, rr| rd & rr);
}

/// `or` and `ori`.
pub(super) fn or(m: &mut AvrMachine, ops: &mut [u8]) {
    apply_logic(m, ops, |rd, rr| rd | rr);
}

pub(super) fn eor(m: &mut AvrMachine, ops: &mut [u8]) {
    apply_logic(m, ops, |rd, rr| rd ^ rr);
}

pub(super) fn com(m: &mut AvrMachine, ops: &mut [u8]) {
    let result = !ops[0];
    m.sreg.set_c(true);
    m.status_logic(result);
    ops[0] = result;
}

pub(super) fn neg(m: &mut AvrMachine, ops: &mut [u8]) {
    let rd = ops[0];
    let result = 0x00u8.wrapping_sub(rd);

    m.sreg.set_c(result != 0);
    m.sreg.set_z(result == 0);
    m.sreg.set_n(result.bit(7));
    m.sreg.set_v(result == 0x80);
    m.sreg.set_s(m.sreg.n() ^ m.sreg.v());
    m.sreg.set_h(result.bit(3) | rd.bit(3));
    ops[0] = result;
}
