use bitfield::{Bit, BitMut};

use crate::frontends::avr::machine::AvrMachine;

impl AvrMachine {
    fn status_shr(&mut self, rd: u8, result: u8) {
        self.sreg.set_c(rd.bit(0));
        self.sreg.set_z(result == 0);
        self.sreg.set_n(result.bit(7));
        self.sreg.set_v(self.sreg.n() ^ self.sreg.c());
        self.sreg.set_s(self.sreg.n() ^ self.sreg.v());
    }
}

pub(super) fn lsr(m: &mut AvrMachine, ops: &mut [u8]) {
    let rd = ops[0];
    ops[0] = rd >> 1;
    m.status_shr(rd, ops[0]);
}

pub(super) fn ror(m: &mut AvrMachine, ops: &mut [u8]) {
    let rd = ops[0];
    ops[0] = rd >> 1 | if m.sreg.c() { 0x80 } else { 0x00 };
    m.status_shr(rd, ops[0]);
}

pub(super) fn asr(m: &mut AvrMachine, ops: &mut [u8]) {
    let rd = ops[0];
    ops[0] = rd >> 1 | rd & 0x80;
    m.status_shr(rd, ops[0]);
}

pub(super) fn swap(_: &mut AvrMachine, ops: &mut [u8]) {
    ops[0] = ops[0].rotate_left(4);
}

pub(super) fn bst(m: &mut AvrMachine, ops: &mut [u8]) {
    m.sreg.set_t(ops[0].bit(ops[1] as usize));
}

pub(super) fn bld(m: &mut AvrMachine, ops: &mut [u8]) {
    let b = ops[1] as usize;
    ops[0].set_bit(b, m.sreg.t());
}

pub(super) fn bset(m: &mut AvrMachine, ops: &mut [u8]) {
    m.sreg.set_bit(ops[0] as usize, true);
}

pub(super) fn bclr(m: &mut AvrMachine, ops: &mut [u8]) {
    m.sreg.set_bit(ops[0] as usize, false);
}
