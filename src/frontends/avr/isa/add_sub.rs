use bitfield::Bit;

use crate::frontends::avr::machine::AvrMachine;

impl AvrMachine {
    fn status_add(&mut self, rd: u8, rr: u8, r: u8) {
        let rd7 = rd.bit(7);
        let rr7 = rr.bit(7);
        let r7 = r.bit(7);
        let rd3 = rd.bit(3);
        let rr3 = rr.bit(3);
        let r3 = r.bit(3);

        self.sreg.set_c(rd7 && rr7 || rd7 && !r7 || !r7 && rr7);
        self.sreg.set_z(r == 0x00);
        self.sreg.set_n(r7);
        self.sreg.set_v(rd7 && rr7 && !r7 || !rd7 && !rr7 && r7);
        self.sreg.set_s(self.sreg.n() ^ self.sreg.v());
        self.sreg.set_h(rd3 && rr3 || rd3 && !r3 || !r3 && rr3);
    }

    /// Flags of `r = rd - rr`. With `keep_zero`, Z can only stay set, which
    /// chains multi-byte subtractions and compares.
    fn status_sub(&mut self, rd: u8, rr: u8, r: u8, keep_zero: bool) {
        let rd7 = rd.bit(7);
        let rr7 = rr.bit(7);
        let r7 = r.bit(7);
        let rd3 = rd.bit(3);
        let rr3 = rr.bit(3);
        let r3 = r.bit(3);

        let z = r == 0x00 && (!keep_zero || self.sreg.z());
        self.sreg.set_c(!rd7 && rr7 || rr7 && r7 || r7 && !rd7);
        self.sreg.set_z(z);
        self.sreg.set_n(r7);
        self.sreg.set_v(rd7 && !rr7 && !r7 || !rd7 && rr7 && r7);
        self.sreg.set_s(self.sreg.n() ^ self.sreg.v());
        self.sreg.set_h(!rd3 && rr3 || rr3 && r3 || r3 && !rd3);
    }

    fn status_inc_dec(&mut self, r: u8, overflow: u8) {
        self.sreg.set_z(r == 0);
        self.sreg.set_n(r.bit(7));
        self.sreg.set_v(r == overflow);
        self.sreg.set_s(self.sreg.n() ^ self.sreg.v());
    }
}

pub(super) fn add(m: &mut AvrMachine, ops: &mut [u8]) {
    let (rd, rr) = (ops[0], ops[1]);
    let result = rd.wrapping_add(rr);
    m.status_add(rd, rr, result);
    ops[0] = result;
}

pub(super) fn adc(m: &mut AvrMachine, ops: &mut [u8]) {
    let (rd, rr) = (ops[0], ops[1]);
    let result = rd.wrapping_add(rr).wrapping_add(m.sreg.c() as u8);
    m.status_add(rd, rr, result);
    ops[0] = result;
}

/// `sub` and `subi`.
pub(super) fn sub(m: &mut AvrMachine, ops: &mut [u8]) {
    let (rd, rr) = (ops[0], ops[1]);
    let result = rd.wrapping_sub(rr);
    m.status_sub(rd, rr, result, false);
    ops[0] = result;
}

/// `sbc` and `sbci`.
pub(super) fn sbc(m: &mut AvrMachine, ops: &mut [u8]) {
    let (rd, rr) = (ops[0], ops[1]);
    let result = rd.wrapping_sub(rr).wrapping_sub(m.sreg.c() as u8);
    m.status_sub(rd, rr, result, true);
    ops[0] = result;
}

/// `cp` and `cpi`: flags only.
pub(super) fn cp(m: &mut AvrMachine, ops: &mut [u8]) {
    let (rd, rr) = (ops[0], ops[1]);
    m.status_sub(rd, rr, rd.wrapping_sub(rr), false);
}

pub(super) fn cpc(m: &mut AvrMachine, ops: &mut [u8]) {
    let (rd, rr) = (ops[0], ops[1]);
    let result = rd.wrapping_sub(rr).wrapping_sub(m.sreg.c() as u8);
    m.status_sub(rd, rr, result, true);
}

pub(super) fn inc(m: &mut AvrMachine, ops: &mut [u8]) {
    let result = ops[0].wrapping_add(1);
    m.status_inc_dec(result, 0x80);
    ops[0] = result;
}

pub(super) fn dec(m: &mut AvrMachine, ops: &mut [u8]) {
    let result = ops[0].wrapping_sub(1);
    m.status_inc_dec(result, 0x7F);
    ops[0] = result;
}
