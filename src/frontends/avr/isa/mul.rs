use bitfield::Bit;

use crate::frontends::avr::machine::AvrMachine;

impl AvrMachine {
    /// Splits a 16-bit product into the r0 (low) and r1 (high) operands.
    fn store_product(&mut self, ops: &mut [u8], result: u16) {
        let [low, high] = result.to_le_bytes();
        ops[2] = low;
        ops[3] = high;
        self.sreg.set_c(result.bit(15));
        self.sreg.set_z(result == 0);
    }
}

pub(super) fn mul(m: &mut AvrMachine, ops: &mut [u8]) {
    let result = (ops[0] as u16) * (ops[1] as u16);
    m.store_product(ops, result);
}

pub(super) fn muls(m: &mut AvrMachine, ops: &mut [u8]) {
    let rd_signed = (ops[0] as i8) as i16;
    let rr_signed = (ops[1] as i8) as i16;
    m.store_product(ops, (rd_signed * rr_signed) as u16);
}
