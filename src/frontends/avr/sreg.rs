use std::fmt::Display;

use bitfield::{bitfield, Bit};

use crate::{error::IsaError, isa::RegisterValue};

bitfield! {
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct StatusRegister(u8);
    impl Debug;
    pub c, set_c: 0;
    pub z, set_z: 1;
    pub n, set_n: 2;
    pub v, set_v: 3;
    pub s, set_s: 4;
    pub h, set_h: 5;
    pub t, set_t: 6;
    pub i, set_i: 7;
}

/// Flag letters from bit 7 down to bit 0.
pub const FLAG_NAMES: [char; 8] = ['I', 'T', 'H', 'S', 'V', 'N', 'Z', 'C'];

impl StatusRegister {
    /// Takes the low byte of a configured status word; anything wider is an error.
    pub fn from_status(status: RegisterValue) -> Result<Self, IsaError> {
        u8::try_from(status)
            .map(StatusRegister)
            .map_err(|_| IsaError::Config(format!("status {:#x} does not fit in SREG", status)))
    }
}

/// Set flags by letter, clear ones as `-`, e.g. `--H----C`.
impl Display for StatusRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, name) in FLAG_NAMES.iter().enumerate() {
            let c = if self.bit(7 - i) { *name } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
