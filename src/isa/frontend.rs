use crate::{config::MachineConfig, error::IsaError, log};

use super::{
    catalog::Catalog,
    machine::{RegisterValue, TargetMachine},
    slot::RegisterClass,
};

/// The binding of the generic core to one processor: its machine state,
/// register classes and instruction catalog.
pub trait Frontend {
    type Machine: TargetMachine + 'static;
    type RegisterClass: RegisterClass;

    /// Name used to select this frontend in configuration.
    const NAME: &'static str;

    fn catalog() -> &'static Catalog<Self::Machine>;
    fn register_classes() -> &'static [Self::RegisterClass];
    fn new_machine() -> Self::Machine;

    /// Loads a target-specific status word (flags) into the machine.
    fn apply_status(_machine: &mut Self::Machine, _status: RegisterValue) -> Result<(), IsaError> {
        Err(IsaError::Config(format!(
            "target {} has no status word",
            Self::NAME
        )))
    }

    /// Builds a fresh machine with the configured initial state.
    fn configure(config: &MachineConfig) -> Result<Self::Machine, IsaError> {
        if config.target != Self::NAME {
            return Err(IsaError::TargetMismatch {
                expected: Self::NAME,
                found: config.target.clone(),
            });
        }
        if let Some(level) = config.log_level {
            log::set_max_level(level);
        }

        let mut machine = Self::new_machine();
        config.apply_registers(&mut machine)?;
        if let Some(status) = config.status {
            Self::apply_status(&mut machine, status)?;
        }
        info!(
            "configured {} machine, {} register(s) preset",
            Self::NAME,
            config.registers.len()
        );
        Ok(machine)
    }
}
