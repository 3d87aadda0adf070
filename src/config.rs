//! Initial machine state read from YAML.
//!
//! ```yaml
//! target: avr
//! log_level: debug
//! registers:
//!   r16: 18
//!   3: 255
//! status: 3
//! ```

use std::path::Path;

use yaml_rust2::{Yaml, YamlLoader};

use crate::{
    error::IsaError,
    isa::machine::{RegisterValue, TargetMachine},
    log::Level,
};

const KNOWN_KEYS: [&str; 4] = ["target", "log_level", "registers", "status"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MachineConfig {
    pub target: String,
    pub log_level: Option<Level>,
    /// `(index, value)` pairs, applied in file order.
    pub registers: Vec<(usize, RegisterValue)>,
    pub status: Option<RegisterValue>,
}

fn config_error(msg: impl Into<String>) -> IsaError {
    IsaError::Config(msg.into())
}

fn parse_value(value: &Yaml, what: &str) -> Result<RegisterValue, IsaError> {
    value
        .as_i64()
        .and_then(|v| RegisterValue::try_from(v).ok())
        .ok_or_else(|| config_error(format!("{} must be a non-negative integer", what)))
}

/// Accepts `r<index>` or a bare integer index.
fn parse_register_key(key: &Yaml) -> Result<usize, IsaError> {
    let index = match key {
        Yaml::Integer(i) => usize::try_from(*i).ok(),
        Yaml::String(s) => s
            .strip_prefix('r')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok()),
        _ => None,
    };
    index.ok_or_else(|| config_error(format!("invalid register name {:?}", key)))
}

impl MachineConfig {
    pub fn for_target(target: &str) -> Self {
        Self {
            target: target.to_string(),
            ..Self::default()
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IsaError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            error!("cannot read configuration {}: {}", path.display(), e);
            config_error(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml_str(&yaml).inspect_err(|e| {
            error!("{}: {}", path.display(), e);
        })?;
        info!("loaded {} configuration from {}", config.target, path.display());
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, IsaError> {
        let docs = YamlLoader::load_from_str(yaml).map_err(|e| config_error(e.to_string()))?;
        let data = docs
            .first()
            .ok_or_else(|| config_error("empty configuration"))?;
        let hash = data
            .as_hash()
            .ok_or_else(|| config_error("configuration must be a mapping"))?;

        for key in hash.keys() {
            match key.as_str() {
                Some(k) if KNOWN_KEYS.contains(&k) => {}
                _ => warn!("ignoring unknown configuration key {:?}", key),
            }
        }

        let target = data["target"]
            .as_str()
            .ok_or_else(|| config_error("missing `target`"))?
            .to_string();

        let log_level = match &data["log_level"] {
            Yaml::BadValue | Yaml::Null => None,
            Yaml::String(s) => Some(s.parse::<Level>().map_err(config_error)?),
            other => return Err(config_error(format!("invalid log_level {:?}", other))),
        };

        let registers = match &data["registers"] {
            Yaml::BadValue | Yaml::Null => Vec::new(),
            Yaml::Hash(regs) => regs
                .iter()
                .map(|(key, value)| {
                    let index = parse_register_key(key)?;
                    Ok((index, parse_value(value, "register value")?))
                })
                .collect::<Result<_, IsaError>>()?,
            _ => return Err(config_error("`registers` must be a mapping")),
        };

        let status = match &data["status"] {
            Yaml::BadValue | Yaml::Null => None,
            value => Some(parse_value(value, "status")?),
        };

        Ok(Self {
            target,
            log_level,
            registers,
            status,
        })
    }

    /// Writes the configured register values, truncated to the register width.
    pub fn apply_registers<M: TargetMachine>(&self, machine: &mut M) -> Result<(), IsaError> {
        for &(index, value) in &self.registers {
            machine.set_register_value(index, value)?;
        }
        Ok(())
    }
}
