//! Configuration validation logic.
//!
//! Structural checks only: ranges, orderings, parseable keys. The
//! physics-level rejections (condenser recovery fraction, vapor
//! pressure correlation range) live in the unit operations
//! themselves, which see the same numbers at construction.

use crate::schema::{LATEST_VERSION, ProcessConfig};
use hg_props::Species;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unknown species key {key:?} in {field}")]
    UnknownSpecies { field: &'static str, key: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn check_mass(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "mass must be finite and non-negative",
        })
    }
}

fn check_temperature(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "temperature must be finite and positive",
        })
    }
}

fn check_fraction(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "fraction must be in [0,1]",
        })
    }
}

fn check_efficiency(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "efficiency must be in (0,1]",
        })
    }
}

pub fn validate_config(config: &ProcessConfig) -> Result<(), ValidationError> {
    if config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    check_temperature(config.reference.t0_k, "reference.t0_k")?;

    check_temperature(config.feed.inlet_t_k, "feed.inlet_t_k")?;
    check_mass(config.feed.hg_kg, "feed.hg_kg")?;
    check_mass(config.feed.powder_kg, "feed.powder_kg")?;
    check_mass(config.feed.glass_kg, "feed.glass_kg")?;
    check_mass(config.feed.al_kg, "feed.al_kg")?;
    check_fraction(config.feed.hg_to_powder_fraction, "feed.hg_to_powder_fraction")?;

    check_mass(config.carrier.n2_kg, "carrier.n2_kg")?;
    check_temperature(config.carrier.inlet_t_k, "carrier.inlet_t_k")?;

    check_temperature(config.furnace.t_k, "furnace.t_k")?;
    check_efficiency(config.furnace.efficiency, "furnace.efficiency")?;
    check_fraction(config.furnace.removal_fraction, "furnace.removal_fraction")?;

    check_temperature(config.condenser.t_out_k, "condenser.t_out_k")?;
    check_efficiency(config.condenser.efficiency, "condenser.efficiency")?;
    if !(config.condenser.pressure_kpa.is_finite() && config.condenser.pressure_kpa > 0.0) {
        return Err(ValidationError::InvalidValue {
            field: "condenser.pressure_kpa",
            value: config.condenser.pressure_kpa,
            reason: "pressure must be finite and positive",
        });
    }

    Species::from_key(&config.chiller.coolant).map_err(|_| ValidationError::UnknownSpecies {
        field: "chiller.coolant",
        key: config.chiller.coolant.clone(),
    })?;
    check_temperature(config.chiller.t_cold_k, "chiller.t_cold_k")?;
    check_temperature(config.chiller.t_warm_k, "chiller.t_warm_k")?;
    check_efficiency(config.chiller.efficiency, "chiller.efficiency")?;
    if config.chiller.t_cold_k >= config.chiller.t_warm_k {
        return Err(ValidationError::InvalidValue {
            field: "chiller.t_cold_k",
            value: config.chiller.t_cold_k,
            reason: "cold supply must be below warm return",
        });
    }
    if config.chiller.t_warm_k > config.condenser.t_out_k {
        return Err(ValidationError::InvalidValue {
            field: "chiller.t_warm_k",
            value: config.chiller.t_warm_k,
            reason: "warm return must not exceed condenser outlet temperature",
        });
    }

    if !(config.cycle_time_s.is_finite() && config.cycle_time_s > 0.0) {
        return Err(ValidationError::InvalidValue {
            field: "cycle_time_s",
            value: config.cycle_time_s,
            reason: "cycle time must be finite and positive",
        });
    }

    Ok(())
}
