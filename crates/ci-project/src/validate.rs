//! Scenario validation logic.

use crate::schema::{CalculationDef, FrequencyDef, Scenario};
use ci_core::Field;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let mut ids = HashSet::new();
    for calc in &scenario.calculations {
        if !ids.insert(&calc.id) {
            return Err(ValidationError::DuplicateId {
                id: calc.id.clone(),
                context: format!("scenario '{}' calculations", scenario.name),
            });
        }
        validate_calculation(calc, scenario.version)?;
    }

    Ok(())
}

fn validate_calculation(calc: &CalculationDef, version: u32) -> Result<(), ValidationError> {
    if calc.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "id".to_string(),
            value: format!("{:?}", calc.id),
            reason: "calculation ids must not be blank".to_string(),
        });
    }

    // Migration has already moved the v0 key; a current file must not use it.
    if version >= crate::migrate::LATEST_VERSION
        && let Some(n) = calc.compounds_per_year
    {
        return Err(ValidationError::InvalidValue {
            field: format!("calculation '{}' compounds_per_year", calc.id),
            value: n.to_string(),
            reason: format!(
                "replaced by '{}' since version {}",
                Field::Frequency.key(),
                crate::migrate::LATEST_VERSION
            ),
        });
    }

    if calc.supplies(calc.solve_for) {
        return Err(ValidationError::InvalidValue {
            field: format!("calculation '{}' {}", calc.id, calc.solve_for.key()),
            value: "set".to_string(),
            reason: "the field being solved for must be left empty".to_string(),
        });
    }

    if let Some(FrequencyDef::Preset(name)) = &calc.frequency
        && ci_core::parse_frequency(name).is_err()
    {
        return Err(ValidationError::InvalidValue {
            field: format!("calculation '{}' {}", calc.id, Field::Frequency.key()),
            value: name.clone(),
            reason: "unknown compounding frequency".to_string(),
        });
    }

    Ok(())
}
