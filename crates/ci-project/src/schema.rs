//! Scenario schema definitions.

use ci_core::{Compounding, CoreResult, Field, parse_frequency};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub calculations: Vec<CalculationDef>,
}

/// One calculation: the field to solve for and the supplied values.
///
/// ```yaml
/// - id: monthly
///   name: Monthly compounding
///   solve_for: amount
///   principal: 1000
///   rate: 5
///   time: 1
///   frequency: monthly
/// ```
///
/// Range checks are left to the form controller so that a scenario can
/// record inputs that will be reported as invalid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub solve_for: Field,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<FrequencyDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Version 0 spelling of `frequency`; moved over by migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compounds_per_year: Option<f64>,
}

impl CalculationDef {
    pub fn new(id: impl Into<String>, solve_for: Field) -> Self {
        Self {
            id: id.into(),
            name: None,
            solve_for,
            principal: None,
            rate: None,
            time: None,
            frequency: None,
            amount: None,
            compounds_per_year: None,
        }
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Whether a value was written for `field`.
    pub fn supplies(&self, field: Field) -> bool {
        match field {
            Field::Principal => self.principal.is_some(),
            Field::Rate => self.rate.is_some(),
            Field::Time => self.time.is_some(),
            Field::Frequency => self.frequency.is_some(),
            Field::Amount => self.amount.is_some(),
        }
    }

    /// Numeric value for `field`, resolving frequency presets.
    pub fn value(&self, field: Field) -> CoreResult<Option<f64>> {
        Ok(match field {
            Field::Principal => self.principal,
            Field::Rate => self.rate,
            Field::Time => self.time,
            Field::Frequency => match &self.frequency {
                Some(def) => Some(def.periods_per_year()?),
                None => None,
            },
            Field::Amount => self.amount,
        })
    }
}

/// Compounding frequency as a count or a preset name (`monthly`, `"12"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FrequencyDef {
    Periods(f64),
    Preset(String),
}

impl FrequencyDef {
    pub fn periods_per_year(&self) -> CoreResult<f64> {
        match self {
            FrequencyDef::Periods(n) => Ok(*n),
            FrequencyDef::Preset(name) => Ok(f64::from(parse_frequency(name)?)),
        }
    }
}

impl From<Compounding> for FrequencyDef {
    fn from(preset: Compounding) -> Self {
        FrequencyDef::Preset(preset.name().to_string())
    }
}

impl From<u32> for FrequencyDef {
    fn from(n: u32) -> Self {
        FrequencyDef::Periods(f64::from(n))
    }
}
