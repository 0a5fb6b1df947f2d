//! Scenario version migration.

use crate::ProjectError;
use crate::schema::{FrequencyDef, Scenario};

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

fn migrate_one_version(scenario: Scenario) -> Result<Scenario, ProjectError> {
    match scenario.version {
        0 => migrate_v0_to_v1(scenario),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// v0 stored the frequency as `compounds_per_year`.
fn migrate_v0_to_v1(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    for calc in &mut scenario.calculations {
        if let Some(n) = calc.compounds_per_year.take() {
            if calc.frequency.is_some() {
                return Err(ProjectError::Migration {
                    what: format!(
                        "calculation '{}' sets both frequency and compounds_per_year",
                        calc.id
                    ),
                });
            }
            calc.frequency = Some(FrequencyDef::Periods(n));
        }
    }
    scenario.version = 1;
    Ok(scenario)
}
