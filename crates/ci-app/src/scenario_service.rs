//! Scenario loading, saving, validation, and introspection.

use std::path::Path;

use ci_core::Field;
use ci_project::{CalculationDef, Scenario};

use crate::error::{AppError, AppResult};

/// Summary of a calculation for listing.
#[derive(Debug, Clone)]
pub struct CalculationSummary {
    pub id: String,
    pub name: String,
    pub solve_for: Field,
    pub supplied: Vec<Field>,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a scenario from YAML, or JSON when the extension is `.json`.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario = if is_json(path) {
        ci_project::from_json_str(&content)?
    } else {
        ci_project::from_yaml_str(&content)?
    };

    tracing::debug!(
        path = %path.display(),
        calculations = scenario.calculations.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Save a scenario in the format implied by the file extension.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    ci_project::validate_scenario(scenario)?;
    let content = if is_json(path) {
        serde_json::to_string_pretty(scenario)
            .map_err(|e| AppError::Project(format!("Failed to serialize scenario: {}", e)))?
    } else {
        serde_yaml::to_string(scenario)
            .map_err(|e| AppError::Project(format!("Failed to serialize scenario: {}", e)))?
    };

    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Validate scenario structure.
pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    if scenario.calculations.is_empty() {
        return Err(AppError::Validation(
            "Scenario must have at least one calculation".to_string(),
        ));
    }
    ci_project::validate_scenario(scenario)?;
    Ok(())
}

/// List all calculations in the scenario with summaries.
pub fn list_calculations(scenario: &Scenario) -> Vec<CalculationSummary> {
    scenario
        .calculations
        .iter()
        .map(|calc| CalculationSummary {
            id: calc.id.clone(),
            name: calc.display_name().to_string(),
            solve_for: calc.solve_for,
            supplied: ci_core::ALL_FIELDS
                .into_iter()
                .filter(|f| calc.supplies(*f))
                .collect(),
        })
        .collect()
}

/// Get a specific calculation by ID.
pub fn get_calculation<'a>(scenario: &'a Scenario, id: &str) -> AppResult<&'a CalculationDef> {
    scenario
        .calculations
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::CalculationNotFound(id.to_string()))
}
