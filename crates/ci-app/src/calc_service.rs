//! Running scenario calculations through the form controller.

use std::path::Path;

use ci_core::Field;
use ci_form::{DisplayOptions, FormState, Rendered};
use ci_project::{CalculationDef, Scenario};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Outcome of one calculation, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub id: String,
    pub name: String,
    pub solve_for: Field,
    /// One of `value`, `advisory`, `validation_error`, `solve_error`, `unexpected`.
    pub outcome: String,
    pub line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl CalculationReport {
    fn new(calc: &CalculationDef, rendered: Rendered) -> Self {
        Self {
            id: calc.id.clone(),
            name: calc.display_name().to_string(),
            solve_for: rendered.target,
            outcome: rendered.kind.label().to_string(),
            line: rendered.line,
            value: rendered.value,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self.outcome.as_str(),
            "validation_error" | "solve_error" | "unexpected"
        )
    }
}

/// All results of a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub generated_at: String,
    pub results: Vec<CalculationReport>,
}

impl ScenarioReport {
    pub fn new(scenario: &Scenario, results: Vec<CalculationReport>) -> Self {
        Self {
            scenario: scenario.name.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            results,
        }
    }
}

/// Build a form with the calculation's target selected and its values entered.
pub fn form_from_calculation(
    calc: &CalculationDef,
    display: DisplayOptions,
) -> AppResult<FormState> {
    let mut form = FormState::new()
        .with_target(calc.solve_for)
        .with_display(display);
    for field in calc.solve_for.knowns() {
        let value = calc
            .value(field)
            .map_err(|e| AppError::InvalidInput(format!("calculation '{}': {}", calc.id, e)))?;
        form.set_value(field, value);
    }
    Ok(form)
}

/// Run a single calculation and render its line.
pub fn run_calculation(
    calc: &CalculationDef,
    display: DisplayOptions,
) -> AppResult<CalculationReport> {
    let form = form_from_calculation(calc, display)?;
    let rendered = form.calculate();
    tracing::debug!(
        id = %calc.id,
        target = calc.solve_for.key(),
        outcome = rendered.kind.label(),
        "ran calculation"
    );
    Ok(CalculationReport::new(calc, rendered))
}

/// Run every calculation in the scenario, in file order.
pub fn run_scenario(scenario: &Scenario, display: DisplayOptions) -> AppResult<ScenarioReport> {
    tracing::info!(
        scenario = %scenario.name,
        calculations = scenario.calculations.len(),
        "running scenario"
    );
    let results = scenario
        .calculations
        .iter()
        .map(|calc| run_calculation(calc, display))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(ScenarioReport::new(scenario, results))
}

/// Write a report as pretty JSON.
pub fn write_report(path: &Path, report: &ScenarioReport) -> AppResult<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
