//! Shared application service layer for the compound interest calculator.
//!
//! Frontends go through this crate to load scenario files, run calculations
//! through the form controller, and export schedules and reports.

pub mod calc_service;
pub mod error;
pub mod scenario_service;
pub mod schedule;

// Re-export key types for convenience
pub use calc_service::{
    CalculationReport, ScenarioReport, form_from_calculation, run_calculation, run_scenario,
    write_report,
};
pub use error::{AppError, AppResult};
pub use scenario_service::{
    CalculationSummary, get_calculation, list_calculations, load_scenario, save_scenario,
    validate_scenario,
};
pub use schedule::{MAX_SCHEDULE_ROWS, ScheduleRow, growth_schedule, schedule_csv};
