//! Period-by-period growth schedule.

use ci_core::{Field, Real, is_whole, percent_to_decimal};
use ci_solver::solve_amount;

use crate::error::{AppError, AppResult};

/// Upper bound on generated rows.
pub const MAX_SCHEDULE_ROWS: u64 = 100_000;

/// Balance at the end of one compounding period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRow {
    pub period: u64,
    pub time_years: Real,
    pub balance: Real,
    /// Interest earned during this period.
    pub interest: Real,
}

/// Balance after each compounding period up to `time` years.
///
/// When `frequency * time` is not whole the final row covers the partial
/// period. The last balance always equals [`solve_amount`].
pub fn growth_schedule(
    principal: Real,
    rate_pct: Real,
    time: Real,
    frequency: Real,
) -> AppResult<Vec<ScheduleRow>> {
    let final_balance = solve_amount(principal, rate_pct, time, frequency)?;
    if !is_whole(frequency) {
        return Err(AppError::InvalidInput(format!(
            "{} must be a whole number of periods per year (got {})",
            Field::Frequency,
            frequency
        )));
    }

    let total_periods = frequency * time;
    let rows = (total_periods - 1e-9).ceil().max(1.0);
    if rows > MAX_SCHEDULE_ROWS as Real {
        return Err(AppError::InvalidInput(format!(
            "schedule would have {rows} periods; the limit is {MAX_SCHEDULE_ROWS}"
        )));
    }
    let rows = rows as u64;

    let growth = 1.0 + percent_to_decimal(rate_pct) / frequency;
    let mut schedule = Vec::with_capacity(rows as usize);
    let mut previous = principal;
    for period in 1..=rows {
        let (time_years, balance) = if period == rows {
            (time, final_balance)
        } else {
            (
                period as Real / frequency,
                principal * growth.powf(period as Real),
            )
        };
        schedule.push(ScheduleRow {
            period,
            time_years,
            balance,
            interest: balance - previous,
        });
        previous = balance;
    }

    tracing::debug!(rows, final_balance, "built growth schedule");
    Ok(schedule)
}

/// Render a schedule as CSV with a header row.
pub fn schedule_csv(rows: &[ScheduleRow]) -> String {
    let mut csv = String::from("period,time_years,balance,interest\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{:.6},{:.2},{:.2}\n",
            row.period, row.time_years, row.balance, row.interest
        ));
    }
    csv
}
