//! Display formatting for calculation outcomes.

use ci_core::{Field, Real};

/// Fallback line for an outcome that carries no error, advisory or usable value.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Decimal places used when formatting solved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_decimals: usize,
    pub rate_decimals: usize,
    pub time_decimals: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_decimals: 2,
            rate_decimals: 2,
            time_decimals: 2,
        }
    }
}

/// Format `value` for `field`, including the unit suffix.
pub fn format_value(field: Field, value: Real, options: &DisplayOptions) -> String {
    match field {
        Field::Principal | Field::Amount => {
            format!("{:.*}{}", options.currency_decimals, value, field.unit())
        }
        Field::Rate => format!("{:.*}{}", options.rate_decimals, value, field.unit()),
        Field::Time => format!("{:.*}{}", options.time_decimals, value, field.unit()),
        Field::Frequency => format!("{:.0}{}", value.round(), field.unit()),
    }
}

/// What kind of line was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Value,
    Advisory,
    ValidationError,
    SolveError,
    Unexpected,
}

impl OutcomeKind {
    pub fn is_error(self) -> bool {
        matches!(
            self,
            OutcomeKind::ValidationError | OutcomeKind::SolveError | OutcomeKind::Unexpected
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            OutcomeKind::Value => "value",
            OutcomeKind::Advisory => "advisory",
            OutcomeKind::ValidationError => "validation_error",
            OutcomeKind::SolveError => "solve_error",
            OutcomeKind::Unexpected => "unexpected",
        }
    }
}

/// A single rendered result line.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub target: Field,
    pub kind: OutcomeKind,
    pub line: String,
    /// Unrounded solved value, present only for `OutcomeKind::Value`.
    pub value: Option<Real>,
}

impl Rendered {
    pub(crate) fn value(target: Field, value: Real, options: &DisplayOptions) -> Self {
        if !value.is_finite() {
            return Self::unexpected(target);
        }
        Self {
            target,
            kind: OutcomeKind::Value,
            line: format!("{}: {}", target.label(), format_value(target, value, options)),
            value: Some(value),
        }
    }

    pub(crate) fn advisory(target: Field, message: &str) -> Self {
        Self {
            target,
            kind: OutcomeKind::Advisory,
            line: message.to_string(),
            value: None,
        }
    }

    pub(crate) fn error(target: Field, kind: OutcomeKind, message: impl std::fmt::Display) -> Self {
        Self {
            target,
            kind,
            line: format!("Error: {message}"),
            value: None,
        }
    }

    pub(crate) fn unexpected(target: Field) -> Self {
        Self {
            target,
            kind: OutcomeKind::Unexpected,
            line: UNEXPECTED_ERROR.to_string(),
            value: None,
        }
    }
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}
