//! Form state: the active target plus one entry per field.

use std::collections::BTreeMap;

use ci_core::{ALL_FIELDS, Field, FieldValues, Real};
use ci_solver::{Solution, solver_for};

use crate::error::{FormResult, ValidationError};
use crate::render::{DisplayOptions, OutcomeKind, Rendered};
use crate::validate::validate_entry;

/// What the user typed into a field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Entry {
    #[default]
    Empty,
    Number(Real),
    /// Text that did not parse as a number.
    Text(String),
}

impl Entry {
    /// Parse user text. Blank text is `Empty`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Entry::Empty;
        }
        match trimmed.parse::<Real>() {
            Ok(v) => Entry::Number(v),
            Err(_) => Entry::Text(trimmed.to_string()),
        }
    }

    pub fn number(&self) -> Option<Real> {
        match self {
            Entry::Number(v) => Some(*v),
            Entry::Empty | Entry::Text(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Entry::Empty)
    }
}

impl From<Option<Real>> for Entry {
    fn from(value: Option<Real>) -> Self {
        value.map_or(Entry::Empty, Entry::Number)
    }
}

/// Which field is solved for, and what is entered in the others.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    active_target: Field,
    entries: BTreeMap<Field, Entry>,
    display: DisplayOptions,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Empty form solving for the final amount.
    pub fn new() -> Self {
        Self {
            active_target: Field::default(),
            entries: ALL_FIELDS.into_iter().map(|f| (f, Entry::Empty)).collect(),
            display: DisplayOptions::default(),
        }
    }

    pub fn with_target(mut self, target: Field) -> Self {
        self.select_target(target);
        self
    }

    pub fn with_value(mut self, field: Field, value: Real) -> Self {
        self.set_value(field, Some(value));
        self
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn active_target(&self) -> Field {
        self.active_target
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Every field except the target accepts input.
    pub fn is_enabled(&self, field: Field) -> bool {
        field != self.active_target
    }

    /// Make `target` the unknown.
    ///
    /// Clears the target's entry; entries of all other fields are kept.
    pub fn select_target(&mut self, target: Field) {
        self.active_target = target;
        self.entries.insert(target, Entry::Empty);
    }

    /// Store an entry. Returns `false` (and stores nothing) for the target.
    pub fn set_entry(&mut self, field: Field, entry: Entry) -> bool {
        if !self.is_enabled(field) {
            tracing::debug!(field = field.key(), "ignoring input for disabled field");
            return false;
        }
        self.entries.insert(field, entry);
        true
    }

    pub fn set_value(&mut self, field: Field, value: Option<Real>) -> bool {
        self.set_entry(field, Entry::from(value))
    }

    /// Store raw user text, parsed with [`Entry::parse`].
    pub fn set_raw(&mut self, field: Field, text: &str) -> bool {
        self.set_entry(field, Entry::parse(text))
    }

    pub fn entry(&self, field: Field) -> &Entry {
        // Every field is inserted in `new`, and nothing removes entries.
        static EMPTY: Entry = Entry::Empty;
        self.entries.get(&field).unwrap_or(&EMPTY)
    }

    /// Validate every non-target field in canonical order.
    ///
    /// The first failing field short-circuits.
    pub fn validate(&self) -> Result<FieldValues, ValidationError> {
        self.active_target
            .knowns()
            .map(|field| validate_entry(field, self.entry(field)).map(|v| (field, v)))
            .collect()
    }

    /// Validate, then run the solver registered for the target.
    pub fn solve(&self) -> FormResult<Solution> {
        let knowns = self.validate()?;
        let solution = ci_solver::solve(self.active_target, &knowns)?;
        Ok(solution)
    }

    /// Validate, solve and render exactly one display line.
    pub fn calculate(&self) -> Rendered {
        let target = self.active_target;
        let knowns = match self.validate() {
            Ok(knowns) => knowns,
            Err(err) => return Rendered::error(target, OutcomeKind::ValidationError, err),
        };
        let Some(solver) = solver_for(target) else {
            return Rendered::unexpected(target);
        };
        match solver(&knowns) {
            Ok(Solution::Value(v)) => Rendered::value(target, v, &self.display),
            Ok(Solution::Advisory(msg)) => Rendered::advisory(target, &msg),
            Err(err) => Rendered::error(target, OutcomeKind::SolveError, err),
        }
    }

    /// Error-aware variant of [`FormState::calculate`] for callers that want
    /// the typed failure rather than a display line.
    pub fn try_calculate(&self) -> FormResult<Rendered> {
        match self.solve()? {
            Solution::Value(v) => Ok(Rendered::value(self.active_target, v, &self.display)),
            Solution::Advisory(msg) => Ok(Rendered::advisory(self.active_target, &msg)),
        }
    }
}
