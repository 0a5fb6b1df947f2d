//! The five quantities of the compound interest equation.

use core::fmt;
use core::str::FromStr;

use crate::CoreError;

/// One of the variables in `A = P * (1 + r/n)^(n*T)`.
///
/// The declaration order is the canonical field order: validation walks
/// fields in this order and reports the first failure it meets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Field {
    Principal,
    Rate,
    Time,
    Frequency,
    #[default]
    Amount,
}

/// All fields in canonical order.
pub const ALL_FIELDS: [Field; 5] = [
    Field::Principal,
    Field::Rate,
    Field::Time,
    Field::Frequency,
    Field::Amount,
];

impl Field {
    /// Human readable label used in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Field::Principal => "Principal",
            Field::Rate => "Annual Interest Rate",
            Field::Time => "Time",
            Field::Frequency => "Compounding Frequency",
            Field::Amount => "Final Amount",
        }
    }

    /// Unit suffix appended to a formatted value (may be empty).
    pub fn unit(self) -> &'static str {
        match self {
            Field::Rate => "%",
            Field::Time => " years",
            Field::Principal | Field::Amount | Field::Frequency => "",
        }
    }

    /// Short machine name, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Field::Principal => "principal",
            Field::Rate => "rate",
            Field::Time => "time",
            Field::Frequency => "frequency",
            Field::Amount => "amount",
        }
    }

    /// The four fields that are supplied when `self` is solved for.
    pub fn knowns(self) -> impl Iterator<Item = Field> {
        ALL_FIELDS.into_iter().filter(move |f| *f != self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "principal" | "p" => Ok(Field::Principal),
            "rate" | "r" | "annual_rate" => Ok(Field::Rate),
            "time" | "t" | "years" => Ok(Field::Time),
            "frequency" | "n" | "compounding" => Ok(Field::Frequency),
            "amount" | "a" | "final_amount" => Ok(Field::Amount),
            _ => Err(CoreError::UnknownField {
                text: s.to_string(),
            }),
        }
    }
}
