//! Named compounding frequencies.

use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult, is_whole};

/// Common compounding schedules and their periods per year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Compounding {
    Annually,
    Semiannually,
    Quarterly,
    Bimonthly,
    Monthly,
    Semimonthly,
    Biweekly,
    Weekly,
    Daily,
}

impl Compounding {
    pub const ALL: [Compounding; 9] = [
        Compounding::Annually,
        Compounding::Semiannually,
        Compounding::Quarterly,
        Compounding::Bimonthly,
        Compounding::Monthly,
        Compounding::Semimonthly,
        Compounding::Biweekly,
        Compounding::Weekly,
        Compounding::Daily,
    ];

    /// Number of compounding events per year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            Compounding::Annually => 1,
            Compounding::Semiannually => 2,
            Compounding::Quarterly => 4,
            Compounding::Bimonthly => 6,
            Compounding::Monthly => 12,
            Compounding::Semimonthly => 24,
            Compounding::Biweekly => 26,
            Compounding::Weekly => 52,
            Compounding::Daily => 365,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Compounding::Annually => "annually",
            Compounding::Semiannually => "semiannually",
            Compounding::Quarterly => "quarterly",
            Compounding::Bimonthly => "bimonthly",
            Compounding::Monthly => "monthly",
            Compounding::Semimonthly => "semimonthly",
            Compounding::Biweekly => "biweekly",
            Compounding::Weekly => "weekly",
            Compounding::Daily => "daily",
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Compounding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = match lowered.as_str() {
            "annual" | "yearly" => "annually",
            "semiannual" | "semi-annually" | "semi-annual" => "semiannually",
            "semi-monthly" => "semimonthly",
            other => other,
        };
        Compounding::ALL
            .into_iter()
            .find(|c| c.name() == key)
            .ok_or_else(|| CoreError::UnknownFrequency {
                text: s.to_string(),
            })
    }
}

/// Parse a frequency given either as a preset name or a positive whole number.
pub fn parse_frequency(text: &str) -> CoreResult<u32> {
    let trimmed = text.trim();
    if let Ok(preset) = trimmed.parse::<Compounding>() {
        return Ok(preset.periods_per_year());
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v >= 1.0 && is_whole(v) && v <= u32::MAX as f64 => Ok(v as u32),
        _ => Err(CoreError::UnknownFrequency {
            text: text.to_string(),
        }),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_positive_count_parses(n in 1_u32..1_000_000) {
            prop_assert_eq!(parse_frequency(&n.to_string()).unwrap(), n);
        }
    }
}
