//! Habit periodicity definitions and period-unit date arithmetic

use crate::error::HabitrError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cadence of a habit: how often a completion is expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    /// One completion expected per day
    #[default]
    Daily,
    /// One completion expected per week
    Weekly,
}

impl Periodicity {
    /// Lowercase form used in storage and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }

    /// Length of one period unit in days
    pub fn period_days(&self) -> i64 {
        match self {
            Periodicity::Daily => 1,
            Periodicity::Weekly => 7,
        }
    }

    /// The date exactly one period unit after `date`.
    ///
    /// Weekly is plain calendar arithmetic (date + 7 days), not
    /// ISO-week bucket alignment.
    pub fn next_date(&self, date: NaiveDate) -> NaiveDate {
        date + Duration::days(self.period_days())
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = HabitrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            _ => Err(HabitrError::InvalidPeriodicity(s.to_string())),
        }
    }
}
