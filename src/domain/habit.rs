//! Habit entity and streak engine
//!
//! A habit owns its completion log and everything computed from it:
//! streak segmentation, longest/current streak, and broken detection.
//! The log is kept sorted ascending after every mutation; completions on
//! the same calendar day collapse to one streak position.

use crate::domain::time_input::{self, TimeInput};
use crate::domain::Periodicity;
use crate::error::{HabitrError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A tracked habit with its completion history
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    name: String,
    periodicity: Periodicity,
    created_date: NaiveDateTime,
    completion_log: Vec<NaiveDateTime>,
}

impl Habit {
    /// Create a habit with the creation date set to now
    pub fn new(name: impl Into<String>, periodicity: Periodicity) -> Self {
        Self::with_created_date(name, periodicity, time_input::now())
    }

    /// Create a habit with an explicit creation date
    pub fn with_created_date(
        name: impl Into<String>,
        periodicity: Periodicity,
        created_date: NaiveDateTime,
    ) -> Self {
        Habit {
            name: name.into(),
            periodicity,
            created_date,
            completion_log: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn created_date(&self) -> NaiveDateTime {
        self.created_date
    }

    /// The completion log, sorted ascending
    pub fn completion_log(&self) -> &[NaiveDateTime] {
        &self.completion_log
    }

    /// The most recent completion, if any
    pub fn last_completion(&self) -> Option<NaiveDateTime> {
        self.completion_log.last().copied()
    }

    /// Log a completion at the given time (now if `None`) and return the
    /// resolved timestamp. Textual input that fails ISO-8601 parsing is
    /// rejected with `InvalidTimestamp`.
    pub fn complete(&mut self, time: Option<TimeInput>) -> Result<NaiveDateTime> {
        let timestamp = match time {
            Some(input) => input.resolve()?,
            None => time_input::now(),
        };

        self.completion_log.push(timestamp);
        self.completion_log.sort();
        Ok(timestamp)
    }

    /// Unique calendar dates in the log, sorted ascending. Basis for all
    /// streak math: same-day completions count once.
    fn unique_sorted_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .completion_log
            .iter()
            .map(|timestamp| timestamp.date())
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// All streak lengths in period units, oldest first.
    ///
    /// A streak continues from one date to the next iff the gap is exactly
    /// one period unit (1 day for daily, 7 days for weekly); any other gap
    /// closes the streak and opens a new one of length 1.
    pub fn get_streaks(&self) -> Vec<u32> {
        let dates = self.unique_sorted_dates();
        if dates.is_empty() {
            return Vec::new();
        }

        let mut streaks = Vec::new();
        let mut current = 1u32;

        for pair in dates.windows(2) {
            if pair[1] == self.periodicity.next_date(pair[0]) {
                current += 1;
            } else {
                streaks.push(current);
                current = 1;
            }
        }

        streaks.push(current);
        streaks
    }

    /// Longest streak, or 0 with no completions
    pub fn get_longest_streak(&self) -> u32 {
        self.get_streaks().into_iter().max().unwrap_or(0)
    }

    /// The streak ending at the most recent completion, or 0 with no
    /// completions. Not reconciled with `is_broken`: a habit can report a
    /// nonzero current streak while already broken relative to today.
    pub fn get_current_streak(&self) -> u32 {
        self.get_streaks().last().copied().unwrap_or(0)
    }

    /// Whether the habit is broken as of the given time (now if `None`):
    /// the reference date is strictly past the next expected completion
    /// date. A habit with no completions is always broken.
    pub fn is_broken(&self, as_of: Option<TimeInput>) -> Result<bool> {
        let Some(last) = self.completion_log.last() else {
            return Ok(true);
        };

        let check = match as_of {
            Some(input) => input.resolve()?,
            None => time_input::now(),
        };

        let expected_next = self.periodicity.next_date(last.date());
        Ok(check.date() > expected_next)
    }

    /// Serialize to the canonical record shape
    pub fn to_record(&self) -> HabitRecord {
        HabitRecord {
            name: Some(self.name.clone()),
            periodicity: Some(self.periodicity.as_str().to_string()),
            created_date: Some(time_input::format_timestamp(self.created_date)),
            completion_log: self
                .completion_log
                .iter()
                .map(|timestamp| time_input::format_timestamp(*timestamp))
                .collect(),
        }
    }

    /// Rebuild a habit from its canonical record.
    ///
    /// Fails with `MissingField` when name, periodicity or created_date is
    /// absent, `InvalidPeriodicity` for an unknown periodicity, and
    /// `InvalidDateFormat` when any timestamp fails ISO-8601 parsing.
    pub fn from_record(record: &HabitRecord) -> Result<Self> {
        let name = record
            .name
            .clone()
            .ok_or(HabitrError::MissingField("name"))?;

        let periodicity: Periodicity = record
            .periodicity
            .as_deref()
            .ok_or(HabitrError::MissingField("periodicity"))?
            .parse()?;

        let created_date = parse_stored_timestamp(
            record
                .created_date
                .as_deref()
                .ok_or(HabitrError::MissingField("created_date"))?,
        )?;

        let mut completion_log = record
            .completion_log
            .iter()
            .map(|text| parse_stored_timestamp(text))
            .collect::<Result<Vec<_>>>()?;
        completion_log.sort();

        Ok(Habit {
            name,
            periodicity,
            created_date,
            completion_log,
        })
    }
}

/// Canonical serialized shape of a habit.
///
/// The identifying fields are optional so that deserialized data with an
/// absent field surfaces as `MissingField` instead of a generic parse
/// error; `to_record` always fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub name: Option<String>,
    pub periodicity: Option<String>,
    pub created_date: Option<String>,
    #[serde(default)]
    pub completion_log: Vec<String>,
}

fn parse_stored_timestamp(text: &str) -> Result<NaiveDateTime> {
    time_input::parse_iso(text).ok_or_else(|| HabitrError::InvalidDateFormat(text.to_string()))
}
