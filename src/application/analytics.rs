//! Read-only analytics over the habit collection
//!
//! Each function delegates to the Habit accessors; there is no
//! independent streak logic here.

use crate::domain::{time_input, Habit, Periodicity, TimeInput};
use crate::error::Result;
use chrono::NaiveDateTime;

/// A habit's longest streak
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakSummary {
    pub habit_name: String,
    pub streak_length: u32,
    pub periodicity: Periodicity,
}

/// A habit's current streak (the run ending at its most recent completion)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentStreak {
    pub habit_name: String,
    pub current_streak: u32,
    pub periodicity: Periodicity,
}

/// A habit's broken status as of a reference date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenStatus {
    pub habit_name: String,
    pub is_broken: bool,
    pub periodicity: Periodicity,
    pub last_completion: Option<NaiveDateTime>,
}

/// Habits with the given periodicity
pub fn filter_by_periodicity(habits: &[Habit], periodicity: Periodicity) -> Vec<Habit> {
    habits
        .iter()
        .filter(|habit| habit.periodicity() == periodicity)
        .cloned()
        .collect()
}

/// Longest streak summary for one habit
pub fn longest_streak_for(habit: &Habit) -> StreakSummary {
    StreakSummary {
        habit_name: habit.name().to_string(),
        streak_length: habit.get_longest_streak(),
        periodicity: habit.periodicity(),
    }
}

/// The habit with the longest streak, or `None` for an empty collection
pub fn longest_streak(habits: &[Habit]) -> Option<StreakSummary> {
    habits
        .iter()
        .map(longest_streak_for)
        .max_by_key(|summary| summary.streak_length)
}

/// Longest-streak summaries for all habits, sorted by streak length
pub fn sorted_by_streak(habits: &[Habit], descending: bool) -> Vec<StreakSummary> {
    let mut summaries: Vec<StreakSummary> = habits.iter().map(longest_streak_for).collect();
    summaries.sort_by_key(|summary| summary.streak_length);
    if descending {
        summaries.reverse();
    }
    summaries
}

/// Current streaks for all habits
pub fn current_streaks(habits: &[Habit]) -> Vec<CurrentStreak> {
    habits
        .iter()
        .map(|habit| CurrentStreak {
            habit_name: habit.name().to_string(),
            current_streak: habit.get_current_streak(),
            periodicity: habit.periodicity(),
        })
        .collect()
}

/// Broken status for all habits as of the given time (now if `None`).
/// The reference time is resolved once and applied to every habit.
pub fn broken_habits(habits: &[Habit], as_of: Option<TimeInput>) -> Result<Vec<BrokenStatus>> {
    let as_of = match as_of {
        Some(input) => input.resolve()?,
        None => time_input::now(),
    };

    habits
        .iter()
        .map(|habit| {
            Ok(BrokenStatus {
                habit_name: habit.name().to_string(),
                is_broken: habit.is_broken(Some(TimeInput::Timestamp(as_of)))?,
                periodicity: habit.periodicity(),
                last_completion: habit.last_completion(),
            })
        })
        .collect()
}
