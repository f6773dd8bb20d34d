//! Output formatting utilities

use crate::application::analytics::{BrokenStatus, CurrentStreak, StreakSummary};
use crate::domain::{time_input, Habit};

/// Format the habit collection for display
pub fn format_habit_list(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    let mut output = String::new();
    for (index, habit) in habits.iter().enumerate() {
        let completions = habit.completion_log().len();
        output.push_str(&format!(
            "{}. {} ({}) - {} completion{}\n",
            index + 1,
            habit.name(),
            habit.periodicity(),
            completions,
            if completions == 1 { "" } else { "s" }
        ));
    }
    output
}

/// Format longest-streak summaries as a ranking
pub fn format_streak_rankings(summaries: &[StreakSummary]) -> String {
    if summaries.is_empty() {
        return "No habits found".to_string();
    }

    let mut output = String::new();
    for (index, summary) in summaries.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({}) - longest streak: {}\n",
            index + 1,
            summary.habit_name,
            summary.periodicity,
            summary.streak_length
        ));
    }
    output
}

/// Format current streaks, one line per habit
pub fn format_current_streaks(streaks: &[CurrentStreak]) -> String {
    if streaks.is_empty() {
        return "No habits found".to_string();
    }

    let mut output = String::new();
    for streak in streaks {
        output.push_str(&format!(
            "{} ({}) - current streak: {}\n",
            streak.habit_name, streak.periodicity, streak.current_streak
        ));
    }
    output
}

/// Format the full streak detail for one habit
pub fn format_habit_streaks(habit: &Habit) -> String {
    let streaks = habit.get_streaks();
    if streaks.is_empty() {
        return format!("{}: no completions yet", habit.name());
    }

    let runs: Vec<String> = streaks.iter().map(|len| len.to_string()).collect();
    format!(
        "{} ({})\nStreaks: {}\nLongest streak: {}\nCurrent streak: {}\n",
        habit.name(),
        habit.periodicity(),
        runs.join(", "),
        habit.get_longest_streak(),
        habit.get_current_streak()
    )
}

/// Format the broken-habit report
pub fn format_broken_report(report: &[BrokenStatus]) -> String {
    if report.is_empty() {
        return "No habits found".to_string();
    }

    let mut output = String::new();
    for status in report {
        let state = if status.is_broken { "broken" } else { "on track" };
        match status.last_completion {
            Some(last) => output.push_str(&format!(
                "{} ({}) - {} (last completed {})\n",
                status.habit_name,
                status.periodicity,
                state,
                time_input::format_timestamp(last)
            )),
            None => output.push_str(&format!(
                "{} ({}) - {} (never completed)\n",
                status.habit_name, status.periodicity, state
            )),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Periodicity, TimeInput};
    use chrono::NaiveDate;

    fn habit_with(name: &str, periodicity: Periodicity, dates: &[&str]) -> Habit {
        let created = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut habit = Habit::with_created_date(name, periodicity, created);
        for date in dates {
            habit.complete(Some(TimeInput::from(*date))).unwrap();
        }
        habit
    }

    #[test]
    fn test_format_empty_habit_list() {
        let output = format_habit_list(&[]);
        assert_eq!(output, "No habits found");
    }

    #[test]
    fn test_format_habit_list() {
        let habits = vec![
            habit_with("read", Periodicity::Daily, &["2024-01-01"]),
            habit_with("review", Periodicity::Weekly, &[]),
        ];

        let output = format_habit_list(&habits);
        assert!(output.contains("1. read (daily) - 1 completion\n"));
        assert!(output.contains("2. review (weekly) - 0 completions\n"));
    }

    #[test]
    fn test_format_streak_rankings() {
        let summaries = vec![
            StreakSummary {
                habit_name: "read".to_string(),
                streak_length: 3,
                periodicity: Periodicity::Daily,
            },
            StreakSummary {
                habit_name: "review".to_string(),
                streak_length: 1,
                periodicity: Periodicity::Weekly,
            },
        ];

        let output = format_streak_rankings(&summaries);
        assert!(output.contains("1. read (daily) - longest streak: 3"));
        assert!(output.contains("2. review (weekly) - longest streak: 1"));
    }

    #[test]
    fn test_format_current_streaks() {
        let streaks = vec![CurrentStreak {
            habit_name: "read".to_string(),
            current_streak: 2,
            periodicity: Periodicity::Daily,
        }];

        let output = format_current_streaks(&streaks);
        assert!(output.contains("read (daily) - current streak: 2"));
    }

    #[test]
    fn test_format_habit_streaks_detail() {
        let habit = habit_with(
            "read",
            Periodicity::Daily,
            &["2024-01-01", "2024-01-02", "2024-01-04"],
        );

        let output = format_habit_streaks(&habit);
        assert!(output.contains("Streaks: 2, 1"));
        assert!(output.contains("Longest streak: 2"));
        assert!(output.contains("Current streak: 1"));
    }

    #[test]
    fn test_format_habit_streaks_empty() {
        let habit = habit_with("read", Periodicity::Daily, &[]);
        assert_eq!(format_habit_streaks(&habit), "read: no completions yet");
    }

    #[test]
    fn test_format_broken_report() {
        let report = vec![
            BrokenStatus {
                habit_name: "read".to_string(),
                is_broken: true,
                periodicity: Periodicity::Daily,
                last_completion: Some(
                    NaiveDate::from_ymd_opt(2024, 1, 1)
                        .unwrap()
                        .and_hms_opt(0, 0, 0)
                        .unwrap(),
                ),
            },
            BrokenStatus {
                habit_name: "new".to_string(),
                is_broken: true,
                periodicity: Periodicity::Weekly,
                last_completion: None,
            },
        ];

        let output = format_broken_report(&report);
        assert!(output.contains("read (daily) - broken (last completed 2024-01-01T00:00:00)"));
        assert!(output.contains("new (weekly) - broken (never completed)"));
    }
}
