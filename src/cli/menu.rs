//! Interactive menu loop
//!
//! A numbered text menu over the habit collection. Habits are loaded once
//! at startup and the whole collection is saved back on exit. Reading and
//! writing go through generic handles so tests can drive the loop with
//! in-memory buffers.

use crate::application::analytics;
use crate::cli::output;
use crate::domain::{Habit, Periodicity};
use crate::error::Result;
use crate::infrastructure::FileTrackerRepository;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Run the interactive menu against the tracker's store
pub fn run_menu(repository: &FileTrackerRepository) -> Result<()> {
    let mut store = repository.open_store()?;
    let mut habits = store.load_all()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu_loop(&mut stdin.lock(), &mut stdout.lock(), &mut habits)?;

    store.save_all(&habits)?;
    println!("Habits saved. Goodbye!");
    Ok(())
}

/// The menu loop itself, independent of the store
pub fn menu_loop<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    habits: &mut Vec<Habit>,
) -> Result<()> {
    loop {
        write_menu(output)?;

        let Some(choice) = read_line(input, output, "Enter your choice (1-7): ")? else {
            break;
        };

        match choice.trim() {
            "1" => create_habit(input, output, habits)?,
            "2" => mark_completed(input, output, habits)?,
            "3" => view_habits(output, habits)?,
            "4" => view_by_periodicity(input, output, habits)?,
            "5" => view_analytics(output, habits)?,
            "6" => view_streaks(output, habits)?,
            "7" => break,
            _ => writeln!(
                output,
                "Invalid choice. Please enter a number between 1 and 7."
            )?,
        }
    }
    Ok(())
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Habit Tracker Menu:")?;
    writeln!(output, "1. Create new habit")?;
    writeln!(output, "2. Mark habit as completed")?;
    writeln!(output, "3. View all habits")?;
    writeln!(output, "4. View habits by periodicity")?;
    writeln!(output, "5. View habit analytics")?;
    writeln!(output, "6. View streaks")?;
    writeln!(output, "7. Save and exit")?;
    Ok(())
}

/// Prompt and read one line. Returns `None` on end of input.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn create_habit<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    habits: &mut Vec<Habit>,
) -> Result<()> {
    let name = loop {
        let Some(name) = read_line(input, output, "Enter habit name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(output, "Habit name cannot be empty!")?;
        } else if habits.iter().any(|habit| habit.name() == name) {
            writeln!(output, "Habit '{}' already exists!", name)?;
        } else {
            break name;
        }
    };

    let periodicity = loop {
        let Some(text) = read_line(input, output, "Enter periodicity (daily/weekly): ")? else {
            return Ok(());
        };
        match Periodicity::from_str(&text) {
            Ok(periodicity) => break periodicity,
            Err(_) => writeln!(output, "Periodicity must be 'daily' or 'weekly'")?,
        }
    };

    habits.push(Habit::new(name.as_str(), periodicity));
    writeln!(
        output,
        "\nNew habit '{}' ({}) created successfully!",
        name, periodicity
    )?;
    Ok(())
}

fn mark_completed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    habits: &mut [Habit],
) -> Result<()> {
    if habits.is_empty() {
        writeln!(output, "No habits available. Please create a habit first.")?;
        return Ok(());
    }

    writeln!(output, "\nSelect a habit to mark as completed:")?;
    for (index, habit) in habits.iter().enumerate() {
        writeln!(
            output,
            "{}. {} ({})",
            index + 1,
            habit.name(),
            habit.periodicity()
        )?;
    }

    let Some(choice) = read_line(input, output, "Enter habit number: ")? else {
        return Ok(());
    };

    match choice.parse::<usize>() {
        Ok(number) if number >= 1 && number <= habits.len() => {
            let habit = &mut habits[number - 1];
            habit.complete(None)?;
            writeln!(output, "\nHabit '{}' marked as completed!", habit.name())?;
        }
        Ok(_) => writeln!(output, "Invalid habit number.")?,
        Err(_) => writeln!(output, "Please enter a valid number.")?,
    }
    Ok(())
}

fn view_habits<W: Write>(output: &mut W, habits: &[Habit]) -> Result<()> {
    writeln!(output, "\nAll Habits:")?;
    write!(output, "{}", output::format_habit_list(habits))?;
    if habits.is_empty() {
        writeln!(output)?;
    }
    Ok(())
}

fn view_by_periodicity<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    habits: &[Habit],
) -> Result<()> {
    let periodicity = loop {
        let Some(text) = read_line(input, output, "Enter periodicity to filter by (daily/weekly): ")?
        else {
            return Ok(());
        };
        match Periodicity::from_str(&text) {
            Ok(periodicity) => break periodicity,
            Err(_) => writeln!(output, "Periodicity must be 'daily' or 'weekly'")?,
        }
    };

    let filtered = analytics::filter_by_periodicity(habits, periodicity);
    writeln!(output, "\n{} habits:", periodicity)?;
    write!(output, "{}", output::format_habit_list(&filtered))?;
    if filtered.is_empty() {
        writeln!(output)?;
    }
    Ok(())
}

fn view_analytics<W: Write>(output: &mut W, habits: &[Habit]) -> Result<()> {
    writeln!(output, "\nHabit Analytics:")?;
    match analytics::longest_streak(habits) {
        Some(best) => writeln!(
            output,
            "Longest streak overall: '{}' ({}) with {}",
            best.habit_name, best.periodicity, best.streak_length
        )?,
        None => {
            writeln!(output, "No habits found")?;
            return Ok(());
        }
    }

    write!(
        output,
        "{}",
        output::format_streak_rankings(&analytics::sorted_by_streak(habits, true))
    )?;
    Ok(())
}

fn view_streaks<W: Write>(output: &mut W, habits: &[Habit]) -> Result<()> {
    writeln!(output, "\nCurrent Streaks:")?;
    write!(
        output,
        "{}",
        output::format_current_streaks(&analytics::current_streaks(habits))
    )?;
    if habits.is_empty() {
        writeln!(output)?;
        return Ok(());
    }

    writeln!(output, "\nBroken Habits:")?;
    write!(
        output,
        "{}",
        output::format_broken_report(&analytics::broken_habits(habits, None)?)
    )?;
    Ok(())
}
