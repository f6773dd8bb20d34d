use clap::Parser;
use habitr::application::{analytics, init, ConfigService, TrackService};
use habitr::cli::{menu, output, Cli, Commands};
use habitr::domain::{Periodicity, TimeInput};
use habitr::error::HabitrError;
use habitr::infrastructure::{FileTrackerRepository, TrackerRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), HabitrError> {
    match cli.command {
        Some(Commands::Init { path, periodicity }) => {
            let periodicity = Periodicity::from_str(&periodicity)?;
            init::init(&path, periodicity)
        }
        Some(Commands::Add { name, periodicity }) => {
            let repo = FileTrackerRepository::discover()?;

            // Fall back to the configured default periodicity
            let periodicity = match periodicity {
                Some(text) => Periodicity::from_str(&text)?,
                None => repo.load_config()?.default_periodicity,
            };

            let service = TrackService::new(repo);
            let habit = service.create_habit(&name, periodicity)?;
            println!(
                "New habit '{}' ({}) created",
                habit.name(),
                habit.periodicity()
            );
            Ok(())
        }
        Some(Commands::Done { name, at }) => {
            let repo = FileTrackerRepository::discover()?;
            let service = TrackService::new(repo);

            let habit = service.complete_habit(&name, at.map(TimeInput::from))?;
            let completions = habit.completion_log().len();
            println!(
                "Habit '{}' marked as completed ({} completion{})",
                habit.name(),
                completions,
                if completions == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Some(Commands::List { periodicity }) => {
            let repo = FileTrackerRepository::discover()?;
            let service = TrackService::new(repo);
            let habits = service.load_habits()?;

            let habits = match periodicity {
                Some(text) => {
                    analytics::filter_by_periodicity(&habits, Periodicity::from_str(&text)?)
                }
                None => habits,
            };

            print!("{}", output::format_habit_list(&habits));
            if habits.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Streaks { name }) => {
            let repo = FileTrackerRepository::discover()?;
            let service = TrackService::new(repo);
            let habits = service.load_habits()?;

            match name {
                Some(name) => {
                    let habit = habits
                        .iter()
                        .find(|habit| habit.name() == name)
                        .ok_or_else(|| HabitrError::HabitNotFound(name.clone()))?;
                    println!("{}", output::format_habit_streaks(habit));
                }
                None => {
                    print!(
                        "{}",
                        output::format_streak_rankings(&analytics::sorted_by_streak(
                            &habits, true
                        ))
                    );
                    println!();
                    print!(
                        "{}",
                        output::format_current_streaks(&analytics::current_streaks(&habits))
                    );
                }
            }
            Ok(())
        }
        Some(Commands::Broken { as_of }) => {
            let repo = FileTrackerRepository::discover()?;
            let service = TrackService::new(repo);
            let habits = service.load_habits()?;

            let report = analytics::broken_habits(&habits, as_of.map(TimeInput::from))?;
            print!("{}", output::format_broken_report(&report));
            if report.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Delete { name }) => {
            let repo = FileTrackerRepository::discover()?;
            let service = TrackService::new(repo);

            service.delete_habit(&name)?;
            println!("Deleted habit '{}'", name);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileTrackerRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("periodicity = {}", config.default_periodicity);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: habitr config [--list | <key> [<value>]]");
                println!("Valid keys: periodicity, created");
                Ok(())
            }
        }
        Some(Commands::Menu) => {
            let repo = FileTrackerRepository::discover()?;
            menu::run_menu(&repo)
        }
        None => {
            println!("habitr - Habit tracker for the terminal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
