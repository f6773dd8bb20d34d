//! Habit tracking use cases: create, complete, delete

use crate::domain::{Habit, Periodicity, TimeInput};
use crate::error::{HabitrError, Result};
use crate::infrastructure::FileTrackerRepository;

/// Service for mutating the tracked habit collection.
///
/// Habits are addressed by name at this boundary; the store's row ids stay
/// opaque inside the infrastructure layer.
pub struct TrackService {
    repository: FileTrackerRepository,
}

impl TrackService {
    /// Create a new track service
    pub fn new(repository: FileTrackerRepository) -> Self {
        TrackService { repository }
    }

    /// Load the full habit collection
    pub fn load_habits(&self) -> Result<Vec<Habit>> {
        self.repository.open_store()?.load_all()
    }

    /// Create a habit and persist the updated collection.
    /// Empty and duplicate names are rejected.
    pub fn create_habit(&self, name: &str, periodicity: Periodicity) -> Result<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitrError::Config(
                "Habit name cannot be empty".to_string(),
            ));
        }

        let mut store = self.repository.open_store()?;
        let mut habits = store.load_all()?;

        if habits.iter().any(|habit| habit.name() == name) {
            return Err(HabitrError::Config(format!(
                "Habit '{}' already exists",
                name
            )));
        }

        let habit = Habit::new(name, periodicity);
        habits.push(habit.clone());
        store.save_all(&habits)?;

        Ok(habit)
    }

    /// Log a completion for the named habit at the given time (now if
    /// `None`). The timestamp is validated through the entity, then
    /// appended as a single completion row.
    pub fn complete_habit(&self, name: &str, time: Option<TimeInput>) -> Result<Habit> {
        let store = self.repository.open_store()?;
        let habit_id = store
            .habit_id(name)?
            .ok_or_else(|| HabitrError::HabitNotFound(name.to_string()))?;

        let mut habits = store.load_all()?;
        let habit = habits
            .iter_mut()
            .find(|habit| habit.name() == name)
            .ok_or_else(|| HabitrError::HabitNotFound(name.to_string()))?;

        let completed = habit.complete(time)?;
        store.add_completion(habit_id, completed)?;

        Ok(habit.clone())
    }

    /// Delete the named habit and all its completions
    pub fn delete_habit(&self, name: &str) -> Result<()> {
        let store = self.repository.open_store()?;
        let habit_id = store
            .habit_id(name)?
            .ok_or_else(|| HabitrError::HabitNotFound(name.to_string()))?;

        store.delete_habit(habit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::TrackerRepository;
    use tempfile::TempDir;

    fn service_in(temp: &TempDir) -> TrackService {
        let repo = FileTrackerRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        TrackService::new(repo)
    }

    #[test]
    fn test_create_and_load() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.create_habit("read", Periodicity::Daily).unwrap();
        service
            .create_habit("review", Periodicity::Weekly)
            .unwrap();

        let habits = service.load_habits().unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name(), "read");
        assert_eq!(habits[1].periodicity(), Periodicity::Weekly);
    }

    #[test]
    fn test_create_trims_name() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let habit = service.create_habit("  read  ", Periodicity::Daily).unwrap();
        assert_eq!(habit.name(), "read");
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        assert!(service.create_habit("   ", Periodicity::Daily).is_err());
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.create_habit("read", Periodicity::Daily).unwrap();
        let result = service.create_habit("read", Periodicity::Weekly);
        assert!(result.is_err());
    }

    #[test]
    fn test_complete_habit_persists() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.create_habit("read", Periodicity::Daily).unwrap();
        service
            .complete_habit("read", Some(TimeInput::from("2024-01-01")))
            .unwrap();
        service
            .complete_habit("read", Some(TimeInput::from("2024-01-02")))
            .unwrap();

        let habits = service.load_habits().unwrap();
        assert_eq!(habits[0].completion_log().len(), 2);
        assert_eq!(habits[0].get_streaks(), vec![2]);
    }

    #[test]
    fn test_complete_unknown_habit() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        let result = service.complete_habit("missing", None);
        assert!(matches!(
            result.unwrap_err(),
            HabitrError::HabitNotFound(_)
        ));
    }

    #[test]
    fn test_complete_invalid_timestamp_not_persisted() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.create_habit("read", Periodicity::Daily).unwrap();
        let result = service.complete_habit("read", Some(TimeInput::from("later")));
        assert!(matches!(
            result.unwrap_err(),
            HabitrError::InvalidTimestamp(_)
        ));

        let habits = service.load_habits().unwrap();
        assert!(habits[0].completion_log().is_empty());
    }

    #[test]
    fn test_delete_habit() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.create_habit("read", Periodicity::Daily).unwrap();
        service.create_habit("exercise", Periodicity::Daily).unwrap();

        service.delete_habit("read").unwrap();

        let habits = service.load_habits().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name(), "exercise");
    }

    #[test]
    fn test_delete_unknown_habit() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        assert!(matches!(
            service.delete_habit("missing").unwrap_err(),
            HabitrError::HabitNotFound(_)
        ));
    }
}
