//! Domain layer - Habit entity and streak engine

pub mod habit;
pub mod periodicity;
pub mod time_input;

pub use habit::{Habit, HabitRecord};
pub use periodicity::Periodicity;
pub use time_input::TimeInput;
