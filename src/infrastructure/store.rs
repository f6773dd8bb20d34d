//! SQLite-backed habit storage
//!
//! Two related tables: habits and completions. Writes of the whole
//! collection are full-replace inside one transaction; any database fault
//! surfaces upward and aborts the current operation.

use crate::domain::{time_input, Habit, HabitRecord};
use crate::error::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite store for habits and their completions
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = SqliteStore { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database (for tests)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = SqliteStore { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS habits (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                name         TEXT NOT NULL,
                periodicity  TEXT NOT NULL CHECK (periodicity IN ('daily', 'weekly')),
                created_date TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS completions (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                habit_id       INTEGER NOT NULL,
                completed_date TEXT NOT NULL,
                FOREIGN KEY (habit_id) REFERENCES habits(id)
            );

            CREATE INDEX IF NOT EXISTS idx_completions_habit_id
                ON completions(habit_id);",
        )?;
        Ok(())
    }

    /// Replace the entire stored collection with `habits`
    pub fn save_all(&mut self, habits: &[Habit]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM completions", [])?;
        tx.execute("DELETE FROM habits", [])?;

        for habit in habits {
            tx.execute(
                "INSERT INTO habits (name, periodicity, created_date) VALUES (?1, ?2, ?3)",
                params![
                    habit.name(),
                    habit.periodicity().as_str(),
                    time_input::format_timestamp(habit.created_date())
                ],
            )?;
            let habit_id = tx.last_insert_rowid();

            for completion in habit.completion_log() {
                tx.execute(
                    "INSERT INTO completions (habit_id, completed_date) VALUES (?1, ?2)",
                    params![habit_id, time_input::format_timestamp(*completion)],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Load every habit with its completion log, in insertion order.
    ///
    /// Hydration goes through the canonical record, so NULL columns fail
    /// with `MissingField` and malformed dates with `InvalidDateFormat`.
    pub fn load_all(&self) -> Result<Vec<Habit>> {
        let mut habit_stmt = self
            .conn
            .prepare("SELECT id, name, periodicity, created_date FROM habits ORDER BY id")?;
        let rows = habit_stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut completion_stmt = self.conn.prepare(
            "SELECT completed_date FROM completions WHERE habit_id = ?1 ORDER BY completed_date",
        )?;

        let mut habits = Vec::with_capacity(rows.len());
        for (id, name, periodicity, created_date) in rows {
            let completion_log = completion_stmt
                .query_map([id], |row| row.get::<_, String>(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            let record = HabitRecord {
                name,
                periodicity,
                created_date,
                completion_log,
            };
            habits.push(Habit::from_record(&record)?);
        }

        Ok(habits)
    }

    /// Look up the opaque identifier of the habit with the given name
    pub fn habit_id(&self, name: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM habits WHERE name = ?1 ORDER BY id LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    /// Append one completion row for the given habit
    pub fn add_completion(&self, habit_id: i64, completed: NaiveDateTime) -> Result<()> {
        self.conn.execute(
            "INSERT INTO completions (habit_id, completed_date) VALUES (?1, ?2)",
            params![habit_id, time_input::format_timestamp(completed)],
        )?;
        Ok(())
    }

    /// Delete a habit and all its completions
    pub fn delete_habit(&self, habit_id: i64) -> Result<()> {
        self.conn.execute(
            "DELETE FROM completions WHERE habit_id = ?1",
            params![habit_id],
        )?;
        self.conn
            .execute("DELETE FROM habits WHERE id = ?1", params![habit_id])?;
        Ok(())
    }

    /// Wipe both tables
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM completions", [])?;
        self.conn.execute("DELETE FROM habits", [])?;
        Ok(())
    }
}
