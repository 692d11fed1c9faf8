//! Database schema migration management and versioning.
//!
//! Every schema change is a numbered migration applied inside a transaction
//! and recorded in the `migrations` table, so an existing database is moved
//! forward exactly once per version.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hallpass::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("hallpass.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all schema migrations, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: cadet roster
        self.add_migration(1, "create_students_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS students (
                    id INTEGER PRIMARY KEY,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    period TEXT NOT NULL,
                    notes TEXT NOT NULL DEFAULT '',
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_students_first_name ON students(first_name)", [])?;
            Ok(())
        });

        // Version 2: space walks, removed together with their cadet
        self.add_migration(2, "create_passes_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS passes (
                    id INTEGER PRIMARY KEY,
                    student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
                    start_at TEXT NOT NULL,
                    end_at TEXT,
                    is_personal BOOLEAN NOT NULL DEFAULT TRUE,
                    reason TEXT NOT NULL DEFAULT ''
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_passes_student_id ON passes(student_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_passes_start_at ON passes(start_at)", [])?;
            Ok(())
        });

        // Version 3: at most one open walk per cadet
        self.add_migration(3, "add_single_open_pass_index", |tx| {
            tx.execute(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_passes_single_open ON passes(student_id) WHERE end_at IS NULL",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute("INSERT INTO migrations (version, name) VALUES (?1, ?2)", params![migration.version, migration.name])?;
                    tracing::info!(version = migration.version, name = migration.name, "migration applied");
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }
        tx.commit()?;

        Ok(())
    }

    pub fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Announces the migration state of `conn` to the user.
    pub fn report(&self, conn: &Connection) -> Result<()> {
        let version = self.get_current_version(conn)?;
        if version < self.latest_version() {
            msg_info!(Message::DatabaseNeedsUpdate(version, self.latest_version()));
        } else {
            msg_success!(Message::DatabaseUpToDate(version));
        }
        Ok(())
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
