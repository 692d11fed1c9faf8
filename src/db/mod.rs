//! Database layer for the hallpass application.
//!
//! SQLite persistence for the cadet roster and their space walks. Each
//! repository opens its own connection through [`db::Db`], which applies
//! pending schema migrations before handing the connection out.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hallpass::db::{passes::Passes, students::Students};
//! use hallpass::libs::student::Student;
//! use chrono::Utc;
//!
//! let mut students = Students::new()?;
//! let id = students.insert(&Student::new("Alice", "B", "A1", ""))?;
//!
//! let mut passes = Passes::new()?;
//! passes.open(id, true, "Drink", Utc::now())?;
//! passes.close(id, Utc::now())?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Instants are stored as RFC 3339 text in UTC, so lexicographic order of the
//! column matches chronological order.

/// Connection management and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Space walk records and their lifecycle (open, return, edit, delete).
pub mod passes;

/// Cadet roster operations.
pub mod students;
