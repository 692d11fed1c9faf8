//! Core library modules for the hallpass application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: configuration, data storage, errors, messaging, logging
//! - **Domain**: calendar durations, space walks, statistics, status thresholds
//! - **User Interface**: table rendering, formatting, sorting, data export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hallpass::db::students::Students;
//! use hallpass::libs::student::Student;
//!
//! let student = Student::new("Alice", "Brown", "A1", "");
//! let mut students = Students::new()?;
//! students.insert(&student)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod export;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod pass;
pub mod report;
pub mod sort;
pub mod stats;
pub mod status;
pub mod student;
pub mod view;
