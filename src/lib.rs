//! # Hall Pass 9000
//!
//! A command-line hall pass tracker for a classroom themed as a spaceship:
//! cadets (students) leave on space walks (hall passes) and come back, and the
//! tool keeps the log, flags walks that run too long and reports who walks
//! how much.
//!
//! ## Features
//!
//! - **Roster**: cadets with a class period and notes
//! - **Space Walks**: one open walk per cadet, recreational or official
//! - **Status**: good, warning and critical thresholds plus an oxygen gauge
//! - **Reports**: per-cadet statistics and the full walk list, sortable
//! - **Data Export**: CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hallpass::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
