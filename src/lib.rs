//! # Replan - Weekly rehabilitation exercise planner
//!
//! A command-line utility for planning rehabilitation exercises across
//! calendar weeks and tracking their completion.
//!
//! ## Features
//!
//! - **Weekly Overview**: Monday-through-Sunday view of scheduled tasks
//! - **Task Plans**: Recurring tasks across a date range with per-muscle-group pause days
//! - **Completion Tracking**: Check tasks off; past days are read-only
//! - **Self-Update**: Pull newer revisions from the application's git checkout
//!
//! ## Usage
//!
//! ```rust,no_run
//! use replan::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
