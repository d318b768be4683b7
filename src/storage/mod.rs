//! Persistence layer for the replan application.
//!
//! The task store is a single flat JSON file mapping ISO date strings to
//! task lists. There is no indexing and no locking; the file is owned by
//! the running command for the duration of one invocation.

pub mod tasks;
