//! Task completion toggle command.
//!
//! Marks a single task, addressed by its day and index in the week view,
//! as completed or not. Days before today are read-only; toggling one is
//! reported and changes nothing.

use crate::libs::messages::Message;
use crate::libs::task::ToggleTask;
use crate::storage::tasks::Tasks;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Day the task is scheduled on (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,

    /// Task index within the day, as shown in the week view
    #[arg(required = true)]
    index: usize,

    /// Mark the task as not completed instead
    #[arg(long, short)]
    undone: bool,
}

/// Executes the check command.
pub fn cmd(args: CheckArgs) -> Result<()> {
    let date = super::parse_date(&args.date)?;
    let today = Local::now().date_naive();
    let completed = !args.undone;

    let tasks = Tasks::new()?;
    let mut store = tasks.load()?;

    let toggle = ToggleTask::new(&crate::libs::task::day_key(date), args.index, completed);
    if !toggle.apply(&mut store, today)? {
        msg_warning!(Message::PastDayReadOnly(toggle.day_key));
        return Ok(());
    }
    tasks.save(&store)?;

    let name = store
        .get(&toggle.day_key)
        .and_then(|day| day.get(toggle.index))
        .map(|task| task.name.clone())
        .unwrap_or_default();
    if completed {
        msg_success!(Message::TaskChecked(name));
    } else {
        msg_success!(Message::TaskUnchecked(name));
    }

    Ok(())
}
