//! Weekly overview command.
//!
//! Renders the Monday-through-Sunday window containing a reference date.
//! Navigation between weeks is plain date arithmetic: `--offset -1` shows
//! the previous week, `--offset 1` the next. The command also performs a
//! throttled passive update check; any failure there is silent.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::update::GitUpdater;
use crate::libs::view::View;
use crate::libs::week;
use crate::msg_print;
use crate::storage::tasks::Tasks;
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the week command.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Reference date inside the week to display (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,

    /// Weeks to shift the view: -1 for previous, 1 for next
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,
}

/// Executes the week command.
pub fn cmd(args: WeekArgs) -> Result<()> {
    let reference = week::shift_weeks(super::parse_date(&args.date)?, args.offset);
    let window = week::week_window(reference);

    let store = Tasks::new()?.load()?;
    msg_print!(Message::WeekTitle(week::week_range_label(&window)), true);
    View::week(&window, &store)?;

    // Passive once-a-day update notice.
    if let Ok(config) = Config::read() {
        if let Ok(mut updater) = GitUpdater::new(&config.update.unwrap_or_default()) {
            updater.maybe_notify();
        }
    }

    Ok(())
}
