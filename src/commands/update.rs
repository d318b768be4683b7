use crate::{
    libs::{
        config::Config,
        messages::Message,
        update::{GitUpdater, UpdateProvider},
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;

/// Executes the application update process.
///
/// Checks the configured git remote for newer revisions, pulls them in,
/// and re-spawns the application so the new revision takes over. When the
/// restart cannot be performed the user is asked to restart manually; the
/// pulled update itself is already in place at that point.
pub fn cmd() -> Result<()> {
    let config = Config::read()?.update.unwrap_or_default();
    let mut updater = GitUpdater::new(&config)?;

    if !updater.check() {
        msg_info!(Message::NoUpdateRequired);
        return Ok(());
    }

    updater.apply()?;
    msg_success!(Message::UpdateCompleted);

    if let Err(error) = updater.restart() {
        msg_warning!(Message::RestartFailed(error.to_string()));
    }

    Ok(())
}
