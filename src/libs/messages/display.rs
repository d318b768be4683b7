//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text: every `Message`
//! variant is rendered here, so wording changes and parameter
//! interpolation stay in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WEEK MESSAGES ===
            Message::WeekTitle(range) => format!("Week of {}", range),

            // === PLAN MESSAGES ===
            Message::PlanAdded(name, placements) => {
                format!("Plan '{}' added: task scheduled on {} day(s)", name, placements)
            }
            Message::PlanNothingPlaced(name) => format!(
                "Plan '{}' added, but every day in the range conflicted with an existing task",
                name
            ),
            Message::PlanInvalidHighImpact => "High-impact tasks must have pause days".to_string(),
            Message::PlanInvalidRange(start, end) => {
                format!("Start date {} is after end date {}", start, end)
            }
            Message::PlanCancelled => "Plan entry cancelled".to_string(),

            // === CHECK MESSAGES ===
            Message::TaskChecked(name) => format!("Task '{}' marked as completed", name),
            Message::TaskUnchecked(name) => format!("Task '{}' marked as not completed", name),
            Message::TasksNotFoundForDate(date) => format!("No tasks found for {}", date),
            Message::TaskNotFoundAtIndex(index, date) => {
                format!("No task at index {} on {}", index, date)
            }
            Message::PastDayReadOnly(date) => {
                format!("{} is in the past; past days are read-only", date)
            }

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleUpdate => "Update settings".to_string(),

            // === UPDATE MESSAGES ===
            Message::UpdateAvailable => {
                "A new version of the application is available. Run 'replan update' to install it".to_string()
            }
            Message::NoUpdateRequired => "The application is already up to date".to_string(),
            Message::UpdateCompleted => "The application has been updated successfully".to_string(),
            Message::UpdateFailed(error) => format!("Failed to update the application: {}", error),
            Message::UpdateRepoNotFound => {
                "No git checkout found; set the repository path in the configuration".to_string()
            }
            Message::RestartFailed(error) => {
                format!("Automatic restart failed ({}); please restart manually", error)
            }

            // === PROMPTS ===
            Message::PromptStartDate => "Start date (YYYY-MM-DD)".to_string(),
            Message::PromptRetryPlan => "Adjust the plan and try again?".to_string(),
            Message::PromptEndDate => "End date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptPauseDays => "Pause days".to_string(),
            Message::PromptMuscleGroup => "Muscle group".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDataFile => "Task store file path (empty for default)".to_string(),
            Message::PromptUpdateRemote => "Git remote".to_string(),
            Message::PromptUpdateBranch => "Git branch".to_string(),
            Message::PromptUpdateRepoDir => "Repository directory (empty to auto-detect)".to_string(),

            // === GENERAL MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
