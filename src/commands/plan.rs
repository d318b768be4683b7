//! Task plan entry command.
//!
//! A plan schedules one task across a date range, subject to the
//! muscle-group pause rules. Fields may be supplied as flags; anything
//! missing is collected interactively. When a request fails validation in
//! interactive mode the whole form is re-prompted with the previously
//! entered values pre-filled, until the request passes or the user
//! cancels. A fully flag-driven invocation fails fast instead, so scripts
//! never hang on a prompt.

use crate::libs::messages::Message;
use crate::libs::plan::{PlanError, PlanRequest};
use crate::libs::scheduler::schedule;
use crate::libs::task::{day_key, MuscleGroup};
use crate::libs::view::View;
use crate::libs::week;
use crate::storage::tasks::Tasks;
use crate::{msg_bail_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Command-line arguments for the plan command.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// First day of the plan (YYYY-MM-DD or 'today')
    #[arg(long, short)]
    start: Option<String>,

    /// Last day of the plan, inclusive (YYYY-MM-DD or 'today')
    #[arg(long, short)]
    end: Option<String>,

    /// Task name
    #[arg(long, short)]
    name: Option<String>,

    /// Muscle group the task stresses
    #[arg(long, short, value_enum)]
    muscle_group: Option<MuscleGroup>,

    /// Calendar days of recovery required between same-group tasks
    #[arg(long, short)]
    pause_days: Option<u32>,
}

/// Executes the plan command.
pub fn cmd(args: PlanArgs) -> Result<()> {
    let flag_driven = args.start.is_some()
        && args.end.is_some()
        && args.name.is_some()
        && args.muscle_group.is_some()
        && args.pause_days.is_some();

    let mut request = initial_request(&args)?;

    if flag_driven {
        if let Err(error) = request.validate() {
            msg_bail_anyhow!(validation_message(&error));
        }
    } else {
        // Re-prompt the full form with the entered values pre-filled
        // until the request validates or the user gives up.
        while let Err(error) = request.validate() {
            msg_warning!(validation_message(&error));
            let retry = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRetryPlan.to_string())
                .default(true)
                .interact()?;
            if !retry {
                msg_info!(Message::PlanCancelled);
                return Ok(());
            }
            request = prompt_request(&request)?;
        }
    }

    let tasks = Tasks::new()?;
    let mut store = tasks.load()?;
    let placed = schedule(&mut store, &request);
    tasks.save(&store)?;

    if placed == 0 {
        msg_warning!(Message::PlanNothingPlaced(request.name.clone()));
    } else {
        msg_success!(Message::PlanAdded(request.name.clone(), placed));
    }

    // Show the week the plan starts in, like any other mutation.
    let window = week::week_window(request.start_date);
    View::week(&window, &store)?;

    Ok(())
}

/// Builds the first request from flags, prompting for missing fields.
fn initial_request(args: &PlanArgs) -> Result<PlanRequest> {
    let today = day_key(chrono::Local::now().date_naive());

    let start_date = match &args.start {
        Some(value) => super::parse_date(value)?,
        None => prompt_date(Message::PromptStartDate, &today)?,
    };
    let end_date = match &args.end {
        Some(value) => super::parse_date(value)?,
        None => prompt_date(Message::PromptEndDate, &day_key(start_date))?,
    };
    let name = match &args.name {
        Some(value) => value.clone(),
        None => prompt_name("")?,
    };
    let muscle_group = match args.muscle_group {
        Some(group) => group,
        None => prompt_muscle_group(MuscleGroup::HighImpact)?,
    };
    let pause_days = match args.pause_days {
        Some(value) => value,
        None => prompt_pause_days(0)?,
    };

    Ok(PlanRequest {
        start_date,
        end_date,
        name,
        muscle_group,
        pause_days,
    })
}

/// Re-prompts every field with the previous request as defaults.
fn prompt_request(previous: &PlanRequest) -> Result<PlanRequest> {
    let start_date = prompt_date(Message::PromptStartDate, &day_key(previous.start_date))?;
    let end_date = prompt_date(Message::PromptEndDate, &day_key(previous.end_date))?;
    let name = prompt_name(&previous.name)?;
    let muscle_group = prompt_muscle_group(previous.muscle_group)?;
    let pause_days = prompt_pause_days(previous.pause_days)?;

    Ok(PlanRequest {
        start_date,
        end_date,
        name,
        muscle_group,
        pause_days,
    })
}

fn prompt_date(prompt: Message, default: &str) -> Result<chrono::NaiveDate> {
    let entered: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            super::parse_date(input)
                .map(|_| ())
                .map_err(|_| Message::InvalidDate(input.clone()).to_string())
        })
        .interact_text()?;
    super::parse_date(&entered)
}

fn prompt_name(default: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_muscle_group(default: MuscleGroup) -> Result<MuscleGroup> {
    let groups = MuscleGroup::all();
    let default_index = groups.iter().position(|group| *group == default).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMuscleGroup.to_string())
        .items(&groups)
        .default(default_index)
        .interact()?;
    Ok(groups[selection])
}

fn prompt_pause_days(default: u32) -> Result<u32> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPauseDays.to_string())
        .default(default)
        .interact_text()?)
}

fn validation_message(error: &PlanError) -> Message {
    match error {
        PlanError::HighImpactWithoutPause => Message::PlanInvalidHighImpact,
        PlanError::ReversedRange(start, end) => {
            Message::PlanInvalidRange(day_key(*start), day_key(*end))
        }
    }
}
