pub mod check;
pub mod init;
pub mod plan;
pub mod update;
pub mod week;

use crate::libs::messages::Message;
use crate::libs::task::DATE_FORMAT;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the weekly exercise overview")]
    Week(week::WeekArgs),
    #[command(about = "Add a task plan across a date range")]
    Plan(plan::PlanArgs),
    #[command(about = "Toggle a task's completion state", arg_required_else_help = true)]
    Check(check::CheckArgs),
    #[command(about = "Update the application to the latest revision")]
    Update,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Plan(args) => plan::cmd(args),
            Commands::Check(args) => check::cmd(args),
            Commands::Update => update::cmd(),
        }
    }
}

/// Parses a date argument, accepting the `today` keyword or `YYYY-MM-DD`.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}
