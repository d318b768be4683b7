use crate::libs::task::{day_key, Task, TaskStore};
use crate::libs::week::WEEK_DAYS;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use prettytable::{color, Attr, Cell, Row, Table};

/// Maximum rendered task name length before truncation.
const MAX_NAME_LENGTH: usize = 20;

pub struct View {}

impl View {
    /// Renders a week window as a table, one row per day.
    ///
    /// Weekend rows are highlighted in red. Task lines carry their index
    /// within the day so they can be addressed by the check command.
    pub fn week(window: &[NaiveDate; WEEK_DAYS], store: &TaskStore) -> Result<()> {
        let mut table = Table::new();

        table.add_row(Row::new(vec![
            Cell::new("DATE").with_style(Attr::Bold),
            Cell::new("DAY").with_style(Attr::Bold),
            Cell::new("TASKS").with_style(Attr::Bold),
        ]));
        for day in window {
            let key = day_key(*day);
            let tasks = store.get(&key).map(Vec::as_slice).unwrap_or(&[]);
            let mut day_cell = Cell::new(&day.format("%A").to_string());
            if day.weekday().num_days_from_monday() >= 5 {
                day_cell = day_cell.with_style(Attr::ForegroundColor(color::RED));
            }
            table.add_row(Row::new(vec![
                Cell::new(&key),
                day_cell,
                Cell::new(&Self::task_lines(tasks)),
            ]));
        }
        table.printstd();

        Ok(())
    }

    fn task_lines(tasks: &[Task]) -> String {
        if tasks.is_empty() {
            return "-".to_string();
        }
        tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let mark = if task.completed { "x" } else { " " };
                format!(
                    "{}. [{}] {} ({})",
                    index,
                    mark,
                    truncate_name(&task.name),
                    task.muscle_group
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Shortens a task name for table display, keeping an ellipsis marker.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_LENGTH {
        let prefix: String = name.chars().take(MAX_NAME_LENGTH - 3).collect();
        format!("{}...", prefix)
    } else {
        name.to_string()
    }
}
