use chrono::{Local, NaiveDate};

use crate::output::Output;

#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub today: NaiveDate,
    pub output: Output,
    pub clear_screen: bool,
}

impl AppContext {
    pub fn bootstrap(json: bool, today: Option<NaiveDate>, terminal: bool) -> Self {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let output = Output::new(json);
        tracing::debug!(%today, json, terminal, "bootstrapped context");

        Self {
            today,
            output,
            clear_screen: terminal && !output.is_json(),
        }
    }
}
