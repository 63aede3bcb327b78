pub mod json;
pub mod text;

use std::io::Write;

use chrono::NaiveDate;

use crate::error::AppResult;
use crate::profile::{self, Profile, ProfileSummary};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    pub fn emit_profile<W: Write>(
        &self,
        out: &mut W,
        profile: &Profile,
        today: NaiveDate,
    ) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::write_block(out, &profile::render_text(profile, today)),
            OutputMode::Json => json::write(out, &ProfileSummary::new(profile, today)),
        }
    }
}
