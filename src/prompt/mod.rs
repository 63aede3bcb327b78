use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{AppError, AppResult, FieldError};
use crate::validate::{Birthdate, Hobby, Hometown, Name};

const DONE: &str = "done";

const NAME_PROMPT: &str = "What is your name? (minimum 2 characters, only letters and spaces)";
const BIRTHDATE_PROMPT: &str = "What is your birthdate? Enter in format MM/DD/YYYY (03/02/2026)";
const HOMETOWN_PROMPT: &str =
    "Where are you from? (minimum 3 characters, only letters, spaces and hyphens)";
const HOBBY_INSTRUCTIONS: [&str; 3] = [
    "What are your hobbies?",
    "Hobby must be 4 to 50 characters long and can contain letters, spaces and hyphens",
    "Type 'done' when finished",
];

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut validate: impl FnMut(&str) -> Result<T, FieldError>,
    ) -> AppResult<T> {
        loop {
            self.say(prompt)?;
            let raw = self.read_line()?;
            match validate(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(%err, "rejected input");
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    pub fn prompt_name(&mut self) -> AppResult<Name> {
        self.ask_until(NAME_PROMPT, Name::parse)
    }

    pub fn prompt_birthdate(&mut self, today: NaiveDate) -> AppResult<Birthdate> {
        let birthdate = self.ask_until(BIRTHDATE_PROMPT, |raw| Birthdate::parse(raw, today))?;

        // Too-old dates are kept; only future dates are asked again.
        if let Some(warning) = birthdate.warning(today) {
            tracing::info!(birthdate = %birthdate.date(), "accepted implausibly old birthdate");
            self.say(&warning.to_string())?;
        }

        Ok(birthdate)
    }

    pub fn prompt_hometown(&mut self) -> AppResult<Hometown> {
        self.ask_until(HOMETOWN_PROMPT, Hometown::parse)
    }

    // Instructions are shown once; after that each line is read without a prompt.
    pub fn collect_hobbies(&mut self) -> AppResult<Vec<Hobby>> {
        for line in HOBBY_INSTRUCTIONS {
            self.say(line)?;
        }

        let mut hobbies = Vec::new();
        loop {
            let raw = self.read_line()?;
            if raw.trim().eq_ignore_ascii_case(DONE) {
                return Ok(hobbies);
            }

            match Hobby::parse(&raw) {
                Ok(hobby) => hobbies.push(hobby),
                Err(err) => {
                    tracing::debug!(%err, "skipped hobby");
                    self.say(&err.to_string())?;
                }
            }
        }
    }
}
