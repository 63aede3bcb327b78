use chrono::{Datelike, Months, NaiveDate};

use crate::error::{FieldError, FieldWarning};

/// Birthdates further back than this are accepted with a warning.
pub const PLAUSIBLE_AGE_YEARS: u32 = 150;

const DISPLAY_FORMAT: &str = "%B %d, %Y";

/// Parses `MM/DD/YYYY` with exactly two-digit month and day.
pub fn parse_us_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let digits =
        |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(month, 2) || !digits(day, 2) || !digits(year, 4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

pub fn calendar_age(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, FieldError> {
        let date = parse_us_date(raw).ok_or(FieldError::BadDateFormat)?;
        if date > today {
            return Err(FieldError::FutureDate);
        }
        Ok(Self(date))
    }

    pub fn warning(&self, today: NaiveDate) -> Option<FieldWarning> {
        let earliest = today.checked_sub_months(Months::new(PLAUSIBLE_AGE_YEARS * 12))?;
        (self.0 < earliest).then_some(FieldWarning::OlderThan {
            years: PLAUSIBLE_AGE_YEARS,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn age_on(&self, today: NaiveDate) -> u32 {
        calendar_age(self.0, today)
    }

    pub fn display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}
