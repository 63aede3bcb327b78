pub mod summary;

use chrono::NaiveDate;

use crate::validate::{Birthdate, Hobby, Hometown, Name};

pub use summary::{ProfileSummary, render_text};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Profile {
    name: Name,
    birthdate: Birthdate,
    hometown: Hometown,
    hobbies: Vec<Hobby>,
}

impl Profile {
    pub fn new(
        name: Name,
        birthdate: Birthdate,
        hometown: Hometown,
        hobbies: Vec<Hobby>,
    ) -> Self {
        Self {
            name,
            birthdate,
            hometown,
            hobbies,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthdate(&self) -> Birthdate {
        self.birthdate
    }

    pub fn age(&self, today: NaiveDate) -> u32 {
        self.birthdate.age_on(today)
    }

    pub fn hometown(&self) -> &Hometown {
        &self.hometown
    }

    pub fn hobbies(&self) -> &[Hobby] {
        &self.hobbies
    }
}
