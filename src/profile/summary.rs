use chrono::NaiveDate;
use serde::Serialize;

use super::Profile;
use crate::validate::Hobby;

const BANNER_WIDTH: usize = 50;

pub fn render_text(profile: &Profile, today: NaiveDate) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let hobbies = profile.hobbies();

    let mut lines = vec![
        banner.clone(),
        "Profile summary".to_string(),
        banner.clone(),
        format!("Name: {}", profile.name()),
        format!("Age: {}", profile.age(today)),
        format!("Birthdate: {}", profile.birthdate().display()),
        format!("Hometown: {}", profile.hometown()),
        format!("Number of hobbies: {}", hobbies.len()),
    ];

    if hobbies.is_empty() {
        lines.push("No hobbies specified".to_string());
    } else {
        lines.push("Hobbies:".to_string());
        lines.extend(
            hobbies
                .iter()
                .enumerate()
                .map(|(index, hobby)| format!("  {}. {hobby}", index + 1)),
        );
    }

    lines.push(banner);
    lines.join("\n")
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary<'a> {
    pub name: &'a str,
    pub age: u32,
    pub birthdate: NaiveDate,
    pub birthdate_display: String,
    pub hometown: &'a str,
    pub hobby_count: usize,
    pub hobbies: Vec<&'a str>,
}

impl<'a> ProfileSummary<'a> {
    pub fn new(profile: &'a Profile, today: NaiveDate) -> Self {
        let birthdate = profile.birthdate();
        Self {
            name: profile.name().as_str(),
            age: profile.age(today),
            birthdate: birthdate.date(),
            birthdate_display: birthdate.display(),
            hometown: profile.hometown().as_str(),
            hobby_count: profile.hobbies().len(),
            hobbies: profile.hobbies().iter().map(Hobby::as_str).collect(),
        }
    }
}
