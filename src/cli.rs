use chrono::NaiveDate;
use clap::{ArgAction, Parser};

use crate::validate::date;

#[derive(Debug, Parser)]
#[command(
    name = "profile-builder",
    version,
    about = "Interactively build and summarise a personal profile"
)]
pub struct Cli {
    #[arg(long, help = "Emit the final summary as JSON")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        long,
        value_name = "MM/DD/YYYY",
        value_parser = parse_today,
        help = "Reference date for validation and age (defaults to the local date)"
    )]
    pub today: Option<NaiveDate>,
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    date::parse_us_date(raw).ok_or_else(|| format!("expected MM/DD/YYYY, got `{raw}`"))
}
