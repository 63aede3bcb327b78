use chrono::NaiveDate;
use clap::Parser;
use profile_builder::cli::Cli;

#[test]
fn parses_without_flags() {
    let cli = Cli::try_parse_from(["profile-builder"]).expect("cli parse should work");
    assert!(!cli.json);
    assert_eq!(cli.verbose, 0);
    assert!(cli.today.is_none());
}

#[test]
fn parses_json_and_verbosity() {
    let cli =
        Cli::try_parse_from(["profile-builder", "--json", "-vv"]).expect("cli parse should work");
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn parses_today_override() {
    let cli = Cli::try_parse_from(["profile-builder", "--today", "10/16/2026"])
        .expect("cli parse should work");
    assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 10, 16));
}

#[test]
fn rejects_malformed_today() {
    assert!(Cli::try_parse_from(["profile-builder", "--today", "2026-10-16"]).is_err());
}

#[test]
fn rejects_single_digit_today() {
    assert!(Cli::try_parse_from(["profile-builder", "--today", "3/2/2026"]).is_err());
}
