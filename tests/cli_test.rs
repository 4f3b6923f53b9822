use clap::Parser;
use plugen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("plugen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.project, None);
    assert_eq!(parsed.table, None);
    assert_eq!(parsed.templates, None);
    assert_eq!(parsed.output_dir, None);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--project",
        "Leslie",
        "--table",
        "params.csv",
        "--templates",
        "./templates",
        "--output-dir",
        "./out",
        "--author",
        "Jane Doe",
        "--year",
        "2021",
        "--config",
        "plugen.yaml",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project.as_deref(), Some("Leslie"));
    assert_eq!(parsed.table, Some(PathBuf::from("params.csv")));
    assert_eq!(parsed.templates, Some(PathBuf::from("./templates")));
    assert_eq!(parsed.output_dir, Some(PathBuf::from("./out")));
    assert_eq!(parsed.author.as_deref(), Some("Jane Doe"));
    assert_eq!(parsed.year.as_deref(), Some("2021"));
    assert_eq!(parsed.config, Some(PathBuf::from("plugen.yaml")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-p", "Chorus", "-t", "t.csv", "-o", "out", "-c", "c.json", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project.as_deref(), Some("Chorus"));
    assert_eq!(parsed.table, Some(PathBuf::from("t.csv")));
    assert_eq!(parsed.output_dir, Some(PathBuf::from("out")));
    assert_eq!(parsed.config, Some(PathBuf::from("c.json")));
    assert!(parsed.verbose);
}

#[test]
fn test_invalid_year() {
    assert!(Args::try_parse_from(make_args(&["--year", "next"])).is_err());
    assert!(Args::try_parse_from(make_args(&["--year", ""])).is_err());
}

#[test]
fn test_positional_args_rejected() {
    assert!(Args::try_parse_from(make_args(&["Leslie"])).is_err());
}
