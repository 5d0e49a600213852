use super::*;

use assert_matches::assert_matches;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("incsearch").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_normalize() {
    let opt = parse(&["normalize", "a**b", "c??"]);
    assert_matches!(opt.command, Command::Normalize(NormalizeOpt { patterns, file: None, keep_empty: false }) => {
        assert_eq!(patterns, vec!["a**b", "c??"]);
    });

    let opt = parse(&["normalize", "--file", "sample/patterns.txt", "--keep-empty"]);
    assert_matches!(opt.command, Command::Normalize(NormalizeOpt { patterns, file: Some(file), keep_empty: true }) => {
        assert!(patterns.is_empty());
        assert_eq!(file, PathBuf::from("sample/patterns.txt"));
    });
}

#[test]
fn test_normalize_conflict() {
    let result = Opt::try_parse_from(["incsearch", "normalize", "-f", "-", "a*"]);
    assert!(result.is_err());
}

#[test]
fn test_apps() {
    let opt = parse(&["apps", "list"]);
    assert_matches!(opt.command, Command::Apps(AppsCommand::List { filter: None, long: false }));

    let opt = parse(&["--color", "never", "apps", "list", "-l", "fire"]);
    assert_eq!(opt.color, ColorOption::Never);
    assert_matches!(opt.command, Command::Apps(AppsCommand::List { filter: Some(f), long: true }) if f == "fire");

    let opt = parse(&["apps", "open", "Visual", "Studio", "Code", "--color=always"]);
    assert_eq!(opt.color, ColorOption::Always);
    assert_matches!(opt.command, Command::Apps(AppsCommand::Open { name }) => {
        assert_eq!(name.join(" "), "Visual Studio Code");
    });

    assert!(Opt::try_parse_from(["incsearch", "apps", "open"]).is_err());
}

#[test]
fn test_color_choice() {
    assert_eq!(anstream::ColorChoice::from(ColorOption::Auto), anstream::ColorChoice::Auto);
    assert_eq!(anstream::ColorChoice::from(ColorOption::Always), anstream::ColorChoice::Always);
    assert_eq!(anstream::ColorChoice::from(ColorOption::Never), anstream::ColorChoice::Never);
}
