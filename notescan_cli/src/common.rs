// Command-line options and the action they select

use anyhow::{anyhow, Result};
use getopts::{Matches, Options};

use notescan_core::summary::dto::LengthTier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Scan {
        source: String,
        tier: LengthTier,
        dry_run: bool,
    },
    List,
    Show(String),
    Delete(String),
}

pub fn build_options() -> Options {
    let mut opts = Options::new();
    opts.optopt(
        "s",
        "scan",
        "Summarize recognized text from FILE (- for stdin) and store it as a note",
        "FILE",
    );
    opts.optopt(
        "l",
        "length",
        "Summary length for --scan: short, medium or large (default medium)",
        "TIER",
    );
    opts.optflag("n", "dry-run", "With --scan, print the note without storing it");
    opts.optflag("L", "list", "List stored notes, newest first");
    opts.optopt("g", "show", "Print a stored note in share format", "ID");
    opts.optopt("d", "delete", "Delete a stored note", "ID");
    opts.optflag("h", "help", "Show this help message");
    opts
}

/// Resolve parsed flags into exactly one [`Action`].
pub fn parse_action(matches: &Matches) -> Result<Action> {
    let scan = matches.opt_str("scan");
    let show = matches.opt_str("show");
    let delete = matches.opt_str("delete");
    let list = matches.opt_present("list");

    let selected = [scan.is_some(), list, show.is_some(), delete.is_some()]
        .iter()
        .filter(|present| **present)
        .count();
    if selected == 0 {
        return Err(anyhow!(
            "Must specify one of --scan (-s), --list (-L), --show (-g) or --delete (-d)"
        ));
    }
    if selected > 1 {
        return Err(anyhow!("Cannot combine --scan, --list, --show and --delete"));
    }

    if let Some(source) = scan {
        let tier = match matches.opt_str("length") {
            Some(raw) => raw.parse::<LengthTier>()?,
            None => LengthTier::default(),
        };
        return Ok(Action::Scan {
            source,
            tier,
            dry_run: matches.opt_present("dry-run"),
        });
    }

    if matches.opt_present("length") || matches.opt_present("dry-run") {
        return Err(anyhow!("--length and --dry-run only apply to --scan"));
    }

    if let Some(id) = show {
        return Ok(Action::Show(id));
    }
    if let Some(id) = delete {
        return Ok(Action::Delete(id));
    }
    Ok(Action::List)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> Result<Action> {
        let matches = build_options().parse(args).unwrap();
        parse_action(&matches)
    }

    #[test]
    fn test_scan_defaults_to_medium() {
        assert_eq!(
            action(&["--scan", "page.txt"]).unwrap(),
            Action::Scan {
                source: "page.txt".to_string(),
                tier: LengthTier::Medium,
                dry_run: false,
            }
        );
    }

    #[test]
    fn test_scan_with_length_and_dry_run() {
        assert_eq!(
            action(&["-s", "-", "-l", "short", "-n"]).unwrap(),
            Action::Scan {
                source: "-".to_string(),
                tier: LengthTier::Short,
                dry_run: true,
            }
        );
    }

    #[test]
    fn test_invalid_length_is_rejected() {
        let err = action(&["-s", "page.txt", "-l", "tiny"]).unwrap_err();
        assert!(err.to_string().contains("tiny"));
    }

    #[test]
    fn test_note_actions() {
        assert_eq!(action(&["-L"]).unwrap(), Action::List);
        assert_eq!(action(&["-g", "abc"]).unwrap(), Action::Show("abc".to_string()));
        assert_eq!(action(&["--delete", "abc"]).unwrap(), Action::Delete("abc".to_string()));
    }

    #[test]
    fn test_exactly_one_action_required() {
        assert!(action(&[]).is_err());
        assert!(action(&["-L", "-g", "abc"]).is_err());
        assert!(action(&["-L", "-l", "short"]).is_err());
    }
}
