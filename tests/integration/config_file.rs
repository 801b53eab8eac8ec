// =====
// TESTS: 4
// =====
//
// Loading combobox options from JSON files and the CLI.

use clap::Parser;
use combobox_nav::{Cli, ComboboxError, ComboboxOptions, ScrollAlignment};
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::helpers::started_page;

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn options_from_file_drive_the_combobox() {
    let file = config_file(r#"{ "allow_tab_commit": false, "default_first_option": true }"#);
    let options = ComboboxOptions::from_json_file(file.path()).unwrap();
    assert_eq!(options.scroll_alignment, ScrollAlignment::Nearest);

    let mut page = started_page(options);
    assert!(!page.press(KeyCode::Tab).prevent_default);
    page.press(KeyCode::Enter);
    assert_eq!(page.commit_ids(), vec!["baymax"]);
}

#[test]
fn cli_flags_override_the_file() {
    let file = config_file(r#"{ "scroll_alignment": "end", "secondary_bindings": false }"#);
    let path = file.path().to_str().unwrap();
    let cli = Cli::parse_from(["demo", "--config", path, "--align", "start", "--no-tab-commit"]);
    assert_eq!(
        cli.combobox_options().unwrap(),
        ComboboxOptions {
            allow_tab_commit: false,
            default_first_option: false,
            scroll_alignment: ScrollAlignment::Start,
            secondary_bindings: Some(false),
        }
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let file = config_file(r#"{ "wrap_around": true }"#);
    let err = ComboboxOptions::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ComboboxError::ConfigParse(_)));
    assert_eq!(err.exit_code(), ComboboxError::CONFIG_EXIT_CODE);
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ComboboxOptions::from_json_file(&path).unwrap_err();
    assert!(matches!(&err, ComboboxError::ConfigRead { path: p, .. } if *p == path));
    assert!(err.to_string().contains("absent.json"));
}
