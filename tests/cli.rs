use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NAMES: [&str; 12] = [
    "Aaron Ng",
    "Bea Ortiz",
    "Cal Park",
    "Dina Quinn",
    "Eli Ross",
    "Fay Stone",
    "Gus Tate",
    "Hana Ueda",
    "Ivan Vega",
    "Jo Wade",
    "Kim Xu",
    "Zoe Yu",
];

fn write_roster(dir: &Path) -> PathBuf {
    let items: Vec<String> = NAMES
        .iter()
        .map(|name| {
            format!(
                r#"<div class="student-details"><h3>{}</h3><span class="email">{}@example.com</span></div>"#,
                name,
                name.to_lowercase().replace(' ', ".")
            )
        })
        .collect();
    let path = dir.join("students.json");
    fs::write(
        &path,
        serde_json::to_string(&items).expect("Failed to encode roster"),
    )
    .expect("Failed to write roster");
    path
}

/// Command isolated from the user's configuration and environment.
fn roster_pager(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster-pager").expect("binary is built");
    cmd.env_remove("ROSTER_PAGE_SIZE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(temp_dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_show_renders_all_three_regions() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .arg("show")
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- .student-list -->"))
        .stdout(predicate::str::contains("<h3>Jo Wade</h3>"))
        .stdout(predicate::str::contains("<h3>Kim Xu</h3>").not())
        .stdout(predicate::str::contains(
            r##"<li>1</li><li><a href="#" id="page-link-2" data-page="2">2</a></li>"##,
        ))
        .stdout(predicate::str::contains("Search for students..."));
}

#[test]
fn test_show_page_size_from_environment() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .env("ROSTER_PAGE_SIZE", "5")
        .args(["show", "--page", "3"])
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3>Kim Xu</h3>"))
        .stdout(predicate::str::contains("<h3>Jo Wade</h3>").not())
        .stdout(predicate::str::contains("page-link-1"));
}

#[test]
fn test_out_of_range_page_is_clamped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .args(["show", "--page", "7"])
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3>Zoe Yu</h3>"));

    roster_pager(&temp_dir)
        .args(["--no-clamp", "show", "--page", "7"])
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3>").not());
}

#[test]
fn test_search_by_initial_in_table_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .args(["--format", "table", "search"])
        .arg(&roster)
        .arg("Y")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zoe Yu"))
        .stdout(predicate::str::contains("zoe.yu@example.com"))
        .stdout(predicate::str::contains("Search active: 1 of 12 entries"))
        .stdout(predicate::str::contains("Actions: search, reset"));
}

#[test]
fn test_search_without_match_notifies() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .arg("search")
        .arg(&roster)
        .arg("Nobody")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "There is no student with the name of \"Nobody\"",
        ))
        .stdout(predicate::str::contains("<h3>Aaron Ng</h3>"))
        .stdout(predicate::str::contains("Reset").not());
}

#[test]
fn test_pattern_search_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .args(["--pattern", "search"])
        .arg(&roster)
        .arg("^(Kim|Zoe) ")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3>Kim Xu</h3>"))
        .stdout(predicate::str::contains("<h3>Zoe Yu</h3>"))
        .stdout(predicate::str::contains("<h3>Aaron Ng</h3>").not());

    // the same text is a literal miss without --pattern
    roster_pager(&temp_dir)
        .arg("search")
        .arg(&roster)
        .arg("^(Kim|Zoe) ")
        .assert()
        .success()
        .stderr(predicate::str::contains("There is no student"));
}

#[test]
fn test_browse_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .arg("browse")
        .arg(&roster)
        .write_stdin("page 2\nsearch Hana\nreset\nbogus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3>Kim Xu</h3>"))
        .stdout(predicate::str::contains("student-search-reset"))
        .stdout(predicate::str::contains("Error: CliError: Unknown command: bogus"));
}

#[test]
fn test_config_set_then_show() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .args(["config", "set", "page_size", "4"])
        .assert()
        .success();

    roster_pager(&temp_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size = 4"));

    roster_pager(&temp_dir)
        .args(["show", "--page", "3"])
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3>Ivan Vega</h3>"))
        .stdout(predicate::str::contains("<h3>Hana Ueda</h3>").not());
}

#[test]
fn test_config_set_keeps_overrides_out_of_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    roster_pager(&temp_dir)
        .env("ROSTER_PAGE_SIZE", "3")
        .args(["--pattern", "--no-clamp", "config", "set", "regions.list", "#roster"])
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("config.toml"))
        .expect("Failed to read saved config");
    assert!(saved.contains("page_size = 10"));
    assert!(saved.contains("search_mode = \"literal\""));
    assert!(saved.contains("clamp_pages = true"));
    assert!(saved.contains("list = \"#roster\""));
}

#[test]
fn test_invalid_config_value_explains_why() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    roster_pager(&temp_dir)
        .args(["config", "set", "search_mode", "fuzzy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 'literal' or 'pattern'"));
}

#[test]
fn test_invalid_config_key_fails_with_hint() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    roster_pager(&temp_dir)
        .args(["config", "set", "theme", "dark"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key 'theme'"))
        .stderr(predicate::str::contains("Hint: Known keys"));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let roster = write_roster(temp_dir.path());

    roster_pager(&temp_dir)
        .args(["--page-size", "0", "show"])
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page size must be greater than 0"));
}

#[test]
fn test_missing_collection_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    roster_pager(&temp_dir)
        .arg("show")
        .arg(temp_dir.path().join("missing.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File I/O error"));
}
