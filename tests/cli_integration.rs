use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn meditate_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("meditate").unwrap();
    cmd.env("MEDITATE_HOME", home.path())
        .env_remove("MEDITATE_LOG");
    cmd
}

#[test]
fn raw_body_scan_reads_from_welcome_to_good_night() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["generate", "sleep", "-m", "2", "-l", "en", "-t", "0", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Welcome to this peaceful sleep meditation......",
        ))
        .stdout(predicate::str::ends_with("Good night.\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn styled_output_has_a_header() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["g", "sleep", "-m", "7", "-t", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Body Scan Sleep\nsleep/0 · en · 7 min · long\n"));
}

#[test]
fn unknown_category_fails_naming_it() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["generate", "nonexistent-category", "-l", "en"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Unknown meditation type 'nonexistent-category' for language 'en'",
        ));
}

#[test]
fn unsupported_language_warns_and_uses_english() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["generate", "sleep", "-l", "xx", "-t", "0", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to this peaceful"))
        .stderr(predicate::str::contains(
            "Language 'xx' is not supported, falling back to 'en'",
        ));
}

#[test]
fn region_tagged_language_falls_back() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["generate", "sleep", "-l", "pt-BR", "-t", "0", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to this peaceful"))
        .stderr(predicate::str::contains(
            "Language 'pt-BR' is not supported, falling back to 'en'",
        ));
}

#[test]
fn pinned_template_past_the_end_fails() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["generate", "focus", "-t", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 3 not found"));
}

#[test]
fn day_long_sessions_are_assembled() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["generate", "sleep", "-m", "1500", "-t", "0", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to this peaceful"))
        .stdout(predicate::str::ends_with("Good night.\n"));
}

#[test]
fn non_finite_minutes_are_rejected() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["generate", "sleep", "-m", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn seeded_generation_is_repeatable() {
    let home = TempDir::new().unwrap();
    let run = || {
        meditate_cmd(&home)
            .args(["generate", "sleep", "--seed", "11", "--raw"])
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn configured_language_becomes_the_default() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["config", "language", "FR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language set to fr"));

    meditate_cmd(&home)
        .args(["config", "language"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language = fr"));

    meditate_cmd(&home)
        .args(["generate", "focus", "-m", "4", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Bienvenue dans cette méditation de concentration",
        ));

    assert!(home.path().join("config.json").exists());
}

#[test]
fn config_rejects_bad_values() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["config", "minutes", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a number of minutes"));

    meditate_cmd(&home)
        .args(["config", "voice", "calm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_without_arguments_shows_every_key() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("language = en"))
        .stdout(predicate::str::contains("minutes  = 5"));
}

#[test]
fn list_shows_the_sleep_templates() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["list", "sleep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sleep (5)"))
        .stdout(predicate::str::contains("Body Scan Sleep"))
        .stdout(predicate::str::contains("Cozy Cabin Rain"));
}

#[test]
fn list_reports_missing_categories() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["ls", "focus", "-l", "ko"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No 'focus' templates in 'ko'."));
}

#[test]
fn list_rejects_unsupported_languages() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["list", "-l", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language: xx"));
}

#[test]
fn show_prints_every_section() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["show", "focus", "0", "-l", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Concentration avec Ancre Respiratoire\n",
        ))
        .stdout(predicate::str::contains("\nintro\n"))
        .stdout(predicate::str::contains("\nconcentration\n"))
        .stdout(predicate::str::contains("\nclosing\n"));
}

#[test]
fn languages_prints_the_coverage_matrix() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("total"))
        .stdout(predicate::str::contains("ko  한국어"))
        .stdout(predicate::str::contains("ja  日本語"));
}

#[test]
fn check_passes_on_the_shipped_corpus() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
}

#[test]
fn no_command_prints_grouped_help() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Session Commands:"))
        .stdout(predicate::str::contains("Library Commands:"));
}

#[test]
fn help_for_a_subcommand_lists_its_options() {
    let home = TempDir::new().unwrap();

    meditate_cmd(&home)
        .args(["help", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--minutes"))
        .stdout(predicate::str::contains("--template"));
}
