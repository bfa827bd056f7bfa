//! Integration tests for settings layering: defaults, TOML file, environment, CLI.

use std::{collections::HashMap, io::Write, path::Path};

use contactbook::{
    IdStrategy, Settings, ThemeChoice,
    config::{
        CliOverrides, DEFAULT_CONFIG_FILE, ENV_CLEAR_SELECTION, ENV_ID_STRATEGY, ENV_LOG,
        ENV_THEME,
    },
};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config file");
    file
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.theme, ThemeChoice::Dark);
    assert_eq!(settings.id_strategy, IdStrategy::Uuid);
    assert!(settings.clear_selection_on_leave);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn test_file_overrides_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
theme = "light"
id_strategy = "timestamp"
clear_selection_on_leave = false
"#,
    );
    let mut settings = Settings::default();
    settings.apply_file(file.path())?;

    assert_eq!(settings.theme, ThemeChoice::Light);
    assert_eq!(settings.id_strategy, IdStrategy::Timestamp);
    assert!(!settings.clear_selection_on_leave);
    // Not in the file, so untouched
    assert_eq!(settings.log_filter, "info");
    Ok(())
}

#[test]
fn test_overrides_win_over_file() -> anyhow::Result<()> {
    let file = write_config("id_strategy = \"sequential\"\nlog_filter = \"warn\"\n");
    let mut settings = Settings::default();
    settings.apply_file(file.path())?;

    let env: HashMap<&str, &str> = HashMap::from([
        (ENV_ID_STRATEGY, "uuid"),
        (ENV_THEME, "Light"),
        (ENV_CLEAR_SELECTION, "no"),
        (ENV_LOG, "contactbook=debug"),
    ]);
    settings.apply_overrides(|key| env.get(key).map(|v| v.to_string()))?;

    assert_eq!(settings.id_strategy, IdStrategy::Uuid);
    assert_eq!(settings.theme, ThemeChoice::Light);
    assert!(!settings.clear_selection_on_leave);
    assert_eq!(settings.log_filter, "contactbook=debug");
    Ok(())
}

#[test]
fn test_bad_override_is_an_error() {
    let mut settings = Settings::default();
    let result = settings.apply_overrides(|key| {
        (key == ENV_ID_STRATEGY).then(|| "random".to_string())
    });
    assert!(result.is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("theme = [not toml");
    let mut settings = Settings::default();
    let err = settings.apply_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config file"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let missing = dir.path().join("absent.toml");
    assert!(Settings::load(Some(missing.as_path())).is_err());
}

#[test]
fn test_cli_wins_over_file_and_environment() -> anyhow::Result<()> {
    let file = write_config(
        r#"
theme = "light"
id_strategy = "timestamp"
clear_selection_on_leave = true
log_filter = "warn"
"#,
    );
    let env: HashMap<&str, &str> =
        HashMap::from([(ENV_ID_STRATEGY, "uuid"), (ENV_LOG, "error")]);
    let mut settings = Settings::load_from(Some(file.path()), Path::new("unused.toml"), |key| {
        env.get(key).map(|v| v.to_string())
    })?;
    assert_eq!(settings.id_strategy, IdStrategy::Uuid);
    assert_eq!(settings.log_filter, "error");

    settings.apply_cli(CliOverrides {
        log_filter: Some("contactbook=trace".into()),
        id_strategy: Some(IdStrategy::Sequential),
        theme: Some(ThemeChoice::Dark),
        keep_selection: true,
    });

    assert_eq!(settings.log_filter, "contactbook=trace");
    assert_eq!(settings.id_strategy, IdStrategy::Sequential);
    assert_eq!(settings.theme, ThemeChoice::Dark);
    assert!(!settings.clear_selection_on_leave);
    Ok(())
}

#[test]
fn test_empty_cli_changes_nothing() {
    let mut settings = Settings::default();
    settings.apply_cli(CliOverrides::default());
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_missing_default_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let fallback = dir.path().join(DEFAULT_CONFIG_FILE);
    assert!(!fallback.exists());

    let settings = Settings::load_from(None, &fallback, |_| None)?;
    assert_eq!(settings, Settings::default());
    Ok(())
}

#[test]
fn test_default_file_is_read_when_present() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let fallback = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(&fallback, "theme = \"light\"\n")?;

    let settings = Settings::load_from(None, &fallback, |_| None)?;
    assert_eq!(settings.theme, ThemeChoice::Light);
    Ok(())
}
