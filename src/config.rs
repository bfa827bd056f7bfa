use std::{
    fs,
    path::Path,
    str::FromStr,
};

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::core::IdStrategy;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "contactbook.toml";

pub const ENV_THEME: &str = "CONTACTBOOK_THEME";
pub const ENV_ID_STRATEGY: &str = "CONTACTBOOK_ID_STRATEGY";
pub const ENV_CLEAR_SELECTION: &str = "CONTACTBOOK_CLEAR_SELECTION";
pub const ENV_LOG: &str = "CONTACTBOOK_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl FromStr for ThemeChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(anyhow::anyhow!("unknown theme `{}` (expected dark or light)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub id_strategy: IdStrategy,
    /// Drop the edit selection once the edit screen is left.
    pub clear_selection_on_leave: bool,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            id_strategy: IdStrategy::Uuid,
            clear_selection_on_leave: true,
            log_filter: "info".into(),
        }
    }
}

/// Values given on the command line. `None`/`false` leaves a setting alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub log_filter: Option<String>,
    pub id_strategy: Option<IdStrategy>,
    pub theme: Option<ThemeChoice>,
    pub keep_selection: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    theme: Option<ThemeChoice>,
    id_strategy: Option<IdStrategy>,
    clear_selection_on_leave: Option<bool>,
    log_filter: Option<String>,
}

impl Settings {
    /// Defaults, then the config file, then `CONTACTBOOK_*` environment variables.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read only if present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(path, Path::new(DEFAULT_CONFIG_FILE), |key| {
            std::env::var(key).ok()
        })
    }

    /// Like [`load`](Self::load) with an explicit fallback file and key lookup.
    pub fn load_from(
        path: Option<&Path>,
        fallback: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut settings = Settings::default();
        match path {
            Some(path) => settings.apply_file(path)?,
            None if fallback.is_file() => settings.apply_file(fallback)?,
            None => debug!(?fallback, "no config file, using defaults"),
        }
        settings.apply_overrides(lookup)?;
        Ok(settings)
    }

    pub fn apply_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        self.apply_toml(&raw)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        debug!(?path, "config file applied");
        Ok(())
    }

    pub fn apply_toml(&mut self, raw: &str) -> anyhow::Result<()> {
        let file: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file.theme {
            self.theme = v;
        }
        if let Some(v) = file.id_strategy {
            self.id_strategy = v;
        }
        if let Some(v) = file.clear_selection_on_leave {
            self.clear_selection_on_leave = v;
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
        Ok(())
    }

    /// Apply overrides from a key lookup, normally the process environment.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(v) = lookup(ENV_THEME) {
            self.theme = v.parse().with_context(|| format!("Invalid {}", ENV_THEME))?;
        }
        if let Some(v) = lookup(ENV_ID_STRATEGY) {
            self.id_strategy = v
                .parse()
                .with_context(|| format!("Invalid {}", ENV_ID_STRATEGY))?;
        }
        if let Some(v) = lookup(ENV_CLEAR_SELECTION) {
            self.clear_selection_on_leave =
                parse_flag(&v).with_context(|| format!("Invalid {}", ENV_CLEAR_SELECTION))?;
        }
        if let Some(v) = lookup(ENV_LOG) {
            self.log_filter = v;
        }
        Ok(())
    }

    /// Last layer: command line flags win over everything else.
    pub fn apply_cli(&mut self, cli: CliOverrides) {
        if let Some(filter) = cli.log_filter {
            self.log_filter = filter;
        }
        if let Some(strategy) = cli.id_strategy {
            self.id_strategy = strategy;
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if cli.keep_selection {
            self.clear_selection_on_leave = false;
        }
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("expected a boolean, got `{}`", other)),
    }
}
