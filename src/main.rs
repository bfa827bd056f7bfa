use clap::Parser;
use std::path::PathBuf;

use contactbook::{IdStrategy, Settings, ThemeChoice, config::CliOverrides, logging};

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "Keep a short list of contacts for the current session")]
struct Cli {
    /// Path to a TOML config file (default: ./contactbook.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `contactbook=debug`
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,

    /// How new contact ids are generated: uuid, sequential or timestamp
    #[arg(long, value_name = "STRATEGY")]
    id_strategy: Option<IdStrategy>,

    /// Window theme: dark or light
    #[arg(long)]
    theme: Option<ThemeChoice>,

    /// Keep the last selected contact after leaving the edit screen
    #[arg(long)]
    keep_selection: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply_cli(CliOverrides {
        log_filter: args.log_filter,
        id_strategy: args.id_strategy,
        theme: args.theme,
        keep_selection: args.keep_selection,
    });

    logging::init_logging(&settings.log_filter)?;
    tracing::debug!(?settings, "settings resolved");

    run(settings)
}

#[cfg(feature = "gui")]
fn run(settings: Settings) -> anyhow::Result<()> {
    use anyhow::Context;
    contactbook::gui::run(settings).context("GUI exited with an error")
}

#[cfg(not(feature = "gui"))]
fn run(_settings: Settings) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; nothing to run")
}
