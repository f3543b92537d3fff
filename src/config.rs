use anyhow::{Context, Result};
use directories::ProjectDirs;
use gitdeck_core::ActiveTab;
use gitdeck_core::app::{PageSettings, RevealOptions, TerminalTimings};
use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::CliArgs;

/// Rows the viewport bottom is pulled up by before a section counts as seen
pub const REVEAL_MARGIN_ROWS: i32 = 3;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub live_stats: LiveStatsConfig,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub initial_tab: ActiveTab,
    pub animations: bool,
    /// Redraw interval. Counters keep their own fixed tick.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "frame_ms")]
    pub frame: Duration,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct TerminalConfig {
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "type_delay_ms")]
    pub type_delay: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "output_delay_ms")]
    pub output_delay: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "dismiss_delay_ms")]
    pub dismiss_delay: Duration,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct LiveStatsConfig {
    pub enabled: bool,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "interval_ms")]
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            ui: UiConfig::default(),
            terminal: TerminalConfig::default(),
            live_stats: LiveStatsConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_tab: ActiveTab::Commits,
            animations: true,
            frame: Duration::from_millis(16),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let timings = TerminalTimings::default();
        Self {
            type_delay: timings.type_delay,
            output_delay: timings.output_delay,
            dismiss_delay: timings.dismiss_delay,
        }
    }
}

impl Default for LiveStatsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_millis(5000),
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "gitdeck")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("gitdeck.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;
        config.apply_cli(cli_args);
        Ok(config)
    }

    /// CLI args override config file
    pub fn apply_cli(&mut self, cli_args: &CliArgs) {
        if let Some(tab) = cli_args.tab {
            self.ui.initial_tab = tab;
        }
        if cli_args.no_animations {
            self.ui.animations = false;
        }
    }

    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            initial_tab: self.ui.initial_tab,
            animations: self.ui.animations,
            terminal: TerminalTimings {
                type_delay: self.terminal.type_delay,
                output_delay: self.terminal.output_delay,
                dismiss_delay: self.terminal.dismiss_delay,
            },
            live_stats: self.live_stats.enabled.then_some(self.live_stats.interval),
            reveal: RevealOptions {
                bottom_margin: REVEAL_MARGIN_ROWS,
                ..RevealOptions::default()
            },
            ..PageSettings::default()
        }
    }
}
