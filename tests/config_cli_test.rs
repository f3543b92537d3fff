use anyhow::Result;
use clap::Parser;
use gitdeck_core::ActiveTab;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

// Complete flow: CLI args -> config loading -> page settings
#[test]
fn test_config_and_cli_integration() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_dir = temp_dir.path().join(".config").join("gitdeck");
    fs::create_dir_all(&config_dir)?;

    let config_file = config_dir.join("gitdeck.toml");
    let test_config = r#"
version = 1

[ui]
initial_tab = "branches"
animations = true
frame_ms = 20

[terminal]
type_delay_ms = 10
output_delay_ms = 100
dismiss_delay_ms = 1000

[live_stats]
enabled = false
"#;
    fs::write(&config_file, test_config)?;

    // Load config from file
    let config = gitdeck::config::Config::load(Some(config_file.clone()))?;
    assert_eq!(config.version, 1);
    assert_eq!(config.ui.initial_tab, ActiveTab::Branches);
    assert_eq!(config.ui.frame, Duration::from_millis(20));
    assert_eq!(config.terminal.type_delay, Duration::from_millis(10));
    assert!(!config.live_stats.enabled);

    // CLI overrides the file, other settings are preserved
    let args = gitdeck::cli::CliArgs::parse_from([
        "gitdeck",
        "--config",
        config_file.to_str().unwrap(),
        "--tab",
        "issues",
        "--no-animations",
    ]);
    let final_config = gitdeck::config::Config::from_cli_and_file(&args)?;
    assert_eq!(final_config.ui.initial_tab, ActiveTab::Issues);
    assert!(!final_config.ui.animations);
    assert_eq!(final_config.terminal.output_delay, Duration::from_millis(100));

    let settings = final_config.page_settings();
    assert_eq!(settings.initial_tab, ActiveTab::Issues);
    assert_eq!(settings.live_stats, None);
    assert_eq!(settings.terminal.dismiss_delay, Duration::from_millis(1000));

    // Save and reload
    let new_config_file = temp_dir.path().join("new_config.toml");
    final_config.save(&new_config_file)?;
    let reloaded = gitdeck::config::Config::load(Some(new_config_file))?;
    assert_eq!(reloaded, final_config);

    // Missing file gets a default config written
    let nonexistent = temp_dir.path().join("nested").join("gitdeck.toml");
    let default_config = gitdeck::config::Config::load(Some(nonexistent.clone()))?;
    assert_eq!(default_config, gitdeck::config::Config::default());
    assert!(nonexistent.exists());

    Ok(())
}

#[test]
fn test_partial_config_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = temp_dir.path().join("gitdeck.toml");
    fs::write(&config_file, "version = 1\n\n[ui]\nanimations = false\n")?;

    let config = gitdeck::config::Config::load(Some(config_file))?;
    assert!(!config.ui.animations);
    assert_eq!(config.ui.initial_tab, ActiveTab::Commits);
    assert_eq!(config.terminal, gitdeck::config::TerminalConfig::default());
    assert!(config.live_stats.enabled);
    Ok(())
}

#[test]
fn test_dump_from_cli() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_file = temp_dir.path().join("gitdeck.toml");
    let args = gitdeck::cli::CliArgs::parse_from([
        "gitdeck",
        "--config",
        config_file.to_str().unwrap(),
        "--tab",
        "branches",
        "--dump",
    ]);
    let config = gitdeck::config::Config::from_cli_and_file(&args)?;
    let html = gitdeck::app::dump(&config)?;

    assert_eq!(html.matches("class=\"branch-item\"").count(), 5);
    assert!(html.contains("feature/user-dashboard"));
    Ok(())
}
