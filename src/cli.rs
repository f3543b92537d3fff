use clap::Parser;
use gitdeck_core::ActiveTab;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "gitdeck")]
#[command(about = "GitDeck - an interactive terminal tour of commits, branches, issues and git commands")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tab to open first: commits, branches or issues (overrides config)
    #[arg(long)]
    pub tab: Option<ActiveTab>,

    /// Show final counter values instead of animating them
    #[arg(long)]
    pub no_animations: bool,

    /// Print the selected tab's rendered markup and exit
    #[arg(long)]
    pub dump: bool,

    /// Write logs to this file (the TUI keeps the terminal to itself)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let args = CliArgs::parse_from(["gitdeck"]);
        assert_eq!(args.config, None);
        assert_eq!(args.tab, None);
        assert!(!args.no_animations);
        assert!(!args.dump);
    }

    #[test]
    fn test_cli_parse_tab_and_flags() {
        let args = CliArgs::parse_from([
            "gitdeck",
            "--tab", "issues",
            "--no-animations",
            "--config", "/custom/gitdeck.toml",
        ]);
        assert_eq!(args.tab, Some(ActiveTab::Issues));
        assert!(args.no_animations);
        assert_eq!(args.config, Some(PathBuf::from("/custom/gitdeck.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_tab() {
        assert!(CliArgs::try_parse_from(["gitdeck", "--tab", "pulls"]).is_err());
    }
}
