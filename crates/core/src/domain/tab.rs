use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// One of the three mutually exclusive lists in the demo panel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Commits,
    Branches,
    Issues,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Commits, ActiveTab::Branches, ActiveTab::Issues];

    /// Value of the `data-tab` attribute on the tab button
    pub fn name(&self) -> &'static str {
        match self {
            ActiveTab::Commits => "commits",
            ActiveTab::Branches => "branches",
            ActiveTab::Issues => "issues",
        }
    }

    /// Id of the content panel, `<tab>-tab`
    pub fn panel_id(&self) -> String {
        format!("{}-tab", self.name())
    }

    /// Id of the region the list is rendered into
    pub fn list_id(&self) -> &'static str {
        match self {
            ActiveTab::Commits => "commit-list",
            ActiveTab::Branches => "branch-list",
            ActiveTab::Issues => "issue-list",
        }
    }

    pub fn next(&self) -> ActiveTab {
        match self {
            ActiveTab::Commits => ActiveTab::Branches,
            ActiveTab::Branches => ActiveTab::Issues,
            ActiveTab::Issues => ActiveTab::Commits,
        }
    }
}

impl std::fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActiveTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| CoreError::UnknownTab { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_commits() {
        assert_eq!(ActiveTab::default(), ActiveTab::Commits);
    }

    #[test]
    fn test_tab_ids() {
        assert_eq!(ActiveTab::Branches.panel_id(), "branches-tab");
        assert_eq!(ActiveTab::Issues.list_id(), "issue-list");
    }

    #[test]
    fn test_parse_unknown_tab() {
        assert_eq!(
            "pulls".parse::<ActiveTab>(),
            Err(CoreError::UnknownTab { name: "pulls".to_string() })
        );
        assert_eq!("issues".parse::<ActiveTab>(), Ok(ActiveTab::Issues));
    }

    #[test]
    fn test_next_cycles_through_all_tabs() {
        let mut tab = ActiveTab::Commits;
        for _ in 0..3 {
            tab = tab.next();
        }
        assert_eq!(tab, ActiveTab::Commits);
    }
}
