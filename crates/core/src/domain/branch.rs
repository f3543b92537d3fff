use serde::{Deserialize, Serialize};

/// Sample branch shown in the branches tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub name: String,
    pub last_commit: String,
    pub author: String,
    pub date: String,
    pub protected: bool,
    /// Commits ahead of the default branch
    pub ahead: u32,
    /// Commits behind the default branch
    pub behind: u32,
}

impl BranchRecord {
    pub fn new(name: &str, last_commit: &str, author: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            last_commit: last_commit.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            protected: false,
            ahead: 0,
            behind: 0,
        }
    }

    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }

    pub fn diverged(mut self, ahead: u32, behind: u32) -> Self {
        self.ahead = ahead;
        self.behind = behind;
        self
    }
}
