use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sample commit shown in the commits tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Short hash, e.g. `a1b2c3d`
    pub id: String,
    pub message: String,
    pub author: String,
    /// Relative time label, e.g. `2 hours ago`
    pub date: String,
    /// Change summary, e.g. `+15 -3`
    pub files: String,
    #[serde(rename = "type")]
    pub kind: CommitType,
}

impl CommitRecord {
    pub fn new(
        id: &str,
        message: &str,
        author: &str,
        date: &str,
        files: &str,
        kind: CommitType,
    ) -> Self {
        Self {
            id: id.to_string(),
            message: message.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            files: files.to_string(),
            kind,
        }
    }
}

/// Conventional commit category, rendered as a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feature,
    Fix,
    Docs,
    Refactor,
    Test,
}

impl CommitType {
    pub const ALL: [CommitType; 5] = [
        CommitType::Feature,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Refactor,
        CommitType::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feature => "feature",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown commit type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_type_names_round_trip() {
        for kind in CommitType::ALL {
            assert_eq!(kind.as_str().parse::<CommitType>(), Ok(kind));
        }
        assert!("chore".parse::<CommitType>().is_err());
    }
}
