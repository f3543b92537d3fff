use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sample issue shown in the issues tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Display number, not an identity
    pub number: u32,
    pub title: String,
    pub author: String,
    pub date: String,
    /// Display order is insertion order
    pub labels: Vec<String>,
    pub status: IssueStatus,
    pub assignee: Option<String>,
}

impl IssueRecord {
    pub fn new(number: u32, title: &str, author: &str, date: &str, status: IssueStatus) -> Self {
        Self {
            number,
            title: title.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            labels: Vec::new(),
            status,
            assignee: None,
        }
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn assigned_to(mut self, assignee: &str) -> Self {
        self.assignee = Some(assignee.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Closed,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::InProgress => "in-progress",
            IssueStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IssueStatus::Open),
            "in-progress" => Ok(IssueStatus::InProgress),
            "closed" => Ok(IssueStatus::Closed),
            other => Err(format!("unknown issue status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_status_uses_kebab_case() {
        assert_eq!(IssueStatus::InProgress.to_string(), "in-progress");
        assert_eq!("in-progress".parse::<IssueStatus>(), Ok(IssueStatus::InProgress));
        assert!("In Progress".parse::<IssueStatus>().is_err());
    }

    #[test]
    fn test_issue_builder_keeps_label_order() {
        let issue = IssueRecord::new(1, "t", "a", "now", IssueStatus::Open)
            .labels(&["ui", "bug", "mobile"]);
        assert_eq!(issue.labels, vec!["ui", "bug", "mobile"]);
        assert_eq!(issue.assignee, None);
    }
}
