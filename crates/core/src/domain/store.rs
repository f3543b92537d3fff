use super::{BranchRecord, CommitRecord, CommitType, IssueRecord, IssueStatus};

/// Read-only sample data behind the demo panel
///
/// Collections are built once and never mutated. Their order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDataStore {
    commits: Vec<CommitRecord>,
    branches: Vec<BranchRecord>,
    issues: Vec<IssueRecord>,
}

impl Default for SampleDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleDataStore {
    /// The fixed sample data shown on the page
    pub fn new() -> Self {
        Self {
            commits: sample_commits(),
            branches: sample_branches(),
            issues: sample_issues(),
        }
    }

    pub fn from_records(
        commits: Vec<CommitRecord>,
        branches: Vec<BranchRecord>,
        issues: Vec<IssueRecord>,
    ) -> Self {
        Self {
            commits,
            branches,
            issues,
        }
    }

    pub fn commits(&self) -> &[CommitRecord] {
        &self.commits
    }

    pub fn branches(&self) -> &[BranchRecord] {
        &self.branches
    }

    pub fn issues(&self) -> &[IssueRecord] {
        &self.issues
    }
}

fn sample_commits() -> Vec<CommitRecord> {
    vec![
        CommitRecord::new(
            "a1b2c3d",
            "Add user authentication system",
            "john.doe",
            "2 hours ago",
            "+15 -3",
            CommitType::Feature,
        ),
        CommitRecord::new(
            "e4f5g6h",
            "Fix responsive design issues",
            "jane.smith",
            "4 hours ago",
            "+8 -12",
            CommitType::Fix,
        ),
        CommitRecord::new(
            "i7j8k9l",
            "Update documentation",
            "mike.wilson",
            "1 day ago",
            "+25 -5",
            CommitType::Docs,
        ),
        CommitRecord::new(
            "m1n2o3p",
            "Refactor API endpoints",
            "sarah.jones",
            "2 days ago",
            "+45 -20",
            CommitType::Refactor,
        ),
        CommitRecord::new(
            "q4r5s6t",
            "Add unit tests for user service",
            "alex.brown",
            "3 days ago",
            "+120 -0",
            CommitType::Test,
        ),
    ]
}

fn sample_branches() -> Vec<BranchRecord> {
    vec![
        BranchRecord::new("main", "a1b2c3d", "john.doe", "2 hours ago").protected(),
        BranchRecord::new("feature/user-dashboard", "x9y8z7w", "jane.smith", "1 hour ago")
            .diverged(3, 1),
        BranchRecord::new("bugfix/login-validation", "v6u5t4r", "mike.wilson", "3 hours ago")
            .diverged(2, 0),
        BranchRecord::new("feature/payment-integration", "s3p2o1n", "sarah.jones", "1 day ago")
            .diverged(8, 2),
        BranchRecord::new("hotfix/security-patch", "m9l8k7j", "alex.brown", "5 hours ago")
            .diverged(1, 0),
    ]
}

fn sample_issues() -> Vec<IssueRecord> {
    vec![
        IssueRecord::new(
            123,
            "Fix login button styling on mobile devices",
            "jane.smith",
            "2 days ago",
            IssueStatus::Open,
        )
        .labels(&["bug", "mobile", "ui"])
        .assigned_to("mike.wilson"),
        IssueRecord::new(
            124,
            "Add dark mode support",
            "alex.brown",
            "1 week ago",
            IssueStatus::Open,
        )
        .labels(&["enhancement", "ui", "feature"])
        .assigned_to("sarah.jones"),
        IssueRecord::new(
            125,
            "Implement user profile picture upload",
            "john.doe",
            "3 days ago",
            IssueStatus::InProgress,
        )
        .labels(&["feature", "backend"])
        .assigned_to("john.doe"),
        IssueRecord::new(
            126,
            "Optimize database queries for user search",
            "mike.wilson",
            "5 days ago",
            IssueStatus::Closed,
        )
        .labels(&["performance", "database"])
        .assigned_to("mike.wilson"),
        IssueRecord::new(
            127,
            "Add email notifications for new messages",
            "sarah.jones",
            "1 week ago",
            IssueStatus::Open,
        )
        .labels(&["feature", "notifications"]),
    ]
}
