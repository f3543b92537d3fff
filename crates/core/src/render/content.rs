use tracing::debug;

use super::markup::Element;
use crate::domain::{ActiveTab, BranchRecord, CommitRecord, IssueRecord, SampleDataStore};
use crate::error::{CoreError, Result};
use crate::ports::Document;

/// Build the list blocks for `tab`, one per record, in collection order
pub fn render(tab: ActiveTab, store: &SampleDataStore) -> Vec<Element> {
    match tab {
        ActiveTab::Commits => store.commits().iter().map(commit_block).collect(),
        ActiveTab::Branches => store.branches().iter().map(branch_block).collect(),
        ActiveTab::Issues => store.issues().iter().map(issue_block).collect(),
    }
}

/// Replace the whole list region of `tab` with freshly rendered blocks.
/// A page without that region is left alone.
pub fn render_into(doc: &mut dyn Document, tab: ActiveTab, store: &SampleDataStore) -> Result<()> {
    let fragments = render(tab, store);
    debug!("Rendering {} {} blocks into #{}", fragments.len(), tab, tab.list_id());
    match doc.replace_children(tab.list_id(), fragments) {
        Err(CoreError::ElementMissing { id }) => {
            debug!("No list region #{}, nothing rendered", id);
            Ok(())
        }
        result => result,
    }
}

pub fn commit_block(commit: &CommitRecord) -> Element {
    let kind = commit.kind.as_str();
    Element::div("commit-item")
        .child(
            Element::div("commit-header")
                .child(Element::div("commit-id").text(&commit.id))
                .child(Element::div("commit-type").class(kind).text(kind)),
        )
        .child(Element::div("commit-message").text(&commit.message))
        .child(
            Element::div("commit-meta")
                .child(Element::span("commit-author").text(&commit.author))
                .child(Element::span("commit-date").text(&commit.date))
                .child(Element::span("commit-files").text(format!("{} files", commit.files))),
        )
}

pub fn branch_block(branch: &BranchRecord) -> Element {
    let protected = branch
        .protected
        .then(|| Element::icon("fas fa-shield-alt protected"));
    let ahead = (branch.ahead > 0).then(|| Element::span("ahead").text(format!("+{}", branch.ahead)));
    let behind =
        (branch.behind > 0).then(|| Element::span("behind").text(format!("-{}", branch.behind)));

    Element::div("branch-item")
        .child(
            Element::div("branch-header")
                .child(
                    Element::div("branch-name")
                        .child(Element::icon("fas fa-code-branch"))
                        .text(&branch.name)
                        .child_opt(protected),
                )
                .child(Element::div("branch-stats").child_opt(ahead).child_opt(behind)),
        )
        .child(
            Element::div("branch-meta")
                .child(Element::span("branch-commit").text(&branch.last_commit))
                .child(Element::span("branch-author").text(&branch.author))
                .child(Element::span("branch-date").text(&branch.date)),
        )
}

pub fn issue_block(issue: &IssueRecord) -> Element {
    let status = issue.status.as_str();
    let assignee = issue
        .assignee
        .as_ref()
        .map(|name| Element::span("issue-assignee").text(format!("@{name}")));
    let labels = issue
        .labels
        .iter()
        .map(|label| Element::span("issue-label").class(label).text(label));

    Element::div("issue-item")
        .class(status)
        .child(
            Element::div("issue-header")
                .child(Element::div("issue-number").text(format!("#{}", issue.number)))
                .child(Element::div("issue-status").class(status).text(status)),
        )
        .child(Element::div("issue-title").text(&issue.title))
        .child(
            Element::div("issue-meta")
                .child(Element::span("issue-author").text(&issue.author))
                .child(Element::span("issue-date").text(&issue.date))
                .child_opt(assignee),
        )
        .child(Element::div("issue-labels").children(labels))
}
