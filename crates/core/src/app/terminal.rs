//! Decorative git terminal overlay.
//!
//! Each run walks through [`TerminalPhase`]s on the scheduler: type the
//! command one character at a time, pause, print canned output, then remove
//! the overlay.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, info};

use super::scheduler::Scheduler;
use crate::error::Result;
use crate::ports::Document;
use crate::render::Element;

pub const PROMPT: &str = "$ ";
pub const FALLBACK_OUTPUT: &str = "Command executed successfully";

/// Canned output for the command examples on the page
const COMMAND_OUTPUTS: &[(&str, &str)] = &[
    (
        "git init",
        "Initialized empty Git repository in /path/to/project/.git/",
    ),
    (
        "git status",
        "On branch main<br>No commits yet<br><br>nothing to commit (create/copy files and use \"git add\" to track)",
    ),
    ("git add .", ""),
    (
        "git commit -m \"message\"",
        "1 file changed, 1 insertion(+)<br>create mode 100644 index.html",
    ),
    ("git branch", "* main"),
    (
        "git log",
        "commit a1b2c3d4e5f6g7h8i9j0k1l2m3n4o5p6<br>Author: John Doe &lt;john@example.com&gt;<br>Date: Mon Jan 1 12:00:00 2024 +0000<br><br>    Initial commit",
    ),
];

/// Exact-match lookup in the canned output table
pub fn canned_output(command: &str) -> Option<&'static str> {
    COMMAND_OUTPUTS
        .iter()
        .find(|(cmd, _)| *cmd == command)
        .map(|(_, output)| *output)
}

/// Output shown for `command`. Unknown commands, and commands whose canned
/// output is empty, get the generic success line.
pub fn output_for(command: &str) -> &'static str {
    match canned_output(command) {
        Some(output) if !output.is_empty() => output,
        _ => FALLBACK_OUTPUT,
    }
}

/// Identifies one overlay instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    pub fn element_id(&self) -> String {
        format!("git-terminal-{}", self.0)
    }

    pub fn content_id(&self) -> String {
        format!("git-terminal-{}-content", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalTimings {
    pub type_delay: Duration,
    pub output_delay: Duration,
    pub dismiss_delay: Duration,
}

impl Default for TerminalTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(50),
            output_delay: Duration::from_millis(500),
            dismiss_delay: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalPhase {
    /// `typed` characters of the command are on screen
    Typing { typed: usize },
    /// Command fully typed, waiting to print output
    Executing,
    /// Output shown, waiting to dismiss
    Showing,
}

#[derive(Debug)]
struct Session {
    command: String,
    chars: Vec<char>,
    phase: TerminalPhase,
}

#[derive(Debug, Default)]
pub struct TerminalSimulator {
    timings: TerminalTimings,
    next_id: u64,
    sessions: BTreeMap<OverlayId, Session>,
}

impl TerminalSimulator {
    pub fn new(timings: TerminalTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Open a new overlay and start typing `command` into it.
    ///
    /// Every call gets its own overlay; rapid repeats stack up.
    pub fn execute<T: Clone>(
        &mut self,
        command: &str,
        doc: &mut dyn Document,
        scheduler: &mut Scheduler<T>,
        task: impl Fn(OverlayId) -> T,
    ) -> Result<OverlayId> {
        let id = OverlayId(self.next_id);
        self.next_id += 1;

        doc.append_to_body(overlay_element(id))?;
        doc.set_text(&id.content_id(), PROMPT)?;
        info!("Terminal {} running {:?}", id.element_id(), command);

        self.sessions.insert(
            id,
            Session {
                command: command.to_string(),
                chars: command.chars().collect(),
                phase: TerminalPhase::Typing { typed: 0 },
            },
        );
        self.step(id, doc, scheduler, task);
        Ok(id)
    }

    /// Run the next phase of overlay `id`
    pub fn step<T: Clone>(
        &mut self,
        id: OverlayId,
        doc: &mut dyn Document,
        scheduler: &mut Scheduler<T>,
        task: impl Fn(OverlayId) -> T,
    ) {
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        let content = id.content_id();

        let outcome = match session.phase {
            TerminalPhase::Typing { typed } if typed < session.chars.len() => {
                let ch = session.chars[typed].to_string();
                session.phase = TerminalPhase::Typing { typed: typed + 1 };
                scheduler.set_timeout(self.timings.type_delay, task(id));
                doc.append_text(&content, &ch)
            }
            TerminalPhase::Typing { .. } => {
                session.phase = TerminalPhase::Executing;
                scheduler.set_timeout(self.timings.output_delay, task(id));
                doc.append_html(&content, "<br>")
            }
            TerminalPhase::Executing => {
                session.phase = TerminalPhase::Showing;
                scheduler.set_timeout(self.timings.dismiss_delay, task(id));
                doc.append_html(&content, output_for(&session.command))
            }
            TerminalPhase::Showing => {
                self.sessions.remove(&id);
                debug!("Terminal {} dismissed", id.element_id());
                doc.remove(&id.element_id())
            }
        };

        if let Err(err) = outcome {
            // The overlay was taken out from under us; nothing left to animate.
            debug!("Terminal {} stopped: {}", id.element_id(), err);
            self.sessions.remove(&id);
        }
    }

    pub fn phase(&self, id: OverlayId) -> Option<TerminalPhase> {
        self.sessions.get(&id).map(|s| s.phase)
    }

    /// Live overlays, oldest first
    pub fn active_overlays(&self) -> Vec<OverlayId> {
        self.sessions.keys().copied().collect()
    }
}

fn overlay_element(id: OverlayId) -> Element {
    Element::div("git-terminal")
        .id(&id.element_id())
        .child(
            Element::div("terminal-header")
                .child(
                    Element::div("terminal-controls")
                        .child(Element::span("control close"))
                        .child(Element::span("control minimize"))
                        .child(Element::span("control maximize")),
                )
                .child(Element::div("terminal-title").text("Git Terminal")),
        )
        .child(Element::div("terminal-body").child(Element::div("terminal-content").id(&id.content_id())))
}
