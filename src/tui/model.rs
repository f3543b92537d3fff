use std::time::Duration;

use gitdeck_core::app::{Interaction, NAV_LINK_CLASS, Page, PageSettings};
use gitdeck_core::dom::MemoryDocument;
use gitdeck_core::ports::Document;
use tracing::info;

use crate::layout::{self, COMMAND_EXAMPLES, INLINE_LINK_CLASS};

/// Rows taken by the nav bar and the footer around the page viewport
pub const CHROME_ROWS: u16 = 6;

/// The TUI Model - the page, its document and the keyboard selection state
pub struct TuiModel {
    pub page: Page,
    pub document: MemoryDocument,

    /// Followable links: nav links first, then in-page anchors
    pub links: Vec<String>,

    /// Index into `links` of the link under the cursor
    pub selected_link: usize,

    /// Index into [`COMMAND_EXAMPLES`] of the command under the cursor
    pub selected_command: usize,

    /// Whether the application should quit
    pub should_quit: bool,
}

/// Messages produced by key handling
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Forward to the page
    Interaction(Interaction),

    /// Scroll the page viewport by this many rows
    Scroll(i32),

    Quit,

    /// No action needed
    None,
}

impl TuiModel {
    pub fn new(settings: PageSettings) -> Self {
        let mut document = layout::standard_page();
        let mut page = Page::new(settings);
        page.boot(&mut document);
        let mut links = document.elements_with_class(NAV_LINK_CLASS);
        links.extend(document.elements_with_class(INLINE_LINK_CLASS));
        Self {
            page,
            document,
            links,
            selected_link: 0,
            selected_command: 0,
            should_quit: false,
        }
    }

    /// Apply a message from the update step
    pub fn apply(&mut self, message: TuiMessage) {
        match message {
            TuiMessage::Interaction(interaction) => self.page.handle(interaction, &mut self.document),
            TuiMessage::Scroll(rows) => {
                self.document.scroll_by(rows);
                self.page.handle(Interaction::ViewportChanged, &mut self.document);
            }
            TuiMessage::Quit => {
                info!("Quit requested by user");
                self.should_quit = true;
            }
            TuiMessage::None => {}
        }
    }

    /// Run due timers and one smooth-scroll step
    pub fn tick(&mut self, now: Duration) {
        self.page.advance(now, &mut self.document);
        if self.document.step_smooth_scroll() {
            self.page.handle(Interaction::ViewportChanged, &mut self.document);
        }
    }

    /// Handle terminal resize
    pub fn resize(&mut self, height: u16) {
        let rows = height.saturating_sub(CHROME_ROWS);
        self.document.set_viewport_height(i32::from(rows));
        self.page.handle(Interaction::ViewportChanged, &mut self.document);
    }

    pub fn select_next_link(&mut self) {
        if !self.links.is_empty() {
            self.selected_link = (self.selected_link + 1) % self.links.len();
        }
    }

    pub fn select_prev_link(&mut self) {
        if !self.links.is_empty() {
            self.selected_link = (self.selected_link + self.links.len() - 1) % self.links.len();
        }
    }

    pub fn select_next_command(&mut self) {
        self.selected_command = (self.selected_command + 1) % COMMAND_EXAMPLES.len();
    }

    pub fn selected_link_id(&self) -> String {
        self.links.get(self.selected_link).cloned().unwrap_or_default()
    }

    pub fn selected_command_id(&self) -> String {
        layout::command_id(self.selected_command)
    }
}
