use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use gitdeck_core::ActiveTab;
use gitdeck_core::app::Interaction;
use gitdeck_core::ports::Document;

use super::model::{TuiMessage, TuiModel};
use crate::layout;

/// The Update function - turns key presses into messages
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press. Selection changes are applied to the model
    /// directly; everything else comes back as a message.
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        let message = match key {
            KeyCode::Char('q') | KeyCode::Esc => TuiMessage::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => TuiMessage::Quit,

            KeyCode::Char('1') => Self::click_tab(ActiveTab::Commits),
            KeyCode::Char('2') => Self::click_tab(ActiveTab::Branches),
            KeyCode::Char('3') => Self::click_tab(ActiveTab::Issues),
            KeyCode::Tab => Self::click_tab(model.page.active_tab().next()),

            KeyCode::Char('j') | KeyCode::Down => TuiMessage::Scroll(1),
            KeyCode::Char('k') | KeyCode::Up => TuiMessage::Scroll(-1),
            KeyCode::PageDown => TuiMessage::Scroll(Self::page_rows(model)),
            KeyCode::PageUp => TuiMessage::Scroll(-Self::page_rows(model)),

            KeyCode::Char('n') | KeyCode::Right => {
                model.select_next_link();
                TuiMessage::None
            }
            KeyCode::Char('p') | KeyCode::Left => {
                model.select_prev_link();
                TuiMessage::None
            }
            KeyCode::Enter => TuiMessage::Interaction(Interaction::ClickLink {
                id: model.selected_link_id(),
            }),

            KeyCode::Char('c') => {
                model.select_next_command();
                TuiMessage::None
            }
            KeyCode::Char('t') => TuiMessage::Interaction(Interaction::ClickCommand {
                id: model.selected_command_id(),
            }),

            _ => TuiMessage::None,
        };
        Ok(message)
    }

    fn click_tab(tab: ActiveTab) -> TuiMessage {
        TuiMessage::Interaction(Interaction::ClickTab {
            id: layout::tab_button_id(tab),
        })
    }

    fn page_rows(model: &TuiModel) -> i32 {
        model.document.viewport().height.max(1)
    }
}
