//! Composition root for the interactive mode: wires the page, the
//! terminal and the wall clock together and runs the frame loop.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gitdeck_core::app::{Page, PageSettings};
use gitdeck_core::ports::{Clock, SystemClock};
use gitdeck_core::render::Element;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::layout;
use crate::tui::{TuiModel, TuiUpdate, TuiView};

/// The interactive application
pub struct GitDeckApp {
    tui_model: TuiModel,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    frame: Duration,
}

impl GitDeckApp {
    pub fn new(config: &Config) -> Result<Self> {
        info!("Initializing GitDeck");

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let mut tui_model = TuiModel::new(config.page_settings());
        tui_model.resize(terminal.size()?.height);

        Ok(Self {
            tui_model,
            terminal,
            frame: config.ui.frame.max(Duration::from_millis(1)),
        })
    }

    /// Run until the user quits, restoring the terminal either way
    pub fn run(mut self) -> Result<()> {
        let result = run_main_loop(&mut self.tui_model, &mut self.terminal, self.frame);
        shutdown(&mut self.terminal)?;
        result
    }
}

fn run_main_loop(
    tui_model: &mut TuiModel,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    frame: Duration,
) -> Result<()> {
    let clock = SystemClock::default();

    loop {
        tui_model.tick(clock.now());
        terminal.draw(|f| TuiView::render(tui_model, f))?;

        let wait = tui_model
            .page
            .next_wakeup()
            .map(|due| due.saturating_sub(clock.now()).min(frame))
            .unwrap_or(frame);

        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let message = TuiUpdate::handle_key(tui_model, key.code, key.modifiers)?;
                    debug!("Key {:?} -> {:?}", key.code, message);
                    tui_model.apply(message);
                }
                Event::Resize(_, height) => tui_model.resize(height),
                _ => {}
            }
        }

        if tui_model.should_quit {
            info!("Quit requested, exiting main loop");
            break;
        }
    }

    Ok(())
}

fn shutdown(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    info!("Shutting down GitDeck");

    if let Err(err) = disable_raw_mode() {
        error!("Failed to leave raw mode: {}", err);
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Boot the page once with animations off and return the markup of the
/// active tab's list region
pub fn dump(config: &Config) -> Result<String> {
    let settings = PageSettings {
        animations: false,
        live_stats: None,
        ..config.page_settings()
    };
    let mut document = layout::standard_page();
    let mut page = Page::new(settings);
    page.boot(&mut document);

    let list_id = page.active_tab().list_id();
    let list = document
        .element(list_id)
        .ok_or_else(|| anyhow::anyhow!("list region #{} is missing", list_id))?;
    Ok(list.child_elements().map(Element::to_html).collect())
}
