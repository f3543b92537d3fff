//! Page bootstrap: owns every component and routes interactions and timer
//! tasks to them.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::commands::Interaction;
use super::counter::{CounterAnimator, CounterId, PAGE_COUNTERS};
use super::live_stats::LiveStats;
use super::navigation::{NAV_LINK_CLASS, NavigationController};
use super::press::PressFeedback;
use super::reveal::{RevealOptions, ScrollRevealer};
use super::scheduler::Scheduler;
use super::tabs::TabController;
use super::terminal::{OverlayId, TerminalSimulator, TerminalTimings};
use crate::domain::{ActiveTab, SampleDataStore};
use crate::format::format_thousands;
use crate::ports::Document;

/// Element whose count drifts upward while the page is open
pub const LIVE_COUNTER_ID: &str = "commits-count";

#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub initial_tab: ActiveTab,
    /// When false, counters show their final value immediately
    pub animations: bool,
    pub counter_tick: Duration,
    pub terminal: TerminalTimings,
    /// Interval of the live commit counter; `None` disables it
    pub live_stats: Option<Duration>,
    /// Fixed seed for the live counter, for reproducible runs
    pub live_stats_seed: Option<u64>,
    pub reveal: RevealOptions,
    pub press_hold: Duration,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            initial_tab: ActiveTab::Commits,
            animations: true,
            counter_tick: Duration::from_millis(16),
            terminal: TerminalTimings::default(),
            live_stats: Some(Duration::from_millis(5000)),
            live_stats_seed: None,
            reveal: RevealOptions::default(),
            press_hold: Duration::from_millis(150),
        }
    }
}

/// Work scheduled on the page's timer queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTask {
    CounterTick(CounterId),
    Terminal(OverlayId),
    LiveStats,
    Release(String),
}

pub struct Page {
    settings: PageSettings,
    store: SampleDataStore,
    scheduler: Scheduler<PageTask>,
    tabs: TabController,
    counters: CounterAnimator,
    revealer: ScrollRevealer,
    terminal: TerminalSimulator,
    nav: NavigationController,
    press: PressFeedback,
    live: Option<LiveStats>,
}

impl Page {
    pub fn new(settings: PageSettings) -> Self {
        Self::with_store(settings, SampleDataStore::new())
    }

    pub fn with_store(settings: PageSettings, store: SampleDataStore) -> Self {
        let live = settings.live_stats.map(|_| match settings.live_stats_seed {
            Some(seed) => LiveStats::seeded(LIVE_COUNTER_ID, seed),
            None => LiveStats::new(LIVE_COUNTER_ID),
        });
        Self {
            scheduler: Scheduler::new(),
            tabs: TabController::new(),
            counters: CounterAnimator::new(settings.counter_tick),
            revealer: ScrollRevealer::new(settings.reveal),
            terminal: TerminalSimulator::new(settings.terminal),
            nav: NavigationController::new(),
            press: PressFeedback::new(settings.press_hold),
            live,
            store,
            settings,
        }
    }

    /// Wire everything to `doc`: start counters, observe sections, render
    /// the initial tab and start the live counter
    pub fn boot(&mut self, doc: &mut dyn Document) {
        info!("Booting page");

        for (element, target, duration) in PAGE_COUNTERS {
            if self.settings.animations {
                self.counters
                    .animate(element, target, duration, &mut self.scheduler, PageTask::CounterTick);
            } else if let Err(err) = doc.set_text(element, &format_thousands(target)) {
                debug!("Counter skipped: {}", err);
            }
        }

        self.revealer.observe_sections(doc);
        self.revealer.on_viewport_change(doc);

        if let Err(err) = self.tabs.refresh(doc, &self.store) {
            debug!("Initial render skipped: {}", err);
        }
        if self.settings.initial_tab != ActiveTab::default() {
            let name = self.settings.initial_tab.name();
            if let Err(err) = self.tabs.switch_to(name, doc, &self.store) {
                warn!("Could not open initial tab {}: {}", name, err);
            }
        }

        if let Some(interval) = self.settings.live_stats {
            self.scheduler.set_interval(interval, PageTask::LiveStats);
        }
    }

    pub fn handle(&mut self, interaction: Interaction, doc: &mut dyn Document) {
        debug!("Handling {:?}", interaction);
        match interaction {
            Interaction::ClickTab { id } => {
                self.press_feedback(&id, doc);
                let Some(name) = doc.attribute(&id, "data-tab") else {
                    debug!("Tab button #{} has no data-tab", id);
                    return;
                };
                if let Err(err) = self.tabs.switch_to(&name, doc, &self.store) {
                    debug!("Tab click ignored: {}", err);
                }
            }

            Interaction::ClickLink { id } => {
                if doc.has_class(&id, NAV_LINK_CLASS) {
                    self.press_feedback(&id, doc);
                }
                match self.nav.on_link_click(&id, doc) {
                    Ok(outcome) => debug!("Link #{} -> #{}", id, outcome.target),
                    Err(err) => debug!("Link click ignored: {}", err),
                }
                self.revealer.on_viewport_change(doc);
            }

            Interaction::ClickCommand { id } => match doc.text(&id) {
                Some(command) => self.run_command(command.trim(), doc),
                None => debug!("Command example #{} not found", id),
            },

            Interaction::RunCommand { command } => self.run_command(&command, doc),

            Interaction::ViewportChanged => {
                self.revealer.on_viewport_change(doc);
            }
        }
    }

    /// Dispatch every task due at or before `now`. Returns how many ran.
    pub fn advance(&mut self, now: Duration, doc: &mut dyn Document) -> usize {
        let mut ran = 0;
        while let Some((_, task)) = self.scheduler.pop_due(now) {
            self.dispatch(task, doc);
            ran += 1;
        }
        self.scheduler.settle(now);
        ran
    }

    fn dispatch(&mut self, task: PageTask, doc: &mut dyn Document) {
        match task {
            PageTask::CounterTick(id) => {
                self.counters.tick(id, doc, &mut self.scheduler);
            }
            PageTask::Terminal(id) => {
                self.terminal
                    .step(id, doc, &mut self.scheduler, PageTask::Terminal);
            }
            PageTask::LiveStats => {
                if let Some(live) = self.live.as_mut() {
                    live.tick(doc);
                }
            }
            PageTask::Release(id) => self.press.release(&id, doc),
        }
    }

    fn run_command(&mut self, command: &str, doc: &mut dyn Document) {
        if let Err(err) = self
            .terminal
            .execute(command, doc, &mut self.scheduler, PageTask::Terminal)
        {
            warn!("Terminal overlay failed to open: {}", err);
        }
    }

    fn press_feedback(&mut self, id: &str, doc: &mut dyn Document) {
        self.press
            .press(id, doc, &mut self.scheduler, PageTask::Release(id.to_string()));
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.tabs.active()
    }

    pub fn store(&self) -> &SampleDataStore {
        &self.store
    }

    pub fn terminal(&self) -> &TerminalSimulator {
        &self.terminal
    }

    pub fn revealer(&self) -> &ScrollRevealer {
        &self.revealer
    }

    pub fn counters(&self) -> &CounterAnimator {
        &self.counters
    }

    /// When the next timer is due, for sleeping between frames
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }
}
