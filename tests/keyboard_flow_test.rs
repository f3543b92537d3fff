use crossterm::event::{KeyCode, KeyModifiers};
use gitdeck::config::Config;
use gitdeck::tui::{TuiModel, TuiUpdate, TuiView};
use gitdeck_core::ActiveTab;
use gitdeck_core::app::PageSettings;
use gitdeck_core::ports::Document;
use ratatui::{Terminal, backend::TestBackend};
use std::time::Duration;

fn model() -> TuiModel {
    let mut model = TuiModel::new(PageSettings {
        live_stats: None,
        ..Config::default().page_settings()
    });
    model.resize(40);
    model
}

fn press(model: &mut TuiModel, key: KeyCode) {
    let message = TuiUpdate::handle_key(model, key, KeyModifiers::NONE).unwrap();
    model.apply(message);
}

fn screen(model: &TuiModel) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| TuiView::render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..40 {
        for x in 0..100 {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_counters_animate_to_targets() {
    let mut model = model();
    assert_eq!(model.document.text("repos-count").as_deref(), Some("0"));

    let mut now = Duration::ZERO;
    while now <= Duration::from_millis(3000) {
        model.tick(now);
        now += Duration::from_millis(16);
    }

    assert_eq!(model.document.text("repos-count").as_deref(), Some("1,250"));
    assert_eq!(model.document.text("commits-count").as_deref(), Some("15,600"));
    assert_eq!(model.document.text("collaborators-count").as_deref(), Some("45"));
    assert_eq!(model.page.counters().running(), 0);
}

#[test]
fn test_number_keys_switch_tabs() {
    let mut model = model();

    press(&mut model, KeyCode::Char('3'));
    assert_eq!(model.page.active_tab(), ActiveTab::Issues);
    assert!(model.document.has_class("issues-tab", "active"));
    assert!(!model.document.has_class("commits-tab", "active"));
    assert_eq!(
        model.document.element("issue-list").unwrap().child_elements().count(),
        model.page.store().issues().len()
    );

    press(&mut model, KeyCode::Tab);
    assert_eq!(model.page.active_tab(), ActiveTab::Commits);
}

#[test]
fn test_enter_navigates_to_selected_section() {
    let mut model = model();
    press(&mut model, KeyCode::Char('n'));
    press(&mut model, KeyCode::Char('n'));
    press(&mut model, KeyCode::Enter);

    assert!(model.document.has_class("nav-demo", "active"));
    assert!(!model.document.has_class("nav-home", "active"));

    for frame in 0..100u64 {
        model.tick(Duration::from_millis(frame * 16));
    }
    let demo = model.document.bounds("demo").unwrap();
    assert_eq!(model.document.viewport().scroll_top, demo.top);
    assert!(model.document.has_class("demo", "visible"));
}

#[test]
fn test_command_runs_in_terminal_overlay() {
    let mut model = model();
    press(&mut model, KeyCode::Char('c'));
    press(&mut model, KeyCode::Char('t'));

    let overlays = model.page.terminal().active_overlays();
    assert_eq!(overlays.len(), 1);
    let content = overlays[0].content_id();

    model.tick(Duration::from_millis(1500));
    assert_eq!(
        model.document.text(&content).unwrap(),
        "$ git status<br>On branch main<br>No commits yet<br><br>nothing to commit (create/copy files and use \"git add\" to track)"
    );
    assert!(screen(&model).contains("On branch main"));

    model.tick(Duration::from_millis(10_000));
    assert!(model.page.terminal().active_overlays().is_empty());
    assert!(!model.document.contains(&overlays[0].element_id()));
}

#[test]
fn test_quit_keys() {
    let mut model = model();
    let message = TuiUpdate::handle_key(&mut model, KeyCode::Char('c'), KeyModifiers::CONTROL).unwrap();
    model.apply(message);
    assert!(model.should_quit);
}
