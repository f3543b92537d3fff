use gitdeck_core::app::{ACTIVE_CLASS, NAV_LINK_CLASS, PRESSED_CLASS, VISIBLE_CLASS};
use gitdeck_core::ports::Document;
use gitdeck_core::render::{Element, Node};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::model::TuiModel;
use crate::layout::{INLINE_LINK_CLASS, SECTIONS};

const OVERLAY_WIDTH: u16 = 64;
const OVERLAY_HEIGHT: u16 = 12;

/// The View component of MVU - draws the page document
pub struct TuiView;

impl TuiView {
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Nav bar
                Constraint::Min(0),    // Page viewport
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        Self::render_nav(model, frame, chunks[0]);
        Self::render_page(model, frame, chunks[1]);
        Self::render_footer(model, frame, chunks[2]);
        Self::render_overlays(model, frame, frame.area());
    }

    fn render_nav(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let doc = &model.document;
        let selected = model.selected_link_id();
        let mut spans = Vec::new();
        for id in doc.elements_with_class(NAV_LINK_CLASS) {
            let mut style = Style::default().fg(Color::Gray);
            if doc.has_class(&id, ACTIVE_CLASS) {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            if id == selected {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if doc.has_class(&id, PRESSED_CLASS) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(doc.text(&id).unwrap_or_default(), style));
            spans.push(Span::raw("   "));
        }

        let nav = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("GitDeck"))
            .alignment(Alignment::Center);
        frame.render_widget(nav, area);
    }

    fn render_page(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let lines = page_lines(model);
        let start = (model.document.viewport().scroll_top.max(0) as usize).min(lines.len());
        let end = (start + area.height as usize).min(lines.len());
        frame.render_widget(Paragraph::new(lines[start..end].to_vec()), area);
    }

    fn render_footer(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| {
            Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        };
        let mut spans: Vec<Span> = vec![
            key("1-3"),
            "/".into(),
            key("Tab"),
            " tabs  ".into(),
            key("j,k"),
            " scroll  ".into(),
            key("n,p"),
            "/".into(),
            key("Enter"),
            " navigate  ".into(),
            key("c"),
            "/".into(),
            key("t"),
            " run command  ".into(),
            key("q"),
            " quit".into(),
        ];
        let overlays = model.page.terminal().active_overlays().len();
        if overlays > 0 {
            spans.push(Span::styled(
                format!("   [{overlays} terminal(s)]"),
                Style::default().fg(Color::Green),
            ));
        }

        let footer = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, area);
    }

    /// Terminal overlays stack down and to the right, newest on top
    fn render_overlays(model: &TuiModel, frame: &mut Frame, area: Rect) {
        for (i, id) in model.page.terminal().active_overlays().iter().enumerate() {
            let markup = model.document.text(&id.content_id()).unwrap_or_default();
            let offset = (i as u16).saturating_mul(2);
            let rect = overlay_rect(area, offset);

            let terminal = Paragraph::new(terminal_lines(&markup))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" ● ● ●  Git Terminal ")
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .style(Style::default().fg(Color::White).bg(Color::Black))
                .wrap(Wrap { trim: false });

            frame.render_widget(Clear, rect);
            frame.render_widget(terminal, rect);
        }
    }
}

fn overlay_rect(area: Rect, offset: u16) -> Rect {
    let width = OVERLAY_WIDTH.min(area.width);
    let height = OVERLAY_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2 + offset;
    let y = area.y + (area.height - height) / 2 + offset;
    Rect::new(
        x.min(area.right().saturating_sub(width)),
        y.min(area.bottom().saturating_sub(height)),
        width,
        height,
    )
}

/// Every section of the page, each padded to its laid-out height.
/// Sections not yet revealed are drawn dimmed.
pub fn page_lines(model: &TuiModel) -> Vec<Line<'static>> {
    let doc = &model.document;
    let mut lines = Vec::new();
    for (id, _, height) in SECTIONS {
        let mut section = Vec::new();
        if let Some(el) = doc.element(id) {
            element_lines(el, model, &mut section);
        }
        section.resize(height.max(0) as usize, Line::default());

        if !doc.has_class(id, VISIBLE_CLASS) {
            let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
            section = section.into_iter().map(|line| line.patch_style(dim)).collect();
        }
        lines.extend(section);
    }
    lines
}

fn element_lines(el: &Element, model: &TuiModel, out: &mut Vec<Line<'static>>) {
    if el.has_class("section-title") {
        out.push(Line::from(Span::styled(
            el.text_content(),
            Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        )));
        out.push(Line::default());
    } else if el.has_class("section-text") {
        out.push(Line::from(el.text_content()));
        out.push(Line::default());
    } else if el.has_class("hero-stats") {
        let mut spans = Vec::new();
        for stat in el.find_by_class("stat") {
            for part in stat.child_elements() {
                if part.has_class("stat-number") {
                    spans.push(Span::styled(
                        part.text_content(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ));
                } else {
                    spans.push(Span::raw(format!(" {}     ", part.text_content())));
                }
            }
        }
        out.push(Line::from(spans));
        out.push(Line::default());
    } else if el.has_class(INLINE_LINK_CLASS) {
        let mut style = Style::default().fg(Color::LightBlue).add_modifier(Modifier::UNDERLINED);
        if el.key() == Some(model.selected_link_id().as_str()) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        out.push(Line::from(Span::styled(format!("→ {}", el.text_content()), style)));
    } else if el.has_class("card") {
        let title = el.find_by_class("card-title").first().map(|t| t.text_content());
        let text = el.find_by_class("card-text").first().map(|t| t.text_content());
        out.push(Line::from(vec![
            Span::raw("• "),
            Span::styled(title.unwrap_or_default(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": "),
            Span::styled(text.unwrap_or_default(), Style::default().fg(Color::Gray)),
        ]));
    } else if el.has_class("tab-bar") {
        let mut spans = Vec::new();
        for button in el.child_elements() {
            let mut style = Style::default().fg(Color::Gray);
            if button.has_class(ACTIVE_CLASS) {
                style = Style::default().fg(Color::Black).bg(Color::Cyan);
            }
            if button.has_class(PRESSED_CLASS) {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {} ", button.text_content()), style));
            spans.push(Span::raw(" "));
        }
        out.push(Line::from(spans));
        out.push(Line::default());
    } else if el.has_class("tab-content") {
        if el.has_class(ACTIVE_CLASS) {
            for list in el.child_elements() {
                for item in list.child_elements() {
                    out.extend(item_lines(item));
                    out.push(Line::default());
                }
            }
        }
    } else if el.has_class("command-item") {
        let mut spans = Vec::new();
        for part in el.child_elements() {
            if part.tag == "code" {
                let selected = part.id.as_deref() == Some(model.selected_command_id().as_str());
                let mut style = Style::default().fg(Color::Yellow);
                if selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!("$ {}", part.text_content()), style));
            } else {
                spans.push(Span::styled(
                    format!("   {}", part.text_content()),
                    Style::default().fg(Color::Gray),
                ));
            }
        }
        out.push(Line::from(spans));
    } else {
        for child in el.child_elements() {
            element_lines(child, model, out);
        }
    }
}

/// One line per row of a rendered list block (header, message, meta, labels)
pub fn item_lines(item: &Element) -> Vec<Line<'static>> {
    item.child_elements()
        .map(|row| {
            let mut pieces = Vec::new();
            collect_spans(row, Style::default(), &mut pieces);
            let mut spans = vec![Span::raw("  ")];
            for (i, piece) in pieces.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(piece);
            }
            Line::from(spans)
        })
        .filter(|line| line.width() > 2)
        .collect()
}

fn collect_spans(el: &Element, inherited: Style, out: &mut Vec<Span<'static>>) {
    let style = class_style(el).unwrap_or(inherited);
    if el.tag == "i" {
        out.push(Span::styled(icon_glyph(el), style));
        return;
    }
    let badge = ["commit-type", "issue-status", "issue-label"]
        .iter()
        .any(|class| el.has_class(class));

    for node in &el.children {
        match node {
            Node::Element(child) => collect_spans(child, style, out),
            Node::Text(text) | Node::Raw(text) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                let text = if badge {
                    format!("[{}]", text.to_uppercase())
                } else {
                    text.to_string()
                };
                out.push(Span::styled(text, style));
            }
        }
    }
}

fn icon_glyph(el: &Element) -> &'static str {
    if el.has_class("fa-code-branch") {
        "⎇"
    } else if el.has_class("fa-shield-alt") {
        "🔒"
    } else {
        "•"
    }
}

fn class_style(el: &Element) -> Option<Style> {
    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let has = |class: &str| el.has_class(class);

    if has("commit-id") || has("branch-name") || has("issue-number") {
        return Some(bold(Color::LightBlue));
    }
    if has("commit-message") || has("issue-title") {
        return Some(bold(Color::White));
    }
    if has("commit-type") {
        let color = if has("feature") {
            Color::Green
        } else if has("fix") {
            Color::Red
        } else if has("docs") {
            Color::Blue
        } else if has("refactor") {
            Color::Yellow
        } else {
            Color::Magenta
        };
        return Some(bold(color));
    }
    if has("issue-status") {
        let color = if has("open") {
            Color::Green
        } else if has("in-progress") {
            Color::Blue
        } else {
            Color::Gray
        };
        return Some(bold(color));
    }
    if has("issue-label") {
        let color = ["bug", "performance"]
            .iter()
            .any(|&l| has(l))
            .then_some(Color::Red)
            .or_else(|| ["enhancement", "database"].iter().any(|&l| has(l)).then_some(Color::Blue))
            .or_else(|| ["feature", "notifications"].iter().any(|&l| has(l)).then_some(Color::Green))
            .or_else(|| has("mobile").then_some(Color::Magenta))
            .or_else(|| has("ui").then_some(Color::Yellow))
            .unwrap_or(Color::Gray);
        return Some(Style::default().fg(color));
    }
    if has("ahead") {
        return Some(bold(Color::Green));
    }
    if has("behind") {
        return Some(bold(Color::Red));
    }
    if has("protected") {
        return Some(Style::default().fg(Color::Yellow));
    }
    if has("issue-assignee") {
        return Some(Style::default().fg(Color::LightBlue));
    }
    if has("commit-meta") || has("branch-meta") || has("issue-meta") {
        return Some(Style::default().fg(Color::DarkGray));
    }
    None
}

/// Terminal content is markup: `<br>` breaks lines and entities are decoded
pub fn terminal_lines(markup: &str) -> Vec<Line<'static>> {
    markup
        .split("<br>")
        .map(|line| {
            let text = line
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&amp;", "&");
            Line::from(text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use gitdeck_core::app::PageSettings;
    use gitdeck_core::render::commit_block;
    use gitdeck_core::SampleDataStore;
    use ratatui::{Terminal, backend::TestBackend};

    fn model() -> TuiModel {
        TuiModel::new(PageSettings {
            live_stats: None,
            animations: false,
            ..Config::default().page_settings()
        })
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen(model: &TuiModel, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| TuiView::render(model, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_terminal_lines_decode_markup() {
        let lines = terminal_lines("$ git log<br>Author: John Doe &lt;john@example.com&gt;");
        let texts: Vec<_> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["$ git log", "Author: John Doe <john@example.com>"]);
    }

    #[test]
    fn test_commit_item_lines() {
        let store = SampleDataStore::new();
        let lines = item_lines(&commit_block(&store.commits()[0]));
        let texts: Vec<_> = lines.iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec![
                "  a1b2c3d [FEATURE]",
                "  Add user authentication system",
                "  john.doe 2 hours ago +15 -3 files",
            ]
        );
    }

    #[test]
    fn test_sections_pad_to_layout_height() {
        let model = model();
        let total: i32 = SECTIONS.iter().map(|(_, _, h)| h).sum();
        assert_eq!(page_lines(&model).len(), total as usize);
    }

    #[test]
    fn test_screen_shows_counters_and_nav() {
        let mut model = model();
        model.resize(40);
        let text = screen(&model, 100, 40);
        assert!(text.contains("GitDeck"));
        assert!(text.contains("1,250"));
        assert!(text.contains("15,600"));
        assert!(text.contains("Best Practices"));
    }

    #[test]
    fn test_overlay_is_drawn() {
        let mut model = model();
        model.resize(40);
        model.page.handle(
            gitdeck_core::app::Interaction::RunCommand { command: "git branch".into() },
            &mut model.document,
        );
        model.tick(std::time::Duration::from_millis(2000));
        let text = screen(&model, 100, 40);
        assert!(text.contains("Git Terminal"));
        assert!(text.contains("* main"));
    }
}
