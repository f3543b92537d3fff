//! The standard GitDeck page: the static scaffolding the page components
//! drive, laid out in terminal rows.

use gitdeck_core::ActiveTab;
use gitdeck_core::app::ACTIVE_CLASS;
use gitdeck_core::dom::MemoryDocument;
use gitdeck_core::ports::Bounds;
use gitdeck_core::render::Element;

/// Sections in page order with their height in rows
pub const SECTIONS: [(&str, &str, i32); 5] = [
    ("home", "Home", 12),
    ("features", "Features", 14),
    ("demo", "Live Demo", 34),
    ("commands", "Commands", 16),
    ("practices", "Best Practices", 14),
];

/// In-page anchors outside the nav bar
pub const INLINE_LINK_CLASS: &str = "cta";

/// Command examples, with the one-line explanation shown next to each
pub const COMMAND_EXAMPLES: [(&str, &str); 6] = [
    ("git init", "Create a new repository"),
    ("git status", "Show the working tree status"),
    ("git add .", "Stage every change"),
    ("git commit -m \"message\"", "Record staged changes"),
    ("git branch", "List branches"),
    ("git log", "Show commit history"),
];

const FEATURES: [(&str, &str); 4] = [
    ("Commits", "Every change recorded with an author, a message and a hash"),
    ("Branches", "Parallel lines of work that stay cheap to create and merge"),
    ("Issues", "Track bugs and ideas with labels, assignees and status"),
    ("Collaboration", "Review, discuss and merge work from the whole team"),
];

const PRACTICES: [(&str, &str); 4] = [
    ("Small commits", "One logical change per commit keeps history readable"),
    ("Descriptive messages", "Say what changed and why in the first line"),
    ("Protect main", "Require reviews before anything lands on the default branch"),
    ("Short-lived branches", "Merge often so branches never drift far behind"),
];

pub fn nav_link_id(section: &str) -> String {
    format!("nav-{section}")
}

pub fn tab_button_id(tab: ActiveTab) -> String {
    format!("tab-btn-{tab}")
}

pub fn command_id(index: usize) -> String {
    format!("cmd-{index}")
}

/// Build the page document and lay out its sections
pub fn standard_page() -> MemoryDocument {
    let mut nav = Element::new("nav").id("navbar").class("navbar");
    for (i, (id, title, _)) in SECTIONS.iter().enumerate() {
        let mut link = Element::new("a")
            .id(&nav_link_id(id))
            .class("nav-link")
            .attr("href", &format!("#{id}"))
            .text(*title);
        if i == 0 {
            link = link.class(ACTIVE_CLASS);
        }
        nav = nav.child(link);
    }

    let body = Element::new("body")
        .child(nav)
        .child(hero())
        .child(cards_section("features", "Why Git hosting?", "card feature-item", &FEATURES))
        .child(demo())
        .child(commands())
        .child(cards_section("practices", "Best Practices", "card practice-card", &PRACTICES));

    let mut doc = MemoryDocument::new(body);
    let mut top = 0;
    for (id, _, height) in SECTIONS {
        doc.set_bounds(id, Bounds::new(top, height));
        top += height;
    }
    doc
}

fn hero() -> Element {
    let stat = |id: &str, label: &str| {
        Element::div("stat")
            .child(Element::span("stat-number").id(id).text("0"))
            .child(Element::span("stat-label").text(label))
    };
    Element::new("section")
        .id("home")
        .class("section hero")
        .child(Element::new("h1").class("section-title").text("Git Deep Dive"))
        .child(
            Element::new("p")
                .class("section-text")
                .text("How source-control hosting keeps a team's work in one place"),
        )
        .child(
            Element::div("hero-stats")
                .child(stat("repos-count", "Repositories"))
                .child(stat("commits-count", "Commits"))
                .child(stat("collaborators-count", "Collaborators")),
        )
        .child(
            Element::new("a")
                .id("hero-cta")
                .class(INLINE_LINK_CLASS)
                .attr("href", "#demo")
                .text("Explore the live demo"),
        )
}

fn cards_section(id: &str, title: &str, card_class: &str, cards: &[(&str, &str)]) -> Element {
    let cards = cards.iter().map(|(heading, text)| {
        Element::div(card_class)
            .child(Element::new("h3").class("card-title").text(*heading))
            .child(Element::new("p").class("card-text").text(*text))
    });
    Element::new("section")
        .id(id)
        .class("section")
        .child(Element::new("h2").class("section-title").text(title))
        .children(cards)
}

fn demo() -> Element {
    let mut tab_bar = Element::div("tab-bar");
    let mut panels = Vec::new();
    for tab in ActiveTab::ALL {
        let mut button = Element::new("button")
            .id(&tab_button_id(tab))
            .class("tab-btn")
            .attr("data-tab", tab.name())
            .text(title_case(tab.name()));
        let mut panel = Element::div("tab-content")
            .id(&tab.panel_id())
            .child(Element::div("item-list").id(tab.list_id()));
        if tab == ActiveTab::default() {
            button = button.class(ACTIVE_CLASS);
            panel = panel.class(ACTIVE_CLASS);
        }
        tab_bar = tab_bar.child(button);
        panels.push(panel);
    }
    Element::new("section")
        .id("demo")
        .class("section")
        .child(Element::new("h2").class("section-title").text("Live Demo"))
        .child(tab_bar)
        .children(panels)
}

fn commands() -> Element {
    let items = COMMAND_EXAMPLES.iter().enumerate().map(|(i, (command, description))| {
        Element::div("command-item")
            .child(Element::new("code").id(&command_id(i)).text(*command))
            .child(Element::span("command-description").text(*description))
    });
    Element::new("section")
        .id("commands")
        .class("section")
        .child(Element::new("h2").class("section-title").text("Essential Commands"))
        .child(
            Element::new("p")
                .class("section-text")
                .text("Pick a command to watch it run"),
        )
        .children(items)
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
