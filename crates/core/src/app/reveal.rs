use std::collections::HashSet;

use tracing::debug;

use crate::ports::Document;

pub const SECTION_CLASS: &str = "section";
pub const VISIBLE_CLASS: &str = "visible";

/// Intersection options: fraction of a section that must be visible, and how
/// far the viewport's bottom edge is pulled up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub bottom_margin: i32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50,
        }
    }
}

/// Flags sections `visible` the first time they scroll into view. The flag is
/// never cleared.
#[derive(Debug, Default)]
pub struct ScrollRevealer {
    options: RevealOptions,
    observed: Vec<String>,
    revealed: HashSet<String>,
}

impl ScrollRevealer {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Start observing every `.section` currently in the document
    pub fn observe_sections(&mut self, doc: &dyn Document) {
        for id in doc.elements_with_class(SECTION_CLASS) {
            if !self.observed.contains(&id) {
                self.observed.push(id);
            }
        }
        debug!("Observing {} sections", self.observed.len());
    }

    /// Re-check every observed section against the current viewport.
    /// Returns the ids revealed by this call.
    pub fn on_viewport_change(&mut self, doc: &mut dyn Document) -> Vec<String> {
        let viewport = doc.viewport();
        let view_top = viewport.scroll_top;
        let view_bottom = viewport.scroll_top + viewport.height - self.options.bottom_margin;

        let mut newly = Vec::new();
        for id in &self.observed {
            if self.revealed.contains(id) {
                continue;
            }
            let Some(bounds) = doc.bounds(id) else {
                continue;
            };
            if bounds.height <= 0 {
                continue;
            }
            let overlap = bounds.bottom().min(view_bottom) - bounds.top.max(view_top);
            let ratio = overlap as f64 / bounds.height as f64;
            if overlap > 0 && ratio >= self.options.threshold {
                match doc.set_class(id, VISIBLE_CLASS, true) {
                    Ok(()) => newly.push(id.clone()),
                    Err(err) => debug!("Reveal skipped: {}", err),
                }
            }
        }
        for id in &newly {
            debug!("Section #{} revealed", id);
            self.revealed.insert(id.clone());
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::ports::Bounds;
    use crate::render::Element;

    /// Four 100-row sections stacked from the top of the page
    fn page(viewport: i32) -> MemoryDocument {
        let mut body = Element::new("body");
        for id in ["home", "features", "demo", "commands"] {
            body = body.child(Element::new("section").id(id).class(SECTION_CLASS));
        }
        let mut doc = MemoryDocument::new(body);
        for (i, id) in ["home", "features", "demo", "commands"].iter().enumerate() {
            doc.set_bounds(id, Bounds::new(i as i32 * 100, 100));
        }
        doc.set_viewport_height(viewport);
        doc
    }

    #[test]
    fn test_initial_viewport_reveals_top_sections() {
        let mut doc = page(200);
        let mut revealer = ScrollRevealer::default();
        revealer.observe_sections(&doc);

        // Effective viewport is rows 0..150
        assert_eq!(revealer.on_viewport_change(&mut doc), vec!["home", "features"]);
        assert!(doc.has_class("home", VISIBLE_CLASS));
        assert!(!doc.has_class("demo", VISIBLE_CLASS));
    }

    #[test]
    fn test_bottom_margin_delays_reveal() {
        let mut doc = page(165);
        let mut revealer = ScrollRevealer::default();
        revealer.observe_sections(&doc);

        // Effective bottom 115: 15% of features is in view
        assert_eq!(revealer.on_viewport_change(&mut doc), vec!["home", "features"]);

        let mut doc = page(155);
        let mut revealer = ScrollRevealer::default();
        revealer.observe_sections(&doc);
        // Effective bottom 105: only 5% of features
        assert_eq!(revealer.on_viewport_change(&mut doc), vec!["home"]);
    }

    #[test]
    fn test_visible_flag_is_one_way() {
        let mut doc = page(200);
        let mut revealer = ScrollRevealer::default();
        revealer.observe_sections(&doc);
        revealer.on_viewport_change(&mut doc);

        doc.scroll_by(200);
        assert_eq!(revealer.on_viewport_change(&mut doc), vec!["demo", "commands"]);
        assert!(doc.has_class("home", VISIBLE_CLASS));
        assert!(revealer.is_revealed("home"));

        doc.scroll_by(-200);
        assert!(revealer.on_viewport_change(&mut doc).is_empty());
    }

    #[test]
    fn test_sections_without_ids_are_revealed() {
        let body = Element::new("body")
            .child(Element::new("section").class(SECTION_CLASS))
            .child(Element::new("section").class(SECTION_CLASS));
        let mut doc = MemoryDocument::new(body);
        let sections = doc.elements_with_class(SECTION_CLASS);
        doc.set_bounds(&sections[0], Bounds::new(0, 40));
        doc.set_bounds(&sections[1], Bounds::new(60, 40));
        doc.set_viewport_height(100);

        let mut revealer = ScrollRevealer::default();
        revealer.observe_sections(&doc);
        assert_eq!(revealer.on_viewport_change(&mut doc), vec![sections[0].clone()]);
        assert!(doc.has_class(&sections[0], VISIBLE_CLASS));
        assert!(doc.body().to_html().contains("class=\"section visible\""));
    }

    #[test]
    fn test_sections_without_layout_are_skipped() {
        let mut doc = MemoryDocument::new(
            Element::new("body").child(Element::new("section").id("floating").class(SECTION_CLASS)),
        );
        doc.set_viewport_height(100);
        let mut revealer = ScrollRevealer::default();
        revealer.observe_sections(&doc);
        assert!(revealer.on_viewport_change(&mut doc).is_empty());
    }
}
