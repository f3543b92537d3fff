//! In-memory [`Document`] used by the terminal front-end and by tests.

use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::ports::{Bounds, Document, ScrollBehavior, Viewport};
use crate::render::{Element, Node};

/// A page held as an element tree plus per-element layout bounds.
/// Every element inserted without an id is given a `@N` handle.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    body: Element,
    bounds: HashMap<String, Bounds>,
    viewport: Viewport,
    scroll_target: Option<i32>,
    next_handle: u64,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(Element::new("body"))
    }
}

impl MemoryDocument {
    pub fn new(mut body: Element) -> Self {
        let mut next_handle = 0;
        assign_handles(&mut body, &mut next_handle);
        Self {
            body,
            bounds: HashMap::new(),
            viewport: Viewport::default(),
            scroll_target: None,
            next_handle,
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn set_bounds(&mut self, id: &str, bounds: Bounds) {
        self.bounds.insert(id.to_string(), bounds);
    }

    /// Bottom of the lowest laid-out element
    pub fn page_height(&self) -> i32 {
        self.bounds.values().map(Bounds::bottom).max().unwrap_or(0)
    }

    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport.height = height.max(0);
        self.viewport.scroll_top = self.clamp_scroll(self.viewport.scroll_top);
    }

    /// Manual scroll; cancels any smooth scroll in flight
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_target = None;
        self.viewport.scroll_top = self.clamp_scroll(self.viewport.scroll_top + delta);
    }

    pub fn scroll_target(&self) -> Option<i32> {
        self.scroll_target
    }

    /// Move one animation step towards the smooth-scroll target.
    /// Returns true while the viewport is still moving.
    pub fn step_smooth_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let distance = target - self.viewport.scroll_top;
        if distance == 0 {
            self.scroll_target = None;
            return false;
        }
        let step = (distance.abs() / 4).max(1) * distance.signum();
        self.viewport.scroll_top += step;
        if self.viewport.scroll_top == target {
            self.scroll_target = None;
        }
        true
    }

    fn clamp_scroll(&self, top: i32) -> i32 {
        let max = (self.page_height() - self.viewport.height).max(0);
        top.clamp(0, max)
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.body
            .find_by_id_mut(id)
            .ok_or_else(|| CoreError::missing(id))
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.body.find_by_id(id).is_some()
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        self.body.keys_with_class(class)
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> Result<()> {
        self.element_mut(id)?.set_class(class, enabled);
        Ok(())
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)
            .and_then(|el| el.attribute(name))
            .map(str::to_string)
    }

    fn replace_children(&mut self, id: &str, mut children: Vec<Element>) -> Result<()> {
        if !self.contains(id) {
            return Err(CoreError::missing(id));
        }
        for child in &mut children {
            assign_handles(child, &mut self.next_handle);
        }
        let el = self.element_mut(id)?;
        el.children = children.into_iter().map(Node::Element).collect();
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        let el = self.element_mut(id)?;
        el.children = vec![Node::Text(text.to_string())];
        Ok(())
    }

    fn append_text(&mut self, id: &str, text: &str) -> Result<()> {
        self.element_mut(id)?
            .children
            .push(Node::Text(text.to_string()));
        Ok(())
    }

    fn append_html(&mut self, id: &str, html: &str) -> Result<()> {
        self.element_mut(id)?.children.push(Node::Raw(html.to_string()));
        Ok(())
    }

    fn text(&self, id: &str) -> Option<String> {
        self.element(id).map(Element::text_content)
    }

    fn append_to_body(&mut self, mut element: Element) -> Result<()> {
        assign_handles(&mut element, &mut self.next_handle);
        self.body.children.push(Node::Element(element));
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        if self.body.remove_by_id(id) {
            self.bounds.remove(id);
            Ok(())
        } else {
            Err(CoreError::missing(id))
        }
    }

    fn bounds(&self, id: &str) -> Option<Bounds> {
        self.bounds.get(id).copied()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> Result<()> {
        if !self.contains(id) {
            return Err(CoreError::missing(id));
        }
        let Some(bounds) = self.bounds(id) else {
            return Ok(());
        };
        let top = self.clamp_scroll(bounds.top);
        match behavior {
            ScrollBehavior::Auto => {
                self.scroll_target = None;
                self.viewport.scroll_top = top;
            }
            ScrollBehavior::Smooth => self.scroll_target = Some(top),
        }
        Ok(())
    }
}

fn assign_handles(el: &mut Element, next: &mut u64) {
    if el.id.is_none() && el.handle.is_none() {
        el.handle = Some(format!("@{next}"));
        *next += 1;
    }
    for node in &mut el.children {
        if let Node::Element(child) = node {
            assign_handles(child, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> MemoryDocument {
        let body = Element::new("body")
            .child(Element::new("section").id("home").class("section"))
            .child(Element::new("section").id("demo").class("section"));
        let mut doc = MemoryDocument::new(body);
        doc.set_bounds("home", Bounds::new(0, 20));
        doc.set_bounds("demo", Bounds::new(20, 40));
        doc.set_viewport_height(20);
        doc
    }

    #[test]
    fn test_missing_element_is_reported() {
        let mut doc = page();
        assert_eq!(doc.set_text("nope", "x"), Err(CoreError::missing("nope")));
        assert_eq!(doc.remove("nope"), Err(CoreError::missing("nope")));
        assert!(doc.text("nope").is_none());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut doc = page();
        doc.scroll_into_view("demo", ScrollBehavior::Smooth).unwrap();
        assert_eq!(doc.viewport().scroll_top, 0);
        let mut steps = 0;
        while doc.step_smooth_scroll() {
            steps += 1;
            assert!(steps < 100);
        }
        assert_eq!(doc.viewport().scroll_top, 20);
        assert_eq!(doc.scroll_target(), None);
    }

    #[test]
    fn test_scroll_is_clamped_to_page() {
        let mut doc = page();
        doc.scroll_by(500);
        assert_eq!(doc.viewport().scroll_top, 40);
        doc.scroll_by(-500);
        assert_eq!(doc.viewport().scroll_top, 0);
    }

    #[test]
    fn test_append_text_and_html() {
        let mut doc = page();
        doc.set_text("home", "$ ").unwrap();
        doc.append_text("home", "g").unwrap();
        doc.append_html("home", "<br>").unwrap();
        assert_eq!(doc.text("home").as_deref(), Some("$ g<br>"));
        assert_eq!(doc.elements_with_class("section"), vec!["home", "demo"]);
    }

    #[test]
    fn test_id_less_elements_get_stable_handles() {
        let body = Element::new("body")
            .child(Element::new("section").class("section"))
            .child(Element::new("section").id("demo").class("section"));
        let mut doc = MemoryDocument::new(body);

        let sections = doc.elements_with_class("section");
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with('@'));
        assert_eq!(sections[1], "demo");

        doc.set_class(&sections[0], "visible", true).unwrap();
        assert!(doc.has_class(&sections[0], "visible"));
        assert!(!doc.body().to_html().contains('@'));

        doc.append_to_body(Element::div("overlay")).unwrap();
        let overlay = doc.elements_with_class("overlay").remove(0);
        assert_ne!(overlay, sections[0]);
        assert_eq!(doc.elements_with_class("section")[0], sections[0]);
        doc.remove(&overlay).unwrap();
        assert!(doc.elements_with_class("overlay").is_empty());
    }
}
