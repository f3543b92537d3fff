use tracing::{debug, warn};

use crate::domain::{ActiveTab, SampleDataStore};
use crate::error::{CoreError, Result};
use crate::ports::Document;
use crate::render;

pub const TAB_BUTTON_CLASS: &str = "tab-btn";
pub const TAB_PANEL_CLASS: &str = "tab-content";
pub const ACTIVE_CLASS: &str = "active";

/// Owns the active tab and keeps buttons, panels and the list in step with it
#[derive(Debug, Default)]
pub struct TabController {
    active: ActiveTab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ActiveTab {
        self.active
    }

    /// Switch to the tab named `name`.
    ///
    /// An unknown name, or one without a matching button and panel, leaves
    /// both the document and the active tab untouched.
    pub fn switch_to(
        &mut self,
        name: &str,
        doc: &mut dyn Document,
        store: &SampleDataStore,
    ) -> Result<ActiveTab> {
        let tab: ActiveTab = name.parse().inspect_err(|err| warn!("Ignoring tab switch: {}", err))?;

        let button = find_button(doc, tab).ok_or_else(|| {
            warn!("No tab button for {}", tab);
            CoreError::missing(format!("[data-tab=\"{tab}\"]"))
        })?;
        let panel = tab.panel_id();
        if !doc.contains(&panel) {
            warn!("No content panel #{}", panel);
            return Err(CoreError::missing(panel));
        }

        for id in doc.elements_with_class(TAB_BUTTON_CLASS) {
            doc.set_class(&id, ACTIVE_CLASS, false)?;
        }
        doc.set_class(&button, ACTIVE_CLASS, true)?;

        for id in doc.elements_with_class(TAB_PANEL_CLASS) {
            doc.set_class(&id, ACTIVE_CLASS, false)?;
        }
        doc.set_class(&panel, ACTIVE_CLASS, true)?;

        debug!("Switched tab {} -> {}", self.active, tab);
        self.active = tab;
        if let Err(err) = self.refresh(doc, store) {
            warn!("Tab {} switched but its list was not rendered: {}", tab, err);
        }
        Ok(tab)
    }

    /// Re-render the active tab's list without touching button state
    pub fn refresh(&self, doc: &mut dyn Document, store: &SampleDataStore) -> Result<()> {
        render::render_into(doc, self.active, store)
    }
}

/// Id or handle of the tab button whose `data-tab` names `tab`
pub fn find_button(doc: &dyn Document, tab: ActiveTab) -> Option<String> {
    doc.elements_with_class(TAB_BUTTON_CLASS)
        .into_iter()
        .find(|id| doc.attribute(id, "data-tab").as_deref() == Some(tab.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::render::Element;

    fn demo_panel() -> MemoryDocument {
        let mut body = Element::new("body");
        for tab in ActiveTab::ALL {
            body = body.child(
                Element::new("button")
                    .id(&format!("tab-{tab}"))
                    .class(TAB_BUTTON_CLASS)
                    .attr("data-tab", tab.name()),
            );
        }
        for tab in ActiveTab::ALL {
            body = body.child(
                Element::div(TAB_PANEL_CLASS)
                    .id(&tab.panel_id())
                    .child(Element::div("list").id(tab.list_id())),
            );
        }
        MemoryDocument::new(body)
    }

    #[test]
    fn test_switch_activates_exactly_one_button_and_panel() {
        let mut doc = demo_panel();
        let store = SampleDataStore::new();
        let mut tabs = TabController::new();

        tabs.switch_to("branches", &mut doc, &store).unwrap();
        assert_eq!(tabs.active(), ActiveTab::Branches);
        assert!(doc.has_class("tab-branches", ACTIVE_CLASS));
        assert!(!doc.has_class("tab-commits", ACTIVE_CLASS));
        assert!(doc.has_class("branches-tab", ACTIVE_CLASS));
        assert!(!doc.has_class("issues-tab", ACTIVE_CLASS));
        assert_eq!(doc.element("branch-list").unwrap().child_elements().count(), 5);
    }

    #[test]
    fn test_switch_is_idempotent() {
        let mut doc = demo_panel();
        let store = SampleDataStore::new();
        let mut tabs = TabController::new();

        tabs.switch_to("issues", &mut doc, &store).unwrap();
        let once = doc.body().to_html();
        tabs.switch_to("issues", &mut doc, &store).unwrap();
        assert_eq!(doc.body().to_html(), once);
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let mut doc = demo_panel();
        let store = SampleDataStore::new();
        let mut tabs = TabController::new();
        tabs.switch_to("issues", &mut doc, &store).unwrap();
        let before = doc.body().to_html();

        let err = tabs.switch_to("pulls", &mut doc, &store).unwrap_err();
        assert_eq!(err, CoreError::UnknownTab { name: "pulls".to_string() });
        assert_eq!(tabs.active(), ActiveTab::Issues);
        assert_eq!(doc.body().to_html(), before);
    }

    #[test]
    fn test_buttons_without_ids_are_matched_on_data_tab() {
        let mut body = Element::new("body");
        for tab in ActiveTab::ALL {
            body = body.child(
                Element::new("button")
                    .class(TAB_BUTTON_CLASS)
                    .attr("data-tab", tab.name()),
            );
        }
        body = body.child(Element::div(TAB_PANEL_CLASS).class(ACTIVE_CLASS));
        for tab in ActiveTab::ALL {
            body = body.child(
                Element::div(TAB_PANEL_CLASS)
                    .id(&tab.panel_id())
                    .child(Element::div("list").id(tab.list_id())),
            );
        }
        let mut doc = MemoryDocument::new(body);
        let store = SampleDataStore::new();
        let mut tabs = TabController::new();

        assert_eq!(tabs.switch_to("branches", &mut doc, &store), Ok(ActiveTab::Branches));
        assert_eq!(doc.element("branch-list").unwrap().child_elements().count(), 5);

        let active: Vec<_> = doc
            .elements_with_class(TAB_BUTTON_CLASS)
            .into_iter()
            .filter(|button| doc.has_class(button, ACTIVE_CLASS))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(doc.attribute(&active[0], "data-tab").as_deref(), Some("branches"));

        let panels = doc.elements_with_class(TAB_PANEL_CLASS);
        let active_panels: Vec<_> = panels.iter().filter(|p| doc.has_class(p, ACTIVE_CLASS)).collect();
        assert_eq!(active_panels, vec!["branches-tab"]);
    }

    #[test]
    fn test_switch_without_list_region_still_switches() {
        let mut doc = demo_panel();
        doc.remove("issue-list").unwrap();
        let store = SampleDataStore::new();
        let mut tabs = TabController::new();

        assert_eq!(tabs.switch_to("issues", &mut doc, &store), Ok(ActiveTab::Issues));
        assert_eq!(tabs.active(), ActiveTab::Issues);
        assert!(doc.has_class("tab-issues", ACTIVE_CLASS));
        assert!(doc.has_class("issues-tab", ACTIVE_CLASS));
    }

    #[test]
    fn test_missing_panel_leaves_state_alone() {
        let mut doc = demo_panel();
        doc.remove("branches-tab").unwrap();
        let store = SampleDataStore::new();
        let mut tabs = TabController::new();

        assert!(tabs.switch_to("branches", &mut doc, &store).is_err());
        assert_eq!(tabs.active(), ActiveTab::Commits);
        assert!(!doc.has_class("tab-branches", ACTIVE_CLASS));
    }
}
