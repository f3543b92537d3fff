use tracing::debug;

use super::tabs::ACTIVE_CLASS;
use crate::error::{CoreError, Result};
use crate::ports::{Document, ScrollBehavior};

pub const NAV_LINK_CLASS: &str = "nav-link";

/// What a link click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    /// Section the link points at
    pub target: String,
    /// False when the target section does not exist
    pub scrolled: bool,
}

/// In-page link handling: smooth scroll plus a single active nav link
#[derive(Debug, Default)]
pub struct NavigationController;

impl NavigationController {
    pub fn new() -> Self {
        Self
    }

    /// Handle a click on the anchor `link_id`.
    ///
    /// A `.nav-link` always takes the highlight, even when its href names no
    /// section. Any other anchor must be an in-page `#id` link.
    pub fn on_link_click(&self, link_id: &str, doc: &mut dyn Document) -> Result<LinkOutcome> {
        let href = doc
            .attribute(link_id, "href")
            .ok_or_else(|| CoreError::missing(link_id))?;
        let fragment = href.strip_prefix('#');
        let is_nav = doc.has_class(link_id, NAV_LINK_CLASS);
        if fragment.is_none() && !is_nav {
            return Err(CoreError::InvalidLink { href });
        }

        let target = fragment.unwrap_or_default().to_string();
        let scrolled = !target.is_empty() && self.scroll_to_section(&target, doc);

        if is_nav {
            for id in doc.elements_with_class(NAV_LINK_CLASS) {
                doc.set_class(&id, ACTIVE_CLASS, false)?;
            }
            doc.set_class(link_id, ACTIVE_CLASS, true)?;
        }

        Ok(LinkOutcome { target, scrolled })
    }

    /// Smooth-scroll to `section_id`; a missing section is skipped
    pub fn scroll_to_section(&self, section_id: &str, doc: &mut dyn Document) -> bool {
        match doc.scroll_into_view(section_id, ScrollBehavior::Smooth) {
            Ok(()) => true,
            Err(err) => {
                debug!("Scroll skipped: {}", err);
                false
            }
        }
    }

    /// The nav link currently flagged active
    pub fn active_link(&self, doc: &dyn Document) -> Option<String> {
        doc.elements_with_class(NAV_LINK_CLASS)
            .into_iter()
            .find(|id| doc.has_class(id, ACTIVE_CLASS))
    }
}
