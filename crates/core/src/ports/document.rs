use crate::error::Result;
use crate::render::Element;

/// Vertical extent of an element in page coordinates (rows or pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub top: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// The visible window onto the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_top: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump immediately
    #[default]
    Auto,
    /// Animate towards the target
    Smooth,
}

/// Port for the presentation surface the page components drive
///
/// Elements are addressed by id. Elements without one get a handle from the
/// document, returned by [`Document::elements_with_class`] and accepted
/// everywhere an id is. Operations on an id that is not in the document return
/// [`crate::CoreError::ElementMissing`]; callers treat that as a skipped step,
/// never as a failure.
pub trait Document {
    fn contains(&self, id: &str) -> bool;

    /// Ids (or handles) of every element carrying `class`, in document order
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    fn has_class(&self, id: &str, class: &str) -> bool;

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> Result<()>;

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Drop every child of `id` and insert `children` in their place
    fn replace_children(&mut self, id: &str, children: Vec<Element>) -> Result<()>;

    /// Replace the content of `id` with plain text
    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;

    fn append_text(&mut self, id: &str, text: &str) -> Result<()>;

    /// Append trusted markup after the current content of `id`
    fn append_html(&mut self, id: &str, html: &str) -> Result<()>;

    fn text(&self, id: &str) -> Option<String>;

    /// Insert a top-level element (an overlay) at the end of the body
    fn append_to_body(&mut self, element: Element) -> Result<()>;

    fn remove(&mut self, id: &str) -> Result<()>;

    fn bounds(&self, id: &str) -> Option<Bounds>;

    fn viewport(&self) -> Viewport;

    /// Scroll so the top of `id` lines up with the top of the viewport
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> Result<()>;
}
