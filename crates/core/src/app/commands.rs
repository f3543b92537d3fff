/// User interactions the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A `.tab-btn` was clicked; the tab comes from its `data-tab`
    ClickTab { id: String },

    /// An in-page anchor (nav link or inline link) was clicked
    ClickLink { id: String },

    /// A `.command-item code` example was clicked; its text is the command
    ClickCommand { id: String },

    /// Run a command in a fresh terminal overlay
    RunCommand { command: String },

    /// The viewport scrolled or resized
    ViewportChanged,
}
