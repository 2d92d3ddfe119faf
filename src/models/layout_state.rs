/// A popup region of the page shell that closes on outside clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// The off-canvas sidebar on narrow screens.
    Sidebar,
    /// Workspace switcher menu inside the sidebar.
    Workspaces,
    /// Avatar dropdown in the header.
    UserMenu,
}

impl Overlay {
    pub fn all() -> &'static [Overlay] {
        &[Overlay::Sidebar, Overlay::Workspaces, Overlay::UserMenu]
    }

    /// Region nesting: the workspace menu is drawn inside the sidebar,
    /// so a click on it is not outside the sidebar.
    pub fn contains(&self, target: Overlay) -> bool {
        *self == target || (*self == Overlay::Sidebar && target == Overlay::Workspaces)
    }
}

/// UI flags of the page shell. Owned by the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub sidebar_collapsed: bool,
    pub workspaces_open: bool,
    pub user_menu_open: bool,
    pub dark_mode: bool,
}

impl LayoutState {
    pub fn new(dark_mode: bool) -> Self {
        LayoutState {
            dark_mode,
            ..LayoutState::default()
        }
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Sidebar => self.sidebar_open,
            Overlay::Workspaces => self.workspaces_open,
            Overlay::UserMenu => self.user_menu_open,
        }
    }

    fn set_open(&mut self, overlay: Overlay, open: bool) {
        match overlay {
            Overlay::Sidebar => self.sidebar_open = open,
            Overlay::Workspaces => self.workspaces_open = open,
            Overlay::UserMenu => self.user_menu_open = open,
        }
    }

    /// Open `overlay`. The click that opens it lands inside it, so every
    /// overlay not containing it closes first.
    pub fn open(&mut self, overlay: Overlay) {
        self.handle_pointer_down(Some(overlay));
        self.set_open(overlay, true);
    }

    pub fn close(&mut self, overlay: Overlay) {
        self.set_open(overlay, false);
    }

    pub fn toggle(&mut self, overlay: Overlay) {
        if self.is_open(overlay) {
            self.close(overlay);
        } else {
            self.open(overlay);
        }
    }

    pub fn toggle_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Close every open overlay whose region does not contain `target`.
    /// `None` is a pointer press outside all overlays.
    pub fn handle_pointer_down(&mut self, target: Option<Overlay>) {
        for overlay in Overlay::all() {
            let inside = target.map(|t| overlay.contains(t)).unwrap_or(false);
            if !inside && self.is_open(*overlay) {
                tracing::debug!(?overlay, "closing overlay on outside click");
                self.close(*overlay);
            }
        }
    }

    /// The innermost open overlay, if any.
    pub fn open_overlay(&self) -> Option<Overlay> {
        [Overlay::UserMenu, Overlay::Workspaces, Overlay::Sidebar]
            .into_iter()
            .find(|o| self.is_open(*o))
    }

    /// Class list for the root `<html>` element.
    pub fn html_class(&self) -> &'static str {
        if self.dark_mode {
            "dark"
        } else {
            ""
        }
    }
}
