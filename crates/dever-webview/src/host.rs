//! Host window state as seen by the view manager.

use dever_common::Rect;

/// What to do when the user asks to close the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Hide the window; slots keep running.
    Hide,
    /// Tear everything down.
    Destroy,
}

impl CloseAction {
    /// A close only hides the window while it is visible, no force-quit is
    /// pending and the host is configured to hide on close.
    pub fn decide(force_quit: bool, visible: bool, hide_on_close: bool) -> Self {
        if hide_on_close && visible && !force_quit {
            Self::Hide
        } else {
            Self::Destroy
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostState {
    /// Content area of the host window in logical pixels.
    pub content: Rect,
    pub visible: bool,
    pub force_quit: bool,
    destroyed: bool,
}

impl HostState {
    pub fn new(content: Rect) -> Self {
        Self {
            content,
            visible: false,
            force_quit: false,
            destroyed: false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_hides_visible_window() {
        assert_eq!(CloseAction::decide(false, true, true), CloseAction::Hide);
    }

    #[test]
    fn force_quit_destroys() {
        assert_eq!(CloseAction::decide(true, true, true), CloseAction::Destroy);
    }

    #[test]
    fn invisible_window_destroys() {
        assert_eq!(CloseAction::decide(false, false, true), CloseAction::Destroy);
    }

    #[test]
    fn hide_on_close_disabled_destroys() {
        assert_eq!(CloseAction::decide(false, true, false), CloseAction::Destroy);
    }
}
