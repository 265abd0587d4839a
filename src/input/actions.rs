//! Viewer action definitions

use crate::book::PageFlipController;

/// Everything the viewer responds to
///
/// Keyboard mappings:
/// - Right / D / Space / PageDown = Next page
/// - Left / A / PageUp = Previous page
/// - O = Open photos (native)
/// - Escape = Quit (native)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextPage,
    PreviousPage,
    OpenPhotos,
    Quit,
}

impl Action {
    /// Whether the action is a page turn (only available once the book is shown)
    pub fn is_navigation(&self) -> bool {
        matches!(self, Action::NextPage | Action::PreviousPage)
    }

    /// Feed a navigation action to the controller. Returns false for
    /// actions the controller doesn't handle.
    pub fn apply(&self, controller: &mut PageFlipController) -> bool {
        match self {
            Action::NextPage => controller.request_forward(),
            Action::PreviousPage => controller.request_backward(),
            Action::OpenPhotos | Action::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Transition;

    #[test]
    fn test_next_opens_cover() {
        let mut c = PageFlipController::default();
        assert!(Action::NextPage.apply(&mut c));
        assert_eq!(c.active(), Some(Transition::FrontCover));
    }

    #[test]
    fn test_non_navigation_leaves_controller_alone() {
        let mut c = PageFlipController::default();
        assert!(!Action::OpenPhotos.apply(&mut c));
        assert!(!Action::Quit.apply(&mut c));
        assert!(c.is_idle());
        assert!(!Action::Quit.is_navigation());
    }
}
