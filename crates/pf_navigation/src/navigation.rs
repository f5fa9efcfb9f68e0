use tracing::debug;

use crate::menu::MenuState;
use crate::section::SectionId;
use crate::viewport::Viewport;

/// Which section is highlighted in the navigation bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    active: SectionId,
}

impl NavigationState {
    pub fn new() -> Self {
        NavigationState {
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    /// Highlight `section`, close the drawer and scroll to the section.
    ///
    /// `Home` scrolls to the very top of the page. Other sections are
    /// scrolled into view when the host renders an element for them, and
    /// the scroll is skipped otherwise.
    pub fn navigate_to(
        &mut self,
        section: SectionId,
        menu: &mut MenuState,
        viewport: &mut impl Viewport,
    ) {
        debug!(from = %self.active, to = %section, "Navigate");

        self.active = section;
        menu.close();

        match section {
            SectionId::Home => viewport.scroll_to(0),
            _ => match viewport.find_element(section.as_str()) {
                Some(element) => viewport.scroll_into_view(element),
                None => debug!(%section, "No element for section, scroll skipped"),
            },
        }
    }
}
