use tracing::{debug, info};

use crate::menu::MenuState;
use crate::navigation::NavigationState;
use crate::scroll::{ScrollSignal, ScrollTracker};
use crate::section::SectionId;
use crate::viewport::Viewport;

/// Discrete user events handled by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Navigate(SectionId),
    ToggleMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSnapshot {
    pub active: SectionId,
    pub menu_open: bool,
    pub offset_y: u32,
}

/// The root view. Owns all transient UI state of the page.
#[derive(Default)]
pub struct PageState {
    navigation: NavigationState,
    menu: MenuState,
    scroll: ScrollTracker,
}

impl PageState {
    pub fn new() -> Self {
        PageState {
            navigation: NavigationState::new(),
            menu: MenuState::new(),
            scroll: ScrollTracker::new(),
        }
    }

    pub fn mount(&mut self, signal: &ScrollSignal) {
        info!("Mount page");
        self.scroll.attach(signal);
    }

    pub fn unmount(&mut self) {
        if self.scroll.is_attached() {
            info!("Unmount page");
        }
        self.scroll.detach();
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll.is_attached()
    }

    pub fn handle(&mut self, event: PageEvent, viewport: &mut impl Viewport) {
        debug!(?event, "Page event");

        match event {
            PageEvent::Navigate(section) => {
                self.navigation
                    .navigate_to(section, &mut self.menu, viewport)
            }
            PageEvent::ToggleMenu => self.menu.toggle(),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            active: self.navigation.active(),
            menu_open: self.menu.is_open(),
            offset_y: self.scroll.offset_y(),
        }
    }
}

impl Drop for PageState {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use proptest::{
        collection, prop_oneof,
        strategy::{Just, Strategy, ValueTree},
        test_runner::{Config, FileFailurePersistence, RngAlgorithm, TestRng, TestRunner},
    };

    use crate::page::{self as sut, PageEvent, PageSnapshot};
    use crate::scroll::{ScrollPosition, ScrollSignal};
    use crate::section::SectionId;
    use crate::viewport::{CommandQueue, ScrollCommand};

    #[test]
    fn initial_snapshot() {
        let page = sut::PageState::new();

        assert_eq!(
            page.snapshot(),
            PageSnapshot {
                active: SectionId::Home,
                menu_open: false,
                offset_y: 0,
            }
        );
    }

    #[test]
    fn click_projects() {
        let signal = ScrollSignal::new();
        let mut page = sut::PageState::new();
        let mut viewport = CommandQueue::new(&SectionId::ALL);
        page.mount(&signal);

        page.handle(PageEvent::Navigate(SectionId::Projects), &mut viewport);

        let snapshot = page.snapshot();
        assert_eq!(snapshot.active, SectionId::Projects);
        assert!(!snapshot.menu_open);
        assert_eq!(
            viewport.take(),
            Some(ScrollCommand::IntoView(SectionId::Projects))
        );
    }

    #[test]
    fn open_menu_then_click_contact() {
        let mut page = sut::PageState::new();
        let mut viewport = CommandQueue::new(&SectionId::ALL);

        page.handle(PageEvent::ToggleMenu, &mut viewport);
        assert!(page.menu().is_open());

        page.handle(PageEvent::Navigate(SectionId::Contact), &mut viewport);

        let snapshot = page.snapshot();
        assert_eq!(snapshot.active, SectionId::Contact);
        assert!(!snapshot.menu_open);
    }

    #[test]
    fn scroll_events_reach_mounted_page_only() {
        let signal = ScrollSignal::new();
        let mut page = sut::PageState::new();

        signal.dispatch(ScrollPosition { offset_y: 10 });
        assert_eq!(page.snapshot().offset_y, 0);

        page.mount(&signal);
        signal.dispatch(ScrollPosition { offset_y: 300 });
        assert_eq!(page.snapshot().offset_y, 300);

        page.unmount();
        signal.dispatch(ScrollPosition { offset_y: 800 });
        assert_eq!(page.snapshot().offset_y, 300);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn unmount_twice() {
        let signal = ScrollSignal::new();
        let mut page = sut::PageState::new();
        page.mount(&signal);

        page.unmount();
        page.unmount();

        assert!(!page.is_mounted());
    }

    #[test]
    fn dropping_mounted_page_releases_listener() {
        let signal = ScrollSignal::new();
        let mut page = sut::PageState::new();
        page.mount(&signal);
        assert_eq!(signal.listener_count(), 1);

        drop(page);

        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn remount_after_unmount() {
        let signal = ScrollSignal::new();
        let mut page = sut::PageState::new();

        page.mount(&signal);
        page.unmount();
        page.mount(&signal);

        assert_eq!(signal.listener_count(), 1);
    }

    #[test]
    fn event_sequences_keep_invariants() {
        let rng = TestRng::from_seed(
            RngAlgorithm::ChaCha,
            &[
                3, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4,
                1, 2, 3, 4,
            ],
        );
        let mut runner = TestRunner::new_with_rng(
            Config {
                failure_persistence: Some(Box::new(FileFailurePersistence::Off)),
                ..Config::default()
            },
            rng,
        );

        let event = prop_oneof![
            Just(PageEvent::ToggleMenu),
            Just(PageEvent::Navigate(SectionId::Home)),
            Just(PageEvent::Navigate(SectionId::About)),
            Just(PageEvent::Navigate(SectionId::Experience)),
            Just(PageEvent::Navigate(SectionId::Projects)),
            Just(PageEvent::Navigate(SectionId::Contact)),
        ];
        let events = collection::vec(event, 0..40);

        for _ in 0..100 {
            let sequence = events.new_tree(&mut runner).unwrap().current();

            let mut page = sut::PageState::new();
            let mut viewport = CommandQueue::new(&SectionId::ALL);
            let mut expected_active = SectionId::Home;
            let mut expected_open = false;

            for event in sequence {
                page.handle(event, &mut viewport);

                match event {
                    PageEvent::ToggleMenu => expected_open = !expected_open,
                    PageEvent::Navigate(section) => {
                        expected_active = section;
                        expected_open = false;

                        let expected_command = match section {
                            SectionId::Home => ScrollCommand::ToOffset(0),
                            other => ScrollCommand::IntoView(other),
                        };
                        assert_eq!(viewport.take(), Some(expected_command));
                    }
                }

                assert_eq!(page.snapshot().active, expected_active);
                assert_eq!(page.snapshot().menu_open, expected_open);
            }
        }
    }
}
