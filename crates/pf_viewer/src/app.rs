use std::path::Path;

use eframe::egui;
use pf_content::Portfolio;
use pf_navigation::page::{PageEvent, PageState};
use pf_navigation::scroll::{ScrollPosition, ScrollSignal};
use pf_navigation::section::SectionId;
use pf_navigation::viewport::{CommandQueue, Viewport};
use tracing::{error, info};

use crate::command_sender::command_channel;
use crate::command_sender::{CommandReceiver, CommandSender, UICommand};
use crate::layout::LayoutMode;

pub struct App {
    pub portfolio: Portfolio,

    // Transient UI state of the page
    pub page: PageState,
    scroll_signal: ScrollSignal,
    pub viewport: CommandQueue,

    // Last content loading problem, shown in the top bar
    pub content_error: Option<String>,

    // Commands that will be run at the end of the frame
    pub command_sender: CommandSender,
    command_receiver: CommandReceiver,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        let scroll_signal = ScrollSignal::new();
        let mut page = PageState::new();
        page.mount(&scroll_signal);

        let viewport = CommandQueue::new(&portfolio.anchors());
        let (command_sender, command_receiver) = command_channel();

        Self {
            portfolio,
            page,
            scroll_signal,
            viewport,
            content_error: None,
            command_sender,
            command_receiver,
        }
    }

    /// Replace the page content. The page starts over at the top.
    pub fn set_portfolio(&mut self, portfolio: Portfolio) {
        self.viewport.set_anchors(&portfolio.anchors());
        self.portfolio = portfolio;
        self.content_error = None;
        self.page
            .handle(PageEvent::Navigate(SectionId::Home), &mut self.viewport);
    }

    pub fn load_content(&mut self, path: &Path) -> pf_content::Result<()> {
        let portfolio = Portfolio::load(path)?;
        self.set_portfolio(portfolio);
        Ok(())
    }

    /// Feed the offset the scroll area laid out this frame to the page.
    pub fn report_scroll(&mut self, offset_y: f32) {
        let position = ScrollPosition::from_host(offset_y);

        if position.offset_y != self.viewport.scroll_offset() {
            self.viewport.set_offset(position.offset_y);
            self.scroll_signal.dispatch(position);
        }
    }

    fn open_content(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Portfolio content", &["json"])
            .pick_file()
        else {
            return;
        };

        if let Err(e) = self.load_content(&path) {
            error!(path = %path.display(), "Failed to load content: {}", e);
            self.content_error = Some(format!("Could not load {}: {}", path.display(), e));
        }
    }

    fn run_ui_command(&mut self, command: UICommand) {
        info!(?command, "Run ui command");

        match command {
            UICommand::Navigate(section) => {
                self.page
                    .handle(PageEvent::Navigate(section), &mut self.viewport);
            }
            UICommand::ToggleMenu => {
                self.page.handle(PageEvent::ToggleMenu, &mut self.viewport);
            }
            UICommand::OpenContent => self.open_content(),
        }
    }

    /// Returns true when any command ran.
    pub fn run_pending_ui_commands(&mut self) -> bool {
        let mut ran = false;
        while let Some(cmd) = self.command_receiver.receive_ui() {
            self.run_ui_command(cmd);
            ran = true;
        }
        ran
    }

    /// The top-level ui
    fn ui(&mut self, ctx: &egui::Context) {
        let layout = LayoutMode::from_width(ctx.screen_rect().width());

        crate::ui::top_panel(ctx, self, layout);

        if layout.is_compact() && self.page.menu().is_open() {
            crate::ui::menu_drawer(ctx, self);
        }

        crate::ui::page(ctx, self, layout);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Portfolio::builtin())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);

        if self.run_pending_ui_commands() {
            // Apply queued scrolling on the next frame
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use pf_content::Portfolio;
    use pf_navigation::section::SectionId;
    use pf_navigation::viewport::ScrollCommand;

    use crate::app as sut;
    use crate::command_sender::UICommand;

    #[test]
    fn starts_mounted_at_home() {
        let app = sut::App::default();
        let snapshot = app.page.snapshot();

        assert!(app.page.is_mounted());
        assert_eq!(snapshot.active, SectionId::Home);
        assert!(!snapshot.menu_open);
        assert_eq!(snapshot.offset_y, 0);
    }

    #[test]
    fn navigate_command_queues_scroll() {
        let mut app = sut::App::default();

        app.command_sender
            .send_ui(UICommand::Navigate(SectionId::Projects));
        assert!(app.run_pending_ui_commands());

        assert_eq!(app.page.snapshot().active, SectionId::Projects);
        assert_eq!(
            app.viewport.take(),
            Some(ScrollCommand::IntoView(SectionId::Projects))
        );
    }

    #[test]
    fn drawer_closes_after_selection() {
        let mut app = sut::App::default();

        app.command_sender.send_ui(UICommand::ToggleMenu);
        app.run_pending_ui_commands();
        assert!(app.page.menu().is_open());

        app.command_sender
            .send_ui(UICommand::Navigate(SectionId::Contact));
        app.run_pending_ui_commands();

        assert!(!app.page.menu().is_open());
        assert_eq!(app.page.snapshot().active, SectionId::Contact);
    }

    #[test]
    fn no_commands_no_work() {
        let mut app = sut::App::default();
        assert!(!app.run_pending_ui_commands());
    }

    #[test]
    fn scroll_reports_reach_page() {
        let mut app = sut::App::default();

        app.report_scroll(420.4);

        assert_eq!(app.page.snapshot().offset_y, 420);
    }

    #[test]
    fn replacing_content_updates_anchors() {
        let mut app = sut::App::default();
        let mut portfolio = Portfolio::builtin();
        portfolio.projects.entries.clear();

        app.set_portfolio(portfolio);
        app.viewport.take();
        app.command_sender
            .send_ui(UICommand::Navigate(SectionId::Projects));
        app.run_pending_ui_commands();

        assert_eq!(app.page.snapshot().active, SectionId::Projects);
        assert_eq!(app.viewport.pending(), None);
    }

    #[test]
    fn load_content_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut portfolio = Portfolio::builtin();
        portfolio.profile.name = "Someone Else".to_string();
        std::fs::write(&path, portfolio.to_json().unwrap()).unwrap();

        let mut app = sut::App::default();
        app.load_content(&path).unwrap();

        assert_eq!(app.portfolio.profile.name, "Someone Else");
    }
}
