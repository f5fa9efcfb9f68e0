use tracing::debug;

use crate::section::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    /// Scroll the viewport to an absolute vertical offset
    ToOffset(u32),
    /// Align the top edge of the section's element with the top of the viewport
    IntoView(SectionId),
}

/// Capabilities the rendering host provides to the navigation logic.
///
/// Scrolling is fire-and-forget: the host animates it and nothing observes
/// or awaits completion.
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> u32;

    /// Element lookup by identifier.
    fn find_element(&self, id: &str) -> Option<SectionId>;

    fn scroll_to(&mut self, offset: u32);

    fn scroll_into_view(&mut self, element: SectionId);
}

/// A viewport for immediate-mode hosts. Commands issued during one frame are
/// held here and applied by the host when it lays out the next frame.
#[derive(Debug, Default)]
pub struct CommandQueue {
    anchors: Vec<SectionId>,
    offset: u32,
    pending: Option<ScrollCommand>,
}

impl CommandQueue {
    pub fn new(anchors: &[SectionId]) -> Self {
        CommandQueue {
            anchors: anchors.to_vec(),
            offset: 0,
            pending: None,
        }
    }

    /// Replace the set of rendered section elements.
    pub fn set_anchors(&mut self, anchors: &[SectionId]) {
        self.anchors = anchors.to_vec();
    }

    /// Record the offset the host laid out in the last frame.
    pub fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    pub fn pending(&self) -> Option<ScrollCommand> {
        self.pending
    }

    pub fn take(&mut self) -> Option<ScrollCommand> {
        self.pending.take()
    }

    fn push(&mut self, command: ScrollCommand) {
        // A newer request supersedes one the host has not applied yet
        if let Some(previous) = self.pending.replace(command) {
            debug!(?previous, ?command, "Scroll command superseded");
        }
    }
}

impl Viewport for CommandQueue {
    fn scroll_offset(&self) -> u32 {
        self.offset
    }

    fn find_element(&self, id: &str) -> Option<SectionId> {
        self.anchors
            .iter()
            .find(|anchor| anchor.as_str() == id)
            .copied()
    }

    fn scroll_to(&mut self, offset: u32) {
        self.push(ScrollCommand::ToOffset(offset));
    }

    fn scroll_into_view(&mut self, element: SectionId) {
        self.push(ScrollCommand::IntoView(element));
    }
}
