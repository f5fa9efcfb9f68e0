/// Narrower windows get the compact layout with the navigation drawer.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

impl LayoutMode {
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_compact(&self) -> bool {
        *self == LayoutMode::Compact
    }

    /// Card columns for a grid that prefers `preferred` columns when wide.
    pub fn columns(&self, preferred: usize) -> usize {
        match self {
            LayoutMode::Compact => 1,
            LayoutMode::Wide => preferred.max(1),
        }
    }
}

/// Vertical shift of a decorative background element for a scroll offset.
pub fn parallax(offset_y: u32, factor: f32, max: f32) -> f32 {
    (offset_y as f32 * factor).min(max)
}

/// Opacity of the hero's scroll indicator; fades out over the first 300px.
pub fn indicator_alpha(offset_y: u32) -> f32 {
    (1.0 - offset_y as f32 / 300.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use crate::layout::{self as sut, LayoutMode};

    #[test]
    fn breakpoint_selects_layout() {
        assert_eq!(LayoutMode::from_width(375.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(767.9), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(768.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(1800.0), LayoutMode::Wide);
    }

    #[test]
    fn compact_layout_uses_single_column() {
        assert_eq!(LayoutMode::Compact.columns(3), 1);
        assert_eq!(LayoutMode::Wide.columns(3), 3);
        assert_eq!(LayoutMode::Wide.columns(0), 1);
    }

    #[test]
    fn parallax_is_capped() {
        assert_eq!(sut::parallax(0, 0.3, 120.0), 0.0);
        assert_eq!(sut::parallax(100, 0.5, 120.0), 50.0);
        assert_eq!(sut::parallax(10_000, 0.5, 120.0), 120.0);
    }

    #[test]
    fn indicator_fades_out() {
        assert_eq!(sut::indicator_alpha(0), 1.0);
        assert_eq!(sut::indicator_alpha(150), 0.5);
        assert_eq!(sut::indicator_alpha(900), 0.0);
    }
}
