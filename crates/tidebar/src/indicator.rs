//! The selection indicator.
//!
//! The indicator is the decoration that tracks the selected segment: a
//! thin line pinned to one edge plus a box filling the rest of the
//! frame. The control positions and sizes the indicator; this module
//! only splits the assigned frame into the two bands.

use tidebar_core::{Color, EdgeInsets, Rect};

use crate::base::WidgetBase;

/// Which edge the indicator line is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePosition {
    /// Line along the top edge, box below it.
    Top,
    /// Line along the bottom edge, box above it.
    #[default]
    Bottom,
}

/// The default line and box color, the usual tint blue.
const TINT: Color = Color::new(0.0, 0.478, 1.0, 1.0);

/// The decoration tracking the selected segment.
pub struct Indicator {
    base: WidgetBase,
    content_edge_insets: EdgeInsets,
    line_position: LinePosition,
    line_height: f32,
    line_color: Color,
    box_color: Color,
    box_opacity: f32,

    /// Computed by `layout()`, in indicator-local coordinates.
    line_rect: Rect,
    box_rect: Rect,
}

impl Indicator {
    /// Create an indicator with a 1px bottom line and an invisible box.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            content_edge_insets: EdgeInsets::ZERO,
            line_position: LinePosition::default(),
            line_height: 1.0,
            line_color: TINT,
            box_color: TINT,
            box_opacity: 0.0,
            line_rect: Rect::ZERO,
            box_rect: Rect::ZERO,
        }
    }

    /// Access the widget base.
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    /// Mutable access to the widget base.
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Which edge the line is pinned to.
    pub fn line_position(&self) -> LinePosition {
        self.line_position
    }

    /// Pin the line to the top or bottom edge.
    pub fn set_line_position(&mut self, position: LinePosition) {
        self.line_position = position;
        self.base.update();
    }

    /// The line thickness.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Set the line thickness.
    pub fn set_line_height(&mut self, height: f32) {
        self.line_height = height.max(0.0);
        self.base.update();
    }

    /// The line color.
    pub fn line_color(&self) -> Color {
        self.line_color
    }

    /// Set the line color.
    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
        self.base.update();
    }

    /// The box fill color.
    pub fn box_color(&self) -> Color {
        self.box_color
    }

    /// Set the box fill color.
    pub fn set_box_color(&mut self, color: Color) {
        self.box_color = color;
        self.base.update();
    }

    /// The box opacity, 0.0 by default.
    pub fn box_opacity(&self) -> f32 {
        self.box_opacity
    }

    /// Set the box opacity.
    pub fn set_box_opacity(&mut self, opacity: f32) {
        self.box_opacity = opacity.clamp(0.0, 1.0);
        self.base.update();
    }

    /// Insets shrinking the decorated area inside the assigned frame.
    pub fn content_edge_insets(&self) -> EdgeInsets {
        self.content_edge_insets
    }

    /// Set the insets shrinking the decorated area.
    pub fn set_content_edge_insets(&mut self, insets: EdgeInsets) {
        self.content_edge_insets = insets;
        self.base.update();
    }

    /// The line band computed by the last `layout()`.
    pub fn line_rect(&self) -> Rect {
        self.line_rect
    }

    /// The box band computed by the last `layout()`.
    pub fn box_rect(&self) -> Rect {
        self.box_rect
    }

    /// Split the current frame into line and box bands.
    pub fn layout(&mut self) {
        let frame = self.base.rect().inset_by(self.content_edge_insets);
        let box_height = (frame.height() - self.line_height).max(0.0);

        match self.line_position {
            LinePosition::Top => {
                self.line_rect =
                    Rect::new(frame.left(), frame.top(), frame.width(), self.line_height);
                self.box_rect = Rect::new(
                    frame.left(),
                    frame.top() + self.line_height,
                    frame.width(),
                    box_height,
                );
            }
            LinePosition::Bottom => {
                self.box_rect = Rect::new(frame.left(), frame.top(), frame.width(), box_height);
                self.line_rect = Rect::new(
                    frame.left(),
                    frame.bottom() - self.line_height,
                    frame.width(),
                    self.line_height,
                );
            }
        }
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_line_sits_on_the_bottom_edge() {
        let mut indicator = Indicator::new();
        indicator.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        indicator.set_line_height(3.0);
        indicator.layout();

        assert_eq!(indicator.line_rect(), Rect::new(0.0, 37.0, 100.0, 3.0));
        assert_eq!(indicator.box_rect(), Rect::new(0.0, 0.0, 100.0, 37.0));
    }

    #[test]
    fn top_line_sits_on_the_top_edge() {
        let mut indicator = Indicator::new();
        indicator.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        indicator.set_line_position(LinePosition::Top);
        indicator.set_line_height(2.0);
        indicator.layout();

        assert_eq!(indicator.line_rect(), Rect::new(0.0, 0.0, 100.0, 2.0));
        assert_eq!(indicator.box_rect(), Rect::new(0.0, 2.0, 100.0, 38.0));
    }

    #[test]
    fn insets_shrink_both_bands() {
        let mut indicator = Indicator::new();
        indicator.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        indicator.set_content_edge_insets(EdgeInsets::new(4.0, 10.0, 4.0, 10.0));
        indicator.layout();

        assert_eq!(indicator.line_rect(), Rect::new(10.0, 35.0, 80.0, 1.0));
        assert_eq!(indicator.box_rect(), Rect::new(10.0, 4.0, 80.0, 31.0));
    }

    #[test]
    fn line_taller_than_frame_clamps_box() {
        let mut indicator = Indicator::new();
        indicator.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 2.0));
        indicator.set_line_height(5.0);
        indicator.layout();

        assert_eq!(indicator.box_rect().height(), 0.0);
    }

    #[test]
    fn defaults_match_the_underline_style() {
        let indicator = Indicator::new();
        assert_eq!(indicator.line_position(), LinePosition::Bottom);
        assert_eq!(indicator.line_height(), 1.0);
        assert_eq!(indicator.box_opacity(), 0.0);
    }
}
