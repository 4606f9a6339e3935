//! A single tappable segment.
//!
//! A segment arranges a title and an image inside its assigned frame.
//! Both are optional and both can vary per control state. The segment
//! does not render anything itself; it computes the rectangles and
//! resolved styling the host paints with.

use std::sync::atomic::{AtomicU64, Ordering};

use tidebar_core::{Color, EdgeInsets, Font, Rect, Size, measure_text};

use crate::base::WidgetBase;

/// The interaction states a segment's styling can vary over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlState {
    /// At rest.
    #[default]
    Normal,
    /// Pressed but not yet released.
    Highlighted,
    /// The current selection.
    Selected,
    /// Not accepting input.
    Disabled,
}

/// Per-state storage with fallback to the normal state.
///
/// A lookup for a state without its own value resolves to the normal
/// value, so callers configure the normal state once and override only
/// the states that differ.
#[derive(Debug, Clone, Default)]
pub struct StateMap<T> {
    normal: Option<T>,
    highlighted: Option<T>,
    selected: Option<T>,
    disabled: Option<T>,
}

impl<T> StateMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            normal: None,
            highlighted: None,
            selected: None,
            disabled: None,
        }
    }

    /// Set or clear the value for a state.
    pub fn set(&mut self, state: ControlState, value: Option<T>) {
        *self.slot_mut(state) = value;
    }

    /// The value stored for exactly this state, without fallback.
    pub fn get(&self, state: ControlState) -> Option<&T> {
        self.slot(state).as_ref()
    }

    /// The value for this state, falling back to the normal value.
    pub fn resolve(&self, state: ControlState) -> Option<&T> {
        self.slot(state).as_ref().or(self.normal.as_ref())
    }

    /// Check if no state has a value.
    pub fn is_empty(&self) -> bool {
        self.normal.is_none()
            && self.highlighted.is_none()
            && self.selected.is_none()
            && self.disabled.is_none()
    }

    fn slot(&self, state: ControlState) -> &Option<T> {
        match state {
            ControlState::Normal => &self.normal,
            ControlState::Highlighted => &self.highlighted,
            ControlState::Selected => &self.selected,
            ControlState::Disabled => &self.disabled,
        }
    }

    fn slot_mut(&mut self, state: ControlState) -> &mut Option<T> {
        match state {
            ControlState::Normal => &mut self.normal,
            ControlState::Highlighted => &mut self.highlighted,
            ControlState::Selected => &mut self.selected,
            ControlState::Disabled => &mut self.disabled,
        }
    }
}

/// Where the image sits relative to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePosition {
    /// Image above the title.
    #[default]
    Top,
    /// Image left of the title.
    Left,
    /// Image below the title.
    Bottom,
    /// Image right of the title.
    Right,
}

impl ImagePosition {
    /// Whether the image and title stack vertically.
    pub fn is_vertical(&self) -> bool {
        matches!(self, ImagePosition::Top | ImagePosition::Bottom)
    }
}

/// A title with optional styling overrides.
///
/// Overrides left as `None` fall back to the segment's font and the
/// per-state title color.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    /// The text to display.
    pub text: String,
    /// Font override for this title.
    pub font: Option<Font>,
    /// Color override for this title.
    pub color: Option<Color>,
}

impl StyledText {
    /// Create a styled title with no overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            color: None,
        }
    }

    /// Override the font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Override the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// An image placeholder: the size layout works with, plus an optional
/// source name the host resolves to an actual asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Display size in logical pixels.
    pub size: Size,
    /// Host-interpreted source name.
    pub source: Option<String>,
}

impl Image {
    /// An image known only by its display size.
    pub fn with_size(size: Size) -> Self {
        Self { size, source: None }
    }

    /// An image identified by a source name.
    pub fn named(source: impl Into<String>, size: Size) -> Self {
        Self {
            size,
            source: Some(source.into()),
        }
    }
}

/// Stable identity for a segment, independent of its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(u64);

static NEXT_SEGMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Stacking axis for the image/title pair.
#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// A single segment of a segmented control.
///
/// Configuration setters return `&mut Self` so a freshly appended
/// segment can be configured in a chain:
///
/// ```ignore
/// control
///     .append_title("Rooms")
///     .set_image(Image::named("rooms", Size::new(24.0, 24.0)))
///     .set_image_position(ImagePosition::Top)
///     .set_padding(4.0);
/// ```
pub struct Segment {
    base: WidgetBase,
    id: SegmentId,

    title: StateMap<String>,
    styled_title: StateMap<StyledText>,
    title_color: StateMap<Color>,
    image: StateMap<Image>,
    background_image: StateMap<Image>,

    font: Font,
    image_position: ImagePosition,
    /// Gap between image and title when both are present.
    padding: f32,
    /// Explicit width override; 0 means use the intrinsic width.
    explicit_width: f32,

    content_edge_insets: EdgeInsets,
    title_edge_insets: EdgeInsets,
    image_edge_insets: EdgeInsets,

    selected: bool,
    highlighted: bool,

    /// Computed by `layout()`, in segment-local coordinates.
    image_rect: Rect,
    title_rect: Rect,
}

impl Segment {
    /// Create an empty segment.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            id: SegmentId(NEXT_SEGMENT_ID.fetch_add(1, Ordering::Relaxed)),
            title: StateMap::new(),
            styled_title: StateMap::new(),
            title_color: StateMap::new(),
            image: StateMap::new(),
            background_image: StateMap::new(),
            font: Font::system(),
            image_position: ImagePosition::default(),
            padding: 8.0,
            explicit_width: 0.0,
            content_edge_insets: EdgeInsets::ZERO,
            title_edge_insets: EdgeInsets::ZERO,
            image_edge_insets: EdgeInsets::ZERO,
            selected: false,
            highlighted: false,
            image_rect: Rect::ZERO,
            title_rect: Rect::ZERO,
        }
    }

    /// This segment's stable identity.
    #[inline]
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Access the widget base.
    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    /// Mutable access to the widget base.
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The state styling currently resolves against.
    pub fn state(&self) -> ControlState {
        if !self.base.is_enabled() {
            ControlState::Disabled
        } else if self.selected {
            ControlState::Selected
        } else if self.highlighted {
            ControlState::Highlighted
        } else {
            ControlState::Normal
        }
    }

    /// Check if this segment is the current selection.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Mark or unmark this segment as the current selection.
    pub fn set_selected(&mut self, selected: bool) -> &mut Self {
        if self.selected != selected {
            self.selected = selected;
            self.base.update();
        }
        self
    }

    /// Check if this segment is pressed.
    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Mark or unmark this segment as pressed.
    pub fn set_highlighted(&mut self, highlighted: bool) -> &mut Self {
        if self.highlighted != highlighted {
            self.highlighted = highlighted;
            self.base.update();
        }
        self
    }

    /// Check if this segment accepts input.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Enable or disable this segment.
    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.base.set_enabled(enabled);
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Set the title for the normal state.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.set_title_for(ControlState::Normal, Some(title.into()))
    }

    /// Set or clear the title for a specific state.
    pub fn set_title_for(&mut self, state: ControlState, title: Option<String>) -> &mut Self {
        self.title.set(state, title);
        self.base.update();
        self
    }

    /// The title for a state, falling back to the normal title.
    pub fn title(&self, state: ControlState) -> Option<&str> {
        self.title.resolve(state).map(String::as_str)
    }

    /// Set the styled title for the normal state.
    ///
    /// A styled title takes precedence over the plain title.
    pub fn set_styled_title(&mut self, title: StyledText) -> &mut Self {
        self.set_styled_title_for(ControlState::Normal, Some(title))
    }

    /// Set or clear the styled title for a specific state.
    pub fn set_styled_title_for(
        &mut self,
        state: ControlState,
        title: Option<StyledText>,
    ) -> &mut Self {
        self.styled_title.set(state, title);
        self.base.update();
        self
    }

    /// The styled title for a state, falling back to the normal one.
    pub fn styled_title(&self, state: ControlState) -> Option<&StyledText> {
        self.styled_title.resolve(state)
    }

    /// Set the title color for the normal state.
    pub fn set_title_color(&mut self, color: Color) -> &mut Self {
        self.set_title_color_for(ControlState::Normal, Some(color))
    }

    /// Set or clear the title color for a specific state.
    pub fn set_title_color_for(&mut self, state: ControlState, color: Option<Color>) -> &mut Self {
        self.title_color.set(state, color);
        self.base.update();
        self
    }

    /// The title color for a state, falling back to the normal color.
    pub fn title_color(&self, state: ControlState) -> Option<Color> {
        self.title_color.resolve(state).copied()
    }

    /// Set the image for the normal state.
    pub fn set_image(&mut self, image: Image) -> &mut Self {
        self.set_image_for(ControlState::Normal, Some(image))
    }

    /// Set or clear the image for a specific state.
    pub fn set_image_for(&mut self, state: ControlState, image: Option<Image>) -> &mut Self {
        self.image.set(state, image);
        self.base.update();
        self
    }

    /// The image for a state, falling back to the normal image.
    pub fn image(&self, state: ControlState) -> Option<&Image> {
        self.image.resolve(state)
    }

    /// Set the background image for the normal state.
    pub fn set_background_image(&mut self, image: Image) -> &mut Self {
        self.set_background_image_for(ControlState::Normal, Some(image))
    }

    /// Set or clear the background image for a specific state.
    pub fn set_background_image_for(
        &mut self,
        state: ControlState,
        image: Option<Image>,
    ) -> &mut Self {
        self.background_image.set(state, image);
        self.base.update();
        self
    }

    /// The background image for a state, falling back to normal.
    pub fn background_image(&self, state: ControlState) -> Option<&Image> {
        self.background_image.resolve(state)
    }

    /// Set the title font.
    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.font = font;
        self.base.update();
        self
    }

    /// The title font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    // =========================================================================
    // Layout Configuration
    // =========================================================================

    /// Set where the image sits relative to the title.
    pub fn set_image_position(&mut self, position: ImagePosition) -> &mut Self {
        self.image_position = position;
        self.base.update();
        self
    }

    /// Where the image sits relative to the title.
    pub fn image_position(&self) -> ImagePosition {
        self.image_position
    }

    /// Set the gap between image and title.
    pub fn set_padding(&mut self, padding: f32) -> &mut Self {
        self.padding = padding;
        self.base.update();
        self
    }

    /// The gap between image and title.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Force a fixed width. A value of zero (or less) restores the
    /// intrinsic width.
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.explicit_width = width.max(0.0);
        self.base.update();
        self
    }

    /// Set insets applied to the whole segment content area.
    pub fn set_content_edge_insets(&mut self, insets: EdgeInsets) -> &mut Self {
        self.content_edge_insets = insets;
        self.base.update();
        self
    }

    /// Insets applied to the whole segment content area.
    pub fn content_edge_insets(&self) -> EdgeInsets {
        self.content_edge_insets
    }

    /// Set insets applied around the title.
    pub fn set_title_edge_insets(&mut self, insets: EdgeInsets) -> &mut Self {
        self.title_edge_insets = insets;
        self.base.update();
        self
    }

    /// Set insets applied around the image.
    pub fn set_image_edge_insets(&mut self, insets: EdgeInsets) -> &mut Self {
        self.image_edge_insets = insets;
        self.base.update();
        self
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// The effective width: explicit override if set, else intrinsic.
    pub fn width(&self) -> f32 {
        if self.explicit_width > 0.0 {
            self.explicit_width
        } else {
            self.intrinsic_size().width
        }
    }

    /// The measured size of the resolved title, zero when absent.
    pub fn title_size(&self) -> Size {
        let state = self.state();
        if let Some(styled) = self.styled_title.resolve(state) {
            let font = styled.font.as_ref().unwrap_or(&self.font);
            measure_text(&styled.text, font)
        } else if let Some(title) = self.title.resolve(state) {
            measure_text(title, &self.font)
        } else {
            Size::ZERO
        }
    }

    /// The size of the resolved image, zero when absent.
    pub fn image_size(&self) -> Size {
        self.image
            .resolve(self.state())
            .map(|image| image.size)
            .unwrap_or(Size::ZERO)
    }

    /// The size this segment needs to show its content untruncated.
    ///
    /// Zero when the segment has neither title nor image. Otherwise the
    /// title and image extents stack along the image-position axis,
    /// with `padding` between them only when both are present,
    /// per-element insets included, and the content insets are added
    /// around the result.
    pub fn intrinsic_size(&self) -> Size {
        let title = self.title_size();
        let image = self.image_size();
        if title == Size::ZERO && image == Size::ZERO {
            return Size::ZERO;
        }

        let ti = self.title_edge_insets;
        let ii = self.image_edge_insets;
        // The gap only exists when there are two elements to separate.
        let padding = if title == Size::ZERO || image == Size::ZERO {
            0.0
        } else {
            self.padding
        };
        let mut size = if self.image_position.is_vertical() {
            Size::new(
                (title.width + ti.horizontal()).max(image.width + ii.horizontal()),
                title.height + ti.vertical() + image.height + ii.vertical() + padding,
            )
        } else {
            Size::new(
                title.width + ti.horizontal() + image.width + ii.horizontal() + padding,
                (title.height + ti.vertical()).max(image.height + ii.vertical()),
            )
        };
        size.width += self.content_edge_insets.horizontal();
        size.height += self.content_edge_insets.vertical();
        size
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The image rectangle computed by the last `layout()`, in
    /// segment-local coordinates.
    pub fn image_rect(&self) -> Rect {
        self.image_rect
    }

    /// The title rectangle computed by the last `layout()`, in
    /// segment-local coordinates.
    pub fn title_rect(&self) -> Rect {
        self.title_rect
    }

    /// Place the image and title inside the segment's current frame.
    pub fn layout(&mut self) {
        let title = self.title_size();
        let image = self.image_size();
        if title == Size::ZERO && image == Size::ZERO {
            self.image_rect = Rect::ZERO;
            self.title_rect = Rect::ZERO;
            return;
        }

        let content = self.base.rect().inset_by(self.content_edge_insets);
        let padding = if title == Size::ZERO || image == Size::ZERO {
            0.0
        } else {
            self.padding
        };
        let (axis, image_first) = match self.image_position {
            ImagePosition::Top => (Axis::Vertical, true),
            ImagePosition::Bottom => (Axis::Vertical, false),
            ImagePosition::Left => (Axis::Horizontal, true),
            ImagePosition::Right => (Axis::Horizontal, false),
        };

        let (first, second) = if image_first {
            place_pair(
                content,
                axis,
                image,
                self.image_edge_insets,
                title,
                self.title_edge_insets,
                padding,
            )
        } else {
            place_pair(
                content,
                axis,
                title,
                self.title_edge_insets,
                image,
                self.image_edge_insets,
                padding,
            )
        };

        if image_first {
            self.image_rect = first;
            self.title_rect = second;
        } else {
            self.title_rect = first;
            self.image_rect = second;
        }
    }
}

/// Place two boxes along `axis` inside `content`.
///
/// The first box yields to the second along the axis (it is clamped to
/// the space left over after the second's natural extent plus the gap);
/// the second keeps its natural main-axis extent. Both are clamped on
/// the cross axis and centered as a block, never escaping past the
/// leading inset edge.
fn place_pair(
    content: Rect,
    axis: Axis,
    first: Size,
    first_insets: EdgeInsets,
    second: Size,
    second_insets: EdgeInsets,
    padding: f32,
) -> (Rect, Rect) {
    let center = content.center();
    match axis {
        Axis::Vertical => {
            let first_h = (content.height()
                - first_insets.vertical()
                - second_insets.vertical()
                - second.height
                - padding)
                .min(first.height)
                .max(0.0);
            let first_w = (content.width() - first_insets.horizontal())
                .min(first.width)
                .max(0.0);
            let second_w = (content.width() - second_insets.horizontal())
                .min(second.width)
                .max(0.0);
            let second_h = second.height;

            let block = first_h + padding + second_h;
            let first_y = (content.top() + first_insets.top).max(center.y - block / 2.0);
            let first_x = (content.left() + first_insets.left).max(center.x - first_w / 2.0);
            let second_y = first_y + first_h + first_insets.bottom + padding + second_insets.top;
            let second_x = (content.left() + second_insets.left).max(center.x - second_w / 2.0);

            (
                Rect::new(first_x, first_y, first_w, first_h),
                Rect::new(second_x, second_y, second_w, second_h),
            )
        }
        Axis::Horizontal => {
            let first_w = (content.width()
                - first_insets.horizontal()
                - second_insets.horizontal()
                - second.width
                - padding)
                .min(first.width)
                .max(0.0);
            let first_h = (content.height() - first_insets.vertical())
                .min(first.height)
                .max(0.0);
            let second_h = (content.height() - second_insets.vertical())
                .min(second.height)
                .max(0.0);
            let second_w = second.width;

            let block = first_w + padding + second_w;
            let first_x = (content.left() + first_insets.left).max(center.x - block / 2.0);
            let first_y = (content.top() + first_insets.top).max(center.y - first_h / 2.0);
            let second_x = first_x + first_w + first_insets.right + padding + second_insets.left;
            let second_y = (content.top() + second_insets.top).max(center.y - second_h / 2.0);

            (
                Rect::new(first_x, first_y, first_w, first_h),
                Rect::new(second_x, second_y, second_w, second_h),
            )
        }
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidebar_core::{FontFamily, Point};

    fn fixed_font(size: f32) -> Font {
        Font::new(FontFamily::SansSerif, size)
    }

    #[test]
    fn state_map_falls_back_to_normal() {
        let mut map = StateMap::new();
        map.set(ControlState::Normal, Some("n"));
        map.set(ControlState::Selected, Some("s"));

        assert_eq!(map.resolve(ControlState::Selected), Some(&"s"));
        assert_eq!(map.resolve(ControlState::Highlighted), Some(&"n"));
        assert_eq!(map.get(ControlState::Highlighted), None);

        map.set(ControlState::Normal, None);
        assert_eq!(map.resolve(ControlState::Highlighted), None);
    }

    #[test]
    fn empty_segment_has_zero_intrinsic_size() {
        let mut segment = Segment::new();
        assert_eq!(segment.intrinsic_size(), Size::ZERO);
        assert_eq!(segment.width(), 0.0);

        // Insets alone contribute nothing.
        segment.set_content_edge_insets(EdgeInsets::uniform(10.0));
        assert_eq!(segment.intrinsic_size(), Size::ZERO);
    }

    #[test]
    fn vertical_intrinsic_size_stacks_title_and_image() {
        // 10pt font: "ab" measures 12x12 with the box metrics.
        let mut segment = Segment::new();
        segment
            .set_font(fixed_font(10.0))
            .set_title("ab")
            .set_image(Image::with_size(Size::new(24.0, 20.0)))
            .set_image_position(ImagePosition::Top)
            .set_padding(4.0);

        let size = segment.intrinsic_size();
        assert_eq!(size.width, 24.0);
        assert_eq!(size.height, 12.0 + 20.0 + 4.0);

        segment.set_content_edge_insets(EdgeInsets::uniform(8.0));
        let size = segment.intrinsic_size();
        assert_eq!(size.width, 24.0 + 16.0);
        assert_eq!(size.height, 12.0 + 20.0 + 4.0 + 16.0);
    }

    #[test]
    fn horizontal_intrinsic_size_sums_widths() {
        let mut segment = Segment::new();
        segment
            .set_font(fixed_font(10.0))
            .set_title("ab")
            .set_image(Image::with_size(Size::new(24.0, 20.0)))
            .set_image_position(ImagePosition::Left)
            .set_padding(4.0);

        let size = segment.intrinsic_size();
        // Image width, not height, feeds the sum.
        assert_eq!(size.width, 12.0 + 24.0 + 4.0);
        assert_eq!(size.height, 20.0);
    }

    #[test]
    fn title_only_segment_measures_without_the_image_gap() {
        let mut segment = Segment::new();
        segment.set_font(fixed_font(10.0)).set_title("ab");
        assert_eq!(segment.intrinsic_size(), Size::new(12.0, 12.0));

        // Same on the horizontal axis.
        segment.set_image_position(ImagePosition::Left);
        assert_eq!(segment.intrinsic_size(), Size::new(12.0, 12.0));
    }

    #[test]
    fn image_only_segment_measures_without_the_title_gap() {
        let mut segment = Segment::new();
        segment.set_image(Image::with_size(Size::new(24.0, 20.0)));
        assert_eq!(segment.intrinsic_size(), Size::new(24.0, 20.0));
    }

    #[test]
    fn title_only_layout_centers_exactly() {
        let mut segment = Segment::new();
        segment.set_font(fixed_font(10.0)).set_title("ab");
        segment.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        segment.layout();

        let title = segment.title_rect();
        assert_eq!(title.center().x, 50.0);
        assert_eq!(title.center().y, 20.0);
    }

    #[test]
    fn image_only_layout_centers_exactly() {
        let mut segment = Segment::new();
        segment.set_image(Image::with_size(Size::new(24.0, 20.0)));
        segment.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        segment.layout();

        let image = segment.image_rect();
        assert_eq!(image.center().x, 50.0);
        assert_eq!(image.center().y, 20.0);
    }

    #[test]
    fn explicit_width_overrides_intrinsic() {
        let mut segment = Segment::new();
        segment.set_font(fixed_font(10.0)).set_title("ab");
        let intrinsic = segment.intrinsic_size().width;

        segment.set_width(80.0);
        assert_eq!(segment.width(), 80.0);

        segment.set_width(0.0);
        assert_eq!(segment.width(), intrinsic);
    }

    #[test]
    fn styled_title_takes_precedence_for_measurement() {
        let mut segment = Segment::new();
        segment
            .set_font(fixed_font(10.0))
            .set_title("ab")
            .set_styled_title(StyledText::new("abcd").with_font(fixed_font(20.0)));

        // 4 glyphs at 20pt: 48 wide, 24 tall.
        assert_eq!(segment.title_size(), Size::new(48.0, 24.0));
    }

    #[test]
    fn selected_state_resolves_selected_title() {
        let mut segment = Segment::new();
        segment
            .set_title("off")
            .set_title_for(ControlState::Selected, Some("on".into()));

        assert_eq!(segment.title(segment.state()), Some("off"));
        segment.set_selected(true);
        assert_eq!(segment.title(segment.state()), Some("on"));
    }

    #[test]
    fn disabled_wins_over_selected() {
        let mut segment = Segment::new();
        segment.set_selected(true).set_enabled(false);
        assert_eq!(segment.state(), ControlState::Disabled);
    }

    #[test]
    fn layout_top_stacks_image_above_title() {
        let mut segment = Segment::new();
        segment
            .set_font(fixed_font(10.0))
            .set_title("ab")
            .set_image(Image::with_size(Size::new(20.0, 20.0)))
            .set_image_position(ImagePosition::Top)
            .set_padding(4.0);
        segment.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 60.0));
        segment.layout();

        let image = segment.image_rect();
        let title = segment.title_rect();

        // Block of 20 + 4 + 12 = 36 centered in 60 starts at y = 12.
        assert_eq!(image.top(), 12.0);
        assert_eq!(title.top(), image.bottom() + 4.0);
        // Both centered horizontally.
        assert_eq!(image.center().x, 50.0);
        assert_eq!(title.center().x, 50.0);
        assert!(!image.intersects(&title));
    }

    #[test]
    fn layout_left_puts_image_before_title() {
        let mut segment = Segment::new();
        segment
            .set_font(fixed_font(10.0))
            .set_title("ab")
            .set_image(Image::with_size(Size::new(20.0, 20.0)))
            .set_image_position(ImagePosition::Left)
            .set_padding(4.0);
        segment.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        segment.layout();

        let image = segment.image_rect();
        let title = segment.title_rect();

        // Block of 20 + 4 + 12 = 36 centered in 100 starts at x = 32.
        assert_eq!(image.left(), 32.0);
        assert_eq!(title.left(), image.right() + 4.0);
        assert_eq!(image.center().y, 20.0);
        assert_eq!(title.center().y, 20.0);
    }

    #[test]
    fn layout_right_puts_title_before_image() {
        let mut segment = Segment::new();
        segment
            .set_font(fixed_font(10.0))
            .set_title("ab")
            .set_image(Image::with_size(Size::new(20.0, 20.0)))
            .set_image_position(ImagePosition::Right)
            .set_padding(4.0);
        segment.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        segment.layout();

        assert!(segment.title_rect().right() <= segment.image_rect().left());
    }

    #[test]
    fn layout_without_content_produces_zero_rects() {
        let mut segment = Segment::new();
        segment.base_mut().set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        segment.layout();
        assert_eq!(segment.image_rect(), Rect::ZERO);
        assert_eq!(segment.title_rect(), Rect::ZERO);
    }

    #[test]
    fn title_never_escapes_leading_inset_edge() {
        // A tiny frame: centering would push content above the top
        // inset, the clamp keeps it inside.
        let mut segment = Segment::new();
        segment
            .set_font(fixed_font(10.0))
            .set_title("abcdef")
            .set_image(Image::with_size(Size::new(30.0, 30.0)))
            .set_image_position(ImagePosition::Top)
            .set_content_edge_insets(EdgeInsets::uniform(2.0));
        segment.base_mut().set_geometry(Rect::new(0.0, 0.0, 40.0, 30.0));
        segment.layout();

        assert!(segment.image_rect().top() >= 2.0);
        assert!(segment.image_rect().left() >= 2.0);
    }

    #[test]
    fn segment_ids_are_unique() {
        let a = Segment::new();
        let b = Segment::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn state_changes_mark_repaint() {
        let mut segment = Segment::new();
        segment.base_mut().clear_repaint_flag();
        segment.set_highlighted(true);
        assert!(segment.base().needs_repaint());
    }

    #[test]
    fn hit_point_inside_frame() {
        let mut segment = Segment::new();
        segment.base_mut().set_geometry(Rect::new(50.0, 0.0, 100.0, 40.0));
        assert!(segment.base().geometry().contains(Point::new(60.0, 10.0)));
        assert!(!segment.base().geometry().contains(Point::new(10.0, 10.0)));
    }
}
