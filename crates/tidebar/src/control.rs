//! The segmented control.
//!
//! A horizontal row of tappable segments with an animated indicator
//! tracking the selection. The control owns its segments, distributes
//! their widths, keeps a scrollable viewport over the strip when the
//! segments outgrow the bounds, and can stay in lockstep with a paging
//! scroll view supplied by the host.

use std::time::Instant;

use tidebar_core::{Color, EdgeInsets, Font, Point, Rect, Signal};

use crate::animation::{Animation, AnimationOptions, ProgressAnimator};
use crate::base::WidgetBase;
use crate::content_view::{ContentView, SeparatorInset};
use crate::events::{MouseButton, MousePressEvent, MouseReleaseEvent};
use crate::indicator::{Indicator, LinePosition};
use crate::segment::{ControlState, Image, Segment, StyledText};

/// A paging scroll surface the control keeps in sync with.
///
/// The host implements this over whatever actually scrolls the pages.
/// The control pushes offsets out through [`set_content_offset`] when a
/// segment is selected; the host pushes offsets back in through
/// [`SegmentedControl::pager_scrolled`] while the user drags.
///
/// [`set_content_offset`]: PagerHandle::set_content_offset
pub trait PagerHandle: Send + Sync {
    /// The width of one page.
    fn page_width(&self) -> f32;

    /// Scroll so `x` becomes the leading content offset.
    fn set_content_offset(&mut self, x: f32, animated: bool);
}

/// The control's own horizontal scroll window over the segment strip.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    /// The window frame, in control-local coordinates.
    frame: Rect,
    /// Total width of the segment strip.
    content_width: f32,
    /// Leading offset into the strip.
    offset_x: f32,
    /// Host hint; the control's own scrolling always stays clamped.
    bounces: bool,
}

impl Viewport {
    fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            content_width: 0.0,
            offset_x: 0.0,
            bounces: true,
        }
    }

    fn max_offset(&self) -> f32 {
        (self.content_width - self.frame.width()).max(0.0)
    }

    /// The visible band, in content coordinates.
    fn visible_rect(&self) -> Rect {
        Rect::new(self.offset_x, 0.0, self.frame.width(), self.frame.height())
    }

    fn set_offset(&mut self, x: f32) {
        self.offset_x = x.clamp(0.0, self.max_offset());
    }

    /// Bring `rect` into the visible band, moving as little as
    /// possible. Returns `true` when the move should animate: only
    /// rects that were fully outside the band warrant it.
    fn scroll_rect_to_visible(&mut self, rect: Rect) -> bool {
        let visible = self.visible_rect();
        let animated = !rect.intersects(&visible);
        if rect.left() < visible.left() {
            self.set_offset(rect.left());
        } else if rect.right() > visible.right() {
            self.set_offset(rect.right() - self.frame.width());
        }
        animated
    }
}

/// A horizontal segmented control with an animated selection indicator.
///
/// # Example
///
/// ```ignore
/// let mut control = SegmentedControl::with_titles(["Trends", "Movies", "Shows"]);
/// control.set_bounds(Rect::new(0.0, 0.0, 375.0, 44.0));
/// control.value_changed.connect(|&index| println!("selected {index}"));
/// control.select(1, true);
/// ```
pub struct SegmentedControl {
    base: WidgetBase,
    content_view: ContentView,
    indicator: Indicator,
    viewport: Viewport,

    animation: Animation,
    animator: ProgressAnimator,
    /// Continuous selection position; equals `selected_index` at rest.
    progress: f32,
    selected_index: usize,
    /// Segment index a press started on, until release.
    pressed: Option<usize>,
    pager: Option<Box<dyn PagerHandle>>,

    // Factory defaults applied to appended segments.
    font: Font,
    text_color: Color,
    selected_text_color: Color,
    /// Fixed width applied to every segment; 0 keeps them intrinsic.
    segment_width: f32,
    content_edge_insets: EdgeInsets,
    segment_edge_insets: EdgeInsets,

    corner_radius: f32,
    border_width: f32,
    border_color: Color,

    /// Emitted with the new index on every committed selection change.
    pub value_changed: Signal<usize>,
}

impl SegmentedControl {
    /// Create an empty control.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            content_view: ContentView::new(),
            indicator: Indicator::new(),
            viewport: Viewport::new(),
            animation: Animation::default(),
            animator: ProgressAnimator::new(),
            progress: 0.0,
            selected_index: 0,
            pressed: None,
            pager: None,
            font: Font::system(),
            text_color: Color::LIGHT_GRAY,
            selected_text_color: Color::BLACK,
            segment_width: 0.0,
            content_edge_insets: EdgeInsets::ZERO,
            segment_edge_insets: EdgeInsets::uniform(8.0),
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: Color::BLACK,
            value_changed: Signal::new(),
        }
    }

    /// Create a control with one titled segment per item.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut control = Self::new();
        for title in titles {
            control.append_title(title);
        }
        control
    }

    /// Create a control with one styled-title segment per item.
    pub fn with_styled_titles<I>(titles: I) -> Self
    where
        I: IntoIterator<Item = StyledText>,
    {
        let mut control = Self::new();
        for title in titles {
            control.append_styled_title(title);
        }
        control
    }

    /// Create a control with one image segment per item.
    pub fn with_images<I>(images: I) -> Self
    where
        I: IntoIterator<Item = Image>,
    {
        let mut control = Self::new();
        for image in images {
            control.append_image(image);
        }
        control
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
    // Segments
    // =========================================================================

    /// The number of segments.
    #[inline]
    pub fn count(&self) -> usize {
        self.content_view.len()
    }

    /// The segment at `index`.
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.content_view.get(index)
    }

    /// Mutable access to the segment at `index`.
    ///
    /// Call [`layout`](Self::layout) after changing anything that
    /// affects measurement.
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.content_view.get_mut(index)
    }

    /// Append a segment titled `title`, configured with the control's
    /// current font, colors, insets and width.
    ///
    /// Returns the new segment for chained configuration; call
    /// [`layout`](Self::layout) afterwards if the chain changed its
    /// measurement.
    pub fn append_title(&mut self, title: impl Into<String>) -> &mut Segment {
        let mut segment = self.make_segment();
        segment.set_title(title);
        self.push_segment(segment)
    }

    /// Append a segment with a styled title.
    pub fn append_styled_title(&mut self, title: StyledText) -> &mut Segment {
        let mut segment = self.make_segment();
        segment.set_styled_title(title);
        self.push_segment(segment)
    }

    /// Append a segment showing an image.
    pub fn append_image(&mut self, image: Image) -> &mut Segment {
        let mut segment = self.make_segment();
        segment.set_image(image);
        self.push_segment(segment)
    }

    /// Remove the segment at `index`.
    ///
    /// Out-of-range indices are ignored. The selection clamps to the
    /// last valid index; `value_changed` fires only when the selected
    /// index actually moves. Removing the final segment resets the
    /// control to its empty state silently.
    pub fn remove(&mut self, index: usize) {
        if index >= self.count() {
            return;
        }
        self.pressed = None;
        self.animator.stop();
        self.content_view.remove_at(index);

        if self.content_view.is_empty() {
            self.selected_index = 0;
            self.progress = 0.0;
            self.layout();
            return;
        }

        let old = self.selected_index;
        let mut new_index = old;
        if index < old {
            new_index -= 1;
        }
        new_index = new_index.min(self.content_view.len() - 1);

        self.selected_index = new_index;
        self.progress = new_index as f32;
        self.sync_selected_flags();
        self.layout();

        if new_index != old {
            self.value_changed.emit(new_index);
        }
    }

    /// Remove every segment, resetting to the empty state silently.
    pub fn remove_all(&mut self) {
        self.content_view.remove_all();
        self.selected_index = 0;
        self.progress = 0.0;
        self.pressed = None;
        self.animator.stop();
        self.layout();
    }

    fn make_segment(&self) -> Segment {
        let mut segment = Segment::new();
        segment
            .set_font(self.font.clone())
            .set_title_color_for(ControlState::Normal, Some(self.text_color))
            .set_title_color_for(ControlState::Selected, Some(self.selected_text_color))
            .set_content_edge_insets(self.segment_edge_insets);
        if self.segment_width > 0.0 {
            segment.set_width(self.segment_width);
        }
        segment.set_selected(self.content_view.len() == self.selected_index);
        segment
    }

    fn push_segment(&mut self, segment: Segment) -> &mut Segment {
        self.content_view.append(segment);
        self.layout();
        self.content_view
            .last_mut()
            .expect("segment was just appended")
    }

    fn sync_selected_flags(&mut self) {
        let selected = self.selected_index;
        for index in 0..self.content_view.len() {
            if let Some(segment) = self.content_view.get_mut(index) {
                segment.set_selected(index == selected);
            }
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected segment index.
    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The continuous selection position the indicator tracks.
    ///
    /// Integral at rest; fractional mid-animation or while a pager is
    /// being dragged.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Select the segment at `index`.
    ///
    /// Emits `value_changed` once, moves the indicator (animated with
    /// the configured [`Animation`] when `animated` is set, instantly
    /// otherwise), and pushes the matching page offset to an attached
    /// pager. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, animated: bool) {
        if index >= self.count() {
            return;
        }
        self.commit_selection(index);

        let target = index as f32;
        if animated && !self.animation.duration.is_zero() {
            // Restart from the current, possibly mid-flight position.
            self.animator
                .start(self.progress, target, self.animation, Instant::now());
        } else {
            self.animator.stop();
            self.set_progress(target);
        }

        if let Some(pager) = self.pager.as_mut() {
            let offset = target * pager.page_width();
            pager.set_content_offset(offset, animated);
        }
    }

    /// Move the indicator to `progress` and re-place it.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
        self.layout_indicator();
    }

    fn commit_selection(&mut self, index: usize) {
        if let Some(previous) = self.content_view.get_mut(self.selected_index) {
            previous.set_selected(false);
        }
        self.selected_index = index;
        if let Some(segment) = self.content_view.get_mut(index) {
            segment.set_selected(true);
        }
        tracing::debug!(target: "tidebar::control", index, "selection committed");
        self.value_changed.emit(index);
    }

    /// Advance the indicator animation to time `now`.
    ///
    /// Returns `true` while the animation is still running, so the
    /// host's frame loop knows to keep ticking.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(value) = self.animator.tick(now) {
            self.set_progress(value);
        }
        self.animator.is_running()
    }

    /// Check if the indicator is mid-animation.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    // =========================================================================
    // Pager Synchronization
    // =========================================================================

    /// Attach a paging surface, replacing any previous one.
    pub fn attach_pager(&mut self, pager: Box<dyn PagerHandle>) {
        self.pager = Some(pager);
    }

    /// Detach and return the paging surface, if any.
    pub fn detach_pager(&mut self) -> Option<Box<dyn PagerHandle>> {
        self.pager.take()
    }

    /// Feed a pager scroll offset back into the control.
    ///
    /// While `user_driven` (the user is dragging or the pager is
    /// decelerating), the indicator tracks `offset_x / page_width`
    /// continuously and the selection snaps to the nearest page,
    /// emitting `value_changed` only when it actually changes.
    /// Programmatic offsets (`user_driven == false`) are ignored; the
    /// control already moved itself when it pushed them out.
    pub fn pager_scrolled(&mut self, offset_x: f32, user_driven: bool) {
        if !user_driven || self.content_view.is_empty() {
            return;
        }
        let Some(pager) = self.pager.as_ref() else {
            return;
        };
        let page_width = pager.page_width();
        if page_width <= 0.0 {
            return;
        }

        self.animator.stop();
        let progress = offset_x / page_width;
        self.set_progress(progress);

        let last = (self.count() - 1) as f32;
        let index = progress.round().clamp(0.0, last) as usize;
        if index != self.selected_index {
            self.commit_selection(index);
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Set the control's frame and lay everything out.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.base.set_geometry(bounds);
        self.layout();
    }

    /// Lay out the viewport, the segment strip, and the indicator.
    pub fn layout(&mut self) {
        let bounds = self.base.rect();
        let scroll_frame = bounds.inset_by(self.content_edge_insets);

        let content_width = self
            .content_view
            .intrinsic_size()
            .width
            .max(scroll_frame.width());

        self.viewport.frame = scroll_frame;
        self.viewport.content_width = content_width;
        self.viewport.set_offset(self.viewport.offset_x);

        self.content_view.base_mut().set_geometry(Rect::new(
            0.0,
            0.0,
            content_width,
            scroll_frame.height(),
        ));
        self.content_view.layout();
        self.layout_indicator();
    }

    /// Place the indicator under the selection position.
    ///
    /// The indicator frame is in content coordinates. At integral
    /// progress it matches the selected segment's frame; between
    /// segments both edges interpolate; past either end the width
    /// shrinks as the position rubber-bands.
    fn layout_indicator(&mut self) {
        let count = self.content_view.len();
        if count == 0 {
            return;
        }

        let progress = self.progress;
        let index = (progress.floor().max(0.0) as usize).min(count - 1);
        let separator_width = self.content_view.separator_inset().width;
        let segment_width =
            |view: &ContentView, i: usize| view.get(i).map_or(0.0, |s| s.base().geometry().width());

        let current_width = segment_width(&self.content_view, index);

        let mut x = if progress < 0.0 {
            0.0
        } else {
            current_width * (progress - index as f32)
        };
        for i in 0..index {
            x += segment_width(&self.content_view, i);
        }
        x += index as f32 * separator_width;

        let width = if progress < 0.0 {
            current_width * (progress + 1.0)
        } else if index + 1 < count {
            let next_width = segment_width(&self.content_view, index + 1);
            current_width + (next_width - current_width) * (progress - index as f32)
        } else {
            current_width * (count as f32 - progress)
        };

        // The indicator spans the control's full height even when the
        // content insets shrink the scrollable strip.
        let frame = Rect::new(x, 0.0, width, self.base.rect().height());
        self.indicator.base_mut().set_geometry(frame);
        self.indicator.layout();

        let animated = self.viewport.scroll_rect_to_visible(frame);
        tracing::trace!(
            target: "tidebar::control",
            x,
            width,
            offset = self.viewport.offset_x,
            animated,
            "indicator placed"
        );
    }

    /// The indicator's current frame, in content coordinates.
    pub fn indicator_frame(&self) -> Rect {
        self.indicator.base().geometry()
    }

    /// The viewport's leading offset into the segment strip.
    pub fn scroll_offset(&self) -> f32 {
        self.viewport.offset_x
    }

    /// Total width of the segment strip.
    pub fn content_width(&self) -> f32 {
        self.viewport.content_width
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// The segment index under `point` (control-local), if any.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        if !self.viewport.frame.contains(point) {
            return None;
        }
        let content_point = Point::new(
            point.x - self.viewport.frame.left() + self.viewport.offset_x,
            point.y - self.viewport.frame.top(),
        );
        (0..self.content_view.len()).find(|&index| {
            self.content_view
                .get(index)
                .is_some_and(|segment| segment.base().geometry().contains(content_point))
        })
    }

    /// Handle a mouse press, highlighting the segment under it.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_mouse_press(&mut self, event: &mut MousePressEvent) -> bool {
        if event.button != MouseButton::Left || !self.base.is_enabled() {
            return false;
        }
        if self.animator.is_running()
            && !self
                .animation
                .options
                .contains(AnimationOptions::ALLOW_USER_INTERACTION)
        {
            return false;
        }
        let Some(index) = self.hit_test(event.local_pos) else {
            return false;
        };
        if !self
            .content_view
            .get(index)
            .is_some_and(|segment| segment.is_enabled())
        {
            return false;
        }

        self.pressed = Some(index);
        if let Some(segment) = self.content_view.get_mut(index) {
            segment.set_highlighted(true);
        }
        event.base.accept();
        true
    }

    /// Handle a mouse release, selecting the pressed segment when the
    /// release lands on it.
    ///
    /// Returns `true` if a selection was made.
    pub fn handle_mouse_release(&mut self, event: &mut MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        let Some(pressed) = self.pressed.take() else {
            return false;
        };
        if let Some(segment) = self.content_view.get_mut(pressed) {
            segment.set_highlighted(false);
        }

        if self.hit_test(event.local_pos) == Some(pressed) {
            self.select(pressed, true);
            event.base.accept();
            return true;
        }
        false
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// The indicator animation descriptor.
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Set the indicator animation descriptor.
    pub fn set_animation(&mut self, animation: Animation) {
        self.animation = animation;
    }

    /// The title font applied to segments.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the title font, retroactively on every segment.
    pub fn set_font(&mut self, font: Font) {
        self.font = font.clone();
        for index in 0..self.content_view.len() {
            if let Some(segment) = self.content_view.get_mut(index) {
                segment.set_font(font.clone());
            }
        }
        self.layout();
    }

    /// The normal-state title color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the normal-state title color, retroactively.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        for index in 0..self.content_view.len() {
            if let Some(segment) = self.content_view.get_mut(index) {
                segment.set_title_color_for(ControlState::Normal, Some(color));
            }
        }
    }

    /// The selected-state title color.
    pub fn selected_text_color(&self) -> Color {
        self.selected_text_color
    }

    /// Set the selected-state title color, retroactively.
    pub fn set_selected_text_color(&mut self, color: Color) {
        self.selected_text_color = color;
        for index in 0..self.content_view.len() {
            if let Some(segment) = self.content_view.get_mut(index) {
                segment.set_title_color_for(ControlState::Selected, Some(color));
            }
        }
    }

    /// The fixed segment width; 0 means intrinsic widths.
    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// Force every segment to a fixed width, retroactively. Zero
    /// restores intrinsic widths.
    pub fn set_segment_width(&mut self, width: f32) {
        self.segment_width = width.max(0.0);
        for index in 0..self.content_view.len() {
            if let Some(segment) = self.content_view.get_mut(index) {
                segment.set_width(width);
            }
        }
        self.layout();
    }

    /// Insets between the control's bounds and the scrollable strip.
    pub fn content_edge_insets(&self) -> EdgeInsets {
        self.content_edge_insets
    }

    /// Set the insets around the scrollable strip.
    pub fn set_content_edge_insets(&mut self, insets: EdgeInsets) {
        self.content_edge_insets = insets;
        self.layout();
    }

    /// Content insets applied inside each segment.
    pub fn segment_edge_insets(&self) -> EdgeInsets {
        self.segment_edge_insets
    }

    /// Set the per-segment content insets, retroactively.
    pub fn set_segment_edge_insets(&mut self, insets: EdgeInsets) {
        self.segment_edge_insets = insets;
        for index in 0..self.content_view.len() {
            if let Some(segment) = self.content_view.get_mut(index) {
                segment.set_content_edge_insets(insets);
            }
        }
        self.layout();
    }

    /// The separator band metrics.
    pub fn separator_inset(&self) -> SeparatorInset {
        self.content_view.separator_inset()
    }

    /// Set the separator band metrics.
    pub fn set_separator_inset(&mut self, inset: SeparatorInset) {
        self.content_view.set_separator_inset(inset);
        self.layout();
    }

    /// The separator color.
    pub fn separator_color(&self) -> Color {
        self.content_view.separator_color()
    }

    /// Set the separator color.
    pub fn set_separator_color(&mut self, color: Color) {
        self.content_view.set_separator_color(color);
    }

    /// The separator frames, in content coordinates.
    pub fn separator_frames(&self) -> &[Rect] {
        self.content_view.separator_frames()
    }

    /// Read access to the indicator decoration.
    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    /// Pin the indicator line to the top or bottom edge.
    pub fn set_indicator_line_position(&mut self, position: LinePosition) {
        self.indicator.set_line_position(position);
        self.layout_indicator();
    }

    /// Set the indicator line thickness.
    pub fn set_indicator_line_height(&mut self, height: f32) {
        self.indicator.set_line_height(height);
        self.layout_indicator();
    }

    /// Set the insets shrinking the indicator inside its frame.
    pub fn set_indicator_edge_insets(&mut self, insets: EdgeInsets) {
        self.indicator.set_content_edge_insets(insets);
        self.layout_indicator();
    }

    /// Set the indicator line color.
    pub fn set_indicator_line_color(&mut self, color: Color) {
        self.indicator.set_line_color(color);
    }

    /// Set the indicator box color.
    pub fn set_indicator_box_color(&mut self, color: Color) {
        self.indicator.set_box_color(color);
    }

    /// Set the indicator box opacity.
    pub fn set_indicator_box_opacity(&mut self, opacity: f32) {
        self.indicator.set_box_opacity(opacity);
    }

    /// Whether the host's gesture handling may rubber-band the strip
    /// past its edges.
    ///
    /// A stored hint for the host, like [`corner_radius`]: the
    /// control's own programmatic scrolling never overshoots, so the
    /// flag only changes what the host does with drag gestures it owns.
    ///
    /// [`corner_radius`]: Self::corner_radius
    pub fn bounces(&self) -> bool {
        self.viewport.bounces
    }

    /// Set the rubber-banding hint for the host.
    pub fn set_bounces(&mut self, bounces: bool) {
        self.viewport.bounces = bounces;
    }

    /// The background corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Set the background corner radius.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
        self.base.update();
    }

    /// The border width.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Set the border width.
    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = width.max(0.0);
        self.base.update();
    }

    /// The border color.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Set the border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.base.update();
    }
}

impl Default for SegmentedControl {
    fn default() -> Self {
        Self::new()
    }
}
