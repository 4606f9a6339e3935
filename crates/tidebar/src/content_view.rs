//! The horizontal strip of segments.
//!
//! The content view owns the segments and the separator bands between
//! them, distributes the available width, and assigns every segment its
//! frame. It is the coordinate space the indicator and the viewport
//! work in.

use std::cmp::Ordering;

use tidebar_core::{Color, Rect, Size};

use crate::base::WidgetBase;
use crate::segment::{Segment, SegmentId};

/// Vertical inset and width of the separator bands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeparatorInset {
    /// Gap above the band.
    pub top: f32,
    /// Band width; 0 collapses the separators entirely.
    pub width: f32,
    /// Gap below the band.
    pub bottom: f32,
}

impl SeparatorInset {
    /// Create a separator inset.
    pub const fn new(top: f32, width: f32, bottom: f32) -> Self {
        Self { top, width, bottom }
    }

    /// No separators.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
}

/// The strip of segments with separators interleaved.
pub struct ContentView {
    base: WidgetBase,
    segments: Vec<Segment>,
    separator_inset: SeparatorInset,
    separator_color: Color,
    /// One frame per gap between adjacent segments.
    separator_frames: Vec<Rect>,
}

impl ContentView {
    /// Create an empty content view.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            segments: Vec::new(),
            separator_inset: SeparatorInset::ZERO,
            separator_color: Color::LIGHT_GRAY,
            separator_frames: Vec::new(),
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

    // =========================================================================
    // Segments
    // =========================================================================

    /// The number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the strip holds no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment at `index`.
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Mutable access to the segment at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// Mutable access to the last segment.
    pub fn last_mut(&mut self) -> Option<&mut Segment> {
        self.segments.last_mut()
    }

    /// Iterate over the segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// The index a segment identity currently sits at.
    pub fn index_of(&self, id: SegmentId) -> Option<usize> {
        self.segments.iter().position(|s| s.id() == id)
    }

    /// Append a segment to the end of the strip.
    ///
    /// Appending a segment identity already present is a no-op. Every
    /// append past the first adds one separator band. The strip is
    /// re-laid out synchronously.
    pub fn append(&mut self, segment: Segment) {
        if self.index_of(segment.id()).is_some() {
            return;
        }
        if !self.segments.is_empty() {
            self.separator_frames.push(Rect::ZERO);
        }
        self.segments.push(segment);
        self.base.update();
        self.layout();
    }

    /// Remove and return the segment at `index`.
    ///
    /// Out-of-range indices return `None` and change nothing.
    pub fn remove_at(&mut self, index: usize) -> Option<Segment> {
        if index >= self.segments.len() {
            return None;
        }
        let segment = self.segments.remove(index);
        self.separator_frames.pop();
        self.base.update();
        self.layout();
        Some(segment)
    }

    /// Remove every segment and separator.
    pub fn remove_all(&mut self) {
        self.segments.clear();
        self.separator_frames.clear();
        self.base.update();
    }

    // =========================================================================
    // Separators
    // =========================================================================

    /// The separator band metrics.
    pub fn separator_inset(&self) -> SeparatorInset {
        self.separator_inset
    }

    /// Set the separator band metrics and re-lay out.
    pub fn set_separator_inset(&mut self, inset: SeparatorInset) {
        self.separator_inset = inset;
        self.base.update();
        self.layout();
    }

    /// The separator color.
    pub fn separator_color(&self) -> Color {
        self.separator_color
    }

    /// Set the separator color.
    pub fn set_separator_color(&mut self, color: Color) {
        self.separator_color = color;
        self.base.update();
    }

    /// The separator frames computed by the last `layout()`, one per
    /// gap between adjacent segments.
    pub fn separator_frames(&self) -> &[Rect] {
        &self.separator_frames
    }

    // =========================================================================
    // Measurement and Layout
    // =========================================================================

    /// The width and height the strip needs to show every segment at
    /// its own width.
    pub fn intrinsic_size(&self) -> Size {
        let separators = self.separator_frames.len() as f32 * self.separator_inset.width;
        let width = self.segments.iter().map(Segment::width).sum::<f32>() + separators;
        let height = self
            .segments
            .iter()
            .map(|s| s.intrinsic_size().height)
            .fold(0.0, f32::max);
        Size::new(width, height)
    }

    /// Distribute the current frame width over the segments and place
    /// everything.
    ///
    /// Widths are assigned widest-first: each segment gets the larger
    /// of its own width and an even share of what is still
    /// unclaimed, so narrow segments stretch to fill the strip while
    /// wide ones keep their extent. Frames are then assigned in the
    /// original order with separator bands interleaved.
    pub fn layout(&mut self) {
        let frame = self.base.rect();
        let count = self.segments.len();
        if count == 0 {
            return;
        }

        tracing::debug!(
            target: "tidebar::layout",
            count,
            width = frame.width(),
            "content layout pass"
        );

        let separator_width = self.separator_inset.width;

        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by(|&a, &b| {
            self.segments[b]
                .width()
                .partial_cmp(&self.segments[a].width())
                .unwrap_or(Ordering::Equal)
        });

        let mut widths = vec![0.0f32; count];
        let mut remaining = frame.width() - (count as f32 - 1.0) * separator_width;
        for (placed, &index) in order.iter().enumerate() {
            let share = remaining / (count - placed) as f32;
            let width = self.segments[index].width().max(share);
            widths[index] = width;
            remaining -= width;
        }

        let height = frame.height();
        let separator_height =
            (height - self.separator_inset.top - self.separator_inset.bottom).max(0.0);

        self.separator_frames.clear();
        let mut x = 0.0;
        for (index, segment) in self.segments.iter_mut().enumerate() {
            if index > 0 {
                self.separator_frames.push(Rect::new(
                    x,
                    self.separator_inset.top,
                    separator_width,
                    separator_height,
                ));
                x += separator_width;
            }
            segment
                .base_mut()
                .set_geometry(Rect::new(x, 0.0, widths[index], height));
            segment.layout();
            x += widths[index];
        }
    }
}

impl Default for ContentView {
    fn default() -> Self {
        Self::new()
    }
}
