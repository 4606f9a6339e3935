//! A segmented control: a horizontal row of tappable segments with an
//! animated indicator tracking the selection.
//!
//! The control is render-agnostic. It owns the layout — segment
//! frames, separator bands, indicator placement, scroll offset — and
//! exposes the computed rectangles and resolved styling for the host
//! toolkit to paint. Input comes in as [`events`] and selection
//! changes go out through the `value_changed` signal.
//!
//! # Quick start
//!
//! ```
//! use tidebar::{Rect, SegmentedControl};
//!
//! let mut control = SegmentedControl::with_titles(["Trends", "Movies", "Shows"]);
//! control.set_bounds(Rect::new(0.0, 0.0, 375.0, 44.0));
//!
//! control.value_changed.connect(|&index| {
//!     println!("selected segment {index}");
//! });
//!
//! control.select(1, true);
//! ```
//!
//! # Pager synchronization
//!
//! When the segments front a paging scroll view, implement
//! [`PagerHandle`] over it and attach it with
//! [`SegmentedControl::attach_pager`]. Selecting a segment pushes the
//! matching page offset out; feeding user drags back in through
//! [`SegmentedControl::pager_scrolled`] makes the indicator track the
//! pages continuously.

pub mod animation;
pub mod base;
pub mod content_view;
pub mod control;
pub mod events;
pub mod indicator;
pub mod segment;

pub use animation::{Animation, AnimationOptions, ProgressAnimator};
pub use base::WidgetBase;
pub use content_view::{ContentView, SeparatorInset};
pub use control::{PagerHandle, SegmentedControl};
pub use events::{MouseButton, MousePressEvent, MouseReleaseEvent};
pub use indicator::{Indicator, LinePosition};
pub use segment::{
    ControlState, Image, ImagePosition, Segment, SegmentId, StateMap, StyledText,
};

pub use tidebar_core::{
    Color, ConnectionGuard, ConnectionId, EdgeInsets, Font, FontFamily, Point, Rect, Signal, Size,
};

static_assertions::assert_impl_all!(SegmentedControl: Send, Sync);
static_assertions::assert_impl_all!(Segment: Send, Sync);
