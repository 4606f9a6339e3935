//! End-to-end behavior of the segmented control: building a bar,
//! tapping, dragging a pager, and mutating segments mid-flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tidebar::{
    Font, FontFamily, Image, MouseButton, MousePressEvent, MouseReleaseEvent, PagerHandle, Point,
    Rect, SegmentedControl, SeparatorInset, Size,
};

/// A scripted paging scroll view.
struct FakePager {
    page_width: f32,
    offset: Arc<Mutex<f32>>,
}

impl PagerHandle for FakePager {
    fn page_width(&self) -> f32 {
        self.page_width
    }

    fn set_content_offset(&mut self, x: f32, _animated: bool) {
        *self.offset.lock() = x;
    }
}

fn emission_counter(control: &SegmentedControl) -> Arc<AtomicUsize> {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = hits.clone();
    control.value_changed.connect(move |_| {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });
    hits
}

fn tap(control: &mut SegmentedControl, x: f32, y: f32) -> bool {
    let mut press = MousePressEvent::new(MouseButton::Left, Point::new(x, y));
    if !control.handle_mouse_press(&mut press) {
        return false;
    }
    let mut release = MouseReleaseEvent::new(MouseButton::Left, Point::new(x, y));
    control.handle_mouse_release(&mut release)
}

fn settle(control: &mut SegmentedControl) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while control.tick(Instant::now()) {
        assert!(Instant::now() < deadline, "animation never settled");
    }
    // A settled control has the indicator at the selected index.
    control.tick(deadline);
}

#[test]
fn tap_drag_and_settle_keep_invariants() {
    let mut control = SegmentedControl::with_titles(["Trends", "Movies", "Shows"]);
    control.set_segment_width(100.0);
    control.set_bounds(Rect::new(0.0, 0.0, 300.0, 44.0));

    let page_offset = Arc::new(Mutex::new(0.0));
    control.attach_pager(Box::new(FakePager {
        page_width: 375.0,
        offset: page_offset.clone(),
    }));
    let hits = emission_counter(&control);

    // Tap the middle segment.
    assert!(tap(&mut control, 150.0, 22.0));
    assert_eq!(control.selected_index(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(*page_offset.lock(), 375.0);

    settle(&mut control);
    assert_eq!(control.progress(), 1.0);
    assert_eq!(control.indicator_frame(), Rect::new(100.0, 0.0, 100.0, 44.0));

    // Drag the pager toward the third page.
    control.pager_scrolled(1.3 * 375.0, true);
    assert_eq!(control.selected_index(), 1);
    control.pager_scrolled(1.7 * 375.0, true);
    assert_eq!(control.selected_index(), 2);
    control.pager_scrolled(2.0 * 375.0, true);
    assert_eq!(control.selected_index(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    // At rest the indicator matches the selected segment again.
    assert_eq!(control.indicator_frame().left(), 200.0);
    assert_eq!(control.indicator_frame().width(), 100.0);
}

#[test]
fn separator_invariant_survives_mutation_sequences() {
    let mut control = SegmentedControl::new();
    control.set_separator_inset(SeparatorInset::new(4.0, 2.0, 4.0));
    control.set_bounds(Rect::new(0.0, 0.0, 300.0, 44.0));

    for title in ["a", "b", "c", "d"] {
        control.append_title(title);
        let expected = control.count().saturating_sub(1);
        assert_eq!(control.separator_frames().len(), expected);
    }

    control.remove(1);
    assert_eq!(control.separator_frames().len(), 2);
    control.remove(0);
    control.remove(0);
    assert_eq!(control.separator_frames().len(), 0);
    control.remove(0);
    assert_eq!(control.count(), 0);
    assert_eq!(control.separator_frames().len(), 0);

    control.append_title("again");
    assert_eq!(control.separator_frames().len(), 0);
    assert!(control.segment(0).unwrap().is_selected());
}

#[test]
fn mixed_width_bar_scrolls_selection_into_view() {
    let mut control = SegmentedControl::new();
    control.set_bounds(Rect::new(0.0, 0.0, 200.0, 44.0));
    control.set_font(Font::new(FontFamily::SansSerif, 10.0));

    control.append_title("short");
    control.append_title("a much longer segment title");
    control.append_image(Image::named("gear", Size::new(24.0, 24.0)));
    control.append_title("tail").set_width(120.0);
    control.layout();

    // The strip outgrew the window.
    assert!(control.content_width() > 200.0);

    control.select(3, false);
    let frame = control.indicator_frame();
    let visible_left = control.scroll_offset();
    assert!(frame.left() >= visible_left);
    assert!(frame.right() <= visible_left + 200.0);
    assert_eq!(frame.width(), 120.0);

    // Jumping back scrolls the other way.
    control.select(0, false);
    assert_eq!(control.scroll_offset(), 0.0);
}

#[test]
fn styling_changes_relayout_retroactively() {
    let mut control = SegmentedControl::with_titles(["ab", "cd"]);
    control.set_font(Font::new(FontFamily::SansSerif, 10.0));
    control.set_bounds(Rect::new(0.0, 0.0, 300.0, 44.0));

    let before = control.segment(0).unwrap().intrinsic_size();

    control.set_font(Font::new(FontFamily::SansSerif, 20.0));
    let after = control.segment(0).unwrap().intrinsic_size();
    assert_eq!(after.width - 16.0, (before.width - 16.0) * 2.0);

    // Two 90pt segments stretch to even 150pt shares of the 300pt
    // strip; the indicator matches the laid-out frame, not the raw
    // segment width.
    control.set_segment_width(90.0);
    control.select(1, false);
    assert_eq!(control.indicator_frame().width(), 150.0);
    assert_eq!(control.indicator_frame().left(), 150.0);
}

#[test]
fn reconfigured_animation_is_used_by_select() {
    let mut control = SegmentedControl::with_titles(["a", "b"]);
    control.set_segment_width(100.0);
    control.set_bounds(Rect::new(0.0, 0.0, 200.0, 44.0));

    let mut animation = control.animation();
    animation.duration = Duration::ZERO;
    control.set_animation(animation);

    // Zero duration settles on the next tick even when "animated".
    control.select(1, true);
    control.tick(Instant::now());
    assert!(!control.is_animating());
    assert_eq!(control.progress(), 1.0);
}
