//! A pager-synced top bar, driven from the console.
//!
//! Builds a three-segment bar fronting a paging surface, taps a
//! segment, runs the indicator animation to rest, then simulates the
//! user dragging the pager back and prints what the control computes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tidebar::{
    Color, MouseButton, MousePressEvent, MouseReleaseEvent, PagerHandle, Point, Rect,
    SegmentedControl,
};

const PAGE_WIDTH: f32 = 375.0;

struct ConsolePager {
    offset: Arc<Mutex<f32>>,
}

impl PagerHandle for ConsolePager {
    fn page_width(&self) -> f32 {
        PAGE_WIDTH
    }

    fn set_content_offset(&mut self, x: f32, animated: bool) {
        println!("pager -> offset {x:.1} (animated: {animated})");
        *self.offset.lock() = x;
    }
}

fn print_state(control: &SegmentedControl) {
    let frame = control.indicator_frame();
    println!(
        "selected {} | progress {:.2} | indicator x {:.1} w {:.1}",
        control.selected_index(),
        control.progress(),
        frame.left(),
        frame.width(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tidebar=debug".into()),
        )
        .init();

    let mut control = SegmentedControl::with_titles(["Trends", "Movies", "Shows"]);
    control.set_bounds(Rect::new(0.0, 0.0, PAGE_WIDTH, 44.0));
    control.set_selected_text_color(Color::from_rgb8(0, 122, 255));
    control.set_indicator_line_height(2.0);

    let offset = Arc::new(Mutex::new(0.0));
    control.attach_pager(Box::new(ConsolePager {
        offset: offset.clone(),
    }));

    control.value_changed.connect(|&index| {
        println!("value_changed -> {index}");
    });

    print_state(&control);

    // Tap "Shows".
    let tap = Point::new(320.0, 22.0);
    let mut press = MousePressEvent::new(MouseButton::Left, tap);
    control.handle_mouse_press(&mut press);
    let mut release = MouseReleaseEvent::new(MouseButton::Left, tap);
    control.handle_mouse_release(&mut release);

    // Run the indicator animation at ~60fps until it settles.
    while control.tick(Instant::now()) {
        print_state(&control);
        std::thread::sleep(Duration::from_millis(16));
    }
    print_state(&control);

    // The user drags the pager back toward the first page.
    println!("-- dragging --");
    for step in 0..=8 {
        let x = 2.0 * PAGE_WIDTH * (1.0 - step as f32 / 8.0);
        control.pager_scrolled(x, true);
        print_state(&control);
    }
}
