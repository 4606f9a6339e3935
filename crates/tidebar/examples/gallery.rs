//! Three styling variants of the control, printed side by side:
//! an underline bar, a boxed bar with separators, and an image bar.

use tidebar::{
    Color, EdgeInsets, Font, FontFamily, Image, ImagePosition, LinePosition, Rect,
    SegmentedControl, SeparatorInset, Size, StyledText,
};

fn dump(name: &str, control: &SegmentedControl) {
    println!("== {name} ==");
    println!(
        "content width {:.1}, scroll offset {:.1}",
        control.content_width(),
        control.scroll_offset()
    );
    for index in 0..control.count() {
        let segment = control.segment(index).expect("index in range");
        let frame = segment.base().geometry();
        println!(
            "  [{index}] x {:6.1} w {:6.1} selected {}",
            frame.left(),
            frame.width(),
            segment.is_selected(),
        );
    }
    for (index, frame) in control.separator_frames().iter().enumerate() {
        println!("  sep[{index}] x {:6.1} w {:4.1}", frame.left(), frame.width());
    }
    let indicator = control.indicator_frame();
    println!(
        "  indicator x {:.1} w {:.1} (line {:?})",
        indicator.left(),
        indicator.width(),
        control.indicator().line_position(),
    );
}

/// Thin top line, styled titles.
fn underline_bar() -> SegmentedControl {
    let mut control = SegmentedControl::with_styled_titles([
        StyledText::new("Home").with_font(Font::new(FontFamily::SansSerif, 14.0)),
        StyledText::new("Library").with_font(Font::new(FontFamily::SansSerif, 14.0)),
        StyledText::new("Search").with_font(Font::new(FontFamily::SansSerif, 14.0)),
    ]);
    control.set_indicator_line_position(LinePosition::Top);
    control.set_indicator_line_height(3.0);
    control.set_indicator_line_color(Color::from_rgb8(255, 59, 48));
    control.set_bounds(Rect::new(0.0, 0.0, 320.0, 44.0));
    control.select(1, false);
    control
}

/// Filled box behind the selection, separators between segments.
fn boxed_bar() -> SegmentedControl {
    let mut control = SegmentedControl::with_titles(["Day", "Week", "Month", "Year"]);
    control.set_segment_width(70.0);
    control.set_separator_inset(SeparatorInset::new(6.0, 1.0, 6.0));
    control.set_separator_color(Color::LIGHT_GRAY);
    control.set_indicator_line_height(0.0);
    control.set_indicator_box_color(Color::from_rgb8(0, 122, 255));
    control.set_indicator_box_opacity(0.15);
    control.set_corner_radius(8.0);
    control.set_border_width(1.0);
    control.set_border_color(Color::LIGHT_GRAY);
    control.set_bounds(Rect::new(0.0, 0.0, 283.0, 36.0));
    control
}

/// Icon segments with the title under the image.
fn image_bar() -> SegmentedControl {
    let mut control = SegmentedControl::new();
    control.set_segment_edge_insets(EdgeInsets::uniform(4.0));
    for name in ["films", "series", "music"] {
        control
            .append_image(Image::named(name, Size::new(24.0, 24.0)))
            .set_title(name)
            .set_image_position(ImagePosition::Top)
            .set_padding(2.0);
    }
    control.layout();
    control.set_bounds(Rect::new(0.0, 0.0, 320.0, 56.0));
    control.select(2, false);
    control
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tidebar=info".into()),
        )
        .init();

    dump("underline", &underline_bar());
    dump("boxed", &boxed_bar());
    dump("images", &image_bar());
}
