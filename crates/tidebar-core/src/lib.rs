//! Core systems for Tidebar.
//!
//! This crate provides the foundation the widget layer is built on:
//!
//! - **Geometry**: points, sizes, rectangles, edge insets, colors
//! - **Signal/Slot System**: type-safe widget notifications
//! - **Text Metrics**: render-agnostic text measurement
//!
//! # Signal Example
//!
//! ```
//! use tidebar_core::Signal;
//!
//! let value_changed = Signal::<usize>::new();
//!
//! let conn_id = value_changed.connect(|&index| {
//!     println!("selected: {index}");
//! });
//!
//! value_changed.emit(1);
//! value_changed.disconnect(conn_id).unwrap();
//! ```

pub mod error;
pub mod signal;
pub mod text;
pub mod types;

pub use error::{Result, SignalError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use text::{BoxMetrics, Font, FontFamily, TextMetrics, measure_text};
pub use types::{Color, EdgeInsets, Point, Rect, Size};

static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);
static_assertions::assert_impl_all!(Rect: Copy, Send, Sync);
