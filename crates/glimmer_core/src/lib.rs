//! Glimmer Core
//!
//! Foundational vocabulary for the Glimmer effects library:
//!
//! - **Geometry**: points, sizes, rects, corner radii
//! - **Color**: linear RGBA, gradients with direct stop sampling, brushes
//! - **Draw Context**: the immediate-mode seam a host framework implements,
//!   plus a recording implementation for tests and command replay
//!
//! Glimmer computes per-frame draw instructions for text and control
//! decorations; everything that owns pixels (layout, shaping, rasterization,
//! the frame loop) stays on the host side of [`DrawContext`].
//!
//! # Example
//!
//! ```rust
//! use glimmer_core::{Brush, Color, CornerRadius, DrawContext, Rect, RecordingContext};
//!
//! let mut ctx = RecordingContext::new();
//! ctx.push_opacity(0.5);
//! ctx.fill_rect(
//!     Rect::new(0.0, 0.0, 200.0, 15.0),
//!     CornerRadius::uniform(2.0),
//!     Brush::Solid(Color::GRAY.with_alpha(0.25)),
//! );
//! ctx.pop_opacity();
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{sample_stops, Brush, Color, Gradient, GradientStop};
pub use draw::{
    DrawCommand, DrawContext, DrawContextExt, Filter, FilterSet, GlyphSlice, RecordingContext,
    Shadow, Stroke,
};
pub use geometry::{CornerRadius, Point, Rect, Size};
