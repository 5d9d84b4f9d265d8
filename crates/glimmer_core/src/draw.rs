//! Draw-context seam
//!
//! Glimmer never talks to a GPU or a window. Effects emit their output
//! through the [`DrawContext`] trait — the immediate-mode surface a host
//! framework implements on top of its own renderer. The contract is small on
//! purpose: rect fills/strokes, shadows, glyph draws, an opacity stack, and
//! the two filters the text effects need (color multiply and gaussian blur).
//!
//! [`RecordingContext`] is the reference implementation: it captures commands
//! with their *resolved* opacity and filter state, which is what the unit
//! tests (and hosts that replay command lists) consume.

use smallvec::SmallVec;

use crate::color::{Brush, Color};
use crate::geometry::{CornerRadius, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Glyphs
// ─────────────────────────────────────────────────────────────────────────────

/// One drawable unit of shaped text, addressable by line/column position.
///
/// Produced by the host's text-shaping system and never mutated here; the
/// renderer only reads it and hands it back through [`DrawContext::draw_glyph`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphSlice {
    /// Glyph ID in the host's font
    pub glyph_id: u16,
    /// Index in the original string (cluster)
    pub cluster: u32,
    /// Bounds in the host's coordinate space
    pub bounds: Rect,
}

impl GlyphSlice {
    pub fn new(glyph_id: u16, cluster: u32, bounds: Rect) -> Self {
        Self {
            glyph_id,
            cluster,
            bounds,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw state
// ─────────────────────────────────────────────────────────────────────────────

/// Per-draw filters applied to subsequent draw operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// Multiply every channel by the given color (white-out highlights)
    ColorMultiply(Color),
    /// Gaussian blur with the given radius
    Blur {
        /// Blur radius in logical pixels
        radius: f32,
    },
}

impl Filter {
    pub fn color_multiply(color: Color) -> Self {
        Self::ColorMultiply(color)
    }

    pub fn blur(radius: f32) -> Self {
        Self::Blur {
            radius: radius.max(0.0),
        }
    }
}

/// Stroke style for outlined shapes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self {
            width: width.max(0.0),
        }
    }
}

/// Drop shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color,
        }
    }

    /// Centered glow shadow (no offset)
    pub fn glow(blur: f32, color: Color) -> Self {
        Self::new(0.0, 0.0, blur, color)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DrawContext
// ─────────────────────────────────────────────────────────────────────────────

/// Immediate-mode drawing surface supplied by the host.
///
/// Opacity entries multiply with their parents; `push`/`pop` calls must be
/// balanced within a single draw pass. None of these operations can fail —
/// out-of-range values are clamped by implementations.
pub trait DrawContext {
    /// Push an opacity value (multiplied with parent)
    fn push_opacity(&mut self, opacity: f32);

    /// Pop the top opacity from the stack
    fn pop_opacity(&mut self);

    /// Get the current effective opacity
    fn current_opacity(&self) -> f32;

    /// Push a filter applied to subsequent draws (glyphs and shapes)
    fn push_filter(&mut self, filter: Filter);

    /// Pop the top filter from the stack
    fn pop_filter(&mut self);

    /// Fill a rounded rectangle
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush);

    /// Stroke a rounded rectangle
    fn stroke_rect(&mut self, rect: Rect, corner_radius: CornerRadius, stroke: Stroke, brush: Brush);

    /// Draw a drop shadow (renders outside the shape)
    fn draw_shadow(&mut self, rect: Rect, corner_radius: CornerRadius, shadow: Shadow);

    /// Draw one glyph slice with the current opacity and filters
    fn draw_glyph(&mut self, slice: &GlyphSlice);
}

/// Ergonomic scoped helpers for [`DrawContext`]
pub trait DrawContextExt: DrawContext {
    /// Run `f` with an extra opacity pushed, popping it afterwards
    fn with_opacity<F: FnOnce(&mut Self)>(&mut self, opacity: f32, f: F) {
        self.push_opacity(opacity);
        f(self);
        self.pop_opacity();
    }

    /// Run `f` with an extra filter pushed, popping it afterwards
    fn with_filter<F: FnOnce(&mut Self)>(&mut self, filter: Filter, f: F) {
        self.push_filter(filter);
        f(self);
        self.pop_filter();
    }
}

impl<T: DrawContext + ?Sized> DrawContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording context
// ─────────────────────────────────────────────────────────────────────────────

/// Filters active on a recorded glyph; two covers every effect's deepest stack
pub type FilterSet = SmallVec<[Filter; 2]>;

/// A draw command captured by [`RecordingContext`].
///
/// Opacity and filters are resolved at record time, so a command list can be
/// inspected (or replayed) without tracking stacks.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        corner_radius: CornerRadius,
        brush: Brush,
        opacity: f32,
        filters: FilterSet,
    },
    StrokeRect {
        rect: Rect,
        corner_radius: CornerRadius,
        stroke: Stroke,
        brush: Brush,
        opacity: f32,
        filters: FilterSet,
    },
    Shadow {
        rect: Rect,
        corner_radius: CornerRadius,
        shadow: Shadow,
        opacity: f32,
    },
    Glyph {
        slice: GlyphSlice,
        opacity: f32,
        filters: FilterSet,
    },
}

/// A draw context that records commands for inspection or later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    opacity_stack: Vec<f32>,
    filter_stack: Vec<Filter>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            opacity_stack: Vec::new(),
            filter_stack: Vec::new(),
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands and state
    pub fn clear(&mut self) {
        self.commands.clear();
        self.opacity_stack.clear();
        self.filter_stack.clear();
    }

    /// Iterate over recorded glyph commands as `(slice, opacity, filters)`
    pub fn glyphs(&self) -> impl Iterator<Item = (&GlyphSlice, f32, &FilterSet)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Glyph {
                slice,
                opacity,
                filters,
            } => Some((slice, *opacity, filters)),
            _ => None,
        })
    }

    /// Recorded glyph commands drawn with no filters (the base reveal pass)
    pub fn base_glyphs(&self) -> impl Iterator<Item = (&GlyphSlice, f32)> {
        self.glyphs()
            .filter(|(_, _, filters)| filters.is_empty())
            .map(|(slice, opacity, _)| (slice, opacity))
    }
}

impl DrawContext for RecordingContext {
    fn push_opacity(&mut self, opacity: f32) {
        self.opacity_stack.push(opacity.clamp(0.0, 1.0));
    }

    fn pop_opacity(&mut self) {
        if self.opacity_stack.pop().is_none() {
            tracing::warn!("pop_opacity on empty stack");
        }
    }

    fn current_opacity(&self) -> f32 {
        self.opacity_stack.iter().product()
    }

    fn push_filter(&mut self, filter: Filter) {
        self.filter_stack.push(filter);
    }

    fn pop_filter(&mut self) {
        if self.filter_stack.pop().is_none() {
            tracing::warn!("pop_filter on empty stack");
        }
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        let opacity = self.current_opacity();
        let filters: FilterSet = self.filter_stack.iter().copied().collect();
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            brush,
            opacity,
            filters,
        });
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        corner_radius: CornerRadius,
        stroke: Stroke,
        brush: Brush,
    ) {
        let opacity = self.current_opacity();
        let filters: FilterSet = self.filter_stack.iter().copied().collect();
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            corner_radius,
            stroke,
            brush,
            opacity,
            filters,
        });
    }

    fn draw_shadow(&mut self, rect: Rect, corner_radius: CornerRadius, shadow: Shadow) {
        let opacity = self.current_opacity();
        self.commands.push(DrawCommand::Shadow {
            rect,
            corner_radius,
            shadow,
            opacity,
        });
    }

    fn draw_glyph(&mut self, slice: &GlyphSlice) {
        let opacity = self.current_opacity();
        let filters: FilterSet = self.filter_stack.iter().copied().collect();
        self.commands.push(DrawCommand::Glyph {
            slice: *slice,
            opacity,
            filters,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice() -> GlyphSlice {
        GlyphSlice::new(7, 0, Rect::new(0.0, 0.0, 8.0, 12.0))
    }

    #[test]
    fn test_opacity_stack_multiplies() {
        let mut ctx = RecordingContext::new();
        ctx.push_opacity(0.5);
        ctx.push_opacity(0.5);
        assert!((ctx.current_opacity() - 0.25).abs() < 1e-6);
        ctx.pop_opacity();
        assert!((ctx.current_opacity() - 0.5).abs() < 1e-6);
        ctx.pop_opacity();
        assert!((ctx.current_opacity() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_push_opacity_clamps() {
        let mut ctx = RecordingContext::new();
        ctx.push_opacity(3.0);
        assert_eq!(ctx.current_opacity(), 1.0);
        ctx.pop_opacity();
        ctx.push_opacity(-1.0);
        assert_eq!(ctx.current_opacity(), 0.0);
    }

    #[test]
    fn test_glyph_records_resolved_state() {
        let mut ctx = RecordingContext::new();
        ctx.push_opacity(0.5);
        ctx.push_filter(Filter::color_multiply(Color::WHITE));
        ctx.push_filter(Filter::blur(0.6));
        ctx.draw_glyph(&slice());
        ctx.pop_filter();
        ctx.pop_filter();
        ctx.pop_opacity();

        let (_, opacity, filters) = ctx.glyphs().next().expect("glyph recorded");
        assert!((opacity - 0.5).abs() < 1e-6);
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn test_base_glyphs_excludes_filtered() {
        let mut ctx = RecordingContext::new();
        ctx.draw_glyph(&slice());
        ctx.with_filter(Filter::color_multiply(Color::WHITE), |c| {
            c.draw_glyph(&slice());
        });
        assert_eq!(ctx.glyphs().count(), 2);
        assert_eq!(ctx.base_glyphs().count(), 1);
    }

    #[test]
    fn test_scoped_helpers_balance() {
        let mut ctx = RecordingContext::new();
        ctx.with_opacity(0.5, |c| {
            c.fill_rect(
                Rect::new(0.0, 0.0, 10.0, 10.0),
                CornerRadius::ZERO,
                Brush::Solid(Color::GRAY),
            );
        });
        assert_eq!(ctx.current_opacity(), 1.0);
        match &ctx.commands()[0] {
            DrawCommand::FillRect { opacity, .. } => assert!((opacity - 0.5).abs() < 1e-6),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
