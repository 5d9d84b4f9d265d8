//! Skeleton placeholder
//!
//! Rounded placeholder lines shown while content is being generated, with a
//! repeating spectral sweep travelling bottom to top. The sweep is a
//! nine-stop rainbow gradient at half opacity, clear at both ends, offset in
//! user space and masked to the lines by only ever filling the line rects.

use glimmer_core::{
    Brush, Color, CornerRadius, DrawContext, Gradient, GradientStop, Point, Rect,
};

/// Styling for skeleton placeholder lines
#[derive(Clone, Debug)]
pub struct SkeletonStyle {
    /// Number of placeholder lines (minimum 1)
    pub line_count: usize,
    /// Height of each line
    pub line_height: f32,
    /// Vertical gap between lines
    pub line_spacing: f32,
    /// Corner radius of each line
    pub corner_radius: f32,
    /// Base color of the lines
    pub placeholder_color: Color,
    /// Width of the last line as a fraction of the full width
    pub last_line_fraction: f32,
    /// Seconds per sweep cycle
    pub sweep_period: f32,
}

impl Default for SkeletonStyle {
    fn default() -> Self {
        Self {
            line_count: 3,
            line_height: 15.0,
            line_spacing: 8.0,
            corner_radius: 2.0,
            placeholder_color: Color::GRAY.with_alpha(0.25),
            last_line_fraction: 0.6,
            sweep_period: 1.2,
        }
    }
}

impl SkeletonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(mut self, count: usize) -> Self {
        self.line_count = count.max(1);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    /// Total height of the stacked lines
    pub fn content_height(&self) -> f32 {
        let count = self.line_count.max(1) as f32;
        count * self.line_height + (count - 1.0) * self.line_spacing
    }

    /// Line rects within `bounds`: full width except the last line
    pub fn line_rects(&self, bounds: Rect) -> Vec<Rect> {
        let count = self.line_count.max(1);
        (0..count)
            .map(|index| {
                let width_factor = if index == count - 1 {
                    self.last_line_fraction
                } else {
                    1.0
                };
                Rect::new(
                    bounds.x(),
                    bounds.y() + index as f32 * (self.line_height + self.line_spacing),
                    bounds.width() * width_factor,
                    self.line_height,
                )
            })
            .collect()
    }

    /// Paint one frame.
    ///
    /// `sweep_offset` is the sweep position in [-1,1]: the gradient spans one
    /// block height and is offset by `sweep_offset * height`, so driving it
    /// from 1 to -1 travels bottom to top. Use [`sweep_offset`] to derive it
    /// from a wrapping phase.
    pub fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect, sweep_offset: f32) {
        let radius = CornerRadius::uniform(self.corner_radius);
        let rects = self.line_rects(bounds);

        for rect in &rects {
            ctx.fill_rect(*rect, radius, Brush::Solid(self.placeholder_color));
        }

        let height = bounds.height().max(self.content_height());
        if height <= 0.0 {
            return;
        }
        let offset_y = sweep_offset * height;
        // Bottom-to-top gradient occupying one block height at the offset
        let start = Point::new(bounds.x(), bounds.y() + offset_y + height);
        let end = Point::new(bounds.x(), bounds.y() + offset_y);
        let sweep = Gradient::linear_with_stops(start, end, spectral_stops());

        for rect in &rects {
            ctx.fill_rect(*rect, radius, Brush::Gradient(sweep.clone()));
        }
    }
}

/// Map a wrapping phase value in [0,1) to a sweep offset travelling 1 -> -1
pub fn sweep_offset(phase: f32) -> f32 {
    1.0 - 2.0 * phase.clamp(0.0, 1.0)
}

/// The spectral sweep: rainbow at half opacity, clear at both ends
pub fn spectral_stops() -> Vec<GradientStop> {
    GradientStop::evenly_spaced(&[
        Color::TRANSPARENT,
        Color::RED.with_alpha(0.5),
        Color::ORANGE.with_alpha(0.5),
        Color::YELLOW.with_alpha(0.5),
        Color::GREEN.with_alpha(0.5),
        Color::BLUE.with_alpha(0.5),
        Color::INDIGO.with_alpha(0.5),
        Color::PURPLE.with_alpha(0.5),
        Color::TRANSPARENT,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_core::{DrawCommand, RecordingContext};

    #[test]
    fn test_line_rects_last_line_short() {
        let style = SkeletonStyle::default();
        let rects = style.line_rects(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].width(), 200.0);
        assert_eq!(rects[1].width(), 200.0);
        assert!((rects[2].width() - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_line_rects_spacing() {
        let style = SkeletonStyle::default();
        let rects = style.line_rects(Rect::new(0.0, 10.0, 200.0, 100.0));
        assert_eq!(rects[0].y(), 10.0);
        assert_eq!(rects[1].y(), 10.0 + 15.0 + 8.0);
    }

    #[test]
    fn test_line_count_floor() {
        let style = SkeletonStyle::default().line_count(0);
        assert_eq!(style.line_count, 1);
    }

    #[test]
    fn test_content_height() {
        let style = SkeletonStyle::default();
        assert!((style.content_height() - (3.0 * 15.0 + 2.0 * 8.0)).abs() < 1e-4);
    }

    #[test]
    fn test_paint_emits_base_and_sweep_per_line() {
        let style = SkeletonStyle::default();
        let mut ctx = RecordingContext::new();
        style.paint(&mut ctx, Rect::new(0.0, 0.0, 200.0, 61.0), 0.0);

        let fills: Vec<_> = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .collect();
        // 3 base fills + 3 gradient sweep fills
        assert_eq!(fills.len(), 6);

        let gradient_fills = ctx
            .commands()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::FillRect {
                        brush: Brush::Gradient(_),
                        ..
                    }
                )
            })
            .count();
        assert_eq!(gradient_fills, 3);
    }

    #[test]
    fn test_sweep_gradient_tracks_offset() {
        let style = SkeletonStyle::default();
        let bounds = Rect::new(0.0, 0.0, 200.0, 61.0);

        let gradient_start_y = |offset: f32| {
            let mut ctx = RecordingContext::new();
            style.paint(&mut ctx, bounds, offset);
            ctx.commands()
                .iter()
                .find_map(|c| match c {
                    DrawCommand::FillRect {
                        brush: Brush::Gradient(Gradient::Linear { start, .. }),
                        ..
                    } => Some(start.y),
                    _ => None,
                })
                .expect("sweep gradient")
        };

        let at_bottom = gradient_start_y(1.0);
        let centered = gradient_start_y(0.0);
        let at_top = gradient_start_y(-1.0);
        assert!(at_bottom > centered);
        assert!(centered > at_top);
    }

    #[test]
    fn test_sweep_offset_mapping() {
        assert_eq!(sweep_offset(0.0), 1.0);
        assert_eq!(sweep_offset(0.5), 0.0);
        assert_eq!(sweep_offset(1.0), -1.0);
    }

    #[test]
    fn test_spectral_stops_clear_ends() {
        let stops = spectral_stops();
        assert_eq!(stops.len(), 9);
        assert_eq!(stops[0].color.a, 0.0);
        assert_eq!(stops[8].color.a, 0.0);
        assert!(stops[1].color.a > 0.0);
    }
}
