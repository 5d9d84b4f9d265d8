//! Indeterminate progress bar
//!
//! A slim capsule track with a glowing gradient window travelling edge to
//! edge. The window position is eased per cycle so it lingers at the ends the
//! way the reference control does.

use glimmer_animation::Easing;
use glimmer_core::{
    Brush, Color, CornerRadius, DrawContext, Gradient, GradientStop, Point, Rect, Shadow,
};

/// Styling for the indeterminate bar
#[derive(Clone, Debug)]
pub struct IndeterminateBar {
    /// Bar height (track and window)
    pub height: f32,
    /// Window width as a fraction of the track
    pub window_fraction: f32,
    /// Accent color of the window and glow
    pub accent: Color,
    /// Track opacity relative to the accent
    pub track_alpha: f32,
    /// Glow blur radius
    pub glow_blur: f32,
    /// Glow opacity relative to the accent
    pub glow_alpha: f32,
    /// Seconds per traversal
    pub period: f32,
}

impl Default for IndeterminateBar {
    fn default() -> Self {
        Self {
            height: 8.0,
            window_fraction: 0.3,
            accent: Color::from_hex(0x007aff),
            track_alpha: 0.15,
            glow_blur: 8.0,
            glow_alpha: 0.5,
            period: 1.2,
        }
    }
}

impl IndeterminateBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height.max(1.0);
        self
    }

    /// The window rect for a phase value in [0,1)
    pub fn window_rect(&self, bounds: Rect, phase: f32) -> Rect {
        let track = self.track_rect(bounds);
        let window_width = track.width() * self.window_fraction;
        let travel = (track.width() - window_width).max(0.0);
        let eased = Easing::EaseInOut.apply(phase.clamp(0.0, 1.0));
        Rect::new(
            track.x() + travel * eased,
            track.y(),
            window_width,
            track.height(),
        )
    }

    /// The full-width track rect, vertically centered in `bounds`
    pub fn track_rect(&self, bounds: Rect) -> Rect {
        let y = bounds.y() + (bounds.height() - self.height) / 2.0;
        Rect::new(bounds.x(), y, bounds.width(), self.height)
    }

    /// Paint one frame; `phase` in [0,1) from the host's looping clock
    pub fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect, phase: f32) {
        let track = self.track_rect(bounds);
        let radius = CornerRadius::capsule(self.height);

        ctx.fill_rect(
            track,
            radius,
            Brush::Solid(self.accent.with_alpha(self.track_alpha)),
        );

        let window = self.window_rect(bounds, phase);
        ctx.draw_shadow(
            window,
            radius,
            Shadow::glow(self.glow_blur, self.accent.with_alpha(self.glow_alpha)),
        );

        let dim = self.accent.with_alpha(0.2);
        let gradient = Gradient::linear_with_stops(
            Point::new(window.x(), window.center().y),
            Point::new(window.x() + window.width(), window.center().y),
            GradientStop::evenly_spaced(&[dim, self.accent, dim]),
        );
        ctx.fill_rect(window, radius, Brush::Gradient(gradient));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_core::{DrawCommand, RecordingContext};

    #[test]
    fn test_window_travels_full_range() {
        let bar = IndeterminateBar::default();
        let bounds = Rect::new(0.0, 0.0, 100.0, 8.0);

        let start = bar.window_rect(bounds, 0.0);
        let end = bar.window_rect(bounds, 1.0);
        assert_eq!(start.x(), 0.0);
        assert!((end.x() + end.width() - 100.0).abs() < 1e-3);
        assert!((start.width() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_window_eases_through_middle() {
        let bar = IndeterminateBar::default();
        let bounds = Rect::new(0.0, 0.0, 100.0, 8.0);
        // Ease-in-out is symmetric: the midpoint lands in the center
        let mid = bar.window_rect(bounds, 0.5);
        assert!((mid.center().x - 50.0).abs() < 1e-3);
        // And slow near the start
        let early = bar.window_rect(bounds, 0.1);
        assert!(early.x() < 70.0 * 0.1);
    }

    #[test]
    fn test_track_centered_in_tall_bounds() {
        let bar = IndeterminateBar::default();
        let track = bar.track_rect(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(track.y(), 16.0);
        assert_eq!(track.height(), 8.0);
    }

    #[test]
    fn test_paint_order_track_glow_window() {
        let bar = IndeterminateBar::default();
        let mut ctx = RecordingContext::new();
        bar.paint(&mut ctx, Rect::new(0.0, 0.0, 100.0, 8.0), 0.3);

        let kinds: Vec<&'static str> = ctx
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::FillRect { .. } => "fill",
                DrawCommand::Shadow { .. } => "shadow",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["fill", "shadow", "fill"]);
    }

    #[test]
    fn test_window_gradient_peaks_at_accent() {
        let bar = IndeterminateBar::default();
        let mut ctx = RecordingContext::new();
        bar.paint(&mut ctx, Rect::new(0.0, 0.0, 100.0, 8.0), 0.0);

        let gradient = ctx
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::FillRect {
                    brush: Brush::Gradient(g),
                    ..
                } => Some(g.clone()),
                _ => None,
            })
            .expect("window gradient");
        let center = gradient.color_at(0.5);
        let edge = gradient.color_at(0.0);
        assert!(center.a > edge.a);
    }
}
