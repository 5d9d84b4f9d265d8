//! Color, gradients, and brushes
//!
//! Colors are linear-space RGBA. Gradients carry sorted stop lists and can be
//! sampled directly with [`Gradient::color_at`] — the fallback path for hosts
//! without a native gradient-mask primitive, where effects tint individual
//! glyphs instead.

use crate::geometry::Point;

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const INDIGO: Color = Color::rgb(0.29, 0.0, 0.51);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from hue/saturation/brightness.
    ///
    /// `hue` wraps into [0,1); saturation and brightness are clamped. Drifting
    /// palettes (screen glow) generate their colors through this.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = brightness.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgb(r + m, g + m, b + m)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Gradient stop
#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }

    /// Build a stop list with the given colors spaced evenly over [0,1]
    pub fn evenly_spaced(colors: &[Color]) -> Vec<GradientStop> {
        let n = colors.len();
        match n {
            0 => Vec::new(),
            1 => vec![GradientStop::new(0.0, colors[0])],
            _ => colors
                .iter()
                .enumerate()
                .map(|(i, &c)| GradientStop::new(i as f32 / (n - 1) as f32, c))
                .collect(),
        }
    }
}

/// Sample a sorted stop list at a normalized offset.
///
/// `t` is clamped to [0,1]; between stops the color is linearly interpolated.
/// Returns black for an empty list. Effects that tint glyphs sample stop
/// lists directly instead of constructing a positioned gradient.
pub fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    if stops.is_empty() {
        return Color::BLACK;
    }

    let t = t.clamp(0.0, 1.0);
    if t <= stops[0].offset {
        return stops[0].color;
    }

    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.offset {
            let span = hi.offset - lo.offset;
            if span <= f32::EPSILON {
                return hi.color;
            }
            let local = (t - lo.offset) / span;
            return Color::lerp(&lo.color, &hi.color, local);
        }
    }

    stops[stops.len() - 1].color
}

/// Gradient type
#[derive(Clone, Debug)]
pub enum Gradient {
    /// Linear gradient between two points
    Linear {
        /// Start point
        start: Point,
        /// End point
        end: Point,
        /// Color stops (sorted by offset)
        stops: Vec<GradientStop>,
    },
    /// Conic/angular gradient around a center point
    Conic {
        /// Center point
        center: Point,
        /// Start angle in radians
        angle: f32,
        /// Color stops (sorted by offset)
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a simple linear gradient with two colors
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Create a linear gradient with evenly spaced colors
    pub fn linear_sweep(start: Point, end: Point, colors: &[Color]) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: GradientStop::evenly_spaced(colors),
        }
    }

    /// Create a linear gradient with explicit stops
    pub fn linear_with_stops(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Gradient::Linear { start, end, stops }
    }

    /// Create a conic gradient with evenly spaced colors
    pub fn conic(center: Point, angle: f32, colors: &[Color]) -> Self {
        Gradient::Conic {
            center,
            angle,
            stops: GradientStop::evenly_spaced(colors),
        }
    }

    /// Get the gradient stops
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Conic { stops, .. } => stops,
        }
    }

    /// Rotate a conic gradient to a new angle; no-op for linear gradients
    pub fn with_angle(mut self, new_angle: f32) -> Self {
        if let Gradient::Conic { angle, .. } = &mut self {
            *angle = new_angle;
        }
        self
    }

    /// Sample the stop list at a normalized offset (see [`sample_stops`])
    pub fn color_at(&self, t: f32) -> Color {
        sample_stops(self.stops(), t)
    }
}

/// Brush for filling shapes
#[derive(Clone, Debug)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x3b82f6);
        assert!((c.r - 0x3b as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0x82 as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0xf6 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hsb_primaries() {
        let red = Color::from_hsb(0.0, 1.0, 1.0);
        assert!((red.r - 1.0).abs() < 1e-5 && red.g < 1e-5 && red.b < 1e-5);

        let green = Color::from_hsb(1.0 / 3.0, 1.0, 1.0);
        assert!(green.g > 0.99 && green.r < 1e-4);

        let blue = Color::from_hsb(2.0 / 3.0, 1.0, 1.0);
        assert!(blue.b > 0.99 && blue.g < 1e-4);
    }

    #[test]
    fn test_from_hsb_wraps_hue() {
        let a = Color::from_hsb(0.25, 0.8, 1.0);
        let b = Color::from_hsb(1.25, 0.8, 1.0);
        assert!((a.r - b.r).abs() < 1e-5);
        assert!((a.g - b.g).abs() < 1e-5);
        assert!((a.b - b.b).abs() < 1e-5);
    }

    #[test]
    fn test_color_lerp_clamps() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        let over = Color::lerp(&Color::BLACK, &Color::WHITE, 2.0);
        assert_eq!(over, Color::WHITE);
    }

    #[test]
    fn test_gradient_color_at_endpoints() {
        let g = Gradient::linear(Point::ZERO, Point::new(1.0, 0.0), Color::RED, Color::BLUE);
        assert_eq!(g.color_at(-1.0), Color::RED);
        assert_eq!(g.color_at(0.0), Color::RED);
        assert_eq!(g.color_at(1.0), Color::BLUE);
        assert_eq!(g.color_at(2.0), Color::BLUE);
    }

    #[test]
    fn test_gradient_color_at_interpolates() {
        let g = Gradient::linear(Point::ZERO, Point::new(1.0, 0.0), Color::BLACK, Color::WHITE);
        let mid = g.color_at(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_linear_sweep_spacing() {
        let g = Gradient::linear_sweep(
            Point::ZERO,
            Point::new(0.0, 1.0),
            &[Color::RED, Color::GREEN, Color::BLUE],
        );
        let stops = g.stops();
        assert_eq!(stops.len(), 3);
        assert!((stops[1].offset - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_conic_with_angle() {
        let g = Gradient::conic(Point::ZERO, 0.0, &[Color::RED, Color::BLUE]).with_angle(1.5);
        match g {
            Gradient::Conic { angle, .. } => assert!((angle - 1.5).abs() < 1e-6),
            _ => panic!("expected conic"),
        }
    }
}
