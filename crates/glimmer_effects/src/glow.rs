//! Glow borders
//!
//! Two flavors of animated rainbow border. [`GlowBorder`] is the small-control
//! ring: a thin blurred conic stroke rotating at a fixed rate, layered over
//! soft shadows. [`ScreenGlow`] is the full-bounds treatment: three breathing
//! stroke layers over a palette of drifting hues, with an activation fade.

use std::f32::consts::{PI, TAU};

use glimmer_animation::Easing;
use glimmer_core::{
    Brush, Color, CornerRadius, DrawContext, DrawContextExt, Filter, Gradient, Rect, Shadow,
    Stroke,
};

/// The eight-color ring used by small-control glows; first color repeated at
/// the end so the conic sweep closes seamlessly
pub fn rainbow_ring() -> Vec<Color> {
    vec![
        Color::BLUE,
        Color::PURPLE,
        Color::RED,
        Color::ORANGE,
        Color::YELLOW,
        Color::GREEN,
        Color::CYAN,
        Color::BLUE,
    ]
}

/// Rotating rainbow ring for buttons, bubbles, and text fields
#[derive(Clone, Debug)]
pub struct GlowBorder {
    pub corner_radius: f32,
    pub line_width: f32,
    pub blur: f32,
    pub opacity: f32,
    pub colors: Vec<Color>,
    /// Seconds per full rotation
    pub rotation_period: f32,
}

impl Default for GlowBorder {
    fn default() -> Self {
        Self {
            corner_radius: 23.0,
            line_width: 2.0,
            blur: 5.0,
            opacity: 0.9,
            colors: rainbow_ring(),
            rotation_period: 4.0,
        }
    }
}

impl GlowBorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    /// Paint one frame; `phase` in [0,1) is the rotation phase
    pub fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect, phase: f32) {
        let radius = CornerRadius::uniform(self.corner_radius);

        ctx.draw_shadow(bounds, radius, Shadow::glow(3.0, Color::PURPLE.with_alpha(0.4)));
        ctx.draw_shadow(bounds, radius, Shadow::glow(3.0, Color::BLUE.with_alpha(0.3)));
        ctx.draw_shadow(bounds, radius, Shadow::glow(3.0, Color::WHITE.with_alpha(0.1)));

        let angle = phase.rem_euclid(1.0) * TAU;
        let gradient = Gradient::conic(bounds.center(), angle, &self.colors);
        ctx.with_opacity(self.opacity, |c| {
            c.with_filter(Filter::blur(self.blur), |c| {
                c.stroke_rect(
                    bounds,
                    radius,
                    Stroke::new(self.line_width),
                    Brush::Gradient(gradient),
                );
            });
        });
    }
}

/// One stroke pass of the screen glow
#[derive(Clone, Copy, Debug)]
struct GlowLayer {
    width: f32,
    blur: f32,
    opacity: f32,
}

/// Full-bounds border glow with drifting hues and an activation fade.
///
/// Owns only its activation state; the drift runs off the absolute time the
/// host passes to [`paint`](Self::paint), so an inactive glow costs nothing
/// and resumes in step when reactivated.
#[derive(Clone, Debug)]
pub struct ScreenGlow {
    /// Corner radius as a fraction of the smaller bounds dimension
    pub corner_radius_fraction: f32,
    /// Hue drift rate (phase = seconds * rate)
    pub drift_rate: f32,
    /// Seconds for the activation fade in/out
    pub fade_duration: f32,
    active: bool,
    fade: f32,
}

impl Default for ScreenGlow {
    fn default() -> Self {
        Self {
            corner_radius_fraction: 0.18,
            drift_rate: 0.25,
            fade_duration: 0.5,
            active: false,
            fade: 0.0,
        }
    }
}

impl ScreenGlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate or deactivate; the overlay fades over `fade_duration`
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            tracing::debug!(active, "screen glow");
        }
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the activation fade by frame delta time
    pub fn tick(&mut self, dt: f32) {
        let step = if self.fade_duration > 0.0 {
            dt.max(0.0) / self.fade_duration
        } else {
            1.0
        };
        self.fade = if self.active {
            (self.fade + step).min(1.0)
        } else {
            (self.fade - step).max(0.0)
        };
    }

    /// Current overlay opacity in [0,1]
    pub fn opacity(&self) -> f32 {
        Easing::EaseInOut.apply(self.fade)
    }

    /// The seven drifting hues for a drift phase
    pub fn drifting_colors(phase: f32) -> [Color; 7] {
        std::array::from_fn(|i| {
            let base = i as f32 / 6.0;
            let hue = base + (phase * 0.9 + base * TAU).sin() * 0.08;
            let saturation = 0.8 + 0.15 * (phase * 0.7 + base * PI).sin();
            Color::from_hsb(hue, saturation, 1.0)
        })
    }

    /// Paint one frame; `t` is absolute seconds from the host clock
    pub fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect, t: f32) {
        let overlay_opacity = self.opacity();
        if overlay_opacity <= 0.001 {
            return;
        }

        let phase = t * self.drift_rate;
        let mut colors = Self::drifting_colors(phase).to_vec();
        colors.push(colors[0]);

        let angle = ((phase * 1.2).sin() * 120.0 + 180.0).to_radians();
        let primary_opacity = 0.5 + 0.15 * (phase * 1.1 + PI / 4.0).sin();
        let secondary_opacity = 0.22 + 0.1 * (phase * 0.9 + PI / 3.0).sin();
        let tertiary_opacity = 0.12 + 0.05 * (phase * 0.7).sin();
        let tertiary_blur = 28.0 + ((phase * 0.8).sin() * 0.5 + 0.5) * 16.0;

        let radius =
            CornerRadius::uniform(bounds.size.min_dimension() * self.corner_radius_fraction);
        let gradient = Gradient::conic(bounds.center(), angle, &colors);

        let layers = [
            GlowLayer {
                width: 16.0,
                blur: 6.0,
                opacity: primary_opacity,
            },
            GlowLayer {
                width: 16.0,
                blur: 10.0,
                opacity: secondary_opacity,
            },
            GlowLayer {
                width: 40.0,
                blur: tertiary_blur,
                opacity: tertiary_opacity,
            },
        ];

        ctx.with_opacity(overlay_opacity, |c| {
            c.draw_shadow(bounds, radius, Shadow::glow(8.0, Color::PURPLE.with_alpha(0.2)));
            c.draw_shadow(bounds, radius, Shadow::glow(8.0, Color::BLUE.with_alpha(0.15)));
            c.draw_shadow(bounds, radius, Shadow::glow(8.0, Color::RED.with_alpha(0.12)));

            for layer in layers {
                c.with_opacity(layer.opacity, |c| {
                    c.with_filter(Filter::blur(layer.blur), |c| {
                        c.stroke_rect(
                            bounds,
                            radius,
                            Stroke::new(layer.width),
                            Brush::Gradient(gradient.clone()),
                        );
                    });
                });
            }
        });
    }
}
