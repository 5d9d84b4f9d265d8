//! Gradient text and flowing text glow
//!
//! Hosts without a native gradient-mask primitive get the same look by
//! tinting glyphs individually: sample a stop list at the glyph's normalized
//! position and draw a color-multiplied copy. The flowing variants translate
//! the sampled band across the block with a looping phase.

use glimmer_core::{
    sample_stops, Color, DrawContext, DrawContextExt, Filter, GradientStop, Rect,
};
use glimmer_text::TextLayout;

/// The static intelligence gradient: orange through pink to blue
pub fn intelligence_stops() -> Vec<GradientStop> {
    GradientStop::evenly_spaced(&[
        Color::rgb(1.0, 0.45, 0.22),
        Color::rgb(0.91, 0.22, 0.62),
        Color::rgb(0.36, 0.56, 1.0),
    ])
}

/// Paint a layout with a horizontal gradient sampled per glyph.
///
/// Each glyph is tinted with the stop color at its normalized x position
/// within `bounds`.
pub fn paint_gradient_text(
    ctx: &mut dyn DrawContext,
    layout: &TextLayout,
    bounds: Rect,
    stops: &[GradientStop],
) {
    if bounds.width() <= 0.0 {
        return;
    }
    for (_, _, slice) in layout.iter_grid() {
        let t = (slice.bounds.center().x - bounds.x()) / bounds.width();
        let color = sample_stops(stops, t);
        ctx.with_opacity(color.a, |c| {
            c.with_filter(Filter::color_multiply(color.with_alpha(1.0)), |c| {
                c.draw_glyph(slice);
            });
        });
    }
}

/// Paint a vertical band sweep over a layout's glyphs.
///
/// The stop list occupies the normalized span `[band_offset, band_offset + 1]`
/// over the block's height; each glyph samples the band at its own vertical
/// position. Glyphs outside the band pick up the (typically transparent) end
/// stops and are skipped. Driving `band_offset` from -1 to 1 sweeps the band
/// top to bottom; 1 to -1 sweeps bottom to top.
pub fn paint_glyph_sweep(
    ctx: &mut dyn DrawContext,
    layout: &TextLayout,
    bounds: Rect,
    stops: &[GradientStop],
    band_offset: f32,
) {
    if bounds.height() <= 0.0 {
        return;
    }
    for (_, _, slice) in layout.iter_grid() {
        let yn = (slice.bounds.center().y - bounds.y()) / bounds.height();
        let t = yn - band_offset;
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        let color = sample_stops(stops, t);
        if color.a <= 0.001 {
            continue;
        }
        ctx.with_opacity(color.a, |c| {
            c.with_filter(Filter::color_multiply(color.with_alpha(1.0)), |c| {
                c.draw_glyph(slice);
            });
        });
    }
}

/// A clear-white-clear highlight band for one-shot and editing shimmers
pub fn highlight_band_stops() -> Vec<GradientStop> {
    GradientStop::evenly_spaced(&[
        Color::WHITE.with_alpha(0.0),
        Color::WHITE,
        Color::WHITE.with_alpha(0.0),
    ])
}

/// Flowing dim-band glow over otherwise bright text
#[derive(Clone, Debug)]
pub struct TextGlow {
    /// Stop colors for the flowing pattern; ends repeat while the band is
    /// off-screen
    pub colors: Vec<Color>,
    /// Seconds per full traversal
    pub period: f32,
}

impl Default for TextGlow {
    fn default() -> Self {
        let bright = Color::WHITE.with_alpha(0.6);
        let dim = Color::GRAY.with_alpha(0.1);
        Self {
            colors: vec![bright, bright, dim, dim, bright, bright],
            period: 2.0,
        }
    }
}

impl TextGlow {
    pub fn new(colors: Vec<Color>, period: f32) -> Self {
        Self { colors, period }
    }

    /// Paint one frame; `phase` in [0,1) from the host's looping clock.
    ///
    /// Horizontal analogue of [`paint_glyph_sweep`]: the pattern occupies
    /// `[offset, offset + 1]` in normalized x and travels right to left.
    pub fn paint(
        &self,
        ctx: &mut dyn DrawContext,
        layout: &TextLayout,
        bounds: Rect,
        phase: f32,
    ) {
        if bounds.width() <= 0.0 {
            return;
        }
        let stops = GradientStop::evenly_spaced(&self.colors);
        let offset = 1.0 - 2.0 * phase.clamp(0.0, 1.0);
        for (_, _, slice) in layout.iter_grid() {
            let xn = (slice.bounds.center().x - bounds.x()) / bounds.width();
            // Clamped sampling: the end stops hold while the band is away
            let color = sample_stops(&stops, xn - offset);
            if color.a <= 0.001 {
                continue;
            }
            ctx.with_opacity(color.a, |c| {
                c.with_filter(Filter::color_multiply(color.with_alpha(1.0)), |c| {
                    c.draw_glyph(slice);
                });
            });
        }
    }
}
