//! Radial text reveal
//!
//! Reveals a laid-out block of text glyph by glyph in order of increasing
//! Euclidean distance from a wavefront origin (top-center by default), with a
//! shimmering band trailing the reveal edge. The renderer is a pure function
//! of its inputs: the host advances `elapsed` and re-invokes [`TextRevealRenderer::draw`]
//! once per frame.
//!
//! Geometry is normalized line/column grid space, not physical pixels, so
//! blocks with uneven aspect ratios reveal elliptically in physical units.

use glimmer_animation::{progress, smoothstep};
use glimmer_core::{Color, DrawContext, DrawContextExt, Filter};
use glimmer_text::{LayoutMetrics, MetricsCache, RevealOrigin, TextLayout};

/// Width of the reveal transition edge, in normalized radius units.
///
/// Also the overshoot added to the final radius so every glyph reaches full
/// opacity slightly before progress 1 would otherwise allow, compensating for
/// the smoothstep falloff.
const SOFTNESS: f32 = 0.12;

/// Band width of the ring-edge highlight
const RING_WIDTH: f32 = 0.10;
const RING_MAX_OPACITY: f32 = 0.45;
const RING_BLUR: f32 = 0.6;

/// The glint ring travels this much faster than the wavefront, lapping it
const GLINT_SPEED: f32 = 1.6;
const GLINT_BAND_FACTOR: f32 = 0.45;
const GLINT_MAX_OPACITY: f32 = 0.35;
const GLINT_BLUR: f32 = 0.8;

/// Wavefront shimmer parameters
#[derive(Clone, Copy, Debug)]
pub struct ShimmerStyle {
    /// Thickness of the bright band at the front (in normalized radius)
    pub band: f32,
    /// Peak opacity of the shimmer
    pub max_opacity: f32,
    /// Blur radius of the shimmer copy
    pub blur: f32,
    /// Temporal pulse frequency in radians per second
    pub pulse_speed: f32,
}

impl Default for ShimmerStyle {
    fn default() -> Self {
        Self {
            band: 0.12,
            max_opacity: 0.7,
            blur: 0.6,
            pulse_speed: 8.0,
        }
    }
}

/// Per-glyph radial reveal renderer.
///
/// Construct one per frame with the current elapsed time and draw. Progress
/// is a linear time mapping — deliberately un-eased to avoid cubic bounce
/// overshoot at the wavefront.
#[derive(Clone, Copy, Debug)]
pub struct TextRevealRenderer {
    /// Seconds since the reveal started
    pub elapsed: f32,
    /// Total reveal duration in seconds; 0 means fully revealed
    pub total_duration: f32,
    /// Second, faster-moving highlight ring
    pub enable_glint: bool,
    /// Subtle wide highlight at the reveal frontier
    pub show_ring_edge: bool,
    /// Shimmer band styling
    pub shimmer: ShimmerStyle,
    /// Wavefront origin in normalized layout space
    pub origin: RevealOrigin,
}

impl TextRevealRenderer {
    pub fn new(elapsed: f32, total_duration: f32) -> Self {
        Self {
            elapsed,
            total_duration,
            enable_glint: false,
            show_ring_edge: true,
            shimmer: ShimmerStyle::default(),
            origin: RevealOrigin::TOP_CENTER,
        }
    }

    pub fn glint(mut self, enable: bool) -> Self {
        self.enable_glint = enable;
        self
    }

    pub fn ring_edge(mut self, show: bool) -> Self {
        self.show_ring_edge = show;
        self
    }

    pub fn shimmer(mut self, shimmer: ShimmerStyle) -> Self {
        self.shimmer = shimmer;
        self
    }

    pub fn origin(mut self, origin: RevealOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Normalized progress of this frame
    pub fn progress(&self) -> f32 {
        progress(self.elapsed, self.total_duration)
    }

    /// Draw one frame, measuring the layout in place.
    ///
    /// Measurement walks every glyph; hosts that redraw the same layout many
    /// frames in a row should prefer [`draw_cached`](Self::draw_cached).
    pub fn draw(&self, layout: &TextLayout, ctx: &mut dyn DrawContext) {
        let metrics = LayoutMetrics::measure(layout, self.origin);
        self.draw_with_metrics(layout, &metrics, ctx);
    }

    /// Draw one frame using (and populating) a metrics cache
    pub fn draw_cached(
        &self,
        layout: &TextLayout,
        cache: &mut MetricsCache,
        ctx: &mut dyn DrawContext,
    ) {
        let metrics = cache.get_or_measure(layout, self.origin);
        self.draw_with_metrics(layout, &metrics, ctx);
    }

    fn draw_with_metrics(
        &self,
        layout: &TextLayout,
        metrics: &LayoutMetrics,
        ctx: &mut dyn DrawContext,
    ) {
        if layout.is_empty() {
            return;
        }

        let t = self.progress();
        let radius = t * (metrics.max_dist + SOFTNESS);
        let pulse = 0.85 + 0.15 * (self.elapsed * self.shimmer.pulse_speed).sin();
        let glint_radius = (t * GLINT_SPEED).rem_euclid(1.0) * metrics.max_dist;

        for (line, col, slice) in layout.iter_grid() {
            let dist = metrics.distance(self.origin, line, col);

            // Base pass: opacity ramps 0 -> 1 across [radius - softness, radius]
            let edge = smoothstep(radius - SOFTNESS, radius, dist);
            ctx.with_opacity(1.0 - edge, |c| c.draw_glyph(slice));

            // White shimmering highlight right at the wavefront
            let delta = (dist - radius).abs();
            if delta < self.shimmer.band {
                let falloff = 1.0 - delta / self.shimmer.band;
                let strength = falloff.clamp(0.0, 1.0) * pulse;
                ctx.with_opacity(strength * self.shimmer.max_opacity, |c| {
                    c.with_filter(Filter::color_multiply(Color::WHITE), |c| {
                        c.with_filter(Filter::blur(self.shimmer.blur), |c| c.draw_glyph(slice));
                    });
                });
            }

            // Faint wider ring at the reveal edge
            if self.show_ring_edge {
                let ring = (1.0 - delta / RING_WIDTH).max(0.0);
                if ring > 0.001 {
                    ctx.with_opacity(ring * RING_MAX_OPACITY, |c| {
                        c.with_filter(Filter::color_multiply(Color::WHITE), |c| {
                            c.with_filter(Filter::blur(RING_BLUR), |c| c.draw_glyph(slice));
                        });
                    });
                }
            }

            // Tighter, faster ring that can lap the wavefront
            if self.enable_glint {
                let g_delta = (dist - glint_radius).abs();
                let g_ring = (1.0 - g_delta / (RING_WIDTH * GLINT_BAND_FACTOR)).max(0.0);
                if g_ring > 0.001 {
                    ctx.with_opacity(g_ring * GLINT_MAX_OPACITY, |c| {
                        c.with_filter(Filter::color_multiply(Color::WHITE), |c| {
                            c.with_filter(Filter::blur(GLINT_BLUR), |c| c.draw_glyph(slice));
                        });
                    });
                }
            }
        }
    }
}
