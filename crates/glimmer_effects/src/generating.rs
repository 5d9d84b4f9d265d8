//! Generating-text choreography
//!
//! The `is_generating` state machine behind skeleton placeholders: while
//! generating, the placeholder shows with its spectral sweep; when generation
//! completes, the block stretches and settles on springs while the real
//! content is revealed — either by the radial reveal with a synced end
//! shimmer, or by a one-shot spectral sweep over the content.
//!
//! The component owns transition state only. The host ticks it with frame
//! delta time, reads the visual transform (`scale_y`, `offset_y`,
//! `content_opacity`) to place its own content, and calls [`GeneratingText::paint`]
//! for the decoration pass.

use glimmer_animation::{Phase, RevealClock, Spring, SpringConfig};
use glimmer_core::{DrawContext, Rect};
use glimmer_text::TextLayout;

use crate::gradient_text::{highlight_band_stops, paint_glyph_sweep};
use crate::reveal::TextRevealRenderer;
use crate::skeleton::{spectral_stops, sweep_offset, SkeletonStyle};

/// How finished content is brought in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Radial per-glyph reveal plus a synced top-to-bottom end shimmer
    #[default]
    RadialReveal,
    /// One-shot spectral sweep over the finished content
    SweepShimmer,
}

/// Component states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratingState {
    /// Placeholder visible, sweep looping
    Generating,
    /// Content revealing after generation finished
    Revealing,
    /// Content fully shown, no animation
    Settled,
}

/// Seconds between the stretch beat and the relaxation beat
const RELAX_DELAY: f32 = 0.18;

/// Skeleton placeholder with generation-complete reveal choreography
#[derive(Clone, Debug)]
pub struct GeneratingText {
    style: SkeletonStyle,
    mode: RevealMode,
    /// Reveal duration in seconds once generation completes
    reveal_duration: f32,
    state: GeneratingState,
    sweep: Phase,
    reveal: RevealClock,
    stretch: Spring,
    jump: Spring,
    relax_after: f32,
}

impl GeneratingText {
    pub fn new(style: SkeletonStyle) -> Self {
        let sweep = Phase::new(style.sweep_period);
        Self {
            style,
            mode: RevealMode::default(),
            reveal_duration: 0.8,
            state: GeneratingState::Settled,
            sweep,
            reveal: RevealClock::new(),
            stretch: Spring::new(SpringConfig::emergence(), 1.0),
            jump: Spring::new(SpringConfig::emergence(), 0.0),
            relax_after: 0.0,
        }
    }

    pub fn mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        // The sweep treatment runs slightly longer than the radial reveal
        self.reveal_duration = match mode {
            RevealMode::RadialReveal => 0.8,
            RevealMode::SweepShimmer => 0.9,
        };
        self
    }

    pub fn reveal_duration(mut self, seconds: f32) -> Self {
        self.reveal_duration = seconds.max(0.0);
        self
    }

    pub fn state(&self) -> GeneratingState {
        self.state
    }

    pub fn style(&self) -> &SkeletonStyle {
        &self.style
    }

    /// Flip the generating flag, triggering transition choreography.
    ///
    /// Repeated calls with the current value are no-ops.
    pub fn set_generating(&mut self, generating: bool) {
        match (self.state, generating) {
            (GeneratingState::Generating, true) => {}
            (_, true) => {
                tracing::debug!("generating text: enter generating");
                self.state = GeneratingState::Generating;
                self.sweep.reset();
                self.reveal.cancel();
                // Emergence: slight squash and upward jump into place
                self.stretch.set_config(SpringConfig::emergence());
                self.stretch.set_immediate(0.96);
                self.stretch.set_target(1.08);
                self.jump.set_config(SpringConfig::emergence());
                self.jump.set_immediate(20.0);
                self.jump.set_target(0.0);
                self.relax_after = RELAX_DELAY;
            }
            (GeneratingState::Generating, false) => {
                tracing::debug!(mode = ?self.mode, "generating text: generation complete");
                self.state = GeneratingState::Revealing;
                self.reveal.start();
                // Same stretch beat for a consistent feel on the way out
                self.stretch.set_config(SpringConfig::emergence());
                self.stretch.set_immediate(1.0);
                self.stretch.set_target(1.08);
                self.jump.set_config(SpringConfig::emergence());
                self.jump.set_immediate(20.0);
                self.jump.set_target(0.0);
                self.relax_after = RELAX_DELAY;
            }
            (_, false) => {}
        }
    }

    /// Advance clocks and springs by frame delta time in seconds
    pub fn tick(&mut self, dt: f32) {
        if self.state == GeneratingState::Generating {
            self.sweep.advance(dt);
        }
        self.reveal.tick(dt);
        self.stretch.step(dt);
        self.jump.step(dt);

        if self.relax_after > 0.0 {
            self.relax_after -= dt;
            if self.relax_after <= 0.0 {
                self.stretch.set_config(SpringConfig::settle());
                self.stretch.set_target(1.0);
            }
        }

        if self.state == GeneratingState::Revealing && self.reveal.is_finished(self.reveal_duration)
        {
            tracing::debug!("generating text: settled");
            self.state = GeneratingState::Settled;
            self.reveal.cancel();
        }
    }

    /// Vertical scale the host applies to the whole block (anchored at top)
    pub fn scale_y(&self) -> f32 {
        self.stretch.value()
    }

    /// Vertical offset the host applies to the whole block
    pub fn offset_y(&self) -> f32 {
        self.jump.value()
    }

    /// Opacity for the host's own content pass.
    ///
    /// Zero while the placeholder is up; during the radial reveal the content
    /// is drawn entirely by [`paint`](Self::paint), so the host's pass stays
    /// hidden until the animation settles.
    pub fn content_opacity(&self) -> f32 {
        match (self.state, self.mode) {
            (GeneratingState::Generating, _) => 0.0,
            (GeneratingState::Revealing, RevealMode::RadialReveal) => 0.0,
            _ => 1.0,
        }
    }

    /// Paint the decoration for this frame.
    ///
    /// `bounds` is the content block's rect; `layout` its shaped text (used
    /// by the reveal treatments; ignored while the placeholder is up).
    pub fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect, layout: &TextLayout) {
        match self.state {
            GeneratingState::Generating => {
                self.style
                    .paint(ctx, bounds, sweep_offset(self.sweep.value()));
            }
            GeneratingState::Revealing => {
                let progress = self.reveal.progress(self.reveal_duration);
                match self.mode {
                    RevealMode::RadialReveal => {
                        TextRevealRenderer::new(self.reveal.elapsed(), self.reveal_duration)
                            .draw(layout, ctx);
                        // One-shot white band synced to the reveal, top to bottom
                        let band_offset = -1.0 + 2.0 * progress;
                        paint_glyph_sweep(
                            ctx,
                            layout,
                            bounds,
                            &highlight_band_stops(),
                            band_offset,
                        );
                    }
                    RevealMode::SweepShimmer => {
                        let band_offset = -1.0 + 2.0 * progress;
                        paint_glyph_sweep(ctx, layout, bounds, &spectral_stops(), band_offset);
                    }
                }
            }
            GeneratingState::Settled => {}
        }
    }
}

impl Default for GeneratingText {
    fn default() -> Self {
        Self::new(SkeletonStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_core::{DrawCommand, RecordingContext};

    fn ticked(component: &mut GeneratingText, seconds: f32) {
        let steps = (seconds / (1.0 / 60.0)).ceil() as usize;
        for _ in 0..steps {
            component.tick(1.0 / 60.0);
        }
    }

    fn layout() -> TextLayout {
        TextLayout::monospace("hello world\ngoodbye", 8.0, 14.0)
    }

    #[test]
    fn test_starts_settled() {
        let component = GeneratingText::default();
        assert_eq!(component.state(), GeneratingState::Settled);
        assert_eq!(component.content_opacity(), 1.0);
    }

    #[test]
    fn test_enter_generating_hides_content_and_jumps() {
        let mut component = GeneratingText::default();
        component.set_generating(true);
        assert_eq!(component.state(), GeneratingState::Generating);
        assert_eq!(component.content_opacity(), 0.0);
        assert_eq!(component.offset_y(), 20.0);
        assert!((component.scale_y() - 0.96).abs() < 1e-5);
    }

    #[test]
    fn test_emergence_settles_back_to_rest() {
        let mut component = GeneratingText::default();
        component.set_generating(true);
        ticked(&mut component, 2.0);
        assert!((component.scale_y() - 1.0).abs() < 0.02);
        assert!(component.offset_y().abs() < 0.1);
    }

    #[test]
    fn test_generating_paints_placeholder() {
        let mut component = GeneratingText::default();
        component.set_generating(true);
        component.tick(0.1);

        let mut ctx = RecordingContext::new();
        component.paint(&mut ctx, Rect::new(0.0, 0.0, 200.0, 61.0), &layout());
        assert!(ctx
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::FillRect { .. })));
        assert_eq!(ctx.glyphs().count(), 0);
    }

    #[test]
    fn test_finish_runs_radial_reveal_then_settles() {
        let mut component = GeneratingText::default();
        component.set_generating(true);
        ticked(&mut component, 0.5);
        component.set_generating(false);
        assert_eq!(component.state(), GeneratingState::Revealing);
        assert_eq!(component.content_opacity(), 0.0);

        component.tick(0.4);
        let mut ctx = RecordingContext::new();
        component.paint(&mut ctx, Rect::new(0.0, 0.0, 88.0, 28.0), &layout());
        assert!(ctx.glyphs().count() > 0, "reveal should draw glyphs");

        ticked(&mut component, 1.0);
        assert_eq!(component.state(), GeneratingState::Settled);
        assert_eq!(component.content_opacity(), 1.0);

        let mut ctx = RecordingContext::new();
        component.paint(&mut ctx, Rect::new(0.0, 0.0, 88.0, 28.0), &layout());
        assert!(ctx.commands().is_empty(), "settled paints nothing");
    }

    #[test]
    fn test_sweep_mode_keeps_content_visible() {
        let mut component = GeneratingText::default().mode(RevealMode::SweepShimmer);
        component.set_generating(true);
        component.tick(0.1);
        component.set_generating(false);
        assert_eq!(component.content_opacity(), 1.0);

        component.tick(0.45);
        let mut ctx = RecordingContext::new();
        component.paint(&mut ctx, Rect::new(0.0, 0.0, 88.0, 28.0), &layout());
        // Spectral tints over the content, no base glyph pass
        assert!(ctx.glyphs().count() > 0);
        assert!(ctx.base_glyphs().count() == 0);
    }

    #[test]
    fn test_redundant_set_generating_is_noop() {
        let mut component = GeneratingText::default();
        component.set_generating(true);
        ticked(&mut component, 0.3);
        let scale = component.scale_y();
        component.set_generating(true);
        assert_eq!(component.scale_y(), scale);
        component.set_generating(false);
        component.set_generating(false);
        assert_eq!(component.state(), GeneratingState::Revealing);
    }
}
