//! Suggestion bubble
//!
//! A floating suggestion overlay: rounded body with a soft shadow and a
//! rotating glow ring, presented and dismissed with a spring scale/opacity
//! transition. A tap squeezes the bubble, springs back, and auto-dismisses —
//! the host runs its tap callback when [`SuggestionBubble::take_tapped`]
//! reports the acknowledge beat finished.

use glimmer_animation::{Spring, SpringConfig};
use glimmer_core::{Brush, Color, CornerRadius, DrawContext, DrawContextExt, Rect, Shadow};

use crate::glow::GlowBorder;

/// Bubble lifecycle states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleState {
    Hidden,
    Presenting,
    Presented,
    /// Tap acknowledged; squeezing before dismissal
    Acknowledging,
    Dismissing,
}

/// Seconds the tap squeeze holds before springing back
const ACK_HOLD: f32 = 0.12;
/// Tap squeeze scale
const ACK_SCALE: f32 = 0.92;

/// Floating suggestion bubble decoration
#[derive(Clone, Debug)]
pub struct SuggestionBubble {
    /// The suggestion text; laid out and drawn by the host
    pub suggestion: String,
    pub corner_radius: f32,
    /// Bubble surface color
    pub background: Color,
    pub shadow_blur: f32,
    /// Anchor offset from the decorated view's top-trailing corner
    pub anchor_offset: (f32, f32),
    glow: GlowBorder,
    state: BubbleState,
    /// 0 hidden, 1 presented; drives both scale and opacity
    presence: Spring,
    tap_scale: Spring,
    ack_timer: f32,
    tapped: bool,
}

impl SuggestionBubble {
    pub fn new(suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: suggestion.into(),
            corner_radius: 18.0,
            background: Color::WHITE.with_alpha(0.95),
            shadow_blur: 10.0,
            anchor_offset: (10.0, -50.0),
            glow: GlowBorder::default(),
            state: BubbleState::Hidden,
            presence: Spring::new(SpringConfig::presentation(), 0.0),
            tap_scale: Spring::new(SpringConfig::tap(), 1.0),
            ack_timer: 0.0,
            tapped: false,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn state(&self) -> BubbleState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != BubbleState::Hidden
    }

    /// Show the bubble
    pub fn present(&mut self) {
        if matches!(self.state, BubbleState::Hidden | BubbleState::Dismissing) {
            tracing::debug!("bubble: present");
            self.state = BubbleState::Presenting;
            self.presence.set_target(1.0);
            self.tap_scale.set_immediate(1.0);
        }
    }

    /// Hide the bubble without a tap
    pub fn dismiss(&mut self) {
        if matches!(self.state, BubbleState::Presenting | BubbleState::Presented) {
            tracing::debug!("bubble: dismiss");
            self.state = BubbleState::Dismissing;
            self.presence.set_target(0.0);
        }
    }

    /// Register a tap on the bubble body
    pub fn tap(&mut self) {
        if self.state == BubbleState::Presented || self.state == BubbleState::Presenting {
            tracing::debug!("bubble: tap");
            self.state = BubbleState::Acknowledging;
            self.tap_scale.set_config(SpringConfig::tap());
            self.tap_scale.set_target(ACK_SCALE);
            self.ack_timer = ACK_HOLD;
        }
    }

    /// True once per completed tap acknowledge; the host runs its callback
    pub fn take_tapped(&mut self) -> bool {
        std::mem::take(&mut self.tapped)
    }

    /// Advance springs and timers by frame delta time
    pub fn tick(&mut self, dt: f32) {
        self.presence.step(dt);
        self.tap_scale.step(dt);

        match self.state {
            BubbleState::Presenting => {
                if self.presence.is_settled() {
                    self.state = BubbleState::Presented;
                }
            }
            BubbleState::Acknowledging => {
                if self.ack_timer > 0.0 {
                    self.ack_timer -= dt;
                    if self.ack_timer <= 0.0 {
                        // Spring back, hand the tap to the host, and dismiss
                        self.tap_scale.set_config(SpringConfig::release());
                        self.tap_scale.set_target(1.0);
                        self.tapped = true;
                        self.state = BubbleState::Dismissing;
                        self.presence.set_target(0.0);
                    }
                }
            }
            BubbleState::Dismissing => {
                if self.presence.is_settled() && self.presence.value() < 0.02 {
                    self.state = BubbleState::Hidden;
                }
            }
            _ => {}
        }
    }

    /// Combined scale for the bubble body
    pub fn scale(&self) -> f32 {
        self.presence.value().clamp(0.0, 1.0) * self.tap_scale.value()
    }

    /// Current bubble opacity
    pub fn opacity(&self) -> f32 {
        self.presence.value().clamp(0.0, 1.0)
    }

    /// Paint the bubble decoration.
    ///
    /// `bounds` is the bubble body rect at rest (the host sizes it around the
    /// laid-out suggestion text); `glow_phase` drives the ring rotation.
    pub fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect, glow_phase: f32) {
        let opacity = self.opacity();
        if !self.is_visible() || opacity <= 0.001 {
            return;
        }

        let rect = bounds.scaled(self.scale());
        let radius = CornerRadius::uniform(self.corner_radius);

        ctx.with_opacity(opacity, |c| {
            c.draw_shadow(rect, radius, Shadow::glow(self.shadow_blur, Color::BLACK.with_alpha(0.33)));
            c.fill_rect(rect, radius, Brush::Solid(self.background));
            self.glow.paint(c, rect, glow_phase);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_core::{DrawCommand, RecordingContext};

    fn settle(bubble: &mut SuggestionBubble, seconds: f32) {
        let steps = (seconds * 60.0).ceil() as usize;
        for _ in 0..steps {
            bubble.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn test_hidden_paints_nothing() {
        let bubble = SuggestionBubble::new("How can I help?");
        let mut ctx = RecordingContext::new();
        bubble.paint(&mut ctx, Rect::new(0.0, 0.0, 160.0, 40.0), 0.0);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_present_reaches_full_presence() {
        let mut bubble = SuggestionBubble::new("Sure, 3pm works!");
        bubble.present();
        assert_eq!(bubble.state(), BubbleState::Presenting);
        settle(&mut bubble, 2.0);
        assert_eq!(bubble.state(), BubbleState::Presented);
        assert!((bubble.opacity() - 1.0).abs() < 0.02);
        assert!((bubble.scale() - 1.0).abs() < 0.02);
    }

    #[test]
    fn test_paint_layers_shadow_body_glow() {
        let mut bubble = SuggestionBubble::new("hello");
        bubble.present();
        settle(&mut bubble, 2.0);

        let mut ctx = RecordingContext::new();
        bubble.paint(&mut ctx, Rect::new(0.0, 0.0, 160.0, 40.0), 0.0);

        let commands = ctx.commands();
        assert!(matches!(commands[0], DrawCommand::Shadow { .. }));
        assert!(matches!(commands[1], DrawCommand::FillRect { .. }));
        assert!(commands
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokeRect { .. })));
    }

    #[test]
    fn test_tap_squeezes_then_dismisses() {
        let mut bubble = SuggestionBubble::new("tap me");
        bubble.present();
        settle(&mut bubble, 2.0);

        bubble.tap();
        assert_eq!(bubble.state(), BubbleState::Acknowledging);
        settle(&mut bubble, 0.1);
        assert!(bubble.scale() < 1.0);
        assert!(!bubble.take_tapped());

        settle(&mut bubble, 0.1);
        assert!(bubble.take_tapped());
        // One-shot flag
        assert!(!bubble.take_tapped());

        settle(&mut bubble, 2.0);
        assert_eq!(bubble.state(), BubbleState::Hidden);
        assert_eq!(bubble.opacity(), 0.0);
    }

    #[test]
    fn test_dismiss_without_tap() {
        let mut bubble = SuggestionBubble::new("bye");
        bubble.present();
        settle(&mut bubble, 2.0);
        bubble.dismiss();
        settle(&mut bubble, 2.0);
        assert_eq!(bubble.state(), BubbleState::Hidden);
        assert!(!bubble.take_tapped());
    }

    #[test]
    fn test_tap_while_hidden_is_noop() {
        let mut bubble = SuggestionBubble::new("nope");
        bubble.tap();
        assert_eq!(bubble.state(), BubbleState::Hidden);
    }
}
