//! Editing shimmer
//!
//! Marks a block of text as "being rewritten": the content dims to half
//! opacity while a white band sweeps bottom to top on a loop. Finishing
//! editing restores full opacity and plays a two-beat vertical bounce.

use glimmer_animation::{Phase, Spring, SpringConfig};
use glimmer_core::{DrawContext, Rect};
use glimmer_text::TextLayout;

use crate::gradient_text::{highlight_band_stops, paint_glyph_sweep};

/// Opacity of the content while editing
const EDITING_OPACITY: f32 = 0.5;
/// Height of the bounce kick in logical pixels
const BOUNCE_KICK: f32 = 20.0;
/// Seconds between the bounce kick and the return beat
const BOUNCE_RETURN_DELAY: f32 = 0.18;

/// Editing-state shimmer and finish bounce
#[derive(Clone, Debug)]
pub struct EditingShimmer {
    editing: bool,
    sweep: Phase,
    bounce: Spring,
    return_after: f32,
}

impl EditingShimmer {
    pub fn new() -> Self {
        Self {
            editing: false,
            sweep: Phase::new(1.2),
            bounce: Spring::new(SpringConfig::bounce(), 0.0),
            return_after: 0.0,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Flip the editing flag; leaving the editing state kicks the bounce
    pub fn set_editing(&mut self, editing: bool) {
        if self.editing == editing {
            return;
        }
        tracing::debug!(editing, "editing shimmer");
        self.editing = editing;
        if editing {
            self.sweep.reset();
        } else {
            self.bounce.set_target(BOUNCE_KICK);
            self.return_after = BOUNCE_RETURN_DELAY;
        }
    }

    /// Advance the sweep and bounce by frame delta time
    pub fn tick(&mut self, dt: f32) {
        if self.editing {
            self.sweep.advance(dt);
        }
        self.bounce.step(dt);

        if self.return_after > 0.0 {
            self.return_after -= dt;
            if self.return_after <= 0.0 {
                self.bounce.set_target(0.0);
            }
        }
    }

    /// Opacity the host applies to the content block
    pub fn content_opacity(&self) -> f32 {
        if self.editing {
            EDITING_OPACITY
        } else {
            1.0
        }
    }

    /// Vertical offset the host applies to the content block
    pub fn offset_y(&self) -> f32 {
        self.bounce.value()
    }

    /// Paint the sweep overlay; no-op when not editing
    pub fn paint_overlay(&self, ctx: &mut dyn DrawContext, layout: &TextLayout, bounds: Rect) {
        if !self.editing {
            return;
        }
        // Band travels bottom to top
        let band_offset = 1.0 - 2.0 * self.sweep.value();
        paint_glyph_sweep(ctx, layout, bounds, &highlight_band_stops(), band_offset);
    }
}

impl Default for EditingShimmer {
    fn default() -> Self {
        Self::new()
    }
}
