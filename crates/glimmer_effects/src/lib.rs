//! Glimmer Effects
//!
//! "Intelligence-style" visual decorations for Rust UI hosts:
//!
//! - **Radial text reveal**: per-glyph wavefront reveal with a shimmering
//!   band trailing the edge ([`TextRevealRenderer`])
//! - **Skeleton placeholder**: shimmering skeleton lines while content is
//!   generated, with the full generating/reveal choreography
//!   ([`SkeletonStyle`], [`GeneratingText`])
//! - **Indeterminate progress**: travelling gradient window with a glow
//!   ([`IndeterminateBar`])
//! - **Glow borders**: rotating rainbow rings and full-bounds drifting glows
//!   ([`GlowBorder`], [`ScreenGlow`])
//! - **Gradient text**: static intelligence gradient and flowing text glow
//!   via per-glyph tinting ([`TextGlow`], [`paint_gradient_text`])
//! - **Suggestion bubble**: floating spring-animated suggestion overlay
//!   ([`SuggestionBubble`])
//! - **Editing shimmer**: dimmed content with a looping highlight band
//!   ([`EditingShimmer`])
//!
//! Every component is a pure draw pass over host-supplied inputs (a
//! [`glimmer_text::TextLayout`] and a [`glimmer_core::DrawContext`]) plus, where the original
//! behavior demands it, a small host-ticked state machine. Nothing here owns
//! a frame loop: the host advances clocks and re-invokes `paint` each frame.
//!
//! # Example
//!
//! ```rust
//! use glimmer_core::RecordingContext;
//! use glimmer_effects::TextRevealRenderer;
//! use glimmer_text::TextLayout;
//!
//! let layout = TextLayout::monospace("Thinking about it...", 8.0, 16.0);
//! let mut ctx = RecordingContext::new();
//!
//! // One frame, 40% of the way through a 0.8s reveal
//! TextRevealRenderer::new(0.32, 0.8).draw(&layout, &mut ctx);
//! assert!(ctx.commands().len() >= layout.glyph_count());
//! ```

pub mod bubble;
pub mod editing;
pub mod generating;
pub mod gradient_text;
pub mod glow;
pub mod progress;
pub mod reveal;
pub mod skeleton;

pub use bubble::{BubbleState, SuggestionBubble};
pub use editing::EditingShimmer;
pub use generating::{GeneratingState, GeneratingText, RevealMode};
pub use gradient_text::{
    highlight_band_stops, intelligence_stops, paint_glyph_sweep, paint_gradient_text, TextGlow,
};
pub use glow::{rainbow_ring, GlowBorder, ScreenGlow};
pub use progress::IndeterminateBar;
pub use reveal::{ShimmerStyle, TextRevealRenderer};
pub use skeleton::{spectral_stops, sweep_offset, SkeletonStyle};

/// Commonly used types for hosts embedding Glimmer effects
pub mod prelude {
    pub use crate::bubble::SuggestionBubble;
    pub use crate::editing::EditingShimmer;
    pub use crate::generating::{GeneratingText, RevealMode};
    pub use crate::glow::{GlowBorder, ScreenGlow};
    pub use crate::gradient_text::TextGlow;
    pub use crate::progress::IndeterminateBar;
    pub use crate::reveal::{ShimmerStyle, TextRevealRenderer};
    pub use crate::skeleton::SkeletonStyle;

    pub use glimmer_animation::{Phase, RevealClock};
    pub use glimmer_core::{
        Brush, Color, DrawContext, DrawContextExt, Gradient, Rect, RecordingContext,
    };
    pub use glimmer_text::{MetricsCache, RevealOrigin, TextLayout};
}
