//! Glimmer Animation
//!
//! Pure animation machinery the host's frame loop drives:
//!
//! - **Easing**: curve functions plus [`smoothstep`], the reveal edge ramp
//! - **Progress**: clamped elapsed/total mapping and wrapping [`Phase`] clocks
//! - **Reveal Clock**: the explicit `{Idle, Revealing}` state machine hosts own
//! - **Springs**: RK4 damped harmonic oscillators for transition choreography
//! - **Timelines**: host-ticked keyed entries for repeat-forever sweeps
//!
//! Nothing in this crate schedules frames, spawns threads, or blocks: the
//! host advances clocks and re-renders, and cancellation is observed only as
//! elapsed time ceasing to advance.

pub mod easing;
pub mod progress;
pub mod spring;
pub mod timeline;
pub mod values;

pub use easing::{smoothstep, Easing};
pub use progress::{progress, Phase, RevealClock, RevealState};
pub use spring::{Spring, SpringConfig};
pub use timeline::{EntryId, Timeline};
pub use values::Interpolate;
