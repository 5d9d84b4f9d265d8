//! Glimmer Text
//!
//! The text-side input boundary for Glimmer's effects: a read-only layout
//! abstraction ([`TextLayout`] — ordered lines of glyph slices, produced by
//! the host's shaping system each frame) and the grid machinery the radial
//! reveal is computed over — normalized line/column coordinates, wavefront
//! origins, per-layout distance metrics, and a content-hash keyed metrics
//! cache.

pub mod grid;
pub mod layout;

pub use grid::{
    grid_distance, normalized_coords, LayoutMetrics, MetricsCache, RevealOrigin,
};
pub use layout::{Line, TextLayout};
