//! Grid addressing and reveal metrics
//!
//! Each glyph slice is assigned a normalized position in the unit square from
//! its column index within its line and its line index within the block.
//! Distances are pure Euclidean in this normalized line/column space, not in
//! physical pixels: blocks with uneven aspect ratios or ragged lines reveal
//! elliptically in physical units. That is the reference behavior, kept
//! as-is.

use rustc_hash::FxHashMap;

use crate::layout::TextLayout;

/// Origin of the reveal wavefront in normalized layout space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOrigin {
    pub x: f32,
    pub y: f32,
}

impl RevealOrigin {
    /// Top-center of the block — the default wavefront origin
    pub const TOP_CENTER: RevealOrigin = RevealOrigin { x: 0.5, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for RevealOrigin {
    fn default() -> Self {
        Self::TOP_CENTER
    }
}

/// Normalized `(x, y)` coordinate for a glyph at `(line, col)`.
///
/// Single-row and single-column layouts degenerate to fixed coordinates
/// (y = 0, x = 0.5) instead of dividing by zero.
pub fn normalized_coords(line: usize, col: usize, total_lines: usize, max_cols: usize) -> (f32, f32) {
    let y = if total_lines > 1 {
        line as f32 / (total_lines - 1) as f32
    } else {
        0.0
    };
    let x = if max_cols > 1 {
        col as f32 / (max_cols - 1) as f32
    } else {
        0.5
    };
    (x, y)
}

/// Euclidean distance from the origin to the glyph at `(line, col)`
pub fn grid_distance(
    origin: RevealOrigin,
    line: usize,
    col: usize,
    total_lines: usize,
    max_cols: usize,
) -> f32 {
    let (x, y) = normalized_coords(line, col, total_lines, max_cols);
    (x - origin.x).hypot(y - origin.y)
}

/// Per-layout measurements the reveal renderer needs every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub total_lines: usize,
    pub max_cols: usize,
    /// Maximum Euclidean distance from the origin over all glyph coordinates,
    /// floored at 0.001 so a lone glyph at the origin still yields a usable
    /// radius scale
    pub max_dist: f32,
}

impl LayoutMetrics {
    /// Measure a layout against a wavefront origin
    pub fn measure(layout: &TextLayout, origin: RevealOrigin) -> Self {
        let total_lines = layout.line_count();
        let max_cols = layout.max_cols();

        let mut max_dist: f32 = 0.0;
        for (i, j, _) in layout.iter_grid() {
            let d = grid_distance(origin, i, j, total_lines, max_cols);
            if d > max_dist {
                max_dist = d;
            }
        }

        Self {
            total_lines,
            max_cols,
            max_dist: max_dist.max(0.001),
        }
    }

    /// Distance of a single glyph under these metrics
    pub fn distance(&self, origin: RevealOrigin, line: usize, col: usize) -> f32 {
        grid_distance(origin, line, col, self.total_lines, self.max_cols)
    }
}

/// Cache of [`LayoutMetrics`] keyed by layout content hash and origin.
///
/// Layouts rarely change mid-animation, so hosts that keep one of these
/// across frames skip the per-frame max-distance sweep. Invalidation is
/// automatic: a changed layout hashes to a new key.
#[derive(Debug, Default)]
pub struct MetricsCache {
    entries: FxHashMap<(u64, u32, u32), LayoutMetrics>,
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up metrics, measuring and inserting on miss
    pub fn get_or_measure(&mut self, layout: &TextLayout, origin: RevealOrigin) -> LayoutMetrics {
        let key = (layout.content_hash(), origin.x.to_bits(), origin.y.to_bits());
        *self.entries.entry(key).or_insert_with(|| {
            tracing::trace!(hash = key.0, "metrics cache miss, measuring layout");
            LayoutMetrics::measure(layout, origin)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached measurements
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
