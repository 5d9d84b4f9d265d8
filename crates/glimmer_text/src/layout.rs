//! Host-supplied text layout
//!
//! The input boundary of every text effect: an ordered sequence of lines,
//! each an ordered sequence of glyph slices, produced fresh by the host's
//! text-shaping system. Glimmer never mutates or retains a layout beyond a
//! single draw call.

use std::hash::{Hash, Hasher};

use glimmer_core::{GlyphSlice, Rect};
use rustc_hash::FxHasher;

/// One laid-out line of glyph slices
#[derive(Clone, Debug, Default)]
pub struct Line {
    slices: Vec<GlyphSlice>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slices(slices: Vec<GlyphSlice>) -> Self {
        Self { slices }
    }

    pub fn push(&mut self, slice: GlyphSlice) {
        self.slices.push(slice);
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn slices(&self) -> &[GlyphSlice] {
        &self.slices
    }
}

/// A shaped block of text: ordered lines of ordered glyph slices.
///
/// Read-only from Glimmer's perspective. Lines may be ragged; no padding
/// glyphs are invented for short lines.
#[derive(Clone, Debug, Default)]
pub struct TextLayout {
    lines: Vec<Line>,
}

impl TextLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Fabricate a layout from plain text with fixed-advance glyphs.
    ///
    /// A stand-in for a real shaping pass, used by tests and demos: one glyph
    /// per non-newline character, columns advancing by `glyph_width`, lines
    /// by `line_height`.
    pub fn monospace(text: &str, glyph_width: f32, line_height: f32) -> Self {
        let mut lines = Vec::new();
        for (line_idx, line_text) in text.split('\n').enumerate() {
            let mut line = Line::new();
            for (col, (byte_idx, ch)) in line_text.char_indices().enumerate() {
                let glyph_id = (ch as u32 & 0xFFFF) as u16;
                let bounds = Rect::new(
                    col as f32 * glyph_width,
                    line_idx as f32 * line_height,
                    glyph_width,
                    line_height,
                );
                line.push(GlyphSlice::new(glyph_id, byte_idx as u32, bounds));
            }
            lines.push(line);
        }
        Self { lines }
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Glyph count of the longest line, with a floor of 1
    pub fn max_cols(&self) -> usize {
        self.lines.iter().map(Line::len).max().unwrap_or(0).max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn glyph_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// Iterate `(line_index, column_index, slice)` over the whole block
    pub fn iter_grid(&self) -> impl Iterator<Item = (usize, usize, &GlyphSlice)> {
        self.lines.iter().enumerate().flat_map(|(i, line)| {
            line.slices()
                .iter()
                .enumerate()
                .map(move |(j, slice)| (i, j, slice))
        })
    }

    /// Content hash identifying this layout for metrics caching.
    ///
    /// Two layouts with identical line structure, glyph ids, clusters, and
    /// bounds hash equal; any content or geometry change invalidates.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.lines.len().hash(&mut hasher);
        for line in &self.lines {
            line.len().hash(&mut hasher);
            for slice in line.slices() {
                slice.glyph_id.hash(&mut hasher);
                slice.cluster.hash(&mut hasher);
                slice.bounds.origin.x.to_bits().hash(&mut hasher);
                slice.bounds.origin.y.to_bits().hash(&mut hasher);
                slice.bounds.size.width.to_bits().hash(&mut hasher);
                slice.bounds.size.height.to_bits().hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}
