//! Reveal renderer hot-path benchmark
//!
//! Measures one frame of the radial reveal over a paragraph-sized layout,
//! with and without the metrics cache.

use criterion::{criterion_group, criterion_main, Criterion};

use glimmer_core::RecordingContext;
use glimmer_effects::TextRevealRenderer;
use glimmer_text::{MetricsCache, TextLayout};

fn paragraph() -> TextLayout {
    let line = "the quick brown fox jumps over the lazy dog ";
    let text = (0..12).map(|_| line).collect::<Vec<_>>().join("\n");
    TextLayout::monospace(&text, 8.0, 16.0)
}

fn bench_reveal(c: &mut Criterion) {
    let layout = paragraph();
    let renderer = TextRevealRenderer::new(0.4, 0.8).glint(true);

    c.bench_function("reveal_frame_uncached", |b| {
        let mut ctx = RecordingContext::new();
        b.iter(|| {
            ctx.clear();
            renderer.draw(&layout, &mut ctx);
        });
    });

    c.bench_function("reveal_frame_cached", |b| {
        let mut ctx = RecordingContext::new();
        let mut cache = MetricsCache::new();
        b.iter(|| {
            ctx.clear();
            renderer.draw_cached(&layout, &mut cache, &mut ctx);
        });
    });
}

criterion_group!(benches, bench_reveal);
criterion_main!(benches);
