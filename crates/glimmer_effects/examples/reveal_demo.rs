//! Radial reveal demo
//!
//! Drives the reveal renderer over simulated frames with a recording context
//! and prints a per-frame summary of the wavefront. The frame clock runs on a
//! host-ticked timeline, the same way an embedding UI would drive it.
//!
//! Run with: cargo run -p glimmer_effects --example reveal_demo

use glimmer_animation::Timeline;
use glimmer_core::RecordingContext;
use glimmer_effects::TextRevealRenderer;
use glimmer_text::{MetricsCache, TextLayout};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let layout = TextLayout::monospace(
        "Summarizing the document now.\nKey points are being extracted\nand rewritten for clarity.",
        9.0,
        18.0,
    );
    let total = layout.glyph_count();
    let duration = 0.8_f32;
    let mut cache = MetricsCache::new();

    // The host owns the clock: a timeline entry sweeps elapsed time for us
    let mut clock = Timeline::new();
    let elapsed_entry = clock.add(0.0, duration * 1000.0, 0.0, duration);
    clock.start();

    println!("revealing {total} glyphs over {duration}s\n");

    let frames = 16;
    let frame_ms = duration * 1000.0 / frames as f32;
    for _ in 0..=frames {
        let elapsed = clock.get(elapsed_entry).unwrap_or(duration);
        let renderer = TextRevealRenderer::new(elapsed, duration).glint(true);

        let mut ctx = RecordingContext::new();
        renderer.draw_cached(&layout, &mut cache, &mut ctx);

        let revealed = ctx
            .base_glyphs()
            .filter(|(_, opacity)| *opacity > 0.99)
            .count();
        let emerging = ctx
            .base_glyphs()
            .filter(|(_, opacity)| *opacity > 0.01 && *opacity <= 0.99)
            .count();
        let highlights = ctx.glyphs().count() - total;

        let bar: String = (0..32)
            .map(|i| {
                if (i as f32 / 32.0) < renderer.progress() {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!(
            "t={elapsed:>4.2}s [{bar}] revealed {revealed:>3}/{total}  emerging {emerging:>3}  highlight draws {highlights:>3}"
        );

        clock.tick(frame_ms);
    }

    tracing::info!(cached_layouts = cache.len(), "done");
}
