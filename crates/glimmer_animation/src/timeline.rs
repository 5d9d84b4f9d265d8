//! Host-ticked timelines
//!
//! A timeline holds keyed `{delay, duration, from, to}` entries and a single
//! clock the host advances with frame delta time. Nothing here schedules
//! frames or spawns threads — the host's animation driver owns the loop and
//! calls [`Timeline::tick`] once per frame, then reads entry values back.

use slotmap::{new_key_type, SlotMap};

use crate::easing::Easing;
use crate::values::Interpolate;

new_key_type! {
    /// Key for a timeline entry
    pub struct EntryId;
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    delay_ms: f32,
    duration_ms: f32,
    from: f32,
    to: f32,
    easing: Easing,
}

/// Repeat behavior after the last entry finishes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LoopMode {
    /// Play once and stop
    #[default]
    Once,
    /// Wrap around forever
    Infinite,
    /// Wrap a fixed number of additional times
    Count(u32),
}

/// A host-ticked animation timeline
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: SlotMap<EntryId, Entry>,
    clock_ms: f32,
    playing: bool,
    loop_mode: LoopMode,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry animating `from -> to` over `duration_ms`, starting at
    /// `delay_ms` on the shared clock. Linear easing.
    pub fn add(&mut self, delay_ms: f32, duration_ms: f32, from: f32, to: f32) -> EntryId {
        self.add_eased(delay_ms, duration_ms, from, to, Easing::Linear)
    }

    /// Add an entry with an explicit easing curve
    pub fn add_eased(
        &mut self,
        delay_ms: f32,
        duration_ms: f32,
        from: f32,
        to: f32,
        easing: Easing,
    ) -> EntryId {
        self.entries.insert(Entry {
            delay_ms: delay_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
            from,
            to,
            easing,
        })
    }

    /// Remove an entry
    pub fn remove(&mut self, id: EntryId) {
        self.entries.remove(id);
    }

    /// Set looping: -1 loops forever, 0 plays once, n repeats n extra times
    pub fn set_loop(&mut self, count: i32) {
        self.loop_mode = match count {
            i32::MIN..=-1 => LoopMode::Infinite,
            0 => LoopMode::Once,
            n => LoopMode::Count(n as u32),
        };
    }

    /// Start playback from the beginning of the clock
    pub fn start(&mut self) {
        self.clock_ms = 0.0;
        self.playing = true;
    }

    /// Stop playback, keeping the clock where it is
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Total span of the timeline in milliseconds
    pub fn total_ms(&self) -> f32 {
        self.entries
            .values()
            .map(|e| e.delay_ms + e.duration_ms)
            .fold(0.0, f32::max)
    }

    /// Advance the clock by frame delta time in milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.clock_ms += dt_ms.max(0.0);
        let total = self.total_ms();
        if total <= 0.0 || self.clock_ms < total {
            return;
        }

        match self.loop_mode {
            LoopMode::Once => {
                self.clock_ms = total;
                self.playing = false;
            }
            LoopMode::Infinite => {
                self.clock_ms = self.clock_ms.rem_euclid(total);
            }
            LoopMode::Count(remaining) => {
                if remaining == 0 {
                    self.clock_ms = total;
                    self.playing = false;
                } else {
                    self.clock_ms = self.clock_ms.rem_euclid(total);
                    self.loop_mode = LoopMode::Count(remaining - 1);
                }
            }
        }
    }

    /// Current value of an entry.
    ///
    /// Before its delay an entry sits at `from`; past its duration it sits at
    /// `to`; zero-duration entries jump straight to `to` once reached.
    pub fn get(&self, id: EntryId) -> Option<f32> {
        let entry = self.entries.get(id)?;
        let local = self.clock_ms - entry.delay_ms;
        let t = if local <= 0.0 {
            0.0
        } else if entry.duration_ms <= 0.0 {
            1.0
        } else {
            (local / entry.duration_ms).clamp(0.0, 1.0)
        };
        let eased = entry.easing.apply(t);
        Some(entry.from.lerp(&entry.to, eased))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_single_entry() {
        let mut tl = Timeline::new();
        let id = tl.add(0.0, 1000.0, 0.0, 100.0);
        tl.start();

        assert_eq!(tl.get(id), Some(0.0));
        tl.tick(500.0);
        assert!((tl.get(id).unwrap() - 50.0).abs() < 1e-4);
        tl.tick(500.0);
        assert!((tl.get(id).unwrap() - 100.0).abs() < 1e-4);
        assert!(!tl.is_playing());
    }

    #[test]
    fn test_timeline_delay() {
        let mut tl = Timeline::new();
        let id = tl.add(500.0, 500.0, 0.0, 1.0);
        tl.start();

        tl.tick(250.0);
        assert_eq!(tl.get(id), Some(0.0));
        tl.tick(500.0);
        assert!((tl.get(id).unwrap() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_timeline_ping_pong_entries() {
        // Two back-to-back entries fake a ping-pong fade, as the skeleton does
        let mut tl = Timeline::new();
        let up = tl.add(0.0, 750.0, 0.0, 1.0);
        let down = tl.add(750.0, 750.0, 1.0, 0.0);
        tl.set_loop(-1);
        tl.start();

        tl.tick(375.0);
        assert!((tl.get(up).unwrap() - 0.5).abs() < 1e-5);
        assert_eq!(tl.get(down), Some(1.0));

        tl.tick(750.0);
        assert_eq!(tl.get(up), Some(1.0));
        assert!((tl.get(down).unwrap() - 0.5).abs() < 1e-5);

        // Wraps instead of stopping
        tl.tick(750.0);
        assert!(tl.is_playing());
        assert!((tl.get(up).unwrap() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_timeline_loop_count() {
        let mut tl = Timeline::new();
        let id = tl.add(0.0, 100.0, 0.0, 1.0);
        tl.set_loop(1);
        tl.start();

        tl.tick(150.0);
        assert!(tl.is_playing());
        tl.tick(100.0);
        assert!(!tl.is_playing());
        assert_eq!(tl.get(id), Some(1.0));
    }

    #[test]
    fn test_timeline_zero_duration_entry() {
        let mut tl = Timeline::new();
        let id = tl.add(100.0, 0.0, 0.0, 5.0);
        tl.start();

        assert_eq!(tl.get(id), Some(0.0));
        tl.tick(100.0);
        assert_eq!(tl.get(id), Some(5.0));
    }

    #[test]
    fn test_timeline_not_playing_holds() {
        let mut tl = Timeline::new();
        let id = tl.add(0.0, 100.0, 0.0, 1.0);
        tl.tick(50.0);
        assert_eq!(tl.get(id), Some(0.0));
    }
}
