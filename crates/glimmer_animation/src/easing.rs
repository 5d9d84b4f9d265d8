//! Easing curves
//!
//! Time-remapping functions for keyframe and phase animations, plus
//! [`smoothstep`] — the spatial edge function the radial reveal is built on.

/// Easing functions for animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInCubic,
    EaseOutCubic,
}

impl Easing {
    /// Apply easing to a value
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
        }
    }
}

/// Cubic Hermite interpolation between two edges.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, and a continuous,
/// monotone non-decreasing ramp between. Degenerate edges (`edge1 <= edge0`)
/// collapse to a step at `edge0`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.5), 1.0);
    }

    #[test]
    fn test_smoothstep_midpoint() {
        // Hermite curve passes through 0.5 at the midpoint
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((smoothstep(2.0, 4.0, 3.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smoothstep_monotone() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            let v = smoothstep(0.0, 1.0, x);
            assert!(v >= prev, "not monotone at x={x}");
            prev = v;
        }
    }

    #[test]
    fn test_smoothstep_degenerate_edges() {
        assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.6), 1.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
        ] {
            assert!((easing.apply(0.0) - 0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::EaseInOut.apply(-2.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(2.0), 1.0);
    }
}
