/// Cubic Bezier timing curves, pinned at (0, 0) and (1, 1)
///
/// Same model as CSS `cubic-bezier(x1, y1, x2, y2)`: the curve is
/// parameterized by `s`, and easing an input `t` means finding the `s`
/// where `x(s) = t` and returning `y(s)`.

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 1e-6;
const BISECTION_ITERATIONS: usize = 32;

/// Timing curve with two free control points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// CSS `ease-out`: control points (0.00, 0.00) and (0.58, 1.00)
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

impl CubicBezier {
    /// Create curve from control points; x coordinates must lie in [0, 1]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for `t`, clamped to [0, 1]
    pub fn ease(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let s = self.solve_parameter(t);
        Self::sample(self.y1, self.y2, s).clamp(0.0, 1.0)
    }

    // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
    fn sample(p1: f32, p2: f32, s: f32) -> f32 {
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        ((a * s + b) * s + c) * s
    }

    fn slope(p1: f32, p2: f32, s: f32) -> f32 {
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        (3.0 * a * s + 2.0 * b) * s + c
    }

    /// Find `s` with x(s) = t; Newton first, bisection when the slope flattens out
    fn solve_parameter(&self, t: f32) -> f32 {
        let mut s = t;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, s) - t;
            if error.abs() < NEWTON_EPSILON {
                return s;
            }
            let slope = Self::slope(self.x1, self.x2, s);
            if slope.abs() < NEWTON_EPSILON {
                break;
            }
            s -= error / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = t;
        for _ in 0..BISECTION_ITERATIONS {
            let x = Self::sample(self.x1, self.x2, s);
            if (x - t).abs() < NEWTON_EPSILON {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

/// Ease-out curve used for the hue pulse
#[inline]
pub fn ease_out(t: f32) -> f32 {
    EASE_OUT.ease(t)
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}
