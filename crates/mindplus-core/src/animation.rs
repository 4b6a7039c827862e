//! Animation curves for the calm-session view: background pulse, fade-in and
//! the depletion ring. Time is passed in explicitly so the view layer owns
//! the clock.

use std::f32::consts::PI;

pub const PULSE_HALF_PERIOD_MS: f64 = 1800.0;
pub const PULSE_PEAK_SCALE: f32 = 1.08;
pub const FADE_IN_MS: f64 = 900.0;
pub const PROGRESS_TWEEN_MS: f64 = 220.0;

pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Breathing pulse: 1.0 → 1.08 → 1.0, looping forever.
pub fn pulse_scale(elapsed_ms: f64) -> f32 {
    let period = PULSE_HALF_PERIOD_MS * 2.0;
    let phase = elapsed_ms.max(0.0) % period;
    let t = if phase < PULSE_HALF_PERIOD_MS {
        phase / PULSE_HALF_PERIOD_MS
    } else {
        1.0 - (phase - PULSE_HALF_PERIOD_MS) / PULSE_HALF_PERIOD_MS
    };
    1.0 + (PULSE_PEAK_SCALE - 1.0) * ease_in_out_quad(t as f32)
}

pub fn fade_in_opacity(elapsed_ms: f64) -> f32 {
    ease_out_quad((elapsed_ms.max(0.0) / FADE_IN_MS) as f32)
}

/// Smoothly moves the ring toward the latest progress fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTween {
    from: f32,
    to: f32,
    started_at_ms: f64,
}

impl ProgressTween {
    pub fn new(initial: f32) -> Self {
        let initial = initial.clamp(0.0, 1.0);
        Self {
            from: initial,
            to: initial,
            started_at_ms: 0.0,
        }
    }

    /// Retarget from wherever the ring currently is.
    pub fn retarget(&mut self, target: f32, now_ms: f64) {
        let target = target.clamp(0.0, 1.0);
        if (target - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value_at(now_ms);
        self.to = target;
        self.started_at_ms = now_ms;
    }

    pub fn value_at(&self, now_ms: f64) -> f32 {
        let t = ((now_ms - self.started_at_ms) / PROGRESS_TWEEN_MS) as f32;
        self.from + (self.to - self.from) * ease_out_quad(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms >= PROGRESS_TWEEN_MS
    }
}

/// Stroke geometry for the depletion ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: f32,
    pub radius: f32,
    pub circumference: f32,
    /// Length of the stroke left undrawn
    pub dash_offset: f32,
    /// Sweep of the drawn arc in radians, starting at twelve o'clock
    pub sweep: f32,
}

pub fn ring_geometry(size: f32, thickness: f32, progress: f32) -> RingGeometry {
    let progress = progress.clamp(0.0, 1.0);
    let radius = ((size - thickness) / 2.0).max(0.0);
    let circumference = 2.0 * PI * radius;
    RingGeometry {
        center: size / 2.0,
        radius,
        circumference,
        dash_offset: circumference * (1.0 - progress),
        sweep: 2.0 * PI * progress,
    }
}
