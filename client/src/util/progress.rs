//! Time-driven progress counter animation for skill bars.
//!
//! A `ProgressAnimation` is the whole state of one run: start time, duration,
//! target, and easing curve, plus the highest value shown so far. The browser
//! driver samples it once per animation frame with the monotonic page clock
//! and stops after the first finished frame, so the displayed value depends on
//! elapsed time, never on how many frames were delivered.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Fixed run length of a skill bar animation.
pub const ANIMATION_DURATION_MS: f64 = 1500.0;

/// Upper bound of a progress target.
pub const MAX_PERCENT: u8 = 100;

/// Ease-out-cubic: fast start, decelerating finish. Input is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(3)
}

/// One sampled step of a running animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressFrame {
    pub value: u8,
    pub finished: bool,
}

/// Rendered forms of a displayed value: counter text and `aria-valuenow`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressOutputs {
    pub counter: String,
    pub aria_value_now: String,
}

/// Both outputs of a skill bar, derived from the one displayed value.
#[must_use]
pub fn progress_outputs(value: u8) -> ProgressOutputs {
    let text = value.to_string();
    ProgressOutputs { counter: text.clone(), aria_value_now: text }
}

#[derive(Clone, Copy, Debug)]
pub struct ProgressAnimation {
    start_ms: f64,
    duration_ms: f64,
    target: u8,
    easing: fn(f64) -> f64,
    shown: u8,
}

impl ProgressAnimation {
    /// Start a run toward `target` (capped at 100) at clock time `start_ms`.
    #[must_use]
    pub fn new(target: u8, start_ms: f64) -> Self {
        Self {
            start_ms,
            duration_ms: ANIMATION_DURATION_MS,
            target: target.min(MAX_PERCENT),
            easing: ease_out_cubic,
            shown: 0,
        }
    }

    #[must_use]
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Normalized elapsed time in `[0, 1]`.
    ///
    /// A clock reading earlier than the start counts as zero elapsed.
    #[must_use]
    pub fn linear_progress(&self, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        (elapsed / self.duration_ms).min(1.0)
    }

    /// Sample the animation at clock time `now_ms`.
    ///
    /// The value never drops below one already returned, even if the clock
    /// reading goes backwards. Once linear progress reaches 1 the frame is
    /// finished and pinned to the exact target, which covers any undershoot
    /// from flooring.
    pub fn frame(&mut self, now_ms: f64) -> ProgressFrame {
        let linear = self.linear_progress(now_ms);
        if linear >= 1.0 {
            self.shown = self.target;
            return ProgressFrame { value: self.target, finished: true };
        }
        let eased = (self.easing)(linear).clamp(0.0, 1.0);
        self.shown = self.shown.max(scaled_floor(eased, self.target));
        ProgressFrame { value: self.shown, finished: false }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_floor(fraction: f64, target: u8) -> u8 {
    let raw = (fraction * f64::from(target)).floor();
    // Clamped above, so the cast cannot wrap.
    raw.clamp(0.0, f64::from(target)) as u8
}
