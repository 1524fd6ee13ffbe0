use std::time::{Duration, Instant};

use crate::layout::Rect;

/// Easing function for indicator motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Damped oscillation with a small overshoot, settling at the target.
    Spring,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0). Exact at both endpoints.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
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
            Easing::Spring => 1.0 - (-7.0 * t).exp() * (9.0 * t).cos(),
        }
    }
}

/// Configuration for a single indicator tween.
#[derive(Debug, Clone, Copy)]
pub struct TweenConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TweenConfig {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// The picker default: a 300 ms spring.
    pub const fn spring() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::Spring,
        }
    }
}

/// One animated scalar, tweening `from` toward `to`.
#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    fn done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

// Animated rect channels: x, y, width, height.
const CHANNELS: usize = 4;

/// Tween state machine for the selection indicator, driven by the host frame
/// clock. Each call to `retarget` compares the new presented rect with the
/// previous one and starts per-channel tweens from the currently displayed
/// value, so motion stays continuous when the target changes mid-flight.
#[derive(Debug, Default)]
pub struct IndicatorMotion {
    target: Option<Rect>,
    channels: [Option<Tween>; CHANNELS],
    /// When set, retargets complete instantly (accessibility).
    reduced_motion: bool,
}

impl IndicatorMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Point the indicator at a new rect. The first target ever seen is
    /// adopted without animating.
    pub fn retarget(&mut self, rect: Rect, config: TweenConfig, now: Instant) {
        let Some(prev) = self.target else {
            self.target = Some(rect);
            return;
        };
        if prev == rect {
            return;
        }
        if self.reduced_motion {
            self.target = Some(rect);
            self.channels = [None; CHANNELS];
            return;
        }

        let prev_vals = channel_values(prev);
        let next_vals = channel_values(rect);
        for i in 0..CHANNELS {
            if prev_vals[i] == next_vals[i] {
                // an in-flight tween toward this value keeps running
                continue;
            }
            let from = self.channels[i]
                .map(|tween| tween.value_at(now))
                .unwrap_or(prev_vals[i]);
            self.channels[i] = Some(Tween {
                from,
                to: next_vals[i],
                start: now,
                duration: config.duration,
                easing: config.easing,
            });
        }
        self.target = Some(rect);
    }

    /// The rect to display this frame. None until the first retarget.
    pub fn sample(&self, now: Instant) -> Option<Rect> {
        let target = self.target?;
        let mut vals = channel_values(target);
        for (i, channel) in self.channels.iter().enumerate() {
            if let Some(tween) = channel {
                if !tween.done(now) {
                    vals[i] = tween.value_at(now);
                }
            }
        }
        Some(Rect::new(
            round_cell(vals[0]),
            round_cell(vals[1]),
            round_cell(vals[2]),
            round_cell(vals[3]),
        ))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.channels
            .iter()
            .flatten()
            .any(|tween| !tween.done(now))
    }
}

fn channel_values(rect: Rect) -> [f32; CHANNELS] {
    [
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    ]
}

fn round_cell(v: f32) -> u16 {
    v.round().clamp(0.0, u16::MAX as f32) as u16
}
