/// Interpolates the viewport offset (percent along the paging axis) between two views.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    /// `0` jumps straight to `to`.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return 1.0;
        }
        elapsed as f32 / self.duration_ms as f32
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.start_ms
            .saturating_add(self.duration_ms)
            .saturating_sub(now_ms)
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        match self.progress(now_ms) {
            p if p >= 1.0 => self.to,
            p => self.from + (self.to - self.from) * self.easing.sample(p),
        }
    }

    /// Heads for `new_to` from the offset sampled at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        *self = Self::new(self.sample(now_ms), new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}
