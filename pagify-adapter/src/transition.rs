use crate::{Easing, Tween};

/// One sampled step of a running transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionFrame {
    /// Offset to apply to the viewport, in percent along the paging axis.
    pub offset_percent: f32,
    /// The transition reached its target with this frame.
    pub done: bool,
}

/// The primitive that moves the viewport to a target offset.
///
/// Calling [`Transition::start`] while a transition is running must supersede it: the viewport
/// heads for the new target from wherever it currently is.
pub trait Transition {
    fn start(&mut self, target_percent: f32, duration_ms: u64, now_ms: u64);

    /// Advances a running transition. Returns `None` when idle or when completion is reported
    /// out of band (see [`crate::ViewportBinding::on_transition_complete`]).
    fn tick(&mut self, now_ms: u64) -> Option<TransitionFrame>;

    /// Stops where it is.
    fn cancel(&mut self);

    fn is_running(&self) -> bool;
}

/// A tween-driven transition sampled from the host's frame loop.
#[derive(Clone, Debug, Default)]
pub struct TweenTransition {
    easing: Easing,
    tween: Option<Tween>,
    offset_percent: f32,
}

impl TweenTransition {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            tween: None,
            offset_percent: 0.0,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Last sampled offset.
    pub fn offset_percent(&self) -> f32 {
        self.offset_percent
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Moves to `offset_percent` without animating, dropping any running tween.
    pub fn jump_to(&mut self, offset_percent: f32) {
        self.tween = None;
        self.offset_percent = offset_percent;
    }
}

impl Transition for TweenTransition {
    fn start(&mut self, target_percent: f32, duration_ms: u64, now_ms: u64) {
        match self.tween.as_mut() {
            Some(tween) => {
                atrace!(
                    from = tween.sample(now_ms),
                    to = target_percent,
                    duration_ms,
                    "TweenTransition: retarget"
                );
                tween.retarget(now_ms, target_percent, duration_ms);
            }
            None => {
                self.tween = Some(Tween::new(
                    self.offset_percent,
                    target_percent,
                    now_ms,
                    duration_ms,
                    self.easing,
                ));
            }
        }
    }

    fn tick(&mut self, now_ms: u64) -> Option<TransitionFrame> {
        let tween = self.tween?;
        self.offset_percent = tween.sample(now_ms);
        let done = tween.is_done(now_ms);
        if done {
            self.tween = None;
        }
        Some(TransitionFrame {
            offset_percent: self.offset_percent,
            done,
        })
    }

    fn cancel(&mut self) {
        self.tween = None;
    }

    fn is_running(&self) -> bool {
        self.tween.is_some()
    }
}

/// Forwards each transition to a host callback `(target_percent, duration_ms)`.
///
/// The host animates on its own and reports completion through
/// [`crate::ViewportBinding::on_transition_complete`].
pub struct CallbackTransition<F> {
    apply: F,
    running: bool,
}

impl<F: FnMut(f32, u64)> CallbackTransition<F> {
    pub fn new(apply: F) -> Self {
        Self {
            apply,
            running: false,
        }
    }
}

impl<F: FnMut(f32, u64)> Transition for CallbackTransition<F> {
    fn start(&mut self, target_percent: f32, duration_ms: u64, _now_ms: u64) {
        self.running = true;
        (self.apply)(target_percent, duration_ms);
    }

    fn tick(&mut self, _now_ms: u64) -> Option<TransitionFrame> {
        None
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

impl<F> core::fmt::Debug for CallbackTransition<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CallbackTransition")
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
