use pagify::{
    ConfigError, LayoutConfig, NavigateOptions, PageKey, PageTurn, Pagify, Throttle,
    TurnDirection,
};

use crate::{Easing, Transition, TweenTransition};

/// A navigation trigger coming from the host UI (keys, buttons, swipe recognizers, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// One turn of the configured turn unit forward.
    Forward,
    /// One turn of the configured turn unit backward.
    Backward,
    /// Go to a 1-based page number.
    GoToPage(usize),
}

/// What one [`ViewportBinding::advance`] step produced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportFrame {
    /// The turn of a deferred trigger that fired during this step.
    pub turn: Option<PageTurn>,
    /// Offset to apply to the viewport while a transition is running.
    pub offset_percent: Option<f32>,
}

/// A framework-neutral binding between host triggers, a [`Pagify`] engine and a transition
/// primitive.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `trigger` (or `forward`/`backward`/`go_to_page`) when the user asks to move,
/// - `tick(now_ms)` each frame/timer tick, which fires deferred (throttled) triggers and samples
///   the transition, returning the offset to apply to the viewport.
///
/// Triggers pass through a [`Throttle`] using the engine's `throttle_window_ms`; bursts collapse
/// into the latest trigger. Direct engine calls through [`Self::navigate`] are not throttled.
#[derive(Clone, Debug)]
pub struct ViewportBinding<K = PageKey, T = TweenTransition> {
    engine: Pagify<K>,
    throttle: Throttle<Trigger>,
    transition: T,
}

impl<K> ViewportBinding<K, TweenTransition> {
    /// Binds `engine` to a [`TweenTransition`] with the default easing.
    pub fn with_tween(engine: Pagify<K>) -> Self {
        Self::new(engine, TweenTransition::new(Easing::default()))
    }
}

impl<K, T: Transition> ViewportBinding<K, T> {
    pub fn new(engine: Pagify<K>, transition: T) -> Self {
        let throttle = Throttle::new(engine.config().throttle_window_ms);
        Self {
            engine,
            throttle,
            transition,
        }
    }

    pub fn engine(&self) -> &Pagify<K> {
        &self.engine
    }

    /// Direct engine access, e.g. to add or remove pages. Follow page-set changes with
    /// [`Self::refresh`].
    pub fn engine_mut(&mut self) -> &mut Pagify<K> {
        &mut self.engine
    }

    pub fn into_engine(self) -> Pagify<K> {
        self.engine
    }

    pub fn transition(&self) -> &T {
        &self.transition
    }

    pub fn transition_mut(&mut self) -> &mut T {
        &mut self.transition
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// When the next deferred trigger becomes due, if any. Useful for scheduling a timer.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.throttle.next_deadline_ms()
    }

    /// Submits a trigger through the throttle.
    ///
    /// Returns the resulting turn when the trigger fired right away and moved the view. A
    /// deferred trigger fires later from [`Self::tick`].
    pub fn trigger(&mut self, trigger: Trigger, now_ms: u64) -> Option<PageTurn> {
        let Some(trigger) = self.throttle.call(now_ms, trigger) else {
            atrace!(?trigger, now_ms, "trigger deferred");
            return None;
        };
        self.dispatch(trigger, now_ms)
    }

    pub fn forward(&mut self, now_ms: u64) -> Option<PageTurn> {
        self.trigger(Trigger::Forward, now_ms)
    }

    pub fn backward(&mut self, now_ms: u64) -> Option<PageTurn> {
        self.trigger(Trigger::Backward, now_ms)
    }

    pub fn go_to_page(&mut self, page: usize, now_ms: u64) -> Option<PageTurn> {
        self.trigger(Trigger::GoToPage(page), now_ms)
    }

    /// Navigates immediately, bypassing the throttle.
    pub fn navigate(
        &mut self,
        page: usize,
        options: NavigateOptions,
        now_ms: u64,
    ) -> Option<PageTurn> {
        let turn = self.engine.navigate(page, options)?;
        self.apply(turn, now_ms);
        Some(turn)
    }

    /// Re-applies the layout at the current page, e.g. after pages were added or removed.
    pub fn refresh(&mut self, duration_override_ms: Option<u64>, now_ms: u64) -> Option<PageTurn> {
        let turn = self.engine.refresh(duration_override_ms)?;
        self.apply(turn, now_ms);
        Some(turn)
    }

    /// Replaces the engine configuration, re-settles the view and adopts the new throttle window.
    pub fn reconfigure(
        &mut self,
        config: LayoutConfig,
        duration_override_ms: Option<u64>,
        now_ms: u64,
    ) -> Result<Option<PageTurn>, ConfigError> {
        let window_ms = config.throttle_window_ms;
        let turn = self.engine.reconfigure(config, duration_override_ms)?;
        self.throttle.set_window_ms(window_ms);
        adebug!(window_ms, "ViewportBinding::reconfigure");
        if let Some(turn) = turn {
            self.apply(turn, now_ms);
        }
        Ok(turn)
    }

    /// Advances the binding and returns the offset to apply, if a transition is running.
    ///
    /// See [`Self::advance`] for hosts that also need the turn a deferred trigger produced.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.advance(now_ms).offset_percent
    }

    /// Advances the binding.
    ///
    /// - Fires a deferred trigger once it is due and reports the resulting turn.
    /// - If a transition is running, samples it and reports the offset to apply. When it
    ///   completes the engine returns to idle.
    pub fn advance(&mut self, now_ms: u64) -> ViewportFrame {
        let turn = match self.throttle.poll(now_ms) {
            Some(trigger) => {
                atrace!(?trigger, now_ms, "deferred trigger fired");
                self.dispatch(trigger, now_ms)
            }
            None => None,
        };

        let offset_percent = self.transition.tick(now_ms).map(|frame| {
            if frame.done {
                self.engine.finish_transition();
            }
            frame.offset_percent
        });
        ViewportFrame {
            turn,
            offset_percent,
        }
    }

    /// Reports completion for transitions that finish out of band (e.g. a host animation).
    pub fn on_transition_complete(&mut self) {
        self.transition.cancel();
        self.engine.finish_transition();
    }

    fn dispatch(&mut self, trigger: Trigger, now_ms: u64) -> Option<PageTurn> {
        let turn = match trigger {
            Trigger::Forward => self.engine.turn(TurnDirection::Forward),
            Trigger::Backward => self.engine.turn(TurnDirection::Backward),
            Trigger::GoToPage(page) => self.engine.go_to_page(page),
        }?;
        self.apply(turn, now_ms);
        Some(turn)
    }

    fn apply(&mut self, turn: PageTurn, now_ms: u64) {
        self.transition
            .start(turn.target_offset_percent(), turn.duration_ms, now_ms);
    }
}
