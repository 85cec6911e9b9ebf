/// A host-clock driven rate limiter that coalesces bursts of calls.
///
/// The first call after an idle period of at least `window_ms` fires immediately. A call that
/// arrives sooner is deferred until `last_fired + window_ms`, replacing any call already waiting,
/// so only the latest call of a burst fires. A window of `0` disables throttling.
///
/// The throttle never reads a clock: callers pass `now_ms` and drive deferred calls with
/// [`Throttle::poll`] from their frame loop or timer.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    window_ms: u64,
    last_fired_ms: Option<u64>,
    pending: Option<Deferred<T>>,
}

#[derive(Clone, Debug)]
struct Deferred<T> {
    due_ms: u64,
    value: T,
}

impl<T> Throttle<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_fired_ms: None,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Changes the window. A waiting call is rescheduled against the new window.
    pub fn set_window_ms(&mut self, window_ms: u64) {
        self.window_ms = window_ms;
        if let (Some(last), Some(pending)) = (self.last_fired_ms, self.pending.as_mut()) {
            pending.due_ms = last.saturating_add(window_ms);
        }
    }

    /// Submits a call.
    ///
    /// Returns `Some(value)` when the call fires now; `None` when it was deferred.
    pub fn call(&mut self, now_ms: u64, value: T) -> Option<T> {
        if self.window_ms == 0 {
            self.pending = None;
            self.last_fired_ms = Some(now_ms);
            return Some(value);
        }

        match self.last_fired_ms {
            Some(last) if now_ms < last.saturating_add(self.window_ms) => {
                let due_ms = last.saturating_add(self.window_ms);
                if self.pending.is_some() {
                    ptrace!(now_ms, due_ms, "throttle: replacing deferred call");
                }
                self.pending = Some(Deferred { due_ms, value });
                None
            }
            _ => {
                // Anything still waiting is older than this call.
                self.pending = None;
                self.last_fired_ms = Some(now_ms);
                Some(value)
            }
        }
    }

    /// Fires the deferred call once it is due.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due_ms = self.pending.as_ref()?.due_ms;
        if now_ms < due_ms {
            return None;
        }
        let deferred = self.pending.take()?;
        self.last_fired_ms = Some(deferred.due_ms);
        Some(deferred.value)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the deferred call (if any) becomes due.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|d| d.due_ms)
    }

    /// Drops the deferred call without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|d| d.value)
    }

    /// Forgets the firing history and any deferred call.
    pub fn reset(&mut self) {
        self.last_fired_ms = None;
        self.pending = None;
    }
}
