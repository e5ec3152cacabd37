//! Rate limiting for input bursts, driven by caller-supplied timestamps (ms).

/// Leading-edge throttle: lets at most one event through per interval.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns true when an event at `now_ms` should be processed, and
    /// starts a new interval if so.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let open = self.is_open(now_ms);
        if open {
            self.mark(now_ms);
        }
        open
    }

    /// Whether an event at `now_ms` would pass, without consuming the slot.
    #[inline]
    pub fn is_open(&self, now_ms: f64) -> bool {
        !matches!(self.last_ms, Some(last) if now_ms - last < self.interval_ms && now_ms >= last)
    }

    /// Start a new interval at `now_ms`.
    #[inline]
    pub fn mark(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Trailing-edge debounce: collapses a burst into one value delivered
/// `delay_ms` after the last call to [`Debounce::push`].
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    delay_ms: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Replace the pending value and push the deadline out.
    pub fn push(&mut self, value: T, now_ms: f64) {
        self.pending = Some((value, now_ms + self.delay_ms));
    }

    /// Take the pending value once its deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Deadline of the pending value, if any.
    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}
