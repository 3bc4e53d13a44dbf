//! Governance values that only take effect after a fixed delay.
//!
//! Every parameter keeps the value currently in force, a staged value and
//! the time it was staged. Readers always ask for the value at a given
//! instant, so a staged value switches in on its own once the delay passes.

/// Current and staged value of one governance parameter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DelayedParameter<T> {
    pub current: T,
    pub pending: T,
    pub pending_since: u64,
}

impl<T: Clone> DelayedParameter<T> {
    /// Parameter with no staged change.
    pub fn new(value: T, now: u64) -> Self {
        DelayedParameter {
            current: value.clone(),
            pending: value,
            pending_since: now,
        }
    }

    pub fn value(&self, now: u64, delay: u64) -> T {
        if self.is_pending_effective(now, delay) {
            self.pending.clone()
        } else {
            self.current.clone()
        }
    }

    /// Stage a new value.
    ///
    /// A staged value whose delay already ran out is promoted to `current`
    /// first. One that is still waiting is replaced and never takes effect.
    pub fn stage(&mut self, value: T, now: u64, delay: u64) {
        if self.is_pending_effective(now, delay) {
            self.current = self.pending.clone();
        }
        self.pending = value;
        self.pending_since = now;
    }

    fn is_pending_effective(&self, now: u64, delay: u64) -> bool {
        now.saturating_sub(self.pending_since) >= delay
    }

    pub fn into_parts(self) -> (T, T, u64) {
        (self.current, self.pending, self.pending_since)
    }

    pub fn from_parts(parts: (T, T, u64)) -> Self {
        DelayedParameter {
            current: parts.0,
            pending: parts.1,
            pending_since: parts.2,
        }
    }
}
