//! Quiescence-window debouncing.
//!
//! Every new value gets a ticket and only the newest ticket can commit.
//! `Debouncer` also owns the handle of the timer armed for the newest value
//! (a `gloo_timers` `Timeout` in the browser), so scheduling again or
//! cancelling drops the previous timer.

/// Quiescence window for the directory search box.
pub const SEARCH_DEBOUNCE_MS: u32 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T, H = ()> {
    generation: u64,
    pending: Option<T>,
    timer: Option<H>,
}

impl<T, H> Default for Debouncer<T, H> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
            timer: None,
        }
    }
}

impl<T, H> Debouncer<T, H> {
    /// Replaces any pending value and arms a timer for it with `arm`.
    /// The previous timer is dropped and earlier tickets become stale.
    pub fn schedule(&mut self, value: T, arm: impl FnOnce(Ticket) -> H) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        let ticket = Ticket(self.generation);
        self.timer = Some(arm(ticket));
        ticket
    }

    /// Takes the pending value if `ticket` is still the newest one.
    ///
    /// The timer handle is left alone: this runs from inside that timer's
    /// callback.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending value and the armed timer, and invalidates every
    /// outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.timer = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
