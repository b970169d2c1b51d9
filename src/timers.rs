use std::collections::HashMap;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;

/// One slot per delayed UI effect. Scheduling into a slot replaces (and so
/// cancels) whatever was pending there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    ToastDismiss,
    HeroScroll,
    BookingConfirm,
    ServiceHighlight,
    CounterTick,
}

// Dropping either handle clears the underlying browser timer.
enum Pending {
    Once(Timeout),
    Every(Interval),
}

impl Pending {
    fn kind(&self) -> &'static str {
        match self {
            Pending::Once(_) => "timeout",
            Pending::Every(_) => "interval",
        }
    }
}

#[derive(Default)]
pub struct Timers {
    pending: HashMap<TimerSlot, Pending>,
}

impl Timers {
    pub fn schedule<F>(&mut self, slot: TimerSlot, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(millis, callback);
        if self.pending.insert(slot, Pending::Once(timeout)).is_some() {
            debug!("Replaced pending {:?} timer", slot);
        }
    }

    pub fn every<F>(&mut self, slot: TimerSlot, millis: u32, callback: F)
    where
        F: FnMut() + 'static,
    {
        let interval = Interval::new(millis, callback);
        if self.pending.insert(slot, Pending::Every(interval)).is_some() {
            debug!("Replaced running {:?} interval", slot);
        }
    }

    pub fn cancel(&mut self, slot: TimerSlot) {
        if let Some(pending) = self.pending.remove(&slot) {
            debug!("Cancelled {:?} {}", slot, pending.kind());
        }
    }

    pub fn cancel_all(&mut self) {
        let count = self.pending.len();
        self.pending.clear();
        if count > 0 {
            debug!("Cancelled {} pending timers", count);
        }
    }
}
