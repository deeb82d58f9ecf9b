//! Restartable Timers
//!
//! Holds at most one live timer handle. Handles cancel on drop, as
//! `gloo_timers` `Interval` and `Timeout` do, so replacing the handle is
//! what stops the previous timer.

use gloo_timers::callback::{Interval, Timeout};

pub struct Ticker<H = Interval> {
    active: Option<H>,
}

impl<H> Default for Ticker<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H> Ticker<H> {
    /// Cancel the running timer (if any), then install the one `start` creates
    pub fn restart(&mut self, start: impl FnOnce() -> H) {
        self.stop();
        self.active = Some(start());
    }

    pub fn stop(&mut self) {
        self.active.take();
    }
}

impl Ticker<Interval> {
    /// Run `tick` now, then every `interval_ms`
    pub fn restart_interval<F>(&mut self, interval_ms: u32, tick: F)
    where
        F: FnMut() + 'static,
    {
        let mut tick = tick;
        tick();
        self.restart(move || Interval::new(interval_ms, tick));
    }
}

impl Ticker<Timeout> {
    /// Run `action` once, `delay_ms` after the most recent call.
    /// Earlier pending actions are dropped unrun.
    pub fn debounce<F>(&mut self, delay_ms: u32, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.restart(move || Timeout::new(delay_ms, action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live handles
    struct FakeTimer(Rc<Cell<i32>>);

    impl FakeTimer {
        fn start(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            FakeTimer(live.clone())
        }
    }

    /// A pending one-shot carrying the value it would save
    struct PendingSave<T> {
        value: T,
        _timer: FakeTimer,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn test_restart_twice_leaves_one_timer() {
        let live = Rc::new(Cell::new(0));
        let mut ticker = Ticker::default();
        ticker.restart(|| FakeTimer::start(&live));
        ticker.restart(|| FakeTimer::start(&live));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn test_old_timer_cancelled_before_new_starts() {
        let live = Rc::new(Cell::new(0));
        let mut ticker = Ticker::default();
        ticker.restart(|| FakeTimer::start(&live));
        ticker.restart(|| {
            assert_eq!(live.get(), 0, "previous timer still alive");
            FakeTimer::start(&live)
        });
    }

    #[test]
    fn test_stop() {
        let live = Rc::new(Cell::new(0));
        let mut ticker = Ticker::default();
        ticker.restart(|| FakeTimer::start(&live));
        ticker.stop();
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_resize_gesture_leaves_one_pending_save() {
        use crate::models::WidgetPosition;
        use crate::presentation::reclamp;
        use leptos_drag::Size;

        let live = Rc::new(Cell::new(0));
        let mut slot: Ticker<PendingSave<WidgetPosition>> = Ticker::default();
        let stored = WidgetPosition { left: 90.0, top: 10.0 };
        let widget = Size::new(200.0, 100.0);

        // Window edge dragged from 1600px down to 1000px in 4px steps
        let mut width = 1600.0;
        while width >= 1000.0 {
            let (_, update) = reclamp(stored, Size::new(width, 500.0), widget);
            if let Some(position) = update {
                slot.restart(|| PendingSave {
                    value: position,
                    _timer: FakeTimer::start(&live),
                });
            }
            width -= 4.0;
        }

        assert_eq!(live.get(), 1);
        let pending = slot.active.as_ref().unwrap();
        assert_eq!(pending.value, WidgetPosition { left: 80.0, top: 10.0 });
    }
}
