//! Calm session — drives a [`CountdownTimer`] from a [`TickerPort`].
//!
//! The ticker runs only while the countdown is running and unfinished; the
//! tick that reaches zero also stops it. The tick callback holds a weak
//! handle to the timer, so once the session is dropped nothing can touch
//! its state.

use std::cell::RefCell;
use std::rc::Rc;

use mindplus_types::{
    Result,
    calm::{TimerState, VisualPreset},
    config::CalmConfig,
};
use crate::event_bus::EventBus;
use crate::ports::TickerPort;
use crate::timer::CountdownTimer;

pub struct CalmSession {
    timer: Rc<RefCell<CountdownTimer>>,
    ticker: Box<dyn TickerPort>,
    tick_interval_ms: u32,
    preset: VisualPreset,
}

impl CalmSession {
    pub fn new(
        config: &CalmConfig,
        preset: VisualPreset,
        event_bus: EventBus,
        ticker: Box<dyn TickerPort>,
    ) -> Result<Self> {
        let timer = CountdownTimer::new(i64::from(config.duration_seconds), event_bus)?;
        Ok(Self {
            timer: Rc::new(RefCell::new(timer)),
            ticker,
            tick_interval_ms: config.tick_interval_ms,
            preset,
        })
    }

    pub fn preset(&self) -> &VisualPreset {
        &self.preset
    }

    /// Swap the theme without touching the countdown.
    pub fn set_preset(&mut self, preset: VisualPreset) {
        self.preset = preset;
    }

    pub fn state(&self) -> TimerState {
        self.timer.borrow().state()
    }

    pub fn remaining_label(&self) -> String {
        self.timer.borrow().remaining_label()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Start (or restart) the countdown from its full duration.
    pub fn activate(&mut self) -> Result<()> {
        self.timer.borrow_mut().restart()?;
        self.sync_ticker();
        Ok(())
    }

    pub fn pause(&mut self) {
        self.timer.borrow_mut().set_running(false);
        self.sync_ticker();
    }

    pub fn resume(&mut self) {
        self.timer.borrow_mut().set_running(true);
        self.sync_ticker();
    }

    /// Follow a start flag owned by the parent screen.
    pub fn set_external_start(&mut self, start: bool) -> Result<()> {
        self.timer.borrow_mut().apply_external_start(start)?;
        self.sync_ticker();
        Ok(())
    }

    /// Start or stop the ticker to match the countdown.
    fn sync_ticker(&mut self) {
        let should_tick = {
            let timer = self.timer.borrow();
            timer.is_running() && !timer.is_finished()
        };

        if should_tick && !self.ticker.is_active() {
            let weak = Rc::downgrade(&self.timer);
            self.ticker.start(
                self.tick_interval_ms,
                Box::new(move || {
                    let Some(timer) = weak.upgrade() else {
                        return false;
                    };
                    let keep_ticking = match timer.try_borrow_mut() {
                        Ok(mut timer) => {
                            timer.tick();
                            timer.is_running() && !timer.is_finished()
                        }
                        Err(_) => {
                            log::debug!("Skipping reentrant calm tick");
                            true
                        }
                    };
                    keep_ticking
                }),
            );
        } else if !should_tick && self.ticker.is_active() {
            self.ticker.stop();
        }
    }

    /// Cancel the ticker. The session can still be reactivated.
    pub fn dispose(&mut self) {
        if self.ticker.is_active() {
            self.ticker.stop();
        }
    }
}

impl Drop for CalmSession {
    fn drop(&mut self) {
        self.dispose();
    }
}
