//! Timer-driven UI state: loading progress, story rotation, typewriter.
//!
//! Each timer owns its own signals and is cleared when the owning view is
//! disposed.

use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Loading-screen progress in percent, advanced by random increments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadingProgress {
    value: f64,
}

impl LoadingProgress {
    pub const COMPLETE: f64 = 100.0;

    /// Advance by `step` percent. Returns true once progress has reached 100.
    pub fn advance(&mut self, step: f64) -> bool {
        if !self.is_complete() && step.is_finite() {
            self.value = (self.value + step.max(0.0)).min(Self::COMPLETE);
        }
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.value >= Self::COMPLETE
    }

    /// Whole percent shown under the progress bar
    pub fn percent(&self) -> u8 {
        self.value.clamp(0.0, Self::COMPLETE).floor() as u8
    }
}

/// Index following `current` in a list of `len` items, wrapping to the start
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Type-hold-delete cycle over a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    word: Vec<char>,
    shown: usize,
    deleting: bool,
    type_ms: u64,
    delete_ms: u64,
    hold_ms: u64,
}

impl Typewriter {
    pub fn new(word: &str, type_ms: u64, delete_ms: u64, hold_ms: u64) -> Self {
        Self {
            word: word.chars().collect(),
            shown: 0,
            deleting: false,
            type_ms,
            delete_ms,
            hold_ms,
        }
    }

    /// Advance one character and return the delay before the next tick
    pub fn tick(&mut self) -> u64 {
        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.type_ms
            } else {
                self.delete_ms
            }
        } else {
            self.shown = (self.shown + 1).min(self.word.len());
            if self.shown == self.word.len() {
                self.deleting = true;
                self.hold_ms
            } else {
                self.type_ms
            }
        }
    }

    pub fn text(&self) -> String {
        self.word[..self.shown].iter().collect()
    }

    pub fn first_delay(&self) -> u64 {
        self.type_ms
    }
}

/// Repeating timer cleared when the current owner is disposed
pub fn use_interval(period: Duration, tick: impl Fn() + 'static) -> Option<IntervalHandle> {
    match set_interval_with_handle(tick, period) {
        Ok(handle) => {
            on_cleanup(move || handle.clear());
            Some(handle)
        }
        Err(err) => {
            tracing::warn!(?err, "failed to start interval");
            None
        }
    }
}

/// One-shot timer cleared if the current owner is disposed before it fires
pub fn use_timeout(delay: Duration, fire: impl FnOnce() + 'static) {
    match set_timeout_with_handle(fire, delay) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => tracing::warn!(?err, "failed to start timeout"),
    }
}

/// Loading percentage that climbs on every tick and stops at 100
pub fn use_loading_progress(tick: Duration, max_step: f64) -> ReadSignal<u8> {
    let (percent, set_percent) = create_signal(0u8);
    let progress = RefCell::new(LoadingProgress::default());
    let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::default();

    let own_handle = Rc::clone(&handle);
    let started = use_interval(tick, move || {
        let mut progress = progress.borrow_mut();
        let complete = progress.advance(js_sys::Math::random() * max_step);
        set_percent.set(progress.percent());
        if complete {
            if let Some(handle) = own_handle.take() {
                handle.clear();
            }
        }
    });
    handle.set(started);

    percent
}

/// Highlighted index that advances every `period` and wraps around
pub fn use_rotation(len: usize, period: Duration) -> (ReadSignal<usize>, WriteSignal<usize>) {
    let (active, set_active) = create_signal(0usize);
    use_interval(period, move || set_active.update(|i| *i = next_index(*i, len)));
    (active, set_active)
}

/// Text of a looping typewriter effect
pub fn use_typewriter(typewriter: Typewriter) -> ReadSignal<String> {
    let (text, set_text) = create_signal(String::new());
    let first_delay = typewriter.first_delay();
    let state = Rc::new(RefCell::new(typewriter));
    let pending: Rc<Cell<Option<TimeoutHandle>>> = Rc::default();

    schedule_typewriter(state, set_text, Rc::clone(&pending), first_delay);
    on_cleanup(move || {
        if let Some(handle) = pending.take() {
            handle.clear();
        }
    });

    text
}

fn schedule_typewriter(
    state: Rc<RefCell<Typewriter>>,
    set_text: WriteSignal<String>,
    pending: Rc<Cell<Option<TimeoutHandle>>>,
    delay_ms: u64,
) {
    let next_pending = Rc::clone(&pending);
    let scheduled = set_timeout_with_handle(
        move || {
            let next_delay = {
                let mut typewriter = state.borrow_mut();
                let delay = typewriter.tick();
                set_text.set(typewriter.text());
                delay
            };
            schedule_typewriter(state, set_text, next_pending, next_delay);
        },
        Duration::from_millis(delay_ms),
    );
    match scheduled {
        Ok(handle) => pending.set(Some(handle)),
        Err(err) => tracing::warn!(?err, "failed to schedule typewriter tick"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_and_completes() {
        let mut progress = LoadingProgress::default();
        assert!(!progress.advance(14.9));
        assert_eq!(progress.percent(), 14);
        assert!(!progress.advance(80.0));
        assert_eq!(progress.percent(), 94);
        assert!(progress.advance(15.0));
        assert_eq!(progress.percent(), 100);
        assert!(progress.advance(15.0));
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_progress_ignores_bad_steps() {
        let mut progress = LoadingProgress::default();
        progress.advance(-5.0);
        progress.advance(f64::NAN);
        assert_eq!(progress.percent(), 0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_reaches_completion_with_bounded_steps() {
        let mut progress = LoadingProgress::default();
        let mut ticks = 0;
        while !progress.advance(7.5) {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(ticks, 13);
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(next_index(5, 0), 0);
    }

    #[test]
    fn test_typewriter_cycle() {
        let mut typewriter = Typewriter::new("HIM", 120, 80, 1500);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.tick(), 120);
        assert_eq!(typewriter.text(), "H");
        assert_eq!(typewriter.tick(), 120);
        assert_eq!(typewriter.tick(), 1500);
        assert_eq!(typewriter.text(), "HIM");
        assert_eq!(typewriter.tick(), 80);
        assert_eq!(typewriter.text(), "HI");
        assert_eq!(typewriter.tick(), 80);
        assert_eq!(typewriter.tick(), 120);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.tick(), 120);
        assert_eq!(typewriter.text(), "H");
    }

    #[test]
    fn test_typewriter_empty_word() {
        let mut typewriter = Typewriter::new("", 120, 80, 1500);
        assert_eq!(typewriter.tick(), 1500);
        assert_eq!(typewriter.tick(), 120);
        assert_eq!(typewriter.text(), "");
    }
}
