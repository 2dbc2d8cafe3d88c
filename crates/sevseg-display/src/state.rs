//! Shared device state observed across tasks.
//!
//! Request handlers mutate the state; the render engine consumes it. Every
//! field is an independent atomic, so access is linearizable per field
//! without a global lock. The packed color fits one atomic word, which
//! keeps the three channels from tearing.

use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};

/// Color shown before any client writes one (pure red).
const DEFAULT_COLOR: u32 = 0x00FF_0000;
/// Brightness applied before any client writes one.
const DEFAULT_BRIGHTNESS: u8 = 127;

/// Shared counter state.
///
/// Created once at startup and shared by reference for the lifetime of the
/// process. Field stores are published by the `Release` store on the dirty
/// flag; the render engine pairs it with an `Acquire` load.
#[derive(Debug)]
pub struct CounterState {
    count: AtomicU32,
    color: AtomicU32,
    brightness: AtomicU8,
    dirty: AtomicBool,
}

impl CounterState {
    /// New state, dirty so the first render pass paints the display.
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
            color: AtomicU32::new(DEFAULT_COLOR),
            brightness: AtomicU8::new(DEFAULT_BRIGHTNESS),
            dirty: AtomicBool::new(true),
        }
    }

    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Increment the count, returning the new value.
    pub fn increment(&self) -> u32 {
        self.count.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Decrement the count, refusing to go below zero.
    ///
    /// Returns the new value and whether anything changed.
    pub fn decrement(&self) -> (u32, bool) {
        let mut current = self.count.load(Ordering::Relaxed);
        loop {
            if current == 0 {
                return (0, false);
            }
            match self.count.compare_exchange_weak(
                current,
                current - 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return (current - 1, true),
                Err(observed) => current = observed,
            }
        }
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    /// Packed `0x00RRGGBB` color.
    pub fn color(&self) -> u32 {
        self.color.load(Ordering::Relaxed)
    }

    /// Store a packed color; bits above the low 24 are masked off.
    pub fn set_color(&self, color: u32) {
        self.color.store(color & 0x00FF_FFFF, Ordering::Relaxed);
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.load(Ordering::Relaxed)
    }

    pub fn set_brightness(&self, brightness: u8) {
        self.brightness.store(brightness, Ordering::Relaxed);
    }

    /// Flag that the display no longer matches the state.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Reserved to the render engine, after it has consumed a snapshot.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::Release);
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn increment_returns_the_new_value() {
        let state = CounterState::new();
        assert_eq!(state.increment(), 1);
        assert_eq!(state.increment(), 2);
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn decrement_stops_at_zero() {
        let state = CounterState::new();
        assert_eq!(state.decrement(), (0, false));
        state.increment();
        assert_eq!(state.decrement(), (0, true));
        assert_eq!(state.decrement(), (0, false));
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn reset_zeroes_the_count() {
        let state = CounterState::new();
        for _ in 0..42 {
            state.increment();
        }
        state.reset();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn brightness_round_trips() {
        let state = CounterState::new();
        for value in [0u8, 1, 127, 200, 255] {
            state.set_brightness(value);
            assert_eq!(state.brightness(), value);
        }
    }

    #[test]
    fn color_masks_to_24_bits() {
        let state = CounterState::new();
        state.set_color(0x00FF_0000);
        assert_eq!(state.color(), 0x00FF_0000);
        state.set_color(0xAB00_FF00);
        assert_eq!(state.color(), 0x0000_FF00);
    }

    #[test]
    fn dirty_flag_latches_until_cleared() {
        let state = CounterState::new();
        assert!(state.is_dirty());
        state.clear_dirty();
        assert!(!state.is_dirty());
        state.mark_dirty();
        state.mark_dirty();
        assert!(state.is_dirty());
        state.clear_dirty();
        assert!(!state.is_dirty());
    }

    #[test]
    fn concurrent_increments_are_never_lost() {
        const THREADS: usize = 8;
        const PER_THREAD: u32 = 1_000;

        let state = Arc::new(CounterState::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        state.increment();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(state.count(), THREADS as u32 * PER_THREAD);
    }

    #[test]
    fn concurrent_decrements_never_go_below_zero() {
        const THREADS: usize = 4;

        let state = Arc::new(CounterState::new());
        for _ in 0..2 {
            state.increment();
        }
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    let mut changed = 0u32;
                    for _ in 0..100 {
                        if state.decrement().1 {
                            changed += 1;
                        }
                    }
                    changed
                })
            })
            .collect();
        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        // Only the two stored increments can ever be taken.
        assert_eq!(total, 2);
        assert_eq!(state.count(), 0);
    }
}
