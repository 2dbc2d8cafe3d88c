//! Render loop polling the shared state.
//!
//! Two states: idle while the dirty flag is clear, refreshing once it is
//! observed set. A refresh re-applies brightness if it changed, clears the
//! frame if the count changed, then re-renders the digits and pushes the
//! frame. The flag is cleared only after the refresh completed; mutations
//! landing mid-refresh coalesce into the next cycle.

use embassy_time::{Duration, Timer};

use crate::color::{Rgb, rgb_from_u32};
use crate::digits::render_digits;
use crate::driver::LedDriver;
use crate::state::CounterState;

/// Default poll cadence for the dirty flag.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Render engine owning the frame buffer.
///
/// The frame is never shared: request handlers only touch [`CounterState`].
pub struct RenderEngine<'a, D: LedDriver<N>, const N: usize> {
    driver: D,
    state: &'a CounterState,
    frame: [Rgb; N],
    last_count: Option<u32>,
    last_brightness: Option<u8>,
    poll_interval: Duration,
}

impl<'a, D: LedDriver<N>, const N: usize> RenderEngine<'a, D, N> {
    pub fn new(driver: D, state: &'a CounterState) -> Self {
        Self {
            driver,
            state,
            frame: [Rgb::new(0, 0, 0); N],
            last_count: None,
            last_brightness: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the dirty-flag poll cadence.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Poll the dirty flag once, refreshing the display if it was set.
    pub fn poll(&mut self) {
        if self.state.is_dirty() {
            self.refresh();
            self.state.clear_dirty();
        }
    }

    /// Poll once, then wait out the poll interval.
    pub async fn tick(&mut self) {
        self.poll();
        Timer::after(self.poll_interval).await;
    }

    /// Run the render loop indefinitely.
    pub async fn run(&mut self) -> ! {
        loop {
            self.tick().await;
        }
    }

    fn refresh(&mut self) {
        let brightness = self.state.brightness();
        if self.last_brightness != Some(brightness) {
            self.last_brightness = Some(brightness);
            #[cfg(feature = "log")]
            log::info!("display: brightness {}", brightness);
            self.driver.set_brightness(brightness);
        }

        let count = self.state.count();
        if self.last_count != Some(count) {
            self.last_count = Some(count);
            self.frame = [Rgb::new(0, 0, 0); N];
        }

        render_digits(count, rgb_from_u32(self.state.color()), &mut self.frame);
        self.driver.write(&self.frame);
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;
    use crate::digits::NUM_LEDS;

    #[derive(Default)]
    struct RecordingDriver {
        brightness_calls: Vec<u8>,
        frames: Vec<[Rgb; NUM_LEDS]>,
    }

    impl LedDriver<NUM_LEDS> for &mut RecordingDriver {
        fn set_brightness(&mut self, brightness: u8) {
            self.brightness_calls.push(brightness);
        }

        fn write(&mut self, frame: &[Rgb; NUM_LEDS]) {
            self.frames.push(*frame);
        }
    }

    #[test]
    fn idle_poll_does_nothing() {
        let mut driver = RecordingDriver::default();
        let state = CounterState::new();
        state.clear_dirty();
        {
            let mut engine = RenderEngine::new(&mut driver, &state);
            engine.poll();
        }
        assert!(driver.frames.is_empty());
        assert!(driver.brightness_calls.is_empty());
    }

    #[test]
    fn dirty_poll_renders_once_and_clears_the_flag() {
        let mut driver = RecordingDriver::default();
        let state = CounterState::new();
        {
            let mut engine = RenderEngine::new(&mut driver, &state);
            engine.poll(); // construction leaves the state dirty
            assert!(!state.is_dirty());
            engine.poll(); // idle again, nothing pending
        }
        assert_eq!(driver.frames.len(), 1);
        assert_eq!(driver.brightness_calls, [state.brightness()]);
    }

    #[test]
    fn brightness_is_pushed_only_when_changed() {
        let mut driver = RecordingDriver::default();
        let state = CounterState::new();
        {
            let mut engine = RenderEngine::new(&mut driver, &state);
            engine.poll();

            state.increment();
            state.mark_dirty();
            engine.poll();

            state.set_brightness(200);
            state.mark_dirty();
            engine.poll();
        }
        assert_eq!(driver.frames.len(), 3);
        assert_eq!(driver.brightness_calls.len(), 2);
        assert_eq!(driver.brightness_calls.last(), Some(&200));
    }

    #[test]
    fn count_change_clears_stale_segments() {
        let mut driver = RecordingDriver::default();
        let state = CounterState::new();
        state.set_color(0x00FF_0000);
        {
            let mut engine = RenderEngine::new(&mut driver, &state);
            engine.poll();

            state.increment();
            state.mark_dirty();
            engine.poll();
        }

        let mut expected = [Rgb::new(0, 0, 0); NUM_LEDS];
        render_digits(1, rgb_from_u32(0x00FF_0000), &mut expected);
        assert_eq!(driver.frames.last(), Some(&expected));
    }

    #[test]
    fn coalesced_mutations_render_the_latest_state() {
        let mut driver = RecordingDriver::default();
        let state = CounterState::new();
        {
            let mut engine = RenderEngine::new(&mut driver, &state);
            engine.poll();

            for _ in 0..5 {
                state.increment();
                state.mark_dirty();
            }
            engine.poll();
        }

        // Five increments before one poll produce a single frame of "05".
        assert_eq!(driver.frames.len(), 2);
        let mut expected = [Rgb::new(0, 0, 0); NUM_LEDS];
        render_digits(5, rgb_from_u32(state.color()), &mut expected);
        assert_eq!(driver.frames.last(), Some(&expected));
    }
}
