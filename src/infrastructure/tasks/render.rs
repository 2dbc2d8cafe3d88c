//! Render loop task.

use embassy_time::Duration;

use sevseg_display::{CounterState, NUM_LEDS, RenderEngine};

use crate::config;
use crate::infrastructure::drivers::Ws2812Driver;

/// Poll the dirty flag and repaint the strip when commands change state.
#[embassy_executor::task]
pub async fn render_task(driver: Ws2812Driver<'static>, state: &'static CounterState) {
    let mut engine: RenderEngine<'static, Ws2812Driver<'static>, NUM_LEDS> =
        RenderEngine::new(driver, state)
            .with_poll_interval(Duration::from_millis(config::RENDER_POLL_MS));
    engine.run().await
}
