//! WS2812 strip driver over the RMT peripheral.
//!
//! The RMT peripheral generates the precise timing the WS2812B data line
//! requires; brightness is applied at write time, matching the
//! strip-global scalar the render engine pushes.

use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal::xtensa_lx::interrupt;
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::{SmartLedsWrite, brightness};
use static_cell::make_static;

use sevseg_display::{LedDriver, NUM_LEDS, Rgb};

/// LED driver for the counter strip.
pub struct Ws2812Driver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(NUM_LEDS) }>,
    brightness: u8,
}

impl<'a> Ws2812Driver<'a> {
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).unwrap();

        // The RMT conversion buffer must outlive the adapter.
        let rmt_buffer = make_static!(smart_led_buffer!(NUM_LEDS));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self {
            adapter,
            brightness: 0,
        }
    }
}

impl LedDriver<NUM_LEDS> for Ws2812Driver<'static> {
    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    fn write(&mut self, frame: &[Rgb; NUM_LEDS]) {
        interrupt::free(|| {
            let _ = self
                .adapter
                .write(brightness(frame.iter().copied(), self.brightness));
        });
    }
}
