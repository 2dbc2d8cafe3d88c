//! Color helpers shared by the renderer and drivers.

/// Per-LED color type used throughout the display stack.
pub type Rgb = smart_leds::RGB<u8>;

/// Create an RGB color from a packed `0x00RRGGBB` value.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
