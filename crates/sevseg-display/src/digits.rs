//! Digit→segment tables and the frame renderer.
//!
//! Segments follow the usual seven-segment numbering (0–6). Each segment
//! maps to a contiguous run of LEDs on the strip; a digit glyph is the
//! union of its active segments.

use crate::color::Rgb;

/// Digits on the display.
pub const NUM_DIGITS: usize = 2;
/// Segments forming one digit glyph.
pub const SEGMENTS_PER_DIGIT: usize = 7;
/// LEDs soldered along one segment.
pub const LEDS_PER_SEGMENT: usize = 12;
/// LEDs forming one digit.
pub const LEDS_PER_DIGIT: usize = SEGMENTS_PER_DIGIT * LEDS_PER_SEGMENT;
/// Total strip length.
pub const NUM_LEDS: usize = NUM_DIGITS * LEDS_PER_DIGIT;

/// Active segment sets for the decimal digits 0–9.
pub const DIGIT_SEGMENTS: [&[u8]; 10] = [
    &[0, 1, 2, 4, 5, 6],    // 0
    &[0, 4],                // 1
    &[0, 1, 3, 5, 6],       // 2
    &[0, 1, 3, 4, 5],       // 3
    &[0, 2, 3, 4],          // 4
    &[1, 2, 3, 4, 5],       // 5
    &[1, 2, 3, 4, 5, 6],    // 6
    &[0, 1, 4],             // 7
    &[0, 1, 2, 3, 4, 5, 6], // 8
    &[0, 1, 2, 3, 4, 5],    // 9
];

/// Split a count into its decimal digits, least significant first.
///
/// Digits beyond [`NUM_DIGITS`] are silently truncated: the display shows
/// `count % 100`.
pub fn split_digits(count: u32) -> [u8; NUM_DIGITS] {
    let mut digits = [0u8; NUM_DIGITS];
    let mut rest = count;
    for digit in &mut digits {
        *digit = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

/// Render `count` into `frame`, filling every LED of each active segment
/// with `color`.
///
/// Inactive segments are left untouched, so callers clear the frame when
/// the displayed value changes. `frame` must hold [`NUM_LEDS`] entries.
pub fn render_digits(count: u32, color: Rgb, frame: &mut [Rgb]) {
    let digits = split_digits(count);
    for (position, digit) in digits.iter().enumerate() {
        let offset = position * LEDS_PER_DIGIT;
        for segment in DIGIT_SEGMENTS[usize::from(*digit)] {
            let start = offset + usize::from(*segment) * LEDS_PER_SEGMENT;
            for led in &mut frame[start..start + LEDS_PER_SEGMENT] {
                *led = color;
            }
        }
    }
}
