pub mod led_ws2812;
pub mod network;

pub use led_ws2812::Ws2812Driver;
pub use network::{init_network_stack, wait_for_connection};
