//! Wi-Fi station and network stack bring-up.

use core::str::FromStr;

use embassy_net::{DhcpConfig, Runner, Stack, StackResources};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_hal::rng::Rng;
use esp_radio::wifi::{Config as WifiConfig, WifiController, WifiDevice};
use heapless::String;
use static_cell::make_static;

use crate::config;

const MAX_SOCKETS: usize = 8;

pub fn init_network_stack(
    wifi_device: WIFI<'static>,
) -> (
    Stack<'static>,
    Runner<'static, WifiDevice<'static>>,
    WifiController<'static>,
) {
    let radio = &*make_static!(esp_radio::init().unwrap());
    let (controller, interfaces) =
        esp_radio::wifi::new(radio, wifi_device, WifiConfig::default()).unwrap();

    let mut dhcp_config = DhcpConfig::default();
    let hostname = String::from_str(config::DEVICE.hostname).expect("invalid hostname");
    dhcp_config.hostname = Some(hostname);
    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let resources = make_static!(StackResources::<MAX_SOCKETS>::new());
    let (stack, runner) = embassy_net::new(interfaces.sta, net_config, resources, seed());

    (stack, runner, controller)
}

fn seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}

/// Wait for an active link and a DHCP lease.
pub async fn wait_for_connection(stack: Stack<'_>) {
    while !stack.is_link_up() {
        Timer::after(Duration::from_millis(100)).await;
    }
    while stack.config_v4().is_none() {
        Timer::after(Duration::from_millis(100)).await;
    }
}
