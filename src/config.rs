//! Device configuration.

pub struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub struct DeviceConfig {
    pub name: &'static str,
    pub hostname: &'static str,
}

pub const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
};

pub const DEVICE: DeviceConfig = DeviceConfig {
    name: "7 Segment Counter",
    hostname: "sevseg-counter",
};

/// TCP port the HTTP surface listens on.
pub const HTTP_PORT: u16 = 80;
/// URI namespace for the RPC endpoints.
pub const RPC_PREFIX: &str = "/rpc/";
/// Upper bound on concurrently served connections.
pub const MAX_RPC_CONNECTIONS: usize = 5;
/// Dirty-flag poll cadence of the render loop, in milliseconds.
pub const RENDER_POLL_MS: u64 = 100;

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}
