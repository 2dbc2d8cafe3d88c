//! Wi-Fi and network stack background tasks.

use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_println::println;
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    ModeConfig,
    WifiController,
    WifiDevice,
    WifiEvent,
    WifiStaState,
};

use crate::config;

/// Keep the station associated; reconnect after drops.
#[embassy_executor::task]
pub async fn wifi_connection_task(mut controller: WifiController<'static>) {
    loop {
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            Timer::after(Duration::from_millis(2000)).await;
        }
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = if config::WIFI.password.is_empty() {
                ClientConfig::default()
                    .with_ssid(config::WIFI.ssid.into())
                    .with_auth_method(AuthMethod::None)
            } else {
                ClientConfig::default()
                    .with_ssid(config::WIFI.ssid.into())
                    .with_password(config::WIFI.password.into())
            };
            controller
                .set_config(&ModeConfig::Client(client_config))
                .unwrap();
            controller.start_async().await.unwrap();
        }

        println!("net: connecting to {}", config::WIFI.ssid);
        if let Err(e) = controller.connect_async().await {
            println!("net: connect failed: {e:?}");
            Timer::after(Duration::from_millis(5000)).await;
        }
    }
}

/// Drive the network stack.
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
