#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;

use sevseg_display::CounterState;
use sevseg_esp_counter::controllers::rpc::{
    CounterEndpoints,
    CounterRpcServer,
    register_endpoints,
};
use sevseg_esp_counter::infrastructure::drivers::{
    Ws2812Driver,
    init_network_stack,
    wait_for_connection,
};
use sevseg_esp_counter::infrastructure::tasks::{
    network_runner_task,
    render_task,
    rpc_server_task,
    wifi_connection_task,
};
use sevseg_esp_counter::{config, led_gpio, mk_static};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Device state lives for the whole process; tasks share it by reference.
    let state = mk_static!(CounterState, CounterState::new());

    // LED strip and render loop.
    let driver = Ws2812Driver::new(peripherals.RMT, led_gpio!(peripherals));
    spawner.spawn(render_task(driver, state)).ok();

    // Every endpoint registers before the first connection is accepted.
    let endpoints = mk_static!(CounterEndpoints, CounterEndpoints::new(state));
    let mut server = CounterRpcServer::new(config::RPC_PREFIX)
        .with_index_page(sevseg_counter_page::INDEX_PAGE_HTML);
    let rpc_ready = match register_endpoints(&mut server, endpoints) {
        Ok(()) => true,
        Err(e) => {
            println!("rpc: endpoint registration failed: {e:?}, serving disabled");
            false
        }
    };
    let server = mk_static!(CounterRpcServer, server);

    // Network stack and its background tasks.
    let (stack, runner, controller) = init_network_stack(peripherals.WIFI);
    spawner.spawn(wifi_connection_task(controller)).ok();
    spawner.spawn(network_runner_task(runner)).ok();
    wait_for_connection(stack).await;

    if rpc_ready {
        for _ in 0..config::MAX_RPC_CONNECTIONS {
            if let Err(e) = spawner.spawn(rpc_server_task(stack, server)) {
                // The display keeps running without RPC.
                println!("rpc: failed to start server task: {e:?}");
                break;
            }
        }
    }

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
