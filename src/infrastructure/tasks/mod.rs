pub mod network;
pub mod render;
pub mod rpc_server;

pub use network::{network_runner_task, wifi_connection_task};
pub use render::render_task;
pub use rpc_server::rpc_server_task;
