//! RPC accept-loop tasks.
//!
//! A fixed pool of identical tasks shares one server; each owns its socket
//! buffers and serves one connection at a time, which bounds the number of
//! concurrently served connections to the pool size.

use embassy_net::Stack;
use embassy_net::tcp::TcpSocket;
use embassy_time::Duration;
use esp_println::println;

use sevseg_rpc::{ServeError, TcpTransport};

use crate::config;
use crate::controllers::rpc::CounterRpcServer;

const RX_BUFFER_SIZE: usize = 1024;
const TX_BUFFER_SIZE: usize = 4096;

#[embassy_executor::task(pool_size = config::MAX_RPC_CONNECTIONS)]
pub async fn rpc_server_task(stack: Stack<'static>, server: &'static CounterRpcServer) {
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    loop {
        let mut socket = TcpSocket::new(stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(10)));

        if socket.accept(config::HTTP_PORT).await.is_err() {
            continue;
        }

        let mut transport = TcpTransport::new(socket);
        match server.serve_once(&mut transport).await {
            Ok(()) | Err(ServeError::Closed) => {}
            Err(e) => println!("rpc: connection error: {e:?}"),
        }
    }
}
