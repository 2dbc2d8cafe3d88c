//! Counter endpoints bound to the RPC server.
//!
//! The device's command surface: `up`, `down` and `reset` as POST actions,
//! `count` as a GET action, brightness and color as properties. Every
//! mutating endpoint marks the shared state dirty so the render loop picks
//! the change up on its next poll.

use core::fmt::Write as _;

use sevseg_display::CounterState;
use sevseg_rpc::{
    Action,
    HandlerError,
    Method,
    Property,
    RegisterError,
    ResponseWriter,
    RpcRequest,
    RpcServer,
};

/// Route-table capacity: four actions plus two GET/POST property pairs.
pub const MAX_HANDLERS: usize = 8;
/// Response buffer handed to every handler.
pub const RESPONSE_SIZE: usize = 64;

pub type CounterRpcServer = RpcServer<'static, MAX_HANDLERS, RESPONSE_SIZE>;

/// Increment the count and echo the new value.
pub struct UpEndpoint {
    state: &'static CounterState,
}

impl Action for UpEndpoint {
    fn invoke(
        &self,
        _request: &RpcRequest<'_>,
        out: &mut ResponseWriter<'_>,
    ) -> Result<(), HandlerError> {
        let count = self.state.increment();
        write!(out, "{count:02}")?;
        self.state.mark_dirty();
        Ok(())
    }
}

/// Decrement the count and echo it; the count never goes below zero.
pub struct DownEndpoint {
    state: &'static CounterState,
}

impl Action for DownEndpoint {
    fn invoke(
        &self,
        _request: &RpcRequest<'_>,
        out: &mut ResponseWriter<'_>,
    ) -> Result<(), HandlerError> {
        let (count, changed) = self.state.decrement();
        write!(out, "{count:02}")?;
        if changed {
            self.state.mark_dirty();
        }
        Ok(())
    }
}

/// Echo the current count.
pub struct CountEndpoint {
    state: &'static CounterState,
}

impl Action for CountEndpoint {
    fn invoke(
        &self,
        _request: &RpcRequest<'_>,
        out: &mut ResponseWriter<'_>,
    ) -> Result<(), HandlerError> {
        write!(out, "{:02}", self.state.count())?;
        Ok(())
    }
}

/// Zero the count and echo it.
pub struct ResetEndpoint {
    state: &'static CounterState,
}

impl Action for ResetEndpoint {
    fn invoke(
        &self,
        _request: &RpcRequest<'_>,
        out: &mut ResponseWriter<'_>,
    ) -> Result<(), HandlerError> {
        self.state.reset();
        write!(out, "{:02}", 0)?;
        self.state.mark_dirty();
        Ok(())
    }
}

/// Strip brightness. Wire type is `u16`; the setter clamps to `0..=255`
/// and the POST response echoes the clamped value.
pub struct BrightnessProperty {
    state: &'static CounterState,
}

impl Property for BrightnessProperty {
    type Value = u16;

    fn get(&self) -> u16 {
        u16::from(self.state.brightness())
    }

    fn set(&self, value: u16) {
        self.state.set_brightness(value.min(255) as u8);
        self.state.mark_dirty();
    }
}

/// Digit color as a packed `0xRRGGBB` integer.
pub struct ColorProperty {
    state: &'static CounterState,
}

impl Property for ColorProperty {
    type Value = u32;

    fn get(&self) -> u32 {
        self.state.color()
    }

    fn set(&self, value: u32) {
        self.state.set_color(value);
        self.state.mark_dirty();
    }
}

/// All endpoint objects, kept alive for the life of the server.
pub struct CounterEndpoints {
    up: UpEndpoint,
    down: DownEndpoint,
    count: CountEndpoint,
    reset: ResetEndpoint,
    brightness: BrightnessProperty,
    color: ColorProperty,
}

impl CounterEndpoints {
    pub fn new(state: &'static CounterState) -> Self {
        Self {
            up: UpEndpoint { state },
            down: DownEndpoint { state },
            count: CountEndpoint { state },
            reset: ResetEndpoint { state },
            brightness: BrightnessProperty { state },
            color: ColorProperty { state },
        }
    }
}

/// Register the whole command surface. Must complete before serving.
pub fn register_endpoints(
    server: &mut CounterRpcServer,
    endpoints: &'static CounterEndpoints,
) -> Result<(), RegisterError> {
    server.register_handler("up", Method::Post, &endpoints.up)?;
    server.register_handler("down", Method::Post, &endpoints.down)?;
    server.register_handler("count", Method::Get, &endpoints.count)?;
    server.register_handler("reset", Method::Post, &endpoints.reset)?;
    server.register_property("brightness", &endpoints.brightness)?;
    server.register_property("color", &endpoints.color)
}
