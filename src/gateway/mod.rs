//! Wire types for the gateway invocation contract.

mod event;
mod response;

pub use event::GatewayEvent;
pub use response::{GatewayResponse, StatusCode};
