//! Local host runtime that invokes the function the way the platform does.

mod config;
mod server;

pub use config::HostConfig;
pub use server::FunctionHost;
