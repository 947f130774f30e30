//! # Placard - Share-Card Function & Host
//!
//! Placard is the backend function of the proverb generator: it accepts a
//! short piece of text and answers with a deterministically constructed
//! placeholder-image URL embedding that text. The function is written
//! against the gateway invocation contract (event in, structured response
//! out) and ships with a small HTTP host that plays the platform's role for
//! local development.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              HTTP gateway (the platform)                 │
//! │        locally: FunctionHost on 0.0.0.0:8080             │
//! └──────────────────────────────────────────────────────────┘
//!                   │ GatewayEvent          ▲ GatewayResponse
//!                   ▼                       │
//! ┌──────────────────────────────────────────────────────────┐
//! │        GenerateImageFunction  (impl CloudFunction)       │
//! │   OPTIONS → CORS preflight                               │
//! │   POST    → {"imageUrl": ..., "text": ...}               │
//! │   other   → 405                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use placard::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     // Serve the function on the default 0.0.0.0:8080
//!     let host = FunctionHost::with_defaults(GenerateImageFunction);
//!     host.run().await
//! }
//! ```
//!
//! ## Error semantics
//!
//! The function recovers method and validation problems itself (405/400
//! responses with a JSON `error` body). A request body that is not valid
//! JSON is deliberately **not** recovered: the parse error escapes `invoke`
//! as a [`FunctionError`], and the invoking platform (here, the host)
//! renders the 5xx the caller sees. Callers depend on the observable split
//! between a validation 400 and a platform failure.

pub mod function;
pub mod gateway;
pub mod runtime;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::function::{
        CloudFunction, FunctionContext, FunctionError, GenerateImageFunction,
    };
    pub use crate::gateway::{GatewayEvent, GatewayResponse, StatusCode};
    pub use crate::runtime::{FunctionHost, HostConfig};
    pub use async_trait::async_trait;
}

// Re-export for convenience
pub use function::{CloudFunction, FunctionContext, FunctionError, GenerateImageFunction};
pub use gateway::{GatewayEvent, GatewayResponse, StatusCode};
pub use runtime::{FunctionHost, HostConfig};
