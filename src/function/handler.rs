//! Cloud function trait, invocation context, and error type.

use crate::gateway::{GatewayEvent, GatewayResponse};
use async_trait::async_trait;

/// Invocation metadata passed alongside every event.
///
/// The platform fills this in per call; functions may use it for logging and
/// tracing but their core logic does not depend on it.
#[derive(Debug, Clone, Default)]
pub struct FunctionContext {
    /// Name of the invoked function.
    pub function_name: String,
    /// Request ID for tracing.
    pub request_id: String,
}

impl FunctionContext {
    /// Create a new function context.
    pub fn new(function_name: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            request_id: request_id.into(),
        }
    }
}

/// A function invoked by the gateway, one call per HTTP request.
///
/// Implementations are stateless: every invocation is independent, and the
/// host may run any number of them concurrently. An `Err` from `invoke` is
/// an unhandled failure: the function did not produce a response, and the
/// invoking platform decides what the caller sees.
#[async_trait]
pub trait CloudFunction: Send + Sync {
    /// Handle one gateway event.
    async fn invoke(
        &self,
        event: GatewayEvent,
        ctx: &FunctionContext,
    ) -> Result<GatewayResponse, FunctionError>;

    /// Get the function name.
    fn name(&self) -> &str;
}

/// Failure escaping a function invocation.
///
/// This is the platform-failure channel, not a structured HTTP error: a
/// function that wants the caller to see a 4xx returns an `Ok` response
/// with that status instead.
#[derive(Debug, Clone)]
pub struct FunctionError {
    /// Error message.
    pub message: String,
    /// Status code the platform reports, 500 unless set explicitly.
    pub code: u16,
}

impl FunctionError {
    /// Create a new FunctionError with code 500.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 500,
        }
    }

    /// Create a FunctionError with a specific code.
    pub fn with_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl std::fmt::Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for FunctionError {}

impl From<serde_json::Error> for FunctionError {
    fn from(err: serde_json::Error) -> Self {
        FunctionError::new(err.to_string())
    }
}

impl From<FunctionError> for GatewayResponse {
    fn from(err: FunctionError) -> Self {
        GatewayResponse::error(err.code, err.message)
    }
}
