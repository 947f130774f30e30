//! Local HTTP host standing in for the invoking gateway.

use crate::function::{CloudFunction, FunctionContext};
use crate::gateway::{GatewayEvent, GatewayResponse, StatusCode};
use crate::runtime::HostConfig;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Function host serving one cloud function over HTTP.
///
/// The host plays the platform's role at the invocation boundary: it turns
/// HTTP requests into [`GatewayEvent`]s, invokes the function with fresh
/// per-call metadata, enforces the per-call timeout, and renders responses,
/// including the 5xx a caller sees when an invocation fails instead of
/// producing a response.
pub struct FunctionHost {
    /// Host configuration.
    config: HostConfig,
    /// The hosted function.
    function: Arc<dyn CloudFunction>,
}

impl FunctionHost {
    /// Create a new host for the given function.
    pub fn new(config: HostConfig, function: impl CloudFunction + 'static) -> Self {
        Self {
            config,
            function: Arc::new(function),
        }
    }

    /// Create a new host with default configuration.
    pub fn with_defaults(function: impl CloudFunction + 'static) -> Self {
        Self::new(HostConfig::default(), function)
    }

    /// Bind the configured address and serve until the process exits.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!(
            "Function host serving '{}' on {}",
            self.function.name(),
            addr
        );

        self.serve(listener).await
    }

    /// Serve connections from an already-bound listener.
    pub async fn serve(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let function = self.function.clone();
        let config = self.config.clone();

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);

            let function = function.clone();
            let config = config.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let function = function.clone();
                    let config = config.clone();
                    async move { handle_request(req, function, config, remote_addr).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!("Error serving connection: {:?}", err);
                }
            });
        }
    }
}

/// Handle an incoming HTTP request.
async fn handle_request(
    req: Request<Incoming>,
    function: Arc<dyn CloudFunction>,
    config: HostConfig,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    let method = req.method().clone();
    let request_id = generate_request_id();

    debug!(
        "Handling request: {} {} from {} [{}]",
        method, path, remote_addr, request_id
    );

    if config.enable_health && path == "/_health" {
        return Ok(build_response(GatewayResponse::text("OK")));
    }

    // Convert the hyper request into a gateway event
    let event = match convert_request(req, &config).await {
        Ok(event) => event,
        Err(e) => {
            warn!("Failed to convert request: {}", e);
            return Ok(build_response(GatewayResponse::error(
                StatusCode::BAD_REQUEST,
                e.to_string(),
            )));
        }
    };

    let ctx = FunctionContext::new(function.name(), &request_id);
    let deadline = Duration::from_secs(config.request_timeout);

    // Invoke the function. An Err here is an unhandled function failure;
    // converting it into a 5xx response is this host's job, not the
    // function's.
    match tokio::time::timeout(deadline, function.invoke(event, &ctx)).await {
        Ok(Ok(response)) => Ok(build_response(response)),
        Ok(Err(e)) => {
            error!("Function '{}' error: {} [{}]", function.name(), e, request_id);
            Ok(build_response(e.into()))
        }
        Err(_) => {
            warn!(
                "Function '{}' timed out after {}s [{}]",
                function.name(),
                config.request_timeout,
                request_id
            );
            Ok(build_response(GatewayResponse::error(
                StatusCode::GATEWAY_TIMEOUT,
                "Function timed out",
            )))
        }
    }
}

/// Convert a hyper Request to a GatewayEvent.
async fn convert_request(
    req: Request<Incoming>,
    config: &HostConfig,
) -> Result<GatewayEvent, Box<dyn std::error::Error + Send + Sync>> {
    let http_method = req.method().as_str().to_string();

    let mut headers = HashMap::new();
    for (name, value) in req.headers() {
        if let Ok(v) = value.to_str() {
            headers.insert(name.as_str().to_string(), v.to_string());
        }
    }

    let body_bytes = req.collect().await?.to_bytes();
    let body = if body_bytes.len() > config.max_body_size {
        return Err("Request body too large".into());
    } else if body_bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body_bytes).into_owned())
    };

    Ok(GatewayEvent {
        http_method,
        headers,
        body,
    })
}

/// Build a hyper Response from a GatewayResponse.
fn build_response(gateway_response: GatewayResponse) -> Response<Full<Bytes>> {
    let status =
        hyper::StatusCode::from_u16(gateway_response.status_code.0).unwrap_or_else(|_| {
            warn!(
                "Invalid status code {}, falling back to 500 Internal Server Error",
                gateway_response.status_code.0
            );
            hyper::StatusCode::INTERNAL_SERVER_ERROR
        });

    let mut builder = Response::builder().status(status);

    for (name, value) in gateway_response.headers {
        builder = builder.header(name, value);
    }

    let body = Bytes::from(gateway_response.body);
    builder.body(Full::new(body)).unwrap()
}

/// Generate a unique request ID.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{:x}", timestamp)
}
