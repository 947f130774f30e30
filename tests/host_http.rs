//! End-to-end tests: the host serving the function over real HTTP.
//!
//! Starts the host on a random port in a background thread, then drives it
//! with ureq the way the platform's gateway (or curl) would. Covers the
//! request conversion, the platform-level error rendering, the health
//! endpoint, and timeout enforcement, the pieces a direct function
//! invocation never touches.

use placard::prelude::*;
use serde_json::Value;
use std::net::SocketAddr;

/// Start a host for `function` on a random local port.
fn start_host(config: HostConfig, function: impl CloudFunction + 'static) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            FunctionHost::new(config, function).serve(listener).await
        })
    });

    addr
}

/// Client that hands 4xx/5xx back as data instead of `Err`.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

#[test]
fn post_generates_image_over_http() {
    let addr = start_host(HostConfig::new(), GenerateImageFunction);

    let mut response = agent()
        .post(&format!("http://{addr}/"))
        .content_type("application/json")
        .send(r#"{"text":"Patience is a virtue"}"#.as_bytes())
        .expect("HTTP transport error");

    assert_eq!(response.status().as_u16(), 200);

    let body = response.body_mut().read_to_string().unwrap();
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value["imageUrl"],
        "https://placehold.co/800x800/f5f5f5/8B5CF6?text=Patience is a virtue"
    );
    assert_eq!(value["text"], "Patience is a virtue");
}

#[test]
fn get_is_rejected_over_http() {
    let addr = start_host(HostConfig::new(), GenerateImageFunction);

    // The host forwards every path to the function.
    let mut response = agent()
        .get(&format!("http://{addr}/anything/at/all"))
        .call()
        .expect("HTTP transport error");

    assert_eq!(response.status().as_u16(), 405);

    let body = response.body_mut().read_to_string().unwrap();
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"], "Method not allowed");
}

#[test]
fn empty_post_requires_text() {
    let addr = start_host(HostConfig::new(), GenerateImageFunction);

    let mut response = agent()
        .post(&format!("http://{addr}/"))
        .send_empty()
        .expect("HTTP transport error");

    assert_eq!(response.status().as_u16(), 400);

    let body = response.body_mut().read_to_string().unwrap();
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"], "Text is required");
}

#[test]
fn malformed_body_becomes_platform_error() {
    let addr = start_host(HostConfig::new(), GenerateImageFunction);

    let mut response = agent()
        .post(&format!("http://{addr}/"))
        .content_type("application/json")
        .send("not json".as_bytes())
        .expect("HTTP transport error");

    // The function never answered; the host rendered the failure.
    assert_eq!(response.status().as_u16(), 500);

    let body = response.body_mut().read_to_string().unwrap();
    assert!(
        serde_json::from_str::<Value>(&body).is_err(),
        "platform failure must be opaque, not a structured JSON error: {body}"
    );
}

#[test]
fn health_endpoint_bypasses_the_function() {
    let addr = start_host(HostConfig::new(), GenerateImageFunction);

    let mut response = agent()
        .get(&format!("http://{addr}/_health"))
        .call()
        .expect("HTTP transport error");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.body_mut().read_to_string().unwrap(), "OK");
}

/// Function that outlives any reasonable deadline.
struct SleepyFunction;

#[async_trait]
impl CloudFunction for SleepyFunction {
    async fn invoke(
        &self,
        _event: GatewayEvent,
        _ctx: &FunctionContext,
    ) -> Result<GatewayResponse, FunctionError> {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Ok(GatewayResponse::new(StatusCode::OK))
    }

    fn name(&self) -> &str {
        "sleepy"
    }
}

#[test]
fn slow_function_times_out_with_504() {
    let addr = start_host(HostConfig::new().request_timeout(1), SleepyFunction);

    let mut response = agent()
        .post(&format!("http://{addr}/"))
        .send_empty()
        .expect("HTTP transport error");

    assert_eq!(response.status().as_u16(), 504);
    assert_eq!(
        response.body_mut().read_to_string().unwrap(),
        "Function timed out"
    );
}
