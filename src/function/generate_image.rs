//! Share-card function: turns proverb text into a placeholder image URL.

use crate::function::{CloudFunction, FunctionContext, FunctionError};
use crate::gateway::{GatewayEvent, GatewayResponse, StatusCode};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Fixed placehold.co template: 800x800 canvas, light background, violet text.
const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/800x800/f5f5f5/8B5CF6";

/// Number of characters of text embedded into the image URL. The response
/// still echoes the full text.
const URL_TEXT_LIMIT: usize = 50;

/// Body accepted on POST. Every field other than `text` is ignored.
#[derive(Debug, Deserialize)]
struct ImageRequest {
    /// Text to render; `null` counts as absent.
    #[serde(default)]
    text: Option<String>,
}

/// Generates share-card image URLs for proverb text.
///
/// `POST` with a JSON body `{"text": "..."}` answers with
/// `{"imageUrl": "...", "text": "..."}`; `OPTIONS` answers the CORS
/// preflight; every other method is a 405. A body that is not valid JSON is
/// not handled here at all; the resulting [`FunctionError`] escapes to the
/// platform.
pub struct GenerateImageFunction;

#[async_trait]
impl CloudFunction for GenerateImageFunction {
    async fn invoke(
        &self,
        event: GatewayEvent,
        _ctx: &FunctionContext,
    ) -> Result<GatewayResponse, FunctionError> {
        match event.http_method.as_str() {
            "OPTIONS" => Ok(Self::preflight()),
            "POST" => Self::generate(&event),
            _ => Self::rejection(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
        }
    }

    fn name(&self) -> &str {
        "generate-image"
    }
}

impl GenerateImageFunction {
    /// CORS preflight response: empty body, no Content-Type.
    fn preflight() -> GatewayResponse {
        GatewayResponse::new(StatusCode::OK)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400")
    }

    /// Structured JSON error the caller is meant to see.
    fn rejection(
        status: StatusCode,
        message: &str,
    ) -> Result<GatewayResponse, FunctionError> {
        Ok(GatewayResponse::json(status, &json!({ "error": message }))?
            .header("Access-Control-Allow-Origin", "*"))
    }

    /// POST path: parse the body, validate the text, build the URL.
    fn generate(event: &GatewayEvent) -> Result<GatewayResponse, FunctionError> {
        // An absent, null, or blank body parses as an empty object.
        let raw = match event.body.as_deref() {
            Some(body) if !body.trim().is_empty() => body,
            _ => "{}",
        };
        let request: ImageRequest = serde_json::from_str(raw)?;

        let text = request.text.unwrap_or_default();
        if text.is_empty() {
            return Self::rejection(StatusCode::BAD_REQUEST, "Text is required");
        }

        // First 50 characters only; the text lands in the query string
        // verbatim. The unencoded URL shape is part of the contract.
        let excerpt: String = text.chars().take(URL_TEXT_LIMIT).collect();
        let image_url = format!("{PLACEHOLDER_IMAGE_BASE}?text={excerpt}");

        Ok(
            GatewayResponse::json(StatusCode::OK, &json!({ "imageUrl": image_url, "text": text }))?
                .header("Access-Control-Allow-Origin", "*"),
        )
    }
}
