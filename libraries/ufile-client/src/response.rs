//! Response normalization for the ufile.io API.
//!
//! The server mixes JSON bodies, raw text, and HTTP status codes depending
//! on the endpoint. Every response funnels through [`normalize`]: a 200
//! hands the body back untouched, anything else becomes a
//! [`UfileError::Server`] carrying the server's `error` field, or the raw
//! body when no such field exists.

use crate::error::{Result, UfileError};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Classify a status + body pair.
///
/// Returns the body unchanged on 200. On any other status, the error message
/// is the `error` field of a JSON object body, or the raw body itself. The
/// body is never swallowed.
pub(crate) fn normalize(status: u16, body: String) -> Result<String> {
    if status == 200 {
        return Ok(body);
    }

    let message = match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(serde_json::Value::Object(fields)) => match fields.get("error") {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            Some(other) => other.to_string(),
            None => body,
        },
        _ => body,
    };

    Err(UfileError::Server { status, message })
}

/// Drain a response and decode the normalized body as JSON.
pub(crate) async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    let body = normalize(status, body)?;
    Ok(serde_json::from_str(&body)?)
}

/// Drain a response and return the normalized body as-is.
pub(crate) async fn text(response: Response) -> Result<String> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    normalize(status, body)
}
