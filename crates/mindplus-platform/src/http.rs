//! Shared fetch plumbing for the service clients.
//!
//! Requests go through browser `fetch()` via gloo-net. A bounded request
//! races the fetch against a `TimeoutFuture`; when the timer wins, the
//! `AbortController` cancels the underlying fetch.

use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::AbortController;

use mindplus_types::{MindError, Result};

/// POST a JSON body (or an empty one). With `timeout_ms` set, the fetch is
/// aborted once the deadline passes and `MindError::Timeout` is returned.
pub(crate) async fn post_json(url: &str, body: Option<&Value>, timeout_ms: Option<u64>) -> Result<Response> {
    let controller = match timeout_ms {
        Some(_) => Some(AbortController::new().map_err(|e| MindError::JsInterop(format!("{:?}", e)))?),
        None => None,
    };
    let signal = controller.as_ref().map(|c| c.signal());

    let builder = Request::post(url)
        .header("Content-Type", "application/json")
        .abort_signal(signal.as_ref());
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(network_error)?;

    let send = async move { request.send().await.map_err(network_error) };
    let Some(timeout_ms) = timeout_ms else {
        return send.await;
    };

    let result = with_timeout(send, timeout_ms).await;
    if let Err(MindError::Timeout(_)) = result {
        if let Some(controller) = controller {
            controller.abort();
        }
        log::warn!("Request to {} timed out after {}ms", url, timeout_ms);
    }
    result
}

/// Race `future` against a `timeout_ms` deadline. The loser is dropped.
pub async fn with_timeout<F, T>(future: F, timeout_ms: u64) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let deadline = TimeoutFuture::new(u32::try_from(timeout_ms).unwrap_or(u32::MAX));
    futures::pin_mut!(future, deadline);
    match future::select(future, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(MindError::Timeout(timeout_ms)),
    }
}

/// Pass 2xx responses through; anything else becomes `MindError::Http`
/// carrying the server's `detail` when it sent one.
pub(crate) async fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(MindError::Http {
        status,
        message: error_message(status, &body),
    })
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await.map_err(network_error)?;
    Ok(serde_json::from_str(&text)?)
}

/// User-facing message for a failed response.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").and_then(detail_text))
        .unwrap_or_else(|| format!("Request failed ({})", status))
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(detail.to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn network_error(e: gloo_net::Error) -> MindError {
    MindError::Network(e.to_string())
}
