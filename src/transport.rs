//! Shared request routine behind every lookup

use log::{debug, error, trace};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::response::ApiResponse;
use crate::Endpoint;

/// Statuses treated as an unavailable service; the body is never read
pub const SERVER_ERROR_STATUSES: [u16; 5]
  = [500, 502, 503, 504, 408];

pub fn is_server_error(status: u16) -> bool
{   SERVER_ERROR_STATUSES.contains(&status)
}

/// Decode a response body as a JSON object.
///
/// Any status outside [`SERVER_ERROR_STATUSES`] lands here, 4xx included,
/// so service-reported errors come back as data.
pub fn decode_body(status: u16, body: &[u8]) -> Result<ApiResponse>
{   serde_json::from_slice::<ApiResponse>(body).map_err(|e| {
      error!("Undecodable body (HTTP {}): {}", status, e);
      Error::from(e)
    })
}

/// POST `payload` as JSON to `endpoint` and interpret the reply
pub async fn post_json<P>(
  http: &reqwest::Client
, config: &ClientConfig
, endpoint: Endpoint
, payload: &P
) -> Result<ApiResponse>
where
  P: Serialize + ?Sized
{   let url = config.url_for(endpoint);
    debug!("POST {}", url);
    if log::log_enabled!(log::Level::Trace)
    {   trace!(
          "Request body: {}",
          serde_json::to_string(payload).unwrap_or_default()
        );
    }

    let response = http
      .post(&url)
      .header("Authorization", format!("Bearer {}", config.api_key))
      .header("Content-Type", "application/json")
      .timeout(config.timeout())
      .json(payload)
      .send()
      .await
      .map_err(|e| {
        error!("HTTP error: {}", e);
        Error::from(e)
      })?;

    let status = response.status().as_u16();
    trace!("Response status: {}", status);

    if is_server_error(status)
    {   error!("Server unavailable: HTTP {}", status);
        return Err(Error::Server(status));
    }

    let body = response.bytes().await.map_err(|e| {
      error!("Failed to read body: {}", e);
      Error::from(e)
    })?;

    decode_body(status, &body)
}
