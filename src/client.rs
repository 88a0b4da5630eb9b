//! Resilient client for the separation endpoint
//!
//! Turns a [`SeparationRequest`] into a [`SeparationResult`] or a terminal
//! failure, hiding transient network and service failures behind a bounded
//! retry loop with exponential backoff. Successive requests on one client
//! are spaced through a rate gate.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use reqwest::Url;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::codec;
use crate::config::ClientConfig;
use crate::error::{Result, SeparationError};
use crate::rate::RateGate;
use crate::request::{SeparationRequest, SeparationResult};
use crate::retry::Backoff;
use crate::transport::{HttpTransport, RawResponse, Transport};
use crate::wire::{RequestBody, ResponseBody};

/// Client for the remote separation endpoint.
///
/// Concurrent callers sharing one instance are serialized: the rate gate is
/// held from admission through the end of the retry loop, so attempts never
/// interleave and requests proceed in admission order.
pub struct SeparationClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    gate: Mutex<RateGate>,
}

impl SeparationClient {
    /// Create a client speaking HTTP to the configured endpoint.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a custom transport. Tests use this to script
    /// responses without a network.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            gate: Mutex::new(RateGate::new()),
        }
    }

    /// Submit a separation request, retrying transient failures.
    ///
    /// On success the returned path points at a freshly written file in the
    /// system temp directory, unique per call; the caller owns it afterwards.
    /// Dropping the future cancels the operation, whether it is waiting in
    /// the gate, backing off, or mid-request.
    pub async fn submit(&self, request: SeparationRequest) -> Result<SeparationResult> {
        // Fails before any network or file I/O and before touching the gate.
        let url = self.endpoint_url()?;

        let mut gate = self.gate.lock().await;
        gate.admit(self.config.rate_limit.min_request_interval).await;

        let body = RequestBody::from_request(&request);
        let backoff = Backoff::from(&self.config.retry);
        let max_attempts = self.config.retry.max_attempts;

        let mut last_error = None;
        for attempt in 0..max_attempts {
            match self.attempt(&url, &body).await {
                Ok(result) => {
                    info!(
                        elapsed_ms = result.elapsed.as_millis() as u64,
                        "request completed"
                    );
                    return Ok(result);
                }
                Err(err) if !err.is_retryable() => return Err(err),
                Err(err) => {
                    if attempt + 1 < max_attempts {
                        let delay = if err.is_throttle() {
                            backoff.throttle_delay(attempt)
                        } else {
                            backoff.generic_delay(attempt)
                        };
                        warn!(
                            attempt = attempt + 1,
                            max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            %err,
                            "attempt failed, backing off"
                        );
                        last_error = Some(err);
                        sleep(delay).await;
                    } else {
                        last_error = Some(err);
                    }
                }
            }
        }

        error!(max_attempts, "max attempts exceeded");
        let source = last_error.unwrap_or(SeparationError::InvalidResponse);
        Err(SeparationError::RetriesExhausted {
            attempts: max_attempts,
            source: Box::new(source),
        })
    }

    fn endpoint_url(&self) -> Result<Url> {
        // The processing route lives at the endpoint root.
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/"))
            .map_err(|_| SeparationError::InvalidEndpoint(self.config.base_url.clone()))
    }

    async fn attempt(&self, url: &Url, body: &RequestBody) -> Result<SeparationResult> {
        let started = Instant::now();
        let response = self.transport.send(url, body).await?;

        match response.status {
            429 => {
                warn!("received 429 Too Many Requests");
                Err(SeparationError::Throttled)
            }
            200 => {
                let output = parse_response(&response)?;
                let output_path = persist_output(&output).await?;
                Ok(SeparationResult {
                    output_path,
                    elapsed: started.elapsed(),
                })
            }
            status => {
                let text = String::from_utf8_lossy(&response.body);
                error!(status, "API error");
                Err(SeparationError::ProcessingFailed {
                    message: format!("status {status}: {text}"),
                })
            }
        }
    }
}

/// Classify a 200 body: decoded audio bytes on success, a taxonomy error
/// otherwise.
fn parse_response(response: &RawResponse) -> Result<Vec<u8>> {
    let body: ResponseBody =
        serde_json::from_slice(&response.body).map_err(|_| SeparationError::InvalidResponse)?;

    if body.status.as_deref() == Some("succeeded") {
        if let Some(output) = &body.output {
            debug!(len = output.len(), "output payload received");
            return codec::decode_payload(output).map_err(|_| SeparationError::ProcessingFailed {
                message: "failed to decode audio payload".to_string(),
            });
        }
        debug!("response succeeded without an output field");
    }

    if let Some(message) = body.error {
        error!(%message, "backend reported an error");
        return Err(SeparationError::ProcessingFailed { message });
    }

    Err(SeparationError::InvalidResponse)
}

/// Write decoded audio to a uniquely named temp file owned by the caller.
async fn persist_output(bytes: &[u8]) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("separated_{}.wav", Uuid::new_v4()));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}
