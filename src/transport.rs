//! HTTP dispatch behind a trait seam
//!
//! The client talks to the endpoint through [`Transport`], so tests can
//! swap in a scripted implementation the same way production wires in
//! [`HttpTransport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::error::Result;
use crate::wire::RequestBody;

/// Raw HTTP outcome: status code plus body bytes. Classification happens
/// in the client, not here.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// One-shot JSON POST to the separation endpoint
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &Url, body: &RequestBody) -> Result<RawResponse>;
}

/// Production transport backed by a pooled reqwest client
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &Url, body: &RequestBody) -> Result<RawResponse> {
        let response = self.client.post(url.clone()).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}
