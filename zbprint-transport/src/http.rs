//! HTTP transport backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tracing::{debug, trace};

use crate::{error::*, Blob, Body, Method, Request, Response, Transport};

/// Content type for JSON request bodies.
///
/// The agent does not answer CORS preflight requests, so JSON goes out as
/// plain text.
pub const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

const JSON_FIELD: &str = "json";
const BLOB_FIELD: &str = "blob";

/// HTTP transport for the Browser Print agent
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Create new HTTP transport
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    /// Set per-request timeout (none by default)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn blob_form(json: String, blob: Blob) -> Result<Form> {
    let mut part = Part::bytes(blob.data.to_vec()).file_name(BLOB_FIELD);

    if let Some(content_type) = &blob.content_type {
        part = part.mime_str(content_type)?;
    }

    Ok(Form::new().text(JSON_FIELD, json).part(BLOB_FIELD, part))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Text(text) => {
                trace!("Request body: {}", text);
                builder.header(CONTENT_TYPE, TEXT_CONTENT_TYPE).body(text)
            }
            Body::Multipart { json, blob } => {
                trace!("Multipart body: {} + {} byte blob", json, blob.len());
                builder.multipart(blob_form(json, blob)?)
            }
        };

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        debug!("{} {} -> {} ({} bytes)", request.method, request.url, status, body.len());

        Ok(Response {
            status,
            content_type,
            body,
        })
    }
}
