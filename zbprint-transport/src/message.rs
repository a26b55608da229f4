//! Request and response values exchanged with a [`Transport`](crate::Transport)

use std::fmt;

use bytes::Bytes;

use crate::error::{Error, Result};

/// HTTP method used by the agent API
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Binary payload for multipart writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub data: Bytes,
    pub content_type: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
        }
    }

    /// Set the MIME type sent with the blob part
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,

    /// JSON document sent as `text/plain`
    Text(String),

    /// Form with a `json` text part and a `blob` binary part
    Multipart { json: String, blob: Blob },
}

/// Outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Body,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: Body::Empty,
        }
    }

    pub fn post_text(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Body::Text(text.into()),
        }
    }

    pub fn post_multipart(url: impl Into<String>, json: impl Into<String>, blob: Blob) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Body::Multipart {
                json: json.into(),
                blob,
            },
        }
    }
}

/// Response as returned by the agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// `200 OK` with the given body
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200, body)
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`Error::Status`]
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Status {
                url: url.to_string(),
                status: self.status,
            })
        }
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body as a [`Blob`], keeping the content type
    pub fn into_blob(self) -> Blob {
        Blob {
            data: self.body,
            content_type: self.content_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_constructors() {
        let get = Request::get("http://127.0.0.1:9100/available");
        assert_eq!(get.method, Method::Get);
        assert_eq!(get.body, Body::Empty);

        let post = Request::post_text("http://127.0.0.1:9100/write", "{}");
        assert_eq!(post.method, Method::Post);
        assert_eq!(post.body, Body::Text("{}".into()));
    }

    #[test]
    fn test_response_success_range() {
        assert!(Response::ok("").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(404, "").is_success());
        assert!(!Response::new(500, "").is_success());
    }

    #[test]
    fn test_error_for_status() {
        let err = Response::new(503, "busy")
            .error_for_status("http://127.0.0.1:9100/read")
            .unwrap_err();

        assert!(matches!(err, Error::Status { status: 503, .. }));
        assert_eq!(err.to_string(), "http://127.0.0.1:9100/read returned HTTP 503");
    }

    #[test]
    fn test_text_is_lossy() {
        let response = Response::ok(vec![b'o', b'k', 0xFF]);
        assert_eq!(response.text(), "ok\u{FFFD}");
    }

    #[test]
    fn test_into_blob_keeps_content_type() {
        let blob = Response::ok(vec![1, 2, 3])
            .with_content_type("image/png")
            .into_blob();

        assert_eq!(blob.len(), 3);
        assert_eq!(blob.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
