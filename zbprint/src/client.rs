//! High-level agent interface

use serde_json::{json, Value};
use tracing::{debug, info, trace};

use zbprint_core::constants::{commands, paths, ENDPOINT_ENV_VAR};
use zbprint_core::{discovery, status, Endpoint};
use zbprint_transport::{Blob, HttpTransport, Request, Response, Transport};
use zbprint_types::{Device, StatusReport};

use crate::error::{Error, Result};

/// Browser Print client
///
/// Talks to the local Zebra Browser Print agent and routes data to the
/// selected printer.
///
/// # Examples
///
/// ```no_run
/// use zbprint::Client;
///
/// #[tokio::main]
/// async fn main() -> zbprint::Result<()> {
///     let mut client = Client::new();
///
///     let printer = client.default_device().await?;
///     client.set_device(printer);
///
///     let status = client.check_status().await?;
///     if status.is_ready_to_print {
///         client.print("^XA^FO50,50^A0N,50,50^FDHello^FS^XZ").await?;
///     }
///
///     Ok(())
/// }
/// ```
pub struct Client {
    transport: Box<dyn Transport>,
    endpoint: Endpoint,
    device: Option<Device>, // sent as `{}` until selected
}

impl Client {
    /// Create a client for the default agent address (`http://127.0.0.1:9100/`)
    pub fn new() -> Self {
        Self {
            transport: Box::new(HttpTransport::new()),
            endpoint: Endpoint::default(),
            device: None,
        }
    }

    /// Create a client for another agent address
    pub fn with_endpoint(address: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(address),
            ..Self::new()
        }
    }

    /// Create a client for the address in `ZBPRINT_ENDPOINT`, if set
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV_VAR) {
            Ok(address) => Self::with_endpoint(address),
            Err(_) => Self::new(),
        }
    }

    /// Replace the transport
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Set the agent address, adding the trailing `/` if missing
    pub fn set_endpoint(&mut self, address: impl Into<String>) {
        self.endpoint = Endpoint::new(address);
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Select the printer used by read, write and status calls
    pub fn set_device(&mut self, device: Device) {
        debug!("Selected {}", device);
        self.device = Some(device);
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    /// List printers reachable through the agent
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPrintersAvailable`] if the agent lists none, or a
    /// transport/parse error if the request fails.
    pub async fn available_devices(&self) -> Result<Vec<Device>> {
        let response = self.request(Request::get(self.endpoint.join(paths::AVAILABLE))).await?;

        let devices = discovery::parse_available(&response.body)?;

        if devices.is_empty() {
            return Err(Error::NoPrintersAvailable);
        }

        info!("Found {} printer(s)", devices.len());

        Ok(devices)
    }

    /// Get the printer marked as default in the agent
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDefaultPrinter`] if the reply is empty or malformed,
    /// or a transport error if the request fails.
    pub async fn default_device(&self) -> Result<Device> {
        let response = self.request(Request::get(self.endpoint.join(paths::DEFAULT))).await?;
        let text = response.text();

        trace!("Default reply: {:?}", text);

        let device = discovery::parse_default(&text).map_err(|e| {
            if e.is_empty_result() {
                Error::NoDefaultPrinter(e)
            } else {
                Error::Core(e)
            }
        })?;

        info!("Default printer: {}", device);

        Ok(device)
    }

    /// Query the selected printer with `~HQES` and decode the reply
    pub async fn check_status(&self) -> Result<StatusReport> {
        self.write(commands::HOST_QUERY_STATUS).await?;
        let reply = self.read().await?;

        Ok(status::decode(&reply))
    }

    /// Send raw data to the selected printer
    pub async fn write(&self, data: impl Into<String>) -> Result<()> {
        let data = data.into();
        let body = json!({ "device": self.device_json()?, "data": data });

        debug!("Writing {} bytes", data.len());

        self.request(Request::post_text(self.endpoint.join(paths::WRITE), body.to_string()))
            .await?;

        Ok(())
    }

    /// Read pending data from the selected printer
    pub async fn read(&self) -> Result<String> {
        let body = json!({ "device": self.device_json()? });

        let response = self
            .request(Request::post_text(self.endpoint.join(paths::READ), body.to_string()))
            .await?;

        Ok(response.text())
    }

    /// Print text (ZPL, EPL, ...) on the selected printer
    pub async fn print(&self, text: impl Into<String>) -> Result<()> {
        self.write(text).await
    }

    /// Send binary data to the selected printer
    pub async fn write_blob(&self, blob: Blob) -> Result<()> {
        let json = json!({ "device": self.device_json()? });

        debug!("Writing {} byte blob", blob.len());

        self.request(Request::post_multipart(
            self.endpoint.join(paths::WRITE),
            json.to_string(),
            blob,
        ))
        .await?;

        Ok(())
    }

    /// Print binary data (images, PDFs the printer understands, ...)
    pub async fn print_blob(&self, blob: Blob) -> Result<()> {
        self.write_blob(blob).await
    }

    /// Download `url` and send its content to the selected printer
    pub async fn write_url(&self, url: &str) -> Result<()> {
        debug!("Fetching {}", url);

        let blob = self.request(Request::get(url)).await?.into_blob();

        self.write_blob(blob).await
    }

    /// Download `url` and print its content
    pub async fn print_url(&self, url: &str) -> Result<()> {
        self.write_url(url).await
    }

    // Helper methods

    fn device_json(&self) -> Result<Value> {
        match &self.device {
            Some(device) => Ok(serde_json::to_value(device)?),
            None => Ok(json!({})),
        }
    }

    async fn request(&self, request: Request) -> Result<Response> {
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        Ok(response.error_for_status(&url)?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use zbprint_transport::{Body, Method, MockTransport};
    use zbprint_types::{HeadFault, MediaFault, StatusError};

    fn printer() -> Device {
        Device::new("ZD420", "ZD420-1")
            .with_device_type("printer")
            .with_connection("usb")
            .with_provider("com.zebra.ds.webdriver.desktop.provider.DefaultDeviceProvider")
            .with_manufacturer("Zebra Technologies")
    }

    fn client(mock: MockTransport) -> Client {
        Client::with_endpoint("http://agent:9100").with_transport(mock)
    }

    /// JSON carried by a text body or the `json` part of a multipart body
    fn body_json(request: &Request) -> Value {
        match &request.body {
            Body::Text(text) | Body::Multipart { json: text, .. } => {
                serde_json::from_str(text).unwrap()
            }
            Body::Empty => Value::Null,
        }
    }

    fn status_reply(ready: u8, media: u8, head: u8, paused: u8) -> String {
        let mut raw = vec![b'0'; 91];
        raw[70] = ready;
        raw[84] = paused;
        raw[87] = head;
        raw[88] = media;
        String::from_utf8(raw).unwrap()
    }

    #[test]
    fn test_client_create() {
        let client = Client::new();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9100/");
        assert!(client.device().is_none());
    }

    #[test]
    fn test_set_endpoint_normalizes() {
        let mut client = Client::new();

        client.set_endpoint("http://x");
        assert_eq!(client.endpoint(), "http://x/");

        client.set_endpoint("http://x/");
        assert_eq!(client.endpoint(), "http://x/");
    }

    #[test]
    fn test_device_round_trip() {
        let mut client = Client::new();
        let device = printer();

        client.set_device(device.clone());
        assert_eq!(client.device(), Some(&device));

        let other = Device::new("ZT410", "ZT410-7");
        client.set_device(other.clone());
        assert_eq!(client.device(), Some(&other));
    }

    #[tokio::test]
    async fn test_available_devices() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| r.method == Method::Get && r.url == "http://agent:9100/available")
            .times(1)
            .returning(|_| {
                Ok(Response::ok(
                    r#"{"printer":[{"name":"ZD420","deviceType":"printer","connection":"usb",
                        "uid":"ZD420-1","provider":"p","manufacturer":"Zebra Technologies",
                        "version":2}]}"#,
                ))
            });

        let devices = client(mock).available_devices().await.unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].uid, "ZD420-1");
        assert_eq!(devices[0].version, 2);
    }

    #[tokio::test]
    async fn test_available_devices_empty() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(Response::ok(r#"{"printer":[]}"#)));

        let err = client(mock).available_devices().await.unwrap_err();

        assert!(matches!(err, Error::NoPrintersAvailable));
        assert!(err.is_empty_result());
    }

    #[tokio::test]
    async fn test_available_devices_invalid_body() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(Response::ok("not json")));

        let err = client(mock).available_devices().await.unwrap_err();

        assert!(matches!(err, Error::Core(zbprint_core::Error::Json(_))));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_available_devices_http_error() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(Response::new(500, "")));

        let err = client(mock).available_devices().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Transport(zbprint_transport::Error::Status { status: 500, .. })
        ));
        assert!(!err.is_empty_result());
    }

    #[tokio::test]
    async fn test_default_device() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| r.method == Method::Get && r.url == "http://agent:9100/default")
            .times(1)
            .returning(|_| {
                Ok(Response::ok(
                    "_\n\tname: A\n\ttype: B\n\tconn: C\n\tuid: D\n\tprov: E\n\tman: F",
                ))
            });

        let device = client(mock).default_device().await.unwrap();

        assert_eq!(
            device,
            Device {
                name: "A".into(),
                device_type: "B".into(),
                connection: "C".into(),
                uid: "D".into(),
                provider: "E".into(),
                manufacturer: "F".into(),
                version: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_default_device_too_few_fields() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(Response::ok("_\n\tname: A\n\ttype: B")));

        let err = client(mock).default_device().await.unwrap_err();

        assert!(matches!(
            err,
            Error::NoDefaultPrinter(zbprint_core::Error::FieldCount { actual: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_default_device_empty_body() {
        let mut mock = MockTransport::new();
        mock.expect_send().times(1).returning(|_| Ok(Response::ok("")));

        let err = client(mock).default_device().await.unwrap_err();

        assert!(matches!(err, Error::NoDefaultPrinter(zbprint_core::Error::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_check_status() {
        let mut mock = MockTransport::new();
        let mut seq = Sequence::new();

        mock.expect_send()
            .withf(|r| {
                let body = body_json(r);
                r.url == "http://agent:9100/write"
                    && body["data"] == "~HQES"
                    && body["device"]["uid"] == "ZD420-1"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Response::ok("")));

        mock.expect_send()
            .withf(|r| {
                r.url == "http://agent:9100/read" && body_json(r)["device"]["uid"] == "ZD420-1"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Response::ok(status_reply(b'0', b'2', b'2', b'1'))));

        let mut client = client(mock);
        client.set_device(printer());

        let report = client.check_status().await.unwrap();

        assert!(report.is_ready_to_print);
        assert_eq!(
            report.errors,
            vec![
                StatusError::Media(MediaFault::RibbonOut),
                StatusError::Head(HeadFault::MotorOverheating),
                StatusError::Paused,
            ]
        );
        assert_eq!(report.joined_errors(), "Ribbon Out,Motor Overheating,Printer Paused");
    }

    #[tokio::test]
    async fn test_check_status_not_ready_unknown() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| r.url.ends_with("/write"))
            .times(1)
            .returning(|_| Ok(Response::ok("")));
        mock.expect_send()
            .withf(|r| r.url.ends_with("/read"))
            .times(1)
            .returning(|_| Ok(Response::ok(status_reply(b'1', b'0', b'0', b'0'))));

        let report = client(mock).check_status().await.unwrap();

        assert!(!report.is_ready_to_print);
        assert_eq!(report.messages(), vec!["Unknown Error"]);
    }

    #[tokio::test]
    async fn test_check_status_short_reply() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| r.url.ends_with("/write"))
            .times(1)
            .returning(|_| Ok(Response::ok("")));
        mock.expect_send()
            .withf(|r| r.url.ends_with("/read"))
            .times(1)
            .returning(|_| Ok(Response::ok("")));

        let report = client(mock).check_status().await.unwrap();

        assert!(!report.is_ready_to_print);
        assert_eq!(report.errors, vec![StatusError::MalformedResponse]);
    }

    #[tokio::test]
    async fn test_write_without_device_sends_empty_object() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| {
                r.method == Method::Post
                    && body_json(r) == json!({ "device": {}, "data": "^XA^XZ" })
            })
            .times(1)
            .returning(|_| Ok(Response::ok("")));

        client(mock).write("^XA^XZ").await.unwrap();
    }

    #[tokio::test]
    async fn test_print_sends_device_descriptor() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| {
                let body = body_json(r);
                r.url == "http://agent:9100/write"
                    && body["data"] == "^XA^FDHello^FS^XZ"
                    && body["device"]["deviceType"] == "printer"
                    && body["device"]["name"] == "ZD420"
            })
            .times(1)
            .returning(|_| Ok(Response::ok("")));

        let mut client = client(mock);
        client.set_device(printer());
        client.print("^XA^FDHello^FS^XZ").await.unwrap();
    }

    #[tokio::test]
    async fn test_write_transport_error() {
        let mut mock = MockTransport::new();
        mock.expect_send().times(1).returning(|r| {
            Err(zbprint_transport::Error::Status {
                url: r.url,
                status: 404,
            })
        });

        let err = client(mock).write("~HQES").await.unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_read_returns_raw_text() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| r.url == "http://agent:9100/read" && body_json(r) == json!({ "device": {} }))
            .times(1)
            .returning(|_| Ok(Response::ok("  PRINTER STATUS  \r\n")));

        let text = client(mock).read().await.unwrap();

        assert_eq!(text, "  PRINTER STATUS  \r\n");
    }

    #[tokio::test]
    async fn test_print_blob() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| match &r.body {
                Body::Multipart { blob, .. } => {
                    r.url == "http://agent:9100/write"
                        && body_json(r)["device"]["uid"] == "ZD420-1"
                        && blob.data.as_ref() == [0x89, b'P', b'N', b'G']
                        && blob.content_type.as_deref() == Some("image/png")
                }
                _ => false,
            })
            .times(1)
            .returning(|_| Ok(Response::ok("")));

        let mut client = client(mock);
        client.set_device(printer());

        let blob = Blob::new(vec![0x89, b'P', b'N', b'G']).with_content_type("image/png");
        client.print_blob(blob).await.unwrap();
    }

    #[tokio::test]
    async fn test_print_url_fetches_then_writes() {
        let mut mock = MockTransport::new();
        let mut seq = Sequence::new();

        mock.expect_send()
            .withf(|r| r.method == Method::Get && r.url == "https://labels.example/label.png")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Response::ok(vec![1, 2, 3]).with_content_type("image/png")));

        mock.expect_send()
            .withf(|r| match &r.body {
                Body::Multipart { blob, .. } => {
                    r.url == "http://agent:9100/write"
                        && blob.data.as_ref() == [1, 2, 3]
                        && blob.content_type.as_deref() == Some("image/png")
                }
                _ => false,
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Response::ok("")));

        client(mock)
            .print_url("https://labels.example/label.png")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_write_url_fetch_failure() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| r.method == Method::Get)
            .times(1)
            .returning(|_| Ok(Response::new(404, "not found")));

        let err = client(mock)
            .write_url("https://labels.example/missing.png")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Transport(zbprint_transport::Error::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_endpoint_change_applies_to_requests() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| r.url == "http://10.0.0.5:9100/read")
            .times(1)
            .returning(|_| Ok(Response::ok("")));

        let mut client = Client::new().with_transport(mock);
        client.set_endpoint("http://10.0.0.5:9100");

        assert_eq!(client.read().await.unwrap(), "");
    }
}
