use std::time::Duration;

use crate::error::{Error, Result};
use crate::operator::source::TextSource;

/// Source that downloads the text with an HTTP GET request.
///
/// Transport errors and non-success status codes are both acquisition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Give up on the request after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn download(&self) -> reqwest::Result<String> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("wordfreq/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder.build()?.get(&self.url).send()?.error_for_status()?;
        response.text()
    }
}

impl TextSource for HttpSource {
    fn name(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String> {
        info!("Downloading text from {}", self.url);
        let text = self
            .download()
            .map_err(|e| Error::acquisition(self.name(), e))?;
        debug!("Downloaded {} bytes from {}", text.len(), self.url);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    /// Serve a single HTTP response on a local port, returning the url to request.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).unwrap();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/book.txt")
    }

    #[test]
    fn download_text() {
        let url = serve_once("200 OK", "grape grape apple");
        let source = HttpSource::new(url).with_timeout(Duration::from_secs(10));
        assert_eq!(source.fetch().unwrap(), "grape grape apple");
    }

    #[test]
    fn error_status() {
        let url = serve_once("404 Not Found", "nope");
        let source = HttpSource::new(url.clone()).with_timeout(Duration::from_secs(10));
        match source.fetch() {
            Err(Error::Acquisition { source_name, .. }) => assert_eq!(source_name, url),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn connection_refused() {
        // bind and drop to get a port nobody listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let source = HttpSource::new(format!("http://127.0.0.1:{port}/"))
            .with_timeout(Duration::from_secs(5));
        assert!(source.fetch().unwrap_err().is_acquisition());
    }
}
