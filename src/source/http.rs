//! HTTP feed source.
//!
//! One unauthenticated GET per fetch, no custom headers, no retries. Redirects
//! and timeouts are whatever the client does by default.

use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::{FeedSource, FetchError, FEED_URL};

/// A feed source that downloads the document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
    description: String,
}

impl HttpSource {
    /// Create a source for the fixed feed endpoint.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, FEED_URL))
    }

    #[cfg(test)]
    pub(crate) fn with_url(url: &str) -> Self {
        let client = Client::builder()
            .no_proxy()
            .build()
            .expect("test client should build");
        Self::with_client(client, url)
    }

    fn with_client(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            description: format!("http: {}", url),
        }
    }

    /// Returns the URL being fetched.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for HttpSource {
    fn fetch(&mut self) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %self.url, "fetching feed");
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        Ok(body.to_vec())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one HTTP response on a loopback port and return its URL.
    pub fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        format!("http://{}/solarxml.php", addr)
    }
}
