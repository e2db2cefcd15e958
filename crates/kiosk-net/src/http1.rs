//! HTTP/1.1 Framing
//!
//! Request serialization and response parsing for HTTP/1.1.

use std::io::{self, BufRead, Read};

/// HTTP/1.1 request
#[derive(Debug, Clone)]
pub struct Http1Request {
    /// HTTP method
    pub method: String,
    /// Request target (e.g., "/api/fonts")
    pub path: String,
    /// HTTP version (1.0 or 1.1)
    pub version: HttpVersion,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

/// HTTP version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpVersion {
    Http10,
    #[default]
    Http11,
}

impl std::fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpVersion::Http10 => write!(f, "HTTP/1.0"),
            HttpVersion::Http11 => write!(f, "HTTP/1.1"),
        }
    }
}

impl Http1Request {
    /// Create a new request
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_uppercase(),
            path: path.to_string(),
            version: HttpVersion::Http11,
            headers: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Whether a header with this name is already set
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Serialize to bytes (requests carry no body)
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(format!("{} {} {}\r\n", self.method, self.path, self.version).as_bytes());

        for (name, value) in &self.headers {
            buf.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        buf.extend_from_slice(b"\r\n");
        buf
    }
}

/// HTTP/1.1 response
#[derive(Debug, Clone)]
pub struct Http1Response {
    /// HTTP version
    pub version: HttpVersion,
    /// Status code
    pub status: u16,
    /// Status reason phrase
    pub reason: String,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: Vec<u8>,
}

impl Http1Response {
    /// Get header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get Content-Length
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length")
            .and_then(|v| v.parse().ok())
    }

    /// Check if chunked transfer encoding
    pub fn is_chunked(&self) -> bool {
        self.header("transfer-encoding")
            .map(|v| v.eq_ignore_ascii_case("chunked"))
            .unwrap_or(false)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<Http1Response> for crate::Response {
    fn from(resp: Http1Response) -> Self {
        Self {
            status: resp.status,
            headers: resp.headers,
            body: resp.body,
        }
    }
}

/// HTTP/1.1 response parser
///
/// Works on a fully buffered response: the client reads until the server
/// closes the connection, then hands the bytes over.
pub struct Http1Parser {
    headers: Vec<(String, String)>,
    status: u16,
    reason: String,
    version: HttpVersion,
}

impl Http1Parser {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            status: 0,
            reason: String::new(),
            version: HttpVersion::Http11,
        }
    }

    /// Parse response from a reader
    pub fn parse<R: BufRead>(reader: &mut R) -> io::Result<Http1Response> {
        let mut parser = Self::new();

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(invalid("Empty response"));
        }
        parser.parse_status_line(&line)?;

        loop {
            line.clear();
            reader.read_line(&mut line)?;

            if line == "\r\n" || line == "\n" || line.is_empty() {
                break;
            }

            parser.parse_header_line(&line);
        }

        let mut response = Http1Response {
            version: parser.version,
            status: parser.status,
            reason: parser.reason,
            headers: parser.headers,
            body: Vec::new(),
        };

        if response.is_chunked() {
            response.body = read_chunked_body(reader)?;
        } else if let Some(len) = response.content_length() {
            response.body = read_exactly(reader, len)?;
        } else {
            // No framing: body runs to connection close
            reader.read_to_end(&mut response.body)?;
        }

        Ok(response)
    }

    fn parse_status_line(&mut self, line: &str) -> io::Result<()> {
        let line = line.trim_end();
        let mut parts = line.splitn(3, ' ');

        let version_str = parts.next()
            .ok_or_else(|| invalid("Missing HTTP version"))?;

        self.version = match version_str {
            "HTTP/1.0" => HttpVersion::Http10,
            "HTTP/1.1" => HttpVersion::Http11,
            _ => return Err(invalid("Invalid HTTP version")),
        };

        let status_str = parts.next()
            .ok_or_else(|| invalid("Missing status code"))?;

        self.status = status_str.parse()
            .map_err(|_| invalid("Invalid status code"))?;

        self.reason = parts.next().unwrap_or("").to_string();

        Ok(())
    }

    fn parse_header_line(&mut self, line: &str) {
        let line = line.trim_end();

        if let Some((name, value)) = line.split_once(':') {
            self.headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

}

impl Default for Http1Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `len` bytes, growing the buffer only as data actually arrives
fn read_exactly<R: BufRead>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    let read = reader.by_ref().take(len as u64).read_to_end(&mut body)?;
    if read != len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("Body shorter than declared length ({} of {} bytes)", read, len),
        ));
    }
    Ok(body)
}

fn read_chunked_body<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        reader.read_line(&mut line)?;

        // Chunk extensions follow a ';'
        let size_str = line.trim().split(';').next().unwrap_or("");
        let size = usize::from_str_radix(size_str, 16)
            .map_err(|_| invalid("Invalid chunk size"))?;

        if size == 0 {
            line.clear();
            reader.read_line(&mut line)?;
            break;
        }

        body.len()
            .checked_add(size)
            .ok_or_else(|| invalid("Chunked body too large"))?;
        body.extend(read_exactly(reader, size)?);

        line.clear();
        reader.read_line(&mut line)?;
    }

    Ok(body)
}

fn invalid(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}
