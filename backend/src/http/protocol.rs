//! Minimal HTTP/1.1 framing: request parsing and response writing.

use json_codec::JsonValue;
use std::io::{self, BufRead, BufReader, Read, Write};

/// Protocol error types
#[derive(Debug)]
pub enum HttpError {
    Io(io::Error),
    BadRequest(String),
    BodyTooLarge(usize),
}

impl From<io::Error> for HttpError {
    fn from(err: io::Error) -> Self {
        HttpError::Io(err)
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::Io(e) => write!(f, "IO error: {}", e),
            HttpError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            HttpError::BodyTooLarge(size) => write!(f, "request body too large: {} bytes", size),
        }
    }
}

impl std::error::Error for HttpError {}

pub type Result<T> = std::result::Result<T, HttpError>;

const MAX_BODY_SIZE: usize = 1024 * 1024; // 1 MB

/// A parsed request: method, raw path (query string still attached), and
/// the Content-Length-delimited body.
#[derive(Debug)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Reads one HTTP/1.1 request from the stream.
///
/// Headers other than Content-Length are read and discarded; the body is
/// required to be valid UTF-8 since every endpoint of this service speaks
/// text.
pub fn read_request<S: Read>(stream: S) -> Result<Request> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line)? == 0 {
        return Err(HttpError::BadRequest("empty request".to_string()));
    }
    let (method, path) = {
        let mut parts = request_line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(method), Some(path)) => (method.to_uppercase(), path.to_string()),
            _ => {
                return Err(HttpError::BadRequest("malformed request line".to_string()));
            }
        }
    };

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':')
            && name.trim().eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse().map_err(|_| {
                HttpError::BadRequest("invalid Content-Length header".to_string())
            })?;
        }
    }

    if content_length > MAX_BODY_SIZE {
        return Err(HttpError::BodyTooLarge(content_length));
    }

    let mut body_bytes = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body_bytes)?;
    }
    let body = String::from_utf8(body_bytes)
        .map_err(|_| HttpError::BadRequest("request body is not valid UTF-8".to_string()))?;

    Ok(Request { method, path, body })
}

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Internal Server Error",
    }
}

/// Writes a complete response with Content-Length framing and closes the
/// exchange (`Connection: close`).
pub fn write_response<S: Write>(
    stream: &mut S,
    status: u16,
    content_type: &str,
    body: &[u8],
) -> io::Result<()> {
    write!(stream, "HTTP/1.1 {} {}\r\n", status, status_reason(status))?;
    write!(stream, "Content-Type: {}\r\n", content_type)?;
    write!(stream, "Content-Length: {}\r\n", body.len())?;
    write!(stream, "Connection: close\r\n\r\n")?;
    stream.write_all(body)?;
    stream.flush()
}

/// Serializes a payload and writes it as a JSON response.
pub fn write_json<S: Write>(stream: &mut S, status: u16, payload: &JsonValue) -> io::Result<()> {
    write_response(
        stream,
        status,
        "application/json; charset=UTF-8",
        payload.to_json_string().as_bytes(),
    )
}

/// Writes a plain-text response, used for rejections and diagnostics.
pub fn write_text<S: Write>(stream: &mut S, status: u16, message: &str) -> io::Result<()> {
    write_response(stream, status, "text/plain; charset=UTF-8", message.as_bytes())
}
