// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

/// A received response. Non-2xx is data here, not an error — the caller
/// classifies it; only transport/parse failures come back as Err.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn http_get(host: &str, port: u16, path: &str) -> Result<HttpResponse, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nAccept: application/json\r\nUser-Agent: homescout/0.1\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);
    parse_response(&resp)
}

/// Split a raw HTTP/1.x response into status code and body.
pub fn parse_response(resp: &str) -> Result<HttpResponse, Box<dyn std::error::Error>> {
    let status_line = resp.split("\r\n").next().unwrap_or("");
    let status: u16 = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|c| c.parse().ok())
        .ok_or_else(|| format!("Malformed status line: {:?}", status_line))?;

    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(HttpResponse { status, body: resp[body_idx..].to_string() })
}
