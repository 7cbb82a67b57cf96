// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only).
// HTTP/1.0 + Connection: close means the server ends the stream at EOF,
// so no chunked-transfer handling is needed.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

const TIMEOUT_SECS: u64 = 15;

/// Perform a blocking GET against `host` and return the response body.
///
/// Strictly one request per call, no redirects, no retry. Anything other
/// than a 200 status is an error carrying the received status code, which
/// aborts the whole run upstream.
pub fn http_get(host: &str, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: ratemap/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    match status_code(status_line) {
        Some(200) => {}
        Some(code) => {
            return Err(format!("request failed with code {code}: {host}{path}").into());
        }
        None => {
            return Err(format!("malformed status line {status_line:?}: {host}{path}").into());
        }
    }

    let body_idx = resp.find("\r\n\r\n").ok_or("malformed HTTP response")? + 4;
    logd!("GET {path} -> {} bytes", resp.len() - body_idx);
    Ok(resp[body_idx..].to_string())
}

/// "HTTP/1.1 404 Not Found" -> Some(404)
fn status_code(status_line: &str) -> Option<u16> {
    status_line.split_whitespace().nth(1)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_parses_common_lines() {
        assert_eq!(status_code("HTTP/1.0 200 OK"), Some(200));
        assert_eq!(status_code("HTTP/1.1 503 Service Unavailable"), Some(503));
        assert_eq!(status_code("HTTP/1.1 301"), Some(301));
    }

    #[test]
    fn status_code_rejects_garbage() {
        assert_eq!(status_code(""), None);
        assert_eq!(status_code("HTTP/1.1"), None);
        assert_eq!(status_code("HTTP/1.1 abc OK"), None);
    }
}
