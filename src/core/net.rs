// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::error::ScrapeError;
use crate::params::HOST;

pub fn http_get(path: &str) -> Result<String, ScrapeError> {
    let mut s = TcpStream::connect((HOST, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: bundle_tracker/0.2\r\nConnection: close\r\n\r\n",
        path, HOST
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    logd!("GET {}{} -> {}", HOST, path, status);
    if !status.contains("200") {
        return Err(ScrapeError::HttpStatus {
            status: s!(status),
            url: join!(HOST, path),
        });
    }
    let body_idx = resp.find("\r\n\r\n").ok_or(ScrapeError::MalformedResponse)? + 4;
    Ok(resp[body_idx..].to_string())
}
