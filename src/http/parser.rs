//! HTTP message parsing functions.
//!
//! This module provides functions for parsing the textual rendering of HTTP
//! messages: a request/status line, header lines, a blank line and a body.
//! Lines are separated by `\n`; a trailing `\r` is removed by trimming.

use serde::Serialize;
use tracing::trace;

use super::{Headers, HttpMethod};
use crate::curl;
use crate::error::Error;

/// Headers and body of a request or response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    pub headers: Headers,
    pub body: String,
    /// Index of the first body line in the trimmed text, `None` when no blank
    /// line separates headers from a body.
    pub body_start_line: Option<usize>,
}

/// Method and path from the first line of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestLine {
    pub method: HttpMethod,
    pub path: String,
}

/// A request whose first line split into a method and a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub message: ParsedMessage,
}

impl ParsedRequest {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let RequestLine { method, path } = parse_request_line(raw)?;
        Ok(Self {
            method,
            path,
            message: parse_message(raw),
        })
    }

    pub fn to_curl(&self) -> Result<String, Error> {
        curl::render_curl(
            &self.method,
            &self.path,
            &self.message.headers,
            &self.message.body,
        )
    }
}

/// Parse headers and body out of an HTTP message.
///
/// Never fails: lines without a colon are skipped, and a message without a
/// blank line simply has no body.
#[must_use]
pub fn parse_message(raw: &str) -> ParsedMessage {
    let lines: Vec<&str> = raw.trim().split('\n').collect();

    let mut headers = Headers::new();
    let mut body_start_line = None;

    // Line 0 is the request or status line
    for (index, line) in lines.iter().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            body_start_line = Some(index + 1);
            break;
        }

        let Some((name, value)) = line.split_once(':') else {
            trace!(line, "Skipping line without a colon");
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            trace!(line, "Skipping header without a name");
            continue;
        }
        headers.insert(name, value.trim());
    }

    let body = body_start_line
        .and_then(|start| lines.get(start..))
        .map(|rest| rest.join("\n").trim().to_owned())
        .unwrap_or_default();

    ParsedMessage {
        headers,
        body,
        body_start_line,
    }
}

/// Split the first line of a request into method and path.
///
/// The line is split on single spaces; a trailing protocol token is ignored.
pub fn parse_request_line(raw: &str) -> Result<RequestLine, Error> {
    let line = raw.trim().lines().next().unwrap_or_default().trim();

    let mut parts = line.split(' ');
    match (parts.next(), parts.next()) {
        (Some(method), Some(path)) if !method.is_empty() && !path.is_empty() => Ok(RequestLine {
            method: HttpMethod::from(method),
            path: path.to_owned(),
        }),
        _ => Err(Error::MalformedRequestLine(line.to_owned())),
    }
}
