//! HTTP message parsing.
//!
//! This module turns the plain-text rendering of an HTTP request or response
//! (as shown by developer tooling) into headers and a body, and splits the
//! request line into method and path. Parsing is lenient: noisy text degrades
//! into partial results instead of errors.

mod headers;
mod method;
mod parser;

pub use headers::Headers;
pub use method::HttpMethod;
pub use parser::{ParsedMessage, ParsedRequest, RequestLine, parse_message, parse_request_line};
