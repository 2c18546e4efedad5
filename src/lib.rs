#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]
#![allow(clippy::missing_errors_doc)]

//! Convert the plain-text rendering of HTTP messages into structured headers
//! and bodies, and requests into pasteable `curl` commands.

pub mod blocks;
pub mod classify;
pub mod curl;
pub mod error;
pub mod http;

pub use blocks::BlockScanner;
pub use classify::{Classifier, MethodClassifier};
pub use curl::{http_to_curl, render_curl, shell_quote};
pub use error::Error;
pub use http::{
    Headers, HttpMethod, ParsedMessage, ParsedRequest, RequestLine, parse_message,
    parse_request_line,
};
