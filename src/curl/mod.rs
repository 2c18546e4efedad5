//! curl command rendering.
//!
//! This module turns a parsed HTTP request into a multi-line `curl`
//! invocation that can be pasted into a POSIX shell.

mod quote;
mod render;

pub use quote::shell_quote;
pub use render::{http_to_curl, render_curl};
