use super::shell_quote;
use crate::error::Error;
use crate::http::{Headers, HttpMethod, ParsedRequest};

const SCHEME: &str = "https";
const CONTINUATION: &str = " \\\n  ";
/// Headers curl must not receive: the host is part of the URL and curl
/// computes its own content length.
const SKIPPED_HEADERS: [&str; 2] = ["host", "content-length"];

/// Render a request as a multi-line `curl` command.
///
/// The target URL is `https://` followed by the `Host` header and `path`.
/// Every header except `Host` and `Content-Length` becomes a `-H` argument,
/// and a non-empty body becomes `-d`.
pub fn render_curl(
    method: &HttpMethod,
    path: &str,
    headers: &Headers,
    body: &str,
) -> Result<String, Error> {
    let host = target_host(headers).ok_or(Error::MissingHostHeader)?;

    let url = format!("{SCHEME}://{host}{path}");
    let mut command = format!("curl -X {method} {}", shell_quote(&url));

    for (name, value) in headers.iter().filter(|(name, _)| !is_skipped(name)) {
        command.push_str(CONTINUATION);
        command.push_str("-H ");
        command.push_str(&shell_quote(&format!("{name}: {value}")));
    }

    if !body.is_empty() {
        command.push_str(CONTINUATION);
        command.push_str("-d ");
        command.push_str(&shell_quote(body));
    }

    Ok(command)
}

/// Parse a raw request and render it as a `curl` command.
pub fn http_to_curl(raw: &str) -> Result<String, Error> {
    ParsedRequest::parse(raw)?.to_curl()
}

/// First non-empty host value: `Host`, then `host`, then any other casing.
fn target_host(headers: &Headers) -> Option<&str> {
    let spelled = |spelling: &str| {
        headers
            .iter()
            .find(|(name, _)| *name == spelling)
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
    };
    spelled("Host").or_else(|| spelled("host")).or_else(|| {
        headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("host"))
            .map(|(_, value)| value)
            .find(|value| !value.is_empty())
    })
}

fn is_skipped(name: &str) -> bool {
    SKIPPED_HEADERS
        .iter()
        .any(|skipped| name.eq_ignore_ascii_case(skipped))
}
