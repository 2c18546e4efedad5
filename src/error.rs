use core::fmt::Debug;
use core::fmt::Display;

/// Failures of the request-oriented operations.
///
/// Neither is fatal: a malformed request line means the text is not a usable
/// request, and a missing host means no command can be built from it.
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// The first line does not split into a method and a path.
    MalformedRequestLine(String),
    /// No non-empty `Host` header to build the target URL from.
    MissingHostHeader,
}

impl core::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::MalformedRequestLine(line) => write!(f, "Malformed request line: {line:?}"),
            Error::MissingHostHeader => write!(f, "No host header found"),
        }
    }
}
