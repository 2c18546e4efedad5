//! Detection of text blocks that look like HTTP requests.
//!
//! This is a convenience heuristic, not a parser: a block counts as HTTP when
//! it mentions one of the configured method tokens anywhere.

use regex::Regex;

use crate::http::HttpMethod;

/// Decides whether a block of text is worth handing to the parser.
///
/// [`BlockScanner`](crate::BlockScanner) never offers empty blocks.
pub trait Classifier {
    fn is_http(&self, content: &str) -> bool;
}

/// Matches blocks containing any of a set of method keywords.
#[derive(Debug, Clone)]
pub struct MethodClassifier {
    pattern: Option<Regex>,
}

impl MethodClassifier {
    /// Build a classifier for the given method tokens.
    /// An empty set yields a classifier that never matches.
    pub fn new<I, S>(methods: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = methods
            .into_iter()
            .map(|method| method.as_ref().trim().to_owned())
            .filter(|method| !method.is_empty())
            .map(|method| regex::escape(&method))
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }
        let pattern = Regex::new(&alternatives.join("|"))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Classifier over [`HttpMethod::KNOWN`].
    pub fn standard() -> Result<Self, regex::Error> {
        Self::new(HttpMethod::KNOWN.iter().map(HttpMethod::as_str))
    }
}

impl Classifier for MethodClassifier {
    fn is_http(&self, content: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(content))
    }
}
