//! Scanning candidate text blocks for HTTP messages.
//!
//! Callers collect the text blocks shown on a page (or in files) in display
//! order. The request is the first block the classifier accepts; the response
//! is expected right after it, either as a full `HTTP/` message or as a bare
//! JSON document one block further.

use tracing::debug;

use crate::classify::Classifier;
use crate::curl::http_to_curl;
use crate::http::parse_message;

const RESPONSE_PREFIX: &str = "HTTP/";

#[derive(Debug, Clone)]
pub struct BlockScanner<C> {
    classifier: C,
}

impl<C: Classifier> BlockScanner<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Index of the first block that looks like an HTTP request.
    pub fn request_index<S: AsRef<str>>(&self, blocks: &[S]) -> Option<usize> {
        blocks.iter().position(|block| self.is_candidate(block.as_ref()))
    }

    /// Render the first candidate block that converts cleanly into a curl command.
    pub fn first_curl<S: AsRef<str>>(&self, blocks: &[S]) -> Option<String> {
        blocks
            .iter()
            .map(AsRef::as_ref)
            .enumerate()
            .filter(|(_, block)| self.is_candidate(block))
            .find_map(|(index, block)| match http_to_curl(block) {
                Ok(command) => Some(command),
                Err(e) => {
                    debug!(index, "Skipping candidate block: {e}");
                    None
                }
            })
    }

    /// Body of the request block, empty when there is none.
    pub fn request_body<S: AsRef<str>>(&self, blocks: &[S]) -> String {
        self.request_index(blocks)
            .map(|index| parse_message(blocks[index].as_ref()).body)
            .unwrap_or_default()
    }

    /// Body of the response that follows the request block, empty when there is none.
    pub fn response_body<S: AsRef<str>>(&self, blocks: &[S]) -> String {
        let Some(request_index) = self.request_index(blocks) else {
            return String::new();
        };

        if let Some(response) = blocks.get(request_index + 1).map(AsRef::as_ref)
            && response.trim().starts_with(RESPONSE_PREFIX)
        {
            let body = parse_message(response).body;
            if !body.is_empty() {
                return body;
            }
        }

        if let Some(document) = blocks.get(request_index + 2).map(|block| block.as_ref().trim())
            && (document.starts_with('{') || document.starts_with('['))
        {
            if let Err(e) = serde_json::from_str::<serde_json::Value>(document) {
                debug!("Response document is not valid JSON: {e}");
            }
            return document.to_owned();
        }

        String::new()
    }

    fn is_candidate(&self, block: &str) -> bool {
        !block.is_empty() && self.classifier.is_http(block)
    }
}
