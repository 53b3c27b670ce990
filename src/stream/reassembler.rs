// src/stream/reassembler.rs

use super::errors::ReassemblyError;
use crate::models::response_fragment::{json_kind, ResponseFragment};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to do with a line that does not decode into a fragment.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Abort the whole reassembly and discard the text gathered so far.
    #[default]
    #[serde(rename = "fail")]
    #[value(name = "fail")]
    FailFast,
    /// Log the line and carry on with the next one.
    Skip,
}

/// Classification of a single line of the response body.
#[derive(Debug)]
pub enum ParsedLine {
    Blank,
    Fragment(ResponseFragment),
    Malformed(serde_json::Error),
    Unexpected(String),
}

impl ParsedLine {
    pub fn parse(line: &str) -> Self {
        if line.trim().is_empty() {
            return ParsedLine::Blank;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(object)) => match ResponseFragment::from_object(&object) {
                Ok(fragment) => ParsedLine::Fragment(fragment),
                Err(reason) => ParsedLine::Unexpected(reason),
            },
            Ok(other) => {
                ParsedLine::Unexpected(format!("expected a JSON object, found {}", json_kind(&other)))
            }
            Err(e) => ParsedLine::Malformed(e),
        }
    }
}

/// Result of a successful reassembly.
#[derive(Debug, Default, PartialEq)]
pub struct Reassembly {
    pub text: String,
    pub fragments: usize,
    pub skipped_lines: usize,
    pub done: bool,
}

/// Rebuilds generated text from a newline-delimited JSON body.
pub struct StreamReassembler {
    policy: MalformedLinePolicy,
}

impl StreamReassembler {
    pub fn new(policy: MalformedLinePolicy) -> Self {
        Self { policy }
    }

    /// Concatenates the `response` of every fragment in line order.
    ///
    /// The body is trimmed and split on `\n`; blank lines contribute nothing.
    /// Under `FailFast` the first bad line ends reassembly with an error and
    /// nothing gathered before it is returned.
    pub fn reassemble(&self, body: &str) -> Result<Reassembly, ReassemblyError> {
        let mut reassembly = Reassembly::default();

        for (index, line) in body.trim().split('\n').enumerate() {
            let line_number = index + 1;
            let error = match ParsedLine::parse(line) {
                ParsedLine::Blank => continue,
                ParsedLine::Fragment(fragment) => {
                    reassembly.text.push_str(fragment.text());
                    reassembly.fragments += 1;
                    reassembly.done |= fragment.done;
                    continue;
                }
                ParsedLine::Malformed(source) => ReassemblyError::MalformedFragment {
                    line: line_number,
                    source,
                },
                ParsedLine::Unexpected(reason) => ReassemblyError::UnexpectedFragment {
                    line: line_number,
                    reason,
                },
            };

            match self.policy {
                MalformedLinePolicy::FailFast => return Err(error),
                MalformedLinePolicy::Skip => {
                    log::warn!("Skipping line: {}", error);
                    reassembly.skipped_lines += 1;
                }
            }
        }

        log::debug!(
            "Reassembled {} fragment(s), skipped {} line(s)",
            reassembly.fragments,
            reassembly.skipped_lines
        );
        Ok(reassembly)
    }
}
