use regex::Regex;
use std::collections::VecDeque;
use std::sync::OnceLock;

use crate::languages::{CaptureMode, ImportPattern, TokenHint};

/// Raw import statement capture, prior to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportToken {
    pub text: String,
    pub hint: TokenHint,
}

/// Lazily yields every import token found in `text`, in textual order.
///
/// At each position the earliest match among the language's patterns wins,
/// with ties broken by pattern order; scanning resumes just past the match so
/// matches never overlap. The iterator holds no cached state beyond its
/// scan position, so re-invoking `extract` on the same text replays the
/// identical sequence.
pub fn extract<'a>(text: &'a str, patterns: &'a [ImportPattern]) -> TokenIter<'a> {
    TokenIter {
        text,
        patterns,
        pos: 0,
        pending: VecDeque::new(),
    }
}

pub struct TokenIter<'a> {
    text: &'a str,
    patterns: &'a [ImportPattern],
    pos: usize,
    pending: VecDeque<ImportToken>,
}

impl Iterator for TokenIter<'_> {
    type Item = ImportToken;

    fn next(&mut self) -> Option<ImportToken> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }

            // Earliest match across all patterns; pattern order breaks ties.
            let mut best: Option<(usize, usize, regex::Captures)> = None;
            for (idx, pattern) in self.patterns.iter().enumerate() {
                if let Some(caps) = pattern.regex.captures_at(self.text, self.pos) {
                    let start = caps.get(0).map(|m| m.start()).unwrap_or(usize::MAX);
                    let better = match &best {
                        Some((s, i, _)) => start < *s || (start == *s && idx < *i),
                        None => true,
                    };
                    if better {
                        best = Some((start, idx, caps));
                    }
                }
            }

            let (_, idx, caps) = match best {
                Some(found) => found,
                None => {
                    self.pos = self.text.len();
                    return None;
                }
            };

            let end = caps.get(0).map(|m| m.end()).unwrap_or(self.text.len());
            if end > self.pos {
                self.pos = end;
            } else {
                // Zero-width match; step one character to guarantee progress.
                self.pos += self.text[self.pos..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
            }

            let pattern = &self.patterns[idx];
            if let Some(capture) = caps.get(1) {
                push_tokens(&mut self.pending, capture.as_str(), pattern);
            }
        }
    }
}

fn push_tokens(pending: &mut VecDeque<ImportToken>, capture: &str, pattern: &ImportPattern) {
    match pattern.mode {
        CaptureMode::Single => {
            let text = capture.trim();
            if !text.is_empty() {
                pending.push_back(ImportToken {
                    text: text.to_string(),
                    hint: pattern.hint,
                });
            }
        }
        CaptureMode::CommaList => {
            for part in capture.split(',') {
                let text = part.trim();
                if !text.is_empty() {
                    pending.push_back(ImportToken {
                        text: text.to_string(),
                        hint: pattern.hint,
                    });
                }
            }
        }
        CaptureMode::QuotedList => {
            for caps in quoted_entry_regex().captures_iter(capture) {
                if let Some(entry) = caps.get(1) {
                    let text = entry.as_str().trim();
                    if !text.is_empty() {
                        pending.push_back(ImportToken {
                            text: text.to_string(),
                            hint: pattern.hint,
                        });
                    }
                }
            }
        }
    }
}

fn quoted_entry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("static quoted-entry pattern"))
}
