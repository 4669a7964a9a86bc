use memchr::memchr;
use serde::{Deserialize, Serialize};

/// Default width a phrase is shortened to before command detection.
/// Chat messages longer than this are almost never a single command.
pub const DEFAULT_MAX_WIDTH: usize = 100;

/// Split a phrase into tokens on ASCII whitespace.
/// Runs of whitespace never produce empty tokens.
pub fn split_tokens(phrase: &str) -> impl Iterator<Item = &[u8]> {
    phrase
        .as_bytes()
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
}

/// How a raw message is cleaned up before it is searched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseOptions {
    /// Only keep text before the first newline
    pub first_line_only: bool,
    /// Collapse whitespace and cut the phrase to at most this many characters
    pub max_width: Option<usize>,
    /// ASCII-lowercase the phrase
    pub fold_case: bool,
}

impl Default for PhraseOptions {
    fn default() -> Self {
        Self {
            first_line_only: true,
            max_width: Some(DEFAULT_MAX_WIDTH),
            fold_case: true,
        }
    }
}

impl PhraseOptions {
    /// Options that leave the phrase untouched
    pub fn raw() -> Self {
        Self {
            first_line_only: false,
            max_width: None,
            fold_case: false,
        }
    }
}

/// Apply `options` to a raw message
pub fn normalize_phrase(phrase: &str, options: &PhraseOptions) -> String {
    let mut text = phrase;
    if options.first_line_only {
        if let Some(end) = memchr(b'\n', text.as_bytes()) {
            text = &text[..end];
        }
    }

    let mut normalized = match options.max_width {
        Some(width) => shorten(text, width),
        None => text.to_string(),
    };

    if options.fold_case {
        normalized.make_ascii_lowercase();
    }
    normalized
}

/// Collapse whitespace runs and keep as many whole words as fit in `width`.
/// A word longer than the whole width is cut to fill the remaining room;
/// shorter words that do not fit are dropped.
fn shorten(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;

    for word in text.split_ascii_whitespace() {
        let sep = usize::from(!out.is_empty());
        let word_len = word.chars().count();

        if used + sep + word_len <= width {
            if sep == 1 {
                out.push(' ');
            }
            out.push_str(word);
            used += sep + word_len;
            continue;
        }

        if word_len > width {
            let room = width.saturating_sub(used + sep);
            if room > 0 {
                if sep == 1 {
                    out.push(' ');
                }
                out.extend(word.chars().take(room));
            }
        }
        break;
    }

    out
}
