//! Transcript normalization pipeline
//!
//! Pure text cleanup applied to every recognition result before display and
//! submission: whitespace collapse before punctuation, terminal period
//! insertion, and sentence capitalization. The pipeline is idempotent, so it
//! is safe to re-run over text that was already normalized by an earlier
//! partial result.

/// Normalize a raw transcript segment.
///
/// Steps, in order:
/// 1. collapse whitespace immediately preceding `.`, `,`, `?`, or `!`
/// 2. append `.` if the text is non-empty and not already terminated
/// 3. capitalize the first alphabetic character and each sentence start
pub fn normalize(text: &str) -> String {
    let collapsed = collapse_space_before_punctuation(text);
    let terminated = ensure_terminal_punctuation(&collapsed);
    capitalize_sentences(&terminated)
}

/// Remove whitespace runs that sit directly before punctuation
/// (`"word ."` becomes `"word."`).
fn collapse_space_before_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '.' | ',' | '?' | '!') {
            while out.ends_with(|p: char| p.is_whitespace()) {
                out.pop();
            }
        }
        out.push(c);
    }
    out
}

/// Append a terminal `.` unless the text already ends in `.`, `?`, or `!`.
/// Trailing whitespace is dropped first so the appended period never
/// reintroduces a space-before-punctuation sequence.
fn ensure_terminal_punctuation(text: &str) -> String {
    let mut out = text.trim_end().to_string();
    if !out.is_empty() && !out.ends_with(['.', '?', '!']) {
        out.push('.');
    }
    out
}

/// Uppercase the first alphabetic character of the text and the first
/// character of every sentence start (terminal punctuation followed by
/// whitespace).
fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut first_alpha_pending = true;
    let mut after_terminal = false;
    let mut after_terminal_ws = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if after_terminal {
                after_terminal_ws = true;
            }
            out.push(c);
            continue;
        }

        let sentence_start = after_terminal && after_terminal_ws;
        if c.is_alphabetic() && (first_alpha_pending || sentence_start) {
            out.extend(c.to_uppercase());
            first_alpha_pending = false;
        } else {
            if c.is_alphabetic() {
                first_alpha_pending = false;
            }
            out.push(c);
        }

        after_terminal = matches!(c, '.' | '?' | '!');
        after_terminal_ws = false;
    }

    out
}
