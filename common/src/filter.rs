//! Profanity screening for user-supplied location names.
//!
//! Wraps `rustrict`. Link fragments are stripped before analysis so that a
//! name pasted together with a URL is judged on its words only.
//!
//! Both functions fail open: if the analyser panics, the text is treated as
//! acceptable and returned unchanged, and a warning is logged.

use log::warn;
use rustrict::CensorStr;
use std::panic;

const URL_FRAGMENTS: [&str; 4] = ["https://", "http://", "www.", "spotify.com"];

fn strip_url_fragments(text: &str) -> String {
    URL_FRAGMENTS
        .iter()
        .fold(text.to_lowercase(), |acc, fragment| acc.replace(fragment, ""))
}

/// Whether `text` should be rejected as inappropriate.
pub fn contains_inappropriate_content(text: &str) -> bool {
    let cleaned = strip_url_fragments(text);
    match panic::catch_unwind(|| cleaned.as_str().is_inappropriate()) {
        Ok(flagged) => flagged,
        Err(_) => {
            warn!("content filter failed while checking text, admitting it");
            false
        }
    }
}

/// Best-effort censoring of flagged words in `text`.
pub fn sanitize_content(text: &str) -> String {
    match panic::catch_unwind(|| text.censor()) {
        Ok(clean) => clean,
        Err(_) => {
            warn!("content filter failed while sanitizing text, returning it unchanged");
            text.to_string()
        }
    }
}
