//! # Prompt Construction
//!
//! Fills the RFP template, shortening oversized input so the request stays
//! within a predictable size.

use super::rfp::RFP_USER_PROMPT;
use crate::constants::{MAX_INPUT_CHARS, TRUNCATION_PLACEHOLDER};

/// Shortens `text` to at most `width` characters.
///
/// Text that already fits is returned untouched. Otherwise whitespace runs are
/// collapsed and, if that is still too long, trailing words are dropped until
/// the kept words plus `placeholder` fit. Lengths are counted in `char`s.
pub fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(placeholder.chars().count());
    let mut kept = String::new();
    let mut kept_len = 0;
    for word in words {
        let word_len = word.chars().count();
        let needed = if kept.is_empty() {
            word_len
        } else {
            kept_len + 1 + word_len
        };
        if needed > budget {
            break;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(word);
        kept_len = needed;
    }
    kept.push_str(placeholder);
    kept
}

/// Builds the user prompt for a drafting request.
pub fn build_rfp_prompt(rfp_text: &str) -> String {
    let shortened = shorten(rfp_text, MAX_INPUT_CHARS, TRUNCATION_PLACEHOLDER);
    RFP_USER_PROMPT.replace("{rfp_text}", &shortened)
}
