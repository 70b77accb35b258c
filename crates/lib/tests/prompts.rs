//! # Prompt Construction Tests
//!
//! Validates how RFP text is embedded into the fixed instruction template and
//! how oversized input is shortened.

use rfpdraft::constants::{MAX_INPUT_CHARS, TRUNCATION_PLACEHOLDER};
use rfpdraft::prompts::{build_rfp_prompt, rfp::RFP_USER_PROMPT, shorten};

/// Pulls the embedded RFP text back out of the triple-quoted block.
fn embedded_text(prompt: &str) -> &str {
    let start = prompt.find("\"\"\"").expect("opening quotes") + 3;
    let end = prompt.rfind("\"\"\"").expect("closing quotes");
    &prompt[start..end]
}

#[test]
fn short_text_is_embedded_unmodified() {
    let text = "Section 1.\n\n  The vendor   shall provide 24/7 support.\tPricing in EUR.";
    let prompt = build_rfp_prompt(text);
    assert_eq!(embedded_text(&prompt), text);
}

#[test]
fn prompt_carries_the_four_tasks_and_schema() {
    let prompt = build_rfp_prompt("anything");
    assert!(prompt.contains("1) Provide a short \"RFP at a glance\" summary in 3-5 bullet points."));
    assert!(prompt.contains("2) Extract up to 12 clear questions"));
    assert!(prompt.contains("3) For each question/bullet, propose a concise draft answer"));
    assert!(prompt.contains("4) Note any obvious missing information"));
    assert!(prompt.contains("items (array of {question, draft_answer})"));
    assert!(prompt.contains("Respond only with valid JSON."));
    assert!(RFP_USER_PROMPT.contains("{rfp_text}"));
    assert!(!prompt.contains("{rfp_text}"));
}

#[test]
fn text_at_the_limit_is_kept() {
    let text = "a".repeat(MAX_INPUT_CHARS);
    assert_eq!(shorten(&text, MAX_INPUT_CHARS, TRUNCATION_PLACEHOLDER), text);
}

#[test]
fn long_text_is_truncated_at_a_word_boundary() {
    let text = "lorem ipsum ".repeat(2_000);
    let prompt = build_rfp_prompt(&text);
    let embedded = embedded_text(&prompt);

    assert!(embedded.chars().count() <= MAX_INPUT_CHARS);
    assert!(embedded.ends_with("ipsum...") || embedded.ends_with("lorem..."));
    let prefix = embedded.trim_end_matches(TRUNCATION_PLACEHOLDER);
    assert!(text.starts_with(prefix));
}

#[test]
fn shorten_collapses_whitespace_only_when_too_long() {
    assert_eq!(shorten("a  b", 10, "..."), "a  b");
    assert_eq!(shorten("a    b    c", 6, "..."), "a b c");
    assert_eq!(shorten("alpha beta gamma", 12, "..."), "alpha...");
    assert_eq!(shorten("alpha beta gamma", 13, "..."), "alpha beta...");
}

#[test]
fn shorten_returns_placeholder_when_no_word_fits() {
    assert_eq!(shorten("supercalifragilistic word", 8, "..."), "...");
}

#[test]
fn shorten_counts_characters_not_bytes() {
    let text = "é".repeat(12);
    assert_eq!(shorten(&text, 12, "..."), text);
    let words = "éé éé éé éé";
    assert_eq!(shorten(words, 8, "..."), "éé éé...");
}
