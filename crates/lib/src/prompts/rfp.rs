//! # RFP Drafting Prompts

/// The system message sent with every drafting request.
pub const RFP_SYSTEM_PROMPT: &str = "You are a helpful, professional RFP response assistant.";

/// The user message template.
///
/// Placeholders: `{rfp_text}`
pub const RFP_USER_PROMPT: &str = r#"
You are an RFP assistant. Given the RFP text below, do the following:
1) Provide a short "RFP at a glance" summary in 3-5 bullet points.
2) Extract up to 12 clear questions or requirement bullets (numbered).
3) For each question/bullet, propose a concise draft answer (2-6 sentences) tailored for a professional B2B vendor response.
4) Note any obvious missing information we should ask the buyer.
Output JSON with fields: summary (array of bullets), items (array of {question, draft_answer}), missing_info (array).
Respond only with valid JSON.
RFP_TEXT:
"""{rfp_text}"""
"#;
