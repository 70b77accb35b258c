//! # Response Handling
//!
//! The model is asked for strict JSON but nothing forces it to comply. The raw
//! text is therefore always kept, and a parse attempt yields either a
//! [`DraftResponse::Structured`] or a [`DraftResponse::Raw`] value. Field
//! access is lenient: anything missing or oddly shaped degrades to empty
//! sections instead of an error.

use crate::constants::{MAX_RENDERED_ITEMS, PARSE_FALLBACK_NOTICE};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^```(?:json|JSON)?\s*\n?([\s\S]*?)\n?```$").expect("code fence regex is valid")
});

/// One extracted question with the model's draft answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftItem {
    pub question: Option<String>,
    pub draft_answer: Option<String>,
}

/// The structured content of a well-formed response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RfpDraft {
    pub summary: Vec<String>,
    pub items: Vec<DraftItem>,
    pub missing_info: Vec<String>,
}

/// The model's answer, with or without a usable JSON structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftResponse {
    Structured { raw: String, draft: RfpDraft },
    Raw { raw: String },
}

impl DraftResponse {
    /// Parses a model response. Never fails: unparseable text becomes `Raw`.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into().trim().to_string();
        let candidate = CODE_FENCE
            .captures(&raw)
            .and_then(|caps| caps.get(1))
            .map_or(raw.as_str(), |m| m.as_str());

        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(object)) => {
                let draft = RfpDraft::from_object(&object);
                DraftResponse::Structured { raw, draft }
            }
            _ => DraftResponse::Raw { raw },
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            DraftResponse::Structured { raw, .. } | DraftResponse::Raw { raw } => raw,
        }
    }

    pub fn structured(&self) -> Option<&RfpDraft> {
        match self {
            DraftResponse::Structured { draft, .. } => Some(draft),
            DraftResponse::Raw { .. } => None,
        }
    }
}

impl RfpDraft {
    fn from_object(object: &Map<String, Value>) -> Self {
        let items = match object.get("items") {
            Some(Value::Array(values)) => values.iter().map(DraftItem::from_value).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![DraftItem::from_value(other)],
        };
        Self {
            summary: string_list(object.get("summary")),
            items,
            missing_info: string_list(object.get("missing_info")),
        }
    }
}

impl DraftItem {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(item) => Self {
                question: item.get("question").and_then(display_text),
                draft_answer: item.get("draft_answer").and_then(display_text),
            },
            other => Self {
                question: display_text(other),
                draft_answer: None,
            },
        }
    }
}

/// Strings are used as-is; other scalars and nested values keep their JSON
/// text. `null` is treated as absent.
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(values)) => values.iter().filter_map(display_text).collect(),
        Some(other) => display_text(other).into_iter().collect(),
        None => Vec::new(),
    }
}

/// A question/answer pair ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// 1-based position in the model's list.
    pub index: usize,
    pub question: String,
    pub draft_answer: String,
}

/// What every front end shows for a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftView {
    pub raw: String,
    pub summary: Vec<String>,
    pub items: Vec<ItemView>,
    /// Number of items the model returned before capping.
    pub total_items: usize,
    pub missing_info: Vec<String>,
    pub notice: Option<String>,
}

impl From<&DraftResponse> for DraftView {
    fn from(response: &DraftResponse) -> Self {
        match response {
            DraftResponse::Structured { raw, draft } => Self {
                raw: raw.clone(),
                summary: draft.summary.clone(),
                items: draft
                    .items
                    .iter()
                    .take(MAX_RENDERED_ITEMS)
                    .enumerate()
                    .map(|(i, item)| ItemView {
                        index: i + 1,
                        question: item
                            .question
                            .clone()
                            .unwrap_or_else(|| "(no question)".to_string()),
                        draft_answer: item.draft_answer.clone().unwrap_or_default(),
                    })
                    .collect(),
                total_items: draft.items.len(),
                missing_info: draft.missing_info.clone(),
                notice: None,
            },
            DraftResponse::Raw { raw } => Self {
                raw: raw.clone(),
                summary: Vec::new(),
                items: Vec::new(),
                total_items: 0,
                missing_info: Vec::new(),
                notice: Some(PARSE_FALLBACK_NOTICE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_json_is_structured() {
        let raw = json!({
            "summary": ["Cloud migration", "Due 1 March"],
            "items": [{"question": "Do you support SSO?", "draft_answer": "Yes, via SAML 2.0."}],
            "missing_info": ["Budget range"]
        })
        .to_string();

        let response = DraftResponse::parse(raw.clone());
        let draft = response.structured().expect("should be structured");
        assert_eq!(draft.summary, vec!["Cloud migration", "Due 1 March"]);
        assert_eq!(
            draft.items,
            vec![DraftItem {
                question: Some("Do you support SSO?".into()),
                draft_answer: Some("Yes, via SAML 2.0.".into()),
            }]
        );
        assert_eq!(draft.missing_info, vec!["Budget range"]);
        assert_eq!(response.raw(), raw);
    }

    #[test]
    fn prose_falls_back_to_raw() {
        let response = DraftResponse::parse("  Sure! Here is your summary...  ");
        assert_eq!(
            response,
            DraftResponse::Raw {
                raw: "Sure! Here is your summary...".into()
            }
        );
        let view = DraftView::from(&response);
        assert_eq!(view.notice.as_deref(), Some(PARSE_FALLBACK_NOTICE));
        assert_eq!(view.raw, "Sure! Here is your summary...");
        assert!(view.items.is_empty());
    }

    #[test]
    fn non_object_json_falls_back_to_raw() {
        assert!(DraftResponse::parse("[1, 2, 3]").structured().is_none());
        assert!(DraftResponse::parse("\"just a string\"").structured().is_none());
    }

    #[test]
    fn fenced_json_is_unwrapped_but_raw_keeps_the_fence() {
        let raw = "```json\n{\"summary\": [\"a\"]}\n```";
        let response = DraftResponse::parse(raw);
        assert_eq!(response.structured().unwrap().summary, vec!["a"]);
        assert_eq!(response.raw(), raw);
    }

    #[test]
    fn odd_shapes_degrade_leniently() {
        let response = DraftResponse::parse(
            json!({
                "summary": "one line",
                "items": ["bare question", {"draft_answer": 42}, {"question": null}],
                "missing_info": null
            })
            .to_string(),
        );
        let draft = response.structured().unwrap();
        assert_eq!(draft.summary, vec!["one line"]);
        assert_eq!(draft.items[0].question.as_deref(), Some("bare question"));
        assert_eq!(draft.items[1].draft_answer.as_deref(), Some("42"));
        assert_eq!(draft.items[2], DraftItem::default());
        assert!(draft.missing_info.is_empty());

        let view = DraftView::from(&response);
        assert_eq!(view.items[1].question, "(no question)");
        assert_eq!(view.items[2].draft_answer, "");
    }

    #[test]
    fn view_caps_items_at_fifty() {
        let items: Vec<_> = (1..=60)
            .map(|i| json!({"question": format!("Q{i}"), "draft_answer": format!("A{i}")}))
            .collect();
        let response = DraftResponse::parse(json!({ "items": items }).to_string());
        let view = DraftView::from(&response);

        assert_eq!(view.items.len(), MAX_RENDERED_ITEMS);
        assert_eq!(view.total_items, 60);
        assert_eq!(view.items[0].index, 1);
        assert_eq!(view.items[49].question, "Q50");
        assert!(view.notice.is_none());
        assert!(view.summary.is_empty());
        assert!(view.missing_info.is_empty());
    }
}
