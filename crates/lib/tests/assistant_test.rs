//! # RfpAssistant Tests
//!
//! Checks the full round trip against a mock provider: one call per draft,
//! the fixed system message, and the two-branch response.

use rfpdraft::prompts::rfp::RFP_SYSTEM_PROMPT;
use rfpdraft::{DraftResponse, DraftView, GenerationOptions, ModelChoice, PromptError, RfpAssistant};
use rfpdraft_test_utils::MockAiProvider;
use serde_json::json;

#[tokio::test]
async fn drafts_with_a_single_call() {
    let response = json!({
        "summary": ["Facilities management for 3 sites"],
        "items": [{"question": "Describe your SLA.", "draft_answer": "We commit to a 4-hour response."}],
        "missing_info": ["Contract start date"]
    })
    .to_string();
    let provider = MockAiProvider::responding(&response);
    let assistant = RfpAssistant::new(Box::new(provider.clone()));
    let options = GenerationOptions::new(ModelChoice::Gpt4oMini, 0.5, 1500).unwrap();

    let outcome = assistant
        .draft("The buyer needs facilities management.", &options)
        .await
        .unwrap();

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].system_prompt, RFP_SYSTEM_PROMPT);
    assert!(calls[0]
        .user_prompt
        .contains("\"\"\"The buyer needs facilities management.\"\"\""));
    assert_eq!(calls[0].options, options);
    assert_eq!(outcome.prompt_chars, calls[0].user_prompt.chars().count());

    let view = DraftView::from(&outcome.response);
    assert_eq!(view.summary, vec!["Facilities management for 3 sites"]);
    assert_eq!(view.items[0].question, "Describe your SLA.");
    assert_eq!(view.missing_info, vec!["Contract start date"]);
}

#[tokio::test]
async fn non_json_reply_is_not_an_error() {
    let provider = MockAiProvider::responding("I could not produce JSON, sorry.");
    let assistant = RfpAssistant::new(Box::new(provider));

    let outcome = assistant
        .draft("Some RFP", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(
        outcome.response,
        DraftResponse::Raw {
            raw: "I could not produce JSON, sorry.".to_string()
        }
    );
}

#[tokio::test]
async fn provider_failure_is_returned_without_retry() {
    let provider = MockAiProvider::failing("invalid api key");
    let assistant = RfpAssistant::new(Box::new(provider.clone()));

    let err = assistant
        .draft("Some RFP", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PromptError::AiApi(ref m) if m == "invalid api key"));
    assert_eq!(provider.get_calls().len(), 1);
}
