use rfpdraft::errors::PromptError;
use rfpdraft::providers::ai::AiProvider;
use rfpdraft::types::GenerationOptions;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// A single recorded `generate` call.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub options: GenerationOptions,
}

#[derive(Clone, Debug)]
enum Programmed {
    Response(String),
    Failure(String),
}

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    programmed: Arc<Mutex<Option<Programmed>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            programmed: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that answers every call with `response`.
    pub fn responding(response: &str) -> Self {
        let provider = Self::new();
        provider.set_response(response);
        provider
    }

    /// A provider that fails every call with an API error carrying `message`.
    pub fn failing(message: &str) -> Self {
        let provider = Self::new();
        *provider.programmed.lock().unwrap() = Some(Programmed::Failure(message.to_string()));
        provider
    }

    pub fn set_response(&self, response: &str) {
        *self.programmed.lock().unwrap() = Some(Programmed::Response(response.to_string()));
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, PromptError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            options: *options,
        });

        match self.programmed.lock().unwrap().clone() {
            Some(Programmed::Response(response)) => Ok(response),
            Some(Programmed::Failure(message)) => Err(PromptError::AiApi(message)),
            None => Err(PromptError::AiApi(
                "MockAiProvider: no response programmed".to_string(),
            )),
        }
    }
}

// --- Test-Specific Helpers ---
pub mod helpers {
    use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

    /// Generates a PDF with one page per entry in `pages`.
    ///
    /// Each entry is drawn in Helvetica. An empty entry produces a page with
    /// no content stream, like a scanned page with no text layer. Within an
    /// entry:
    /// - a blank line (`"\n\n"`) starts a new text object (`BT`/`ET`);
    /// - the first line of a text object is placed with `Td`, later lines
    ///   alternate between `T*` and a vertical `Td`;
    /// - `|` splits a line into pieces shown by one `TJ` with kerning in
    ///   between, so `"Sco|pe"` reads back as `"Scope"`.
    pub fn generate_test_pdf(pages: &[&str]) -> Vec<u8> {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let font_name = Name(b"F1");

        let page_ids: Vec<Ref> = (0..pages.len())
            .map(|i| Ref::new(4 + 2 * i as i32))
            .collect();

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(pages.len() as i32);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        for (i, text) in pages.iter().enumerate() {
            let page_id = page_ids[i];
            let content_id = Ref::new(page_id.get() + 1);

            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, 595.0, 842.0));
            page.parent(page_tree_id);
            if !text.is_empty() {
                page.contents(content_id);
            }
            page.resources().fonts().pair(font_name, font_id);
            page.finish();

            if !text.is_empty() {
                let mut content = Content::new();
                for (block_index, block) in text.split("\n\n").enumerate() {
                    content.begin_text();
                    content.set_font(font_name, 14.0);
                    content.set_leading(18.0);
                    for (line_index, line) in block.lines().enumerate() {
                        if line_index == 0 {
                            content.next_line(108.0, 734.0 - 120.0 * block_index as f32);
                        } else if line_index % 2 == 1 {
                            content.next_line_using_leading();
                        } else {
                            content.next_line(0.0, -18.0);
                        }
                        show_line(&mut content, line);
                    }
                    content.end_text();
                }
                pdf.stream(content_id, &content.finish());
            }
        }

        pdf.finish()
    }

    fn show_line(content: &mut Content, line: &str) {
        if !line.contains('|') {
            content.show(Str(line.as_bytes()));
            return;
        }
        let mut shown = content.show_positioned();
        let mut items = shown.items();
        for (i, piece) in line.split('|').enumerate() {
            if i > 0 {
                items.adjust(-120.0);
            }
            items.show(Str(piece.as_bytes()));
        }
    }
}
