//! # HTML Views
//!
//! Server-rendered pages for the browser UI. Every interpolated value goes
//! through [`escape_html`] (or base64); model output in particular is untrusted.

use rfpdraft::{
    constants::{DOWNLOAD_FILE_NAME, MAX_RENDERED_ITEMS, PREVIEW_CHARS},
    types::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, MAX_TOKENS_RANGE, TEMPERATURE_RANGE},
    DraftView, ModelChoice,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt::Write as _;

pub const PAGE_TITLE: &str = "Tiny RFP Assistant";
pub const SUCCESS_MESSAGE: &str = "Done: model returned results.";

/// The form fields as the user entered them, kept as text so they can be
/// shown again after an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub rfp_text: String,
    pub model: String,
    pub temperature: String,
    pub max_tokens: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            rfp_text: String::new(),
            model: ModelChoice::default().to_string(),
            temperature: DEFAULT_TEMPERATURE.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Info,
    Warning,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert success",
            AlertKind::Info => "alert info",
            AlertKind::Warning => "alert warning",
            AlertKind::Error => "alert error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A finished draft to show under the form.
pub struct ResultSection<'a> {
    pub preview: Option<&'a str>,
    pub view: &'a DraftView,
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 1100px; padding: 0 1rem; }
.columns { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
textarea { width: 100%; height: 300px; }
pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; white-space: pre-wrap; }
.alert { padding: 0.75rem 1rem; border-radius: 4px; margin: 1rem 0; }
.success { background: #e6f4ea; } .info { background: #e8f0fe; }
.warning { background: #fef7e0; } .error { background: #fce8e6; }
"#;

/// Renders the whole page: the input form, any alerts, and an optional result.
pub fn render_page(values: &FormValues, alerts: &[Alert], result: Option<ResultSection<'_>>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}: paste or upload a PDF</h1>\n",
        title = PAGE_TITLE
    );
    html.push_str(
        "<p><strong>How to use:</strong> Paste RFP text in the box OR upload a PDF file. Click <em>Generate Draft Answers</em>.</p>\n",
    );
    render_form(&mut html, values);
    for alert in alerts {
        render_alert(&mut html, alert);
    }
    if let Some(result) = result {
        render_result(&mut html, &result);
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn render_alert(html: &mut String, alert: &Alert) {
    let _ = writeln!(
        html,
        "<div class=\"{}\" role=\"alert\">{}</div>",
        alert.kind.class(),
        escape_html(&alert.message)
    );
}

fn render_form(html: &mut String, values: &FormValues) {
    html.push_str(
        "<form method=\"post\" action=\"/draft\" enctype=\"multipart/form-data\">\n<div class=\"columns\">\n<div>\n",
    );
    let _ = writeln!(
        html,
        "<label for=\"rfp_text\">Paste RFP text (or paste extracted questions)</label>\n<textarea id=\"rfp_text\" name=\"rfp_text\" placeholder=\"Paste the RFP or its questions here...\">{}</textarea>",
        escape_html(&values.rfp_text)
    );
    html.push_str(
        "<p><label for=\"file\">Or upload RFP PDF</label>\n<input type=\"file\" id=\"file\" name=\"file\" accept=\".pdf,.txt,application/pdf,text/plain\"></p>\n</div>\n<div>\n<h3>Options</h3>\n",
    );

    html.push_str("<p><label for=\"model\">Model (choose one)</label>\n<select id=\"model\" name=\"model\">\n");
    for model in ModelChoice::ALL {
        let selected = if values.model == model.as_str() {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{m}\"{selected}>{m}</option>",
            m = model.as_str()
        );
    }
    html.push_str("</select></p>\n");

    let _ = writeln!(
        html,
        "<p><label for=\"temperature\">Creativity (temperature)</label>\n<input type=\"number\" id=\"temperature\" name=\"temperature\" min=\"{}\" max=\"{}\" step=\"0.05\" value=\"{}\"></p>",
        TEMPERATURE_RANGE.start(),
        TEMPERATURE_RANGE.end(),
        escape_html(&values.temperature)
    );
    let _ = writeln!(
        html,
        "<p><label for=\"max_tokens\">Max tokens</label>\n<input type=\"number\" id=\"max_tokens\" name=\"max_tokens\" min=\"{}\" max=\"{}\" step=\"50\" value=\"{}\"></p>",
        MAX_TOKENS_RANGE.start(),
        MAX_TOKENS_RANGE.end(),
        escape_html(&values.max_tokens)
    );
    html.push_str(
        "</div>\n</div>\n<button type=\"submit\">Generate Draft Answers</button>\n</form>\n",
    );
}

fn render_result(html: &mut String, result: &ResultSection<'_>) {
    let view = result.view;
    render_alert(html, &Alert::new(AlertKind::Success, SUCCESS_MESSAGE));

    if let Some(preview) = result.preview {
        render_alert(
            html,
            &Alert::new(
                AlertKind::Info,
                format!("Extracted text preview (first {}k chars):", PREVIEW_CHARS / 1000),
            ),
        );
        let _ = writeln!(html, "<pre class=\"preview\">{}</pre>", escape_html(preview));
    }

    let _ = writeln!(
        html,
        "<h2>Raw model output (JSON)</h2>\n<pre class=\"raw\"><code class=\"language-json\">{}</code></pre>",
        escape_html(&view.raw)
    );

    match &view.notice {
        Some(notice) => render_alert(html, &Alert::new(AlertKind::Info, notice.clone())),
        None => {
            html.push_str("<h2>Summary</h2>\n<ul class=\"summary\">\n");
            for bullet in &view.summary {
                let _ = writeln!(html, "<li>{}</li>", escape_html(bullet));
            }
            html.push_str("</ul>\n<h2>Extracted questions and draft answers</h2>\n");
            for item in &view.items {
                let _ = writeln!(
                    html,
                    "<div class=\"item\"><p><strong>{}. {}</strong></p><p>{}</p></div>",
                    item.index,
                    escape_html(&item.question),
                    escape_html(&item.draft_answer)
                );
            }
            if view.total_items > view.items.len() {
                let _ = writeln!(
                    html,
                    "<p class=\"capped\">Showing the first {MAX_RENDERED_ITEMS} of {} items.</p>",
                    view.total_items
                );
            }
            if !view.missing_info.is_empty() {
                html.push_str(
                    "<h2>Missing / follow-up info to request</h2>\n<ul class=\"missing-info\">\n",
                );
                for bullet in &view.missing_info {
                    let _ = writeln!(html, "<li>{}</li>", escape_html(bullet));
                }
                html.push_str("</ul>\n");
            }
        }
    }

    // Base64 keeps line endings intact; browsers rewrite textarea newlines as CRLF.
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"/download\">\n<input type=\"hidden\" name=\"raw_base64\" value=\"{}\">\n<button type=\"submit\">Download result (txt)</button> <small>{}</small>\n</form>",
        STANDARD.encode(view.raw.as_bytes()),
        DOWNLOAD_FILE_NAME
    );
}
