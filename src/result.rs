//! Presentation model for the result viewer

use crate::types::GenerationResult;

pub const PREVIEW_PLACEHOLDER: &str = "Circuit preview unavailable";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description unavailable";
pub const CODE_PLACEHOLDER: &str = "Source code unavailable";

/// What the result viewer should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub preview_url: Option<String>,
    pub description: Option<String>,
    /// `Some` when the code panel is shown; the inner value is the source,
    /// or `None` to show the placeholder.
    pub code_panel: Option<Option<String>>,
}

fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

impl ResultView {
    pub fn from_result(result: &GenerationResult) -> Self {
        let preview_url = present(&result.url);
        let description = present(&result.content);
        let code_panel = (preview_url.is_some() && description.is_some())
            .then(|| present(&result.code));
        Self {
            preview_url,
            description,
            code_panel,
        }
    }
}

fn is_script_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Render Markdown descriptions to HTML.
///
/// Descriptions come from the backend and echo user prompts, so raw HTML is
/// emitted as escaped text and script URLs in links or images become `#`.
pub fn description_html(markdown: &str) -> String {
    use pulldown_cmark::{html, Event, Options, Parser, Tag};

    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link { link_type, dest_url, title, id }) if is_script_url(&dest_url) => {
                Event::Start(Tag::Link { link_type, dest_url: "#".into(), title, id })
            }
            Event::Start(Tag::Image { link_type, dest_url, title, id }) if is_script_url(&dest_url) => {
                Event::Start(Tag::Image { link_type, dest_url: "#".into(), title, id })
            }
            other => other,
        });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_and_content_render_with_code_panel() {
        let view = ResultView::from_result(&GenerationResult {
            url: Some("http://x".into()),
            content: Some("c".into()),
            ..Default::default()
        });
        assert_eq!(view.preview_url.as_deref(), Some("http://x"));
        assert_eq!(view.description.as_deref(), Some("c"));
        assert_eq!(view.code_panel, Some(None));
    }

    #[test]
    fn empty_result_renders_both_placeholders() {
        let view = ResultView::from_result(&GenerationResult::default());
        assert!(view.preview_url.is_none());
        assert!(view.description.is_none());
        assert!(view.code_panel.is_none());
    }

    #[test]
    fn code_panel_requires_url_and_content() {
        let view = ResultView::from_result(&GenerationResult {
            content: Some("text".into()),
            code: Some("qc.h(0)".into()),
            ..Default::default()
        });
        assert!(view.code_panel.is_none());

        let full = ResultView::from_result(&GenerationResult {
            url: Some("https://sim/abc".into()),
            content: Some("text".into()),
            code: Some("qc.h(0)".into()),
            error: None,
        });
        assert_eq!(full.code_panel, Some(Some("qc.h(0)".to_string())));
    }

    #[test]
    fn markdown_descriptions_become_html() {
        let html = description_html("A **Bell** state");
        assert!(html.contains("<strong>Bell</strong>"));
    }

    #[test]
    fn raw_html_in_descriptions_is_escaped() {
        let inline = description_html("Bell <img src=x onerror=alert(1)>");
        assert!(!inline.contains("<img"));
        assert!(inline.contains("&lt;img"));

        let block = description_html("<script>localStorage.session_token</script>\n\nok");
        assert!(!block.contains("<script"));
        assert!(block.contains("<p>ok</p>"));
    }

    #[test]
    fn script_links_are_neutralised() {
        let html = description_html("[run](javascript:alert(1)) and [docs](https://qiskit.org)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"href="#""##));
        assert!(html.contains(r#"href="https://qiskit.org""#));
    }
}
