use crate::domain::model::Category;
use crate::domain::traits::PageEmitter;
use anyhow::{anyhow, Result};

const TEMPLATE: &str = include_str!("../templates/nav_page.html");
const PAYLOAD_MARKER: &str = "__BOOKMARKS_PAYLOAD__";

/// Renders the static navigation page with the categories embedded as a
/// script-safe JSON literal.
pub struct NavPageEmitter;

impl PageEmitter for NavPageEmitter {
    fn emit(&self, categories: &[Category]) -> Result<String> {
        if !TEMPLATE.contains(PAYLOAD_MARKER) {
            return Err(anyhow!("page template is missing {PAYLOAD_MARKER}"));
        }
        let payload = script_safe_json(categories)?;
        Ok(TEMPLATE.replacen(PAYLOAD_MARKER, &payload, 1))
    }
}

pub fn script_safe_json(categories: &[Category]) -> Result<String> {
    let raw = serde_json::to_string(categories)?;
    Ok(escape_for_script(&raw))
}

/// Escapes JSON text for inline `<script>` use.
///
/// `</` can close the script element and `<!--` switches the tokenizer into
/// escaped script states. Both replacements are still valid JSON and decode
/// to the original string.
pub fn escape_for_script(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\u0021--")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Link;

    fn hostile() -> Vec<Category> {
        vec![Category {
            name: "</script><script>alert(1)</script>".to_string(),
            links: vec![Link {
                title: "<!-- sneaky".to_string(),
                url: "https://example.com/?q=</SCRIPT>".to_string(),
                icon: String::new(),
                added_at: String::new(),
            }],
        }]
    }

    #[test]
    fn escaped_payload_cannot_close_script_block() {
        let payload = script_safe_json(&hostile()).expect("payload");
        assert!(!payload.contains("</"));
        assert!(!payload.contains("<!--"));

        // Escapes must not change the decoded data.
        let decoded: Vec<Category> = serde_json::from_str(&payload).expect("still json");
        assert_eq!(decoded, hostile());
    }

    #[test]
    fn emit_embeds_payload_once_and_keeps_single_script_close() {
        let page = NavPageEmitter.emit(&hostile()).expect("emit");
        assert!(!page.contains(PAYLOAD_MARKER));
        assert!(page.contains("const bookmarksData = [{\"category\":"));
        assert_eq!(page.matches("</script>").count(), 1);
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn emit_is_deterministic() {
        let a = NavPageEmitter.emit(&hostile()).expect("emit");
        let b = NavPageEmitter.emit(&hostile()).expect("emit");
        assert_eq!(a, b);
    }

    #[test]
    fn template_carries_search_and_slash_shortcut() {
        let page = NavPageEmitter.emit(&[]).expect("emit");
        assert!(page.contains("const bookmarksData = [];"));
        assert!(page.contains("id=\"search\""));
        assert!(page.contains("event.key === '/'"));
        assert!(page.contains("toLowerCase().includes(keyword)"));
    }

    #[test]
    fn search_keyword_is_matched_untrimmed() {
        let page = NavPageEmitter.emit(&[]).expect("emit");
        assert!(page.contains("const keyword = (query || '').toLowerCase();"));
        assert!(!page.contains(".trim()"));
    }
}
