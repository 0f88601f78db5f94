use crate::snapshot::ScrapedSnapshot;

/// HTML is cut to this many characters before it reaches the model.
pub const MAX_HTML_CHARS: usize = 10_000;
/// Serialized computed styles are cut to this many characters.
pub const MAX_STYLE_CHARS: usize = 5_000;

pub const SYSTEM_INSTRUCTION: &str = r#"You are a world-class senior frontend engineer and UI/UX expert.
Your task is to recreate a website's UI from provided raw HTML and computed styles.

GOAL:
Convert the raw data into a modern, clean, and modular Next.js (App Router) project using Tailwind CSS.

CONSTRAINTS:
- Use React Functional Components with TypeScript.
- Use Tailwind CSS for all styling. No custom CSS files.
- Prefer semantic HTML (header, nav, main, section, footer).
- Group logical UI blocks into separate components in 'components/' directory.
- 'app/page.tsx' should be the main entry point assembling the sections.
- Use 'lucide-react' icons where appropriate (simulated via standard SVGs).
- Ensure the layout is responsive (mobile-first).
- Remove tracking scripts, ads, and unnecessary boilerplate.

OUTPUT FORMAT:
You MUST return a JSON object with a 'files' property.
'files' MUST be an ARRAY of objects, where each object contains:
- 'path': The full file path (e.g., "components/Header.tsx").
- 'content': The full string content of the file.

Example Structure:
{
  "files": [
    { "path": "app/layout.tsx", "content": "..." },
    { "path": "app/page.tsx", "content": "..." },
    { "path": "components/Header.tsx", "content": "..." }
  ]
}"#;

/// Everything the generator is allowed to see about a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub html_snippet: String,
    /// JSON text of the computed styles, already truncated.
    pub computed_styles: String,
    pub url: String,
}

impl GenerationRequest {
    pub fn new(html: &str, computed_styles_json: &str, url: &str) -> Self {
        Self {
            html_snippet: truncate_chars(html, MAX_HTML_CHARS).to_string(),
            computed_styles: truncate_chars(computed_styles_json, MAX_STYLE_CHARS).to_string(),
            url: url.to_string(),
        }
    }

    pub fn from_snapshot(snapshot: &ScrapedSnapshot, url: &str) -> Self {
        // A map of strings always serializes.
        let styles = serde_json::to_string(&snapshot.computed_styles).unwrap_or_default();
        Self::new(&snapshot.html_snippet, &styles, url)
    }

    /// The user turn sent alongside [`SYSTEM_INSTRUCTION`].
    pub fn prompt(&self) -> String {
        format!(
            "Analyze the following website data:\nURL: {url}\n\nHTML SNIPPET:\n{html}\n\nCOMPUTED STYLES KEY-VALUES:\n{styles}\n\nPlease generate the complete project files for this landing page.\n",
            url = self.url,
            html = self.html_snippet,
            styles = self.computed_styles,
        )
    }
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{style_map, SnapshotMetadata};

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("ééé", 0), "");
    }

    #[test]
    fn long_inputs_are_bounded() {
        let html = "x".repeat(MAX_HTML_CHARS + 500);
        let styles = "é".repeat(MAX_STYLE_CHARS * 2);
        let request = GenerationRequest::new(&html, &styles, "https://example.com");
        assert_eq!(request.html_snippet.chars().count(), MAX_HTML_CHARS);
        assert_eq!(request.computed_styles.chars().count(), MAX_STYLE_CHARS);
    }

    #[test]
    fn snapshot_styles_are_serialized_as_json() {
        let snapshot = ScrapedSnapshot {
            url: "https://example.com".into(),
            title: "Example Domain".into(),
            html_snippet: "<h1>Hi</h1>".into(),
            computed_styles: style_map([("h1", vec![("color", "#333")])]),
            metadata: SnapshotMetadata::default(),
        };
        let request = GenerationRequest::from_snapshot(&snapshot, "https://example.com");
        assert_eq!(request.computed_styles, r##"{"h1":{"color":"#333"}}"##);

        let prompt = request.prompt();
        assert!(prompt.contains("URL: https://example.com"));
        assert!(prompt.contains("HTML SNIPPET:\n<h1>Hi</h1>"));
        assert!(prompt.contains(r##"{"h1":{"color":"#333"}}"##));
    }
}
