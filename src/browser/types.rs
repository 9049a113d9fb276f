//! Outcome types for a character lookup.

use serde::Deserialize;

/// What the in-page `fetch` against the internal endpoint captured.
///
/// An in-page exception leaves `text` unset and `error` populated; the
/// handler then reports a bad gateway, since no body was produced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageFetch {
    pub status: Option<u16>,
    pub content_type: Option<String>,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl PageFetch {
    pub fn body(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Well-formed upstream bodies are JSON objects; anything else is an
    /// error page or a bot-check interstitial.
    pub fn is_json(&self) -> bool {
        self.body().trim().starts_with('{')
    }

    /// First `max_chars` characters of the body, boundary-safe.
    pub fn head(&self, max_chars: usize) -> String {
        self.body().chars().take(max_chars).collect()
    }
}

/// A completed lookup: the URLs that were used plus the captured response.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub character_url: String,
    pub api_path: String,
    pub page: PageFetch,
}
