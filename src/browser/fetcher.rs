//! The lookup flow: establish a session on the character page, then call the
//! internal JSON endpoint from inside that page.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    Result,
    browser::{BrowserError, BrowserSession, LookupOutcome, PageFetch},
    config::{BrowserConfig, UpstreamConfig},
    upstream,
};

/// Performs a character lookup against the upstream site.
#[async_trait]
pub trait CharacterFetcher: Send + Sync {
    async fn fetch(&self, server: &str, character_id: &str) -> Result<LookupOutcome>;
}

/// Fetcher backed by a headless browser, one scoped session per lookup.
pub struct BrowserFetcher {
    browser: BrowserConfig,
    upstream: UpstreamConfig,
}

impl BrowserFetcher {
    pub fn new(browser: BrowserConfig, upstream: UpstreamConfig) -> Self {
        Self { browser, upstream }
    }

    async fn fetch_in_page(
        &self,
        session: &BrowserSession,
        character_url: &str,
        api_path: &str,
    ) -> std::result::Result<PageFetch, BrowserError> {
        let page = session.new_page().await?;

        // Visiting the character page mints the session cookies the internal
        // endpoint requires
        page.goto(character_url)
            .await
            .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;
        let _ = page.wait_for_navigation().await;

        // Let in-flight XHRs from the page settle before reusing its context
        tokio::time::sleep(std::time::Duration::from_millis(self.upstream.settle_delay_ms)).await;

        let script = in_page_fetch_script(api_path)?;
        let fetched: PageFetch = page
            .evaluate(script.as_str())
            .await
            .map_err(|e| BrowserError::JsEvalFailed(e.to_string()))?
            .into_value()
            .map_err(|e| BrowserError::JsEvalFailed(format!("{e:?}")))?;

        debug!(
            status = ?fetched.status,
            content_type = ?fetched.content_type,
            "in-page fetch completed"
        );

        Ok(fetched)
    }
}

#[async_trait]
impl CharacterFetcher for BrowserFetcher {
    async fn fetch(&self, server: &str, character_id: &str) -> Result<LookupOutcome> {
        let character_url =
            upstream::character_page_url(&self.upstream.base_url, server, character_id)?;
        let api_path =
            upstream::view_data_path(server, character_id, upstream::cache_buster_ms());

        info!(%character_url, "establishing upstream session");

        let session = BrowserSession::launch(&self.browser).await?;
        // The session comes down on every path, success or not
        let result = self
            .fetch_in_page(&session, &character_url, &api_path)
            .await;
        session.close().await;

        Ok(LookupOutcome {
            character_url,
            api_path,
            page: result?,
        })
    }
}

/// Build the script run inside the page context. The endpoint path is
/// JSON-quoted so reserved characters survive embedding.
fn in_page_fetch_script(api_path: &str) -> std::result::Result<String, BrowserError> {
    let quoted =
        serde_json::to_string(api_path).map_err(|e| BrowserError::JsEvalFailed(e.to_string()))?;
    Ok(format!(
        r#"(async () => {{
            try {{
                const r = await fetch({quoted}, {{ method: "GET", cache: "no-store" }});
                const ct = r.headers.get("content-type") || "";
                const t = await r.text();
                return {{ status: r.status, contentType: ct, text: t }};
            }} catch (e) {{
                return {{ error: String(e) }};
            }}
        }})()"#
    ))
}
