//! URL construction for the upstream site.
//!
//! The lookup touches two upstream surfaces: the public character page, which
//! mints the session cookies, and the internal `viewData.jsp` endpoint, which
//! is only reachable from inside that page's browsing context.

use crate::{Error, Result};
use chrono::Utc;
use url::Url;

/// Absolute URL of the character page that establishes the session.
pub fn character_page_url(base_url: &str, server: &str, character_id: &str) -> Result<String> {
    let mut url = Url::parse(base_url)
        .map_err(|e| Error::config(format!("invalid upstream base URL '{base_url}': {e}")))?;
    url.set_path("/character");
    url.query_pairs_mut()
        .append_pair("server", server)
        .append_pair("key", character_id);
    Ok(url.to_string())
}

/// Path of the internal JSON endpoint, relative to the page origin. The `_`
/// parameter busts any intermediate cache.
pub fn view_data_path(server: &str, character_id: &str, cache_buster_ms: i64) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("image", character_id)
        .append_pair("server", server)
        .append_pair("_", &cache_buster_ms.to_string())
        .finish();
    format!("/viewData.jsp?{query}")
}

pub fn cache_buster_ms() -> i64 {
    Utc::now().timestamp_millis()
}
