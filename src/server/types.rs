use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "charId")]
    pub char_id: Option<String>,
    /// Presence-only flag: `?debug` and `?debug=1` both enable it.
    #[serde(default)]
    pub debug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MissingParamResponse {
    pub error: String,
    pub hint: String,
}

impl MissingParamResponse {
    pub fn missing_character_id() -> Self {
        Self {
            error: "missing image (charId)".to_string(),
            hint: "query: image or charId, server".to_string(),
        }
    }
}

/// Diagnostic envelope returned instead of the relayed body in debug mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugResponse {
    pub char_url: String,
    pub api_path: String,
    pub result_head: String,
    pub content_type: Option<String>,
    pub is_json: bool,
}

/// Returned when the upstream produced something other than JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamErrorResponse {
    pub error: String,
    pub status: Option<u16>,
    pub content_type: Option<String>,
    pub head: String,
}

#[derive(Debug, Serialize)]
pub struct ServerErrorResponse {
    pub error: String,
    pub message: String,
}
