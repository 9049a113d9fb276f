use async_trait::async_trait;
use dundam_proxy::{
    Error, Result,
    browser::{CharacterFetcher, LookupOutcome, PageFetch},
};
use std::sync::{Arc, Mutex};

/// Mock fetcher for testing: records lookups and returns a canned outcome.
pub struct MockFetcher {
    pub outcome: Arc<Mutex<Option<LookupOutcome>>>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub error: Option<String>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            outcome: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_page(self, page: PageFetch) -> Self {
        *self.outcome.lock().unwrap() = Some(LookupOutcome {
            character_url: "https://dundam.xyz/character?server=cain&key=12345".to_string(),
            api_path: "/viewData.jsp?image=12345&server=cain&_=0".to_string(),
            page,
        });
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CharacterFetcher for MockFetcher {
    async fn fetch(&self, server: &str, character_id: &str) -> Result<LookupOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((server.to_string(), character_id.to_string()));

        if let Some(error) = &self.error {
            return Err(Error::internal(error.clone()));
        }

        self.outcome
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::internal("no outcome configured"))
    }
}

/// An upstream body that parses as the character JSON payload.
pub fn json_page(body: &str) -> PageFetch {
    PageFetch {
        status: Some(200),
        content_type: Some("application/json; charset=utf-8".to_string()),
        text: Some(body.to_string()),
        error: None,
    }
}

/// An upstream response that is not JSON (error page, bot interstitial).
pub fn html_page(body: &str) -> PageFetch {
    PageFetch {
        status: Some(200),
        content_type: Some("text/html; charset=utf-8".to_string()),
        text: Some(body.to_string()),
        error: None,
    }
}

/// An in-page fetch that threw before producing a body.
pub fn failed_page(error: &str) -> PageFetch {
    PageFetch {
        status: None,
        content_type: None,
        text: None,
        error: Some(error.to_string()),
    }
}
