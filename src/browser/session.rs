//! Scoped browser session: launch, page setup, teardown.

use std::time::Duration;

use {
    chromiumoxide::{
        Browser, BrowserConfig as CdpBrowserConfig, Page,
        cdp::browser_protocol::network::{Headers, SetExtraHttpHeadersParams},
    },
    futures::StreamExt,
    serde_json::json,
    tokio::task::JoinHandle,
    tracing::{debug, warn},
};

use crate::{
    browser::{detect, error::BrowserError},
    config::BrowserConfig,
};

/// A Chromium instance scoped to a single lookup.
///
/// The caller owns the lifecycle: [`launch`](Self::launch) at the start,
/// [`close`](Self::close) on every path once done. Dropping without closing
/// leaves the child process to the kernel.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    accept_language: String,
}

impl BrowserSession {
    /// Launch a browser with the configured identity.
    pub async fn launch(config: &BrowserConfig) -> Result<Self, BrowserError> {
        let detection = detect::detect_browser(config.chrome_path.as_deref());
        let Some(executable) = detection.path else {
            return Err(BrowserError::LaunchFailed(format!(
                "Chrome/Chromium not found\n{}",
                detection.install_hint
            )));
        };

        let mut builder = CdpBrowserConfig::builder();

        // chromiumoxide runs headless unless told otherwise
        if !config.headless {
            builder = builder.with_head();
        }

        builder = builder
            .chrome_executable(&executable)
            .request_timeout(Duration::from_millis(config.navigation_timeout_ms))
            .arg(format!("--user-agent={}", config.user_agent));

        for arg in &config.chrome_args {
            builder = builder.arg(arg);
        }

        // Required for headless operation in containers
        builder = builder
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox");

        let cdp_config = builder.build().map_err(|e| {
            BrowserError::LaunchFailed(format!("failed to build browser config: {e}"))
        })?;

        let (browser, mut handler) = Browser::launch(cdp_config)
            .await
            .map_err(|e| BrowserError::LaunchFailed(format!("browser launch failed: {e}")))?;

        // Drain CDP events until the connection closes
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!(?event, "browser event");
            }
        });

        debug!(executable = %executable.display(), "launched browser");

        Ok(Self {
            browser,
            handler_task,
            accept_language: config.accept_language.clone(),
        })
    }

    /// Open a fresh page carrying the configured Accept-Language header.
    pub async fn new_page(&self) -> Result<Page, BrowserError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let headers = Headers::new(json!({ "Accept-Language": self.accept_language }));
        let cmd = SetExtraHttpHeadersParams::builder()
            .headers(headers)
            .build()
            .map_err(|e| BrowserError::Cdp(e.to_string()))?;
        page.execute(cmd).await?;

        Ok(page)
    }

    /// Close the browser and reap the child process.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!(error = %e, "failed to close browser cleanly");
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}
