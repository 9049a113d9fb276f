use dundam_proxy::Result;
use tempfile::TempDir;
use tokio::fs;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

upstream:
  base_url: "https://dundam.example"
  default_server: "sirocco"
  settle_delay_ms: 50

browser:
  chrome_path: "/usr/bin/chromium"
  headless: false
  navigation_timeout_ms: 5000
  user_agent: "test-agent"
  accept_language: "en-US"
  chrome_args:
    - "--window-size=1280,720"
"#;

/// Configuration with only one section set; the rest must default
pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 9999
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
