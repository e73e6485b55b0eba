//! LibreTranslate backend
//!
//! Talks to a self-hosted LibreTranslate instance over its JSON API.

use super::Translator;
use crate::language::Language;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Clone)]
pub struct LibreEngine {
    base_url: String,
}

impl LibreEngine {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Translator for LibreEngine {
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/translate", self.base_url))
            .json(&serde_json::json!({
                "q": text,
                "source": source.code(),
                "target": target.code(),
                "format": "text"
            }))
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ LibreTranslate API Error ({}): {}", status, body_text);
            return Err(anyhow::anyhow!("LibreTranslate returned status {}", status));
        }

        debug!("🌐 LibreTranslate raw body: {}", body_text);

        let parsed: LibreResponse = serde_json::from_str(&body_text)?;
        Ok(parsed.translated_text)
    }

    async fn health_check(&self) -> bool {
        let client = reqwest::Client::new();
        match client
            .get(format!("{}/languages", self.base_url))
            .timeout(std::time::Duration::from_secs(2))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn name(&self) -> &str {
        "libre"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let body = r#"{"translatedText":"hello world"}"#;
        let parsed: LibreResponse = serde_json::from_str(body).expect("Failed to parse");
        assert_eq!(parsed.translated_text, "hello world");
    }
}
