//! MyMemory translation backend
//!
//! Free public REST API, no key required for low volumes.

use super::Translator;
use crate::error::MoodError;
use crate::language::Language;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Clone)]
pub struct MyMemoryEngine {
    base_url: String,
}

impl MyMemoryEngine {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Translator for MyMemoryEngine {
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let url = format!(
            "{}/get?q={}&langpair={}|{}",
            self.base_url,
            urlencoding::encode(text),
            source.code(),
            target.code()
        );

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ MyMemory API Error ({}): {}", status, body_text);
            return Err(MoodError::Translate(format!("MyMemory returned status {}", status)).into());
        }

        debug!("🌐 MyMemory raw body: {}", body_text);

        let parsed: MyMemoryResponse = serde_json::from_str(&body_text)?;
        let translated = parsed.response_data.translated_text;
        if translated.trim().is_empty() {
            return Err(MoodError::Translate("empty translation returned".to_string()).into());
        }
        Ok(translated)
    }

    async fn health_check(&self) -> bool {
        let client = reqwest::Client::new();
        let url = format!("{}/get?q=hello&langpair=en|es", self.base_url);
        match client
            .get(&url)
            .timeout(std::time::Duration::from_secs(2))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn name(&self) -> &str {
        "mymemory"
    }
}
