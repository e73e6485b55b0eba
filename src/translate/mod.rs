//! Translation Module
//!
//! Provides a unified interface for machine translation backends.

use crate::config::Config;
use crate::language::Language;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod libre;
pub mod mymemory;

/// Trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync + std::fmt::Debug {
    /// Translate text from the source to the target language
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String>;

    /// Health check - verify the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Factory to create the configured translation backend
///
/// Returns `None` when translation is disabled; the workflow then analyzes
/// the original text unmodified.
pub fn create_translator(config: &Config) -> Option<Arc<dyn Translator>> {
    let translator: Arc<dyn Translator> = match config.translate_engine.as_str() {
        "mymemory" => {
            info!("🛠️ Using MyMemory translation backend");
            Arc::new(mymemory::MyMemoryEngine::new(&config.mymemory_url))
        }
        "libre" => {
            info!("🛠️ Using LibreTranslate backend ({})", config.libre_url);
            Arc::new(libre::LibreEngine::new(&config.libre_url))
        }
        "none" => {
            info!("🌐 Translation disabled");
            return None;
        }
        other => {
            warn!("⚠️ Unknown translation engine '{}', translation disabled", other);
            return None;
        }
    };
    Some(translator)
}
