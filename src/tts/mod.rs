//! TTS (Text-to-Speech) Module
//!
//! Provides a unified interface for the spoken-readout backends.

use crate::config::Config;
use crate::error::MoodError;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod speechd;
pub mod system;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text
    async fn speak(&self, text: &str) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine
///
/// Errors here mean the spoken readout is unavailable; results are still
/// delivered silently.
pub async fn create_engine(config: Config) -> Result<Arc<dyn TtsEngine>> {
    info!("🛠️ Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "speechd_ng" | "speechd" => {
            info!("  - Using Speechd TTS");
            let client = speechd::SpeechdEngine::connect().await?;
            Arc::new(client)
        }
        "system" => {
            info!("  - Using System TTS (rate {})", config.speech_rate);
            Arc::new(system::SystemEngine::new(config.speech_rate))
        }
        "none" => {
            return Err(MoodError::Tts("TTS disabled in config".to_string()).into());
        }
        other => {
            warn!("  - Unknown engine '{}', falling back to System", other);
            Arc::new(system::SystemEngine::new(config.speech_rate))
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    Ok(engine)
}
