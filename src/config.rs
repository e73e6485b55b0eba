use crate::language::Language;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Translation
    pub translate_engine: String,
    pub libre_url: String,
    pub mymemory_url: String,

    // Sentiment
    pub sentiment_engine: String,

    // Speech
    pub tts_engine: String,
    pub speech_rate: u32,
    pub speak_results: bool,

    // UI defaults
    pub default_source_language: Language,
    pub default_target_language: Language,
    pub gui_scaling: f64,

    // Meta
    pub log_level: String,
    #[serde(default = "default_true")]
    pub history_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_engine: "mymemory".to_string(),
            libre_url: "http://localhost:5000".to_string(),
            mymemory_url: "https://api.mymemory.translated.net".to_string(),
            sentiment_engine: "lexicon".to_string(),
            tts_engine: "system".to_string(),
            speech_rate: 150,
            speak_results: true,
            default_source_language: Language::Persian,
            default_target_language: Language::English,
            gui_scaling: 1.0,
            log_level: "INFO".to_string(),
            history_enabled: true,
        }
    }
}

impl Config {
    /// Load config from file or create default
    pub fn load() -> Result<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodlens")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.translate_engine, "mymemory");
        assert_eq!(config.sentiment_engine, "lexicon");
        assert_eq!(config.tts_engine, "system");
        assert_eq!(config.speech_rate, 150);
        assert_eq!(config.default_source_language, Language::Persian);
        assert_eq!(config.default_target_language, Language::English);
        assert!(config.history_enabled);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config.translate_engine, restored.translate_engine);
        assert_eq!(
            config.default_source_language,
            restored.default_source_language
        );
        assert_eq!(config.speech_rate, restored.speech_rate);
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        // Config::load uses graceful degradation - this tests the parsing path
        let corrupt_json = "{ not valid json";
        let result: Result<Config, _> = serde_json::from_str(corrupt_json);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_load_and_corrupt_recovery() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        std::env::set_var("XDG_CONFIG_HOME", tmp.path());

        let mut config = Config::default();
        config.translate_engine = "libre".to_string();
        config.speech_rate = 120;
        config.save().expect("Failed to save");

        let loaded = Config::load().expect("Failed to load");
        assert_eq!(loaded.translate_engine, "libre");
        assert_eq!(loaded.speech_rate, 120);

        // Corrupt the file: load falls back to defaults and keeps a backup
        std::fs::write(config_path(), "{ not valid json").expect("Failed to corrupt");
        let recovered = Config::load().expect("Load must not fail on corrupt file");
        assert_eq!(recovered.translate_engine, "mymemory");
        assert!(config_path().with_extension("json.corrupt").exists());

        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    fn test_config_missing_fields_use_serde_defaults() {
        // history_enabled was added later; older files omit it
        let json = serde_json::to_string(&Config::default()).unwrap();
        let trimmed = json.replace("\"history_enabled\":true,", "");
        let trimmed = trimmed.replace(",\"history_enabled\":true", "");
        let restored: Config = serde_json::from_str(&trimmed).expect("Failed to deserialize");
        assert!(restored.history_enabled);
    }
}
