//! System fallback TTS engine

use super::TtsEngine;
use anyhow::Result;
use async_trait::async_trait;
use std::process::Command;
use tracing::debug;

#[derive(Debug)]
pub struct SystemEngine {
    /// Words per minute passed to the system synthesizer
    rate: u32,
}

impl SystemEngine {
    pub fn new(rate: u32) -> Self {
        Self { rate }
    }
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        debug!("System speaking at rate {}: {}", self.rate, text);

        // Try spd-say (speech-dispatcher) or espeak-ng.
        // spd-say takes a relative rate in -100..100, espeak-ng takes wpm.
        let spd_rate = ((self.rate as i64 - 175) * 100 / 175).clamp(-100, 100);
        if Command::new("spd-say")
            .arg("-r")
            .arg(spd_rate.to_string())
            .arg(text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        if Command::new("espeak-ng")
            .arg("-s")
            .arg(self.rate.to_string())
            .arg(text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried spd-say, espeak-ng)"
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}
