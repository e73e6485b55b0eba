//! Mock Translator for Testing
//!
//! Records all translation calls and can be told to fail.

use anyhow::Result;
use async_trait::async_trait;
use moodlens::language::Language;
use std::sync::{Arc, Mutex};

/// Mock translator that records calls and returns a canned translation
#[derive(Debug)]
pub struct MockTranslator {
    /// Every (text, source, target) this translator was asked to translate
    pub calls: Arc<Mutex<Vec<(String, Language, Language)>>>,
    /// The translation to return
    pub output: Arc<Mutex<String>>,
    /// Simulate failure on every call
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockTranslator {
    pub fn new(output: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            output: Arc::new(Mutex::new(output.to_string())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn failing() -> Self {
        let mock = Self::new("");
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl moodlens::translate::Translator for MockTranslator {
    async fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), source, target));
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock translation failure"));
        }
        Ok(self.output.lock().unwrap().clone())
    }

    async fn health_check(&self) -> bool {
        !*self.should_fail.lock().unwrap()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
