pub mod mock_scorer;
pub mod mock_translator;
pub mod mock_tts;
