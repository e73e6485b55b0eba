//! MoodLens Library
//!
//! Core modules for the MoodLens sentiment analyzer.

pub mod analysis;
pub mod config;
pub mod error;
pub mod gui;
pub mod history;
pub mod language;
pub mod sentiment;
pub mod translate;
pub mod tts;
