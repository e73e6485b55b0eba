//! MoodLens Launcher - GUI Application
//!
//! Run with: cargo run --bin moodlens-gui

use iced::application;

// Import from the library
use moodlens::gui::MoodLensApp;

fn main() -> iced::Result {
    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    application("MoodLens", MoodLensApp::update, MoodLensApp::view)
        .theme(MoodLensApp::theme)
        .scale_factor(MoodLensApp::scale_factor)
        .window_size((400.0, 700.0))
        .run_with(MoodLensApp::new)
}
